//! JSON-lines blueprint codec.
//!
//! Main file layout:
//!
//! ```text
//! {"name":"SignImage","headerVersion":2,...}
//! {"typePath":"...","instanceName":"...","transform":{...},"properties":{...}}
//! {"typePath":"...", ...}
//! ```
//!
//! The first non-empty line is the header, every following non-empty line
//! is one object. The config file is a single JSON value.

use serde_json::{Map, Value};

use crate::error::{Result, SignError};
use crate::types::{Blueprint, SignObject};

use super::{BlueprintCodec, WrittenBlueprint};

/// Codec for the JSON-lines interchange form of a blueprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesCodec;

impl JsonLinesCodec {
    pub fn new() -> Self {
        Self
    }
}

impl BlueprintCodec for JsonLinesCodec {
    fn parse(&self, name: &str, template: &[u8], config: &[u8]) -> Result<Blueprint> {
        let text = std::str::from_utf8(template).map_err(|e| SignError::Parse {
            message: format!("Blueprint '{}' is not valid UTF-8: {}", name, e),
            help: None,
        })?;

        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_line, header_text) = lines.next().ok_or_else(|| SignError::Parse {
            message: format!("Blueprint '{}' is empty", name),
            help: Some("The first line must be a JSON header object".to_string()),
        })?;

        let mut header: Map<String, Value> =
            serde_json::from_str(header_text).map_err(|e| SignError::Parse {
                message: format!("Invalid header on line {}: {}", header_line + 1, e),
                help: Some("The first line must be a JSON header object".to_string()),
            })?;
        // The caller picks the document name. Keep the other keys in file order.
        header.shift_remove("name");

        let objects = lines
            .map(|(index, line)| {
                serde_json::from_str::<SignObject>(line).map_err(|e| SignError::Parse {
                    message: format!("Invalid object on line {}: {}", index + 1, e),
                    help: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Blueprint {
            name: name.to_string(),
            header,
            config: parse_config(config)?,
            objects,
        })
    }

    fn write(&self, blueprint: &Blueprint) -> Result<WrittenBlueprint> {
        let mut header = Map::with_capacity(blueprint.header.len() + 1);
        header.insert("name".to_string(), Value::String(blueprint.name.clone()));
        for (key, value) in &blueprint.header {
            header.insert(key.clone(), value.clone());
        }

        let body = blueprint
            .objects
            .iter()
            .map(encode_line)
            .collect::<Result<Vec<_>>>()?;

        let config = if blueprint.config.is_null() {
            Vec::new()
        } else {
            serde_json::to_vec_pretty(&blueprint.config).map_err(encode_error)?
        };

        Ok(WrittenBlueprint {
            header: Some(encode_line(&header)?),
            body,
            config,
        })
    }
}

fn parse_config(config: &[u8]) -> Result<Value> {
    if config.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(config).map_err(|e| SignError::Parse {
        message: format!("Invalid blueprint config: {}", e),
        help: Some("The config file must hold a single JSON value".to_string()),
    })
}

fn encode_line<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut line = serde_json::to_vec(value).map_err(encode_error)?;
    line.push(b'\n');
    Ok(line)
}

fn encode_error(e: serde_json::Error) -> SignError {
    SignError::Encode {
        message: e.to_string(),
    }
}
