//! Blueprint codec boundary.
//!
//! The generator never touches a blueprint's on-disk format directly. It
//! asks a [`BlueprintCodec`] to parse the template files into a
//! [`Blueprint`] and to write the finished document back out as a header
//! chunk, body chunks and a config file.

mod jsonl;

use crate::error::{Result, SignError};
use crate::types::Blueprint;

pub use jsonl::JsonLinesCodec;

/// Parser and writer for a blueprint file pair.
pub trait BlueprintCodec {
    /// Parse a main file and its config file into a document named `name`.
    fn parse(&self, name: &str, template: &[u8], config: &[u8]) -> Result<Blueprint>;

    /// Serialize a document.
    fn write(&self, blueprint: &Blueprint) -> Result<WrittenBlueprint>;
}

/// Raw output of [`BlueprintCodec::write`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrittenBlueprint {
    /// Main file header. A writer that never emitted one leaves this empty.
    pub header: Option<Vec<u8>>,
    /// Main file body, in write order.
    pub body: Vec<Vec<u8>>,
    /// Config file contents.
    pub config: Vec<u8>,
}

/// A finished blueprint file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintFiles {
    /// Header followed by every body chunk.
    pub main: Vec<u8>,
    pub config: Vec<u8>,
}

impl WrittenBlueprint {
    /// Join header and body into the main file.
    pub fn into_files(self) -> Result<BlueprintFiles> {
        let header = self.header.ok_or(SignError::NoHeaderProduced)?;

        let total = header.len() + self.body.iter().map(Vec::len).sum::<usize>();
        let mut main = Vec::with_capacity(total);
        main.extend_from_slice(&header);
        for chunk in &self.body {
            main.extend_from_slice(chunk);
        }

        Ok(BlueprintFiles {
            main,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_files_concatenates_in_order() {
        let written = WrittenBlueprint {
            header: Some(b"head|".to_vec()),
            body: vec![b"one|".to_vec(), b"two".to_vec()],
            config: b"cfg".to_vec(),
        };

        let files = written.into_files().unwrap();
        assert_eq!(files.main, b"head|one|two");
        assert_eq!(files.config, b"cfg");
    }

    #[test]
    fn test_into_files_header_only() {
        let written = WrittenBlueprint {
            header: Some(b"head".to_vec()),
            ..Default::default()
        };
        assert_eq!(written.into_files().unwrap().main, b"head");
    }

    #[test]
    fn test_into_files_without_header_fails() {
        let written = WrittenBlueprint {
            header: None,
            body: vec![b"orphan".to_vec()],
            config: vec![],
        };

        assert!(matches!(written.into_files(), Err(SignError::NoHeaderProduced)));
    }
}
