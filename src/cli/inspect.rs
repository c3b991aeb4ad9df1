//! Inspect command implementation.
//!
//! Parses a blueprint and reports what it contains: object count, the
//! extent of the sign grid and which colour properties are set.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::codec::{BlueprintCodec, JsonLinesCodec};
use crate::error::{Result, SignError};
use crate::output::{display_path, plural, Printer};
use crate::types::{Blueprint, COLOR_KEYS};

/// Summarize a blueprint file
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Blueprint main file (.sbp)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Config file (default: the .sbpcfg next to the blueprint, if any)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Range covered by sign positions along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

/// What a blueprint contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintSummary {
    pub name: String,
    pub objects: usize,
    /// Object count per type path.
    pub types: BTreeMap<String, usize>,
    /// Horizontal extent (translation y).
    pub horizontal: Option<Extent>,
    /// Vertical extent (translation z).
    pub vertical: Option<Extent>,
    /// Objects carrying each colour property.
    pub colour_properties: BTreeMap<String, usize>,
    /// Number of distinct foreground colours.
    pub distinct_colours: usize,
}

impl BlueprintSummary {
    pub fn of(blueprint: &Blueprint) -> Self {
        let mut types = BTreeMap::new();
        let mut colour_properties: BTreeMap<String, usize> =
            COLOR_KEYS.iter().map(|key| (key.to_string(), 0)).collect();
        let mut colours = BTreeSet::new();
        let mut horizontal: Option<Extent> = None;
        let mut vertical: Option<Extent> = None;

        for object in &blueprint.objects {
            *types.entry(object.type_path.clone()).or_insert(0) += 1;

            for key in COLOR_KEYS {
                if let Some(colour) = object.color(key) {
                    *colour_properties.entry(key.to_string()).or_insert(0) += 1;
                    if key == COLOR_KEYS[0] {
                        colours.insert(colour.to_colour().to_string());
                    }
                }
            }

            let translation = object.transform.translation;
            horizontal = Some(widen(horizontal, translation.y));
            vertical = Some(widen(vertical, translation.z));
        }

        Self {
            name: blueprint.name.clone(),
            objects: blueprint.objects.len(),
            types,
            horizontal,
            vertical,
            colour_properties,
            distinct_colours: colours.len(),
        }
    }
}

fn widen(extent: Option<Extent>, value: f64) -> Extent {
    match extent {
        Some(e) => Extent {
            min: e.min.min(value),
            max: e.max.max(value),
        },
        None => Extent {
            min: value,
            max: value,
        },
    }
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<BlueprintSummary> {
    let main = read_file(&args.file)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.file.with_extension("sbpcfg"));
    let config = if config_path.is_file() {
        read_file(&config_path)?
    } else {
        printer.verbose(
            "Config",
            &format!("{} not found, skipping", display_path(&config_path)),
        );
        Vec::new()
    };

    let name = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("blueprint");
    let blueprint = JsonLinesCodec.parse(name, &main, &config)?;
    let summary = BlueprintSummary::of(&blueprint);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| SignError::Encode {
            message: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        report(&summary, &args.file, printer);
    }

    Ok(summary)
}

fn report(summary: &BlueprintSummary, path: &Path, printer: &Printer) {
    printer.status(
        "Inspected",
        &format!(
            "{} ({})",
            display_path(path),
            plural(summary.objects, "object", "objects")
        ),
    );

    for (type_path, count) in &summary.types {
        printer.info("Type", &format!("{} x{}", type_path, count));
    }

    if let (Some(h), Some(v)) = (summary.horizontal, summary.vertical) {
        printer.info(
            "Extent",
            &format!("y {}..{}, z {}..{}", h.min, h.max, v.min, v.max),
        );
    }

    for (key, count) in &summary.colour_properties {
        if *count < summary.objects {
            printer.warning(
                "Missing",
                &format!("{} on {} of {}", key, summary.objects - count, summary.objects),
            );
        }
    }

    printer.info(
        "Colours",
        &plural(summary.distinct_colours, "distinct colour", "distinct colours"),
    );
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| SignError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinearColor, SignObject};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sign(y: f64, z: f64, colour: LinearColor) -> SignObject {
        let mut sign = SignObject::new("Sign", "Sign_1")
            .with_color("mForegroundColor", colour)
            .with_color("mBackgroundColor", colour);
        sign.transform.translation.y = y;
        sign.transform.translation.z = z;
        sign
    }

    #[test]
    fn test_summary_of_blueprint() {
        let red = LinearColor::new(1.0, 0.0, 0.0, 1.0);
        let blue = LinearColor::new(0.0, 0.0, 1.0, 1.0);
        let mut bp = Blueprint::new("Art");
        bp.objects = vec![sign(-50.0, 100.0, red), sign(50.0, 50.0, red), sign(0.0, 200.0, blue)];

        let summary = BlueprintSummary::of(&bp);

        assert_eq!(summary.objects, 3);
        assert_eq!(summary.types.get("Sign"), Some(&3));
        assert_eq!(summary.horizontal, Some(Extent { min: -50.0, max: 50.0 }));
        assert_eq!(summary.vertical, Some(Extent { min: 50.0, max: 200.0 }));
        assert_eq!(summary.colour_properties.get("mForegroundColor"), Some(&3));
        assert_eq!(summary.colour_properties.get("mAuxilaryColor"), Some(&0));
        assert_eq!(summary.distinct_colours, 2);
    }

    #[test]
    fn test_summary_of_empty_blueprint() {
        let summary = BlueprintSummary::of(&Blueprint::new("Empty"));
        assert_eq!(summary.objects, 0);
        assert!(summary.horizontal.is_none());
        assert_eq!(summary.distinct_colours, 0);
    }

    #[test]
    fn test_inspect_file_with_sibling_config() {
        let dir = tempdir().unwrap();
        let mut bp = Blueprint::new("Art");
        bp.objects = vec![sign(0.0, 50.0, LinearColor::new(1.0, 1.0, 1.0, 1.0))];
        bp.config = serde_json::json!({ "description": "art" });
        let files = JsonLinesCodec.write(&bp).unwrap().into_files().unwrap();

        let path = dir.path().join("Art.sbp");
        fs::write(&path, &files.main).unwrap();
        fs::write(dir.path().join("Art.sbpcfg"), &files.config).unwrap();

        let args = InspectArgs {
            file: path,
            config: None,
            json: false,
        };
        let summary = run(args, &Printer::new()).unwrap();

        assert_eq!(summary.name, "Art");
        assert_eq!(summary.objects, 1);
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        let args = InspectArgs {
            file: dir.path().join("nope.sbp"),
            config: None,
            json: false,
        };
        assert!(matches!(run(args, &Printer::new()), Err(SignError::Io { .. })));
    }
}
