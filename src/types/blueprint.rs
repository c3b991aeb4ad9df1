//! Blueprint object tree.
//!
//! This is the part of a parsed blueprint the generator works with: an
//! ordered list of objects, each with a transform and a property map.
//! Fields the generator does not touch are carried through untouched in
//! `extra` maps so a parse/write cycle does not lose data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LinearColor;

/// Colour properties a sign may carry. Not every template has all three.
pub const COLOR_KEYS: [&str; 3] = ["mForegroundColor", "mBackgroundColor", "mAuxilaryColor"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    #[serde(default)]
    pub rotation: Quaternion,
    #[serde(default)]
    pub translation: Vector3,
    #[serde(default = "unit_scale")]
    pub scale3d: Vector3,
}

fn unit_scale() -> Vector3 {
    Vector3::new(1.0, 1.0, 1.0)
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Quaternion::default(),
            translation: Vector3::default(),
            scale3d: unit_scale(),
        }
    }
}

/// A colour-valued object property.
///
/// Fields beside `value` are kept in `extra`. The `value` itself is always
/// read and written as exactly `r`, `g`, `b`, `a`: anything else inside it
/// is dropped on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProperty {
    pub value: LinearColor,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorProperty {
    pub fn new(value: LinearColor) -> Self {
        Self {
            value,
            extra: Map::new(),
        }
    }
}

/// An object property. Only colour properties are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Color(ColorProperty),
    Other(Value),
}

/// One placed object of a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignObject {
    pub type_path: String,
    #[serde(default)]
    pub instance_name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SignObject {
    pub fn new(type_path: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            type_path: type_path.into(),
            instance_name: instance_name.into(),
            transform: Transform::default(),
            properties: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Add a colour property (builder style).
    pub fn with_color(mut self, key: impl Into<String>, value: LinearColor) -> Self {
        self.properties
            .insert(key.into(), Property::Color(ColorProperty::new(value)));
        self
    }

    /// The colour stored under `key`, if it is a colour property.
    pub fn color(&self, key: &str) -> Option<LinearColor> {
        match self.properties.get(key) {
            Some(Property::Color(prop)) => Some(prop.value),
            _ => None,
        }
    }

    /// Overwrite an existing colour property.
    ///
    /// Returns false (and changes nothing) when the object has no colour
    /// property under `key`.
    pub fn set_color(&mut self, key: &str, value: LinearColor) -> bool {
        match self.properties.get_mut(key) {
            Some(Property::Color(prop)) => {
                prop.value = value;
                true
            }
            _ => false,
        }
    }
}

/// An in-memory blueprint document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Blueprint {
    pub name: String,
    /// Header fields other than the name, kept opaque.
    pub header: Map<String, Value>,
    /// Contents of the blueprint's config file, kept opaque.
    pub config: Value,
    pub objects: Vec<SignObject>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
