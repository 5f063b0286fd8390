//! Style mappings for drawing modes
//!
//! Styles arrive from hosts as loosely typed JSON-like mappings. Each mode
//! validates them against the keys it understands before storing them, so a
//! bad assignment never replaces a good one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use geosketch_core::ModeError;

/// Reasons a style mapping is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("expected a mapping, got {0}")]
    NotAMapping(&'static str),

    #[error("{0}")]
    Malformed(String),

    #[error("'{key}' is not a hex color: {value}")]
    InvalidColor { key: &'static str, value: String },

    #[error("'{key}' must be a finite, non-negative width, got {value}")]
    InvalidWidth { key: &'static str, value: f64 },

    #[error("'{0}' is null")]
    NullValue(String),
}

impl From<StyleError> for ModeError {
    fn from(err: StyleError) -> Self {
        ModeError::InvalidStyleAssignment {
            reason: err.to_string(),
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

/// Accepts `#rgb` and `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Styles understood by the line string mode
///
/// Every key is optional; an empty mapping means "use the host defaults".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineStringStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_string_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_string_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_point_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_point_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_point_outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_point_outline_width: Option<f64>,
}

impl LineStringStyles {
    /// Parses and validates a style mapping.
    pub fn from_value(value: Value) -> Result<Self, StyleError> {
        let Value::Object(map) = &value else {
            return Err(StyleError::NotAMapping(value_kind(&value)));
        };
        // serde would read a null as an unset key
        if let Some((key, _)) = map.iter().find(|(_, v)| v.is_null()) {
            return Err(StyleError::NullValue(key.clone()));
        }
        let styles: Self =
            serde_json::from_value(value).map_err(|e| StyleError::Malformed(e.to_string()))?;
        styles.validate()?;
        Ok(styles)
    }

    /// Checks colors and widths.
    pub fn validate(&self) -> Result<(), StyleError> {
        let colors = [
            ("lineStringColor", &self.line_string_color),
            ("closingPointColor", &self.closing_point_color),
            ("closingPointOutlineColor", &self.closing_point_outline_color),
        ];
        for (key, color) in colors {
            if let Some(color) = color {
                if !is_hex_color(color) {
                    return Err(StyleError::InvalidColor {
                        key,
                        value: color.clone(),
                    });
                }
            }
        }

        let widths = [
            ("lineStringWidth", self.line_string_width),
            ("closingPointWidth", self.closing_point_width),
            ("closingPointOutlineWidth", self.closing_point_outline_width),
        ];
        for (key, width) in widths {
            if let Some(width) = width {
                if !width.is_finite() || width < 0.0 {
                    return Err(StyleError::InvalidWidth { key, value: width });
                }
            }
        }
        Ok(())
    }

    /// The styles as a mapping containing only the keys that are set.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
