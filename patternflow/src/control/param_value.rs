use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::schema::WidgetKind;

/// The value a single parameter holds in [`super::Params`]
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Slider values
    Float(f32),
    /// Toggle values
    Bool(bool),
    /// Selected option of a palette, color or select widget
    Index(usize),
    /// Image data URI (empty when nothing has been uploaded)
    Text(String),
}

impl ParamValue {
    /// Slider-compatible read. Indexes are widened so that integer
    /// authored defaults still display.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Index(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let ParamValue::Bool(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Option-compatible read. Non-negative integral floats are accepted.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            ParamValue::Index(v) => Some(*v),
            ParamValue::Float(v) if *v >= 0.0 && v.fract() == 0.0 => {
                Some(*v as usize)
            }
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let ParamValue::Text(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Converts an authored value into the value domain of `kind`, e.g. a
    /// YAML `speed: 2` reads as `Index(2)` but a slider needs `Float(2.0)`.
    /// Returns `None` when no sensible conversion exists.
    pub fn coerce_for(&self, kind: &WidgetKind) -> Option<ParamValue> {
        match kind {
            WidgetKind::Slider { .. } => self.as_float().map(Self::Float),
            WidgetKind::Toggle => self.as_bool().map(Self::Bool),
            WidgetKind::Palette { .. }
            | WidgetKind::Color { .. }
            | WidgetKind::Select { .. } => self.as_index().map(Self::Index),
            WidgetKind::ImageUpload => {
                self.as_text().map(|s| Self::Text(s.to_string()))
            }
        }
    }

    /// True when the value already belongs to `kind`'s value domain without
    /// any conversion
    pub fn fits(&self, kind: &WidgetKind) -> bool {
        matches!(
            (self, kind),
            (ParamValue::Float(_), WidgetKind::Slider { .. })
                | (ParamValue::Bool(_), WidgetKind::Toggle)
                | (ParamValue::Index(_), WidgetKind::Palette { .. })
                | (ParamValue::Index(_), WidgetKind::Color { .. })
                | (ParamValue::Index(_), WidgetKind::Select { .. })
                | (ParamValue::Text(_), WidgetKind::ImageUpload)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Index(_) => "index",
            ParamValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Index(v) => write!(f, "{}", v),
            ParamValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::Float(0.0)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value as f32)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Float(v) => serializer.serialize_f32(*v),
            ParamValue::Bool(v) => serializer.serialize_bool(*v),
            ParamValue::Index(v) => serializer.serialize_u64(*v as u64),
            ParamValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Value {
            Bool(bool),
            Int(u64),
            Float(f64),
            String(String),
        }

        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Int(i) => ParamValue::Index(i as usize),
            Value::Float(f) => ParamValue::Float(f as f32),
            Value::String(s) => ParamValue::Text(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> WidgetKind {
        WidgetKind::Slider {
            min: 0.0,
            max: 10.0,
            step: 1.0,
        }
    }

    fn select() -> WidgetKind {
        WidgetKind::Select {
            options: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_deserialize_numbers() {
        let values: Vec<ParamValue> =
            serde_json::from_str(r#"[2, 2.5, -3, true, "x"]"#).unwrap();

        assert_eq!(
            values,
            vec![
                ParamValue::Index(2),
                ParamValue::Float(2.5),
                ParamValue::Float(-3.0),
                ParamValue::Bool(true),
                ParamValue::Text("x".into()),
            ]
        );
    }

    #[test]
    fn test_coerce_for_slider_widens_index() {
        assert_eq!(
            ParamValue::Index(4).coerce_for(&slider()),
            Some(ParamValue::Float(4.0))
        );
        assert_eq!(ParamValue::Bool(true).coerce_for(&slider()), None);
    }

    #[test]
    fn test_coerce_for_choice_narrows_integral_float() {
        assert_eq!(
            ParamValue::Float(1.0).coerce_for(&select()),
            Some(ParamValue::Index(1))
        );
        assert_eq!(ParamValue::Float(1.5).coerce_for(&select()), None);
        assert_eq!(ParamValue::Float(-1.0).coerce_for(&select()), None);
    }

    #[test]
    fn test_fits() {
        assert!(ParamValue::Float(1.0).fits(&slider()));
        assert!(!ParamValue::Index(1).fits(&slider()));
        assert!(ParamValue::Index(1).fits(&select()));
        assert!(ParamValue::Text(String::new()).fits(&WidgetKind::ImageUpload));
    }
}
