use std::fmt;

use indexmap::IndexMap;
use log::error;
use serde::{Deserialize, Serialize};

use super::param_value::ParamValue;
use crate::core::util::bool_to_f32;
use crate::warn_once;

/// The parameter store: the live mapping from parameter name to current
/// value for one open pattern.
///
/// Keeps insertion order (the order defaults were authored in) for stable
/// serialization; equality ignores order.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for authoring defaults
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.shift_remove(name)
    }

    pub fn float(&self, name: &str) -> f32 {
        self.values
            .get(name)
            .and_then(ParamValue::as_float)
            .unwrap_or_else(|| {
                error!("No float for `{}`. Returning 0.0.", name);
                0.0
            })
    }

    pub fn bool(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(ParamValue::as_bool)
            .unwrap_or_else(|| {
                error!("No bool for `{}`. Returning false.", name);
                false
            })
    }

    pub fn index(&self, name: &str) -> usize {
        self.values
            .get(name)
            .and_then(ParamValue::as_index)
            .unwrap_or_else(|| {
                error!("No index for `{}`. Returning 0.", name);
                0
            })
    }

    pub fn text(&self, name: &str) -> String {
        self.values
            .get(name)
            .and_then(ParamValue::as_text)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| {
                error!("No text for `{}`. Returning empty.", name);
                String::new()
            })
    }

    /// Reads any numeric-ish parameter as `f32`: toggles become 0.0 or 1.0
    /// and option indexes their position. Handy for render code that packs
    /// everything into float uniforms. Text values are not coercible.
    pub fn get(&self, name: &str) -> f32 {
        match self.values.get(name) {
            Some(ParamValue::Float(v)) => *v,
            Some(ParamValue::Index(v)) => *v as f32,
            Some(ParamValue::Bool(v)) => bool_to_f32(*v),
            _ => {
                warn_once!(
                    "`get` could not retrieve a value for `{}`. Returning 0.0",
                    name
                );
                0.0
            }
        }
    }

    /// Overwrites an existing value. Unknown names are rejected because the
    /// store must hold exactly the pattern's parameter names.
    pub(crate) fn set(&mut self, name: &str, value: ParamValue) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<S: Into<String>, V: Into<ParamValue>> FromIterator<(S, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a = Params::new().with("speed", 2.0).with("glow", true);
        let b = Params::new().with("glow", true).with("speed", 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_rejects_unknown_names() {
        let mut params = Params::new().with("speed", 2.0);
        assert!(params.set("speed", ParamValue::Float(3.0)));
        assert!(!params.set("nope", ParamValue::Float(3.0)));
        assert_eq!(params.len(), 1);
        assert_eq!(params.float("speed"), 3.0);
    }

    #[test]
    fn test_typed_reads_fall_back() {
        let params = Params::new()
            .with("speed", 2.0)
            .with("glow", true)
            .with("palette", 3usize);

        assert_eq!(params.float("missing"), 0.0);
        assert!(!params.bool("speed"));
        assert_eq!(params.index("palette"), 3);
        assert_eq!(params.text("speed"), "");
    }

    #[test]
    fn test_get_coerces_bools_and_indexes() {
        let params = Params::new()
            .with("glow", true)
            .with("palette", 3usize)
            .with("image", "");

        assert_eq!(params.get("glow"), 1.0);
        assert_eq!(params.get("palette"), 3.0);
        assert_eq!(params.get("image"), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let params = Params::new()
            .with("speed", 2.5)
            .with("glow", true)
            .with("palette", 1usize);

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"speed":2.5,"glow":true,"palette":1}"#);
    }
}
