use serde::Deserialize;
use serde_json::{Map, Value};

/// Free-form key/value pairs attached to a vertex, an edge or the document.
///
/// Lookups are loose: a missing key and a key holding a value of the wrong
/// type both read as `None`, so a mistyped style key falls back to the
/// inherited value instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Returns the numeric value stored under `key`.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Returns the string value stored under `key`.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the boolean value stored under `key`.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookups() {
        let attrs = Attributes::new()
            .with("radius", 4.5)
            .with("fill", "red")
            .with("convex-hull", true);
        assert_eq!(attrs.number("radius"), Some(4.5));
        assert_eq!(attrs.string("fill"), Some("red"));
        assert_eq!(attrs.boolean("convex-hull"), Some(true));
    }

    #[test]
    fn wrong_type_reads_as_missing() {
        let attrs = Attributes::new().with("radius", "big").with("fill", 3);
        assert_eq!(attrs.number("radius"), None);
        assert_eq!(attrs.string("fill"), None);
        assert_eq!(attrs.boolean("absent"), None);
    }

    #[test]
    fn integers_read_as_numbers() {
        let attrs: Attributes = serde_json::from_str(r#"{"stroke-width": 2}"#).unwrap_or_default();
        assert_eq!(attrs.number("stroke-width"), Some(2.0));
    }
}
