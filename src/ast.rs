use std::collections::HashMap;

/// A replacement value supplied by the caller.
///
/// Integers take part in pluralisation; text only substitutes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(count) => Some(*count),
            Value::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(count) => write!(f, "{}", count),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for Value {
    fn from(count: i64) -> Self {
        Value::Int(count)
    }
}

impl From<i32> for Value {
    fn from(count: i32) -> Self {
        Value::Int(count as i64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// Values addressed by the text inside a placeholder's braces.
///
/// Positional construction assigns the keys "0", "1", ... so that `{0}`
/// finds the first value; named keys work the same way via `with_value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements(pub HashMap<String, Value>);

impl Replacements {
    pub fn new() -> Self {
        Replacements(HashMap::new())
    }

    pub fn with_value(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Replacements {
    fn from(values: Vec<T>) -> Self {
        let mut replacements = Replacements::new();
        for (index, value) in values.into_iter().enumerate() {
            replacements.with_value(&index.to_string(), value);
        }
        replacements
    }
}

/// A `{...}` token found in a phrase key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `{0}`: substitutes the value stored under the body text.
    Simple { token: String, key: String },
    /// `{0|s}`: substitutes the suffix when the value is an integer other
    /// than one, nothing otherwise.
    Plural {
        token: String,
        key: String,
        suffix: String,
    },
}

impl Placeholder {
    /// Classify a bracketed token by its inner body. Bodies split into
    /// key and suffix on the first `|`.
    pub fn new(token: &str, body: &str) -> Self {
        match body.split_once('|') {
            Some((key, suffix)) => Placeholder::Plural {
                token: token.to_owned(),
                key: key.to_owned(),
                suffix: suffix.to_owned(),
            },
            None => Placeholder::Simple {
                token: token.to_owned(),
                key: body.to_owned(),
            },
        }
    }

    /// The full bracketed text as it appears in the phrase key.
    pub fn token(&self) -> &str {
        match self {
            Placeholder::Simple { token, .. } | Placeholder::Plural { token, .. } => token,
        }
    }

    /// Resolve this placeholder against the caller's replacements.
    ///
    /// Never fails: a missing value resolves to the empty string, and a
    /// plural suffix is suppressed unless the value is an integer other
    /// than one.
    pub fn resolve(&self, replacements: &Replacements) -> String {
        match self {
            Placeholder::Simple { key, .. } => replacements
                .get(key)
                .map(|value| value.to_string())
                .unwrap_or_default(),
            Placeholder::Plural { key, suffix, .. } => {
                match replacements.get(key).and_then(Value::as_int) {
                    Some(count) if count != 1 => suffix.clone(),
                    _ => String::new(),
                }
            }
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Text("Monday".to_string()).to_string(), "Monday");
    }

    #[test]
    fn test_value_as_int() {
        assert_eq!(Value::Int(2).as_int(), Some(2));
        assert_eq!(Value::from("2").as_int(), None);
    }

    #[test]
    fn test_positional_replacements() {
        let replacements = Replacements::from(vec!["Monday", "1st"]);
        assert_eq!(replacements.get("0"), Some(&Value::from("Monday")));
        assert_eq!(replacements.get("1"), Some(&Value::from("1st")));
        assert_eq!(replacements.get("2"), None);
    }

    #[test]
    fn test_named_replacements() {
        let mut replacements = Replacements::new();
        replacements.with_value("count", 3).with_value("name", "Liam");
        assert_eq!(replacements.get("count"), Some(&Value::Int(3)));
        assert_eq!(replacements.get("name"), Some(&Value::from("Liam")));
    }

    #[test]
    fn test_simple_resolve() {
        let placeholder = Placeholder::new("{0}", "0");
        assert_eq!(
            placeholder.resolve(&Replacements::from(vec![5])),
            "5".to_string()
        );
        assert_eq!(placeholder.resolve(&Replacements::new()), "");
    }

    #[test]
    fn test_plural_resolve() {
        let placeholder = Placeholder::new("{0|s}", "0|s");
        assert_eq!(placeholder.resolve(&Replacements::from(vec![5])), "s");
        assert_eq!(placeholder.resolve(&Replacements::from(vec![1])), "");
        assert_eq!(placeholder.resolve(&Replacements::from(vec!["x"])), "");
        assert_eq!(placeholder.resolve(&Replacements::new()), "");
    }

    #[test]
    fn test_plural_splits_on_first_pipe() {
        let placeholder = Placeholder::new("{0|s|x}", "0|s|x");
        assert_eq!(
            placeholder,
            Placeholder::Plural {
                token: "{0|s|x}".to_string(),
                key: "0".to_string(),
                suffix: "s|x".to_string(),
            }
        );
    }
}
