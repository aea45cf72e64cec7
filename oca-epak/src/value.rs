use indexmap::IndexMap;
use serde::Serialize;

/// A generic tree built from a SOAP response. Element names are stored as canonical keys, attributes as `@name`.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Builds a [Map][Value::Map] from key/value pairs, keeping their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Looks up a key. Anything that isn't a map has no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Walks a nested key path, returning the node at its end.
    pub fn path(&self, path: &[&str]) -> Option<&Value> {
        let mut current = self;
        for segment in path {
            current = current.get(segment)?;
        }

        Some(current)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Views the node as a sequence. XML collapses a single repeated element into a bare node, so a lone node is
    /// a sequence of one.
    pub fn one_or_many(&self) -> Vec<&Value> {
        match self {
            Value::List(list) => list.iter().collect(),
            other => vec![other],
        }
    }

    /// Turns an extracted result into rows: nothing for [Null][Value::Null], one row for a bare node.
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Value::Null => Vec::new(),
            Value::List(list) => list,
            other => vec![other],
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
