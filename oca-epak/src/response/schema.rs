use crate::canonical_key::canonical_key;
use crate::errors::response_error::ResponseError;
use crate::value::Value;

const DESCRIPTOR_PATH: [&str; 4] = ["element", "complex_type", "choice", "element"];

/// Lookup keys read from a response schema: the dataset key and the keys of its tables, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultKeys {
    pub result_key: String,
    pub topic_keys: Vec<String>,
}

/// Reads the dataset identifier and table names from a schema node, in their canonical forms.
pub fn interpret(schema: &Value) -> Result<ResultKeys, ResponseError> {
    let id = schema
        .get("@id")
        .and_then(Value::as_text)
        .ok_or_else(|| malformed("schema has no @id"))?;

    let descriptors = schema
        .path(&DESCRIPTOR_PATH)
        .filter(|descriptors| !descriptors.is_null())
        .ok_or_else(|| malformed("schema has no element/complex_type/choice/element descriptors"))?;

    let topic_keys = descriptors
        .one_or_many()
        .into_iter()
        .map(|descriptor| {
            descriptor
                .get("@name")
                .and_then(Value::as_text)
                .map(canonical_key)
                .ok_or_else(|| malformed("element descriptor has no @name"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if topic_keys.is_empty() {
        return Err(malformed("schema declares no tables"));
    }

    Ok(ResultKeys {
        result_key: canonical_key(id),
        topic_keys,
    })
}

fn malformed(reason: &str) -> ResponseError {
    ResponseError::MalformedSchema {
        reason: reason.to_string(),
    }
}
