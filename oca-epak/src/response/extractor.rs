use crate::errors::response_error::ResponseError;
use crate::http::xml::envelope::SoapResponse;
use crate::response::schema::interpret;
use crate::value::Value;
use log::debug;

/// Dataset identifier the web service uses when it rejects a request.
pub const ERROR_RESULT_KEY: &str = "errores";

/// Extracts the result of `method` from a response.
///
/// `method` is the canonical method key, e.g. `get_provincias`. The result is the single table of the dataset
/// when the schema declares one, or a map from table key to table when it declares several; tables missing from
/// the DiffGram come back as [Null][Value::Null]. A response with no rows at all is [Null][Value::Null] too.
///
/// # Errors
/// [RemoteRejection][ResponseError::RemoteRejection] when the dataset is the carrier's error dataset,
/// [UnexpectedResponseShape][ResponseError::UnexpectedResponseShape] when the body doesn't hold a result for
/// `method`, and [MalformedSchema][ResponseError::MalformedSchema] when the schema can't be read.
pub fn extract(response: &SoapResponse, method: &str) -> Result<Value, ResponseError> {
    let result = method_result(response.body(), method)?;
    let schema = result
        .get("schema")
        .ok_or_else(|| unexpected(format!("{method}_result has no schema")))?;
    let keys = interpret(schema)?;

    let payload = result.get("diffgram");

    if keys.result_key == ERROR_RESULT_KEY {
        return Err(rejection(payload, &keys.result_key, &keys.topic_keys[0]));
    }

    let Some(body) = payload
        .and_then(|payload| payload.get(&keys.result_key))
        .filter(|body| !body.is_null())
    else {
        debug!("{method}: no {} in diffgram", keys.result_key);
        return Ok(Value::Null);
    };

    if keys.topic_keys.len() > 1 {
        Ok(Value::map(keys.topic_keys.iter().map(|key| {
            (key.clone(), body.get(key).cloned().unwrap_or_default())
        })))
    } else {
        Ok(body.get(&keys.topic_keys[0]).cloned().unwrap_or_default())
    }
}

fn method_result<'a>(body: &'a Value, method: &str) -> Result<&'a Value, ResponseError> {
    let response_key = format!("{method}_response");
    let result_key = format!("{method}_result");

    body.get(&response_key)
        .ok_or_else(|| unexpected(format!("body has no {response_key}")))?
        .get(&result_key)
        .ok_or_else(|| unexpected(format!("{response_key} has no {result_key}")))
}

fn rejection(payload: Option<&Value>, result_key: &str, topic_key: &str) -> ResponseError {
    let error = payload
        .and_then(|payload| payload.get(result_key))
        .and_then(|errors| errors.get(topic_key))
        .and_then(|error| error.one_or_many().into_iter().next())
        .and_then(|error| error.get("description"))
        .and_then(Value::as_text);

    match error {
        Some(description) => ResponseError::RemoteRejection {
            description: description.to_string(),
        },
        None => unexpected(format!(
            "{result_key}/{topic_key} error has no description"
        )),
    }
}

fn unexpected(reason: String) -> ResponseError {
    ResponseError::UnexpectedResponseShape { reason }
}
