/// Errors when extracting a result from an ASMX DataSet response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    #[error("Remote service responded with:\n{description}")]
    RemoteRejection { description: String },
    #[error("Unexpected response shape: {reason}")]
    UnexpectedResponseShape { reason: String },
    #[error("Malformed response schema: {reason}")]
    MalformedSchema { reason: String },
}
