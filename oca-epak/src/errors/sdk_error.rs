use crate::errors::response_error::ResponseError;

/// General errors the SDK might return.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum SdkError {
    /// The carrier rejected the request. The description is the one sent by the web service.
    #[error("Remote service responded with:\n{description}")]
    RemoteRejection { description: String },
    #[error("Unexpected response shape: {reason}")]
    UnexpectedResponseShape { reason: String },
    #[error("Malformed response schema: {reason}")]
    MalformedSchema { reason: String },
    #[error("An invalid argument was sent")]
    InvalidArgument,
    #[error("Error transmitting data")]
    TransmittingError,
    #[error("Error receiving data")]
    ReceivingError,
    #[error("Could not parse response XML: {reason}")]
    InvalidResponseXml { reason: String },
    #[error("SOAP fault {code}: {fault_string}")]
    SoapFault { code: String, fault_string: String },
    #[error("Server returned HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("Could not serialize result")]
    SerializationError,
    #[error("Could not create runtime")]
    CouldNotCreateRuntime,
}

impl From<ResponseError> for SdkError {
    fn from(error: ResponseError) -> Self {
        match error {
            ResponseError::RemoteRejection { description } => {
                SdkError::RemoteRejection { description }
            }

            ResponseError::UnexpectedResponseShape { reason } => {
                SdkError::UnexpectedResponseShape { reason }
            }

            ResponseError::MalformedSchema { reason } => SdkError::MalformedSchema { reason },
        }
    }
}
