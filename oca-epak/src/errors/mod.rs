pub mod response_error;
pub mod sdk_error;
