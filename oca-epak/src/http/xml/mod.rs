pub mod envelope;
pub(crate) mod request;
