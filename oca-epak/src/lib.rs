//! A client SDK for OCA's e-Pak web service: pickup and delivery orders, rates, tracking and reference data.
//!
//! Every operation answers with an ASMX DataSet, a schema describing the tables followed by a DiffGram holding
//! the rows. The [response] module extracts the rows generically, so results come back as [Value] trees with
//! snake case keys, or as an [SdkError::RemoteRejection] when OCA refuses the request.
//! # Usage
//! ```no_run
//! use oca_epak::Client;
//! use oca_epak::models::shipping_rate_query::ShippingRateQuery;
//!
//! # async fn run() -> Result<(), oca_epak::SdkError> {
//! let client = Client::new("hey@you.com".to_string(), "654321".to_string());
//!
//! if client.check_credentials().await? {
//!     let rate = client
//!         .get_shipping_rate(&ShippingRateQuery {
//!             total_weight: "20".to_string(),
//!             total_volume: "0.0015".to_string(),
//!             origin_zip_code: "1414".to_string(),
//!             destination_zip_code: "5403".to_string(),
//!             declared_value: "100".to_string(),
//!             package_quantity: "1".to_string(),
//!             cuit: "30-99999999-7".to_string(),
//!             operation_code: "77790".to_string(),
//!         })
//!         .await?;
//!
//!     println!("{:?}", rate.get("total"));
//! }
//!
//! for province in client.provinces().await? {
//!     println!("{:?}", province.get("descripcion"));
//! }
//! # Ok(())
//! # }
//! ```
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces).
//! They expose a blocking `EpakClient` returning results as JSON.
//!

pub mod canonical_key;
pub mod client;
pub mod config;
pub mod enums;
pub mod errors;
mod exports;
pub mod http;
pub mod models;
pub mod response;
pub mod value;

uniffi::setup_scaffolding!();

pub use client::Client;
pub use config::ClientConfig;
pub use errors::response_error::ResponseError;
pub use errors::sdk_error::SdkError;
pub use http::transport::{RawResponse, Transport};
pub use http::xml::envelope::SoapResponse;
pub use value::Value;
