//! Generic extraction of results from ASMX DataSet responses.
//!
//! Every e-Pak operation answers with a `<Method>Result` element holding an XML Schema that names the dataset and
//! its tables, followed by a DiffGram holding the rows. [interpret][schema::interpret] reads the names from the
//! schema and [extract][extractor::extract] uses them to pull the rows, or the carrier's error, out of the DiffGram.

pub mod extractor;
pub mod schema;

pub use extractor::extract;
pub use schema::{ResultKeys, interpret};
