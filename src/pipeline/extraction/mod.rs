pub mod types;
pub mod sanitize;

pub use types::*;
pub use sanitize::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Provider reported failure: {0}")]
    Provider(String),

    #[error("Extraction did not succeed (status: {0})")]
    Failed(String),

    #[error("No text in provider output")]
    EmptyOutput,

    #[error("Malformed provider payload: {0}")]
    Payload(String),
}
