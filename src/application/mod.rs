//! Application layer: encode/decode pipelines and services
//!
//! This layer orchestrates domain logic; it performs no I/O.

pub mod codec;
pub mod error;
pub mod services;

pub use codec::{
    decode, encode, validate_morse, validate_text, LETTER_SEPARATOR, WORD_SEPARATOR,
};
pub use error::{ApplicationError, ApplicationResult};
pub use services::CodecService;
