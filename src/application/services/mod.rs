//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod codec;

pub use codec::CodecService;
