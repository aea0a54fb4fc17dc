//! Core types and errors for the GreyNoise API client.
//!
//! This crate provides the foundational types used across the GreyNoise library:
//!
//! - **Values**: [`Value`] and [`Record`], a tagged representation of API
//!   responses that keeps both key order and the runtime type of every scalar
//! - **Errors**: [`GreyNoiseError`] covering request, transport and input failures
//! - **Codes**: human-readable meanings of quick-check classification codes
//!
//! # Example
//!
//! ```rust,ignore
//! use greynoise_core::{Value, Result};
//!
//! fn is_noise(record: &Value) -> Result<bool> {
//!     Ok(record.get("noise").and_then(Value::as_bool).unwrap_or(false))
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/greynoise-core/0.3.0")]

mod error;
pub mod types;

pub use error::{GreyNoiseError, Result};
pub use types::*;
