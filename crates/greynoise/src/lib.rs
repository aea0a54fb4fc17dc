//! Rust client for the GreyNoise threat intelligence API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use greynoise::{GreyNoiseApi, GreyNoiseClient};
//!
//! #[tokio::main]
//! async fn main() -> greynoise::Result<()> {
//!     let client = GreyNoiseClient::new("your-api-key")?;
//!
//!     // Is this IP internet background noise?
//!     let status = client.get_noise_status("8.8.8.8").await?;
//!     println!("noise: {:?}", status.get("noise"));
//!
//!     // Run a GNQL query
//!     let results = client.run_query("classification:malicious").await?;
//!     println!("{}", results.to_json());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/greynoise/0.3.0")]

// Re-export core types
pub use greynoise_core::*;

// Re-export client
pub use greynoise_client::{api, GreyNoiseApi, GreyNoiseClient, GreyNoiseClientBuilder};

// Re-export for convenience
pub use chrono;
pub use serde_json;
