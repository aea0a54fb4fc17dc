//! HTTP client for the GreyNoise API.
//!
//! This crate provides the main [`GreyNoiseClient`] for interacting with the
//! GreyNoise API, and the [`GreyNoiseApi`] trait that command front-ends
//! program against.

#![doc(html_root_url = "https://docs.rs/greynoise-client/0.3.0")]

mod client;
mod service;
pub mod api;

pub use client::{GreyNoiseClient, GreyNoiseClientBuilder};
pub use greynoise_core::{GreyNoiseError, Result};
pub use service::GreyNoiseApi;
