//! API endpoint modules.

mod gnql;
mod noise;
mod research;

pub use gnql::GnqlApi;
pub use noise::NoiseApi;
pub use research::ResearchApi;
