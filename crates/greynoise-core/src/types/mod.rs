mod codes;
mod common;
mod value;

pub use codes::*;
pub use common::*;
pub use value::*;
