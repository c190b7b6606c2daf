pub mod error;
pub mod model;

pub use error::ErrorKind;
pub use model::*;
