// Utility functions
pub mod deadline;
pub mod error;

pub use deadline::*;
pub use error::*;
