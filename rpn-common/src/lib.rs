//! RPN Generator - Common Types and Errors
//! 
//! This crate contains the token model, source locations and the error
//! type shared by the generator and its driver.

pub mod error;
pub mod types;
pub mod source_loc;

pub use error::GeneratorError;
pub use types::*;
pub use source_loc::SourceLocation;
