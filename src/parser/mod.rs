//! Parsing of the plain-text task source
//!
//! Each non-blank, non-comment line is one entry: a free-text title followed
//! by `@key[:value]` tags.

pub mod line;
pub mod source;

pub use line::*;
pub use source::*;
