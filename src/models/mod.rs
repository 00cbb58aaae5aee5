// Core data model for nextup

pub mod entry;

pub use entry::*;
