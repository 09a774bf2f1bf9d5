pub use crate::diagnostics::PruneError;

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod policy;
pub mod rewrite;
pub mod scanner;
