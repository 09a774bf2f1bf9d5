//! Removal predicates, one per cross-compilation concern.

pub mod context_flags;
pub mod menhir;

pub use context_flags::ContextFlags;
pub use menhir::Menhir;
