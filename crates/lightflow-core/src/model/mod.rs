//! Modelos neutrales (Context).

pub mod context;

pub use context::Context;
