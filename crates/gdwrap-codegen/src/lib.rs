#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! C# wrapper generation for GDExtension classes.
//!
//! This crate turns reflected class metadata into statically typed C#
//! wrapper sources:
//! - `tables` - per-run type and name resolution tables
//! - `classify` - argument/return classification shared by the emitters
//! - `emit` - class, method, signal, and property emitters
//! - `diagnostics` - per-class generation diagnostics
//!
//! Generation is single-pass per class and deterministic: identical
//! metadata produces byte-identical wrapper sources.

pub mod classify;
pub mod diagnostics;
pub mod emit;
pub mod tables;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
pub(crate) mod test_utils;

/// Result type for emission passes that produce both output and diagnostics.
///
/// Each pass returns its output alongside whatever diagnostics it
/// collected. Structural failures (member-name collisions that survive
/// suffixing) use the outer `Result`.
pub type GenResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{DiagnosticKind, Diagnostics, Severity};
pub use emit::{ClassEmitter, Config, GeneratedClass, generate};
pub use tables::Tables;

/// Errors that abort emission for a single class.
///
/// Per-class: a failing class never corrupts output for its siblings in
/// the same run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Role-specific suffixing still collided; emitting duplicate member
    /// definitions is never an option. `first` and `second` describe the
    /// colliding members.
    #[error("class `{class}`: {first} and {second} both resolve to `{name}`")]
    DuplicateMemberName {
        class: String,
        name: String,
        first: String,
        second: String,
    },
}
