//! # vuelint_sfc
//!
//! Hybrid document support: classification of file paths as plain
//! TypeScript or Vue single-file components, a tolerant block parser for
//! the component format, and extraction of the embedded script region in a
//! form the lint engine can consume as ordinary TypeScript source.

mod block;
mod document;

pub use block::{SfcBlock, SfcDocument, parse_component};
pub use document::{DocumentKind, ExtractedRegion, extract};
