//! scrawl-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared across the Scrawl
//! toolchain. Today that is source-location tracking; the parser and
//! later phases build on the same types so that every diagnostic in
//! the pipeline points at the same coordinate system.

#![warn(missing_docs)]

pub mod span;

pub use span::Span;
