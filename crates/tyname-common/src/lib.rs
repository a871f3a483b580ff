//! Common definitions shared by the tyname crates.
//!
//! This crate currently only hosts the centralized limits used by the
//! reference parser and the type name resolver.

// Centralized limits and thresholds
pub mod limits;
