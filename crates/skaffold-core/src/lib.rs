//! # skaffold-core
//!
//! Core types shared across the Skaffold crates.
//!
//! This crate provides:
//! - The [`VersionedConfig`] trait consumed by survey relevance predicates
//! - [`ProjectConfig`], the concrete versioned config read from `skaffold.yaml`
//! - Well-known identifiers and file names
//! - Cross-cutting error types

pub mod constants;
pub mod errors;
pub mod project;
pub mod versioned;

pub use errors::CoreError;
pub use project::{Metadata, ProjectConfig};
pub use versioned::VersionedConfig;
