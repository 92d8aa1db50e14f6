//! hintctl - reflection hint collector for GraalVM native images
//!
//! hintctl is a CLI tool and library that collects reflection hints (a
//! trigger class, the types it makes relevant, and the reflective access
//! those types need) and emits them as a `reflect-config.json` file for the
//! native-image compiler.
//!
//! ## Module Structure
//!
//! - `access`: Access bits and their reflect-config flag mapping
//! - `hint`: Declarations, hint entries and the registry
//! - `collect`: Declaration validation and descriptor loading
//! - `emit`: reflect-config rendering and atomic writes
//! - `catalog`: Bundled hints for Spring Boot reactive web
//! - `scan`: Descriptor file discovery
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//! - `error`: Error types

pub mod access;
pub mod catalog;
pub mod cli;
pub mod collect;
pub mod config;
pub mod emit;
pub mod error;
pub mod hint;
pub mod scan;

pub use access::AccessBits;
pub use collect::{Collector, TriggerPolicy, collect};
pub use error::{HintError, HintResult};
pub use hint::{Declaration, HintEntry, Registry};
