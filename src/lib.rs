//! Taptext turns free-form post and comment text into typed segments for
//! interactive rendering.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`parser`] owns the scanning pass that splits input into plain text,
//!   link, mention, and hashtag segments, plus the derived extractors.
//! - [`core`] holds the segment data model, shared constants, and the
//!   configuration file handling used by the CLI.
//! - [`utils`] provides URL display helpers (validity checks and
//!   display-only truncation).
//! - [`cli`] implements the command-line inspection tool built on top of
//!   the library.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod parser;
pub mod utils;
