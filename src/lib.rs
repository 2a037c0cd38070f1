//! motto - Terminal quote keeper
//!
//! A command-line application that maintains a collection of quotes with
//! category filtering, random display, and JSON import/export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MottoError;
