//! Command-line front-end: flag parsing and text rendering over the library.

pub mod commands;
pub mod output;

pub use commands::run;
