//! Public API
//!
//! [`TextParser`] owns the compiled [`Grammar`](crate::Grammar) and the
//! stage pipeline built from a [`Config`]. The free [`parse`] function uses
//! a shared default parser.

mod config;
mod error;
mod language;
mod parser;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::Language;
pub use parser::{parse, ParseOutput, TextParser};
