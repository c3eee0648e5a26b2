//! Domain layer: the node model, the expression evaluator and the
//! language grammar shared by every pipeline stage.

pub mod error;
pub mod expression;
pub mod language;
pub mod model;

pub use error::{ConfigError, ModelError};
