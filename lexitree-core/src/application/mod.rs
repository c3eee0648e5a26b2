//! Application layer: the stage chain and how it is executed

mod diagnostics;
mod error;
mod execution;
mod pipeline;
pub mod stages;

pub use diagnostics::{Diagnostics, Gap, GapReason};
pub use error::ParseError;
pub use execution::{auto_select, ExecutionMode, ExecutionPolicy, Executor};
pub use pipeline::{Next, Pipeline, Stage};
