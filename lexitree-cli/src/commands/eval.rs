//! Eval command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use lexitree_core::Evaluator;

/// Arguments for the eval command
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Arithmetic expression, e.g. "(2 + 3) * 4"
    #[arg(value_name = "EXPRESSION", required = true, num_args = 1.., allow_hyphen_values = true)]
    pub expression: Vec<String>,
}

impl EvalArgs {
    /// Execute the eval command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.evaluate()?);
        Ok(())
    }

    /// Evaluate the words of the expression joined by spaces
    pub fn evaluate(&self) -> Result<f64> {
        let expression = self.expression.join(" ");
        let value = Evaluator::new()
            .evaluate(&expression)
            .map_err(|e| CliError::EvaluationError(e.to_string()))?;

        log::debug!("{expression} = {value}");
        Ok(value)
    }
}
