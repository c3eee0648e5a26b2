//! Record of input the pipeline could not place in the tree

use crate::domain::model::NodeKind;
use serde::Serialize;
use std::fmt;

/// Why a span was left out of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapReason {
    /// No stage produced a node for the span
    Unrecognized,
    /// A stage produced a node of the wrong level
    UnexpectedKind(NodeKind),
    /// A character inside a symbol run that no class recognises
    DroppedCharacter,
}

impl fmt::Display for GapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapReason::Unrecognized => f.write_str("unrecognized"),
            GapReason::UnexpectedKind(kind) => write!(f, "unexpected {kind}"),
            GapReason::DroppedCharacter => f.write_str("dropped character"),
        }
    }
}

/// A span of input missing from the output tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// Stage that dropped the span
    pub stage: &'static str,
    pub text: String,
    pub reason: GapReason,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage: {} {:?}", self.stage, self.reason, self.text)
    }
}

/// Gaps collected during one parse, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    gaps: Vec<Gap>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dropped span and log it
    pub fn record(&mut self, stage: &'static str, text: impl Into<String>, reason: GapReason) {
        let gap = Gap {
            stage,
            text: text.into(),
            reason,
        };
        log::warn!("gap: {gap}");
        self.gaps.push(gap);
    }

    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    pub fn gap_count(&self) -> usize {
        self.gaps.len()
    }

    /// True when nothing was dropped
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Append gaps collected elsewhere, keeping their order
    pub fn extend(&mut self, other: Diagnostics) {
        self.gaps.extend(other.gaps);
    }
}
