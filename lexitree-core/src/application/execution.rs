//! Sequential and parallel execution of independent paragraph candidates

use super::error::ParseError;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Parse candidates one after another on the calling thread
    Sequential,
    /// Parse candidates on the rayon pool
    Parallel,
    /// Choose from the candidate count
    #[default]
    Adaptive,
}

/// Pick sequential or parallel execution from the number of candidates
pub fn auto_select(candidates: usize, threshold: usize) -> ExecutionMode {
    if candidates < 2 || candidates < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// How paragraph candidates are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPolicy {
    pub mode: ExecutionMode,
    /// Candidate count from which adaptive mode goes parallel
    pub parallel_threshold: usize,
    /// Dedicated pool size; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            parallel_threshold: 64,
            threads: None,
        }
    }
}

/// Runs a function over a slice, sequentially or in parallel, returning
/// results in input order
#[derive(Debug)]
pub struct Executor {
    policy: ExecutionPolicy,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Executor {
    pub fn new(policy: ExecutionPolicy) -> Result<Self, ParseError> {
        #[cfg(feature = "parallel")]
        let pool = match policy.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| ParseError::Execution(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            policy,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Sequential executor without a pool
    pub fn sequential() -> Self {
        Self {
            policy: ExecutionPolicy {
                mode: ExecutionMode::Sequential,
                ..ExecutionPolicy::default()
            },
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    pub fn policy(&self) -> &ExecutionPolicy {
        &self.policy
    }

    /// Mode used for `count` items, with adaptive resolved
    pub fn select_mode(&self, count: usize) -> ExecutionMode {
        match self.policy.mode {
            ExecutionMode::Adaptive => auto_select(count, self.policy.parallel_threshold),
            mode => mode,
        }
    }

    pub fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match self.select_mode(items.len()) {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                log::debug!("parsing {} candidates in parallel", items.len());
                match &self.pool {
                    Some(pool) => pool.install(|| items.par_iter().map(&f).collect()),
                    None => items.par_iter().map(&f).collect(),
                }
            }
            _ => items.iter().map(f).collect(),
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::sequential()
    }
}
