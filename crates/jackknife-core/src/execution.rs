//! Execution engines for controlling how leave-one-out evaluations run
//!
//! The jackknife evaluates its estimator once per omitted observation, and
//! those evaluations are independent. An execution engine decides whether
//! they run in the current thread or on a Rayon pool. Engines always return
//! results in index order, so the choice never changes the output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the leave-one-out evaluations are scheduled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// One sub-sample after another on the calling thread
    #[default]
    Sequential,
    /// Sub-samples spread over a Rayon pool
    Parallel,
    /// Parallel when compiled with the `parallel` feature, sequential otherwise
    Auto,
}

/// Scheduler for a batch of independent indexed tasks
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Execute `f` for every index in `0..count`
    ///
    /// The returned vector holds the result for index `i` at position `i`
    /// regardless of the order in which tasks actually ran.
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    fn strategy(&self) -> ExecutionStrategy;

    /// Whether tasks may run on more than one thread
    fn is_parallel(&self) -> bool {
        self.strategy() == ExecutionStrategy::Parallel
    }

    /// Upper bound on the threads a batch can occupy
    fn num_threads(&self) -> usize;
}

/// Runs every task on the calling thread, in index order
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Rayon-backed engine
///
/// Uses the global pool unless a dedicated one is supplied.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Engine on the global pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Engine on a caller-owned pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Engine on a fresh pool of `num_threads` workers
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(Error::InvalidParameter(
                "thread count must be positive".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| Error::Execution(format!("could not build a {num_threads}-thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Engine chosen at runtime, e.g. from a configuration file
#[derive(Clone, Debug)]
pub enum DynamicEngine {
    Sequential(SequentialEngine),
    #[cfg(feature = "parallel")]
    Parallel(ParallelEngine),
}

impl DynamicEngine {
    /// Build the engine for a strategy
    ///
    /// Requesting [`ExecutionStrategy::Parallel`] without the `parallel`
    /// feature is an error; [`ExecutionStrategy::Auto`] silently falls back.
    pub fn from_strategy(strategy: ExecutionStrategy) -> Result<Self> {
        match strategy {
            ExecutionStrategy::Sequential => Ok(Self::Sequential(SequentialEngine)),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel | ExecutionStrategy::Auto => {
                Ok(Self::Parallel(ParallelEngine::new()))
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(Error::FeatureNotAvailable(
                "parallel execution requires the `parallel` feature".to_string(),
            )),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => Ok(Self::Sequential(SequentialEngine)),
        }
    }
}

impl ExecutionEngine for DynamicEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        match self {
            DynamicEngine::Sequential(e) => e.execute_batch(count, f),
            #[cfg(feature = "parallel")]
            DynamicEngine::Parallel(e) => e.execute_batch(count, f),
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        match self {
            DynamicEngine::Sequential(e) => e.strategy(),
            #[cfg(feature = "parallel")]
            DynamicEngine::Parallel(e) => e.strategy(),
        }
    }

    fn num_threads(&self) -> usize {
        match self {
            DynamicEngine::Sequential(e) => e.num_threads(),
            #[cfg(feature = "parallel")]
            DynamicEngine::Parallel(e) => e.num_threads(),
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine
}

/// Create a parallel engine on the global Rayon pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create the best engine compiled into this build
pub fn auto_engine() -> DynamicEngine {
    #[cfg(feature = "parallel")]
    {
        DynamicEngine::Parallel(ParallelEngine::new())
    }
    #[cfg(not(feature = "parallel"))]
    {
        DynamicEngine::Sequential(SequentialEngine)
    }
}
