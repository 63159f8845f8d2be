use super::config::ResultOrdering;
use crate::error::{CartError, Result};
use std::future::Future;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Results collected by a single `gather` call.
///
/// Owned by the join loop, so recording a result and checking for completion
/// never race with another member.
struct Accumulation<T> {
    expected: usize,
    entries: Vec<(usize, T)>,
}

impl<T> Accumulation<T> {
    fn new(expected: usize) -> Self {
        Self {
            expected,
            entries: Vec::with_capacity(expected),
        }
    }

    /// Returns `true` once every expected member has been recorded.
    fn record(&mut self, position: usize, value: T) -> bool {
        self.entries.push((position, value));
        self.entries.len() == self.expected
    }

    fn finish(mut self, ordering: ResultOrdering) -> Vec<T> {
        if ordering == ResultOrdering::Request {
            self.entries.sort_by_key(|(position, _)| *position);
        }
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

/// Concurrent fan-out over a list of members with a join that delivers once.
///
/// Every member is resolved on its own tokio task. The first failure aborts the
/// remaining tasks and is returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FanOut {
    label: &'static str,
    ordering: ResultOrdering,
}

impl FanOut {
    pub fn new(label: &'static str, ordering: ResultOrdering) -> Self {
        Self { label, ordering }
    }

    pub async fn gather<M, T, F, Fut>(&self, members: Vec<M>, resolve: F) -> Result<Vec<T>>
    where
        M: Send + 'static,
        T: Send + 'static,
        F: Fn(M) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let mut accumulation = Accumulation::new(members.len());
        let mut tasks = JoinSet::new();
        for (position, member) in members.into_iter().enumerate() {
            let resolving = resolve(member);
            tasks.spawn(async move { resolving.await.map(|value| (position, value)) });
        }
        debug!(
            label = self.label,
            expected = accumulation.expected,
            "dispatched member tasks"
        );

        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => Err(CartError::from(join_error)),
            };
            match outcome {
                Ok((position, value)) => {
                    if accumulation.record(position, value) {
                        break;
                    }
                }
                Err(error) => {
                    warn!(label = self.label, %error, "member failed, aborting siblings");
                    tasks.abort_all();
                    return Err(error);
                }
            }
        }

        debug!(
            label = self.label,
            resolved = accumulation.entries.len(),
            "all members resolved"
        );
        Ok(accumulation.finish(self.ordering))
    }
}
