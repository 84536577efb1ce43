//! Process-wide memoized store of the normalized slot collection.
//!
//! Population is single-flight: the first `get` runs the source fetch,
//! concurrent callers subscribe to the in-flight attempt and observe its
//! outcome instead of issuing their own. A failed attempt leaves the
//! cache empty so a later turn can retry; a successful one is immutable
//! for the process lifetime. There is no invalidation operation.

use confab_core::{DataSourceError, ScheduleSource, Slot};
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info, warn};

type PopulationOutcome = Result<Arc<Vec<Slot>>, DataSourceError>;

enum CacheState {
    Empty,
    Populating(broadcast::Sender<PopulationOutcome>),
    Populated(Arc<Vec<Slot>>),
}

pub struct ScheduleCache {
    source: Arc<dyn ScheduleSource>,
    state: Mutex<CacheState>,
}

impl ScheduleCache {
    #[must_use]
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::Empty),
        }
    }

    /// The cached slot collection, populating it on first use.
    ///
    /// Readers arriving during an in-flight population wait for that
    /// attempt and receive its result or its error.
    pub async fn get(&self) -> PopulationOutcome {
        let mut waiter = {
            let mut state = self.state.lock().await;
            match &*state {
                CacheState::Populated(slots) => return Ok(Arc::clone(slots)),
                CacheState::Populating(sender) => sender.subscribe(),
                CacheState::Empty => {
                    let (sender, _) = broadcast::channel(1);
                    *state = CacheState::Populating(sender);
                    drop(state);
                    return self.populate().await;
                }
            }
        };

        debug!("Awaiting in-flight schedule population");
        match waiter.recv().await {
            Ok(outcome) => outcome,
            Err(_) => Err(DataSourceError::Interrupted),
        }
    }

    /// Run the one fetch for this population attempt and publish its
    /// outcome to every waiter. Only the task that won the
    /// empty-to-populating transition gets here.
    async fn populate(&self) -> PopulationOutcome {
        let outcome = self.source.fetch().await.map(Arc::new);

        let mut state = self.state.lock().await;
        let sender = match std::mem::replace(&mut *state, CacheState::Empty) {
            CacheState::Populating(sender) => Some(sender),
            other => {
                *state = other;
                None
            }
        };

        match &outcome {
            Ok(slots) => {
                info!("Schedule cache populated: {} slots", slots.len());
                *state = CacheState::Populated(Arc::clone(slots));
            }
            Err(error) => {
                // Leave the cache empty so a later turn can retry.
                warn!("Schedule population failed: {error}");
            }
        }
        drop(state);

        if let Some(sender) = sender {
            let _ = sender.send(outcome.clone());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn keynote_slot() -> Slot {
        Slot {
            day: "thursday".to_string(),
            from_time: "09:00".to_string(),
            to_time: "09:50".to_string(),
            room_name: "Room A".to_string(),
            talk: None,
        }
    }

    struct CountingSource {
        fetches: AtomicUsize,
        fail_first: bool,
    }

    impl CountingSource {
        fn new(fail_first: bool) -> Arc<Self> {
            Arc::new(Self {
                fetches: AtomicUsize::new(0),
                fail_first,
            })
        }
    }

    #[async_trait]
    impl ScheduleSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<Slot>, DataSourceError> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            // Yield so concurrent readers can pile up behind this attempt.
            tokio::time::sleep(Duration::from_millis(5)).await;
            if self.fail_first && attempt == 0 {
                Err(DataSourceError::http("http://test", "connection refused"))
            } else {
                Ok(vec![keynote_slot()])
            }
        }
    }

    #[tokio::test]
    async fn concurrent_first_reads_fetch_once() {
        let source = CountingSource::new(false);
        let cache = ScheduleCache::new(Arc::clone(&source) as Arc<dyn ScheduleSource>);

        // On a current-thread runtime the join interleaves deterministically:
        // the first future wins the empty-to-populating transition and
        // parks in the fetch, the rest subscribe as waiters.
        let (a, b, c, d) = tokio::join!(cache.get(), cache.get(), cache.get(), cache.get());

        for outcome in [a, b, c, d] {
            let Ok(slots) = outcome else {
                panic!("population should succeed");
            };
            assert_eq!(slots.len(), 1);
        }

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_population_leaves_cache_retryable() {
        let source = CountingSource::new(true);
        let cache = ScheduleCache::new(Arc::clone(&source) as Arc<dyn ScheduleSource>);

        assert!(cache.get().await.is_err());
        let Ok(slots) = cache.get().await else {
            panic!("second attempt should succeed");
        };
        assert_eq!(slots.len(), 1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn populated_cache_is_reused() {
        let source = CountingSource::new(false);
        let cache = ScheduleCache::new(Arc::clone(&source) as Arc<dyn ScheduleSource>);

        let first = cache.get().await;
        let second = cache.get().await;
        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn waiters_observe_the_in_flight_error() {
        let source = CountingSource::new(true);
        let cache = ScheduleCache::new(Arc::clone(&source) as Arc<dyn ScheduleSource>);

        let (a, b, c, d) = tokio::join!(cache.get(), cache.get(), cache.get(), cache.get());

        // Every reader of the failed attempt saw its error; none started
        // a second fetch while it was in flight.
        for outcome in [a, b, c, d] {
            assert!(outcome.is_err());
        }
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
