//! Single-flight credential refresh.
//!
//! The in-flight refresh attempt is held as a shared future rather than a
//! boolean flag: a request failing auth while a refresh is already running
//! attaches to the same handle and receives the same outcome, so no
//! dependent is ever dropped. The slot returns to idle unconditionally when
//! the attempt settles, success or failure.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::options::RefreshFunction;

type InFlightRefresh = Shared<BoxFuture<'static, Option<String>>>;

/// Coordinates credential refresh attempts across concurrent requests.
///
/// At most one refresh executes at a time; every caller of [`run`] during
/// that window awaits the same attempt.
///
/// [`run`]: RefreshCoordinator::run
#[derive(Debug, Clone, Default)]
pub struct RefreshCoordinator {
    in_flight: Arc<Mutex<Option<InFlightRefresh>>>,
}

impl RefreshCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the refresh, joining an in-flight attempt when one exists.
    ///
    /// The refresh function is invoked exactly once per attempt no matter
    /// how many callers join. Returns the new token, or `None` when the
    /// refresh produced no credential.
    pub async fn run(&self, refresh: RefreshFunction) -> Option<String> {
        let (attempt, leader) = {
            let mut slot = self.in_flight.lock().await;
            if let Some(existing) = slot.as_ref() {
                debug!("joining in-flight credential refresh");
                (existing.clone(), false)
            } else {
                debug!("starting credential refresh");
                let attempt = refresh().boxed().shared();
                *slot = Some(attempt.clone());
                (attempt, true)
            }
        };

        let outcome = attempt.await;

        // Only the leader clears the slot; late joiners may still be
        // cloning it.
        if leader {
            self.in_flight.lock().await.take();
            match &outcome {
                Some(_) => debug!("credential refresh succeeded"),
                None => warn!("credential refresh produced no token"),
            }
        }

        outcome
    }

    /// Returns `true` while a refresh attempt is in flight.
    pub async fn is_refreshing(&self) -> bool {
        self.in_flight.lock().await.is_some()
    }
}
