//! Per-view activation lifecycle
//!
//! A view is activated when it is shown and deactivated when the user leaves
//! it. Every activation gets a generation number; only the fetch started by
//! the current generation may settle the view's state, and only once.

use super::state::FetchResult;
use crate::client::{FetchError, ResourceFetcher};
use crate::models::Resource;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use uuid::Uuid;

/// Token identifying one activation of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    generation: u64,
    id: Uuid,
}

impl Activation {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Correlation id for logs
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// State holder for one resource view
///
/// The watched value is `None` while the view is inactive.
pub struct ResourceView<R> {
    state: watch::Sender<Option<FetchResult<R>>>,
    generation: AtomicU64,
}

impl<R> Default for ResourceView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ResourceView<R> {
    /// Create an inactive view
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new activation in the `Loading` state
    ///
    /// Any fetch still pending for an earlier activation becomes stale.
    pub fn activate(&self) -> Activation {
        let mut generation = 0;
        // Generation changes only happen under the channel's write lock.
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = Some(FetchResult::Loading);
        });

        let activation = Activation {
            generation,
            id: Uuid::new_v4(),
        };
        tracing::debug!(activation = %activation.id, generation, "View activated");
        activation
    }

    /// Settle the activation with the outcome of its fetch
    ///
    /// Returns `false` when the outcome was discarded: the activation is no
    /// longer current, or its state already left `Loading`.
    pub fn resolve(&self, activation: &Activation, outcome: Result<Vec<R>, FetchError>) -> bool {
        let applied = self.state.send_if_modified(move |state| {
            if self.generation.load(Ordering::SeqCst) != activation.generation {
                return false;
            }
            match state {
                Some(FetchResult::Loading) => {
                    *state = Some(FetchResult::from_outcome(outcome));
                    true
                }
                _ => false,
            }
        });

        if applied {
            tracing::debug!(activation = %activation.id, "View state settled");
        } else {
            tracing::debug!(
                activation = %activation.id,
                generation = activation.generation,
                "Discarding stale fetch result"
            );
        }
        applied
    }

    /// Leave the view, dropping its state and invalidating pending fetches
    pub fn deactivate(&self) {
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *state = None;
        });
    }

    /// Whether `activation` is still the current one
    pub fn is_current(&self, activation: &Activation) -> bool {
        self.generation.load(Ordering::SeqCst) == activation.generation
    }

    /// Receiver for the presentation layer
    pub fn subscribe(&self) -> watch::Receiver<Option<FetchResult<R>>> {
        self.state.subscribe()
    }
}

impl<R: Clone> ResourceView<R> {
    /// Current state, `None` while inactive
    pub fn snapshot(&self) -> Option<FetchResult<R>> {
        self.state.borrow().clone()
    }
}

impl<R: Resource + Clone> ResourceView<R> {
    /// Activate the view and run its single fetch
    ///
    /// Returns the settled state, or `None` if the view was deactivated or
    /// re-activated while the fetch was pending.
    pub async fn load(&self, fetcher: &ResourceFetcher) -> Option<FetchResult<R>> {
        let activation = self.activate();
        let outcome = fetcher.fetch::<R>().await;

        if let Err(e) = &outcome {
            tracing::error!(resource = R::NAME, error = %e, "Error fetching {}", R::NAME);
        }

        if self.resolve(&activation, outcome) {
            self.snapshot()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Transport;
    use crate::models::Team;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[test]
    fn test_new_view_is_inactive() {
        let view: ResourceView<u32> = ResourceView::new();
        assert!(view.snapshot().is_none());
    }

    #[test]
    fn test_activate_then_ready() {
        let view = ResourceView::new();
        let activation = view.activate();
        assert_eq!(view.snapshot(), Some(FetchResult::Loading));

        assert!(view.resolve(&activation, Ok(vec![1, 2, 3])));
        assert_eq!(view.snapshot(), Some(FetchResult::Ready { items: vec![1, 2, 3] }));
    }

    #[test]
    fn test_not_found_settles_as_error() {
        let view: ResourceView<u32> = ResourceView::new();
        let activation = view.activate();

        assert!(view.resolve(&activation, Err(FetchError::Transport { status: 404 })));
        let state = view.snapshot().unwrap();
        assert!(state.error_message().unwrap().contains("404"));
        assert!(state.items().is_none());
    }

    #[test]
    fn test_terminal_state_is_final() {
        let view = ResourceView::new();
        let activation = view.activate();

        assert!(view.resolve(&activation, Ok(vec![1])));
        assert!(!view.resolve(&activation, Err(FetchError::Decode("late".to_string()))));
        assert_eq!(view.snapshot(), Some(FetchResult::Ready { items: vec![1] }));
    }

    #[test]
    fn test_stale_result_does_not_touch_newer_activation() {
        let view = ResourceView::new();
        let first = view.activate();
        view.deactivate();
        let second = view.activate();

        assert!(!view.is_current(&first));
        assert!(!view.resolve(&first, Ok(vec!["old"])));
        assert_eq!(view.snapshot(), Some(FetchResult::Loading));

        assert!(view.resolve(&second, Ok(vec!["new"])));
        assert_eq!(view.snapshot(), Some(FetchResult::Ready { items: vec!["new"] }));
    }

    #[test]
    fn test_deactivate_discards_state() {
        let view = ResourceView::new();
        let activation = view.activate();
        view.resolve(&activation, Ok(vec![1]));

        view.deactivate();
        assert!(view.snapshot().is_none());
        assert!(!view.resolve(&activation, Ok(vec![2])));
        assert!(view.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_subscriber_sees_transition() {
        let view = ResourceView::new();
        let mut rx = view.subscribe();

        let activation = view.activate();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(FetchResult::Loading));

        view.resolve(&activation, Ok(vec![7]));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some(FetchResult::Ready { items: vec![7] }));
    }

    /// Holds its response until released
    struct GatedTransport {
        gate: Arc<Notify>,
        payload: Value,
    }

    #[async_trait]
    impl Transport for GatedTransport {
        async fn get_json(&self, _url: &str) -> Result<Value, FetchError> {
            self.gate.notified().await;
            Ok(self.payload.clone())
        }
    }

    #[tokio::test]
    async fn test_load_discarded_when_view_left_mid_fetch() {
        let gate = Arc::new(Notify::new());
        let transport = GatedTransport {
            gate: Arc::clone(&gate),
            payload: json!([{"name": "Alpha", "members": []}]),
        };
        let fetcher = ResourceFetcher::with_transport("http://api.test/api", Arc::new(transport));
        let view: Arc<ResourceView<Team>> = Arc::new(ResourceView::new());

        let pending = {
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.load(&fetcher).await })
        };

        // Wait for the pending activation, then navigate away and back
        let mut rx = view.subscribe();
        rx.wait_for(|state| state.is_some()).await.unwrap();
        view.deactivate();
        let fresh = view.activate();

        gate.notify_one();
        assert!(pending.await.unwrap().is_none());
        assert_eq!(view.snapshot(), Some(FetchResult::Loading));
        assert!(view.is_current(&fresh));
    }

    #[tokio::test]
    async fn test_load_settles_ready() {
        let gate = Arc::new(Notify::new());
        gate.notify_one();
        let transport = GatedTransport {
            gate,
            payload: json!({"results": [{"name": "Alpha", "members": "[\"a@x.com\"]"}]}),
        };
        let fetcher = ResourceFetcher::with_transport("http://api.test/api", Arc::new(transport));
        let view: ResourceView<Team> = ResourceView::new();

        let state = view.load(&fetcher).await.unwrap();
        let teams = state.items().unwrap();
        assert_eq!(teams[0].members, vec!["a@x.com".to_string()]);
    }
}
