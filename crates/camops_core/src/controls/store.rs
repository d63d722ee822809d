//! Single-owner configuration store with subscription and publish hooks.

use std::sync::Arc;

use tokio::sync::watch;

use crate::publish::Publisher;

use super::state::{ControlChange, ControlState};

/// Owns the configuration intent and funnels every mutation through one
/// entry point.
///
/// Each dispatch applies the change, notifies subscribers with the full
/// new state, then hands the publisher a complete snapshot. Publishing is
/// fire-and-forget: local state is the optimistic truth whether or not the
/// push lands, and a failed push is never rolled back.
pub struct ControlStore {
    state: ControlState,
    publisher: Arc<dyn Publisher>,
    observers: watch::Sender<ControlState>,
}

impl ControlStore {
    /// Create a store holding the session defaults, wired to a publisher.
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        let state = ControlState::default();
        let (observers, _) = watch::channel(state.clone());
        Self {
            state,
            publisher,
            observers,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Subscribe to state snapshots. A receiver always holds the latest.
    pub fn subscribe(&self) -> watch::Receiver<ControlState> {
        self.observers.subscribe()
    }

    /// Apply one change, notify observers, and push the new snapshot.
    pub fn dispatch(&mut self, change: ControlChange) {
        self.state.apply(change);
        tracing::debug!("Control change applied: {:?}", change);
        self.observers.send_replace(self.state.clone());
        self.publisher.publish(self.state.to_payload());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelSize, TogglesPayload};
    use parking_lot::Mutex;

    /// Publisher that records every snapshot it is handed.
    #[derive(Default)]
    struct RecordingPublisher {
        sent: Mutex<Vec<TogglesPayload>>,
    }

    impl Publisher for RecordingPublisher {
        fn publish(&self, payload: TogglesPayload) {
            self.sent.lock().push(payload);
        }
    }

    /// Publisher whose transport always fails internally.
    struct FailingPublisher;

    impl Publisher for FailingPublisher {
        fn publish(&self, _payload: TogglesPayload) {
            tracing::warn!("Control push failed: connection refused");
        }
    }

    #[test]
    fn every_mutation_publishes_one_full_snapshot() {
        let publisher = Arc::new(RecordingPublisher::default());
        let mut store = ControlStore::new(publisher.clone());

        store.dispatch(ControlChange::Trails(true));
        store.dispatch(ControlChange::ModelSizeIndex(4));

        let sent = publisher.sent.lock();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].trails);
        assert_eq!(sent[0].model_size, ModelSize::Medium);
        assert!(sent[1].trails);
        assert_eq!(sent[1].model_size, ModelSize::XLarge);
    }

    #[test]
    fn pause_toggle_publishes_defaults_plus_paused() {
        let publisher = Arc::new(RecordingPublisher::default());
        let mut store = ControlStore::new(publisher.clone());

        store.dispatch(ControlChange::Paused(true));

        let sent = publisher.sent.lock();
        assert_eq!(sent.len(), 1);
        let expected = TogglesPayload {
            paused: true,
            ..ControlState::default().to_payload()
        };
        assert_eq!(sent[0], expected);
    }

    #[test]
    fn observers_see_the_post_mutation_state() {
        let mut store = ControlStore::new(Arc::new(RecordingPublisher::default()));
        let observer = store.subscribe();

        store.dispatch(ControlChange::Pose(true));

        let seen = observer.borrow().clone();
        assert!(seen.pose);
        assert!(!seen.segmentation);
    }

    #[test]
    fn no_observer_ever_sees_both_overlays_enabled() {
        let mut store = ControlStore::new(Arc::new(RecordingPublisher::default()));
        let observer = store.subscribe();

        store.dispatch(ControlChange::Segmentation(true));
        store.dispatch(ControlChange::Pose(true));

        let seen = observer.borrow().clone();
        assert!(!(seen.segmentation && seen.pose));
        assert!(seen.pose);
    }

    #[test]
    fn failed_publish_leaves_local_state_untouched() {
        let mut store = ControlStore::new(Arc::new(FailingPublisher));

        store.dispatch(ControlChange::Heatmap(true));
        assert!(store.state().heatmap);

        store.dispatch(ControlChange::Confidence(0.5));
        assert!(store.state().heatmap);
        assert!((store.state().confidence - 0.5).abs() < 1e-9);
    }
}
