// ── Store subscriptions ──

use tokio::sync::watch;

use crate::store::StoreState;

/// Observer handle returned by `FlightStore::subscribe`.
///
/// Keeps the last state it was handed, so a renderer can redraw from
/// `current()` without touching the store.
pub struct StateStream {
    current: StoreState,
    receiver: watch::Receiver<StoreState>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<StoreState>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// State as of subscription or the most recent `changed()`.
    pub fn current(&self) -> &StoreState {
        &self.current
    }

    /// What the store holds right now. Does not advance `current()`.
    pub fn latest(&self) -> StoreState {
        self.receiver.borrow().clone()
    }

    /// Resolves on the next published state. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<StoreState> {
        self.receiver.changed().await.ok()?;
        self.current = self.receiver.borrow_and_update().clone();
        Some(self.current.clone())
    }
}
