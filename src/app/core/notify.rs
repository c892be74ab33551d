use crate::app::types::ListChange;

/// Handle returned by [`super::TodoListManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ListChange) + 'static>;

/// Ordered list of change callbacks.
#[derive(Default)]
pub(super) struct Subscribers {
    next: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(super) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    /// Run every callback, oldest subscription first.
    pub(super) fn notify(&mut self, change: &ListChange) {
        for (_, cb) in self.entries.iter_mut() {
            cb(change);
        }
    }
}
