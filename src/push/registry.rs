use crate::types::push::Subscription;

/// In-memory collection of push subscriptions, in registration order.
///
/// Registration is append-only: re-subscribing the same endpoint adds another
/// entry rather than replacing the old one, and nothing here prunes entries
/// whose endpoints have expired upstream.
#[derive(Debug, Default)]
pub(crate) struct SubscriptionRegistry {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionRegistry {
    pub(crate) fn register(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Clones the current entries so delivery can run without holding the
    /// registry lock.
    pub(crate) fn snapshot(&self) -> Vec<Subscription> {
        self.subscriptions.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.subscriptions.len()
    }
}
