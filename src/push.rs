use crate::ports::PushSender;
use crate::types::push::Subscription;

pub(crate) mod registry;
pub(crate) mod vapid;

pub(crate) use registry::SubscriptionRegistry;

/// Outcome of a broadcast: how many sends succeeded and how many failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeliveryReport {
    pub(crate) delivered: usize,
    pub(crate) failed: usize,
}

/// Sends `payload` to every subscription, one at a time. A failed send is
/// logged and counted but never interrupts the rest of the broadcast.
pub(crate) async fn broadcast_with_sender<S: PushSender>(
    sender: S,
    subscriptions: &[Subscription],
    payload: &str,
) -> DeliveryReport {
    let mut report = DeliveryReport {
        delivered: 0,
        failed: 0,
    };

    for subscription in subscriptions {
        match sender.send(subscription, payload).await {
            Ok(()) => report.delivered += 1,
            Err(err) => {
                eprintln!(
                    "push delivery error: {} (endpoint {})",
                    err, subscription.endpoint
                );
                report.failed += 1;
            }
        }
    }

    report
}
