use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::ports;
use crate::types::push::{Subscription, VapidConfig};

/// Upper bound on a single delivery attempt, so one unresponsive push
/// service cannot stall a broadcast.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct WebPushSender {
    vapid: VapidConfig,
    client: Arc<web_push::WebPushClient>,
}

impl WebPushSender {
    pub fn new(vapid: VapidConfig) -> Result<Self, web_push::WebPushError> {
        let client = web_push::WebPushClient::new()?;
        Ok(Self {
            vapid,
            client: Arc::new(client),
        })
    }
}

#[derive(Debug)]
pub enum DispatchError {
    Push(web_push::WebPushError),
    Timeout,
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Push(err) => err.fmt(f),
            DispatchError::Timeout => write!(f, "delivery timed out after {SEND_TIMEOUT:?}"),
        }
    }
}

impl From<web_push::WebPushError> for DispatchError {
    fn from(err: web_push::WebPushError) -> Self {
        DispatchError::Push(err)
    }
}

impl ports::PushSender for WebPushSender {
    type Error = DispatchError;
    type Fut<'a>
        = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send + 'a>>
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a Subscription, payload: &'a str) -> Self::Fut<'a> {
        Box::pin(async move {
            let subscription_info = web_push::SubscriptionInfo::new(
                subscription.endpoint.clone(),
                subscription.keys.p256dh.clone(),
                subscription.keys.auth.clone(),
            );
            let mut builder = web_push::WebPushMessageBuilder::new(&subscription_info)?;
            builder.set_payload(web_push::ContentEncoding::Aes128Gcm, payload.as_bytes());
            let mut signature_builder = web_push::VapidSignatureBuilder::from_base64(
                &self.vapid.private_key,
                web_push::URL_SAFE_NO_PAD,
                &subscription_info,
            )?;
            signature_builder.add_claim("sub", self.vapid.subject.as_str());
            builder.set_vapid_signature(signature_builder.build()?);
            let message = builder.build()?;
            match tokio::time::timeout(SEND_TIMEOUT, self.client.send(message)).await {
                Ok(result) => result.map_err(DispatchError::Push),
                Err(_) => Err(DispatchError::Timeout),
            }
        })
    }
}
