use crate::adapters::WebPushSender;
use crate::push as push_service;
use crate::state;
use crate::types::push::Subscription;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::ErrorResponse;

pub(crate) async fn subscribe(
    State(state): State<state::AppState>,
    Json(subscription): Json<Subscription>,
) -> StatusCode {
    let endpoint = subscription.endpoint.clone();
    let total = {
        let mut registry = state
            .subscriptions
            .lock()
            .expect("subscription registry lock");
        registry.register(subscription);
        registry.len()
    };
    println!("registered push subscription: {endpoint} ({total} total)");
    StatusCode::CREATED
}

#[derive(Serialize)]
pub(crate) struct SendNotificationResponse {
    pub(crate) success: bool,
    pub(crate) delivered: usize,
    pub(crate) failed: usize,
}

/// Broadcasts the request body verbatim to every registered subscription.
/// Responds 500 only when nothing could be delivered at all.
pub(crate) async fn send_notification(
    State(state): State<state::AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<SendNotificationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let subscriptions = state
        .subscriptions
        .lock()
        .expect("subscription registry lock")
        .snapshot();
    if subscriptions.is_empty() {
        return Ok(Json(SendNotificationResponse {
            success: true,
            delivered: 0,
            failed: 0,
        }));
    }

    let sender = WebPushSender::new(state.config.vapid.clone()).map_err(|err| {
        eprintln!("push dispatch error: failed to init web-push ({err})");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to send push notification",
            }),
        )
    })?;

    let payload = payload.to_string();
    let report = push_service::broadcast_with_sender(sender, &subscriptions, &payload).await;
    if report.delivered == 0 {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to send push notification",
            }),
        ));
    }

    Ok(Json(SendNotificationResponse {
        success: true,
        delivered: report.delivered,
        failed: report.failed,
    }))
}

#[derive(Serialize)]
pub(crate) struct PublicKeyResponse {
    #[serde(rename = "publicKey")]
    pub(crate) public_key: String,
}

pub(crate) async fn push_public_key(
    State(state): State<state::AppState>,
) -> Json<PublicKeyResponse> {
    Json(PublicKeyResponse {
        public_key: state.config.vapid.public_key.clone(),
    })
}

pub(crate) async fn push_registry_debug(
    State(state): State<state::AppState>,
) -> Json<Vec<Subscription>> {
    let subscriptions = state
        .subscriptions
        .lock()
        .expect("subscription registry lock")
        .snapshot();
    Json(subscriptions)
}
