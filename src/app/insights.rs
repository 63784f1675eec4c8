use crate::insights::{InsightSummary, summarize};
use crate::state;

use axum::Json;
use axum::extract::State;
use time::OffsetDateTime;

pub(crate) async fn ai_insights(State(state): State<state::AppState>) -> Json<InsightSummary> {
    let tasks = state.tasks.lock().expect("task store lock").list();
    let today = OffsetDateTime::now_utc().date();
    Json(summarize(&tasks, today))
}
