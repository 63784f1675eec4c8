use crate::assets;
use crate::config;
use crate::push::SubscriptionRegistry;
use crate::state;
use crate::tasks::TaskStore;
use crate::templates;
use crate::types::task::{TaskDraft, TaskStatus};

use askama::Template as _;
use axum::Router;
use axum::routing::{get, post, put};
use serde::Serialize;

mod insights;
mod push;
mod tasks;

/// Error body shared by all JSON endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

pub fn app(config: config::AppConfig) -> Router {
    let manifest = templates::ManifestTemplate {
        app_name: &config.app_name,
    }
    .render()
    .unwrap_or_else(|err| panic!("invalid manifest template: {err}"));

    let mut store = TaskStore::default();
    if config.seed_demo_tasks {
        seed_demo_tasks(&mut store);
    }

    let state = state::AppState {
        config,
        manifest,
        tasks: std::sync::Arc::new(std::sync::Mutex::new(store)),
        subscriptions: std::sync::Arc::new(std::sync::Mutex::new(SubscriptionRegistry::default())),
    };
    Router::new()
        .route("/", get(tasks::dashboard))
        .route("/tasks", get(tasks::task_list).post(tasks::task_create))
        .route(
            "/tasks/{id}",
            put(tasks::task_update).delete(tasks::task_delete),
        )
        .route("/subscribe", post(push::subscribe))
        .route("/send-notification", post(push::send_notification))
        .route("/ai-insights", get(insights::ai_insights))
        .route("/api/push/public-key", get(push::push_public_key))
        .route("/api/debug/push/registry", get(push::push_registry_debug))
        .route("/static/style.css", get(assets::stylesheet))
        .route("/static/app.js", get(assets::app_script))
        .route(
            "/static/features/push_subscribe.js",
            get(assets::push_subscribe_script),
        )
        .route(
            "/static/features/sw_register.js",
            get(assets::sw_register_script),
        )
        .route("/static/manifest.json", get(assets::manifest))
        .route("/sw.js", get(assets::service_worker))
        .route("/static/icons/icon.svg", get(assets::icon))
        .route("/health", get(health))
        .with_state(state)
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

fn seed_demo_tasks(store: &mut TaskStore) {
    store.create(TaskDraft {
        title: "Sample Task 1".to_string(),
        description: "This is a sample task".to_string(),
        status: TaskStatus::Pending,
        due_date: "2024-12-31".to_string(),
    });
    store.create(TaskDraft {
        title: "Sample Task 2".to_string(),
        description: "Another sample task".to_string(),
        status: TaskStatus::Completed,
        due_date: "2024-12-30".to_string(),
    });
}
