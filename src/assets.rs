use crate::state::AppState;

use axum::extract::State;

pub(crate) async fn manifest(State(state): State<AppState>) -> axum::response::Response {
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/manifest+json")
        .header("cache-control", "public, max-age=3600")
        .body(state.manifest.into())
        .unwrap()
}

pub(crate) async fn stylesheet() -> axum::response::Response {
    const CSS_CONTENT: &str = include_str!("../static/style.css");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "text/css")
        .header("cache-control", "public, max-age=3600")
        .body(CSS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn app_script() -> axum::response::Response {
    const APP_JS_CONTENT: &str = include_str!("../static/app.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(APP_JS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn push_subscribe_script() -> axum::response::Response {
    const PUSH_SUBSCRIBE_JS_CONTENT: &str = include_str!("../static/features/push_subscribe.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(PUSH_SUBSCRIBE_JS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn sw_register_script() -> axum::response::Response {
    const SW_REGISTER_JS_CONTENT: &str = include_str!("../static/features/sw_register.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(SW_REGISTER_JS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn service_worker() -> axum::response::Response {
    const SW_CONTENT: &str = include_str!("../static/sw.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "no-cache")
        .body(SW_CONTENT.into())
        .unwrap()
}

pub(crate) async fn icon() -> axum::response::Response {
    const ICON_SVG_CONTENT: &str = include_str!("../static/icons/icon.svg");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "image/svg+xml")
        .header("cache-control", "public, max-age=86400")
        .body(ICON_SVG_CONTENT.into())
        .unwrap()
}
