use crate::config::AppConfig;
use crate::push::SubscriptionRegistry;
use crate::tasks::TaskStore;

use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub(crate) manifest: String,
    pub(crate) tasks: Arc<Mutex<TaskStore>>,
    pub(crate) subscriptions: Arc<Mutex<SubscriptionRegistry>>,
}
