pub use crate::types::push::VapidConfig;

#[derive(Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub port: u16,
    pub seed_demo_tasks: bool,
    pub vapid: VapidConfig,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Taskdeck".to_string(),
            port: 5000,
            seed_demo_tasks: false,
            vapid: VapidConfig {
                // 43 base64url chars decode to 32 zero bytes: sized like a real
                // key so parsing reaches scalar validation, but zero is not a
                // valid P-256 scalar, so signing errors before any network I/O.
                private_key: "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string(),
                public_key: "test-public-key".to_string(),
                subject: "mailto:taskdeck@example.com".to_string(),
            },
        }
    }
}
