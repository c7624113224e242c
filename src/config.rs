use std::time::Duration;

/// How long a transient toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Hard cap on a blog submission before the form is forcibly released.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration for the admin core, read from environment
/// variables with development-friendly fallbacks.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Cloudinary cloud name the image uploads target.
    pub cloudinary_cloud_name: String,
    /// Unsigned upload preset registered with that cloud.
    pub cloudinary_upload_preset: String,
    /// Blog submission timeout.
    pub submit_timeout: Duration,
    /// Toast auto-dismiss interval.
    pub toast_ttl: Duration,
}

impl Default for AdminConfig {
    fn default() -> Self {
        dotenvy::dotenv().ok();
        Self {
            cloudinary_cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
                .unwrap_or_else(|_| "demo".to_string()),
            cloudinary_upload_preset: std::env::var("CLOUDINARY_UPLOAD_PRESET")
                .unwrap_or_else(|_| "unsigned".to_string()),
            submit_timeout: std::env::var("SUBMIT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(SUBMIT_TIMEOUT),
            toast_ttl: std::env::var("TOAST_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(TOAST_TTL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_uses_env_or_fallback() {
        let config = AdminConfig::default();
        assert!(!config.cloudinary_cloud_name.is_empty());
        assert!(!config.cloudinary_upload_preset.is_empty());
        assert!(config.submit_timeout >= Duration::from_secs(1));
        assert!(config.toast_ttl >= Duration::from_secs(1));
    }
}
