use std::env;
use std::time::Duration;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
pub const DEFAULT_KEY_PREFIX: &str = "skribbl";
pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;

#[derive(Clone)]
pub struct AppConfig {
    pub bot_token: Option<String>,
    pub database_url: Option<String>,
    pub admin_password: String,
    pub key_prefix: String,
    pub toast_ttl: Duration,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = non_blank(lookup("TELOXIDE_TOKEN"));
        let database_url =
            non_blank(lookup("DATABASE_URL")).or_else(|| non_blank(lookup("REDIS_URL")));

        // The secret itself is not trimmed: surrounding spaces are part of it.
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        let key_prefix = non_blank(lookup("REDIS_KEY_PREFIX"))
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());

        let toast_ttl_secs = lookup("TOAST_TTL_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TOAST_TTL_SECS);

        Self {
            bot_token,
            database_url,
            admin_password,
            key_prefix,
            toast_ttl: Duration::from_secs(toast_ttl_secs),
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.bot_token, None);
        assert_eq!(config.database_url, None);
        assert_eq!(config.admin_password, "admin");
        assert!(config.uses_default_password());
        assert_eq!(config.key_prefix, "skribbl");
        assert_eq!(config.toast_ttl, Duration::from_secs(4));
    }

    #[test]
    fn database_url_falls_back_to_redis_url() {
        let config = config_from(&[("DATABASE_URL", "  "), ("REDIS_URL", "redis://cache:6379")]);
        assert_eq!(config.database_url.as_deref(), Some("redis://cache:6379"));

        let config = config_from(&[
            ("DATABASE_URL", "redis://primary:6379"),
            ("REDIS_URL", "redis://cache:6379"),
        ]);
        assert_eq!(config.database_url.as_deref(), Some("redis://primary:6379"));
    }

    #[test]
    fn explicit_values_are_used() {
        let config = config_from(&[
            ("ADMIN_PASSWORD", "s3cret "),
            ("REDIS_KEY_PREFIX", "party"),
            ("TOAST_TTL_SECS", "10"),
        ]);
        assert_eq!(config.admin_password, "s3cret ");
        assert!(!config.uses_default_password());
        assert_eq!(config.key_prefix, "party");
        assert_eq!(config.toast_ttl, Duration::from_secs(10));
    }

    #[test]
    fn bot_token_is_read() {
        let config = config_from(&[("TELOXIDE_TOKEN", " 123:abc ")]);
        assert_eq!(config.bot_token.as_deref(), Some("123:abc"));
    }

    #[test]
    fn unparsable_ttl_uses_default() {
        let config = config_from(&[("TOAST_TTL_SECS", "soon")]);
        assert_eq!(config.toast_ttl, Duration::from_secs(DEFAULT_TOAST_TTL_SECS));
    }
}
