use chrono::FixedOffset;
use tracing::{info, warn};
use wrench_utils::create_random_secret;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Fixed UTC offset in which booking day + slot time pairs are
    /// interpreted. A system-wide convention so that clients in different
    /// locales agree on the absolute service timestamp.
    pub booking_utc_offset: FixedOffset,
    /// Secret used to verify the bearer tokens issued by the identity
    /// provider
    pub token_signing_secret: String,
    /// HTTP email relay endpoint and credential
    pub email_api_url: String,
    pub email_api_key: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5100";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let offset_hours = std::env::var("BOOKING_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0);
        let booking_utc_offset = match FixedOffset::east_opt(offset_hours * 3600) {
            Some(offset) if (-12..=14).contains(&offset_hours) => offset,
            _ => {
                warn!(
                    "The given BOOKING_UTC_OFFSET_HOURS: {} is not valid, falling back to UTC.",
                    offset_hours
                );
                FixedOffset::east_opt(0).unwrap()
            }
        };

        let token_signing_secret = match std::env::var("TOKEN_SIGNING_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find TOKEN_SIGNING_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };

        let email_api_url = std::env::var("EMAIL_API_URL").unwrap_or_else(|_| {
            let default_url = "http://localhost:8025/send";
            info!(
                "Did not find EMAIL_API_URL environment variable. Using dev relay: {}",
                default_url
            );
            default_url.into()
        });
        let email_api_key = std::env::var("EMAIL_API_KEY").unwrap_or_default();

        Self {
            port,
            booking_utc_offset,
            token_signing_secret,
            email_api_url,
            email_api_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
