//! Site configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INQUIRY_FROM: &str = "Merch Inquiries <inquiries@merchsite.dev>";
pub const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_OUTBOUND_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Credentials for the corporate inquiry mailer. Both pieces are required
/// for inquiries to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub resend_api_key: String,
    pub from: String,
    pub to: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub website_dir: PathBuf,
    pub mailer: Option<MailerConfig>,
    pub dropbox_token: Option<String>,
    pub drive_api_key: Option<String>,
    pub timeouts: OutboundTimeouts,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: purchase orders stay in memory when absent
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `WEBSITE_DIR`: default `./website`
    /// - `RESEND_API_KEY`, `INQUIRY_TO_EMAIL`, `INQUIRY_FROM_EMAIL`
    /// - `DROPBOX_ACCESS_TOKEN`, `GOOGLE_DRIVE_API_KEY`
    /// - `SCRAPE_TIMEOUT_SECS`: default 15
    /// - `SCRAPE_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: "0".into() });
        }
        let website_dir = get("WEBSITE_DIR").map_or_else(|| PathBuf::from("website"), PathBuf::from);

        let mailer = match (get("RESEND_API_KEY"), get("INQUIRY_TO_EMAIL")) {
            (Some(resend_api_key), Some(to_raw)) => {
                let to = split_recipients(&to_raw);
                if to.is_empty() {
                    None
                } else {
                    Some(MailerConfig {
                        resend_api_key,
                        from: get("INQUIRY_FROM_EMAIL").unwrap_or_else(|| DEFAULT_INQUIRY_FROM.to_owned()),
                        to,
                    })
                }
            }
            _ => None,
        };

        let timeouts = OutboundTimeouts {
            request_secs: parse_or("SCRAPE_TIMEOUT_SECS", get("SCRAPE_TIMEOUT_SECS"), DEFAULT_OUTBOUND_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "SCRAPE_CONNECT_TIMEOUT_SECS",
                get("SCRAPE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_OUTBOUND_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            db_max_connections,
            website_dir,
            mailer,
            dropbox_token: get("DROPBOX_ACCESS_TOKEN"),
            drive_api_key: get("GOOGLE_DRIVE_API_KEY"),
            timeouts,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
