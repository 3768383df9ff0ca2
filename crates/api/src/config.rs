//! Application configuration loaded from environment variables.

use std::time::Duration;

use printing::RetryPolicy;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `IMAGE_PATH`: directory holding uploaded item images (default: `"./images"`)
/// - `PRINTER_DEVICE`: file or device receipts are appended to; unset prints to the log
/// - `PRINT_MAX_ATTEMPTS`: send attempts per receipt (default: `1`, no retry)
/// - `PRINT_RETRY_BACKOFF_MS`: pause between attempts (default: `200`)
/// - `MAX_UPLOAD_BYTES`: request body limit for image uploads (default: 10 MiB)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub image_path: String,
    pub printer_device: Option<String>,
    pub print_max_attempts: u32,
    pub print_retry_backoff_ms: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "PORT").unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            image_path: lookup("IMAGE_PATH").unwrap_or(defaults.image_path),
            printer_device: lookup("PRINTER_DEVICE").filter(|d| !d.trim().is_empty()),
            print_max_attempts: parsed(&lookup, "PRINT_MAX_ATTEMPTS")
                .unwrap_or(defaults.print_max_attempts),
            print_retry_backoff_ms: parsed(&lookup, "PRINT_RETRY_BACKOFF_MS")
                .unwrap_or(defaults.print_retry_backoff_ms),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES")
                .unwrap_or(defaults.max_upload_bytes),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the retry policy for receipt printing.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.print_max_attempts,
            Duration::from_millis(self.print_retry_backoff_ms),
        )
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            image_path: "./images".to_string(),
            printer_device: None,
            print_max_attempts: 1,
            print_retry_backoff_ms: 200,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
