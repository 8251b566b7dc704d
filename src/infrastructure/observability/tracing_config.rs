/// Output selection for the tracing subscriber, resolved once at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json|plain` picks the output shape explicitly; without it,
    /// production environments get JSON lines and everything else plain text.
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(value) => value.eq_ignore_ascii_case("json"),
            Err(_) => environment == "production",
        };

        Self {
            environment,
            json_format,
        }
    }
}
