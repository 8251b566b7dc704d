use std::time::Duration;

/// Runtime configuration, sourced from environment variables only.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub session: SessionSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound for multipart upload bodies.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub ttl: Duration,
    pub sweep_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    /// `*` means any origin; otherwise a comma-separated allow-list.
    pub origins: Vec<String>,
    pub allow_any: bool,
}

const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Settings {
    pub fn from_env() -> Self {
        let cors_raw = std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let allow_any = cors_raw.trim() == "*";
        let origins = if allow_any {
            Vec::new()
        } else {
            cors_raw
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        };

        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_parse("SERVER_PORT", 8000),
                max_upload_bytes: env_parse("MAX_UPLOAD_MB", 25usize) * 1024 * 1024,
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/lexora".to_string()),
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 5),
            },
            llm: LlmSettings {
                api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                model: std::env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                timeout: Duration::from_secs(env_parse("LLM_TIMEOUT_SECONDS", 60)),
                max_retries: env_parse("LLM_MAX_RETRIES", 2),
            },
            session: SessionSettings {
                ttl: Duration::from_secs(env_parse("SESSION_TTL_SECONDS", 3600)),
                sweep_interval: Duration::from_secs(env_parse("SESSION_SWEEP_SECONDS", 60)),
            },
            cors: CorsSettings { origins, allow_any },
        }
    }
}
