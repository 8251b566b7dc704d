mod settings;

pub use settings::{
    CorsSettings, DatabaseSettings, LlmSettings, ServerSettings, SessionSettings, Settings,
};
