use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API key not found. Set the {env_var} environment variable or add api_key to the config.")]
    MissingApiKey { env_var: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error{}: {message}", status.map(|c| format!(" (HTTP {c})")).unwrap_or_default())]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("accepted response is missing the {header} header")]
    MissingRequestId { header: &'static str },

    #[error("job still in progress after {attempts} poll attempts")]
    PollTimeout { attempts: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
