use thiserror::Error;

use kiln_core::ColorParseError;

/// Errors raised while loading theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown {kind} token `{id}`")]
    UnknownToken { kind: &'static str, id: String },

    #[error("invalid color for token `{token}`: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },
}
