use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid relationship payload in '{file}'")]
#[diagnostic(
    code(service_orbit::payload_parse_error),
    help("The payload must be a JSON object with `subject`, `provides` and `consumes` fields")
)]
pub struct PayloadParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid layout configuration in '{file}'")]
#[diagnostic(
    code(service_orbit::layout_config_parse_error),
    help("Layout settings live under a `[layout]` table, e.g. `radius = 220.0`")
)]
pub struct LayoutConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum OrbitError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(service_orbit::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    PayloadParseError(Box<PayloadParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LayoutConfigParseError(Box<LayoutConfigParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(service_orbit::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(service_orbit::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(service_orbit::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(service_orbit::config_error),
        help("Check your command arguments and layout configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(service_orbit::graph_error),
        help("The graph was not produced by the builder or was modified afterwards")
    )]
    GraphError { message: String },
}
