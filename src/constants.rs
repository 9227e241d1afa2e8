//! Configuration constants for service-orbit
//!
//! Layout defaults live in [`crate::layout::defaults`]; this module holds the
//! CLI-facing ones.

/// Payload input configuration
pub mod input {
    /// Input argument meaning "read the payload from stdin"
    pub const STDIN_MARKER: &str = "-";
}

/// Output formatting configuration
pub mod output {
    /// Default render format when not specified
    pub const DEFAULT_RENDER_FORMAT: &str = "ascii";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directives
    pub const FILTER_ENV: &str = "SERVICE_ORBIT_LOG";

    /// Filter used when the variable is unset or invalid
    pub const DEFAULT_FILTER: &str = "warn";
}
