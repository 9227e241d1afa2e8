//! Layout parameters from a TOML file and CLI flags
//!
//! Values resolve in three layers: built-in defaults, then the `[layout]`
//! table of the file, then individual flags.
//!
//! ```toml
//! [layout]
//! radius = 260.0
//! vertical_compression = 0.6
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::common::ConfigBuilder;
use crate::error::{LayoutConfigParseError, OrbitError};
use crate::layout::{LayoutParams, LayoutParamsBuilder};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    pub layout: Option<LayoutOverrides>,
}

/// Partial layout parameters; `None` leaves the lower layer in place
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub radius: Option<f64>,
    pub horizontal_offset: Option<f64>,
    pub vertical_compression: Option<f64>,
    pub label_offset: Option<f64>,
    pub self_loop_offset: Option<f64>,
}

impl LayoutOverrides {
    pub fn apply(&self, builder: LayoutParamsBuilder) -> LayoutParamsBuilder {
        builder
            .with_center_x(self.center_x)
            .with_center_y(self.center_y)
            .with_radius(self.radius)
            .with_horizontal_offset(self.horizontal_offset)
            .with_vertical_compression(self.vertical_compression)
            .with_label_offset(self.label_offset)
            .with_self_loop_offset(self.self_loop_offset)
    }
}

impl LayoutFile {
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self, OrbitError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            OrbitError::LayoutConfigParseError(Box::new(LayoutConfigParseError {
                file: source_name.to_string(),
                source_code: NamedSource::new(source_name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn parse_file(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(|e| OrbitError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn overrides(&self) -> LayoutOverrides {
        self.layout.unwrap_or_default()
    }
}

/// Resolve defaults, then `file`, then `flags` into validated parameters
pub fn resolve_layout_params(
    file: Option<&Path>,
    flags: &LayoutOverrides,
) -> Result<LayoutParams, OrbitError> {
    let mut builder = LayoutParams::builder();

    if let Some(path) = file {
        let layout_file = LayoutFile::parse_file(path)?;
        debug!(path = %path.display(), "Loaded layout configuration");
        builder = layout_file.overrides().apply(builder);
    }

    flags.apply(builder).build()
}
