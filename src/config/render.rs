//! Render command configuration

use std::path::PathBuf;

use super::source::PayloadSource;
use crate::cli::RenderFormat;
use crate::error::OrbitError;
use crate::layout::LayoutParams;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source: PayloadSource,
    pub output: Option<PathBuf>,
    pub params: LayoutParams,
    pub format: RenderFormat,
    pub show_positions: bool,
    pub show_kinds: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    source: Option<PayloadSource>,
    output: Option<PathBuf>,
    params: Option<LayoutParams>,
    format: Option<RenderFormat>,
    show_positions: bool,
    show_kinds: bool,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: PayloadSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_show_positions(mut self, show_positions: bool) -> Self {
        self.show_positions = show_positions;
        self
    }

    pub fn with_show_kinds(mut self, show_kinds: bool) -> Self {
        self.show_kinds = show_kinds;
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, OrbitError> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        Ok(RenderConfig {
            source: self.source.ok_or_else(|| OrbitError::ConfigurationError {
                message: "Missing required field: source".to_string(),
            })?,
            output: self.output,
            params,
            format: self.format.ok_or_else(|| OrbitError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            show_positions: self.show_positions,
            show_kinds: self.show_kinds,
        })
    }
}
