//! Layout command configuration

use std::path::PathBuf;

use super::source::PayloadSource;
use crate::error::OrbitError;
use crate::layout::LayoutParams;

#[derive(Debug, Clone)]
pub struct LayoutCommandConfig {
    pub source: PayloadSource,
    pub output: Option<PathBuf>,
    pub params: LayoutParams,
}

impl LayoutCommandConfig {
    pub fn builder() -> LayoutCommandConfigBuilder {
        LayoutCommandConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LayoutCommandConfigBuilder {
    source: Option<PayloadSource>,
    output: Option<PathBuf>,
    params: Option<LayoutParams>,
}

impl LayoutCommandConfigBuilder {
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
}

impl crate::common::ConfigBuilder for LayoutCommandConfigBuilder {
    type Config = LayoutCommandConfig;

    fn build(self) -> Result<Self::Config, OrbitError> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        Ok(LayoutCommandConfig {
            source: self.source.ok_or_else(|| OrbitError::ConfigurationError {
                message: "Missing required field: source".to_string(),
            })?,
            output: self.output,
            params,
        })
    }
}
