//! Build command configuration

use std::path::PathBuf;

use super::source::PayloadSource;
use crate::error::OrbitError;

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub source: PayloadSource,
    pub output: Option<PathBuf>,
    pub validate: bool,
}

impl BuildConfig {
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct BuildConfigBuilder {
    source: Option<PayloadSource>,
    output: Option<PathBuf>,
    validate: bool,
}

impl BuildConfigBuilder {
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

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl crate::common::ConfigBuilder for BuildConfigBuilder {
    type Config = BuildConfig;

    fn build(self) -> Result<Self::Config, OrbitError> {
        Ok(BuildConfig {
            source: self.source.ok_or_else(|| OrbitError::ConfigurationError {
                message: "Missing required field: source".to_string(),
            })?,
            output: self.output,
            validate: self.validate,
        })
    }
}
