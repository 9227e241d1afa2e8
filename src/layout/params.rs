//! Layout parameters
//!
//! Canvas geometry is passed explicitly to the layout engine rather than
//! read from module constants, so alternative canvas sizes can be laid out
//! and tested side by side.

use serde::{Deserialize, Serialize};

use crate::common::ConfigBuilder;
use crate::error::OrbitError;

/// Default layout values
pub mod defaults {
    pub const CENTER_X: f64 = 400.0;
    pub const CENTER_Y: f64 = 300.0;
    pub const RADIUS: f64 = 220.0;
    pub const HORIZONTAL_OFFSET: f64 = 80.0;
    pub const VERTICAL_COMPRESSION: f64 = 0.7;
    pub const LABEL_OFFSET: f64 = 12.0;
    pub const SELF_LOOP_OFFSET: f64 = 36.0;
}

/// Geometry of the radial layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    /// Canvas center, where the subject sits
    pub center_x: f64,
    pub center_y: f64,
    /// Radius of the arcs providers and consumers are spread along
    pub radius: f64,
    /// Horizontal bias pushing providers left and consumers right
    pub horizontal_offset: f64,
    /// Vertical squash applied to both arcs, strictly between 0 and 1
    pub vertical_compression: f64,
    /// Distance an edge label is pushed off its edge
    pub label_offset: f64,
    /// Distance a self-loop label sits above its node
    pub self_loop_offset: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center_x: defaults::CENTER_X,
            center_y: defaults::CENTER_Y,
            radius: defaults::RADIUS,
            horizontal_offset: defaults::HORIZONTAL_OFFSET,
            vertical_compression: defaults::VERTICAL_COMPRESSION,
            label_offset: defaults::LABEL_OFFSET,
            self_loop_offset: defaults::SELF_LOOP_OFFSET,
        }
    }
}

impl LayoutParams {
    pub fn builder() -> LayoutParamsBuilder {
        LayoutParamsBuilder::new()
    }

    pub fn validate(&self) -> Result<(), OrbitError> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("radius", self.radius),
            ("horizontal_offset", self.horizontal_offset),
            ("vertical_compression", self.vertical_compression),
            ("label_offset", self.label_offset),
            ("self_loop_offset", self.self_loop_offset),
        ];

        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be a finite number, got {value}")));
        }

        if self.radius <= 0.0 {
            return Err(invalid(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }

        if !(self.vertical_compression > 0.0 && self.vertical_compression < 1.0) {
            return Err(invalid(format!(
                "vertical_compression must be between 0 and 1 (exclusive), got {}",
                self.vertical_compression
            )));
        }

        for (name, value) in [
            ("horizontal_offset", self.horizontal_offset),
            ("label_offset", self.label_offset),
            ("self_loop_offset", self.self_loop_offset),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> OrbitError {
    OrbitError::ConfigurationError { message }
}

/// Builder for [`LayoutParams`]; unset fields take their defaults
#[derive(Debug, Default, Clone)]
pub struct LayoutParamsBuilder {
    center_x: Option<f64>,
    center_y: Option<f64>,
    radius: Option<f64>,
    horizontal_offset: Option<f64>,
    vertical_compression: Option<f64>,
    label_offset: Option<f64>,
    self_loop_offset: Option<f64>,
}

impl LayoutParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center_x = Some(x);
        self.center_y = Some(y);
        self
    }

    pub fn with_center_x(mut self, center_x: Option<f64>) -> Self {
        self.center_x = center_x.or(self.center_x);
        self
    }

    pub fn with_center_y(mut self, center_y: Option<f64>) -> Self {
        self.center_y = center_y.or(self.center_y);
        self
    }

    pub fn with_radius(mut self, radius: Option<f64>) -> Self {
        self.radius = radius.or(self.radius);
        self
    }

    pub fn with_horizontal_offset(mut self, horizontal_offset: Option<f64>) -> Self {
        self.horizontal_offset = horizontal_offset.or(self.horizontal_offset);
        self
    }

    pub fn with_vertical_compression(mut self, vertical_compression: Option<f64>) -> Self {
        self.vertical_compression = vertical_compression.or(self.vertical_compression);
        self
    }

    pub fn with_label_offset(mut self, label_offset: Option<f64>) -> Self {
        self.label_offset = label_offset.or(self.label_offset);
        self
    }

    pub fn with_self_loop_offset(mut self, self_loop_offset: Option<f64>) -> Self {
        self.self_loop_offset = self_loop_offset.or(self.self_loop_offset);
        self
    }
}

impl ConfigBuilder for LayoutParamsBuilder {
    type Config = LayoutParams;

    fn build(self) -> Result<Self::Config, OrbitError> {
        let params = LayoutParams {
            center_x: self.center_x.unwrap_or(defaults::CENTER_X),
            center_y: self.center_y.unwrap_or(defaults::CENTER_Y),
            radius: self.radius.unwrap_or(defaults::RADIUS),
            horizontal_offset: self.horizontal_offset.unwrap_or(defaults::HORIZONTAL_OFFSET),
            vertical_compression: self
                .vertical_compression
                .unwrap_or(defaults::VERTICAL_COMPRESSION),
            label_offset: self.label_offset.unwrap_or(defaults::LABEL_OFFSET),
            self_loop_offset: self.self_loop_offset.unwrap_or(defaults::SELF_LOOP_OFFSET),
        };

        params.validate()?;
        Ok(params)
    }
}
