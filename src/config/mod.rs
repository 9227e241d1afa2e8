//! # Configuration Module
//!
//! Configuration structures for every service-orbit command, each with a
//! builder, plus the layered layout parameter resolution shared by the
//! `layout` and `render` commands.
//!
//! ## Command Configurations
//!
//! - **BuildConfig**: Configuration for the `build` command
//! - **LayoutCommandConfig**: Configuration for the `layout` command
//! - **RenderConfig**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use service_orbit::cli::RenderFormat;
//! use service_orbit::common::ConfigBuilder;
//! use service_orbit::config::{LayoutOverrides, PayloadSource, RenderConfig, resolve_layout_params};
//!
//! let flags = LayoutOverrides {
//!     radius: Some(180.0),
//!     ..LayoutOverrides::default()
//! };
//! let params = resolve_layout_params(None, &flags).unwrap();
//!
//! let config = RenderConfig::builder()
//!     .with_source(PayloadSource::Stdin)
//!     .with_format(RenderFormat::Mermaid)
//!     .with_params(params)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.params.radius, 180.0);
//! ```

pub mod build;
pub mod layout;
pub mod layout_file;
pub mod render;
pub mod source;

pub use build::BuildConfig;
pub use layout::LayoutCommandConfig;
pub use layout_file::{LayoutFile, LayoutOverrides, resolve_layout_params};
pub use render::RenderConfig;
pub use source::PayloadSource;
