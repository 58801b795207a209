//! Shared configuration loader for pubtable.
//!
//! `defaults/pubtable.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PubtableConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pubtable_render::{ErrorPolicy, HtmlTableOptions, ParseOptions, UrlPolicy};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pubtable.default.toml");

/// Top-level configuration consumed by pubtable applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PubtableConfig {
    pub input: InputConfig,
    pub render: RenderConfig,
    #[serde(default)]
    pub validate: ValidateConfig,
    pub logging: LoggingConfig,
}

impl PubtableConfig {
    /// Table options with the validation settings folded in
    pub fn html_options(&self) -> HtmlTableOptions {
        let mut options = HtmlTableOptions::from(&self.render);
        options.reference_name = self.validate.reference_name.clone();
        options
    }
}

/// BibTeX reading knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub decode_latex: bool,
}

impl From<&InputConfig> for ParseOptions {
    fn from(config: &InputConfig) -> Self {
        ParseOptions {
            decode_latex: config.decode_latex,
        }
    }
}

/// Mirrors the knobs exposed by the HTML table renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub table_id: String,
    pub asset_base_url: String,
    pub pdf_base_url: String,
    pub badge_class_prefix: String,
    pub toggle_function: String,
    pub annote_style: String,
    pub url_policy: UrlPolicyConfig,
    pub on_error: OnErrorConfig,
}

impl From<&RenderConfig> for HtmlTableOptions {
    fn from(config: &RenderConfig) -> Self {
        HtmlTableOptions {
            table_id: config.table_id.clone(),
            asset_base_url: config.asset_base_url.clone(),
            pdf_base_url: config.pdf_base_url.clone(),
            badge_class_prefix: config.badge_class_prefix.clone(),
            toggle_function: config.toggle_function.clone(),
            annote_style: config.annote_style.clone(),
            url_policy: config.url_policy.into(),
            on_error: config.on_error.into(),
            reference_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UrlPolicyConfig {
    #[serde(rename = "always")]
    Always,
    #[serde(rename = "prefer-pdf")]
    PreferPdf,
}

impl From<UrlPolicyConfig> for UrlPolicy {
    fn from(config: UrlPolicyConfig) -> Self {
        match config {
            UrlPolicyConfig::Always => UrlPolicy::Always,
            UrlPolicyConfig::PreferPdf => UrlPolicy::PreferPdf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OnErrorConfig {
    #[serde(rename = "abort")]
    Abort,
    #[serde(rename = "skip")]
    Skip,
}

impl From<OnErrorConfig> for ErrorPolicy {
    fn from(config: OnErrorConfig) -> Self {
        match config {
            OnErrorConfig::Abort => ErrorPolicy::Abort,
            OnErrorConfig::Skip => ErrorPolicy::Skip,
        }
    }
}

/// Tracked-author name check; disabled without a reference name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateConfig {
    #[serde(default)]
    pub reference_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PubtableConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PubtableConfig, ConfigError> {
    Loader::new().build()
}
