use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sticker_manifest::{GeneratorConfig, ManifestOrder};

/// Scan the sticker folder and write the JSON manifest the chat front-end loads.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory the sticker folder and manifest resolve against [default: executable's directory]
    #[clap(env = "STICKER_BASE_DIR", long)]
    pub base_dir: Option<PathBuf>,
    /// Config file to load instead of discovering one in the base directory
    #[clap(env = "STICKER_CONFIG", long)]
    pub config: Option<PathBuf>,
    /// Name of the folder holding sticker images
    #[clap(env = "STICKER_SOURCE_DIR", long)]
    pub source_dir: Option<String>,
    /// Name of the manifest file to write
    #[clap(env = "STICKER_OUTPUT_FILE", long)]
    pub output_file: Option<String>,
    /// Accepted image extension, repeatable
    #[clap(env = "STICKER_EXTENSIONS", long = "extension", value_delimiter = ',')]
    pub extensions: Vec<String>,
    /// Order of manifest entries
    #[clap(env = "STICKER_ORDER", long, value_enum)]
    pub order: Option<OrderArg>,
    /// Console log verbosity
    #[clap(env = "STICKER_LOG", long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Layer command line and environment overrides on top of `config`.
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(source_dir) = &self.source_dir {
            config.source_dir = source_dir.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.output_file = output_file.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if let Some(order) = self.order {
            config.order = order.into();
        }
        config
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderArg {
    Listing,
    Name,
}

impl From<OrderArg> for ManifestOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Listing => ManifestOrder::Listing,
            OrderArg::Name => ManifestOrder::Name,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
