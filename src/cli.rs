use crate::fs_tree::ChildOrder;
use crate::render::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sidenav")]
#[command(version)]
#[command(about = "Builds a documentation sidebar from a directory of content files")]
#[command(
    long_about = "Builds a documentation sidebar from a directory of content files.\n\nTop-level entries of the content directory become sections and their children become links.\nSettings are read from --config, ./sidenav.toml, or the user config directory; flags override them."
)]
pub struct Args {
    /// Content directory to scan (default: docs)
    pub root: Option<PathBuf>,

    /// Read settings from this TOML file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Extension stripped from labels (default: .mdx)
    #[arg(long = "ext")]
    pub ext: Option<String>,

    /// Hide entries whose path contains this text (repeatable, default: index)
    #[arg(long = "hide")]
    pub hide: Vec<String>,

    /// Exclude entries matching a glob relative to the content directory (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Drop entries ignored by .gitignore files
    #[arg(long = "gitignore")]
    pub gitignore: bool,

    /// Include dot-files and dot-directories
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Order of entries within a directory
    #[arg(long = "order", value_enum)]
    pub order: Option<ChildOrder>,

    /// Prefix every href with this URL
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Make hrefs relative to this directory
    #[arg(long = "link-root")]
    pub link_root: Option<PathBuf>,

    /// Wrap HTML output in the page layout
    #[arg(long = "layout")]
    pub layout: bool,

    /// Log verbosity on stderr
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sidenav"]);

        assert!(args.root.is_none());
        assert!(args.format.is_none());
        assert!(args.hide.is_empty());
        assert!(!args.layout);
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_repeatable_flags() {
        let args = Args::parse_from([
            "sidenav", "site/docs", "-x", "drafts", "--exclude", "*.png", "--hide", "index",
            "--hide", "_partial", "--order", "name", "-f", "json",
        ]);

        assert_eq!(args.root, Some(PathBuf::from("site/docs")));
        assert_eq!(args.exclude, vec!["drafts", "*.png"]);
        assert_eq!(args.hide, vec!["index", "_partial"]);
        assert_eq!(args.order, Some(ChildOrder::Name));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(LogLevel::Off.to_tracing_level(), None);
        assert_eq!(LogLevel::Debug.to_tracing_level(), Some(tracing::Level::DEBUG));
    }
}
