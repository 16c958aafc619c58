use crate::cli::Args;
use crate::errors::AppError;
use crate::fs_tree::ChildOrder;
use crate::matcher::MatchSpec;
use crate::render::{OutputFormat, RenderConfig};
use crate::sidebar::SidebarConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory
pub const LOCAL_CONFIG: &str = "sidenav.toml";

/// Settings as written in a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub ext: Option<String>,
    pub format: Option<OutputFormat>,
    pub order: Option<ChildOrder>,
    pub hide: Option<Vec<String>>,
    pub exclude: Vec<String>,
    pub gitignore: bool,
    pub hidden: bool,
    pub base_url: Option<String>,
    pub link_root: Option<PathBuf>,
    pub layout: bool,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the config file to use: the explicit one, then `./sidenav.toml`,
    /// then `<config dir>/sidenav/config.toml`.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("sidenav").join("config.toml"))
            .filter(|path| path.is_file())
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub sidebar: SidebarConfig,
    pub render: RenderConfig,
}

impl Settings {
    /// Discover and load the config file, then apply CLI overrides
    pub fn load(args: &Args) -> Result<Self, AppError> {
        let file = match FileConfig::discover(args.config.as_deref()) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }

    /// Merge defaults, file values and flags. Flags win; excludes accumulate.
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let defaults = SidebarConfig::default();

        let hide = if !args.hide.is_empty() {
            args.hide.clone()
        } else {
            file.hide.unwrap_or(defaults.matcher.hide)
        };

        let mut exclude = file.exclude;
        exclude.extend(args.exclude.iter().cloned());

        let matcher = MatchSpec::new()
            .with_hide(hide)
            .with_exclude_glob(exclude)
            .with_gitignore(args.gitignore || file.gitignore)
            .with_hidden(args.all || file.hidden);

        let sidebar = SidebarConfig {
            root: args.root.clone().or(file.root).unwrap_or(defaults.root),
            ext: args.ext.clone().or(file.ext).unwrap_or(defaults.ext),
            matcher,
            order: args.order.or(file.order).unwrap_or(defaults.order),
            base_url: args.base_url.clone().or(file.base_url),
            link_root: args.link_root.clone().or(file.link_root),
        };

        let render = RenderConfig {
            format: args.format.or(file.format).unwrap_or_default(),
            layout: args.layout || file.layout,
        };

        Self { sidebar, render }
    }
}
