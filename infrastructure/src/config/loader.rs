//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["nationsense.toml", ".nationsense.toml"];
const ENV_PREFIX: &str = "NATIONSENSE_";

/// The files (and env layer) a load will merge, lowest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
    pub env: bool,
}

impl ConfigSources {
    /// Discover the sources present on this machine
    pub fn discover(config_path: Option<&Path>) -> Self {
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(),
            explicit: config_path.map(Path::to_path_buf),
            env: true,
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `NATIONSENSE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./nationsense.toml` or `./.nationsense.toml`
    /// 4. Global: `<config_dir>/nationsense/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(&ConfigSources::discover(config_path))
    }

    /// Load from an explicit set of sources
    pub fn load_from(sources: &ConfigSources) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = &sources.global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = &sources.project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = &sources.explicit {
            if !path.exists() {
                let message = format!("config file not found: {}", path.display());
                return Err(Box::new(figment::Error::from(message)));
            }
            figment = figment.merge(Toml::file(path));
        }
        if sources.env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/nationsense/config.toml if set,
    /// otherwise falls back to ~/.config/nationsense/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("nationsense").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(sources: &ConfigSources) {
        println!("Configuration sources (in priority order):");

        if sources.env {
            println!("  [ENV  ] Environment: {}*", ENV_PREFIX);
        }
        match &sources.explicit {
            Some(path) => println!("  [FOUND] Explicit: {}", path.display()),
            None => println!("  [     ] Explicit: --config <path>"),
        }
        match &sources.project {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./nationsense.toml or ./.nationsense.toml"),
        }
        match (&sources.global, Self::global_config_path()) {
            (Some(path), _) => println!("  [FOUND] Global:  {}", path.display()),
            (None, Some(path)) => println!("  [     ] Global:  {}", path.display()),
            (None, None) => {}
        }

        println!("  [     ] Default: built-in defaults");
    }
}
