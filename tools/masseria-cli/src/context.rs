//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use masseria_cart::CartManager;
use masseria_fetch::{FetchClient, HttpTransport};
use masseria_store::{FileBackend, Store};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["masseria.toml", ".masseria.toml", "masseria.json"];

/// The manager type every command works with.
pub type Manager = CartManager<FileBackend, HttpTransport>;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, environment overrides applied.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, env: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        let config = match env {
            Some(env) => config.for_environment(env)?,
            None => config,
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory of the file-backed store.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Open the store and HTTP client and rehydrate the cart.
    pub fn manager(&self) -> Result<Manager> {
        let dir = self.storage_dir();
        debug!(dir = %dir.display(), base_url = %self.config.http.base_url, "opening cart");
        let backend = FileBackend::open(&dir)
            .with_context(|| format!("Failed to open store at {}", dir.display()))?;

        let transport =
            HttpTransport::new(self.config.http.timeout()).context("Failed to build HTTP client")?;
        let client = FetchClient::new(transport).with_base_url(self.config.http.base_url.clone());

        CartManager::load(Store::new(backend), client, self.config.cart.clone())
            .context("Failed to load cart")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file walking up from `start`.
///
/// A file that exists but does not parse is an error rather than skipped.
fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let path = config_path
                    .to_str()
                    .with_context(|| format!("Non UTF-8 config path: {}", config_path.display()))?;
                return Ok(Some((CliConfig::load(path)?, config_path.clone())));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}
