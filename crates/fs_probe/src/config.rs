// crates/fs_probe/src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the root under which temporary folders are created.
pub const TEMP_ROOT_ENV: &str = "TOOLKIT_TEMP_ROOT";
/// Overrides the default directory-size time budget, in milliseconds.
pub const DIR_SIZE_BUDGET_ENV: &str = "TOOLKIT_DIR_SIZE_BUDGET_MS";

const TEMP_ROOT_DIR_NAME: &str = "context-toolkit";
const DEFAULT_LEAF_NAME: &str = "scratch";
const DEFAULT_DIR_SIZE_BUDGET: Duration = Duration::from_secs(5);

/// Settings shared by the filesystem probes.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    /// Every temporary folder lives somewhere under this directory.
    pub temp_root: PathBuf,
    /// Leaf name used when a temporary folder is requested without a name.
    pub default_leaf: String,
    /// Budget handed to `dir_size` by callers that have no opinion.
    pub dir_size_budget: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            temp_root: env::temp_dir().join(TEMP_ROOT_DIR_NAME),
            default_leaf: DEFAULT_LEAF_NAME.to_string(),
            dir_size_budget: DEFAULT_DIR_SIZE_BUDGET,
        }
    }
}

impl ProbeConfig {
    /// Defaults, with [`TEMP_ROOT_ENV`] and [`DIR_SIZE_BUDGET_ENV`] applied
    /// when set. An unparsable budget is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(root) = env::var(TEMP_ROOT_ENV) {
            if !root.trim().is_empty() {
                config.temp_root = PathBuf::from(root);
            }
        }

        if let Ok(raw) = env::var(DIR_SIZE_BUDGET_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.dir_size_budget = Duration::from_millis(ms),
                Err(err) => log::warn!(
                    "ignoring {}={:?}: {}",
                    DIR_SIZE_BUDGET_ENV,
                    raw,
                    err
                ),
            }
        }

        config
    }
}
