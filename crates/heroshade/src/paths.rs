use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories_next::ProjectDirs;

pub const ENV_CONFIG_DIR: &str = "HEROSHADE_CONFIG_DIR";

const QUALIFIER: &str = "com";
const ORGANISATION: &str = "Bona";
const APPLICATION: &str = "Heroshade";

/// Resolved user directories for the app.
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        if let Some(overridden) = env::var_os(ENV_CONFIG_DIR) {
            return Ok(Self {
                config_dir: PathBuf::from(overridden),
            });
        }
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION)
            .ok_or_else(|| anyhow!("failed to determine user directories"))?;
        Ok(Self {
            config_dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Default page configuration location; may not exist.
    pub fn page_config(&self) -> PathBuf {
        self.config_dir.join("page.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_config_lives_under_the_config_dir() {
        let paths = AppPaths {
            config_dir: PathBuf::from("/tmp/heroshade-test"),
        };
        assert_eq!(
            paths.page_config(),
            PathBuf::from("/tmp/heroshade-test/page.toml")
        );
    }
}
