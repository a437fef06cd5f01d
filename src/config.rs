use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_METRIC_DIRECTORY: &str = "tmp/metric_fu/scratch/rcov";
const DEFAULT_REPORT_FILE: &str = "rcov.txt";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    rcov: RcovConfig,
}

/// Where the rcov text report is found
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RcovConfig {
    /// Report produced outside of this tool; takes precedence when set
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default = "default_metric_directory")]
    pub metric_directory: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_metric_directory() -> String {
    DEFAULT_METRIC_DIRECTORY.to_string()
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

impl Default for RcovConfig {
    fn default() -> Self {
        Self {
            external: None,
            metric_directory: default_metric_directory(),
            report_file: default_report_file(),
        }
    }
}

impl RcovConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.rcov.validate()?;
        Ok(file.rcov)
    }

    fn validate(&self) -> Result<()> {
        if self.external.as_deref().is_some_and(|p| p.trim().is_empty()) {
            anyhow::bail!("rcov.external must not be empty when set");
        }
        if self.report_file.trim().is_empty() {
            anyhow::bail!("rcov.report_file must not be empty");
        }
        Ok(())
    }

    /// Location of the raw report, with `~` and `$VAR` expanded
    pub fn output_path(&self) -> Result<PathBuf> {
        match &self.external {
            Some(external) => expand(external),
            None => Ok(expand(&self.metric_directory)?.join(&self.report_file)),
        }
    }
}

fn expand(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand path: {}", path))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
