use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How a file body is copied onto the client channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    /// Copy line by line, terminating every line with `\n`.
    ///
    /// A last line without a terminator gains one, so the transmitted byte
    /// count can exceed the advertised `Content-Length`.
    Lines,
    /// Copy the raw bytes unchanged.
    Bytes,
}

impl FromStr for BodyMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(BodyMode::Lines),
            "bytes" => Ok(BodyMode::Bytes),
            _ => Err(anyhow::anyhow!("unknown body mode {:?}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface the listener binds to in server mode
    pub address: String,
    /// Directory request paths are resolved against
    pub document_root: PathBuf,
    /// File served for `/` and for an empty target
    pub default_document: String,
    pub body_mode: BodyMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            document_root: PathBuf::from("."),
            default_document: "index.html".to_string(),
            body_mode: BodyMode::Lines,
        }
    }
}

impl Config {
    /// Defaults overridden by `LISTEN_ADDR`, `DOC_ROOT`, `DEFAULT_DOCUMENT`
    /// and `BODY_MODE` from the process environment.
    pub fn load() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a YAML config file, then applies the environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg = Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN_ADDR") {
            self.address = addr;
        }
        if let Some(root) = lookup("DOC_ROOT") {
            self.document_root = PathBuf::from(root);
        }
        if let Some(doc) = lookup("DEFAULT_DOCUMENT") {
            self.default_document = doc;
        }
        if let Some(mode) = lookup("BODY_MODE") {
            match mode.parse::<BodyMode>() {
                Ok(m) => self.body_mode = m,
                Err(e) => tracing::warn!(error = %e, "Ignoring BODY_MODE"),
            }
        }
        self
    }
}
