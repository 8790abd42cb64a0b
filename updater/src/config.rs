//! The persisted rules file

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

/// Everything the updater needs, kept in one small JSON file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Labels the ingress rules in the AWS console
    pub device_name: Option<String>,

    /// URL of the deployed IP echo endpoint
    pub ip_server: String,

    pub rules: Vec<Rule>,
}

/// One port to manage on one security group
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub security_group_id: String,
    pub port: u16,
}

impl Config {
    /// # Errors
    ///
    /// Will return `Err` when the file cannot be read or does not parse
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("can't read rules file {path:?}"))?;

        serde_json::from_str(&content).context("invalid rules file format")
    }
}
