// File: src/config.rs
// Purpose: Route configuration handed to the form controller

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Route targets the credential form navigates to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Destination after a confirmed login
    #[serde(default = "default_success_route")]
    pub success_route: String,
    /// Link target for switching into registration mode
    #[serde(default = "default_signup_route")]
    pub signup_route: String,
}

fn default_success_route() -> String {
    "/".to_string()
}

fn default_signup_route() -> String {
    "/signup".to_string()
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            success_route: default_success_route(),
            signup_route: default_signup_route(),
        }
    }
}

impl RouteTable {
    /// Load route configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let routes: RouteTable = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(routes)
    }

    /// Load from the default path, `wicket.toml` in the working directory
    pub fn load_default() -> Result<Self> {
        Self::load("wicket.toml")
    }
}
