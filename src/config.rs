//! Node configuration
//!
//! Configuration is a small JSON document, typically baked into the firmware
//! image or read from a provisioning partition:
//!
//! ```json
//! { "coordinator": false }
//! ```
//!
//! Missing fields take their defaults.

use serde::Deserialize;

/// Startup configuration of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Start mesh routing as the DAG root. Off by default: the node joins an
    /// existing network.
    pub coordinator: bool,
}

impl NodeConfig {
    /// Parse a configuration from JSON.
    ///
    /// ```rust
    /// use dr1199_node::config::NodeConfig;
    ///
    /// let config = NodeConfig::from_json(r#"{"coordinator": true}"#).unwrap();
    /// assert!(config.coordinator);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let (config, _) =
            serde_json_core::from_str::<Self>(json).map_err(|_| ConfigError::ParseError)?;
        Ok(config)
    }

    /// Configuration for a node acting as DAG root
    pub fn coordinator() -> Self {
        Self { coordinator: true }
    }
}

/// Error types for configuration loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid configuration JSON
    ParseError,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::ParseError => defmt::write!(f, "ParseError"),
        }
    }
}
