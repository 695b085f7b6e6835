//! Configuration management for decoding and regulatory dynamics.
//!
//! Strongly-typed configuration structures that map to a `config.toml`
//! file. Every field has a default, so an empty file is a valid config.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [sequencer]
//! skip_duplicate_angles = false
//!
//! [grn]
//! affinity_radius = 0.5
//! parallel = true
//!
//! [log]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};

/// Body-plan decoding switches.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SequencerConfig {
    /// Skip attachment records whose angle on body repeats an existing
    /// sibling. Off by default: duplicates are attached and only traced.
    pub skip_duplicate_angles: bool,
}

/// Gene regulatory network parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrnConfig {
    /// Embedding distance at which promoter-factor affinity falls to zero.
    pub affinity_radius: f32,
    /// Evaluate regulatory units on the rayon pool.
    pub parallel: bool,
}

impl Default for GrnConfig {
    fn default() -> Self {
        Self {
            affinity_radius: 0.5,
            parallel: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub sequencer: SequencerConfig,
    pub grn: GrnConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.grn.affinity_radius.is_finite() && self.grn.affinity_radius > 0.0,
            "Affinity radius must be positive and finite"
        );
        anyhow::ensure!(
            matches!(
                self.log.level.to_lowercase().as_str(),
                "trace" | "debug" | "info" | "warn" | "error" | "off"
            ),
            "Unknown log level: {}",
            self.log.level
        );
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every parameter that influences decoded output.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.sequencer).as_bytes());
        hasher.update(self.grn.affinity_radius.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml(
            "[sequencer]\nskip_duplicate_angles = true\n[grn]\naffinity_radius = 0.25\n",
        )
        .unwrap();
        assert!(config.sequencer.skip_duplicate_angles);
        assert_eq!(config.grn.affinity_radius, 0.25);
        assert!(config.grn.parallel);
    }

    #[test]
    fn test_invalid_affinity_radius() {
        let config = AppConfig {
            grn: GrnConfig {
                affinity_radius: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(AppConfig::from_toml("[log]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_fingerprint_ignores_runtime_switches() {
        let serial = AppConfig {
            grn: GrnConfig {
                parallel: false,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(serial.fingerprint(), AppConfig::default().fingerprint());

        let skipping = AppConfig {
            sequencer: SequencerConfig {
                skip_duplicate_angles: true,
            },
            ..Default::default()
        };
        assert_ne!(skipping.fingerprint(), AppConfig::default().fingerprint());
    }
}
