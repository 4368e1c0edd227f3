use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub controller: ControllerConfig,
    pub tracking: TrackingConfig,
    pub defaults: Defaults,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Bend angle (degrees) above which a finger counts as extended.
    pub extend_threshold_deg: f32,
    /// Minimum hand presence score from the landmark model.
    pub min_hand_score: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub mirror_mode: bool,
    pub show_skeleton: bool,
    pub show_angles: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub hud_scale: usize,
    pub skeleton_color_hex: String, // e.g. "#00FF00"
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: "192.168.137.61".to_string(),
            port: 80,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            extend_threshold_deg: 60.0,
            min_hand_score: 0.5,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            mirror_mode: true,
            show_skeleton: true,
            show_angles: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hud_scale: 2,
            skeleton_color_hex: "#00FF00".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            tracking: TrackingConfig::default(),
            defaults: Defaults::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    const PATH: &'static str = "config.json";

    pub fn load() -> Result<Self> {
        let config = if Path::new(Self::PATH).exists() {
            let content = fs::read_to_string(Self::PATH)?;
            // Missing fields fall back to defaults via #[serde(default)]
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    println!("Loaded configuration from {}", Self::PATH);
                    c
                }
                Err(e) => {
                    println!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!(
                "Configuration file not found. Creating default at {}",
                Self::PATH
            );
            Self::default()
        };

        // Write back so new fields show up in the file
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::PATH, content)?;
        Ok(())
    }

    pub fn controller_addr(&self) -> String {
        format!("{}:{}", self.controller.host, self.controller.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_deployed_rig() {
        let config = AppConfig::default();
        assert_eq!(config.controller_addr(), "192.168.137.61:80");
        assert_eq!(config.tracking.extend_threshold_deg, 60.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "controller": { "host": "10.1.2.3" } }"#).unwrap();
        assert_eq!(config.controller.host, "10.1.2.3");
        assert_eq!(config.controller.port, 80);
        assert_eq!(config.tracking.extend_threshold_deg, 60.0);
    }
}
