//! Settings management

use glint_render::wgpu;
use glint_render::window::WindowConfig;
use glint_render::RendererOptions;
use serde::{Deserialize, Serialize};

/// Demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub graphics: GraphicsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    pub vsync: bool,
    pub high_performance_adapter: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        let config = WindowConfig::default();
        Self {
            title: config.title,
            width: config.width,
            height: config.height,
        }
    }
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            high_performance_adapter: true,
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing or unparsable file falls back to
    /// defaults; a demo never refuses to start over its settings file.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("ignoring unparsable settings file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.window.title.clone(),
            width: self.window.width,
            height: self.window.height,
        }
    }

    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            power_preference: if self.graphics.high_performance_adapter {
                wgpu::PowerPreference::HighPerformance
            } else {
                wgpu::PowerPreference::LowPower
            },
            present_mode: if self.graphics.vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_window() {
        let settings = Settings::default();
        assert_eq!(settings.window.title, "glint");
        assert_eq!((settings.window.width, settings.window.height), (512, 512));
        assert!(settings.graphics.vsync);
        assert!(settings.graphics.high_performance_adapter);
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let settings: Settings =
            serde_json::from_str(r#"{ "window": { "width": 1024 } }"#).unwrap();
        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, 512);
        assert_eq!(settings.window.title, "glint");
        assert!(settings.graphics.vsync);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load("does-not-exist/glint.json");
        assert_eq!(settings.window.title, "glint");
    }

    #[test]
    fn vsync_maps_to_present_mode() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.renderer_options().present_mode,
            wgpu::PresentMode::Fifo
        );
        settings.graphics.vsync = false;
        assert_eq!(
            settings.renderer_options().present_mode,
            wgpu::PresentMode::AutoNoVsync
        );
    }

    #[test]
    fn adapter_preference_maps_to_power_preference() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.renderer_options().power_preference,
            wgpu::PowerPreference::HighPerformance
        );
        settings.graphics.high_performance_adapter = false;
        assert_eq!(
            settings.renderer_options().power_preference,
            wgpu::PowerPreference::LowPower
        );
    }
}
