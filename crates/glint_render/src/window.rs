//! Window management
//!
//! Cross-platform window creation via winit

use winit::window::Window;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            width: 512,
            height: 512,
        }
    }
}

/// Create window attributes from config
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_demo_window() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "glint");
        assert_eq!((config.width, config.height), (512, 512));
    }
}
