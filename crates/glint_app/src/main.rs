//! Glint
//!
//! Minimal wgpu demo: opens a window and renders two static triangles
//! every frame

mod app;
mod settings;

use anyhow::Result;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::settings::Settings;

/// Demo version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings file read from the working directory
const SETTINGS_PATH: &str = "glint.json";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("glint v{}", VERSION);

    let settings = Settings::load(SETTINGS_PATH);

    let event_loop = EventLoop::new()?;
    // Continuous rendering: keep the loop running even without OS events
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
