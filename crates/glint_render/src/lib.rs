//! Glint Render System
//!
//! Window configuration and the wgpu renderer for the two-triangle scene

pub mod renderer;
pub mod vertex;
pub mod window;

pub use wgpu;
pub use winit;

pub use renderer::{RenderError, Renderer, RendererOptions};
