//! Platform abstraction layer
//!
//! Startup errors are shared; the browser shell itself only exists on wasm.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Failures that stop the game from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing page element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} has the wrong type")]
    WrongElementType(&'static str),
    #[error("surface reports no usable texture format")]
    IncompatibleSurface,
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StartupError::MissingElement("game-canvas").to_string(),
            "missing page element #game-canvas"
        );
        assert_eq!(
            StartupError::WrongElementType("name-p1").to_string(),
            "element #name-p1 has the wrong type"
        );
    }
}
