//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    /// Radial-ish wash at the top of the playfield
    pub const BACKGROUND_GLOW: [f32; 4] = [1.0, 1.0, 1.0, 0.08];
    pub const BACKGROUND_FADE: [f32; 4] = [0.0, 0.0, 0.0, 0.02];
    pub const GRID: [f32; 4] = [1.0, 1.0, 1.0, 0.05];
    pub const NEON_CYAN: [f32; 4] = [0.0, 1.0, 0.878, 0.95];
    pub const NEON_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const NEON_MAGENTA: [f32; 4] = [1.0, 0.157, 0.722, 0.95];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 0.98];
    pub const PADDLE_GLOW_LEFT: [f32; 4] = [0.0, 1.0, 0.878, 0.65];
    pub const PADDLE_GLOW_RIGHT: [f32; 4] = [1.0, 0.157, 0.722, 0.65];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_GLOW: [f32; 4] = [0.784, 0.941, 1.0, 0.9];
    pub const PAUSE_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
}
