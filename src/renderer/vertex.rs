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

/// Opaque color from a 0xRRGGBB literal
pub const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const SKY: [f32; 4] = rgb(0x5c94fc);
    pub const CLOUD: [f32; 4] = rgb(0xffffff);
    pub const PLATFORM: [f32; 4] = rgb(0x8b4513);
    pub const GRASS: [f32; 4] = rgb(0x228b22);
    pub const COIN_OUTER: [f32; 4] = rgb(0xffd700);
    pub const COIN_INNER: [f32; 4] = rgb(0xffa500);
    pub const ENEMY: [f32; 4] = rgb(0x8b0000);
    pub const ENEMY_EYE: [f32; 4] = rgb(0xffffff);
    pub const FLAG_POLE: [f32; 4] = rgb(0x000000);
    pub const FLAG: [f32; 4] = rgb(0x00ff00);
    pub const PLAYER_BODY: [f32; 4] = rgb(0xff0000);
    pub const PLAYER_FACE: [f32; 4] = rgb(0xffa07a);
    /// Eyes and mustache
    pub const PLAYER_FEATURES: [f32; 4] = rgb(0x000000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
        let sky = colors::SKY;
        assert!((sky[0] - 92.0 / 255.0).abs() < 1e-6);
        assert!((sky[2] - 252.0 / 255.0).abs() < 1e-6);
    }
}
