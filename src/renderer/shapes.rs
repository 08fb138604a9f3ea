//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in logical canvas pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Axis-aligned filled rectangle, two triangles
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (r, b) = (x + width, y + height);
    [
        Vertex::new(x, y, color),
        Vertex::new(x, b, color),
        Vertex::new(r, y, color),
        Vertex::new(r, y, color),
        Vertex::new(x, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Filled rectangle for a world rect shifted left by the camera
pub fn scrolled_rect(area: &Rect, camera: f32, color: [f32; 4]) -> [Vertex; 6] {
    rect(area.x - camera, area.y, area.width, area.height, color)
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
