//! Procedural geometry for the bodies, panels, and label quads.
//!
//! Everything the renderer draws is generated here; there is no model-file
//! parser. Vertices are interleaved position/normal/uv so one layout serves
//! all pipelines.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Latitude/longitude sphere with seam-duplicated columns for clean UVs.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();
        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            mesh.vertices.push(MeshVertex {
                position: [x * radius, y * radius, z * radius],
                normal: [x, y, z],
                uv: [
                    seg as f32 / segments as f32,
                    ring as f32 / rings as f32,
                ],
            });
        }
    }
    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;
            // Counter-clockwise seen from outside the sphere.
            mesh.indices
                .extend_from_slice(&[current, current + 1, next, current + 1, next + 1, next]);
        }
    }
    mesh
}

/// Axis-aligned box around the origin, one quad per face.
pub fn panel_box(half: Vec3) -> MeshData {
    let (hx, hy, hz) = (half.x, half.y, half.z);
    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-hx, -hy, hz],
                [hx, -hy, hz],
                [hx, hy, hz],
                [-hx, hy, hz],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hx, -hy, -hz],
                [-hx, -hy, -hz],
                [-hx, hy, -hz],
                [hx, hy, -hz],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [hx, -hy, hz],
                [hx, -hy, -hz],
                [hx, hy, -hz],
                [hx, hy, hz],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hx, -hy, -hz],
                [-hx, -hy, hz],
                [-hx, hy, hz],
                [-hx, hy, -hz],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hx, hy, hz],
                [hx, hy, hz],
                [hx, hy, -hz],
                [-hx, hy, -hz],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hx, -hy, -hz],
                [hx, -hy, -hz],
                [hx, -hy, hz],
                [-hx, -hy, hz],
            ],
        ),
    ];
    let uvs: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(uvs.iter()) {
            mesh.vertices.push(MeshVertex {
                position: *corner,
                normal,
                uv: *uv,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Unit quad in the XY plane, facing +Z; the renderer billboards it.
pub fn label_quad() -> MeshData {
    let normal = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            MeshVertex {
                position: [-0.5, -0.5, 0.0],
                normal,
                uv: [0.0, 1.0],
            },
            MeshVertex {
                position: [0.5, -0.5, 0.0],
                normal,
                uv: [1.0, 1.0],
            },
            MeshVertex {
                position: [0.5, 0.5, 0.0],
                normal,
                uv: [1.0, 0.0],
            },
            MeshVertex {
                position: [-0.5, 0.5, 0.0],
                normal,
                uv: [0.0, 0.0],
            },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
