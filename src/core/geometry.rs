use crate::core::scene::Shape;
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Mesh for a section shape, with the segment counts used on the page.
pub fn mesh_for_shape(shape: Shape) -> MeshData {
    match shape {
        Shape::Torus => torus(1.0, 0.4, 16, 60),
        Shape::Cone => cone(1.0, 2.0, 32),
        Shape::TorusKnot => torus_knot(0.8, 0.35, 100, 16, 2, 3),
    }
}

// Quads over a (rows+1) x (cols+1) vertex grid.
fn grid_indices(rows: u32, cols: u32, indices: &mut Vec<u32>) {
    let stride = cols + 1;
    for j in 1..=rows {
        for i in 1..=cols {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(MeshVertex::new(position, position - center));
        }
    }
    grid_indices(radial_segments, tubular_segments, &mut mesh.indices);
    mesh
}

/// Closed cone along Y, apex up, centred on the origin.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    let slope = radius / height;

    // Side: apex ring (collapsed) then base ring, one seam vertex per ring.
    for (ring_radius, y) in [(0.0f32, half), (radius, -half)] {
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.vertices.push(MeshVertex::new(
                Vec3::new(ring_radius * s, y, ring_radius * c),
                Vec3::new(s, slope, c),
            ));
        }
    }
    let stride = radial_segments + 1;
    for x in 0..radial_segments {
        let b = stride + x;
        let c = stride + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap.
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..radial_segments {
        mesh.vertices
            .push(MeshVertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.vertices.push(MeshVertex::new(
            Vec3::new(radius * s, -half, radius * c),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..radial_segments {
        let center = center_start + x;
        let i = ring_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, center]);
    }
    mesh
}

fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot with a circular tube swept along it.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1);
        let normal = binormal.cross(tangent).normalize_or_zero();
        let binormal = binormal.normalize_or_zero();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.vertices.push(MeshVertex::new(position, position - p1));
        }
    }
    // Rows run along the knot, columns around the tube.
    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = stride * (j - 1) + i - 1;
            let b = stride * j + i - 1;
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
