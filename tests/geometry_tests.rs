// Host-side tests for procedural meshes and the particle layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::geometry::*;
use crate::core::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_well_formed(mesh: &MeshData) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
    for v in &mesh.vertices {
        let len = Vec3::from_array(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
    }
}

#[test]
fn torus_counts_match_segments() {
    let mesh = torus(1.0, 0.4, 16, 60);
    assert_eq!(mesh.vertices.len(), 17 * 61);
    assert_eq!(mesh.triangle_count(), 16 * 60 * 2);
    assert_well_formed(&mesh);
}

#[test]
fn torus_stays_within_outer_radius() {
    let mesh = torus(1.0, 0.4, 16, 60);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!(p.truncate().length() <= 1.4 + 1e-4);
        assert!(p.z.abs() <= 0.4 + 1e-4);
    }
}

#[test]
fn cone_has_side_and_base() {
    let mesh = cone(1.0, 2.0, 32);
    // two side rings + cap centres + cap ring
    assert_eq!(mesh.vertices.len(), 33 * 2 + 32 + 33);
    assert_eq!(mesh.triangle_count(), 32 + 32);
    assert_well_formed(&mesh);
    let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
    let top = ys.iter().cloned().fold(f32::MIN, f32::max);
    let bottom = ys.iter().cloned().fold(f32::MAX, f32::min);
    assert!((top - 1.0).abs() < 1e-6);
    assert!((bottom + 1.0).abs() < 1e-6);
}

#[test]
fn cone_side_faces_point_outward() {
    let mesh = cone(1.0, 2.0, 32);
    // First side triangle: its geometric normal should agree with the
    // vertex normals (counter-clockwise front faces).
    let tri = &mesh.indices[0..3];
    let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
    let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
    let vn = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
    assert!(face.dot(vn) > 0.0);
}

#[test]
fn torus_knot_counts_match_segments() {
    let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    assert_eq!(mesh.vertices.len(), 101 * 17);
    assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
    assert_well_formed(&mesh);
}

#[test]
fn every_section_shape_has_a_mesh() {
    for shape in Shape::SECTIONS {
        let mesh = mesh_for_shape(shape);
        assert!(mesh.triangle_count() > 0, "{shape:?}");
    }
}

#[test]
fn particles_fill_the_section_slab() {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let particles = scatter_particles(&mut rng, &config);
    assert_eq!(particles.len(), 200);
    for p in &particles {
        assert!(p.x >= -5.0 && p.x <= 5.0);
        assert!(p.z >= -5.0 && p.z <= 5.0);
        // objects_distance * 0.5 down to that minus three sections
        assert!(p.y <= 2.0 && p.y >= 2.0 - 12.0);
    }
}

#[test]
fn particle_layout_is_reproducible_for_a_seed() {
    let config = SceneConfig::default();
    let a = scatter_particles(&mut StdRng::seed_from_u64(42), &config);
    let b = scatter_particles(&mut StdRng::seed_from_u64(42), &config);
    assert_eq!(a, b);
}

#[test]
fn particle_quads_are_smaller_than_nominal_size() {
    let config = SceneConfig::default();
    let h = particle_half_extent(&config);
    assert!(h > 0.0);
    assert!(h * 2.0 < config.particle_size);
}
