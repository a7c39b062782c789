// Scene model: section objects, the camera rig and the particle layout.
use crate::constants::*;
use crate::core::easing::Ease;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Torus,
    Cone,
    TorusKnot,
}

impl Shape {
    /// Shapes in section order, top of the page first.
    pub const SECTIONS: [Shape; SECTION_COUNT] = [Shape::Torus, Shape::Cone, Shape::TorusKnot];
}

/// Tunable scene parameters. `Default` uses the values in `constants`.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub objects_distance: f32,
    pub section_x: [f32; SECTION_COUNT],
    pub spin_rate: Vec2,
    pub tween_delta: Vec3,
    pub tween_duration_sec: f64,
    pub tween_ease: Ease,
    pub camera_fov_deg: f32,
    pub camera_z: f32,
    pub particle_count: usize,
    pub particle_size: f32,
    pub material_color: &'static str,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_distance: OBJECTS_DISTANCE,
            section_x: SECTION_OBJECT_X,
            spin_rate: Vec2::new(SPIN_RATE_X, SPIN_RATE_Y),
            tween_delta: Vec3::from_array(SECTION_TWEEN_DELTA),
            tween_duration_sec: SECTION_TWEEN_DURATION_SEC,
            tween_ease: Ease::from_name(SECTION_TWEEN_EASE).unwrap_or(Ease::PowerInOut(2)),
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_z: CAMERA_Z,
            particle_count: PARTICLE_COUNT,
            particle_size: PARTICLE_SIZE,
            material_color: DEFAULT_MATERIAL_COLOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SectionObject {
    pub shape: Shape,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
}

impl SectionObject {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Section objects stacked down the page, `objects_distance` apart.
pub fn layout_section_objects(config: &SceneConfig) -> Vec<SectionObject> {
    Shape::SECTIONS
        .iter()
        .enumerate()
        .map(|(i, &shape)| SectionObject {
            shape,
            position: Vec3::new(
                config.section_x[i],
                -config.objects_distance * i as f32,
                0.0,
            ),
            rotation: Vec3::ZERO,
        })
        .collect()
}

/// Camera parented to a group. The group carries the smoothed parallax
/// offset, the camera's own `y` follows scroll.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub group: Vec2,
    pub camera_y: f32,
    pub camera_z: f32,
}

impl CameraRig {
    pub fn new(camera_z: f32) -> Self {
        Self {
            group: Vec2::ZERO,
            camera_y: 0.0,
            camera_z,
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.group.x, self.group.y + self.camera_y, self.camera_z)
    }

    /// The camera never rotates; it always looks down -Z.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }
}

pub fn projection_matrix(config: &SceneConfig, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(
        config.camera_fov_deg.to_radians(),
        aspect.max(1e-3),
        CAMERA_NEAR,
        CAMERA_FAR,
    )
}

/// Scatter particles in a slab covering every section vertically.
pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> Vec<Vec3> {
    let sections = SECTION_COUNT as f32;
    (0..config.particle_count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
                config.objects_distance * 0.5
                    - rng.gen::<f32>() * config.objects_distance * sections,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
            )
        })
        .collect()
}

/// World-space half extent of a particle quad. Matches a size-attenuated
/// point sprite of `particle_size` drawn with the configured field of view.
pub fn particle_half_extent(config: &SceneConfig) -> f32 {
    config.particle_size * (config.camera_fov_deg.to_radians() * 0.5).tan() * 0.5
}
