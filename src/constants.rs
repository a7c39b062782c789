/// Scene layout and animation tuning constants.
///
/// These constants express intended behavior (spin rates, tween shape, camera
/// framing) and keep magic numbers out of the update and render code.

// Vertical spacing between consecutive section objects (world units)
pub const OBJECTS_DISTANCE: f32 = 4.0;
pub const SECTION_COUNT: usize = 3;

// Horizontal placement of each section object, alternating sides
pub const SECTION_OBJECT_X: [f32; SECTION_COUNT] = [2.0, -2.0, 2.0];

// Constant spin applied every frame (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.12;

// One-shot rotation kick when a new section scrolls into view
pub const SECTION_TWEEN_DELTA: [f32; 3] = [6.0, 3.0, 1.5]; // radians added on x, y, z
pub const SECTION_TWEEN_DURATION_SEC: f64 = 1.5;
pub const SECTION_TWEEN_EASE: &str = "power2.inOut";

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 6.0;

// Particle field
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD_XZ: f32 = 10.0;
pub const PARTICLE_SIZE: f32 = 0.03;

// Lighting
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0]; // position of a light aimed at the origin
pub const LIGHT_INTENSITY: f32 = 1.0;

// Toon ramp: three flat bands sampled with nearest filtering
pub const TOON_RAMP: [u8; 3] = [60, 150, 255];

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";
