pub mod clock;
pub mod color;
pub mod easing;
pub mod geometry;
pub mod lifecycle;
pub mod scene;
pub mod state;
pub mod tween;

pub use clock::Clock;
pub use scene::{SceneConfig, Shape};
pub use state::{AnimationState, HostEvent, Viewport};

// Shaders bundled as string constants
pub static TOON_WGSL: &str = include_str!("../../shaders/toon.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
