use crate::constants::SECTION_COUNT;
use crate::core::scene::{layout_section_objects, CameraRig, SceneConfig, SectionObject};
use crate::core::tween::{RotationTween, Tweens};
use glam::{Mat4, Vec2};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.safe_height()
    }

    // Keeps scroll and cursor normalisation total for a collapsed window.
    fn safe_height(&self) -> f32 {
        self.height.max(1.0)
    }

    fn safe_width(&self) -> f32 {
        self.width.max(1.0)
    }
}

/// Cursor offset from the viewport centre, roughly in \[-0.5, 0.5\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            x: client_x / viewport.safe_width() - 0.5,
            y: client_y / viewport.safe_height() - 0.5,
        }
    }
}

/// Host notifications, already reduced to plain numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resize { width: f32, height: f32 },
    Scroll { y: f32 },
    PointerMove { client_x: f32, client_y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

/// What one call to [`AnimationState::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
    pub delta: f64,
    pub tweens_finished: usize,
}

/// Section index for a scroll offset: round-half-up of `scroll_y / height`,
/// clamped to the available sections.
pub fn section_for_scroll(scroll_y: f32, viewport_height: f32) -> usize {
    let raw = (scroll_y / viewport_height.max(1.0) + 0.5).floor();
    raw.clamp(0.0, (SECTION_COUNT - 1) as f32) as usize
}

/// Camera height for a scroll offset; one viewport of scroll moves the camera
/// down by one object spacing.
pub fn camera_y_for_scroll(scroll_y: f32, viewport_height: f32, objects_distance: f32) -> f32 {
    -(scroll_y / viewport_height.max(1.0)) * objects_distance
}

/// All mutable scene state, owned by one thread.
///
/// Host event handlers and the frame loop share it through a single
/// `Rc<RefCell<_>>`, each borrowing only for the length of one call, so
/// every mutation goes through the methods below.
pub struct AnimationState {
    pub config: SceneConfig,
    pub viewport: Viewport,
    pub scroll_y: f32,
    pub current_section: usize,
    pub cursor: Cursor,
    pub rig: CameraRig,
    pub objects: Vec<SectionObject>,
    tweens: Tweens,
    previous_time: f64,
}

impl AnimationState {
    /// `initial_scroll_y` is the page offset at load; it moves the camera but
    /// does not count as a section change.
    pub fn new(config: SceneConfig, viewport: Viewport, initial_scroll_y: f32) -> Self {
        let objects = layout_section_objects(&config);
        let rig = CameraRig::new(config.camera_z);
        Self {
            config,
            viewport,
            scroll_y: initial_scroll_y,
            current_section: 0,
            cursor: Cursor::default(),
            rig,
            objects,
            tweens: Tweens::default(),
            previous_time: 0.0,
        }
    }

    /// Apply one host notification. `now_sec` is the shared clock reading,
    /// used to anchor any tween the event starts.
    pub fn handle_event(&mut self, event: HostEvent, now_sec: f64) -> Option<SectionChange> {
        match event {
            HostEvent::Resize { width, height } => {
                self.on_resize(width, height);
                None
            }
            HostEvent::Scroll { y } => self.on_scroll(y, now_sec),
            HostEvent::PointerMove { client_x, client_y } => {
                self.on_pointer_move(client_x, client_y);
                None
            }
        }
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.cursor = Cursor::from_client(client_x, client_y, self.viewport);
    }

    /// Record the scroll offset and, when it lands in a different section,
    /// kick off that section's rotation tween.
    pub fn on_scroll(&mut self, scroll_y: f32, now_sec: f64) -> Option<SectionChange> {
        self.scroll_y = scroll_y;
        let new_section = section_for_scroll(scroll_y, self.viewport.height);
        if new_section == self.current_section {
            return None;
        }
        let change = SectionChange {
            from: self.current_section,
            to: new_section,
        };
        self.current_section = new_section;
        self.tweens.start(RotationTween::new(
            new_section,
            self.config.tween_delta,
            now_sec,
            self.config.tween_duration_sec,
            self.config.tween_ease,
        ));
        Some(change)
    }

    /// Per-frame update. `elapsed_sec` is the clock reading for this frame.
    pub fn advance(&mut self, elapsed_sec: f64) -> FrameStep {
        let delta = elapsed_sec - self.previous_time;
        self.previous_time = elapsed_sec;
        let dt = delta as f32;

        self.rig.camera_y = camera_y_for_scroll(
            self.scroll_y,
            self.viewport.height,
            self.config.objects_distance,
        );

        // Unclamped first-order lag: a delta above one second overshoots.
        let parallax = Vec2::new(self.cursor.x, -self.cursor.y);
        self.rig.group += (parallax - self.rig.group) * dt;

        let spin = self.config.spin_rate * dt;
        for object in &mut self.objects {
            object.rotation.x += spin.x;
            object.rotation.y += spin.y;
        }

        let objects = &mut self.objects;
        let tweens_finished = self.tweens.advance(elapsed_sec, |target, inc| {
            if let Some(object) = objects.get_mut(target) {
                object.rotation += inc;
            }
        });

        FrameStep {
            delta,
            tweens_finished,
        }
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn tweens_on(&self, section: usize) -> usize {
        self.tweens.targeting(section)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.rig.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        crate::core::scene::projection_matrix(&self.config, self.viewport.aspect())
    }

    pub fn model_matrices(&self) -> Vec<Mat4> {
        self.objects.iter().map(|o| o.model_matrix()).collect()
    }
}
