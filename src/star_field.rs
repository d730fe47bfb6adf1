use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::star::Star;
use crate::types::{CanvasSurface, Color, FieldSettings, FieldStats};
use crate::vec2::Vec2;

const ACCELERATION_MULTIPLIER: f32 = 0.0001;
const PROXIMITY_MULTIPLIER: f32 = 0.00002;

pub const GOAL_FPS_MIN: u32 = 2;
pub const GOAL_FPS_MAX: u32 = 200;
pub const RAW_SETTING_MAX: u32 = 100;

/// Viewport rectangle in world space, centered on the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraBounds {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl CameraBounds {
    pub fn contains(&self, point: &Vec2) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }
}

/// Owns the star collection and drives the whole field each frame: the
/// FPS-adaptive star count, per-star simulation, and drawing.
pub struct StarField {
    stars: Vec<Star>,
    draw_count: usize,
    spawn_radius: f32,
    camera: CameraBounds,
    rng: SmallRng,
}

impl StarField {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            stars: Vec::new(),
            draw_count: 0,
            spawn_radius: 1.0,
            camera: CameraBounds::default(),
            rng,
        }
    }

    pub fn camera(&self) -> &CameraBounds {
        &self.camera
    }

    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius
    }

    /// Recompute camera bounds for a new viewport, centered on the origin.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let w2 = (width * 0.5).floor();
        let h2 = (height * 0.5).floor();
        self.camera.top_left.set(-w2, -h2);
        self.camera.bottom_right.set(width - w2, height - h2);

        self.spawn_radius = self.camera.bottom_right.x.min(self.camera.bottom_right.y);

        log::debug!(
            "viewport {width}x{height}, spawn radius {}",
            self.spawn_radius
        );
    }

    /// Spend frame-rate headroom on more stars, or shed stars to catch up.
    /// Growth is deliberately unclamped: frame cost is the feedback that
    /// eventually stalls it. The collection only ever grows; stars beyond
    /// the draw count stay buffered for reuse.
    fn update_star_count(&mut self, fps: u32, goal_fps: u32) {
        if fps > goal_fps {
            self.draw_count += (fps - goal_fps) as usize;
        } else if fps < goal_fps {
            self.draw_count = self
                .draw_count
                .saturating_sub((goal_fps - fps) as usize)
                .max(1);
        }

        if self.draw_count > self.stars.len() {
            log::debug!("buffering {} stars", self.draw_count - self.stars.len());
        }
        while self.stars.len() < self.draw_count {
            self.stars.push(Star::new(self.spawn_radius, &mut self.rng));
        }
    }

    /// Run one frame: adapt the star count to the measured FPS, then move
    /// and draw every active star, respawning any that left the camera.
    pub fn advance(
        &mut self,
        delta_ms: f64,
        fps: u32,
        settings: &FieldSettings,
        surface: &mut dyn CanvasSurface,
    ) -> FieldStats {
        let raw_acceleration = settings.acceleration.min(RAW_SETTING_MAX) as f32;
        let raw_proximity = settings.proximity.min(RAW_SETTING_MAX) as f32;
        let goal_fps = settings.goal_fps.clamp(GOAL_FPS_MIN, GOAL_FPS_MAX);
        let delta_ms = delta_ms as f32;

        let acceleration = raw_acceleration * ACCELERATION_MULTIPLIER * delta_ms;

        // Proximity growth scales with how hard the user pushes both knobs.
        let proximity_accel_modifier = (raw_proximity / RAW_SETTING_MAX as f32)
            * (raw_acceleration / RAW_SETTING_MAX as f32);
        let proximity =
            1.0 + raw_proximity * proximity_accel_modifier * PROXIMITY_MULTIPLIER * delta_ms;

        self.update_star_count(fps, goal_fps);

        surface.clear(Color::BLACK);

        for star in &mut self.stars[..self.draw_count] {
            if !self.camera.contains(&star.position) {
                star.reset(self.spawn_radius, &mut self.rng);
            }

            star.update(acceleration, proximity);
            star.draw(surface, settings.colorful);
        }

        FieldStats {
            drawn_stars: self.draw_count,
            buffered_stars: self.stars.len(),
            actual_fps: fps,
        }
    }

    /// Repaint the current frame without simulating, for the paused state.
    pub fn redraw(&self, settings: &FieldSettings, surface: &mut dyn CanvasSurface) {
        surface.clear(Color::BLACK);
        for star in &self.stars[..self.draw_count] {
            star.draw(surface, settings.colorful);
        }
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}
