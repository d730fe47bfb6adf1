use std::f32::consts::TAU;

use rand::Rng;

use crate::types::{CanvasSurface, Color, StarColor};
use crate::vec2::Vec2;

/// Initial velocity as a fraction of the spawn offset from the origin.
const VELOCITY_INIT_MULTIPLIER: f32 = 0.01;

/// Speed contribution to per-frame size growth.
const SIZE_SPEED_MULTIPLIER: f32 = 0.001;

/// One particle radiating outward from the camera center.
pub struct Star {
    pub normal: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    previous_position: Vec2,
    pub size: f32,
    pub color: StarColor,
}

impl Star {
    pub fn new(spawn_radius: f32, rng: &mut impl Rng) -> Self {
        let mut star = Self {
            normal: Vec2::default(),
            position: Vec2::default(),
            velocity: Vec2::default(),
            previous_position: Vec2::default(),
            size: 1.0,
            color: StarColor::Green,
        };
        star.reset(spawn_radius, rng);
        star
    }

    /// Respawn somewhere in a disc of `spawn_radius` around the origin.
    /// Both angle and length are sampled uniformly, which biases density
    /// toward the center. That bias is the intended look.
    pub fn reset(&mut self, spawn_radius: f32, rng: &mut impl Rng) {
        let angle = rng.gen::<f32>() * TAU;
        let length = rng.gen::<f32>() * spawn_radius;
        let color = StarColor::ALL[rng.gen_range(0..StarColor::ALL.len())];
        self.respawn(angle, length, color);
    }

    fn respawn(&mut self, angle: f32, length: f32, color: StarColor) {
        self.normal.set(angle.cos(), angle.sin());
        self.position
            .set_from(&self.normal)
            .scale_uniform(length);
        self.velocity
            .set_from(&self.position)
            .scale_uniform(VELOCITY_INIT_MULTIPLIER);
        self.color = color;
        self.size = 1.0;
    }

    pub fn update(&mut self, acceleration: f32, proximity: f32) {
        self.previous_position.set_from(&self.position);

        self.velocity
            .add(self.normal.x * acceleration, self.normal.y * acceleration);
        self.position.add_from(&self.velocity);

        // It's coming right for us. The speed term makes faster (nearer
        // looking) stars swell quicker, faking depth on a flat canvas.
        self.size *= proximity + self.velocity.length() * SIZE_SPEED_MULTIPLIER;
    }

    pub fn draw(&self, surface: &mut dyn CanvasSurface, colorful: bool) {
        let size = self.size;
        let half = size * 0.5;

        if colorful {
            surface.fill_rect(
                self.previous_position.x - half,
                self.previous_position.y - half,
                size,
                size,
                self.color.color(),
            );
        }

        surface.fill_rect(
            self.position.x - half,
            self.position.y - half,
            size,
            size,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(f32, f32, f32, f32, Color)>,
    }

    impl CanvasSurface for RecordingSurface {
        fn clear(&mut self, _color: Color) {}

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.rects.push((x, y, width, height, color));
        }
    }

    #[test]
    fn respawn_places_star_along_normal() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut star = Star::new(100.0, &mut rng);
        star.respawn(0.0, 50.0, StarColor::Pink);

        assert_eq!(star.position, Vec2::new(50.0, 0.0));
        assert!((star.velocity.x - 0.5).abs() < 1.0e-6);
        assert_eq!(star.velocity.y, 0.0);
        assert_eq!(star.size, 1.0);
        assert_eq!(star.color, StarColor::Pink);
    }

    #[test]
    fn reset_stays_within_spawn_radius() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut star = Star::new(1.0, &mut rng);

        for _ in 0..200 {
            star.reset(100.0, &mut rng);
            let distance = star.position.length();
            assert!(distance <= 100.0);
            assert!((star.velocity.length() - distance * 0.01).abs() < 1.0e-4);
            assert!((star.normal.length() - 1.0).abs() < 1.0e-5);
        }
    }

    #[test]
    fn update_integrates_and_grows() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut star = Star::new(100.0, &mut rng);
        star.respawn(0.0, 50.0, StarColor::Green);

        star.update(0.2, 1.001);

        assert_eq!(star.previous_position, Vec2::new(50.0, 0.0));
        assert!((star.velocity.x - 0.7).abs() < 1.0e-6);
        assert_eq!(star.velocity.y, 0.0);
        assert!((star.position.x - 50.7).abs() < 1.0e-5);
        assert!((star.size - (1.001 + 0.7 * 0.001)).abs() < 1.0e-6);
    }

    #[test]
    fn draw_paints_tail_only_when_colorful() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut star = Star::new(100.0, &mut rng);
        star.respawn(0.0, 40.0, StarColor::Blue);
        star.update(0.0, 1.0);

        let mut surface = RecordingSurface::default();
        star.draw(&mut surface, false);
        assert_eq!(surface.rects.len(), 1);
        assert_eq!(surface.rects[0].4, Color::WHITE);

        let mut surface = RecordingSurface::default();
        star.draw(&mut surface, true);
        assert_eq!(surface.rects.len(), 2);
        assert_eq!(surface.rects[0].4, StarColor::Blue.color());
        assert_eq!(surface.rects[1].4, Color::WHITE);

        // Head square is centered on the post-move position.
        let (x, y, w, h, _) = surface.rects[1];
        assert!((x + w * 0.5 - star.position.x).abs() < 1.0e-4);
        assert!((y + h * 0.5 - star.position.y).abs() < 1.0e-4);
    }
}
