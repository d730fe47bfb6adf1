#[derive(Clone, Copy, Debug)]
pub struct FieldSettings {
    pub colorful: bool,
    pub goal_fps: u32,
    pub acceleration: u32,
    pub proximity: u32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            colorful: true,
            goal_fps: 60,
            acceleration: 10,
            proximity: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub drawn_stars: usize,
    pub buffered_stars: usize,
    pub actual_fps: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 80's color trails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    Green,
    Blue,
    Pink,
}

impl StarColor {
    pub const ALL: [StarColor; 3] = [StarColor::Green, StarColor::Blue, StarColor::Pink];

    pub fn color(self) -> Color {
        match self {
            StarColor::Green => Color::rgb(0x82, 0xFF, 0x1A),
            StarColor::Blue => Color::rgb(0x05, 0xAF, 0xEC),
            StarColor::Pink => Color::rgb(0xFE, 0x02, 0x93),
        }
    }
}

/// Minimal 2D drawing surface the field renders against. Coordinates are
/// camera space (origin at the viewport center); the adapter constructed
/// each frame owns the translation to screen space.
pub trait CanvasSurface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}
