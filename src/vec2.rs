/// Lean mutable 2D vector. Every operation writes in place and returns
/// `&mut Self` so kinematic updates can chain without temporaries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from(&mut self, other: &Vec2) -> &mut Self {
        self.set(other.x, other.y)
    }

    pub fn add(&mut self, x: f32, y: f32) -> &mut Self {
        self.set(self.x + x, self.y + y)
    }

    pub fn add_from(&mut self, other: &Vec2) -> &mut Self {
        self.add(other.x, other.y)
    }

    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.set(self.x * sx, self.y * sy)
    }

    pub fn scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale(s, s)
    }

    pub fn scale_from(&mut self, other: &Vec2) -> &mut Self {
        self.scale(other.x, other.y)
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_mutate_in_place() {
        let mut v = Vec2::new(1.0, 2.0);
        v.add(3.0, -1.0);
        assert_eq!(v, Vec2::new(4.0, 1.0));

        v.scale(2.0, 3.0);
        assert_eq!(v, Vec2::new(8.0, 3.0));

        v.scale_uniform(0.5);
        assert_eq!(v, Vec2::new(4.0, 1.5));
    }

    #[test]
    fn operations_chain() {
        let offset = Vec2::new(10.0, 20.0);
        let mut v = Vec2::default();
        v.set(1.0, 1.0).add_from(&offset).scale_uniform(2.0);
        assert_eq!(v, Vec2::new(22.0, 42.0));
    }

    #[test]
    fn scale_from_is_componentwise() {
        let mut v = Vec2::new(3.0, 4.0);
        v.scale_from(&Vec2::new(2.0, 0.5));
        assert_eq!(v, Vec2::new(6.0, 2.0));
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < f32::EPSILON);
    }
}
