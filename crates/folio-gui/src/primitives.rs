use glam::Vec2;
use serde::Deserialize;

/// A point in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

/// Scene files describe rectangles as `[left, top, width, height]`
impl From<[f32; 4]> for Rect {
    fn from(v: [f32; 4]) -> Self {
        Rect::from_min_size([v[0], v[1]], [v[2], v[3]])
    }
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Area, zero for empty or inverted rectangles
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// Overlapping region, `None` if the rectangles don't touch
    ///
    /// Rectangles that share only an edge intersect with zero area.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = [
            self.min[0].max(other.min[0]),
            self.min[1].max(other.min[1]),
        ];
        let max = [
            self.max[0].min(other.max[0]),
            self.max[1].min(other.max[1]),
        ];

        if min[0] <= max[0] && min[1] <= max[1] {
            Some(Rect { min, max })
        } else {
            None
        }
    }

    /// Translate by `dx`, `dy`
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            min: [self.min[0] + dx, self.min[1] + dy],
            max: [self.max[0] + dx, self.max[1] + dy],
        }
    }

    /// Grow each edge outward by the given margin (negative values shrink)
    pub fn expand(&self, margin: &Margin) -> Rect {
        Rect {
            min: [self.min[0] - margin.left, self.min[1] - margin.top],
            max: [self.max[0] + margin.right, self.max[1] + margin.bottom],
        }
    }
}

/// Per-edge margin in pixels, CSS order
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn bottom(bottom: f32) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom,
            left: 0.0,
        }
    }
}
