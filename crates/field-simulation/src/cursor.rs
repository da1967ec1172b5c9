//! Custom cursor: a dot pinned to the pointer and a ring that eases after it

use field_physics::follow_step;
use folio_gui::Point;
use glam::Vec2;

use crate::params::CursorParams;

/// What the host draws for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    /// Top-left of the cursor dot in client pixels
    pub cursor_origin: Vec2,
    /// Top-left of the follower ring in client pixels
    pub follower_origin: Vec2,
    pub cursor_scale: f32,
    pub follower_scale: f32,
    pub follower_border_alpha: f32,
}

/// Cursor dot and follower ring state
#[derive(Debug, Clone)]
pub struct CursorFollower {
    params: CursorParams,
    pointer: Vec2,
    follower: Vec2,
    hovering: bool,
}

impl CursorFollower {
    /// Both the pointer and the follower start at the client origin
    pub fn new(params: CursorParams) -> Self {
        Self {
            params,
            pointer: Vec2::ZERO,
            follower: Vec2::ZERO,
            hovering: false,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn follower(&self) -> Vec2 {
        self.follower
    }

    pub fn pointer_move(&mut self, client: Point) {
        self.pointer = client.to_vec2();
    }

    /// Pointer entered or left an interactive element
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance one animation frame
    pub fn tick(&mut self) -> CursorFrame {
        self.follower = follow_step(self.follower, self.pointer, self.params.follower_ease);
        self.frame()
    }

    /// Frame for the current state without advancing
    pub fn frame(&self) -> CursorFrame {
        let (cursor_scale, follower_scale, follower_border_alpha) = if self.hovering {
            (
                self.params.hover_cursor_scale,
                self.params.hover_follower_scale,
                self.params.hover_border_alpha,
            )
        } else {
            (1.0, 1.0, self.params.idle_border_alpha)
        };

        CursorFrame {
            cursor_origin: self.pointer - Vec2::splat(self.params.cursor_offset),
            follower_origin: self.follower - Vec2::splat(self.params.follower_offset),
            cursor_scale,
            follower_scale,
            follower_border_alpha,
        }
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CursorParams::default())
    }
}
