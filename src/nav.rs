//! Navbar state, smooth scrolling and parallax

use std::time::Duration;

use folio_gui::{Transition, Tween};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which the navbar is marked scrolled
    pub scrolled_threshold: f32,
    pub hero_parallax: f32,
    pub shape_parallax: f32,
    /// Shape rotation in degrees per scrolled pixel
    pub shape_rotation: f32,
    pub smooth_scroll_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            hero_parallax: 0.2,
            shape_parallax: 0.1,
            shape_rotation: 0.05,
            smooth_scroll_ms: 600,
        }
    }
}

/// Parallax transforms for one scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    /// Hero translateY in pixels
    pub hero_offset: f32,
    /// Morphing shape translateY in pixels
    pub shape_offset: f32,
    /// Morphing shape rotation in degrees
    pub shape_rotation: f32,
}

/// Result of a scroll position change
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavChange {
    /// New scrolled state, only when it flipped
    pub scrolled: Option<bool>,
    pub parallax: Option<ParallaxFrame>,
}

#[derive(Debug)]
pub struct NavState {
    config: NavConfig,
    scrolled: bool,
    parallax_enabled: bool,
    smooth: Option<Tween>,
}

impl NavState {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            scrolled: false,
            parallax_enabled: false,
            smooth: None,
        }
    }

    pub fn enable_parallax(&mut self) {
        self.parallax_enabled = true;
    }

    pub fn parallax(&self, scroll_y: f32) -> ParallaxFrame {
        ParallaxFrame {
            hero_offset: scroll_y * self.config.hero_parallax,
            shape_offset: -scroll_y * self.config.shape_parallax,
            shape_rotation: scroll_y * self.config.shape_rotation,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f32) -> NavChange {
        let scrolled = scroll_y > self.config.scrolled_threshold;
        let flipped = scrolled != self.scrolled;
        self.scrolled = scrolled;

        NavChange {
            scrolled: flipped.then_some(scrolled),
            parallax: self.parallax_enabled.then(|| self.parallax(scroll_y)),
        }
    }

    /// Start a smooth scroll from `from` to just below the navbar above `section_top`
    pub fn start_smooth_scroll(&mut self, from: f32, section_top: f32, navbar_height: f32, now: Duration) {
        let target = scroll_target(section_top, navbar_height);
        let transition = Transition::new(
            Duration::from_millis(self.config.smooth_scroll_ms),
            Transition::smooth_scroll().easing,
        );
        self.smooth = Some(Tween::new(from, target, now, transition));
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    /// Scroll position for this frame while a smooth scroll runs
    pub fn smooth_scroll_frame(&mut self, now: Duration) -> Option<f32> {
        let tween = self.smooth?;
        let y = tween.value_at(now);
        if tween.is_finished(now) {
            self.smooth = None;
        }
        Some(y)
    }
}

/// Scroll offset that puts a section just below the navbar
pub fn scroll_target(section_top: f32, navbar_height: f32) -> f32 {
    section_top - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_flips_once() {
        let mut nav = NavState::new(NavConfig::default());
        assert_eq!(nav.on_scroll(50.0).scrolled, None);
        assert_eq!(nav.on_scroll(100.0).scrolled, None);
        assert_eq!(nav.on_scroll(101.0).scrolled, Some(true));
        assert_eq!(nav.on_scroll(400.0).scrolled, None);
        assert_eq!(nav.on_scroll(10.0).scrolled, Some(false));
    }

    #[test]
    fn test_parallax_only_when_enabled() {
        let mut nav = NavState::new(NavConfig::default());
        assert!(nav.on_scroll(200.0).parallax.is_none());

        nav.enable_parallax();
        let frame = nav.on_scroll(200.0).parallax.unwrap();
        assert!((frame.hero_offset - 40.0).abs() < 1e-4);
        assert!((frame.shape_offset + 20.0).abs() < 1e-4);
        assert!((frame.shape_rotation - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut nav = NavState::new(NavConfig::default());
        let start = Duration::from_millis(4000);
        nav.start_smooth_scroll(0.0, 900.0, 70.0, start);

        let mid = nav.smooth_scroll_frame(start + Duration::from_millis(300)).unwrap();
        assert!(mid > 0.0 && mid < 830.0);

        let end = nav.smooth_scroll_frame(start + Duration::from_millis(600)).unwrap();
        assert_eq!(end, 830.0);
        assert!(!nav.is_smooth_scrolling());
        assert!(nav.smooth_scroll_frame(start + Duration::from_millis(700)).is_none());
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(900.0, 70.0), 830.0);
    }
}
