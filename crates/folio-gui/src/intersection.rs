//! Viewport intersection
//!
//! Computes how much of a target rectangle is visible inside a (possibly
//! margin-adjusted) viewport, the same quantity a browser intersection
//! observer reports.

use serde::Deserialize;

use crate::primitives::{Margin, Rect};

/// How a target is matched against the viewport
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntersectionOptions {
    /// Minimum visible fraction of the target's area
    pub threshold: f32,
    /// Adjustment applied to the viewport before intersecting
    pub root_margin: Margin,
}

impl Default for IntersectionOptions {
    /// 10% visible, viewport shrunk by 50px at the bottom edge
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Margin::bottom(-50.0),
        }
    }
}

/// Result of intersecting one target with the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Visible fraction of the target, in `[0, 1]`
    pub ratio: f32,
    /// Whether the target touches the effective viewport at all
    pub is_intersecting: bool,
    /// The visible part of the target, if any
    pub intersection_rect: Option<Rect>,
}

impl IntersectionEntry {
    /// Whether the entry satisfies the trigger condition of `options`
    pub fn meets(&self, options: &IntersectionOptions) -> bool {
        self.is_intersecting && self.ratio >= options.threshold
    }
}

/// Effective viewport after applying the root margin
pub fn effective_root(viewport: &Rect, options: &IntersectionOptions) -> Rect {
    viewport.expand(&options.root_margin)
}

/// Intersect `target` with `viewport` under `options`
///
/// A zero-area target that touches the viewport counts as fully visible.
pub fn intersect_viewport(
    target: &Rect,
    viewport: &Rect,
    options: &IntersectionOptions,
) -> IntersectionEntry {
    let root = effective_root(viewport, options);

    let Some(visible) = target.intersect(&root) else {
        return IntersectionEntry {
            ratio: 0.0,
            is_intersecting: false,
            intersection_rect: None,
        };
    };

    let target_area = target.area();
    let ratio = if target_area > 0.0 {
        (visible.area() / target_area).clamp(0.0, 1.0)
    } else {
        1.0
    };

    IntersectionEntry {
        ratio,
        is_intersecting: true,
        intersection_rect: Some(visible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size([0.0, 0.0], [1000.0, 800.0])
    }

    #[test]
    fn test_fully_visible() {
        let target = Rect::from_min_size([100.0, 100.0], [200.0, 100.0]);
        let entry = intersect_viewport(&target, &viewport(), &IntersectionOptions::default());
        assert_eq!(entry.ratio, 1.0);
        assert!(entry.meets(&IntersectionOptions::default()));
    }

    #[test]
    fn test_bottom_margin_hides_last_pixels() {
        // Target sits entirely in the bottom 50px band
        let target = Rect::from_min_size([0.0, 760.0], [100.0, 40.0]);
        let entry = intersect_viewport(&target, &viewport(), &IntersectionOptions::default());
        assert!(!entry.is_intersecting);
        assert!(!entry.meets(&IntersectionOptions::default()));

        let no_margin = IntersectionOptions {
            root_margin: Margin::ZERO,
            ..Default::default()
        };
        assert!(intersect_viewport(&target, &viewport(), &no_margin).meets(&no_margin));
    }

    #[test]
    fn test_threshold_boundary() {
        let options = IntersectionOptions::default();
        // Effective viewport ends at y = 750. 100px tall target, 10px visible.
        let exactly = Rect::from_min_size([0.0, 740.0], [100.0, 100.0]);
        let entry = intersect_viewport(&exactly, &viewport(), &options);
        assert!((entry.ratio - 0.1).abs() < 1e-6);
        assert!(entry.meets(&options));

        let below = Rect::from_min_size([0.0, 745.0], [100.0, 100.0]);
        let entry = intersect_viewport(&below, &viewport(), &options);
        assert!(entry.is_intersecting);
        assert!(!entry.meets(&options));
    }

    #[test]
    fn test_zero_area_target() {
        let line = Rect::from_min_size([10.0, 10.0], [100.0, 0.0]);
        let entry = intersect_viewport(&line, &viewport(), &IntersectionOptions::default());
        assert_eq!(entry.ratio, 1.0);
    }
}
