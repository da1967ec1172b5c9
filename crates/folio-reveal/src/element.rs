//! Tracked page elements and their categories

use std::fmt;

use folio_gui::Rect;
use serde::Deserialize;

/// Stable identifier of a page element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural kind of an observed element, named after its class on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    SectionTitle,
    SectionLine,
    AboutDescription,
    StatItem,
    ProjectCard,
    SkillItem,
    CircleSkill,
    ContactInfo,
    ContactForm,
}

impl ElementKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ElementKind::SectionTitle => "section-title",
            ElementKind::SectionLine => "section-line",
            ElementKind::AboutDescription => "about-description",
            ElementKind::StatItem => "stat-item",
            ElementKind::ProjectCard => "project-card",
            ElementKind::SkillItem => "skill-item",
            ElementKind::CircleSkill => "circle-skill",
            ElementKind::ContactInfo => "contact-info",
            ElementKind::ContactForm => "contact-form",
        }
    }
}

/// Follow-up animation an element receives once revealed
///
/// Configured values are `None` when the element has no usable sub-element or
/// attribute; the follow-up is then skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Category {
    Generic,
    /// Progress bar filled to `width` percent
    SkillBar { width: Option<f32> },
    /// Numeric readout tallied up to `target`
    StatCounter { target: Option<u32> },
    /// Ring swept to `percentage` of a full turn
    CircularGauge { percentage: Option<f32> },
    /// Entrance delayed by the card's index among all cards
    StaggeredCard { index: usize },
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::SkillBar { .. } => "skill-bar",
            Category::StatCounter { .. } => "stat-counter",
            Category::CircularGauge { .. } => "circular-gauge",
            Category::StaggeredCard { .. } => "staggered-card",
        }
    }
}

/// An observed element
#[derive(Debug, Clone)]
pub struct TrackedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub category: Category,
    /// Bounds in document coordinates
    pub bounds: Rect,
    revealed: bool,
    /// Taken out of the layout by the host, e.g. a filtered-out card
    hidden: bool,
}

impl TrackedElement {
    pub fn new(id: ElementId, kind: ElementKind, category: Category, bounds: Rect) -> Self {
        Self {
            id,
            kind,
            category,
            bounds,
            revealed: false,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the one-way revealed flag
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_revealed(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_revealed_once() {
        let mut el = TrackedElement::new(
            ElementId::new("about-title"),
            ElementKind::SectionTitle,
            Category::Generic,
            Rect::from_min_size([0.0, 0.0], [10.0, 10.0]),
        );
        assert!(!el.is_revealed());
        assert!(el.mark_revealed());
        assert!(!el.mark_revealed());
        assert!(el.is_revealed());
    }

    #[test]
    fn test_kind_class_names_round_trip_through_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: ElementKind,
        }

        let w: Wrapper = toml::from_str(r#"kind = "circle-skill""#).unwrap();
        assert_eq!(w.kind, ElementKind::CircleSkill);
        assert_eq!(w.kind.class_name(), "circle-skill");
    }
}
