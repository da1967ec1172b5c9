//! Scene descriptor
//!
//! The host describes the page once at startup: which elements are observed,
//! where they sit in the document and the raw attribute values that configure
//! their follow-up animation. Values arrive as strings, the way a document
//! attribute would, and are coerced here.

use std::collections::HashSet;
use std::path::Path;

use folio_gui::Rect;
use serde::Deserialize;

use crate::element::{Category, ElementId, ElementKind, TrackedElement};
use crate::error::SceneError;

/// Page-wide layout facts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub navbar_height: f32,
    pub document_height: f32,
    /// Particle container bounds in document coordinates
    pub particle_container: Rect,
    /// Number of hero children that enter after loading
    pub hero_children: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            navbar_height: 70.0,
            document_height: 4000.0,
            particle_container: Rect::from_min_size([0.0, 0.0], [1280.0, 720.0]),
            hero_children: 4,
        }
    }
}

/// A navigation target
#[derive(Debug, Clone, Deserialize)]
pub struct SectionAnchor {
    pub id: ElementId,
    /// Offset from the document top in pixels
    pub top: f32,
}

/// One observed element as written in the scene file
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    pub id: ElementId,
    pub kind: ElementKind,
    /// `[left, top, width, height]` in document coordinates
    pub bounds: Rect,
    /// Raw configured value (bar width, gauge percentage or counter target)
    #[serde(default)]
    pub value: Option<String>,
    /// Filter category of a project card
    #[serde(default)]
    pub category: Option<String>,
}

/// The scene file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneDescriptor {
    pub page: PageLayout,
    pub sections: Vec<SectionAnchor>,
    pub elements: Vec<ElementSpec>,
}

/// A project card as seen by the filter
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: ElementId,
    pub category: Option<String>,
}

/// A validated scene ready to drive the page
#[derive(Debug, Clone)]
pub struct Scene {
    pub page: PageLayout,
    pub sections: Vec<SectionAnchor>,
    pub elements: Vec<TrackedElement>,
    pub cards: Vec<ProjectCard>,
}

impl Scene {
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        let descriptor: SceneDescriptor = toml::from_str(source)?;
        descriptor.build()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn section(&self, id: &ElementId) -> Option<&SectionAnchor> {
        self.sections.iter().find(|s| &s.id == id)
    }
}

impl SceneDescriptor {
    /// Classify elements and coerce their configured values
    pub fn build(self) -> Result<Scene, SceneError> {
        let mut seen = HashSet::new();
        let mut elements = Vec::with_capacity(self.elements.len());
        let mut cards = Vec::new();

        for spec in self.elements {
            if !seen.insert(spec.id.clone()) {
                return Err(SceneError::DuplicateId(spec.id.to_string()));
            }

            let category = match spec.kind {
                ElementKind::SkillItem => Category::SkillBar {
                    width: parse_percent(&spec.id, "data-width", spec.value.as_deref()),
                },
                ElementKind::StatItem => Category::StatCounter {
                    target: parse_count(&spec.id, spec.value.as_deref()),
                },
                ElementKind::CircleSkill => Category::CircularGauge {
                    percentage: parse_percent(&spec.id, "data-percentage", spec.value.as_deref()),
                },
                ElementKind::ProjectCard => {
                    let index = cards.len();
                    cards.push(ProjectCard {
                        id: spec.id.clone(),
                        category: spec.category.clone(),
                    });
                    Category::StaggeredCard { index }
                }
                ElementKind::SectionTitle
                | ElementKind::SectionLine
                | ElementKind::AboutDescription
                | ElementKind::ContactInfo
                | ElementKind::ContactForm => Category::Generic,
            };

            elements.push(TrackedElement::new(spec.id, spec.kind, category, spec.bounds));
        }

        log::info!(
            "Scene built: {} observed elements, {} project cards, {} sections",
            elements.len(),
            cards.len(),
            self.sections.len()
        );

        Ok(Scene {
            page: self.page,
            sections: self.sections,
            elements,
            cards,
        })
    }
}

/// Coerce a percentage attribute, clamped to `[0, 100]`
fn parse_percent(id: &ElementId, attribute: &str, raw: Option<&str>) -> Option<f32> {
    let Some(raw) = raw else {
        log::debug!("{id}: no {attribute}, follow-up skipped");
        return None;
    };

    match raw.trim().trim_end_matches('%').parse::<f32>() {
        Ok(value) if value.is_finite() => Some(value.clamp(0.0, 100.0)),
        _ => {
            log::warn!("{id}: ignoring non-numeric {attribute} {raw:?}");
            None
        }
    }
}

/// Coerce a counter target to a non-negative integer
fn parse_count(id: &ElementId, raw: Option<&str>) -> Option<u32> {
    let Some(raw) = raw else {
        log::debug!("{id}: no data-target, follow-up skipped");
        return None;
    };

    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("{id}: ignoring non-numeric data-target {raw:?}");
            None
        }
    }
}
