//! The page context
//!
//! Owns every effect on the page and routes host events to them. All time is
//! virtual: the host passes the current clock into [`Page::frame`] and the
//! page fires whatever became due.

use std::time::Duration;

use field_physics::ParticleStyle;
use field_simulation::{CursorFollower, CursorFrame, ParticleField};
use folio_gui::{Point, Rect};
use folio_reveal::{ElementId, PageLayout, ProjectCard, Scene, Scheduler, SectionAnchor, StyleUpdate, VisibilityObserver};

use crate::config::FolioConfig;
use crate::filter;
use crate::loader::{LoaderConfig, Typewriter};
use crate::nav::{NavState, ParallaxFrame};

/// Body classes toggled during loading
pub const LOADING_CLASS: &str = "loading";
pub const LOADED_CLASS: &str = "loaded";

/// A change the host applies to the document
#[derive(Debug, Clone, PartialEq)]
pub enum PageUpdate {
    /// Reveal-driven element update
    Style(StyleUpdate),
    LoaderText(String),
    BodyClass { class: &'static str, present: bool },
    /// Start the loading screen fade-out
    HideLoadingScreen,
    BodyScroll { enabled: bool },
    /// Start the entrance animation of the hero child at `index`
    HeroEnter { index: usize },
    NavScrolled(bool),
    Parallax(ParallaxFrame),
    /// Programmatic scroll position
    ScrollTo(f32),
    CardVisibility { target: ElementId, visible: bool },
}

/// Everything produced by one animation frame
#[derive(Debug, Clone)]
pub struct PageFrame {
    pub updates: Vec<PageUpdate>,
    pub cursor: CursorFrame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageTask {
    TypeNext,
    HideLoadingScreen,
    UnlockScroll,
    Enhance,
    HeroEnter(usize),
}

pub struct Page {
    layout: PageLayout,
    sections: Vec<SectionAnchor>,
    cards: Vec<ProjectCard>,
    loader_config: LoaderConfig,

    observer: VisibilityObserver,
    field: ParticleField,
    cursor: CursorFollower,
    typewriter: Typewriter,
    nav: NavState,
    scheduler: Scheduler<PageTask>,

    viewport_size: [f32; 2],
    scroll_y: f32,
    scroll_locked: bool,
    active_filter: String,
}

impl Page {
    /// Build the page and return the updates that apply immediately
    pub fn new(scene: Scene, config: &FolioConfig, viewport_size: [f32; 2]) -> (Self, Vec<PageUpdate>) {
        let Scene {
            page: layout,
            sections,
            elements,
            cards,
        } = scene;

        let field = ParticleField::new(layout.particle_container, config.field);
        let observer = VisibilityObserver::new(elements, config.observer);

        let mut scheduler = Scheduler::new();
        let loader = &config.loader;
        scheduler.schedule_at(loader.first_char_at(), PageTask::TypeNext);
        scheduler.schedule_at(Duration::from_millis(loader.hide_at_ms), PageTask::HideLoadingScreen);
        scheduler.schedule_at(Duration::from_millis(loader.enhance_at_ms), PageTask::Enhance);

        let page = Self {
            layout,
            sections,
            cards,
            loader_config: loader.clone(),
            observer,
            field,
            cursor: CursorFollower::new(config.cursor),
            typewriter: Typewriter::new(&loader.text),
            nav: NavState::new(config.nav),
            scheduler,
            viewport_size,
            scroll_y: 0.0,
            scroll_locked: true,
            active_filter: filter::SHOW_ALL.to_string(),
        };

        let initial = vec![
            PageUpdate::BodyClass {
                class: LOADING_CLASS,
                present: true,
            },
            PageUpdate::BodyScroll { enabled: false },
            PageUpdate::LoaderText(String::new()),
        ];

        (page, initial)
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn observer(&self) -> &VisibilityObserver {
        &self.observer
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Viewport in document coordinates
    pub fn viewport(&self) -> Rect {
        Rect::from_min_size([0.0, self.scroll_y], self.viewport_size)
    }

    /// Run one animation frame at virtual time `now`
    pub fn frame(&mut self, now: Duration) -> PageFrame {
        let mut updates = self.advance_to(now);

        if self.nav.is_smooth_scrolling() {
            if let Some(y) = self.nav.smooth_scroll_frame(now) {
                updates.push(PageUpdate::ScrollTo(y));
                updates.extend(self.apply_scroll(y));
            }
        }

        PageFrame {
            updates,
            cursor: self.cursor.tick(),
        }
    }

    /// Fire page and reveal tasks due by `now`
    pub fn advance_to(&mut self, now: Duration) -> Vec<PageUpdate> {
        let mut updates = Vec::new();
        while let Some(task) = self.scheduler.pop_due(now) {
            // keep the observer's clock in step so reveals triggered by this
            // task schedule their follow-ups from the task's fire time
            let due = self.observer.advance_to(task.fire_at);
            updates.extend(due.into_iter().map(PageUpdate::Style));
            self.run_task(task.action, &mut updates);
        }
        self.scheduler.settle(now);

        updates.extend(self.observer.advance_to(now).into_iter().map(PageUpdate::Style));
        updates
    }

    /// User scroll; ignored while the loading screen holds the page
    pub fn scroll_to(&mut self, y: f32) -> Vec<PageUpdate> {
        if self.scroll_locked {
            log::debug!("scroll to {y} ignored while loading");
            return Vec::new();
        }
        self.apply_scroll(y)
    }

    /// Smooth-scroll to a section, leaving room for the navbar
    ///
    /// Returns `false` when the section doesn't exist.
    pub fn navigate_to(&mut self, section: &ElementId) -> bool {
        let Some(anchor) = self.sections.iter().find(|s| &s.id == section) else {
            log::debug!("no section {section}, navigation skipped");
            return false;
        };
        self.nav
            .start_smooth_scroll(self.scroll_y, anchor.top, self.layout.navbar_height, self.now());
        true
    }

    /// Pointer moved anywhere on the page, in client coordinates
    ///
    /// Returns fresh particle styles when the field reacted.
    pub fn pointer_move(&mut self, client: Point) -> Option<Vec<ParticleStyle>> {
        self.cursor.pointer_move(client);

        if self.field.container().contains(client) {
            self.field.pointer_move(client);
            Some(self.field.styles())
        } else if self.field.pointer().is_some() {
            self.field.pointer_leave();
            Some(self.field.styles())
        } else {
            None
        }
    }

    /// Pointer entered or left an interactive element
    pub fn hover_interactive(&mut self, hovering: bool) {
        self.cursor.set_hovering(hovering);
    }

    /// Show only the project cards matching `value`
    ///
    /// Hidden cards are not revealed until shown again. Cards that come back
    /// into view at the current scroll offset are revealed right away.
    pub fn apply_filter(&mut self, value: &str) -> Vec<PageUpdate> {
        self.active_filter = value.to_string();

        let mut updates = Vec::with_capacity(self.cards.len());
        for (card, visible) in filter::visibility(&self.cards, value) {
            self.observer.set_hidden(&card.id, !visible);
            updates.push(PageUpdate::CardVisibility {
                target: card.id.clone(),
                visible,
            });
        }

        if !self.scroll_locked {
            let viewport = self.viewport();
            updates.extend(self.observer.observe_viewport(&viewport).into_iter().map(PageUpdate::Style));
        }
        updates
    }

    fn apply_scroll(&mut self, y: f32) -> Vec<PageUpdate> {
        let max = (self.layout.document_height - self.viewport_size[1]).max(0.0);
        self.scroll_y = y.clamp(0.0, max);
        // pointer events arrive in client space
        self.field
            .set_container(self.layout.particle_container.translate(0.0, -self.scroll_y));

        let mut updates = Vec::new();
        let change = self.nav.on_scroll(self.scroll_y);
        if let Some(scrolled) = change.scrolled {
            updates.push(PageUpdate::NavScrolled(scrolled));
        }
        if let Some(frame) = change.parallax {
            updates.push(PageUpdate::Parallax(frame));
        }

        let viewport = self.viewport();
        updates.extend(self.observer.observe_viewport(&viewport).into_iter().map(PageUpdate::Style));
        updates
    }

    fn run_task(&mut self, task: PageTask, updates: &mut Vec<PageUpdate>) {
        match task {
            PageTask::TypeNext => {
                if let Some(text) = self.typewriter.type_next() {
                    updates.push(PageUpdate::LoaderText(text));
                }
                if !self.typewriter.is_done() {
                    self.scheduler
                        .schedule_in(self.loader_config.type_interval(), PageTask::TypeNext);
                }
            }
            PageTask::HideLoadingScreen => {
                log::info!("Loading screen hidden at {:?}", self.scheduler.now());
                updates.push(PageUpdate::BodyClass {
                    class: LOADING_CLASS,
                    present: false,
                });
                updates.push(PageUpdate::HideLoadingScreen);
                self.scheduler.schedule_in(
                    Duration::from_millis(self.loader_config.scroll_unlock_ms),
                    PageTask::UnlockScroll,
                );
            }
            PageTask::UnlockScroll => {
                self.scroll_locked = false;
                updates.push(PageUpdate::BodyScroll { enabled: true });
                // Elements already on screen are revealed as soon as scrolling is possible
                let y = self.scroll_y;
                updates.extend(self.apply_scroll(y));
            }
            PageTask::Enhance => {
                updates.push(PageUpdate::BodyClass {
                    class: LOADED_CLASS,
                    present: true,
                });
                self.nav.enable_parallax();
                for index in 0..self.layout.hero_children {
                    self.scheduler
                        .schedule_in(self.loader_config.hero_delay(index), PageTask::HeroEnter(index));
                }
            }
            PageTask::HeroEnter(index) => updates.push(PageUpdate::HeroEnter { index }),
        }
    }
}
