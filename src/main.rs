//! Portfolio page effects
//!
//! Replays a scripted visit of the portfolio page on a virtual clock: the
//! loading screen, a pointer sweep over the particle field, scrolling through
//! every section, section navigation and project filtering. Every update the
//! page produces is logged (RUST_LOG=debug to see them all).
//!
//! Usage: `folio-fx [scene.toml] [config.toml]`

mod config;
mod filter;
mod loader;
mod nav;
mod page;

use std::collections::BTreeMap;
use std::time::Duration;

use config::{AppError, FolioConfig};
use field_simulation::ParticleField;
use folio_gui::Point;
use folio_reveal::{ElementId, Scene, StyleUpdate};
use page::{Page, PageUpdate};

const DEMO_SCENE: &str = include_str!("../assets/demo_scene.toml");
const VIEWPORT: [f32; 2] = [1280.0, 720.0];
const FRAME: Duration = Duration::from_millis(16);
const SESSION: Duration = Duration::from_secs(14);
const SCROLL_START: Duration = Duration::from_millis(3500);
const SCROLL_STEP: f32 = 12.0;

/// Counts of produced updates, by kind
#[derive(Default)]
struct SessionStats {
    updates: BTreeMap<&'static str, usize>,
    peak_repelled: usize,
    particle_bytes: usize,
}

impl SessionStats {
    fn record(&mut self, updates: &[PageUpdate]) {
        for update in updates {
            log::debug!("{update:?}");
            *self.updates.entry(update_kind(update)).or_default() += 1;
        }
    }
}

fn update_kind(update: &PageUpdate) -> &'static str {
    match update {
        PageUpdate::Style(StyleUpdate::Reveal { .. }) => "reveal",
        PageUpdate::Style(StyleUpdate::AnimationDelay { .. }) => "animation-delay",
        PageUpdate::Style(StyleUpdate::BarWidth { .. }) => "bar-width",
        PageUpdate::Style(StyleUpdate::GaugeSweep { .. }) => "gauge-sweep",
        PageUpdate::Style(StyleUpdate::CounterText { .. }) => "counter-text",
        PageUpdate::LoaderText(_) => "loader-text",
        PageUpdate::BodyClass { .. } => "body-class",
        PageUpdate::HideLoadingScreen => "hide-loading-screen",
        PageUpdate::BodyScroll { .. } => "body-scroll",
        PageUpdate::HeroEnter { .. } => "hero-enter",
        PageUpdate::NavScrolled(_) => "nav-scrolled",
        PageUpdate::Parallax(_) => "parallax",
        PageUpdate::ScrollTo(_) => "scroll-to",
        PageUpdate::CardVisibility { .. } => "card-visibility",
    }
}

/// Pointer position for the sweep over the particle container
fn sweep_point(page: &Page, t: f32) -> Point {
    let container = page.field().container();
    let cx = container.min[0] + container.width() * 0.5;
    let cy = container.min[1] + container.height() * 0.5;
    Point::new(
        cx + (t * 1.7).cos() * container.width() * 0.35,
        cy + (t * 2.3).sin() * container.height() * 0.35,
    )
}

fn run() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);

    let scene = match args.next() {
        Some(path) => Scene::load(path)?,
        None => {
            log::info!("No scene given, using the bundled demo scene");
            Scene::parse(DEMO_SCENE)?
        }
    };
    let config = match args.next() {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::default(),
    };

    let total_elements = scene.elements.len();
    let (mut page, initial) = Page::new(scene, &config, VIEWPORT);

    let mut stats = SessionStats::default();
    stats.record(&initial);

    let mut now = Duration::ZERO;
    while now < SESSION {
        now += FRAME;
        let t = now.as_secs_f32();

        // Pointer sweeps the hero particle field during loading
        if now < SCROLL_START {
            if let Some(styles) = page.pointer_move(sweep_point(&page, t)) {
                let repelled = styles.iter().filter(|s| s.scale > 1.0).count();
                stats.peak_repelled = stats.peak_repelled.max(repelled);
                stats.particle_bytes = ParticleField::style_bytes(&styles).len();
            }
            page.hover_interactive((2.0..2.5).contains(&t));
        } else if now < SCROLL_START + FRAME {
            // Leave the field on the way to the page content
            page.pointer_move(Point::new(-1.0, -1.0));
        }

        let frame = page.frame(now);
        stats.record(&frame.updates);
        log::trace!(
            "cursor at {:?}, follower at {:?}",
            frame.cursor.cursor_origin,
            frame.cursor.follower_origin
        );

        if !page.is_scroll_locked() && now >= SCROLL_START && now < Duration::from_secs(10) {
            let updates = page.scroll_to(page.scroll_y() + SCROLL_STEP);
            stats.record(&updates);
        }

        if now == Duration::from_millis(10_400) {
            page.navigate_to(&ElementId::new("about"));
        }
        if now == Duration::from_millis(12_000) {
            stats.record(&page.apply_filter("Web"));
        }
        if now == Duration::from_millis(12_800) {
            stats.record(&page.apply_filter(filter::SHOW_ALL));
        }
    }

    log::info!(
        "Session finished at {:?}: {}/{} elements revealed, scroll at {:.0}px, filter {:?}",
        page.now(),
        page.observer().revealed_count(),
        total_elements,
        page.scroll_y(),
        page.active_filter()
    );
    log::info!(
        "  peak repelled particles: {}, last style upload {} bytes",
        stats.peak_repelled,
        stats.particle_bytes
    );
    for (kind, count) in &stats.updates {
        log::info!("  {kind}: {count}");
    }

    Ok(())
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting portfolio effects session...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
