//! Visibility observer
//!
//! Reveals each tracked element the first time it meets the intersection
//! condition and schedules its category follow-up on the virtual clock.

use std::time::Duration;

use folio_gui::{intersect_viewport, IntersectionEntry, IntersectionOptions, Rect};
use serde::Deserialize;

use crate::clock::Scheduler;
use crate::effects::{gauge_degrees, stagger_delay, CounterRun, StyleUpdate};
use crate::element::{Category, ElementId, TrackedElement};

/// Trigger condition and follow-up timings
///
/// Timings are in milliseconds so they read naturally in config files.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub intersection: IntersectionOptions,
    /// Delay from reveal to the skill bar reset
    pub skill_bar_delay_ms: u64,
    /// Delay from the bar reset to committing its target width
    pub skill_bar_commit_ms: u64,
    /// Delay from reveal to the first counter step
    pub counter_delay_ms: u64,
    /// Total counter tally duration
    pub counter_duration_ms: u64,
    pub counter_steps: u32,
    /// Delay from reveal to the gauge reset
    pub gauge_delay_ms: u64,
    /// Delay from the gauge reset to committing its sweep
    pub gauge_commit_ms: u64,
    /// Entrance delay added per project card index
    pub card_stagger_ms: u64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            intersection: IntersectionOptions::default(),
            skill_bar_delay_ms: 200,
            skill_bar_commit_ms: 100,
            counter_delay_ms: 300,
            counter_duration_ms: 2000,
            counter_steps: 60,
            gauge_delay_ms: 400,
            gauge_commit_ms: 200,
            card_stagger_ms: 100,
        }
    }
}

impl ObserverOptions {
    /// Time between counter steps
    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms) / self.counter_steps.max(1)
    }
}

/// Deferred follow-up work, by element index
#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealTask {
    /// Category follow-up, fired once after the category's delay
    FollowUp(usize),
    CommitBar { element: usize, percent: f32 },
    CommitGauge { element: usize, degrees: f32 },
    CounterStep { element: usize, run: CounterRun },
}

/// Tracks a fixed set of elements and reveals them as they come into view
#[derive(Debug)]
pub struct VisibilityObserver {
    elements: Vec<TrackedElement>,
    options: ObserverOptions,
    scheduler: Scheduler<RevealTask>,
    follow_ups_fired: usize,
}

impl VisibilityObserver {
    pub fn new(elements: Vec<TrackedElement>, options: ObserverOptions) -> Self {
        log::info!("Observing {} elements", elements.len());
        Self {
            elements,
            options,
            scheduler: Scheduler::new(),
            follow_ups_fired: 0,
        }
    }

    pub fn elements(&self) -> &[TrackedElement] {
        &self.elements
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Tasks still waiting on the clock
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Category follow-ups that have run so far
    pub fn follow_ups_fired(&self) -> usize {
        self.follow_ups_fired
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.elements
            .iter()
            .any(|el| &el.id == id && el.is_revealed())
    }

    pub fn revealed_count(&self) -> usize {
        self.elements.iter().filter(|el| el.is_revealed()).count()
    }

    /// Hide or show an element; hidden elements are never revealed
    ///
    /// Returns `false` for unknown ids.
    pub fn set_hidden(&mut self, id: &ElementId, hidden: bool) -> bool {
        match self.elements.iter_mut().find(|el| &el.id == id) {
            Some(element) => {
                element.set_hidden(hidden);
                true
            }
            None => false,
        }
    }

    /// Check every unrevealed, shown element against `viewport` (document coordinates)
    pub fn observe_viewport(&mut self, viewport: &Rect) -> Vec<StyleUpdate> {
        let mut updates = Vec::new();
        for index in 0..self.elements.len() {
            let element = &self.elements[index];
            if element.is_revealed() || element.is_hidden() {
                continue;
            }
            let entry = intersect_viewport(
                &self.elements[index].bounds,
                viewport,
                &self.options.intersection,
            );
            self.apply_entry(index, &entry, &mut updates);
        }
        updates
    }

    /// Feed an intersection notification computed by the host
    ///
    /// Unknown ids are ignored.
    pub fn notify(&mut self, id: &ElementId, entry: &IntersectionEntry) -> Vec<StyleUpdate> {
        let mut updates = Vec::new();
        match self.elements.iter().position(|el| &el.id == id) {
            Some(index) => self.apply_entry(index, entry, &mut updates),
            None => log::debug!("Intersection for unknown element {id}"),
        }
        updates
    }

    /// Run every follow-up due by `now`
    pub fn advance_to(&mut self, now: Duration) -> Vec<StyleUpdate> {
        let mut updates = Vec::new();
        while let Some(task) = self.scheduler.pop_due(now) {
            self.run_task(task.action, &mut updates);
        }
        self.scheduler.settle(now);
        updates
    }

    fn apply_entry(&mut self, index: usize, entry: &IntersectionEntry, updates: &mut Vec<StyleUpdate>) {
        if self.elements[index].is_hidden() || !entry.meets(&self.options.intersection) {
            return;
        }

        let element = &mut self.elements[index];
        if !element.mark_revealed() {
            return;
        }

        log::debug!(
            "Revealed {} ({}) at {:?}, ratio {:.2}",
            element.id,
            element.category.name(),
            self.scheduler.now(),
            entry.ratio
        );

        updates.push(StyleUpdate::Reveal {
            target: element.id.clone(),
        });

        let delay = match element.category {
            Category::Generic => None,
            Category::SkillBar { .. } => Some(self.options.skill_bar_delay_ms),
            Category::StatCounter { .. } => Some(self.options.counter_delay_ms),
            Category::CircularGauge { .. } => Some(self.options.gauge_delay_ms),
            Category::StaggeredCard { index: card } => {
                updates.push(StyleUpdate::AnimationDelay {
                    target: element.id.clone(),
                    delay: stagger_delay(card, Duration::from_millis(self.options.card_stagger_ms)),
                });
                self.follow_ups_fired += 1;
                None
            }
        };

        if let Some(ms) = delay {
            self.scheduler
                .schedule_in(Duration::from_millis(ms), RevealTask::FollowUp(index));
        }
    }

    fn run_task(&mut self, task: RevealTask, updates: &mut Vec<StyleUpdate>) {
        match task {
            RevealTask::FollowUp(index) => {
                self.follow_ups_fired += 1;
                self.run_follow_up(index, updates);
            }
            RevealTask::CommitBar { element, percent } => {
                updates.push(StyleUpdate::BarWidth {
                    target: self.elements[element].id.clone(),
                    percent,
                });
            }
            RevealTask::CommitGauge { element, degrees } => {
                updates.push(StyleUpdate::GaugeSweep {
                    target: self.elements[element].id.clone(),
                    degrees,
                });
            }
            RevealTask::CounterStep { element, mut run } => {
                let (value, finished) = run.advance();
                updates.push(StyleUpdate::CounterText {
                    target: self.elements[element].id.clone(),
                    value,
                });
                if !finished {
                    self.scheduler.schedule_in(
                        self.options.counter_interval(),
                        RevealTask::CounterStep { element, run },
                    );
                }
            }
        }
    }

    /// Per-category follow-up, dispatched on the element's tag
    fn run_follow_up(&mut self, index: usize, updates: &mut Vec<StyleUpdate>) {
        let element = &self.elements[index];
        let target = element.id.clone();

        match element.category {
            Category::SkillBar { width: Some(percent) } => {
                updates.push(StyleUpdate::BarWidth {
                    target,
                    percent: 0.0,
                });
                self.scheduler.schedule_in(
                    Duration::from_millis(self.options.skill_bar_commit_ms),
                    RevealTask::CommitBar {
                        element: index,
                        percent,
                    },
                );
            }
            Category::CircularGauge {
                percentage: Some(percentage),
            } => {
                updates.push(StyleUpdate::GaugeSweep {
                    target,
                    degrees: 0.0,
                });
                self.scheduler.schedule_in(
                    Duration::from_millis(self.options.gauge_commit_ms),
                    RevealTask::CommitGauge {
                        element: index,
                        degrees: gauge_degrees(percentage),
                    },
                );
            }
            Category::StatCounter { target: Some(goal) } => {
                self.scheduler.schedule_in(
                    self.options.counter_interval(),
                    RevealTask::CounterStep {
                        element: index,
                        run: CounterRun::new(goal, self.options.counter_steps),
                    },
                );
            }
            Category::SkillBar { width: None }
            | Category::CircularGauge { percentage: None }
            | Category::StatCounter { target: None } => {
                log::debug!("{target}: no configured value, follow-up skipped");
            }
            Category::Generic | Category::StaggeredCard { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn element(id: &str, kind: ElementKind, category: Category, top: f32) -> TrackedElement {
        TrackedElement::new(
            ElementId::new(id),
            kind,
            category,
            Rect::from_min_size([0.0, top], [200.0, 100.0]),
        )
    }

    fn viewport_at(scroll: f32) -> Rect {
        Rect::from_min_size([0.0, scroll], [1280.0, 720.0])
    }

    fn visible() -> IntersectionEntry {
        IntersectionEntry {
            ratio: 1.0,
            is_intersecting: true,
            intersection_rect: None,
        }
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut observer = VisibilityObserver::new(
            vec![element(
                "skill",
                ElementKind::SkillItem,
                Category::SkillBar { width: Some(80.0) },
                100.0,
            )],
            ObserverOptions::default(),
        );
        let id = ElementId::new("skill");

        let first = observer.notify(&id, &visible());
        assert_eq!(first, vec![StyleUpdate::Reveal { target: id.clone() }]);
        for _ in 0..5 {
            assert!(observer.notify(&id, &visible()).is_empty());
            assert!(observer.observe_viewport(&viewport_at(0.0)).is_empty());
        }

        let updates = observer.advance_to(ms(10_000));
        assert_eq!(observer.follow_ups_fired(), 1);
        assert_eq!(
            updates,
            vec![
                StyleUpdate::BarWidth {
                    target: id.clone(),
                    percent: 0.0
                },
                StyleUpdate::BarWidth {
                    target: id,
                    percent: 80.0
                },
            ]
        );
        assert_eq!(observer.revealed_count(), 1);
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let mut observer = VisibilityObserver::new(
            vec![element("title", ElementKind::SectionTitle, Category::Generic, 0.0)],
            ObserverOptions::default(),
        );
        let id = ElementId::new("title");
        let barely = IntersectionEntry {
            ratio: 0.05,
            is_intersecting: true,
            intersection_rect: None,
        };
        assert!(observer.notify(&id, &barely).is_empty());
        assert!(!observer.is_revealed(&id));
    }

    #[test]
    fn test_observe_viewport_uses_bottom_margin() {
        // Element top at 700, viewport bottom at 720, effective bottom at 670
        let mut observer = VisibilityObserver::new(
            vec![element("line", ElementKind::SectionLine, Category::Generic, 700.0)],
            ObserverOptions::default(),
        );
        assert!(observer.observe_viewport(&viewport_at(0.0)).is_empty());
        // Scroll 60px: effective bottom at 730 -> 30% visible
        let updates = observer.observe_viewport(&viewport_at(60.0));
        assert_eq!(updates.len(), 1);
        assert!(observer.is_revealed(&ElementId::new("line")));
    }

    #[test]
    fn test_skill_bar_timings() {
        let mut observer = VisibilityObserver::new(
            vec![element(
                "bar",
                ElementKind::SkillItem,
                Category::SkillBar { width: Some(65.0) },
                0.0,
            )],
            ObserverOptions::default(),
        );
        observer.observe_viewport(&viewport_at(0.0));

        assert!(observer.advance_to(ms(199)).is_empty());
        assert_eq!(observer.advance_to(ms(200)).len(), 1);
        assert!(observer.advance_to(ms(299)).is_empty());
        let commit = observer.advance_to(ms(300));
        assert_eq!(
            commit,
            vec![StyleUpdate::BarWidth {
                target: ElementId::new("bar"),
                percent: 65.0
            }]
        );
    }

    #[test]
    fn test_counter_converges_within_window() {
        let mut observer = VisibilityObserver::new(
            vec![element(
                "stat",
                ElementKind::StatItem,
                Category::StatCounter { target: Some(137) },
                0.0,
            )],
            ObserverOptions::default(),
        );
        observer.observe_viewport(&viewport_at(0.0));

        // Tally starts 300ms after reveal and must finish within 2000ms of that
        let updates = observer.advance_to(ms(2300));
        let values: Vec<u32> = updates
            .iter()
            .filter_map(|u| match u {
                StyleUpdate::CounterText { value, .. } => Some(*value),
                _ => None,
            })
            .collect();

        assert_eq!(values.len(), 60);
        assert_eq!(*values.last().unwrap(), 137);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[0], 2); // floor(137 / 60)
        assert_eq!(observer.pending_tasks(), 0);
    }

    #[test]
    fn test_counter_exact_for_many_targets() {
        for target in [0u32, 1, 3, 60, 99, 250, 12_345] {
            let mut observer = VisibilityObserver::new(
                vec![element(
                    "stat",
                    ElementKind::StatItem,
                    Category::StatCounter {
                        target: Some(target),
                    },
                    0.0,
                )],
                ObserverOptions::default(),
            );
            observer.observe_viewport(&viewport_at(0.0));
            let updates = observer.advance_to(ms(2300));
            match updates.last() {
                Some(StyleUpdate::CounterText { value, .. }) => assert_eq!(*value, target),
                other => panic!("unexpected last update {other:?}"),
            }
        }
    }

    #[test]
    fn test_gauge_sweep() {
        for percentage in [0.0f32, 37.0, 100.0] {
            let mut observer = VisibilityObserver::new(
                vec![element(
                    "gauge",
                    ElementKind::CircleSkill,
                    Category::CircularGauge {
                        percentage: Some(percentage),
                    },
                    0.0,
                )],
                ObserverOptions::default(),
            );
            observer.observe_viewport(&viewport_at(0.0));

            assert!(observer.advance_to(ms(399)).is_empty());
            let reset = observer.advance_to(ms(400));
            assert_eq!(
                reset,
                vec![StyleUpdate::GaugeSweep {
                    target: ElementId::new("gauge"),
                    degrees: 0.0
                }]
            );
            let commit = observer.advance_to(ms(600));
            assert_eq!(
                commit,
                vec![StyleUpdate::GaugeSweep {
                    target: ElementId::new("gauge"),
                    degrees: percentage * 3.6
                }]
            );
        }
    }

    #[test]
    fn test_staggered_cards() {
        let cards = (0..5)
            .map(|i| {
                TrackedElement::new(
                    ElementId::new(format!("card-{i}")),
                    ElementKind::ProjectCard,
                    Category::StaggeredCard { index: i },
                    Rect::from_min_size([i as f32 * 210.0, 100.0], [200.0, 200.0]),
                )
            })
            .collect();
        let mut observer = VisibilityObserver::new(cards, ObserverOptions::default());

        let updates = observer.observe_viewport(&viewport_at(0.0));
        let delays: Vec<Duration> = updates
            .iter()
            .filter_map(|u| match u {
                StyleUpdate::AnimationDelay { delay, .. } => Some(*delay),
                _ => None,
            })
            .collect();
        assert_eq!(
            delays,
            (0..5).map(|i| ms(100 * i)).collect::<Vec<_>>()
        );
        assert_eq!(observer.pending_tasks(), 0);
    }

    #[test]
    fn test_hidden_card_waits_and_keeps_its_index() {
        let cards = (0..2)
            .map(|i| {
                TrackedElement::new(
                    ElementId::new(format!("card-{i}")),
                    ElementKind::ProjectCard,
                    Category::StaggeredCard { index: i },
                    Rect::from_min_size([i as f32 * 210.0, 100.0], [200.0, 200.0]),
                )
            })
            .collect();
        let mut observer = VisibilityObserver::new(cards, ObserverOptions::default());
        let hidden = ElementId::new("card-1");
        assert!(observer.set_hidden(&hidden, true));
        assert!(!observer.set_hidden(&ElementId::new("nope"), true));

        observer.observe_viewport(&viewport_at(0.0));
        assert!(!observer.is_revealed(&hidden));
        assert!(observer.notify(&hidden, &visible()).is_empty());

        observer.set_hidden(&hidden, false);
        let updates = observer.observe_viewport(&viewport_at(0.0));
        assert_eq!(
            updates,
            vec![
                StyleUpdate::Reveal {
                    target: hidden.clone()
                },
                StyleUpdate::AnimationDelay {
                    target: hidden,
                    delay: ms(100)
                },
            ]
        );
    }

    #[test]
    fn test_missing_value_reveals_without_follow_up() {
        let mut observer = VisibilityObserver::new(
            vec![element(
                "stat",
                ElementKind::StatItem,
                Category::StatCounter { target: None },
                0.0,
            )],
            ObserverOptions::default(),
        );
        assert_eq!(observer.observe_viewport(&viewport_at(0.0)).len(), 1);
        assert!(observer.advance_to(ms(5000)).is_empty());
        assert_eq!(observer.follow_ups_fired(), 1);
    }

    #[test]
    fn test_delays_are_independent() {
        let mut observer = VisibilityObserver::new(
            vec![
                element(
                    "bar",
                    ElementKind::SkillItem,
                    Category::SkillBar { width: Some(50.0) },
                    0.0,
                ),
                element(
                    "gauge",
                    ElementKind::CircleSkill,
                    Category::CircularGauge {
                        percentage: Some(50.0),
                    },
                    0.0,
                ),
            ],
            ObserverOptions::default(),
        );
        observer.advance_to(ms(1000));
        observer.observe_viewport(&viewport_at(0.0));

        let at_bar = observer.advance_to(ms(1200));
        assert_eq!(at_bar.len(), 1);
        assert!(matches!(at_bar[0], StyleUpdate::BarWidth { .. }));

        let at_gauge = observer.advance_to(ms(1400));
        // bar commit at 1300, gauge reset at 1400
        assert_eq!(at_gauge.len(), 2);
        assert!(matches!(at_gauge[1], StyleUpdate::GaugeSweep { degrees, .. } if degrees == 0.0));
    }
}
