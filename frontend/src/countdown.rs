//! Countdown engine.
//!
//! Owns the timer collection built at discovery and runs the per-tick
//! update pass. All page access goes through the `TimerPage` binding.

use crate::page::TimerPage;
use crate::settings::TimerSettings;
use crate::time_types::{CountdownUnit, DropTimeMs};

/// Transient class applied to a unit display while its value changes.
pub const UPDATING_FLAG: &str = "updating";
/// Terminal class applied to a timer root once its drop goes live.
pub const DROP_ACTIVE_FLAG: &str = "drop-active";

/// One drop countdown bound to a page element.
struct TimerTarget<N> {
    node: N,
    drop_time: DropTimeMs,
    product_id: String,
    /// Set on the tick that observes the drop time passing; the live
    /// transition runs exactly once per target.
    fired: bool,
}

/// All drop countdowns on the page.
///
/// The collection is built once and never rebuilt; targets only move from
/// counting down to fired, never back.
pub struct DropCountdowns<P: TimerPage> {
    page: P,
    settings: TimerSettings,
    targets: Vec<TimerTarget<P::Node>>,
}

impl<P: TimerPage> DropCountdowns<P> {
    /// Scan the page and register every timer that carries usable
    /// scheduling data.
    ///
    /// Roots without a scheduled-time attribute are skipped silently;
    /// roots whose scheduled time does not parse are skipped with a
    /// warning. Neither kind ever enters the collection.
    pub fn discover(page: P, settings: TimerSettings) -> Self {
        let mut targets = Vec::new();
        for found in page.discover() {
            let Some(raw) = found.drop_time else {
                continue;
            };
            match page.parse_drop_time(&raw) {
                Some(drop_time) => targets.push(TimerTarget {
                    node: found.node,
                    drop_time,
                    product_id: found.product_id,
                    fired: false,
                }),
                None => page.warn(&format!(
                    "timed-drop: unparsable drop time {:?} for product '{}', timer disabled",
                    raw, found.product_id
                )),
            }
        }
        Self {
            page,
            settings,
            targets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// One update pass over every target, in discovery order.
    pub fn tick(&mut self, now: DropTimeMs) {
        for target in &mut self.targets {
            let remaining = target.drop_time.remaining(now);
            if remaining.is_zero() {
                if !target.fired {
                    target.fired = true;
                    self.page
                        .replace_content(&target.node, &live_markup(&self.settings));
                    self.page.set_flag(&target.node, DROP_ACTIVE_FLAG, true);
                    self.page.schedule_reload(self.settings.reload_delay_ms);
                }
                continue;
            }

            let units = remaining.units();
            for unit in CountdownUnit::ALL {
                let id = unit.display_id(&target.product_id);
                let Some(display) = self.page.locate(&target.node, &id) else {
                    continue;
                };
                let rendered = units.rendered(unit);
                if self.page.text(&display) == rendered {
                    continue;
                }
                self.page.set_flag(&display, UPDATING_FLAG, true);
                self.page.set_text(&display, &rendered);
                self.page
                    .clear_flag_later(&display, UPDATING_FLAG, self.settings.updating_flash_ms);
            }
        }
    }
}

/// Markup swapped into the content container once a drop goes live.
fn live_markup(settings: &TimerSettings) -> String {
    format!(
        concat!(
            "<div class=\"drop-timer-header\">",
            "<h3 class=\"drop-timer-title\">{}</h3>",
            "<p class=\"drop-timer-subtitle\">{}</p>",
            "</div>"
        ),
        settings.live_title, settings.live_subtitle
    )
}
