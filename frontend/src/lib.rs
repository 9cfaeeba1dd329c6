//! Timed drop countdown widget.
//!
//! Attaches to server-rendered product markup, counts each scheduled drop
//! down once per second, and flips a timer into its live state when the
//! drop time passes. The countdown engine is host-independent; everything
//! browser-specific lives behind the page binding and in the bootstrap
//! code below.

mod countdown;
mod page;
mod settings;
mod time_types;

pub use countdown::{DROP_ACTIVE_FLAG, DropCountdowns, UPDATING_FLAG};
pub use page::{DiscoveredTimer, TimerPage};
pub use settings::TimerSettings;
pub use time_types::{CountdownUnit, CountdownUnits, DropTimeMs, RemainingMs};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Optional JSON settings block embedded by the page.
#[cfg(target_arch = "wasm32")]
const SETTINGS_BLOCK_ID: &str = "timed-drop-settings";

#[cfg(target_arch = "wasm32")]
thread_local! {
    /// Boot-once guard. Covers the script running before or after the
    /// document finished loading, and manual `new TimedDropTimer()`
    /// construction on top of the automatic startup.
    static BOOTED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

#[cfg(target_arch = "wasm32")]
fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

#[cfg(target_arch = "wasm32")]
fn now() -> DropTimeMs {
    DropTimeMs(js_sys::Date::now() as i64)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    let document = window().document().expect("document");
    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_: web_sys::Event| boot())
            as Box<dyn FnMut(web_sys::Event)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        boot();
    }
}

/// Discover the page's timers and start the repeating update pass.
///
/// Runs at most once per page load; later calls are no-ops. Pages without
/// timers schedule no periodic work at all.
#[cfg(target_arch = "wasm32")]
fn boot() {
    if BOOTED.with(|flag| flag.replace(true)) {
        return;
    }

    let document = window().document().expect("document");
    let settings = read_page_settings(&document);
    let tick_interval_ms = settings.tick_interval_ms;

    let mut countdowns = DropCountdowns::discover(page::WebPage::new(document), settings);
    if countdowns.is_empty() {
        return;
    }
    web_sys::console::debug_1(
        &format!("timed-drop: {} timer(s) armed", countdowns.len()).into(),
    );

    countdowns.tick(now());
    // The tick runs for the rest of the page's lifetime; there is no
    // cancellation path, so the interval handle is deliberately leaked.
    gloo_timers::callback::Interval::new(tick_interval_ms, move || {
        countdowns.tick(now());
    })
    .forget();
}

#[cfg(target_arch = "wasm32")]
fn read_page_settings(document: &web_sys::Document) -> TimerSettings {
    let Some(block) = document.get_element_by_id(SETTINGS_BLOCK_ID) else {
        return TimerSettings::default();
    };
    let text = block.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return TimerSettings::default();
    }
    let decoded = js_sys::JSON::parse(&text)
        .ok()
        .and_then(|value| serde_wasm_bindgen::from_value(value).ok());
    match decoded {
        Some(settings) => settings,
        None => {
            web_sys::console::warn_1(
                &"timed-drop: malformed settings block, using defaults".into(),
            );
            TimerSettings::default()
        }
    }
}

/// Page-global handle mirroring the widget's script API.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct TimedDropTimer;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TimedDropTimer {
    /// Manual entry point for external scripts. Boots the widget if the
    /// automatic startup has not already done so; never double-registers
    /// the update loop.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> TimedDropTimer {
        boot();
        TimedDropTimer
    }

    /// True once the given drop time has passed. Unparsable input is never
    /// active.
    #[wasm_bindgen(js_name = isDropActive)]
    pub fn is_drop_active(drop_time: &str) -> bool {
        match DropTimeMs::from_host_millis(js_sys::Date::parse(drop_time)) {
            Some(drop) => drop.is_reached(now()),
            None => false,
        }
    }

    /// Non-negative milliseconds until the given drop time, zero once it
    /// has passed. NaN for unparsable input, matching host date
    /// arithmetic.
    #[wasm_bindgen(js_name = getTimeRemaining)]
    pub fn get_time_remaining(drop_time: &str) -> f64 {
        match DropTimeMs::from_host_millis(js_sys::Date::parse(drop_time)) {
            Some(drop) => drop.remaining(now()).millis() as f64,
            None => f64::NAN,
        }
    }
}
