//! web-sys implementation of the page binding.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use super::{DiscoveredTimer, TimerPage};
use crate::time_types::DropTimeMs;

/// Marker class carried by every timer root element.
const TIMER_MARKER_SELECTOR: &str = ".timed-drop-timer";
/// Scheduled-time attribute on the root; roots without it are decorative.
const DROP_TIME_ATTR: &str = "data-drop-time";
const PRODUCT_ID_ATTR: &str = "data-product-id";
/// Inner container whose content is swapped once the drop goes live.
const CONTAINER_SELECTOR: &str = ".drop-timer-container";

/// Binding against the live browser document.
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl TimerPage for WebPage {
    type Node = Element;

    fn discover(&self) -> Vec<DiscoveredTimer<Element>> {
        let mut found = Vec::new();
        let Ok(roots) = self.document.query_selector_all(TIMER_MARKER_SELECTOR) else {
            return found;
        };
        for index in 0..roots.length() {
            let Some(node) = roots.item(index) else {
                continue;
            };
            let Ok(root) = node.dyn_into::<Element>() else {
                continue;
            };
            found.push(DiscoveredTimer {
                drop_time: root.get_attribute(DROP_TIME_ATTR),
                product_id: root.get_attribute(PRODUCT_ID_ATTR).unwrap_or_default(),
                node: root,
            });
        }
        found
    }

    fn parse_drop_time(&self, raw: &str) -> Option<DropTimeMs> {
        DropTimeMs::from_host_millis(js_sys::Date::parse(raw))
    }

    fn locate(&self, root: &Element, id: &str) -> Option<Element> {
        // Scoped to the root so duplicate product ids on a broken page
        // cannot match another timer's displays.
        root.query_selector(&format!("#{id}")).ok().flatten()
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_flag(&self, node: &Element, flag: &str, on: bool) {
        let class_list = node.class_list();
        let _ = if on {
            class_list.add_1(flag)
        } else {
            class_list.remove_1(flag)
        };
    }

    fn clear_flag_later(&self, node: &Element, flag: &str, delay_ms: u32) {
        let node = node.clone();
        let flag = flag.to_string();
        Timeout::new(delay_ms, move || {
            let _ = node.class_list().remove_1(&flag);
        })
        .forget();
    }

    fn replace_content(&self, root: &Element, markup: &str) {
        if let Ok(Some(container)) = root.query_selector(CONTAINER_SELECTOR) {
            container.set_inner_html(markup);
        }
    }

    fn schedule_reload(&self, delay_ms: u32) {
        Timeout::new(delay_ms, || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        })
        .forget();
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }
}
