//! Page binding layer.
//!
//! The countdown engine never touches the DOM directly; it talks to the
//! page through the `TimerPage` trait so the same update pass runs against
//! the real document in the browser and against an in-memory page in
//! native tests.

use crate::time_types::DropTimeMs;

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebPage;

/// One timer root element as found on the page, before its scheduling data
/// has been validated.
pub struct DiscoveredTimer<N> {
    pub node: N,
    /// Raw scheduled-time string; `None` when the attribute is absent.
    pub drop_time: Option<String>,
    /// Opaque key used to locate the timer's unit displays. Falls back to
    /// an empty string when unset, which simply makes every unit lookup
    /// miss.
    pub product_id: String,
}

/// Capabilities the countdown engine needs from its host page.
pub trait TimerPage {
    /// Non-owning handle to a page element.
    type Node: Clone;

    /// All timer roots currently on the page, in document order.
    fn discover(&self) -> Vec<DiscoveredTimer<Self::Node>>;

    /// Parse a scheduled-time string with the host's date semantics.
    fn parse_drop_time(&self, raw: &str) -> Option<DropTimeMs>;

    /// Find a unit display element by id underneath a timer root.
    fn locate(&self, root: &Self::Node, id: &str) -> Option<Self::Node>;

    /// Currently displayed text of an element.
    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Toggle a CSS-class flag on an element.
    fn set_flag(&self, node: &Self::Node, flag: &str, on: bool);

    /// Remove a CSS-class flag after a delay.
    fn clear_flag_later(&self, node: &Self::Node, flag: &str, delay_ms: u32);

    /// Swap the inner content of the timer's content container. Timers
    /// without a container are left untouched.
    fn replace_content(&self, root: &Self::Node, markup: &str);

    /// Reload the whole page after a delay.
    fn schedule_reload(&self, delay_ms: u32);

    /// Report a tolerated anomaly.
    fn warn(&self, message: &str);
}
