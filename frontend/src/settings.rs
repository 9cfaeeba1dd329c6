use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_UPDATING_FLASH_MS: u32 = 300;
pub const DEFAULT_RELOAD_DELAY_MS: u32 = 2000;

/// Widget tuning and messaging.
///
/// A page may override any subset of fields through the embedded settings
/// block; everything not mentioned keeps its default.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerSettings {
    /// Period of the repeating update pass.
    pub tick_interval_ms: u32,
    /// How long a unit display keeps its transient indicator after a change.
    pub updating_flash_ms: u32,
    /// Delay between a drop going live and the full page reload.
    pub reload_delay_ms: u32,
    pub live_title: String,
    pub live_subtitle: String,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            updating_flash_ms: DEFAULT_UPDATING_FLASH_MS,
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
            live_title: "🎉 Drop is Now Live!".to_string(),
            live_subtitle: "This product is now available for purchase".to_string(),
        }
    }
}
