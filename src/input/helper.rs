//! Device helper - live view of connected devices for binding setup.
//!
//! Answering "which button index is this?" without reading kernel docs:
//! the helper watches every button on every connected device, remembers
//! the last one that saw a press edge, and formats the exact
//! name/button pair to paste into a document's `controls` section.
//!
//! Runs at a lower rate than action mapping (display refresh, not input
//! latency); its edge history is its own, never shared with the mapper.

use std::collections::HashMap;
use std::time::Duration;

use super::device::DeviceSnapshot;

/// Suggested poll rate for helper display updates.
pub const HELPER_TICK: Duration = Duration::from_millis(100);

/// Summary of one connected device for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HelperDevice {
    pub index: usize,
    pub id: String,
    pub button_count: usize,
    pub axis_count: usize,
    /// Current pressed state per button, for a live button display.
    pub pressed: Vec<bool>,
    /// Button that most recently saw a press edge, if any yet.
    pub last_touched: Option<usize>,
}

impl HelperDevice {
    /// The `controls` snippet for the last touched button.
    ///
    /// Returns something like `"name": "X-Box pad", "button": 3`, ready
    /// to drop into a checklist document.
    pub fn binding_hint(&self) -> Option<String> {
        self.last_touched
            .map(|button| format!("\"name\": \"{}\", \"button\": {}", self.id, button))
    }
}

/// Tracks connected devices and their last touched button.
#[derive(Debug, Default)]
pub struct DeviceHelper {
    was_down: HashMap<(usize, usize), bool>,
    last_touched: HashMap<usize, usize>,
}

impl DeviceHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one poll tick and return the display summaries.
    ///
    /// Edge detection here follows the same rule as action mapping: a
    /// button becomes "last touched" only on a not-pressed to pressed
    /// transition, so a held button does not keep re-claiming the slot.
    pub fn tick(&mut self, devices: &[DeviceSnapshot]) -> Vec<HelperDevice> {
        let mut summaries = Vec::with_capacity(devices.len());

        for device in devices {
            let mut pressed = Vec::with_capacity(device.buttons.len());

            for (button, state) in device.buttons.iter().enumerate() {
                let key = (device.index, button);
                let down = state.is_down();
                let was_down = self.was_down.get(&key).copied().unwrap_or(false);

                if down && !was_down {
                    self.last_touched.insert(device.index, button);
                }
                self.was_down.insert(key, down);
                pressed.push(state.pressed);
            }

            summaries.push(HelperDevice {
                index: device.index,
                id: device.id.clone(),
                button_count: device.buttons.len(),
                axis_count: device.axes,
                pressed,
                last_touched: self.last_touched.get(&device.index).copied(),
            });
        }

        // Disconnected devices lose their history and their hint
        self.was_down
            .retain(|(index, _), _| devices.iter().any(|d| d.index == *index));
        self.last_touched
            .retain(|index, _| devices.iter().any(|d| d.index == *index));

        summaries
    }
}

// =============================================================================
// Tests
// =============================================================================
