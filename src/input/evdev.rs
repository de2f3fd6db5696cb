//! Linux device backend over evdev.
//!
//! Enumerates `/dev/input` devices that look like game controllers and
//! snapshots their key state per poll via ioctl - no event queue to
//! drain, so a slow consumer can never fall behind.
//!
//! Button indices follow the device's supported-key order, which is
//! stable for a given controller model; the device helper exists to
//! discover the right index for a physical button.

use evdev::{Device, KeyCode};

use super::device::{ButtonSnapshot, DevicePoller, DeviceSnapshot};

/// Polls connected game controllers through evdev.
pub struct EvdevPoller {
    devices: Vec<OpenDevice>,
}

struct OpenDevice {
    name: String,
    device: Device,
    /// Supported key codes in device order; positions are the button
    /// indices exposed to the mapper.
    buttons: Vec<KeyCode>,
    axes: usize,
}

impl EvdevPoller {
    /// Enumerate and open all connected game controllers.
    ///
    /// Devices that cannot be opened (permissions, races with udev) are
    /// skipped with a debug log; an empty poller is perfectly valid.
    pub fn open() -> Self {
        let mut poller = Self {
            devices: Vec::new(),
        };
        poller.refresh();
        poller
    }

    /// Re-enumerate devices, picking up connects and disconnects.
    ///
    /// Call this between polling sessions, or at whatever cadence device
    /// hotplug should be noticed; the poll tick itself never blocks on
    /// enumeration.
    pub fn refresh(&mut self) {
        let mut devices = Vec::new();

        let mut entries: Vec<_> = evdev::enumerate().collect();
        // Stable ordering so snapshot indices survive re-enumeration
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, device) in entries {
            if !is_gamepad(&device) {
                continue;
            }

            let Some(keys) = device.supported_keys() else {
                continue;
            };
            let buttons: Vec<KeyCode> = keys.iter().collect();
            let axes = device
                .supported_absolute_axes()
                .map(|axes| axes.iter().count())
                .unwrap_or(0);
            let name = device.name().unwrap_or("").to_string();

            log::debug!(
                "evdev: {} ({}, {} buttons, {} axes)",
                path.display(),
                name,
                buttons.len(),
                axes
            );

            devices.push(OpenDevice {
                name,
                device,
                buttons,
                axes,
            });
        }

        self.devices = devices;
    }

    /// Number of controllers currently open.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

impl DevicePoller for EvdevPoller {
    fn poll(&mut self) -> Vec<DeviceSnapshot> {
        let mut snapshots = Vec::with_capacity(self.devices.len());

        for (index, open) in self.devices.iter().enumerate() {
            // Snapshot of currently-held keys; a device that went away
            // mid-session just reports nothing pressed.
            let Ok(key_state) = open.device.get_key_state() else {
                log::debug!("evdev: failed to read key state for {}", open.name);
                continue;
            };

            let buttons = open
                .buttons
                .iter()
                .map(|&code| ButtonSnapshot::digital(key_state.contains(code)))
                .collect();

            snapshots.push(DeviceSnapshot {
                index,
                id: open.name.clone(),
                buttons,
                axes: open.axes,
            });
        }

        snapshots
    }
}

/// A device counts as a gamepad when it reports the standard south
/// face button (BTN_SOUTH, "A" on most pads).
fn is_gamepad(device: &Device) -> bool {
    device
        .supported_keys()
        .map_or(false, |keys| keys.contains(KeyCode::BTN_SOUTH))
}
