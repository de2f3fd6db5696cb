//! Device snapshots and the polling collaborator interface.
//!
//! The mapper never talks to hardware. Each tick it receives a list of
//! [`DeviceSnapshot`] values from a [`DevicePoller`] - the real backend
//! on Linux reads evdev, tests hand in scripted snapshots.

/// State of one button at one poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSnapshot {
    /// The device's digital pressed flag.
    pub pressed: bool,
    /// Analog value in 0..1; digital buttons report 0.0 or 1.0.
    pub value: f32,
}

impl ButtonSnapshot {
    /// A purely digital button reading.
    pub fn digital(pressed: bool) -> Self {
        Self {
            pressed,
            value: if pressed { 1.0 } else { 0.0 },
        }
    }

    /// Effective pressed state: the flag AND the analog value above the
    /// half-travel threshold. Guards against noisy triggers that report
    /// pressed with a near-zero value.
    pub fn is_down(&self) -> bool {
        self.pressed && self.value > 0.5
    }
}

/// One connected device at one poll.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    /// Stable position assigned by the poller; press-edge history is
    /// keyed by it so identically-named devices stay distinct.
    pub index: usize,
    /// Human-readable device identifier, matched against the document's
    /// `controls` device names.
    pub id: String,
    /// Ordered button states.
    pub buttons: Vec<ButtonSnapshot>,
    /// Number of axes the device reports (informational).
    pub axes: usize,
}

/// The device-polling collaborator.
///
/// A poller owns whatever OS handles it needs and returns a fresh,
/// read-only snapshot of every connected device per tick. Devices that
/// come and go between ticks simply appear and disappear from the list.
pub trait DevicePoller {
    fn poll(&mut self) -> Vec<DeviceSnapshot>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digital_button() {
        assert!(ButtonSnapshot::digital(true).is_down());
        assert!(!ButtonSnapshot::digital(false).is_down());
    }

    #[test]
    fn test_analog_threshold() {
        // Pressed flag alone is not enough
        let noisy = ButtonSnapshot {
            pressed: true,
            value: 0.3,
        };
        assert!(!noisy.is_down());

        let firm = ButtonSnapshot {
            pressed: true,
            value: 0.9,
        };
        assert!(firm.is_down());

        // Value alone is not enough either
        let ghost = ButtonSnapshot {
            pressed: false,
            value: 1.0,
        };
        assert!(!ghost.is_down());
    }
}
