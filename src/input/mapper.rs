//! Press-edge detection and the polling session lifecycle.
//!
//! A button press fires its bound action exactly once, on the
//! not-pressed to pressed transition between consecutive polls. Holds
//! and releases fire nothing. All edge history lives inside the mapper
//! instance - there is no process-wide input state - and stopping a
//! session discards it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::document::{ButtonBinding, Controls};

use super::device::{DevicePoller, DeviceSnapshot};

// =============================================================================
// Actions
// =============================================================================

/// Callbacks for the three navigation actions.
///
/// Unbound actions stay `None`; a binding without a callback (or a
/// callback without a binding) is silently inert.
#[derive(Default)]
pub struct Actions {
    pub next: Option<Box<dyn FnMut() + Send>>,
    pub previous: Option<Box<dyn FnMut() + Send>>,
    pub reset: Option<Box<dyn FnMut() + Send>>,
}

impl Actions {
    /// Builder: set the `next` callback.
    pub fn on_next(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Builder: set the `previous` callback.
    pub fn on_previous(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.previous = Some(Box::new(f));
        self
    }

    /// Builder: set the `reset` callback.
    pub fn on_reset(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.reset = Some(Box::new(f));
        self
    }
}

// =============================================================================
// InputMapper
// =============================================================================

/// Maps button press edges to bound actions.
///
/// Owns the per-(device, button) press history. Feed it one snapshot
/// list per tick; it fires each matching action at most once per edge.
#[derive(Debug)]
pub struct InputMapper {
    controls: Controls,
    was_down: HashMap<(usize, usize), bool>,
}

/// Which of the three actions a binding drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Reset,
}

impl InputMapper {
    /// Create a mapper for the document's control bindings.
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            was_down: HashMap::new(),
        }
    }

    /// Process one poll tick.
    ///
    /// Devices whose identifier matches no binding are skipped; bindings
    /// whose device is not connected this tick are skipped. History for
    /// devices that disappeared is dropped so a reconnected device
    /// starts from a clean slate.
    pub fn tick(&mut self, devices: &[DeviceSnapshot], actions: &mut Actions) {
        let bindings: [(Option<&ButtonBinding>, Action); 3] = [
            (self.controls.next.as_ref(), Action::Next),
            (self.controls.previous.as_ref(), Action::Previous),
            (self.controls.reset.as_ref(), Action::Reset),
        ];

        // Collect the new pressed states first so two bindings on the
        // same physical button both see the same edge.
        let mut updates: Vec<((usize, usize), bool)> = Vec::new();

        for (binding, action) in bindings {
            let Some(binding) = binding else { continue };

            for device in devices {
                if device.id != binding.name {
                    continue;
                }
                let Some(button) = device.buttons.get(binding.button) else {
                    continue;
                };

                let key = (device.index, binding.button);
                let down = button.is_down();
                let was_down = self.was_down.get(&key).copied().unwrap_or(false);

                if down && !was_down {
                    self.fire(action, actions);
                }
                updates.push((key, down));
            }
        }

        for (key, down) in updates {
            self.was_down.insert(key, down);
        }

        // Forget devices that are gone this tick
        self.was_down
            .retain(|(index, _), _| devices.iter().any(|d| d.index == *index));
    }

    /// Drop all press-edge history.
    pub fn clear_history(&mut self) {
        self.was_down.clear();
    }

    fn fire(&self, action: Action, actions: &mut Actions) {
        let callback = match action {
            Action::Next => actions.next.as_mut(),
            Action::Previous => actions.previous.as_mut(),
            Action::Reset => actions.reset.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

// =============================================================================
// Mapping session
// =============================================================================

/// Owns the background polling loop for action mapping.
///
/// One instance, explicit lifecycle: [`Mapping::start`] stops any prior
/// session before spawning the new one (restart replaces, never
/// layers), and [`Mapping::stop`] joins the poll thread synchronously,
/// taking the press history down with it. Dropping the value stops it.
#[derive(Default)]
pub struct Mapping {
    session: Option<Session>,
}

struct Session {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Fixed poll rate for action mapping.
pub const MAPPING_TICK: Duration = Duration::from_millis(50);

impl Mapping {
    /// Create an idle mapping component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start polling, replacing any session already running.
    pub fn start(
        &mut self,
        mut poller: impl DevicePoller + Send + 'static,
        controls: Controls,
        mut actions: Actions,
    ) {
        self.stop();

        let running = Arc::new(AtomicBool::new(true));
        let thread_running = running.clone();

        let handle = thread::spawn(move || {
            // The mapper - and with it all press-edge history - lives
            // and dies with this thread.
            let mut mapper = InputMapper::new(controls);
            while thread_running.load(Ordering::SeqCst) {
                let devices = poller.poll();
                mapper.tick(&devices, &mut actions);
                thread::sleep(MAPPING_TICK);
            }
        });

        self.session = Some(Session { running, handle });
    }

    /// Whether a session is currently polling.
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Stop polling. Blocks until the poll thread has exited (at most
    /// one tick); a stopped or never-started mapping is a no-op.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.running.store(false, Ordering::SeqCst);
            let _ = session.handle.join();
        }
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ButtonBinding;
    use crate::input::device::ButtonSnapshot;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    fn pad(index: usize, id: &str, pressed: &[bool]) -> DeviceSnapshot {
        DeviceSnapshot {
            index,
            id: id.to_string(),
            buttons: pressed.iter().map(|&p| ButtonSnapshot::digital(p)).collect(),
            axes: 0,
        }
    }

    fn controls_next(name: &str, button: usize) -> Controls {
        Controls {
            next: Some(ButtonBinding {
                name: name.to_string(),
                button,
            }),
            previous: None,
            reset: None,
        }
    }

    fn counting_actions(counter: Arc<AtomicUsize>) -> Actions {
        Actions::default().on_next(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_edges_fire_once_per_press() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 0));

        // Pressed history false, true, true, false, true:
        // edges at polls 1 and 4 only - never on hold or release.
        let history = [false, true, true, false, true];
        let expected = [0, 1, 1, 1, 2];
        for (pressed, want) in history.into_iter().zip(expected) {
            mapper.tick(&[pad(0, "Pad", &[pressed])], &mut actions);
            assert_eq!(fired.load(Ordering::SeqCst), want);
        }
    }

    #[test]
    fn test_unmatched_device_skipped() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 0));

        mapper.tick(&[pad(0, "Other Pad", &[true])], &mut actions);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_button_index_skipped() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 9));

        // Device has only two buttons; binding points past the end
        mapper.tick(&[pad(0, "Pad", &[true, true])], &mut actions);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_bindings_is_inert() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(Controls::default());

        mapper.tick(&[pad(0, "Pad", &[true])], &mut actions);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_analog_below_threshold_is_not_pressed() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 0));

        let soft = DeviceSnapshot {
            index: 0,
            id: "Pad".to_string(),
            buttons: vec![ButtonSnapshot {
                pressed: true,
                value: 0.4,
            }],
            axes: 0,
        };
        mapper.tick(&[soft], &mut actions);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disconnect_clears_history() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 0));

        // Held across disconnect: device vanishes mid-hold, comes back
        // still held. The fresh history treats that as a new edge.
        mapper.tick(&[pad(0, "Pad", &[true])], &mut actions);
        mapper.tick(&[], &mut actions);
        mapper.tick(&[pad(0, "Pad", &[true])], &mut actions);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_two_same_named_devices_tracked_separately() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut actions = counting_actions(fired.clone());
        let mut mapper = InputMapper::new(controls_next("Pad", 0));

        // Both devices press on the same tick: two edges
        mapper.tick(
            &[pad(0, "Pad", &[true]), pad(1, "Pad", &[true])],
            &mut actions,
        );
        assert_eq!(fired.load(Ordering::SeqCst), 2);

        // Held on both: nothing new
        mapper.tick(
            &[pad(0, "Pad", &[true]), pad(1, "Pad", &[true])],
            &mut actions,
        );
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_all_three_actions_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let push = |tag: &'static str| {
            let log = log.clone();
            move || log.lock().unwrap().push(tag)
        };
        let mut actions = Actions::default()
            .on_next(push("next"))
            .on_previous(push("previous"))
            .on_reset(push("reset"));

        let controls = Controls {
            next: Some(ButtonBinding {
                name: "Pad".to_string(),
                button: 0,
            }),
            previous: Some(ButtonBinding {
                name: "Pad".to_string(),
                button: 1,
            }),
            reset: Some(ButtonBinding {
                name: "Pad".to_string(),
                button: 2,
            }),
        };
        let mut mapper = InputMapper::new(controls);

        mapper.tick(&[pad(0, "Pad", &[false, true, false])], &mut actions);
        mapper.tick(&[pad(0, "Pad", &[true, false, true])], &mut actions);

        let fired = log.lock().unwrap().clone();
        assert_eq!(fired, vec!["previous", "next", "reset"]);
    }

    // -------------------------------------------------------------------------
    // Session lifecycle
    // -------------------------------------------------------------------------

    struct ScriptedPoller {
        polls: Arc<AtomicUsize>,
        pressed: bool,
    }

    impl DevicePoller for ScriptedPoller {
        fn poll(&mut self) -> Vec<DeviceSnapshot> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            // Alternate pressed/released so every other tick is an edge
            self.pressed = !self.pressed;
            vec![DeviceSnapshot {
                index: 0,
                id: "Pad".to_string(),
                buttons: vec![ButtonSnapshot::digital(self.pressed)],
                axes: 0,
            }]
        }
    }

    #[test]
    fn test_session_polls_and_stops() {
        let polls = Arc::new(AtomicUsize::new(0));
        let fired = Arc::new(AtomicUsize::new(0));

        let mut mapping = Mapping::new();
        mapping.start(
            ScriptedPoller {
                polls: polls.clone(),
                pressed: false,
            },
            controls_next("Pad", 0),
            counting_actions(fired.clone()),
        );
        assert!(mapping.is_running());

        thread::sleep(Duration::from_millis(160));
        mapping.stop();
        assert!(!mapping.is_running());

        let polled = polls.load(Ordering::SeqCst);
        assert!(polled >= 2, "expected several polls, got {polled}");
        assert!(fired.load(Ordering::SeqCst) >= 1);

        // Stopped means stopped: no further polls
        let after = polls.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(120));
        assert_eq!(polls.load(Ordering::SeqCst), after);
    }

    #[test]
    fn test_restart_replaces_previous_session() {
        let first_polls = Arc::new(AtomicUsize::new(0));
        let second_polls = Arc::new(AtomicUsize::new(0));

        let mut mapping = Mapping::new();
        mapping.start(
            ScriptedPoller {
                polls: first_polls.clone(),
                pressed: false,
            },
            controls_next("Pad", 0),
            Actions::default(),
        );
        thread::sleep(Duration::from_millis(80));

        mapping.start(
            ScriptedPoller {
                polls: second_polls.clone(),
                pressed: false,
            },
            controls_next("Pad", 0),
            Actions::default(),
        );

        // First session is dead the moment the second starts
        let frozen = first_polls.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(120));
        assert_eq!(first_polls.load(Ordering::SeqCst), frozen);
        assert!(second_polls.load(Ordering::SeqCst) >= 1);

        mapping.stop();
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut mapping = Mapping::new();
        mapping.stop();
        assert!(!mapping.is_running());
    }
}
