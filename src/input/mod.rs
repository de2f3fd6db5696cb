//! Input mapping - controller button edges to navigation commands.
//!
//! Three pieces, smallest first:
//!
//! - [`DevicePoller`] - the collaborator interface: per tick, a snapshot
//!   of every connected device (identifier, button states, axis count)
//! - [`InputMapper`] - pure edge detection: fires each bound action
//!   exactly once per not-pressed to pressed transition
//! - [`Mapping`] - the lifecycle: a 50 ms poll loop that owns mapper,
//!   poller, and callbacks; restart replaces, stop joins and discards
//!
//! [`DeviceHelper`] is the setup companion: it watches every button so
//! a user can press one and read off the `"name"`/`"button"` pair their
//! document needs.
//!
//! # Example
//!
//! ```no_run
//! use checklist_tui::document::{ButtonBinding, Controls};
//! use checklist_tui::input::{Actions, Mapping};
//! use checklist_tui::input::evdev::EvdevPoller;
//!
//! let controls = Controls {
//!     next: Some(ButtonBinding { name: "X-Box pad".into(), button: 0 }),
//!     previous: None,
//!     reset: None,
//! };
//!
//! let mut mapping = Mapping::new();
//! mapping.start(
//!     EvdevPoller::open(),
//!     controls,
//!     Actions::default().on_next(|| println!("next item")),
//! );
//! // ... later ...
//! mapping.stop();
//! ```

pub mod device;
#[cfg(target_os = "linux")]
pub mod evdev;
pub mod helper;
pub mod mapper;

pub use device::{ButtonSnapshot, DevicePoller, DeviceSnapshot};
pub use helper::{DeviceHelper, HelperDevice, HELPER_TICK};
pub use mapper::{Actions, InputMapper, Mapping, MAPPING_TICK};
