//! Interactive state for a rendered checklist.
//!
//! - **Navigation** - cursor over item-steps, completion marks, reset

pub mod nav;

pub use nav::Navigation;
