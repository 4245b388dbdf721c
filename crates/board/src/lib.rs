//! Event-handling core for the order board: session state, per-event
//! handlers, form-to-record shaping, and the view seam. Nothing in this
//! crate touches a concrete UI toolkit, so the handlers are exercised in
//! tests against a recording fake view.

pub mod data;
pub mod session;
pub mod surface;
pub mod view;

pub use data::{draft, IdAllocator, OrderForm};
pub use session::{BoardSession, EditForm, EditTarget};
pub use surface::{column_marker, walk, Surface};
pub use view::BoardView;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
