//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the outcome of the last
//! poll plus the small amount of state the key handler needs.

mod model;

pub use model::*;
