//! View models handed to the rendering surface.
//!
//! Everything here is produced by pure functions over fetched pages and the
//! controller's edit state, so the state/query logic stays testable without
//! any UI toolkit attached.

pub mod authors;
pub mod books;
pub mod main;
pub mod products;
