//! Client-side state.
//!
//! DESIGN
//! ======
//! One state container holds everything the assistant view shows. Every
//! mutation goes through a named transition method so the behavior is
//! testable without a DOM.

pub mod assistant;
