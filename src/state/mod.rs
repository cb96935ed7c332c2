//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided to components through Leptos context as `RwSignal`s.
//! Only the listing state exists; the navigation bar has no state.

pub mod listings;
