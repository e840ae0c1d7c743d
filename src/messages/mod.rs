//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI layer and the
//! App layer that owns the store.

pub mod actions;
pub mod ui_events;
pub mod render;

pub use actions::StoreAction;
pub use ui_events::UiEvent;
pub use render::RenderState;
