//! App layer - central state management and command processing
//!
//! The App actor owns the store, receives UI events, routes every mutation
//! through the gated dispatch, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod dispatch;

pub use state::AppState;
pub use actor::AppActor;
