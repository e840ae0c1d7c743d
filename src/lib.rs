//! # EduConnect Teacher
//!
//! Teacher-side console of a school communication app: classes, homework,
//! grade entry, roll call, parent/student messaging and notifications, all
//! held in an in-memory store seeded with fixtures.
//!
//! ## Features
//! - Collections with prepend/append/merge/remove semantics
//! - Named store actions with incrementally kept unread counters
//! - Gated dispatch (locked grade sessions, frozen roll calls)
//! - Grade input parsing against the session scale
//! - Optional YAML/JSON seed file overriding the built-in fixtures
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine owning the store)

pub mod constants;
pub mod error;
pub mod models;
pub mod collection;
pub mod seed;
pub mod store;
pub mod form;
pub mod views;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use collection::{Collection, Entity, Patch};
pub use seed::Seed;
pub use store::{Store, UnreadCounts};
pub use form::{parse_grade_input, GradeDraft};
pub use messages::{RenderState, StoreAction, UiEvent};
pub use app::{AppActor, AppState};
