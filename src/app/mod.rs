//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/storage/worker layers:
//!
//! ```text
//! Key / Host Event → Event → Event Handler → State Mutations → Actions → Side Effects
//!                                ↑                                          ↓
//!                                └────── Fetch Outcome / Worker Response ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`search_input`]: Editing rules of the search field
//! - [`state`]: Central application state container and view model computation
//! - [`status`]: Load status of the one-shot contact read

pub mod actions;
pub mod handler;
pub mod search_input;
pub mod state;
pub mod status;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use search_input::{SearchInput, SearchKey};
pub use state::AppState;
pub use status::LoadStatus;
