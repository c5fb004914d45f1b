/// State management module
///
/// This module handles all application state, including:
/// - The triage session: folder, photo list, cursor and actions (session.rs)
/// - Shared data structures (data.rs)
/// - The per-photo details shown in the preview pane (display.rs)
/// - Error types (error.rs)

pub mod data;
pub mod display;
pub mod error;
pub mod session;

pub use data::{Outcome, PhotoEntry, RawFormat};
pub use display::PhotoDisplay;
pub use error::TriageResult;
pub use session::{TriageSession, FINISHED_MESSAGE, NO_SELECTION};
