pub mod command;
pub mod history;
pub mod layout;
pub mod menu;
pub mod resize;
pub mod surface;

use thiserror::Error;

/// Contract violations between the session driver and the browsing engine.
///
/// These are programmer errors and abort the session. Benign refusals (an
/// empty menu, the protected root) never appear here; they come back as
/// [`command::Outcome::Unchanged`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowseError {
    #[error("browsing already started")]
    AlreadyStarted,
    #[error("browsing not started")]
    NotStarted,
    #[error("start vertex {0:?} is not in the graph")]
    UnknownRoot(String),
}
