//! Model artifact loading and query responders.
//!
//! The artifact is read once at startup and shared read-only behind an
//! `Arc`; responders borrow it for every request without locking.

pub mod artifact;
pub mod responder;

pub use artifact::{ArtifactError, ModelArtifact, COMPANION_FILE, INDEX_FILE};
pub use responder::{IndexResponder, Responder, ResponderError};
