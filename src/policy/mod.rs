//! Move selection policy for self-play.

pub mod selector;

pub use selector::MoveSelector;
