//! Word lists
//!
//! The base dictionary is compiled into the binary; custom words are managed
//! at runtime and persisted through a store.

pub mod custom;
mod dictionary;
mod embedded;
pub mod loader;

pub use custom::WordListManager;
pub use dictionary::Dictionary;
pub use embedded::{BASE, BASE_COUNT};
