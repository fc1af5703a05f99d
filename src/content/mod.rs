// Content module for the bundled portfolio document.
// The document is embedded at build time and read-only for the session.

#![allow(dead_code, unused_imports)]

pub mod store;
pub mod types;

pub use store::ContentStore;
pub use types::*;
