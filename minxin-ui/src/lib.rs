//! minxin-ui - Shared UI components and stores for Minxin Reading Lists
//!
//! Pure view components with callback props, app-owned stores, and the
//! small amount of browser interop (storage, event listeners, file
//! downloads) the page chrome needs.

pub mod components;
pub mod storage;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use stores::*;
