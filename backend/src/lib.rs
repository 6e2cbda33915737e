//! Backend for the MET collection explorer: remote client, result cache,
//! per-session state, and the operations the presentation layer calls.

pub mod api;
pub mod config;
pub mod remote_utils;
pub mod server_extra;
pub mod session;
pub mod state;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
