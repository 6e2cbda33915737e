//! HTTP surface of the MET collection explorer.

pub mod app;
pub mod config;
pub(crate) mod routes;
