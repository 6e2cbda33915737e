//! Common library exports shared between the backend and the HTTP server.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod search_result;
pub mod object_metadata;
pub mod pagination;
pub mod favorites;
