//! Operations the presentation layer invokes, one per user action.

pub mod favorites;
pub mod objects;
pub mod search;
