//! Operations exposed to the presentation layer

pub mod listing;
