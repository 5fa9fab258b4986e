//! navstack library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    Destinations, EvictionPolicy, NavError, Navigator, OpenUrlResult, Payload, PopOutcome,
    Presentation, RunMode, ScreenId,
};
