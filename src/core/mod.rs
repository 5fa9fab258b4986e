//! # Core Navigation State
//!
//! This module contains navstack's state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (state)    │
//!                    │  • Destinations (views) │
//!                    │  • Config (run mode)    │
//!                    │                         │
//!                    │  No I/O in the state.   │
//!                    └───────────┬─────────────┘
//!                                │ borrowed read-only
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │   Host     │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: the `Navigator` stack/modal/overlay container
//! - [`destinations`]: static id → view table and lookup order
//! - [`payload`]: typed per-screen data
//! - [`screen`]: the `ScreenId` key type
//! - [`config`]: run mode and eviction policy resolution

pub mod config;
pub mod destinations;
pub mod navigator;
pub mod payload;
pub mod screen;

pub use destinations::{Destinations, Presentation};
pub use navigator::{EvictionPolicy, NavError, Navigator, OpenUrlResult, PopOutcome, RunMode};
pub use payload::Payload;
pub use screen::ScreenId;
