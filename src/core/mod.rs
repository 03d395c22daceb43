//! # Core Application Logic
//!
//! This module contains promptdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Pools (topics)       │
//!                    │  • Generator (cards)    │
//!                    │  • Navigator (history)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure but for    │
//!                    │  the startup pool load. │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   --print  │
//!             │  Adapter   │          │   output   │
//!             │ (ratatui)  │          │  (stdout)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `Card`, `CardKind` and the accent palette
//! - [`pools`]: topic pools, their sources and the fallback set
//! - [`random`]: the injectable `RandomSource`
//! - [`generator`]: weighted card selection
//! - [`navigator`]: session history and the position cursor
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod card;
pub mod config;
pub mod generator;
pub mod navigator;
pub mod pools;
pub mod random;
pub mod state;
