//! # Connect Four Engine
//!
//! Board-state engine for a two-player Connect Four game. A player drops a
//! piece into a column; after each move the engine reports a win, a tie, or
//! that play continues.
//!
//! ## Modules
//!
//! - [`game`] — Board, player tokens, status, move application, stored records
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
