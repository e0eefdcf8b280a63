//! Core types and definitions for the VOIDRUNNER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, input commands, draw commands, snapshots,
//! events, and constants. It has no dependency on any windowing or
//! rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod draw;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
