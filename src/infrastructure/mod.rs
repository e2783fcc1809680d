//! # Infrastructure Layer
//!
//! Adapters for the outside world: store ports and their implementations.

pub mod persistence;
