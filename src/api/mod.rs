//! # API Layer
//!
//! Transport adapters exposing the search engine to callers.

pub mod rest;
