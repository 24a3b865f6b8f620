//! # Cross-Platform Compatibility Utilities

pub mod threads;
pub mod timers;
