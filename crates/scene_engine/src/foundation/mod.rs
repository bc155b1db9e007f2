//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math and color types
//! - Handle collections and id generation
//! - Time scaling
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
