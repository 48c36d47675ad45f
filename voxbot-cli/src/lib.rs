//! Voxbot application library
//!
//! Re-exports the application modules for integration testing.

pub mod config;
pub mod session;
pub mod transcript;
