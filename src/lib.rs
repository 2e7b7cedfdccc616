//! ReviewChill — client-side UI core for a video review platform.
//!
//! This library crate exposes all modules for use by the page shell and integration tests.

pub mod app;
pub mod dom;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
