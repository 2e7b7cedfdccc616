// ReviewChill shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod event;
pub mod theme;
pub mod toast;
pub mod video;
