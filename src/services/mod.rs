// ReviewChill services
// Services provide page-facing functionality: video URL handling, social
// sharing, clipboard, toasts, themes, search highlighting, instrumentation.

pub mod clipboard_service;
pub mod instrumentation;
pub mod search;
pub mod share_service;
pub mod theme_engine;
pub mod toast_service;
pub mod video_service;
