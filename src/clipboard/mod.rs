//! Clipboard support
//!
//! Copying the generated plan out of the terminal. Two backends: the OS
//! clipboard via arboard, and OSC 52 escape sequences for terminals where
//! no display server is reachable (SSH, headless).

mod backend;
mod osc52;
mod system;

pub use backend::copy_to_clipboard;
