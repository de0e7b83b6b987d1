//! Transient notifications
//!
//! Shows short-lived messages such as the copy acknowledgment, reverting
//! automatically after a fixed delay.

mod render;
mod state;

pub use render::render_notification;
pub use state::NotificationState;
