use notify_rust::{Notification, Timeout};
use thiserror::Error;

/// Notification error.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Error from [`notify_rust`] crate.
    #[error("desktop notification error: {0}")]
    Desktop(#[from] notify_rust::error::Error),
}

/// Shorthand function to raise a desktop toast.
///
/// ```no_run
/// use hac::send_notification;
/// send_notification("Handle is FREE!", "@gadget is now available", 10);
/// ```
pub fn send_notification(
    title: &str,
    message: &str,
    duration_secs: u32,
) -> Result<(), NotificationError> {
    Notification::new()
        .summary(title)
        .body(message)
        .timeout(Timeout::Milliseconds(duration_secs.saturating_mul(1000)))
        .show()?;
    Ok(())
}
