//! User-facing notification seam.
//!
//! Stores do not talk to a toast widget directly; they emit fire-and-forget
//! notifications through an injected [`Notifier`]. This keeps the stores free
//! of process-wide state and lets tests observe exactly what was emitted.

/// Severity tag attached to a notification.
///
/// Cart mutations only emit [`Severity::Success`] today; the other variants
/// exist for the consumers wiring this into their own notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A single fire-and-forget notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    /// Build a success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }
}

/// Capability for delivering notifications to the user.
///
/// Implementations must not block and must not fail; delivery is best-effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that routes notifications into the `tracing` log stream.
///
/// The default wiring when no real toast surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            Severity::Warning => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            Severity::Error => tracing::error!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_constructor() {
        let n = Notification::success("success", "Cart updated successfully.");
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.title, "success");
        assert_eq!(n.description, "Cart updated successfully.");
    }
}
