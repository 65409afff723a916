use super::{ErrorEntry, HostReporter, Indicator, Notification};

/// Reporter that writes error entries and notifications to the tracing log.
/// Used when no host UI is attached (the operator binary).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl HostReporter for TracingReporter {
    fn log_error(&self, entry: ErrorEntry) {
        tracing::error!(title = %entry.title, "{}", entry.message);
    }

    fn notify(&self, notification: Notification) {
        match notification.indicator {
            Indicator::Green => {
                tracing::info!(title = %notification.title, "{}", notification.message)
            }
            Indicator::Red => {
                tracing::warn!(title = %notification.title, "{}", notification.message)
            }
        }
    }
}
