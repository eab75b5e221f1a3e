//! User-facing notifications for finished operations.

use std::fmt::{Display, Formatter};

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget receiver of user-facing messages.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait NotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Prints notifications to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        log::debug!("Notification ({kind}): {message}");
        println!("{}", format_notification(message, kind));
    }
}

/// Single-line rendering used by [`TerminalNotifier`].
pub fn format_notification(message: &str, kind: NotificationKind) -> String {
    match kind {
        NotificationKind::Success => format!("[ok] {message}"),
        NotificationKind::Error => format!("[error] {message}"),
    }
}
