use crate::api::config::ToastConfig;
use crate::api::types::Severity;

/// Identifies one `notify` call. A hide timer only takes effect if its ticket
/// still belongs to the toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

/// What the host must do after `notify`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastShown {
    pub ticket: ToastTicket,
    pub message: String,
    /// Full class attribute, e.g. `toast show error`.
    pub class_name: String,
    /// Schedule `expire(ticket)` after this many milliseconds.
    pub hide_after_ms: u32,
}

/// Singleton transient status message. No queue: the latest call wins.
#[derive(Debug, Clone)]
pub struct Toast {
    config: ToastConfig,
    generation: u64,
    message: String,
    severity: Severity,
    visible: bool,
}

pub const SHOW_CLASS: &str = "show";

pub fn class_name(severity: Severity) -> String {
    format!("toast {SHOW_CLASS} {severity}")
}

impl Toast {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            generation: 0,
            message: String::new(),
            severity: Severity::default(),
            visible: false,
        }
    }

    /// Show `message`, superseding whatever toast is pending.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> ToastShown {
        self.generation += 1;
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        ToastShown {
            ticket: ToastTicket(self.generation),
            message: self.message.clone(),
            class_name: class_name(severity),
            hide_after_ms: self.config.hide_after_ms,
        }
    }

    /// Hide timer fired. Returns `true` if the `show` class should be removed.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_sets_class_and_countdown() {
        let mut toast = Toast::default();
        let shown = toast.notify("Saved", Severity::Success);
        assert_eq!(shown.class_name, "toast show success");
        assert_eq!(shown.hide_after_ms, 4000);
        assert!(toast.is_visible());

        assert!(toast.expire(shown.ticket));
        assert!(!toast.is_visible());
        assert!(!toast.expire(shown.ticket));
    }

    #[test]
    fn second_notify_supersedes_first() {
        let mut toast = Toast::default();

        // t = 0 and t = 1000
        let first = toast.notify("first", Severity::Error);
        let second = toast.notify("second", Severity::Success);
        let first_deadline = first.hide_after_ms as u64;
        let second_deadline = 1000 + second.hide_after_ms as u64;
        assert_eq!(toast.message(), "second");
        assert_eq!(toast.severity(), Severity::Success);

        // The first timer would fire at 4000 if it had not been cancelled;
        // even then it must not hide the newer toast.
        assert_eq!(first_deadline, 4000);
        assert!(!toast.expire(first.ticket));
        assert!(toast.is_visible());

        assert_eq!(second_deadline, 5000);
        assert!(toast.expire(second.ticket));
        assert!(!toast.is_visible());
    }

    #[test]
    fn custom_duration() {
        let mut toast = Toast::new(ToastConfig { hide_after_ms: 1500 });
        assert_eq!(toast.notify("x", Severity::Success).hide_after_ms, 1500);
    }
}
