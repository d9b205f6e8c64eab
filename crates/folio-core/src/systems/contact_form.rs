use std::fmt;

use crate::api::config::FormConfig;
use crate::api::types::Severity;

/// Raw values read from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The one recognised failure: required fields left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for FormError {}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every field must be non-empty after trimming. No format checks.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed: show an error toast and stop.
    Rejected {
        error: FormError,
        message: String,
        severity: Severity,
    },
    /// Disable the submit control, show `label`, then call `complete` after `delay_ms`.
    Sending { label: String, delay_ms: u32 },
    /// A simulated send is already in flight.
    Busy,
}

/// What to do once the simulated latency has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivered {
    pub message: String,
    pub severity: Severity,
    /// Label the submit control had before sending.
    pub restore_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Sending { original_label: Option<String> },
}

/// Contact form submission: validation plus a simulated, always-successful send.
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    phase: Phase,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        Self { config, phase: Phase::Idle }
    }

    pub fn submit(&mut self, fields: &FormFields, current_label: Option<String>) -> SubmitOutcome {
        if let Err(error) = fields.validate() {
            return SubmitOutcome::Rejected {
                error,
                message: self.config.missing_fields_message.clone(),
                severity: Severity::Error,
            };
        }
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }
        self.phase = Phase::Sending { original_label: current_label };
        SubmitOutcome::Sending {
            label: self.config.sending_label.clone(),
            delay_ms: self.config.latency_ms,
        }
    }

    /// Latency elapsed. `None` if nothing was being sent.
    pub fn complete(&mut self) -> Option<Delivered> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => None,
            Phase::Sending { original_label } => Some(Delivered {
                message: self.config.success_message.clone(),
                severity: Severity::Success,
                restore_label: original_label,
            }),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending { .. })
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
