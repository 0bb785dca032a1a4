/// Severity of a transient user-visible toast, determining its visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Neutral informational message that does not indicate success or failure.
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
}

impl ToastSeverity {
    /// Style class a themed frontend maps the severity to.
    pub fn style_class(&self) -> &'static str {
        match self {
            ToastSeverity::Info => "info",
            ToastSeverity::Success => "success",
            ToastSeverity::Warning => "warning",
            ToastSeverity::Error => "danger",
        }
    }
}

/// A transient toast payload intended for the user interface.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The severity of the toast, determining its visual style.
    pub severity: ToastSeverity,
    /// The text content to display to the user.
    pub message: String,
}
