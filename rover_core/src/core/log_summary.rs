/// Trait for providing lightweight logging summaries of message types
///
/// Messages flowing through the estimator implement this so log lines stay
/// short and uniform regardless of the message's `Debug` shape.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

// LogSummary implementations for primitive types
impl LogSummary for f32 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for f64 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for i32 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl<A: LogSummary, B: LogSummary> LogSummary for (A, B) {
    fn log_summary(&self) -> String {
        format!("({}, {})", self.0.log_summary(), self.1.log_summary())
    }
}
