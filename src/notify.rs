//! User-facing notification surface for printed reports.

use std::io::Write;

/// Surfaces a text block to the user and returns once it has been shown.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stdout, framed by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn alert(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "\n{message}\n");
        let _ = out.flush();
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::Notifier;

    /// Keeps every alert for later assertions.
    #[derive(Default)]
    pub struct RecordingNotifier {
        alerts: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().expect("notifier mutex poisoned").clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.lock().expect("notifier mutex poisoned").push(message.to_owned());
        }
    }
}
