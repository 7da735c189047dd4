use crate::import::types::{ImportProgress, LogLevel};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{error, info, warn};

/// Emits pipeline progress to tracing and, when attached, to a subscriber channel.
///
/// Sends never block; a dropped receiver only silences the channel side.
#[derive(Clone, Default)]
pub struct ProgressReporter {
    tx: Option<tokio_mpsc::UnboundedSender<ImportProgress>>,
}

impl ProgressReporter {
    pub fn new(tx: tokio_mpsc::UnboundedSender<ImportProgress>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Reporter plus the receiver its events arrive on
    pub fn channel() -> (Self, tokio_mpsc::UnboundedReceiver<ImportProgress>) {
        let (tx, rx) = tokio_mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Reporter that only logs through tracing
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.log(LogLevel::Error, message);
    }

    pub fn percent(&self, percent: u8) {
        self.send(ImportProgress::Progress {
            percent: percent.min(100),
        });
    }

    pub fn complete(&self, inserted: usize) {
        self.send(ImportProgress::Complete { inserted });
    }

    pub fn failed(&self, error: impl Into<String>) {
        self.send(ImportProgress::Failed {
            error: error.into(),
        });
    }

    fn log(&self, level: LogLevel, message: String) {
        self.send(ImportProgress::Log { level, message });
    }

    fn send(&self, progress: ImportProgress) {
        if let Some(tx) = &self.tx {
            // Receiver dropped means nobody is watching anymore
            let _ = tx.send(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (reporter, mut rx) = ProgressReporter::channel();

        reporter.info("reading");
        reporter.percent(150);
        reporter.complete(3);

        assert_eq!(
            rx.try_recv().unwrap(),
            ImportProgress::Log {
                level: LogLevel::Info,
                message: "reading".to_string()
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            ImportProgress::Progress { percent: 100 }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            ImportProgress::Complete { inserted: 3 }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (reporter, rx) = ProgressReporter::channel();
        drop(rx);
        reporter.warn("nobody listening");
        reporter.failed("still fine");
    }
}
