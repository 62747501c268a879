//! Clipboard sink for export payloads.
//!
//! The sink prefers one atomic write carrying both representations
//! (`text/html` plus `text/plain`) so the receiving application picks
//! whichever it supports, and degrades to a plain-text-only write when
//! that fails. Failures are logged and reported as an outcome, never
//! raised: a failed copy leaves the user without the acknowledgment and
//! nothing else.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use coxa_export::ExportPayload;

/// How a copy attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Both representations were written in one clipboard item.
    RichText,
    /// Only the tab-separated fallback could be written.
    PlainText,
    /// Every strategy failed; the payload is not on the clipboard.
    Failed,
}

impl CopyOutcome {
    /// Returns true when the payload reached the clipboard in any form.
    pub fn succeeded(&self) -> bool {
        !matches!(self, CopyOutcome::Failed)
    }
}

/// Write access to a clipboard implementation.
///
/// The production backend is the system clipboard; tests drive the
/// fallback chain with in-memory backends.
pub trait ClipboardBackend {
    /// One atomic write of both representations.
    fn write_rich(&mut self, markup: &str, plain: &str) -> Result<()>;
    /// Plain-text-only write.
    fn write_plain(&mut self, plain: &str) -> Result<()>;
}

/// Runs the fallback chain against a backend.
pub fn copy_with_backend<B: ClipboardBackend>(
    backend: &mut B,
    payload: &ExportPayload,
) -> CopyOutcome {
    match backend.write_rich(&payload.markup, &payload.plain) {
        Ok(()) => {
            debug!("clipboard write carried both representations");
            return CopyOutcome::RichText;
        }
        Err(error) => {
            warn!(%error, "rich clipboard write failed, falling back to plain text");
        }
    }
    match backend.write_plain(&payload.plain) {
        Ok(()) => CopyOutcome::PlainText,
        Err(error) => {
            warn!(%error, "plain clipboard write failed, payload not copied");
            CopyOutcome::Failed
        }
    }
}

impl ClipboardBackend for arboard::Clipboard {
    fn write_rich(&mut self, markup: &str, plain: &str) -> Result<()> {
        self.set_html(markup, Some(plain))?;
        Ok(())
    }

    fn write_plain(&mut self, plain: &str) -> Result<()> {
        self.set_text(plain)?;
        Ok(())
    }
}

/// The system clipboard sink.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    /// Opens the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error when no clipboard is reachable (for example on a
    /// headless session); callers treat that the same as a failed copy.
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("open system clipboard")?;
        Ok(Self { clipboard })
    }

    /// Copies the payload, degrading through the fallback chain.
    pub fn copy(&mut self, payload: &ExportPayload) -> CopyOutcome {
        copy_with_backend(&mut self.clipboard, payload)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        fail_rich: bool,
        fail_plain: bool,
        rich: Option<(String, String)>,
        plain: Option<String>,
    }

    impl ClipboardBackend for FakeBackend {
        fn write_rich(&mut self, markup: &str, plain: &str) -> Result<()> {
            if self.fail_rich {
                return Err(anyhow!("rich write unavailable"));
            }
            self.rich = Some((markup.to_string(), plain.to_string()));
            Ok(())
        }

        fn write_plain(&mut self, plain: &str) -> Result<()> {
            if self.fail_plain {
                return Err(anyhow!("plain write unavailable"));
            }
            self.plain = Some(plain.to_string());
            Ok(())
        }
    }

    fn payload() -> ExportPayload {
        ExportPayload {
            markup: "<table></table>".to_string(),
            plain: "Parameter\tRechts\tLinks\tReferenzbereich\n".to_string(),
        }
    }

    #[test]
    fn rich_write_wins_when_available() {
        let mut backend = FakeBackend::default();
        let outcome = copy_with_backend(&mut backend, &payload());
        assert_eq!(outcome, CopyOutcome::RichText);
        assert!(outcome.succeeded());
        let (markup, plain) = backend.rich.unwrap();
        assert_eq!(markup, payload().markup);
        assert_eq!(plain, payload().plain);
        assert!(backend.plain.is_none());
    }

    #[test]
    fn rich_failure_falls_back_to_plain() {
        let mut backend = FakeBackend {
            fail_rich: true,
            ..FakeBackend::default()
        };
        let outcome = copy_with_backend(&mut backend, &payload());
        assert_eq!(outcome, CopyOutcome::PlainText);
        assert!(outcome.succeeded());
        assert_eq!(backend.plain.unwrap(), payload().plain);
    }

    #[test]
    fn total_failure_reports_failed() {
        let mut backend = FakeBackend {
            fail_rich: true,
            fail_plain: true,
            ..FakeBackend::default()
        };
        let outcome = copy_with_backend(&mut backend, &payload());
        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!outcome.succeeded());
    }
}
