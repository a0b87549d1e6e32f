use anyhow::{Context, Result};
use arboard::Clipboard;

/// Largest answer we are willing to push to the clipboard (1MB)
const MAX_CLIPBOARD_BYTES: usize = 1024 * 1024;

/// Clipboard sink (mocked in tests)
trait ClipboardSink {
    fn put(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl ClipboardSink for SystemClipboard {
    fn put(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to set clipboard contents")
    }
}

fn check_copyable(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Nothing to copy yet");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        anyhow::bail!("Answer too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }
    Ok(())
}

fn copy_into(text: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    check_copyable(text)?;
    sink.put(text)
}

/// Copy an answer to the system clipboard.
///
/// Validation runs before the clipboard is opened, so blank or oversized text fails the
/// same way on headless machines.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    check_copyable(text)?;
    let clipboard = Clipboard::new().context("Clipboard unavailable")?;
    copy_into(text, &mut SystemClipboard(clipboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        contents: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn put(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("sink rejected text");
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_answer() {
        let mut sink = RecordingSink::default();
        copy_into("Final synthesis 🧠", &mut sink).unwrap();
        assert_eq!(sink.contents.as_deref(), Some("Final synthesis 🧠"));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let mut sink = RecordingSink::default();
        let err = copy_into("  \n", &mut sink).unwrap_err();
        assert!(err.to_string().contains("Nothing to copy"));
        assert!(sink.contents.is_none());
    }

    #[test]
    fn test_oversized_answer_rejected() {
        let mut sink = RecordingSink::default();
        let err = copy_into(&"a".repeat(MAX_CLIPBOARD_BYTES + 1), &mut sink).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = RecordingSink { fail: true, ..Default::default() };
        assert!(copy_into("text", &mut sink).is_err());
    }

    #[test]
    fn test_validation_precedes_clipboard_access() {
        let err = copy_to_clipboard("").unwrap_err();
        assert!(err.to_string().contains("Nothing to copy"));
    }
}
