use arboard::Clipboard;
use multiagent_brainstorm::clipboard::copy_to_clipboard;

/// Tests that actually access the clipboard are disabled in automated testing.
/// Set ENABLE_CLIPBOARD_TESTS=1 to run them locally.
fn should_test_clipboard() -> bool {
    std::env::var("ENABLE_CLIPBOARD_TESTS").is_ok()
}

#[test]
fn test_blank_answer_rejected_without_clipboard() {
    let err = copy_to_clipboard(" \n\t").unwrap_err();
    assert!(err.to_string().contains("Nothing to copy"));
}

#[test]
fn test_oversized_answer_rejected_without_clipboard() {
    let huge = "x".repeat(2 * 1024 * 1024);
    let err = copy_to_clipboard(&huge).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_clipboard_copies_final_answer() {
    if !should_test_clipboard() {
        eprintln!("Skipping clipboard access test (set ENABLE_CLIPBOARD_TESTS=1 to run)");
        return;
    }

    let answer = "Final synthesis:\n- use a B-tree\n- measure first";
    match copy_to_clipboard(answer) {
        Ok(()) => {
            if let Ok(mut clipboard) = Clipboard::new()
                && let Ok(contents) = clipboard.get_text()
            {
                assert_eq!(contents, answer, "Clipboard should contain the final answer");
            }
        }
        Err(e) => {
            // Expected in CI/headless environments
            let err_msg = e.to_string().to_lowercase();
            assert!(
                err_msg.contains("clipboard") || err_msg.contains("display"),
                "Unexpected error type: {}",
                e
            );
        }
    }
}
