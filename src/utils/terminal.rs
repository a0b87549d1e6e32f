//! Sanitization of backend text before it reaches the terminal.
//!
//! Answers come from a remote service and may carry escape sequences that would move the
//! cursor, recolour the screen, or set the window title. Everything is stripped down to
//! printable text plus tab, newline, and carriage return.

/// Strip ANSI CSI (`ESC [ ... letter`) and OSC (`ESC ] ... BEL` / `ESC ] ... ESC \`)
/// sequences and other control characters.
///
/// # Examples
///
/// ```
/// use multiagent_brainstorm::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mplan\x1b[0m"), "plan");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek().copied() {
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() || next == '~' {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Lone escape or two-byte sequence: drop the escape
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }
        out.push(ch);
    }

    out
}
