//! Terminal output sanitization
//!
//! Definition lines come straight from user files and are echoed by `view`. Escape
//! sequences and control characters are removed before display so a stray file cannot
//! repaint or clear the terminal. Exported files keep the raw text.

/// Strip ANSI CSI sequences (`ESC [ ... letter`) and control characters except tab
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
