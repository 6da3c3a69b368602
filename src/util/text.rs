use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns (Unicode-aware: CJK and
/// emoji count as 2 columns, combining marks as 0).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text is cut off.
///
/// Returns `Cow::Borrowed` when the string already fits. For widths of 3 or
/// less there is no room for the ellipsis, so as many characters as fit are
/// returned bare. Cuts always land on a character boundary.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        Cow::Owned(s[..end].to_string())
    } else {
        Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
    }
}

/// Strip ASCII control characters and ANSI escape sequences from text that
/// may come from a user-supplied catalog file.
///
/// Tab, newline and carriage return are preserved. CSI sequences (`ESC [`
/// through the final byte) and OSC sequences (`ESC ]` through BEL or ST) are
/// removed whole. Returns `Cow::Borrowed` for clean input.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    fn is_bad(b: u8) -> bool {
        b == 0x1b || b == 0x7f || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
    }

    let bytes = s.as_bytes();
    if !bytes.iter().copied().any(is_bad) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x1b if bytes.get(i + 1) == Some(&b'[') => {
                // CSI: skip until the final byte 0x40..=0x7e
                i += 2;
                while i < bytes.len() {
                    let c = bytes[i];
                    i += 1;
                    if (0x40..=0x7e).contains(&c) {
                        break;
                    }
                }
            }
            0x1b if bytes.get(i + 1) == Some(&b']') => {
                // OSC: skip until BEL or ST
                i += 2;
                while i < bytes.len() {
                    if bytes[i] == 0x07 {
                        i += 1;
                        break;
                    }
                    if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            b if is_bad(b) => i += 1,
            _ => {
                let start = i;
                while i < bytes.len() && !is_bad(bytes[i]) {
                    i += 1;
                }
                // Control bytes are ASCII, so the run boundary is always a
                // valid UTF-8 boundary.
                out.push_str(&s[start..i]);
            }
        }
    }

    Cow::Owned(out)
}

/// Format a listen count for compact display: 582000 → "582K", 1500000 →
/// "1.5M". Counts under 1000 are printed as-is.
pub fn format_listen_count(count: u64) -> String {
    if count >= 1_000_000 {
        let m = count as f64 / 1_000_000.0;
        if m.fract() < 0.05 {
            format!("{:.0}M", m)
        } else {
            format!("{:.1}M", m)
        }
    } else if count >= 1_000 {
        format!("{}K", count / 1_000)
    } else {
        count.to_string()
    }
}
