use unicode_width::UnicodeWidthStr;

/// Display width of a string, accounting for CJK double-width, emoji, etc.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad or truncate a string to exactly `width` display columns.
/// If shorter, right-pads with spaces. If longer, truncates with "..".
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let sw = display_width(s);
    if sw <= width {
        return format!("{}{}", s, " ".repeat(width - sw));
    }
    if width < 3 {
        return s.chars().take(width).collect();
    }

    // Walk chars, stopping at width - 2 to leave room for ".."
    let budget = width - 2;
    let mut used = 0;
    let mut end = 0;
    for (i, ch) in s.char_indices() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            end = i;
            break;
        }
        used += cw;
        end = i + ch.len_utf8();
    }

    let truncated = format!("{}..", &s[..end]);
    let tw = display_width(&truncated);
    format!("{}{}", truncated, " ".repeat(width.saturating_sub(tw)))
}
