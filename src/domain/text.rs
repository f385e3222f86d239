use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Greedy word wrap by display width. Words wider than `width` are split.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            for c in word.chars() {
                if !line.is_empty() && line.width() + c.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(c);
            }
        }
        lines.push(line);
    }
    lines
}

/// Keep at most `max_height` lines; the last kept line ends with an ellipsis
/// when anything was cut.
pub fn truncate_lines(mut lines: Vec<String>, max_height: usize) -> Vec<String> {
    if lines.len() <= max_height {
        return lines;
    }
    lines.truncate(max_height);
    if let Some(last) = lines.last_mut() {
        last.push_str(ELLIPSIS);
    }
    lines
}

/// Fit a single line into `width` cells.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) + ELLIPSIS.width() > width {
            break;
        }
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}
