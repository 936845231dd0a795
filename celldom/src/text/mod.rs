//! Display-width aware text measurement and wrapping.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextWrap;

const ELLIPSIS: char = '…';

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Break `s` into lines of at most `max_width` columns at word boundaries.
///
/// Words wider than the line are split by character. Explicit newlines are
/// kept, and the result always holds at least one line.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces = wrap_chars(word, max_width);
                // The tail of a split word may still share a line with the next word.
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                line_width = display_width(&tail);
                line = tail;
                continue;
            }

            let sep = usize::from(!line.is_empty());
            if line_width + sep + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            } else if sep == 1 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

/// Break `s` into lines of at most `max_width` columns at any character.
pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for ch in paragraph.chars() {
            let w = char_width(ch);
            if w > 0 && line_width + w > max_width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += w;
        }

        lines.push(line);
    }

    lines
}

/// The visual lines of `s` inside a box `width` columns wide.
pub fn layout_lines(s: &str, width: usize, wrap: TextWrap) -> Vec<String> {
    match wrap {
        TextWrap::Wrap => wrap_words(s, width),
        TextWrap::NoWrap => s.split('\n').map(str::to_string).collect(),
        TextWrap::Truncate => s
            .split('\n')
            .map(|line| truncate_to_width(line, width))
            .collect(),
    }
}

/// Number of rows `s` occupies inside a box `width` columns wide.
pub fn line_count(s: &str, width: usize, wrap: TextWrap) -> usize {
    layout_lines(s, width, wrap).len()
}
