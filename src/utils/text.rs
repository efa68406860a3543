//! Text fitting for fixed-width card cells.
//!
//! Widths are counted in `char`s, so multi-byte titles are never split inside
//! a code point.

const ELLIPSIS: &str = "...";

/// Cut `s` to at most `max_len` characters, ending in "..." when shortened.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Word-wrap `text` into at most `max_lines` lines of `width` characters.
///
/// Words longer than `width` are split. When text is left over, the last
/// line ends in "...".
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let pieces = text
        .split_whitespace()
        .flat_map(|word| split_long_word(word, width));

    for piece in pieces {
        let piece_len = piece.chars().count();
        let needed = if current_len == 0 { piece_len } else { current_len + 1 + piece_len };

        if needed <= width {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(&piece);
            current_len = needed;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            return with_ellipsis(lines, width);
        }
        current = piece;
        current_len = piece_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

fn with_ellipsis(mut lines: Vec<String>, width: usize) -> Vec<String> {
    if let Some(last) = lines.last_mut() {
        let len = last.chars().count();
        if len + ELLIPSIS.len() <= width {
            last.push_str(ELLIPSIS);
        } else {
            let kept: String = last.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
            *last = format!("{kept}{ELLIPSIS}");
        }
    }
    lines
}
