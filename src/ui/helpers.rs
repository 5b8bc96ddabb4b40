//! Shared rendering utilities.
//!
//! Text measurement and highlighting operate on character indices, never on
//! byte offsets, so non-ASCII titles render and truncate correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate_text(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Left-aligns `text` in a field of `width` characters.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(display_width(text))));
    padded
}

/// Finds every non-overlapping occurrence of `needle` in `text`, ignoring case.
///
/// `needle` must already be lowercased with [`str::to_lowercase`], the same
/// folding the search filter applies. Returns `(start, end)` character ranges
/// into `text`, end exclusive. An empty needle matches nothing.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = needle.chars().collect();

    // Lowercasing may expand a character (`İ` becomes two), so each folded
    // character records the index of the original it came from.
    let origin: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(index, c)| std::iter::repeat(index).take(c.to_lowercase().count()))
        .collect();
    if origin.len() != haystack.len() {
        return Vec::new();
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    while start + pattern.len() <= haystack.len() {
        if haystack[start..start + pattern.len()] == pattern[..] {
            let end = origin[start + pattern.len() - 1] + 1;
            let from = ranges.last().map_or(origin[start], |&(_, last_end)| origin[start].max(last_end));
            if from < end {
                ranges.push((from, end));
            }
            start += pattern.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Formats a whole-dollar price with thousands separators, e.g. `$1,250,000`.
#[must_use]
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    formatted.push('$');

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Prints `text` with the given character ranges highlighted.
///
/// Highlights are skipped on the selected row so the selection colors stay
/// uniform.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_get_thousands_separators() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(250_000), "$250,000");
        assert_eq!(format_price(1_250_000), "$1,250,000");
    }

    #[test]
    fn match_ranges_ignore_case() {
        assert_eq!(match_ranges("Riverside Riverside", "river"), vec![(0, 5), (10, 15)]);
        assert_eq!(match_ranges("Hillside", "side"), vec![(4, 8)]);
        assert!(match_ranges("Hillside", "").is_empty());
        assert!(match_ranges("Hill", "hillside").is_empty());
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Café Royal", "royal"), vec![(5, 10)]);
    }

    #[test]
    fn match_ranges_fold_case_like_the_search_filter() {
        // Final sigma lowercases to `ς` only when the whole string is folded.
        assert_eq!(match_ranges("ΟΔΟΣ", &"ΟΔΟΣ".to_lowercase()), vec![(0, 4)]);
        // `İ` folds to two characters but highlights as one.
        assert_eq!(match_ranges("İstanbul", &"İS".to_lowercase()), vec![(0, 2)]);
        assert_eq!(match_ranges("İstanbul", "stan"), vec![(1, 5)]);
    }

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_text("Château", 10), "Château");
        assert_eq!(truncate_text("Château Margaux", 5), "Chât…");
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn padding_counts_characters() {
        assert_eq!(pad_right("né", 4), "né  ");
        assert_eq!(pad_right("long", 2), "long");
    }
}
