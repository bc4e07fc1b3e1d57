/// Greedy word wrap to `width` characters; overlong words get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("no valid molecules", 40), vec!["no valid molecules"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("failed to copy ZINC000001.mol2 into the store", 20),
            vec!["failed to copy", "ZINC000001.mol2 into", "the store"]
        );
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap("5 – 7 atoms", 5), vec!["5 – 7", "atoms"]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("benzene", 7), "benzene");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("molecule-game-web/data", 8), "molecul…");
        assert_eq!(truncate("αβγδε", 3), "αβ…");
        assert_eq!(truncate("abc", 0), "");
    }
}
