/// Width-of-text queries. Implemented by `FontEntry`; tests substitute fixed metrics.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Greedy word wrap.
///
/// Words are whitespace-delimited and joined with single spaces. Every returned
/// line measures at most `max_width`, except a single word that is wider than
/// `max_width` on its own; it is emitted alone, untruncated. Whitespace-only
/// input yields no lines.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font: &impl TextMeasure,
    font_size: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if font.text_width(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every char is `advance` units wide at size 1.
    struct Monospace {
        advance: f32,
    }

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * self.advance * font_size
        }
    }

    const MONO: Monospace = Monospace { advance: 0.5 };

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("hello world", 100.0, &MONO, 10.0);
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn breaks_before_the_word_that_overflows() {
        // 5 units per char: "aaa bbb" = 35, "aaa bbb ccc" = 55
        let lines = wrap_text("aaa bbb ccc ddd", 40.0, &MONO, 10.0);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let lines = wrap_text("aaa bbb", 35.0, &MONO, 10.0);
        assert_eq!(lines, vec!["aaa bbb"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_text("a bbbbbbbbbbbbbbbbbbbb c", 30.0, &MONO, 10.0);
        assert_eq!(lines, vec!["a", "bbbbbbbbbbbbbbbbbbbb", "c"]);
    }

    #[test]
    fn internal_whitespace_collapses_to_single_spaces() {
        let lines = wrap_text("  one \t two\n\nthree  ", 1000.0, &MONO, 10.0);
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(wrap_text("   \n ", 100.0, &MONO, 10.0).is_empty());
        assert!(wrap_text("", 100.0, &MONO, 10.0).is_empty());
    }

    #[test]
    fn lines_fit_unless_single_word() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua. \
                    Pneumonoultramicroscopicsilicovolcanoconiosis ut enim ad minim veniam";
        for max_width in [20.0, 45.0, 80.0, 150.0, 400.0] {
            let lines = wrap_text(text, max_width, &MONO, 8.0);
            for line in &lines {
                let fits = MONO.text_width(line, 8.0) <= max_width;
                let single_word = !line.contains(' ');
                assert!(fits || single_word, "{line:?} overflows {max_width}");
            }
            let rejoined = lines.join(" ");
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, original.join(" "), "word order preserved");
        }
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = "satu dua tiga empat lima enam tujuh delapan sembilan sepuluh";
        let a = wrap_text(text, 60.0, &MONO, 9.0);
        let b = wrap_text(text, 60.0, &MONO, 9.0);
        assert_eq!(a, b);
    }
}
