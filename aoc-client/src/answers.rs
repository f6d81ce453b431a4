//! Extraction of previously submitted answers from puzzle page HTML

use regex::Regex;
use std::cell::OnceCell;

/// Answers already submitted and accepted for one puzzle
///
/// A slot is `None` until that part has been solved (part 2 missing is the
/// normal state for a half-finished day).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answers {
    /// Accepted answer for part 1, if submitted
    pub part1: Option<String>,
    /// Accepted answer for part 2, if submitted
    pub part2: Option<String>,
}

/// Extractor for accepted answers with a cached regex
///
/// Matches the exact markup `<p>Your puzzle answer was <code>VALUE</code>.</p>`
/// the site emits for each solved part. If the site ever changes this
/// markup the extractor yields zero matches rather than an error.
#[derive(Clone, Debug)]
pub(crate) struct AnswerExtractor {
    answer_regex: OnceCell<Regex>,
}

impl AnswerExtractor {
    /// Create a new extractor with an uninitialized regex cache
    pub fn new() -> Self {
        Self {
            answer_regex: OnceCell::new(),
        }
    }

    /// Get or compile the accepted-answer regex
    fn answer_regex(&self) -> &Regex {
        self.answer_regex.get_or_init(|| {
            Regex::new(r"<p>Your puzzle answer was <code>(.+?)</code>\.</p>").unwrap()
        })
    }

    /// Extract accepted answers from puzzle page HTML, in document order
    ///
    /// The first match is part 1, the second is part 2. Fewer than two
    /// matches is normal and leaves the remaining slots empty.
    pub fn extract(&self, html: &str) -> Answers {
        let mut matches = self
            .answer_regex()
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        Answers {
            part1: matches.next(),
            part2: matches.next(),
        }
    }
}

impl Default for AnswerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_both_parts_extracted_in_order() {
        let html = concat!(
            "<html><body><main>",
            "<p>Your puzzle answer was <code>42</code>.</p>",
            "<article>part two text</article>",
            "<p>Your puzzle answer was <code>1764</code>.</p>",
            "</main></body></html>",
        );

        let answers = AnswerExtractor::new().extract(html);
        assert_eq!(answers.part1.as_deref(), Some("42"));
        assert_eq!(answers.part2.as_deref(), Some("1764"));
    }

    #[test]
    fn test_no_matches() {
        let html = "<html><body><main><p>To play, please log in.</p></main></body></html>";
        let answers = AnswerExtractor::new().extract(html);
        assert_eq!(answers, Answers::default());
    }

    #[test]
    fn test_single_match_is_part_one() {
        let html = "<p>Your puzzle answer was <code>CMZ</code>.</p>";
        let answers = AnswerExtractor::new().extract(html);
        assert_eq!(answers.part1.as_deref(), Some("CMZ"));
        assert_eq!(answers.part2, None);
    }

    #[test]
    fn test_changed_markup_yields_nothing() {
        // Markup drift is silent by design
        let html = "<p>Your puzzle answer was <b>42</b>.</p>";
        let answers = AnswerExtractor::new().extract(html);
        assert_eq!(answers, Answers::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_extraction_roundtrip(
            part1 in "[a-zA-Z0-9,-]{1,20}",
            part2 in "[a-zA-Z0-9,-]{1,20}",
            filler in "[a-zA-Z0-9 .,!?\\n]{0,100}",
        ) {
            let html = format!(
                "<main><p>{}</p>\
                 <p>Your puzzle answer was <code>{}</code>.</p>\
                 <p>{}</p>\
                 <p>Your puzzle answer was <code>{}</code>.</p></main>",
                filler, part1, filler, part2
            );

            let answers = AnswerExtractor::new().extract(&html);
            prop_assert_eq!(answers.part1.as_deref(), Some(part1.as_str()));
            prop_assert_eq!(answers.part2.as_deref(), Some(part2.as_str()));
        }
    }
}
