//! Splitting text into alternating prose and directive segments.

use regex::{Captures, Regex};

/// Input split on every directive a pattern matches.
///
/// There is always exactly one more text segment than directives, so the
/// input is `texts[0] + tags[0] + texts[1] + ... + tags[n-1] + texts[n]`.
pub struct TokenStream<'t> {
    texts: Vec<&'t str>,
    tags: Vec<Captures<'t>>,
}

impl<'t> TokenStream<'t> {
    /// Split `input` on the non-overlapping matches of `pattern`.
    pub fn split(pattern: &Regex, input: &'t str) -> Self {
        let mut texts = Vec::new();
        let mut tags = Vec::new();
        let mut last = 0;

        for caps in pattern.captures_iter(input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            texts.push(&input[last..whole.start()]);
            last = whole.end();
            tags.push(caps);
        }
        texts.push(&input[last..]);

        Self { texts, tags }
    }

    /// Text before the first directive.
    pub fn leading(&self) -> &'t str {
        self.texts[0]
    }

    /// The directive at position `index`, if any.
    pub fn tag(&self, index: usize) -> Option<&Captures<'t>> {
        self.tags.get(index)
    }

    /// Each directive paired with its position and the text that follows it.
    pub fn segments(&self) -> impl Iterator<Item = (usize, &Captures<'t>, &'t str)> {
        self.tags
            .iter()
            .enumerate()
            .map(|(i, tag)| (i, tag, self.texts[i + 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item_pattern() -> Regex {
        Regex::new(r"\\item").unwrap()
    }

    #[test]
    fn test_split_without_directives() {
        let stream = TokenStream::split(&item_pattern(), "plain prose");
        assert_eq!(stream.leading(), "plain prose");
        assert_eq!(stream.segments().count(), 0);
    }

    #[test]
    fn test_split_alternates_text_and_tags() {
        let stream = TokenStream::split(&item_pattern(), "a\\item b\\item\\item c");
        assert_eq!(stream.leading(), "a");

        let texts: Vec<&str> = stream.segments().map(|(_, _, text)| text).collect();
        assert_eq!(texts, vec![" b", "", " c"]);
        assert!(stream.tag(2).is_some());
    }

    #[test]
    fn test_split_reassembles_input() {
        let input = "\\item first \\item second";
        let stream = TokenStream::split(&item_pattern(), input);

        let mut rebuilt = stream.leading().to_string();
        for (_, tag, text) in stream.segments() {
            rebuilt.push_str(&tag[0]);
            rebuilt.push_str(text);
        }
        assert_eq!(rebuilt, input);
        assert!(stream.tag(2).is_none());
    }
}
