//! Hyperlinks.

use once_cell::sync::Lazy;
use regex::Regex;

static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\href\{(?P<url>.*?)\}\{(?P<phrase>.*?)\}").expect("href pattern is valid")
});

/// Rewrite `\href{URL}{PHRASE}` to an anchor opening in a new tab.
///
/// Each matched directive is substituted across the whole document, so
/// repeated identical links are all replaced by the first substitution.
pub fn rewrite_links(body: &str) -> String {
    let substitutions: Vec<(String, String)> = HREF
        .captures_iter(body)
        .map(|caps| {
            let anchor = format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                &caps["url"], &caps["phrase"]
            );
            (caps[0].to_string(), anchor)
        })
        .collect();

    substitutions
        .into_iter()
        .fold(body.to_string(), |text, (directive, anchor)| {
            text.replace(&directive, &anchor)
        })
}
