use super::Markup;
use std::collections::BTreeMap;

/// Values for the placeholders of a phrase, keyed by name without prefix.
///
/// A placeholder is written as the name preceded by one of:
/// - `@`: the value is HTML-escaped,
/// - `%`: the value is HTML-escaped and emphasized,
/// - `!`: the value is inserted as-is.
///
/// Outside of HTML all values are inserted as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args(BTreeMap<String, String>);

const PREFIXES: &[char] = &['@', '%', '!'];

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replaces every placeholder in `pattern` in a single pass.
    /// Substituted values are never scanned again and the longest
    /// matching name wins. Unknown placeholders are kept.
    pub fn substitute(&self, pattern: &str, markup: Markup) -> String {
        if self.is_empty() {
            return pattern.to_owned();
        }

        let mut names: Vec<&str> = self
            .0
            .keys()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let mut output = String::with_capacity(pattern.len());
        let mut rest = pattern;
        while let Some(index) = rest.find(PREFIXES) {
            output.push_str(&rest[..index]);
            let prefix = &rest[index..index + 1];
            let after_prefix = &rest[index + 1..];
            match names.iter().find(|name| after_prefix.starts_with(*name)) {
                Some(name) => {
                    push_value(&mut output, prefix, &self.0[*name], markup);
                    rest = &after_prefix[name.len()..];
                }
                None => {
                    output.push_str(prefix);
                    rest = after_prefix;
                }
            }
        }
        output.push_str(rest);
        output
    }
}

fn push_value(output: &mut String, prefix: &str, value: &str, markup: Markup) {
    match (markup, prefix) {
        (Markup::Text, _) | (Markup::Html, "!") => output.push_str(value),
        (Markup::Html, "%") => {
            output.push_str("<em class=\"placeholder\">");
            output.push_str(&tera::escape_html(value));
            output.push_str("</em>");
        }
        (Markup::Html, _) => output.push_str(&tera::escape_html(value)),
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(value: &str) -> Args {
        Args::new().with("site", value)
    }

    #[test]
    fn emphasized_placeholder_is_escaped_and_wrapped() {
        assert_eq!(
            "into the <em class=\"placeholder\">A &amp; B</em> site",
            site("A & B").substitute("into the %site site", Markup::Html)
        );
    }

    #[test]
    fn escaped_placeholder_is_escaped() {
        assert_eq!(
            "hello &lt;i&gt;you&lt;&#x2F;i&gt;",
            site("<i>you</i>").substitute("hello @site", Markup::Html)
        );
    }

    #[test]
    fn verbatim_placeholder_is_inserted_as_is() {
        assert_eq!(
            "hello <i>you</i>",
            site("<i>you</i>").substitute("hello !site", Markup::Html)
        );
    }

    #[test]
    fn text_markup_never_escapes() {
        assert_eq!(
            "A & B, A & B, A & B",
            site("A & B").substitute("%site, @site, !site", Markup::Text)
        );
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        assert_eq!(
            "100% of %user on Example",
            site("Example").substitute("100% of %user on !site", Markup::Text)
        );
    }

    #[test]
    fn longest_name_wins() {
        let args = Args::new().with("site", "short").with("site_name", "long");
        assert_eq!(
            "long short",
            args.substitute("@site_name @site", Markup::Text)
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let args = Args::new().with("a", "@b").with("b", "nope");
        assert_eq!("@b", args.substitute("@a", Markup::Text));
    }

    #[test]
    fn pattern_without_args_is_returned_unchanged() {
        assert_eq!(
            "100% @ home!",
            Args::new().substitute("100% @ home!", Markup::Html)
        );
    }
}
