//! Placeholder substitution.
//!
//! A stub addresses replacement values through two equivalent surface forms,
//! `$NAME$` and `{{NAME}}`. Both are matched case-insensitively against the
//! uppercase-normalized keys of the replacement map.

use std::collections::HashMap;

use regex::{Captures, Regex};

/// Replace every `$KEY$` / `{{KEY}}` occurrence with its mapped value.
///
/// All keys are matched in a single simultaneous pass: one alternation over
/// the configured key set, scanned left-to-right exactly once. Replacement
/// values are inserted verbatim and never re-scanned, so a value containing
/// `$OTHER$` stays literal (no recursive expansion). Tokens whose name is
/// not in the map are left untouched — an unknown placeholder is not an
/// error.
///
/// Keys must already be uppercase-normalized (see
/// [`StubRequest`](crate::domain::StubRequest)); the template side of the
/// comparison is case-insensitive.
pub fn substitute(
    text: &str,
    replacements: &HashMap<String, String>,
) -> Result<String, regex::Error> {
    if replacements.is_empty() {
        return Ok(text.to_owned());
    }

    // Longest-first so overlapping key names resolve deterministically.
    // An empty key cannot address any placeholder; keep it out of the
    // alternation so it cannot turn into an empty branch matching `$$`.
    let mut keys: Vec<&str> = replacements
        .keys()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();
    if keys.is_empty() {
        return Ok(text.to_owned());
    }
    keys.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)\$({alternation})\$|\{{\{{({alternation})\}}\}}");
    let re = Regex::new(&pattern)?;

    let result = re.replace_all(text, |caps: &Captures<'_>| {
        let name = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        match name.and_then(|n| replacements.get(&n.to_uppercase())) {
            Some(value) => value.clone(),
            // Structurally unreachable (one of the groups always captures),
            // but falling back to the original token keeps this panic-free.
            None => caps[0].to_owned(),
        }
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<const N: usize>(entries: [(&str, &str); N]) -> HashMap<String, String> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_uppercase(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_dollar_occurrence() {
        let out = substitute("$KEY$ and $KEY$ again", &map([("key", "v")])).unwrap();
        assert_eq!(out, "v and v again");
    }

    #[test]
    fn both_surface_forms_get_the_same_value() {
        let out = substitute("a=$NAME$ b={{NAME}}", &map([("name", "x")])).unwrap();
        assert_eq!(out, "a=x b=x");
    }

    #[test]
    fn template_side_matching_is_case_insensitive() {
        let out = substitute("$name$ {{Name}} $NAME$", &map([("NAME", "x")])).unwrap();
        assert_eq!(out, "x x x");
    }

    #[test]
    fn unknown_placeholders_are_left_intact() {
        let out = substitute("$KNOWN$ $UNKNOWN$ {{ALSO_NOT}}", &map([("known", "v")])).unwrap();
        assert_eq!(out, "v $UNKNOWN$ {{ALSO_NOT}}");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let out = substitute("$A$ $B$", &map([("a", "$B$"), ("b", "plain")])).unwrap();
        assert_eq!(out, "$B$ plain");
    }

    #[test]
    fn value_shaped_like_a_placeholder_is_inserted_verbatim() {
        let out = substitute("{{X}}", &map([("x", "{{X}}")])).unwrap();
        assert_eq!(out, "{{X}}");
    }

    #[test]
    fn empty_map_leaves_text_unchanged() {
        let text = "$ANYTHING$ {{GOES}} $$";
        assert_eq!(substitute(text, &HashMap::new()).unwrap(), text);
    }

    #[test]
    fn overlapping_key_names_both_resolve() {
        let out = substitute("$AB$ $ABC$", &map([("ab", "1"), ("abc", "2")])).unwrap();
        assert_eq!(out, "1 2");
    }

    #[test]
    fn keys_with_metacharacters_match_literally() {
        let out = substitute("$A.B$ $AXB$", &map([("a.b", "hit")])).unwrap();
        assert_eq!(out, "hit $AXB$");
    }

    #[test]
    fn adjacent_tokens_are_all_replaced() {
        let out = substitute("$K$$K$", &map([("k", "v")])).unwrap();
        assert_eq!(out, "vv");
    }
}
