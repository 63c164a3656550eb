use std::fmt::Debug;

/// Turns the raw value of a person-names field into a form that sorts by last name.
pub trait NameNormalizer: Debug + Send + Sync {
    /// Returns the alphabetization form of `raw`.
    fn normalize_for_alphabetization(&self, raw: &str) -> String;
}

/// Renders each name as `Last[, Jr][, First[ von]]` and joins them with ` and `.
///
/// Understands the three BibTeX name forms (`First von Last`, `von Last, First`, and
/// `von Last, Jr, First`). A braced group is kept together as one word and the braces are dropped
/// from the output; no other LaTeX is interpreted.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastFirstNormalizer;

impl NameNormalizer for LastFirstNormalizer {
    #[inline]
    fn normalize_for_alphabetization(&self, raw: &str) -> String {
        fix_author_for_alphabetization(raw)
    }
}

/// Rewrites a BibTeX name list so that it sorts by last name.
///
/// A top-level `{...}` group is a single word: its spaces, commas, and `and`s do not split anything,
/// and a word starting with a brace never counts as lowercase. Braces are removed from the result.
///
/// ```
/// use bibsort_core::name::fix_author_for_alphabetization;
///
/// assert_eq!(
///     fix_author_for_alphabetization("Ludwig van Beethoven and Smith, Jane"),
///     "Beethoven, Ludwig van and Smith, Jane"
/// );
/// assert_eq!(fix_author_for_alphabetization("{World Health Organization}"), "World Health Organization");
/// ```
pub fn fix_author_for_alphabetization(raw: &str) -> String {
    split_names(raw).iter().map(|words| last_first(words)).collect::<Vec<String>>().join(" and ")
}

/// Splits `s` at every character matching `is_delimiter` that is not inside braces.
fn split_top_level(s: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_delimiter(c) => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => (),
        }
    }

    parts.push(&s[start..]);
    parts
}

fn words(s: &str) -> Vec<&str> {
    split_top_level(s, char::is_whitespace).into_iter().filter(|w| !w.is_empty()).collect()
}

/// Splits a name list on the standalone word `and` (in any case).
fn split_names(names: &str) -> Vec<Vec<&str>> {
    let mut result = Vec::new();
    let mut current = Vec::new();

    for word in words(names) {
        if word.eq_ignore_ascii_case("and") {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(word);
        }
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

fn starts_lowercase(word: &str) -> bool {
    word.chars().next().map(|c| c.is_lowercase()).unwrap_or(false)
}

fn last_first(words_of_name: &[&str]) -> String {
    let name = words_of_name.join(" ");
    if name == "others" {
        return name;
    }

    let comma_parts = split_top_level(&name, |c| c == ',');
    let (first, von, last, jr) = if comma_parts.len() > 1 {
        let von_last = words(comma_parts[0]);
        let rest: Vec<&str> = comma_parts[1..].iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect();
        let (jr, first) = match rest.as_slice() {
            [] => (None, String::new()),
            [first] => (None, first.to_string()),
            [jr, first @ ..] => (Some(jr.to_string()), first.join(" ")),
        };

        // In the comma forms every leading lowercase word except the last belongs to the von part.
        let von_len = von_last
            .iter()
            .take(von_last.len().saturating_sub(1))
            .take_while(|w| starts_lowercase(w))
            .count();
        (first, von_last[..von_len].join(" "), von_last[von_len..].join(" "), jr)
    } else {
        let (body, last) = words_of_name.split_at(words_of_name.len() - 1);
        match body.iter().position(|w| starts_lowercase(w)) {
            Some(von_start) => {
                let von_end = body.iter().rposition(|w| starts_lowercase(w)).unwrap_or(von_start);
                (
                    body[..von_start].join(" "),
                    body[von_start..=von_end].join(" "),
                    body[von_end + 1..].iter().chain(last).copied().collect::<Vec<&str>>().join(" "),
                    None,
                )
            }
            None => (body.join(" "), String::new(), last.join(" "), None),
        }
    };

    let mut result = last;
    if let Some(jr) = jr {
        result.push_str(", ");
        result.push_str(&jr);
    }

    let given: Vec<&str> = [first.as_str(), von.as_str()].into_iter().filter(|s| !s.is_empty()).collect();
    if !given.is_empty() {
        result.push_str(", ");
        result.push_str(&given.join(" "));
    }

    result.chars().filter(|c| *c != '{' && *c != '}').collect()
}
