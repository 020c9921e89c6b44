//! Member name derivation.

/// Prefix of the generated resource and event getter names.
pub const GETTER_PREFIX: &str = "get";

/// Converts a field or struct name to PascalCase.
///
/// Words are split on runs of non-alphanumeric characters, on a lowercase
/// letter or digit followed by an uppercase letter, and between an uppercase
/// run and a following capitalized word. Each word is capitalized and the
/// rest lowercased. A word after the first that starts with a digit is
/// joined with `_`.
///
/// ```rust
/// use aptos_module_client::codegen::to_pascal_case;
///
/// assert_eq!(to_pascal_case("deposit_events"), "DepositEvents");
/// assert_eq!(to_pascal_case("XMLHttpEvents"), "XmlHttpEvents");
/// assert_eq!(to_pascal_case("events_2"), "Events_2");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (index, word) in split_words(s).into_iter().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index > 0 && first.is_ascii_digit() {
                result.push('_');
            }
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }

    result
}

/// Name of the generated getter for a resource or event handle.
pub fn getter_name(name: &str) -> String {
    format!("{GETTER_PREFIX}{name}")
}

fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let lower_to_upper = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
