mod rules;

use rules::{Rule, IRREGULARS, PLURALS, SINGULARS, UNCOUNTABLES};

/// Turns a single word into its plural or singular form.
///
/// Implementations must be deterministic and total. The converter only ever
/// hands over the last word of its input, or the whole input when it holds no
/// word at all (including the empty string).
pub trait Inflect {
    fn pluralize(&self, word: &str) -> String;
    fn singularize(&self, word: &str) -> String;
}

impl<T: Inflect + ?Sized> Inflect for &T {
    fn pluralize(&self, word: &str) -> String {
        (**self).pluralize(word)
    }

    fn singularize(&self, word: &str) -> String {
        (**self).singularize(word)
    }
}

/// Heuristic English inflection from ordered suffix rules.
///
/// Matching is case-insensitive and the matched stem keeps its casing, so
/// `TEST` pluralizes to `TESTs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

#[derive(Clone, Copy)]
enum Number {
    Singular,
    Plural,
}

impl English {
    fn inflect(&self, word: &str, number: Number) -> String {
        if !word.chars().any(char::is_alphanumeric) {
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if UNCOUNTABLES.contains(&lower.as_str()) {
            return word.to_string();
        }

        for &(singular, plural) in IRREGULARS {
            if lower == singular || lower == plural {
                let target = match number {
                    Number::Singular => singular,
                    Number::Plural => plural,
                };
                return match_case(word, target);
            }
        }

        let rules: &[Rule] = match number {
            Number::Singular => SINGULARS.as_slice(),
            Number::Plural => PLURALS.as_slice(),
        };
        rules
            .iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_string())
    }
}

impl Inflect for English {
    fn pluralize(&self, word: &str) -> String {
        self.inflect(word, Number::Plural)
    }

    fn singularize(&self, word: &str) -> String {
        self.inflect(word, Number::Singular)
    }
}

/// Give `target` (lowercase) the casing pattern of `word`.
fn match_case(word: &str, target: &str) -> String {
    let has_lower = word.chars().any(char::is_lowercase);
    if !has_lower && word.chars().count() > 1 {
        return target.to_uppercase();
    }

    match word.chars().next() {
        Some(first) if first.is_uppercase() => crate::render::capitalize(target),
        _ => target.to_string(),
    }
}
