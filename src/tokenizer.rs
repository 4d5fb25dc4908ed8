use crate::Config;
use log::trace;
use std::mem;
use unicode_segmentation::UnicodeSegmentation;

/// Splits arbitrary identifiers and phrases into words.
///
/// The scan walks extended grapheme clusters left to right, classifying each
/// by its first code point, so combining marks stay attached to their letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Upper,
    Lower,
    Digit,
    /// Letters without case, e.g. CJK ideographs.
    Letter,
    Apostrophe,
    Delimiter,
}

impl Class {
    fn of(unit: &str) -> Self {
        let ch = unit.chars().next().unwrap_or(' ');

        if ch == '\'' || ch == '\u{2019}' {
            Class::Apostrophe
        } else if ch.is_uppercase() && !ch.is_numeric() {
            Class::Upper
        } else if ch.is_lowercase() {
            Class::Lower
        } else if ch.is_numeric() {
            Class::Digit
        } else if ch.is_alphabetic() {
            Class::Letter
        } else {
            Class::Delimiter
        }
    }
}

impl Tokenizer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let units: Vec<(&str, Class)> = input
            .graphemes(true)
            .map(|unit| (unit, Class::of(unit)))
            .collect();

        let mut words = Vec::new();
        let mut current = String::new();

        for (i, &(unit, class)) in units.iter().enumerate() {
            match class {
                Class::Apostrophe => continue,
                Class::Delimiter => {
                    flush(&mut words, &mut current);
                    continue;
                }
                Class::Upper if self.starts_word(&units, i) => flush(&mut words, &mut current),
                _ => {}
            }

            if self.config.preserve_case {
                current.push_str(unit);
            } else {
                current.push_str(&unit.to_lowercase());
            }
        }
        flush(&mut words, &mut current);

        trace!("tokenized {:?} into {:?}", input, words);
        words
    }

    /// Whether the uppercase unit at `i` opens a new word.
    fn starts_word(&self, units: &[(&str, Class)], i: usize) -> bool {
        let class_at = |j: usize| units.get(j).map(|&(_, class)| class);

        let Some(prev) = i.checked_sub(1).and_then(class_at) else {
            return false;
        };

        match prev {
            // camelCase, 123Case
            Class::Lower | Class::Digit => true,
            // HTMLTag: the last capital of a run belongs to the next word
            Class::Upper => {
                let next_lower = class_at(i + 1) == Some(Class::Lower);
                let run_before = !self.config.acronym_lookback
                    || i.checked_sub(2).and_then(class_at) == Some(Class::Upper);
                next_lower && run_before
            }
            _ => false,
        }
    }
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(mem::take(current));
    }
}

/// Tokenize with the default, case-preserving options.
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::default().tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookback() -> Tokenizer {
        Tokenizer::new(Config {
            acronym_lookback: true,
            ..Config::default()
        })
    }

    #[test]
    fn test_empty_and_delimiters_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  -_/. ").is_empty());
        assert!(tokenize("'''").is_empty());
    }

    #[test]
    fn test_camel_boundaries() {
        assert_eq!(tokenize("testString"), vec!["test", "String"]);
        assert_eq!(tokenize("testString123"), vec!["test", "String123"]);
        assert_eq!(tokenize("TestString"), vec!["Test", "String"]);
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(tokenize("anHTMLTag"), vec!["an", "HTML", "Tag"]);
        assert_eq!(tokenize("HTMLTag"), vec!["HTML", "Tag"]);
        assert_eq!(tokenize("EThreader"), vec!["E", "Threader"]);
        assert_eq!(tokenize("ASKED"), vec!["ASKED"]);
    }

    #[test]
    fn test_acronym_lookback_variant() {
        let tokenizer = lookback();
        assert_eq!(tokenizer.tokenize("anHTMLTag"), vec!["an", "HTML", "Tag"]);
        assert_eq!(tokenizer.tokenize("HTMLTag"), vec!["HTML", "Tag"]);
        assert_eq!(tokenizer.tokenize("EThreader"), vec!["EThreader"]);
        assert_eq!(tokenizer.tokenize("fooABar"), vec!["foo", "ABar"]);
    }

    #[test]
    fn test_digit_transitions() {
        assert_eq!(tokenize("ID123String"), vec!["ID123", "String"]);
        assert_eq!(tokenize("Id123String"), vec!["Id123", "String"]);
        assert_eq!(tokenize("a1bStar"), vec!["a1b", "Star"]);
        assert_eq!(tokenize("CONST123_FOO"), vec!["CONST123", "FOO"]);
        assert_eq!(tokenize("x_256"), vec!["x", "256"]);
        assert_eq!(tokenize("amazon s3 data"), vec!["amazon", "s3", "data"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(tokenize("hi_-_world"), vec!["hi", "world"]);
        assert_eq!(tokenize("version 0..78..9"), vec!["version", "0", "78", "9"]);
        assert_eq!(tokenize("  te+st  "), vec!["te", "st"]);
        assert_eq!(tokenize("\"quotes\""), vec!["quotes"]);
        assert_eq!(tokenize("HELLO WORLD!"), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn test_apostrophes_are_elided() {
        assert_eq!(tokenize("Anki's Trip"), vec!["Ankis", "Trip"]);
        assert_eq!(tokenize("don\u{2019}t stop"), vec!["dont", "stop"]);
        // the apostrophe still sits between the letters for boundary purposes
        assert_eq!(tokenize("a'B"), vec!["aB"]);
        assert_eq!(tokenize("a'-b"), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(tokenize("Iñtërnâtiônàlizætiøn"), vec!["Iñtërnâtiônàlizætiøn"]);
        assert_eq!(tokenize("My Entrée"), vec!["My", "Entrée"]);
        // decomposed e + combining acute accent
        assert_eq!(tokenize("cafe\u{301}Bar"), vec!["cafe\u{301}", "Bar"]);
        assert_eq!(tokenize("東京_tower"), vec!["東京", "tower"]);
    }

    #[test]
    fn test_non_decimal_numbers_count_as_digits() {
        // superscripts and roman numerals stay inside the word like any digit
        assert_eq!(tokenize("x²Y"), vec!["x²", "Y"]);
        assert_eq!(tokenize("x2Y"), vec!["x2", "Y"]);
        assert_eq!(tokenize("aⅫb"), vec!["aⅫb"]);
        assert_eq!(tokenize("Henry Ⅷ"), vec!["Henry", "Ⅷ"]);
    }

    #[test]
    fn test_case_erasing() {
        let tokenizer = Tokenizer::new(Config::erasing());
        assert_eq!(tokenizer.tokenize("anHTMLTag"), vec!["an", "html", "tag"]);
        assert_eq!(tokenizer.tokenize("ÉCOLE Normale"), vec!["école", "normale"]);
    }

    #[test]
    fn test_letters_only_is_one_word() {
        assert_eq!(tokenize("teststring").len(), 1);
        assert_eq!(tokenize("TESTSTRING").len(), 1);
    }
}
