// Word-level rendering shared by the joined case styles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordCase {
    /// Whatever casing the tokenizer produced.
    Keep,
    Lower,
    Upper,
    /// First letter uppercase, the rest lowercase.
    Title,
}

impl WordCase {
    fn write(self, word: &str, out: &mut String) {
        match self {
            WordCase::Keep => out.push_str(word),
            WordCase::Lower => out.push_str(&word.to_lowercase()),
            WordCase::Upper => out.push_str(&word.to_uppercase()),
            WordCase::Title => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub separator: &'static str,
    pub first: WordCase,
    pub rest: WordCase,
}

impl Layout {
    pub(crate) const fn uniform(separator: &'static str, case: WordCase) -> Self {
        Self {
            separator,
            first: case,
            rest: case,
        }
    }
}

pub(crate) fn join(words: &[String], layout: Layout) -> String {
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            layout.first.write(word, &mut out);
        } else {
            out.push_str(layout.separator);
            layout.rest.write(word, &mut out);
        }
    }

    out
}

/// First code point of every word, casing untouched.
pub(crate) fn abbreviate(words: &[String]) -> String {
    words.iter().filter_map(|word| word.chars().next()).collect()
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    WordCase::Title.write(word, &mut out);
    out
}
