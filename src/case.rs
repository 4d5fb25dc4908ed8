use crate::inflect::English;
use crate::render::{Layout, WordCase};
use crate::tokenizer::Tokenizer;
use crate::{Config, Converter, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Lower,
    Upper,
    Title,
    Camel,
    Pascal,
    Snake,
    #[serde(alias = "kebab")]
    Slug,
    Dot,
    Path,
    #[serde(alias = "abbreviation")]
    Short,
    Slim,
    Singular,
    Plural,
    Space,
    Constant,
    Header,
    Sentence,
}

/// How a case style turns its input into output.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Renderer {
    /// Applied to the raw input, no tokenizing.
    Whole(fn(&str) -> String),
    Joined(Layout),
    Abbreviate,
    Singularize,
    Pluralize,
}

impl Case {
    pub const ALL: [Case; 17] = [
        Case::Lower,
        Case::Upper,
        Case::Title,
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Slug,
        Case::Dot,
        Case::Path,
        Case::Short,
        Case::Slim,
        Case::Singular,
        Case::Plural,
        Case::Space,
        Case::Constant,
        Case::Header,
        Case::Sentence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Title => "title",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Slug => "slug",
            Case::Dot => "dot",
            Case::Path => "path",
            Case::Short => "short",
            Case::Slim => "slim",
            Case::Singular => "singular",
            Case::Plural => "plural",
            Case::Space => "space",
            Case::Constant => "constant",
            Case::Header => "header",
            Case::Sentence => "sentence",
        }
    }

    /// Convert `input` with the default converter.
    pub fn convert(self, input: &str) -> String {
        Converter::<English>::default().convert(self, input)
    }

    pub(crate) fn renderer(self) -> Renderer {
        use WordCase::{Keep, Lower, Title, Upper};

        match self {
            Case::Lower => Renderer::Whole(str::to_lowercase),
            Case::Upper => Renderer::Whole(str::to_uppercase),
            Case::Title => Renderer::Joined(Layout::uniform(" ", Title)),
            Case::Camel => Renderer::Joined(Layout {
                separator: "",
                first: Lower,
                rest: Title,
            }),
            Case::Pascal => Renderer::Joined(Layout::uniform("", Title)),
            Case::Snake => Renderer::Joined(Layout::uniform("_", Keep)),
            Case::Slug => Renderer::Joined(Layout::uniform("-", Keep)),
            Case::Dot => Renderer::Joined(Layout::uniform(".", Keep)),
            Case::Path => Renderer::Joined(Layout::uniform("/", Keep)),
            Case::Slim => Renderer::Joined(Layout::uniform("", Keep)),
            Case::Space => Renderer::Joined(Layout::uniform(" ", Keep)),
            Case::Constant => Renderer::Joined(Layout::uniform("_", Upper)),
            Case::Header => Renderer::Joined(Layout::uniform("-", Title)),
            Case::Sentence => Renderer::Joined(Layout {
                separator: " ",
                first: Title,
                rest: Lower,
            }),
            Case::Short => Renderer::Abbreviate,
            Case::Singular => Renderer::Singularize,
            Case::Plural => Renderer::Pluralize,
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    /// Accepts the style name or an alias in any casing or spelling,
    /// with or without a `case` suffix: `snake`, `snake_case`, `KebabCase`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Tokenizer::new(Config::erasing()).tokenize(s).concat();
        let key = match key.strip_suffix("case") {
            Some(stem) if !stem.is_empty() => stem,
            _ => key.as_str(),
        };

        let case = match key {
            "kebab" | "param" => Case::Slug,
            "abbreviation" | "abbr" => Case::Short,
            "screamingsnake" => Case::Constant,
            "train" => Case::Header,
            "lowercamel" => Case::Camel,
            "uppercamel" => Case::Pascal,
            _ => match Case::ALL.into_iter().find(|case| case.name() == key) {
                Some(case) => case,
                None => return Err(Error::UnknownCase(s.to_string())),
            },
        };
        Ok(case)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
