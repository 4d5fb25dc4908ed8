//! Split identifiers and phrases into words, then render them in another case.
//!
//! ```
//! assert_eq!(recase::camel("ID123String"), "id123String");
//! assert_eq!(recase::pascal("anHTMLTag"), "AnHtmlTag");
//! assert_eq!(recase::snake("My Entrée"), "My_Entrée");
//! assert_eq!(recase::plural("path/case"), "path/cases");
//! ```

pub mod case;
pub mod config;
pub mod converter;
pub mod error;
pub mod inflect;
mod render;
pub mod tokenizer;

pub use case::Case;
pub use config::Config;
pub use converter::Converter;
pub use error::{Error, Result};
pub use inflect::{English, Inflect};
pub use tokenizer::{tokenize, Tokenizer};

pub fn lower(s: &str) -> String {
    Case::Lower.convert(s)
}

pub fn upper(s: &str) -> String {
    Case::Upper.convert(s)
}

pub fn title(s: &str) -> String {
    Case::Title.convert(s)
}

pub fn camel(s: &str) -> String {
    Case::Camel.convert(s)
}

pub fn pascal(s: &str) -> String {
    Case::Pascal.convert(s)
}

/// Words joined by `_`, each word cased as written.
pub fn snake(s: &str) -> String {
    Case::Snake.convert(s)
}

/// Words joined by `-`, each word cased as written.
pub fn slug(s: &str) -> String {
    Case::Slug.convert(s)
}

pub fn kebab(s: &str) -> String {
    Case::Slug.convert(s)
}

pub fn dot(s: &str) -> String {
    Case::Dot.convert(s)
}

pub fn path(s: &str) -> String {
    Case::Path.convert(s)
}

/// First letter of every word.
pub fn short(s: &str) -> String {
    Case::Short.convert(s)
}

pub fn abbreviation(s: &str) -> String {
    Case::Short.convert(s)
}

pub fn slim(s: &str) -> String {
    Case::Slim.convert(s)
}

/// Singularize the last word, leaving the rest of `s` untouched.
pub fn singular(s: &str) -> String {
    Case::Singular.convert(s)
}

/// Pluralize the last word, leaving the rest of `s` untouched.
pub fn plural(s: &str) -> String {
    Case::Plural.convert(s)
}

pub fn space(s: &str) -> String {
    Case::Space.convert(s)
}

pub fn constant(s: &str) -> String {
    Case::Constant.convert(s)
}

pub fn header(s: &str) -> String {
    Case::Header.convert(s)
}

pub fn sentence(s: &str) -> String {
    Case::Sentence.convert(s)
}
