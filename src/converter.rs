use crate::case::{Case, Renderer};
use crate::inflect::{English, Inflect};
use crate::render;
use crate::tokenizer::Tokenizer;
use crate::Config;
use log::debug;

/// Renders strings into any [`Case`], using one tokenizer configuration and
/// one inflector for singular and plural forms.
#[derive(Debug, Clone, Default)]
pub struct Converter<I = English> {
    tokenizer: Tokenizer,
    inflector: I,
}

impl Converter<English> {
    pub fn new(config: Config) -> Self {
        Self::with_inflector(config, English)
    }
}

impl<I: Inflect> Converter<I> {
    pub fn with_inflector(config: Config, inflector: I) -> Self {
        Self {
            tokenizer: Tokenizer::new(config),
            inflector,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn inflector(&self) -> &I {
        &self.inflector
    }

    pub fn tokenize(&self, input: &str) -> Vec<String> {
        self.tokenizer.tokenize(input)
    }

    pub fn convert(&self, case: Case, input: &str) -> String {
        match case.renderer() {
            Renderer::Whole(apply) => apply(input),
            Renderer::Joined(layout) => render::join(&self.tokenize(input), layout),
            Renderer::Abbreviate => render::abbreviate(&self.tokenize(input)),
            Renderer::Singularize => self.splice(input, |word| self.inflector.singularize(word)),
            Renderer::Pluralize => self.splice(input, |word| self.inflector.pluralize(word)),
        }
    }

    /// Inflect the last word of `input` in place, leaving everything around it
    /// exactly as written.
    fn splice(&self, input: &str, inflect: impl Fn(&str) -> String) -> String {
        // the word has to be found verbatim, so never lowercase here
        let locator = Tokenizer::new(Config {
            preserve_case: true,
            ..self.tokenizer.config()
        });
        let words = locator.tokenize(input);

        let Some(last) = words.last() else {
            return inflect(input);
        };

        match input.rfind(last.as_str()) {
            Some(start) => {
                let end = start + last.len();
                let mut out = String::with_capacity(input.len() + 4);
                out.push_str(&input[..start]);
                out.push_str(&inflect(last));
                out.push_str(&input[end..]);
                out
            }
            None => {
                debug!(
                    "last word {:?} not found verbatim in {:?}, inflecting whole input",
                    last, input
                );
                inflect(input)
            }
        }
    }

    pub fn lower(&self, input: &str) -> String {
        self.convert(Case::Lower, input)
    }

    pub fn upper(&self, input: &str) -> String {
        self.convert(Case::Upper, input)
    }

    pub fn title(&self, input: &str) -> String {
        self.convert(Case::Title, input)
    }

    pub fn camel(&self, input: &str) -> String {
        self.convert(Case::Camel, input)
    }

    pub fn pascal(&self, input: &str) -> String {
        self.convert(Case::Pascal, input)
    }

    pub fn snake(&self, input: &str) -> String {
        self.convert(Case::Snake, input)
    }

    pub fn slug(&self, input: &str) -> String {
        self.convert(Case::Slug, input)
    }

    pub fn dot(&self, input: &str) -> String {
        self.convert(Case::Dot, input)
    }

    pub fn path(&self, input: &str) -> String {
        self.convert(Case::Path, input)
    }

    pub fn short(&self, input: &str) -> String {
        self.convert(Case::Short, input)
    }

    pub fn slim(&self, input: &str) -> String {
        self.convert(Case::Slim, input)
    }

    pub fn singular(&self, input: &str) -> String {
        self.convert(Case::Singular, input)
    }

    pub fn plural(&self, input: &str) -> String {
        self.convert(Case::Plural, input)
    }

    pub fn space(&self, input: &str) -> String {
        self.convert(Case::Space, input)
    }

    pub fn constant(&self, input: &str) -> String {
        self.convert(Case::Constant, input)
    }

    pub fn header(&self, input: &str) -> String {
        self.convert(Case::Header, input)
    }

    pub fn sentence(&self, input: &str) -> String {
        self.convert(Case::Sentence, input)
    }
}
