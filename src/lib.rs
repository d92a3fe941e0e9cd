use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod ast;
pub mod error;
pub mod loader;
pub mod parser;

// Re-export the core types for convenient access
pub use ast::{Placeholder, Replacements, Value};
pub use error::{I18nError, I18nResult};
pub use loader::{ResourceFormat, load_translations};
pub use parser::Parser;

/// The flat phrase-key to template mapping backing a [`Translator`].
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMap(pub HashMap<String, String>);

impl TranslationMap {
    pub fn new() -> Self {
        TranslationMap(HashMap::new())
    }

    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }

    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    /// The template for a phrase, or the phrase itself when no non-empty
    /// translation exists: an untranslated phrase reads as source language.
    pub fn resolve<'a>(&'a self, phrase: &'a str) -> &'a str {
        match self.0.get(phrase) {
            Some(template) if !template.is_empty() => template,
            _ => phrase,
        }
    }
}

pub struct Translator {
    translations: TranslationMap,
}

impl Translator {
    /// Build a translator by loading the resource at `path`.
    ///
    /// The extension selects the parser; the file is read once here and
    /// never reloaded. Loading is the only fallible step: after
    /// construction every translate call is total.
    pub fn new(path: impl AsRef<Path>) -> I18nResult<Self> {
        Ok(Translator {
            translations: loader::load_translations(path.as_ref())?,
        })
    }

    /// Build a translator from an already constructed mapping.
    pub fn with_translations(translations: TranslationMap) -> Self {
        Translator { translations }
    }

    pub fn translate(&self, phrase: &str) -> String {
        self.translate_with(phrase, &Replacements::new())
    }

    /// Translate `phrase`, substituting `replacements` into its template.
    ///
    /// Placeholder tokens are located in the source phrase, not in the
    /// resolved template: a translation takes part in substitution only by
    /// reusing the same `{...}` tokens verbatim. Each token is resolved
    /// once and applied to every occurrence in a single pass, so
    /// substituted text is never rescanned for further tokens.
    pub fn translate_with(&self, phrase: &str, replacements: &Replacements) -> String {
        let template = self.translations.resolve(phrase);
        let placeholders = Parser::new(phrase).parse();
        if placeholders.is_empty() {
            return template.to_owned();
        }

        let resolved: Vec<(&str, String)> = placeholders
            .iter()
            .map(|placeholder| (placeholder.token(), placeholder.resolve(replacements)))
            .collect();

        let mut result = String::with_capacity(template.len());
        let mut rest = template;
        'scan: while let Some(offset) = rest.find('{') {
            result.push_str(&rest[..offset]);
            rest = &rest[offset..];
            for (token, value) in &resolved {
                if let Some(after) = rest.strip_prefix(*token) {
                    result.push_str(value);
                    rest = after;
                    continue 'scan;
                }
            }
            // a '{' that opens no known token stays as-is
            result.push('{');
            rest = &rest[1..];
        }
        result.push_str(rest);
        result
    }

    /// Like [`Self::translate_with`], but also writes the result to `out`.
    pub fn translate_to<W: Write>(
        &self,
        phrase: &str,
        replacements: &Replacements,
        out: &mut W,
    ) -> io::Result<String> {
        let translated = self.translate_with(phrase, replacements);
        out.write_all(translated.as_bytes())?;
        Ok(translated)
    }

    /// Like [`Self::translate_with`], but also echoes the result to
    /// standard output.
    pub fn translate_print(&self, phrase: &str, replacements: &Replacements) -> String {
        let translated = self.translate_with(phrase, replacements);
        print!("{}", translated);
        translated
    }
}
