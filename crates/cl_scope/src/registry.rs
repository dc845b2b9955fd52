//! Language to extractor lookup.

use cl_ir::Language;

use crate::languages::{CFamily, CurlyScript, Typed};
use crate::ScopeExtractor;

/// Scope extractors for every supported language.
///
/// Patterns are compiled once in [`LanguageRegistry::new`]; build one
/// registry per process and pass it by reference.
#[derive(Clone, Debug)]
pub struct LanguageRegistry {
    c_family: CFamily,
    curly_script: CurlyScript,
    typed: Typed,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        tracing::debug!("compiling scope extractors");
        LanguageRegistry {
            c_family: CFamily::new(),
            curly_script: CurlyScript::new(),
            typed: Typed::new(),
        }
    }

    /// The extractor for `language`, if it has one.
    ///
    /// Python is tokenized and counted but has no extractor.
    pub fn get(&self, language: Language) -> Option<&dyn ScopeExtractor> {
        match language {
            Language::C | Language::Cpp | Language::Java | Language::CSharp => Some(&self.c_family),
            Language::JavaScript => Some(&self.curly_script),
            Language::TypeScript => Some(&self.typed),
            Language::Python => None,
        }
    }

    /// Languages with a registered extractor.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|language| self.get(*language).is_some())
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
