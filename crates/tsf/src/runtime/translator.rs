//! Runtime translation lookup over loaded catalogs.
//!
//! The `Translator` is the user-facing API: load one catalog per language,
//! pick a current language, and resolve `(context, source)` pairs to
//! translated text. Lookup never fails; anything that cannot be resolved to
//! a finished translation falls back to the source string, so an incomplete
//! catalog degrades to English rather than breaking the application.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;

use crate::parser::parse_catalog;
use crate::runtime::error::LoadError;
use crate::runtime::plural::form_index;
use crate::types::{Catalog, Message, primary_subtag};

/// Lookup key for a message: context name, source string, and optional
/// disambiguation comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    context: String,
    source: String,
    comment: Option<String>,
}

/// A catalog prepared for lookup.
struct LoadedCatalog {
    catalog: Catalog,
    /// Primary language subtag used for plural rules (e.g., `es`).
    plural_language: String,
    /// Maps lookup keys to `(context_index, message_index)`.
    ///
    /// All statuses are indexed; the finished check happens at lookup time
    /// so tooling can also inspect unfinished entries.
    index: HashMap<MessageKey, (usize, usize)>,
}

impl LoadedCatalog {
    fn new(catalog: Catalog, fallback_language: &str) -> Self {
        let mut index = HashMap::new();
        for (context_idx, context) in catalog.contexts.iter().enumerate() {
            for (message_idx, message) in context.messages.iter().enumerate() {
                let key = MessageKey {
                    context: context.name.clone(),
                    source: message.source.clone(),
                    comment: message.comment.clone(),
                };
                // First entry wins on duplicate keys; the lint pass reports
                // duplicates to translators.
                index.entry(key).or_insert((context_idx, message_idx));
            }
        }
        let plural_language = match catalog.primary_language() {
            lang if lang.is_empty() => primary_subtag(fallback_language),
            lang => lang,
        };
        Self {
            catalog,
            plural_language,
            index,
        }
    }

    fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let key = MessageKey {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.map(|s| s.to_string()),
        };
        let (context_idx, message_idx) = *self.index.get(&key)?;
        Some(&self.catalog.contexts[context_idx].messages[message_idx])
    }
}

/// User-facing translation lookup for TS catalogs.
///
/// Owns one loaded catalog per language plus loaded-path bookkeeping for
/// hot reload. Catalogs are immutable once loaded and all lookups take
/// `&self`, so a `Translator` can be shared read-only across threads.
///
/// # Example
///
/// ```
/// use tsf::Translator;
///
/// let mut translator = Translator::builder().language("es").build();
/// translator.load_str("es", r#"<TS version="2.1" language="es_ES">
/// <context>
///     <name>About</name>
///     <message>
///         <source>Website</source>
///         <translation>Página web</translation>
///     </message>
/// </context>
/// </TS>"#).unwrap();
///
/// assert_eq!(translator.translate("About", "Website"), "Página web");
/// assert_eq!(translator.translate("About", "Unknown"), "Unknown");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Current language code (e.g., "es", "es_ES").
    #[builder(default = "en".to_string())]
    language: String,

    /// Loaded catalogs keyed by language code.
    #[builder(skip)]
    catalogs: HashMap<String, LoadedCatalog>,

    /// File paths for reload support. Only populated for file-loaded
    /// catalogs, not string-loaded ones.
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a new translator with default settings (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new translator with the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Translator::builder().language(language.into()).build()
    }

    /// Get the current language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language.
    ///
    /// This does not load anything; a catalog for the new language must
    /// already be loaded, otherwise every lookup falls back to the source.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Get the loaded catalog for a specific language, if any.
    pub fn catalog_for(&self, language: &str) -> Option<&Catalog> {
        self.catalogs.get(language).map(|loaded| &loaded.catalog)
    }

    /// Get the loaded catalog for the current language, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog_for(&self.language)
    }

    // =========================================================================
    // Catalog Loading
    // =========================================================================

    /// Load a catalog from a TS file for a specific language.
    ///
    /// The file path is stored for later [`Translator::reload`] support.
    /// Loading the same language twice replaces the previous catalog.
    /// Returns the number of messages loaded.
    pub fn load(&mut self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let count = self.load_internal(language, &content, Some(path))?;
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load a catalog from a string for a specific language.
    ///
    /// Catalogs loaded this way cannot be reloaded via [`Translator::reload`].
    /// Returns the number of messages loaded.
    pub fn load_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        self.loaded_paths.remove(language);
        self.load_internal(language, content, None)
    }

    /// Install an already-parsed catalog for a language.
    pub fn install(&mut self, language: &str, catalog: Catalog) -> usize {
        self.loaded_paths.remove(language);
        let loaded = LoadedCatalog::new(catalog, language);
        let count = loaded.catalog.message_count();
        self.catalogs.insert(language.to_string(), loaded);
        count
    }

    /// Reload a catalog from its original file path.
    ///
    /// Returns an error if the catalog was loaded from a string rather than
    /// a file.
    pub fn reload(&mut self, language: &str) -> Result<usize, LoadError> {
        let path =
            self.loaded_paths
                .get(language)
                .cloned()
                .ok_or_else(|| LoadError::NoPathForReload {
                    language: language.to_string(),
                })?;
        self.load(language, path)
    }

    fn load_internal(
        &mut self,
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let catalog = parse_catalog(content).map_err(|e| {
            let default_path = PathBuf::from(format!("<{language}>"));
            let path_buf = path.map(Path::to_path_buf).unwrap_or(default_path);
            let (line, column) = e.position();
            LoadError::Parse {
                path: path_buf,
                line,
                column,
                message: e.to_string(),
            }
        })?;

        let loaded = LoadedCatalog::new(catalog, language);
        let count = loaded.catalog.message_count();
        self.catalogs.insert(language.to_string(), loaded);
        Ok(count)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Find a message regardless of status.
    ///
    /// This is the tooling entry point; end-user lookup goes through the
    /// `translate` family, which only surfaces finished entries.
    pub fn find_message(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&Message> {
        self.catalogs
            .get(&self.language)?
            .find(context, source, comment)
    }

    /// Look up a finished translation, or `None`.
    ///
    /// Unfinished, vanished, and obsolete entries are never returned, and
    /// neither are finished entries with empty text. Numerus messages are
    /// not resolved here; use [`Translator::translate_n`].
    pub fn try_translate(&self, context: &str, source: &str) -> Option<&str> {
        self.try_translate_with_comment(context, source, None)
    }

    /// Disambiguated variant of [`Translator::try_translate`].
    pub fn try_translate_with_comment(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&str> {
        let message = self.find_message(context, source, comment)?;
        if !message.is_displayable() {
            return None;
        }
        message.translation.single()
    }

    /// Translate a source string, falling back to the source itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> Cow<'a, str> {
        match self.try_translate(context, source) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(source),
        }
    }

    /// Translate with a disambiguation comment, falling back to the source.
    pub fn translate_with_comment<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> Cow<'a, str> {
        match self.try_translate_with_comment(context, source, Some(comment)) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(source),
        }
    }

    /// Translate a numerus message for a count.
    ///
    /// Picks the plural form matching the count under the catalog language's
    /// CLDR plural rules, then substitutes `%n` with the count. Falls back
    /// to the source string (with `%n` substituted) when no finished form
    /// exists or the chosen form is empty.
    pub fn translate_n(&self, context: &str, source: &str, n: i64) -> String {
        let Some(loaded) = self.catalogs.get(&self.language) else {
            return substitute_count(source, n);
        };
        let form = loaded
            .find(context, source, None)
            .filter(|message| message.is_displayable())
            .and_then(|message| {
                let forms = message.translation.forms()?;
                let index = form_index(&loaded.plural_language, n, forms.len())?;
                let form = &forms[index];
                if form.is_empty() { None } else { Some(form) }
            });
        match form {
            Some(form) => substitute_count(form, n),
            None => substitute_count(source, n),
        }
    }

    /// Translate and substitute positional arguments (`%1`..`%9`).
    ///
    /// Markers without a corresponding argument are left intact.
    pub fn translate_args(&self, context: &str, source: &str, args: &[&str]) -> String {
        substitute_args(&self.translate(context, source), args)
    }
}

/// Substitute positional `%1`..`%9` markers with arguments.
///
/// `%N` maps to `args[N - 1]`. Markers without a matching argument and `%`
/// characters not followed by a digit pass through unchanged, matching Qt's
/// behavior for plain strings.
pub fn substitute_args(text: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(d) = chars.peek().and_then(|next| next.to_digit(10)) {
                let position = d as usize;
                if position >= 1 && position <= args.len() {
                    out.push_str(args[position - 1]);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Substitute the `%n` count marker with a number.
pub fn substitute_count(text: &str, n: i64) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' && chars.peek() == Some(&'n') {
            out.push_str(&n.to_string());
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
