use crate::definition::{ConfigEntry, DefaultSettings, UserSettings};
use crate::error::SettingsError;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// File stem of the shared default settings document inside a settings directory.
pub const DEFAULT_SETTINGS_STEM: &str = "word_complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Serialization format of a settings document.
pub enum SettingsFormat {
    /// JSON (`.sublime-settings`, `.json`); `//` and `/* */` comments and trailing commas
    /// are accepted.
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl SettingsFormat {
    /// Detect the format from a file extension. Returns `None` for unknown extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "sublime-settings" | "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, source: &str) -> Result<T, SettingsError> {
        Ok(match self {
            Self::Json => serde_json::from_str(&crate::jsonc::strip_comments(source))?,
            Self::Yaml => serde_yaml::from_str(source)?,
        })
    }
}

/// Returns the language name for a syntax definition path: its file stem.
///
/// `Packages/Python/Python.sublime-syntax` becomes `Python`.
pub fn language_from_syntax(syntax_path: &str) -> String {
    Path::new(syntax_path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Result of following a language's redirect chain through the default settings.
struct RedirectChain<'a> {
    /// Every language visited, starting with the requested one.
    hops: Vec<&'a str>,
    /// The word list the chain ended on, if any.
    words: &'a [String],
}

#[derive(Debug, Clone, Default)]
/// Default and per-language settings, resolvable into static completion words.
pub struct SettingsStore {
    defaults: DefaultSettings,
    user: HashMap<String, UserSettings>,
}

impl SettingsStore {
    /// Create an empty store (every language resolves to no words).
    pub fn new() -> Self {
        Self::default()
    }

    /// The merged default settings.
    pub fn defaults(&self) -> &DefaultSettings {
        &self.defaults
    }

    /// Overlay a default settings document.
    pub fn add_defaults(&mut self, defaults: DefaultSettings) {
        self.defaults.extend(defaults);
    }

    /// Per-language settings for `language`, if loaded.
    pub fn user(&self, language: &str) -> Option<&UserSettings> {
        self.user.get(language)
    }

    /// Set (replace) the per-language settings for `language`.
    pub fn insert_user(&mut self, language: impl Into<String>, settings: UserSettings) {
        self.user.insert(language.into(), settings);
    }

    /// Parse and overlay a default settings document.
    pub fn load_defaults_from_str(
        &mut self,
        source: &str,
        format: SettingsFormat,
    ) -> Result<(), SettingsError> {
        let defaults: DefaultSettings = format.parse(source)?;
        self.add_defaults(defaults);
        Ok(())
    }

    /// Parse the per-language settings document for `language`.
    pub fn load_user_from_str(
        &mut self,
        language: impl Into<String>,
        source: &str,
        format: SettingsFormat,
    ) -> Result<(), SettingsError> {
        let settings: UserSettings = format.parse(source)?;
        self.insert_user(language, settings);
        Ok(())
    }

    /// Load one settings file.
    ///
    /// A file whose stem is [`DEFAULT_SETTINGS_STEM`] is a default settings document; any other
    /// file holds the settings of the language named by its stem.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)
            .ok_or_else(|| SettingsError::UnsupportedFile(path.display().to_string()))?;
        let source = std::fs::read_to_string(path)?;
        let stem = language_from_syntax(&path.to_string_lossy());

        if stem == DEFAULT_SETTINGS_STEM {
            self.load_defaults_from_str(&source, format)
        } else {
            self.load_user_from_str(stem, &source, format)
        }
    }

    /// Load every settings file in `dir` (non-recursive), returning how many were loaded.
    ///
    /// Files with unknown extensions are ignored. Files that fail to parse are skipped with a
    /// warning so one malformed language does not disable the others. Files are loaded in
    /// name order so overlays are deterministic.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, SettingsError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.is_file() && SettingsFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_path(&path) {
                Ok(()) => loaded += 1,
                Err(err) => {
                    tracing::warn!("skipping settings file {}: {}", path.display(), err);
                }
            }
        }
        tracing::debug!(dir = %dir.as_ref().display(), loaded, "loaded completion settings");
        Ok(loaded)
    }

    fn redirect_chain<'a>(&'a self, language: &'a str) -> Result<RedirectChain<'a>, SettingsError> {
        let mut hops: Vec<&str> = Vec::new();
        let mut current = language;
        loop {
            if hops.contains(&current) {
                return Err(SettingsError::RedirectCycle(current.to_string()));
            }
            hops.push(current);

            match self.defaults.languages.get(current) {
                Some(ConfigEntry::List(words)) => {
                    return Ok(RedirectChain {
                        hops,
                        words: words.as_slice(),
                    });
                }
                Some(ConfigEntry::Redirect(target)) => current = target.as_str(),
                Some(ConfigEntry::Invalid(value)) => {
                    tracing::warn!(
                        "ignoring malformed completion settings for '{}': {}",
                        current,
                        value
                    );
                    return Ok(RedirectChain { hops, words: &[] });
                }
                None => return Ok(RedirectChain { hops, words: &[] }),
            }
        }
    }

    fn user_words(&self, language: &str) -> &[String] {
        self.user
            .get(language)
            .map(|s| s.autocomplete.as_slice())
            .unwrap_or_default()
    }

    fn merge_list(&self, language: &str) -> &[String] {
        self.user
            .get(language)
            .and_then(|s| s.merge.get(language))
            .or_else(|| self.defaults.merge.get(language))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Resolve the static completion words for `language`.
    ///
    /// 1. The default list is found by following redirects from `language`.
    /// 2. The language's own `autocomplete` words are added; if it has none, the first
    ///    redirect target that has some is used instead.
    /// 3. Every language in the merge list contributes its default list and its own words.
    ///
    /// Default words come before per-language words; duplicates keep their first position.
    /// A redirect loop is reported as [`SettingsError::RedirectCycle`].
    pub fn resolve(&self, language: &str) -> Result<Vec<String>, SettingsError> {
        let chain = self.redirect_chain(language)?;

        let mut defaults: Vec<&String> = chain.words.iter().collect();
        let mut user: Vec<&String> = chain
            .hops
            .iter()
            .map(|hop| self.user_words(hop))
            .find(|words| !words.is_empty())
            .unwrap_or_default()
            .iter()
            .collect();

        for merged in self.merge_list(language) {
            let merged_chain = self.redirect_chain(merged)?;
            defaults.extend(merged_chain.words);
            user.extend(self.user_words(merged));
        }

        let mut seen = HashSet::new();
        Ok(defaults
            .into_iter()
            .chain(user)
            .filter(|word| seen.insert(*word))
            .cloned()
            .collect())
    }

    /// Static completion words for `language`, or none if its settings cannot be resolved.
    pub fn static_candidates(&self, language: &str) -> Vec<String> {
        match self.resolve(language) {
            Ok(words) => words,
            Err(err) => {
                tracing::warn!("no static completions for '{}': {}", language, err);
                Vec::new()
            }
        }
    }

    /// Static completion words for the language of a syntax definition path.
    pub fn static_candidates_for_syntax(&self, syntax_path: &str) -> Vec<String> {
        self.static_candidates(&language_from_syntax(syntax_path))
    }
}
