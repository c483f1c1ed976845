use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
/// The value stored for a language in the default settings.
pub enum ConfigEntry {
    /// The language's own completion words.
    List(Vec<String>),
    /// Use another language's words instead (e.g. `"HTML 5": "PHP"`).
    Redirect(String),
    /// Any other value (`"Ruby": 42`, a host setting such as `"font_size": 12`).
    ///
    /// Kept so one bad entry does not reject the whole document; it resolves to no words.
    Invalid(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// The shared default settings document.
///
/// ```json
/// {
///     "Python": ["import", "lambda", "return"],
///     "Python 3": "Python",
///     "merge": { "PHP": ["HTML"] }
/// }
/// ```
pub struct DefaultSettings {
    #[serde(default)]
    /// Languages whose words are added to another language's words, keyed by that language.
    pub merge: HashMap<String, Vec<String>>,

    #[serde(flatten)]
    /// Word lists and redirects keyed by language name.
    pub languages: HashMap<String, ConfigEntry>,
}

impl DefaultSettings {
    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn extend(&mut self, other: DefaultSettings) {
        self.merge.extend(other.merge);
        self.languages.extend(other.languages);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// A language's own settings document (`<Language>.sublime-settings`).
///
/// Keys other than `autocomplete` and `merge` belong to the host and are ignored.
pub struct UserSettings {
    #[serde(default)]
    /// Extra completion words for the language.
    pub autocomplete: Vec<String>,

    #[serde(default)]
    /// Overrides the default `merge` list for the keyed language.
    pub merge: HashMap<String, Vec<String>>,
}
