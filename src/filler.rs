use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hedging and filler words that get their own highlight when inserted
///
/// This is a closed set. Callers that need a different vocabulary pass a
/// [`FillerSet`] instead of changing this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillerWord {
    Really,
    Actually,
    Basically,
    Honestly,
    Pretty,
    Quite,
    Very,
    Like,
    Just,
    So,
    Well,
    Now,
}

impl FillerWord {
    /// Every variant, in declaration order
    pub const ALL: [FillerWord; 12] = [
        FillerWord::Really,
        FillerWord::Actually,
        FillerWord::Basically,
        FillerWord::Honestly,
        FillerWord::Pretty,
        FillerWord::Quite,
        FillerWord::Very,
        FillerWord::Like,
        FillerWord::Just,
        FillerWord::So,
        FillerWord::Well,
        FillerWord::Now,
    ];

    /// Lowercase spelling of the word
    pub fn as_str(&self) -> &'static str {
        match self {
            FillerWord::Really => "really",
            FillerWord::Actually => "actually",
            FillerWord::Basically => "basically",
            FillerWord::Honestly => "honestly",
            FillerWord::Pretty => "pretty",
            FillerWord::Quite => "quite",
            FillerWord::Very => "very",
            FillerWord::Like => "like",
            FillerWord::Just => "just",
            FillerWord::So => "so",
            FillerWord::Well => "well",
            FillerWord::Now => "now",
        }
    }

    /// Classify a word, ignoring case
    ///
    /// The whole word must match; surrounding punctuation makes it a
    /// non-filler.
    ///
    /// # Examples
    /// ```
    /// use rewrite_diff::FillerWord;
    /// assert_eq!(FillerWord::from_word("Actually"), Some(FillerWord::Actually));
    /// assert_eq!(FillerWord::from_word("actually,"), None);
    /// ```
    pub fn from_word(word: &str) -> Option<FillerWord> {
        let lowered = word.to_lowercase();
        FillerWord::ALL
            .into_iter()
            .find(|filler| filler.as_str() == lowered)
    }
}

impl std::fmt::Display for FillerWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True iff `word` is one of the built-in filler words
pub fn is_filler(word: &str) -> bool {
    FillerWord::from_word(word).is_some()
}

/// The set of words the renderer treats as filler
///
/// Defaults to the built-in [`FillerWord`] vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerSet {
    words: BTreeSet<String>,
}

impl FillerSet {
    /// Build a set from arbitrary words; matching stays case-insensitive
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// A set that classifies nothing as filler
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for FillerSet {
    fn default() -> Self {
        Self::from_words(FillerWord::ALL.iter().map(FillerWord::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_word_is_filler() {
        for word in [
            "really", "actually", "basically", "honestly", "pretty", "quite", "very", "like",
            "just", "so", "well", "now",
        ] {
            assert!(is_filler(word), "{word} should be filler");
        }
    }

    #[test]
    fn test_is_filler_case_insensitive() {
        assert!(is_filler("ACTUALLY"));
        assert!(is_filler("Honestly"));
    }

    #[test]
    fn test_non_filler() {
        assert!(!is_filler("quickly"));
        assert!(!is_filler(""));
        assert!(!is_filler("really!"));
        assert!(!is_filler("soo"));
    }

    #[test]
    fn test_from_word() {
        assert_eq!(FillerWord::from_word("well"), Some(FillerWord::Well));
        assert_eq!(FillerWord::from_word("WELL"), Some(FillerWord::Well));
        assert_eq!(FillerWord::from_word("wells"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FillerWord::Basically.to_string(), "basically");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FillerWord::Pretty).unwrap();
        assert_eq!(json, "\"pretty\"");

        let word: FillerWord = serde_json::from_str("\"now\"").unwrap();
        assert_eq!(word, FillerWord::Now);
    }

    #[test]
    fn test_default_set_matches_builtin() {
        let set = FillerSet::default();

        assert_eq!(set.len(), FillerWord::ALL.len());
        for filler in FillerWord::ALL {
            assert!(set.contains(filler.as_str()));
        }
        assert!(set.contains("Just"));
        assert!(!set.contains("quickly"));
    }

    #[test]
    fn test_custom_set() {
        let set = FillerSet::from_words(["Kinda", "sorta"]);

        assert!(set.contains("kinda"));
        assert!(set.contains("SORTA"));
        assert!(!set.contains("really"));
    }

    #[test]
    fn test_full_unicode_lowercase() {
        // KELVIN SIGN lowercases to `k`
        assert!(is_filler("li\u{212A}e"));
        assert!(FillerSet::default().contains("li\u{212A}e"));
    }

    #[test]
    fn test_empty_set() {
        let set = FillerSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("really"));
    }
}
