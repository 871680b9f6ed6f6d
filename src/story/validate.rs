use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::story::WordKind;

static LETTERS_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static LETTERS_SPACES_HYPHENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-]+$").unwrap());
static LETTERS_SPACES_APOSTROPHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s']+$").unwrap());

// Past tense verbs that don't end with -ed
pub const IRREGULAR_PAST_VERBS: [&str; 59] = [
    "went", "saw", "came", "found", "made", "took", "gave", "wrote", "drove", "flew",
    "ate", "drank", "ran", "swam", "built", "bought", "brought", "caught", "chose", "drew",
    "fell", "felt", "fought", "forgot", "got", "grew", "heard", "held", "kept", "knew",
    "left", "lost", "met", "paid", "put", "read", "rode", "said", "sat", "slept",
    "spoke", "stood", "thought", "threw", "understood", "woke", "wore", "won", "broke", "froze",
    "hid", "rose", "shook", "shrank", "sprang", "stole", "struck", "swore", "tore",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NonEmpty,
    SingleWord,
    LettersOnly,
    LettersSpacesHyphens,
    LettersSpacesApostrophes,
    MinLength(usize),
    PastTense,
    FutureTense,
    WillFormat,
    VerbForm,
}

impl Rule {
    fn check(self, text: &str) -> bool {
        match self {
            Rule::NonEmpty => !text.is_empty(),
            Rule::SingleWord => !text.contains(' '),
            Rule::LettersOnly => LETTERS_ONLY_RE.is_match(text),
            Rule::LettersSpacesHyphens => LETTERS_SPACES_HYPHENS_RE.is_match(text),
            Rule::LettersSpacesApostrophes => LETTERS_SPACES_APOSTROPHES_RE.is_match(text),
            Rule::MinLength(min) => text.chars().count() >= min,
            Rule::PastTense => {
                let lowered = text.to_lowercase();
                lowered.ends_with("ed") || IRREGULAR_PAST_VERBS.contains(&lowered.as_str())
            }
            Rule::FutureTense => text.to_lowercase().starts_with("will "),
            Rule::WillFormat => {
                let lowered = text.to_lowercase();
                lowered.starts_with("will ") && lowered.split_whitespace().count() >= 2
            }
            Rule::VerbForm => text.chars().count() >= 3,
        }
    }

    fn message(self, kind: WordKind) -> String {
        match self {
            Rule::NonEmpty => match kind {
                WordKind::Adjective => "Please enter an adjective - it cannot be empty!".to_string(),
                WordKind::Name => "Please enter a character name - it cannot be empty!".to_string(),
                WordKind::Place => "Please enter a place - it cannot be empty!".to_string(),
                WordKind::PastAction => "Please enter a past tense verb!".to_string(),
                WordKind::FutureAction => "Please enter a future tense action!".to_string(),
            },
            Rule::SingleWord => "Please enter a single adjective (one word).".to_string(),
            Rule::LettersOnly => "Please enter an adjective using only letters.".to_string(),
            Rule::LettersSpacesHyphens => {
                "Please enter a name using only letters, spaces, and hyphens.".to_string()
            }
            Rule::LettersSpacesApostrophes => {
                "Please enter a place using only letters, spaces, and apostrophes.".to_string()
            }
            Rule::MinLength(min) => match kind {
                WordKind::Adjective => {
                    format!("Please enter a longer adjective (at least {} letters).", min)
                }
                WordKind::Place => {
                    format!("Please enter a longer place name (at least {} characters).", min)
                }
                _ => format!("Please enter a longer {} (at least {} characters).", kind.key(), min),
            },
            Rule::PastTense => {
                "Please enter a valid past tense verb (ends with -ed or is irregular like 'went', 'found')"
                    .to_string()
            }
            Rule::FutureTense => {
                "Please enter a future tense phrase starting with 'will' (e.g., 'will discover', 'will explore')"
                    .to_string()
            }
            Rule::WillFormat => {
                "Please enter 'will' followed by an action (at least two words).".to_string()
            }
            Rule::VerbForm => "Please enter a longer verb (at least 3 letters).".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleViolation {
    pub rule: Rule,
    pub message: String,
}

pub fn rules_for(kind: WordKind) -> &'static [Rule] {
    match kind {
        WordKind::Adjective => &[
            Rule::NonEmpty,
            Rule::SingleWord,
            Rule::LettersOnly,
            Rule::MinLength(2),
        ],
        WordKind::Name => &[Rule::NonEmpty, Rule::LettersSpacesHyphens, Rule::MinLength(2)],
        WordKind::Place => &[
            Rule::NonEmpty,
            Rule::LettersSpacesApostrophes,
            Rule::MinLength(3),
        ],
        WordKind::PastAction => &[Rule::NonEmpty, Rule::PastTense, Rule::VerbForm],
        WordKind::FutureAction => &[Rule::NonEmpty, Rule::FutureTense, Rule::WillFormat],
    }
}

// Runs the rules in order and reports the first one that fails.
// On success the caller gets the trimmed word back.
pub fn validate(text: &str, kind: WordKind) -> Result<String, RuleViolation> {
    let cleaned = text.trim();

    for rule in rules_for(kind) {
        if !rule.check(cleaned) {
            return Err(RuleViolation {
                rule: *rule,
                message: rule.message(kind),
            });
        }
    }

    Ok(cleaned.to_string())
}

pub fn examples_for(kind: WordKind) -> &'static [&'static str] {
    match kind {
        WordKind::Adjective => &["brave", "curious", "mysterious", "adventurous", "creative"],
        WordKind::Name => &["Alex", "Maya", "Jordan", "Sam", "Taylor"],
        WordKind::Place => &[
            "small town",
            "big city",
            "magical forest",
            "space station",
            "underwater cave",
        ],
        WordKind::PastAction => &["discovered", "explored", "created", "found", "learned", "built"],
        WordKind::FutureAction => &[
            "will discover how to make dreams come true",
            "will find the courage to pursue goals",
            "will learn to overcome obstacles",
            "will discover strength within",
            "will find a way to succeed",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_adjective() {
        assert_eq!(validate("brave", WordKind::Adjective).unwrap(), "brave");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate("  curious  ", WordKind::Adjective).unwrap(), "curious");
    }

    #[test]
    fn rejects_empty_input() {
        let violation = validate("   ", WordKind::Adjective).unwrap_err();
        assert_eq!(violation.rule, Rule::NonEmpty);
        assert!(violation.message.contains("cannot be empty"));
    }

    #[test]
    fn rejects_multi_word_adjective() {
        let violation = validate("very brave", WordKind::Adjective).unwrap_err();
        assert_eq!(violation.rule, Rule::SingleWord);
    }

    #[test]
    fn rejects_adjective_with_digits() {
        let violation = validate("br4ve", WordKind::Adjective).unwrap_err();
        assert_eq!(violation.rule, Rule::LettersOnly);
    }

    #[test]
    fn rejects_one_letter_adjective() {
        let violation = validate("a", WordKind::Adjective).unwrap_err();
        assert_eq!(violation.rule, Rule::MinLength(2));
    }

    #[test]
    fn reports_the_first_failing_rule() {
        // Both SingleWord and LettersOnly fail here, SingleWord runs first
        let violation = validate("s0 brave", WordKind::Adjective).unwrap_err();
        assert_eq!(violation.rule, Rule::SingleWord);
    }

    #[test]
    fn accepts_name_with_spaces() {
        assert!(validate("Alex Smith", WordKind::Name).is_ok());
    }

    #[test]
    fn accepts_hyphenated_name() {
        assert!(validate("Mary-Jane", WordKind::Name).is_ok());
    }

    #[test]
    fn rejects_name_with_apostrophe() {
        let violation = validate("O'Brien", WordKind::Name).unwrap_err();
        assert_eq!(violation.rule, Rule::LettersSpacesHyphens);
    }

    #[test]
    fn accepts_place_with_apostrophe() {
        assert!(validate("dragon's den", WordKind::Place).is_ok());
    }

    #[test]
    fn rejects_place_with_digits() {
        let violation = validate("area 51", WordKind::Place).unwrap_err();
        assert_eq!(violation.rule, Rule::LettersSpacesApostrophes);
    }

    #[test]
    fn rejects_two_letter_place() {
        let violation = validate("NY", WordKind::Place).unwrap_err();
        assert_eq!(violation.rule, Rule::MinLength(3));
    }

    #[test]
    fn accepts_regular_past_verb() {
        assert!(validate("discovered", WordKind::PastAction).is_ok());
    }

    #[test]
    fn accepts_irregular_past_verb() {
        assert!(validate("went", WordKind::PastAction).is_ok());
    }

    #[test]
    fn past_tense_check_ignores_case() {
        assert!(validate("RAN", WordKind::PastAction).is_ok());
    }

    #[test]
    fn rejects_present_tense_verb() {
        let violation = validate("run", WordKind::PastAction).unwrap_err();
        assert_eq!(violation.rule, Rule::PastTense);
    }

    #[test]
    fn rejects_too_short_past_verb() {
        // "ed" alone slips through the suffix check, the length rule catches it
        let violation = validate("ed", WordKind::PastAction).unwrap_err();
        assert_eq!(violation.rule, Rule::VerbForm);
    }

    #[test]
    fn accepts_future_phrase() {
        assert!(validate("will explore", WordKind::FutureAction).is_ok());
    }

    #[test]
    fn future_tense_check_ignores_case() {
        assert!(validate("Will Explore", WordKind::FutureAction).is_ok());
    }

    #[test]
    fn rejects_future_phrase_without_will() {
        let violation = validate("explore tomorrow", WordKind::FutureAction).unwrap_err();
        assert_eq!(violation.rule, Rule::FutureTense);
    }

    #[test]
    fn rejects_bare_will() {
        let violation = validate("will", WordKind::FutureAction).unwrap_err();
        assert_eq!(violation.rule, Rule::FutureTense);
    }

    #[test]
    fn every_kind_starts_with_the_non_empty_rule() {
        for kind in WordKind::ALL {
            assert_eq!(rules_for(kind)[0], Rule::NonEmpty);
        }
    }

    #[test]
    fn every_kind_has_examples() {
        for kind in WordKind::ALL {
            assert!(examples_for(kind).len() >= 3);
        }
    }

    #[test]
    fn examples_pass_their_own_rules() {
        for kind in WordKind::ALL {
            for example in examples_for(kind) {
                assert!(
                    validate(example, kind).is_ok(),
                    "example {:?} failed for {:?}",
                    example,
                    kind
                );
            }
        }
    }

    #[test]
    fn irregular_verb_list_has_no_duplicates() {
        let mut verbs = IRREGULAR_PAST_VERBS.to_vec();
        verbs.sort_unstable();
        verbs.dedup();
        assert_eq!(verbs.len(), IRREGULAR_PAST_VERBS.len());
    }
}
