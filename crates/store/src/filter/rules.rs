//! Rule-based matcher for natural-language filter queries.
//!
//! Each [`Rule`] scans the whole token sequence for one phrase shape and emits
//! a [`RawMatch`] per occurrence. Rules are independent: a query can trigger
//! any number of them, and the same rule can fire more than once. Resolving
//! overlapping or contradictory matches is the validator's job.

use std::fmt;
use std::ops::Range;

use super::error::{FilterError, FilterResult};
use super::lexer::{tokenize, Token};
use super::schema::{FilterKey, FilterValue, ValidatedFilterSet};
use super::validator::validate;

/// Number words accepted wherever a quantity is expected.
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Words that negate the phrase after them.
const NEGATIONS: &[&str] = &["not", "non", "no"];

/// Words that may sit between a negation and the phrase it negates.
const NEGATION_FILLERS: &[&str] = &["a", "is", "are", "be"];

/// Contraction stems that negate when followed by `t` (`isn't` lexes as `isn t`).
const NEGATED_CONTRACTIONS: &[&str] = &["isn", "aren", "don", "doesn", "wasn", "weren"];

/// Units that make a quantity a word count.
const WORD_UNITS: &[&str] = &["word", "words"];

/// Optional units after a length quantity.
const LENGTH_UNITS: &[&str] = &["characters", "character", "chars", "char", "letters", "long"];

/// Words that end a comparison phrase right before its quantity.
const COMPARISON_TAILS: &[&str] = &["than", "least", "most"];

/// Words that introduce a containment phrase.
const CONTAIN_TRIGGERS: &[&str] = &[
    "contain",
    "contains",
    "containing",
    "include",
    "includes",
    "including",
];

/// Nouns that may precede the letter in a containment phrase.
const LETTER_NOUNS: &[&str] = &["letter", "character", "char"];

/// Words after which a leading `a` is an article, not the letter.
const ARTICLE_NOUNS: &[&str] = &["letter", "character", "char", "vowel"];

/// Fixed phrases that stand for a specific character.
const VOWEL_ALIASES: &[(&[&str], char)] = &[(&["first", "vowel"], 'a'), (&["last", "vowel"], 'u')];

/// How a length comparison maps its quantity onto a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// Strictly greater: `min_length = N + 1`.
    Above,
    /// Inclusive lower bound: `min_length = N`.
    AtLeast,
    /// Strictly less: `max_length = N - 1`.
    Below,
    /// Inclusive upper bound: `max_length = N`.
    AtMost,
}

impl Bound {
    fn resolve(self, n: u32) -> Option<(FilterKey, u32)> {
        match self {
            Bound::Above => n.checked_add(1).map(|v| (FilterKey::MinLength, v)),
            Bound::AtLeast => Some((FilterKey::MinLength, n)),
            Bound::Below => n.checked_sub(1).map(|v| (FilterKey::MaxLength, v)),
            Bound::AtMost => Some((FilterKey::MaxLength, n)),
        }
    }

    /// The bound described by `not <comparison>`.
    fn negate(self) -> Self {
        match self {
            Bound::Above => Bound::AtMost,
            Bound::AtLeast => Bound::Below,
            Bound::Below => Bound::AtLeast,
            Bound::AtMost => Bound::Above,
        }
    }
}

/// Comparison phrases, longest first so `no more than` wins over `more than`.
const LENGTH_COMPARATORS: &[(&[&str], Bound)] = &[
    (&["no", "fewer", "than"], Bound::AtLeast),
    (&["no", "less", "than"], Bound::AtLeast),
    (&["no", "shorter", "than"], Bound::AtLeast),
    (&["no", "more", "than"], Bound::AtMost),
    (&["no", "longer", "than"], Bound::AtMost),
    (&["longer", "than"], Bound::Above),
    (&["more", "than"], Bound::Above),
    (&["greater", "than"], Bound::Above),
    (&["shorter", "than"], Bound::Below),
    (&["fewer", "than"], Bound::Below),
    (&["less", "than"], Bound::Below),
    (&["at", "least"], Bound::AtLeast),
    (&["at", "most"], Bound::AtMost),
];

/// Identifies the rule that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Palindrome,
    SingleWord,
    WordCount,
    LengthComparison,
    ContainsCharacter,
    VowelAlias,
}

impl RuleId {
    /// Returns the rule's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Palindrome => "palindrome",
            RuleId::SingleWord => "single_word",
            RuleId::WordCount => "word_count",
            RuleId::LengthComparison => "length_comparison",
            RuleId::ContainsCharacter => "contains_character",
            RuleId::VowelAlias => "vowel_alias",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate filter assignment extracted by a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// The filter key.
    pub key: FilterKey,
    /// The extracted value.
    pub value: FilterValue,
    /// The rule that produced this match.
    pub rule: RuleId,
    /// Token indices covered by the matched phrase.
    pub span: Range<usize>,
}

/// What a rule's scanner reports for each phrase it finds.
struct Hit {
    key: FilterKey,
    value: FilterValue,
    span: Range<usize>,
}

impl Hit {
    fn new(key: FilterKey, value: FilterValue, span: Range<usize>) -> Self {
        Self { key, value, span }
    }
}

/// A phrase shape and the scanner that extracts it.
struct Rule {
    id: RuleId,
    scan: fn(&[Token]) -> Vec<Hit>,
}

/// Every rule, in the order matches are reported.
const RULES: &[Rule] = &[
    Rule {
        id: RuleId::Palindrome,
        scan: scan_palindrome,
    },
    Rule {
        id: RuleId::SingleWord,
        scan: scan_single_word,
    },
    Rule {
        id: RuleId::WordCount,
        scan: scan_word_count,
    },
    Rule {
        id: RuleId::LengthComparison,
        scan: scan_length_comparison,
    },
    Rule {
        id: RuleId::ContainsCharacter,
        scan: scan_contains_character,
    },
    Rule {
        id: RuleId::VowelAlias,
        scan: scan_vowel_alias,
    },
];

/// Interpreter for natural-language filter queries.
///
/// # Example
///
/// ```
/// use string_store_rs::filter::{FilterSet, QueryInterpreter};
///
/// let set = QueryInterpreter::parse("all single word palindromic strings").unwrap();
/// assert_eq!(
///     set.parsed_filters,
///     FilterSet {
///         is_palindrome: Some(true),
///         word_count: Some(1),
///         ..Default::default()
///     }
/// );
/// ```
pub struct QueryInterpreter;

impl QueryInterpreter {
    /// Extracts every candidate filter assignment from `query`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Unparseable` if the query is empty or no rule
    /// matches anywhere in it.
    pub fn interpret(query: &str) -> FilterResult<Vec<RawMatch>> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Err(FilterError::unparseable("query is empty"));
        }

        let matches: Vec<RawMatch> = RULES
            .iter()
            .flat_map(|rule| {
                (rule.scan)(&tokens).into_iter().map(|hit| RawMatch {
                    key: hit.key,
                    value: hit.value,
                    rule: rule.id,
                    span: hit.span,
                })
            })
            .collect();

        if matches.is_empty() {
            tracing::debug!(query, "no filter rule matched");
            return Err(FilterError::unparseable("unrecognized query"));
        }

        for m in &matches {
            tracing::debug!(rule = %m.rule, key = %m.key, value = %m.value, span = ?m.span, "filter rule matched");
        }
        Ok(matches)
    }

    /// Interprets and validates `query` in one step.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Unparseable` when nothing is recognized, and
    /// `FilterError::ConflictingValues` or `FilterError::ImpossibleLengthRange`
    /// when the recognized filters contradict each other.
    pub fn parse(query: &str) -> FilterResult<ValidatedFilterSet> {
        let matches = Self::interpret(query)?;
        validate(query, &matches)
    }
}

/// Parses a quantity written as digits or a number word.
fn quantity(token: &Token) -> Option<u32> {
    let text = token.as_str();
    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, n)| *n)
}

/// Returns true if `phrase` occurs at `tokens[start..]`.
fn phrase_at(tokens: &[Token], start: usize, phrase: &[&str]) -> bool {
    tokens
        .get(start..start + phrase.len())
        .is_some_and(|window| window.iter().zip(phrase).all(|(t, w)| t.as_str() == *w))
}

/// Returns where a negation of the phrase starting at `tokens[at]` begins.
///
/// Walks back over filler words, so `not a palindrome` and `aren't
/// palindromes` both count.
fn negation_before(tokens: &[Token], at: usize) -> Option<usize> {
    let mut j = at;
    while j > 0 {
        j -= 1;
        let token = &tokens[j];
        if token.is_any(NEGATIONS) {
            return Some(j);
        }
        if token.as_str() == "t" {
            return j
                .checked_sub(1)
                .filter(|&stem| tokens[stem].is_any(NEGATED_CONTRACTIONS));
        }
        if !token.is_any(NEGATION_FILLERS) {
            return None;
        }
    }
    None
}

fn scan_palindrome(tokens: &[Token]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let (prefixed, stem) = match token.as_str().strip_prefix("non") {
            Some(rest) => (true, rest),
            None => (false, token.as_str()),
        };
        if !stem.starts_with("palindrom") {
            continue;
        }

        let negated = negation_before(tokens, i);
        hits.push(Hit::new(
            FilterKey::IsPalindrome,
            FilterValue::Bool(!(prefixed || negated.is_some())),
            negated.unwrap_or(i)..i + 1,
        ));
    }
    hits
}

fn scan_single_word(tokens: &[Token]) -> Vec<Hit> {
    (0..tokens.len())
        .filter(|&i| {
            tokens[i].as_str() == "single" && tokens.get(i + 1).is_some_and(|t| t.is_any(WORD_UNITS))
        })
        .map(|i| Hit::new(FilterKey::WordCount, FilterValue::Int(1), i..i + 2))
        .collect()
}

fn scan_word_count(tokens: &[Token]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for i in 0..tokens.len() {
        if !tokens.get(i + 1).is_some_and(|t| t.is_any(WORD_UNITS)) {
            continue;
        }
        // "more than 3 words" compares, it does not fix the count
        if i > 0 && tokens[i - 1].is_any(COMPARISON_TAILS) {
            continue;
        }
        if let Some(n) = quantity(&tokens[i]) {
            hits.push(Hit::new(FilterKey::WordCount, FilterValue::Int(n), i..i + 2));
        }
    }
    hits
}

fn scan_length_comparison(tokens: &[Token]) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let found = LENGTH_COMPARATORS
            .iter()
            .filter(|(phrase, _)| phrase_at(tokens, i, phrase))
            .find_map(|(phrase, bound)| {
                let at = i + phrase.len();
                let n = quantity(tokens.get(at)?)?;
                let unit = tokens.get(at + 1);
                if unit.is_some_and(|t| t.is_any(WORD_UNITS)) {
                    return None;
                }
                let negated = negation_before(tokens, i);
                let bound = if negated.is_some() {
                    bound.negate()
                } else {
                    *bound
                };
                let (key, value) = bound.resolve(n)?;
                let end = if unit.is_some_and(|t| t.is_any(LENGTH_UNITS)) {
                    at + 2
                } else {
                    at + 1
                };
                Some(Hit::new(key, FilterValue::Int(value), negated.unwrap_or(i)..end))
            });

        match found {
            Some(hit) => {
                i = hit.span.end;
                hits.push(hit);
            }
            None => i += 1,
        }
    }
    hits
}

fn scan_contains_character(tokens: &[Token]) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let mut at = i + 1;
        if tokens[i].is_any(CONTAIN_TRIGGERS) {
            if tokens.get(at).is_some_and(|t| t.as_str() == "a")
                && tokens.get(at + 1).is_some_and(|t| t.is_any(ARTICLE_NOUNS))
            {
                at += 1;
            }
            if tokens.get(at).is_some_and(|t| t.is_any(LETTER_NOUNS)) {
                at += 1;
            }
        } else if !tokens[i].is_any(LETTER_NOUNS) {
            i += 1;
            continue;
        }

        match tokens.get(at).and_then(Token::as_letter) {
            // "not containing z" has no filter, so the phrase is dropped
            Some(_) if negation_before(tokens, i).is_some() => i = at + 1,
            Some(c) => {
                hits.push(Hit::new(
                    FilterKey::ContainsCharacter,
                    FilterValue::Char(c),
                    i..at + 1,
                ));
                i = at + 1;
            }
            None => i += 1,
        }
    }
    hits
}

fn scan_vowel_alias(tokens: &[Token]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for i in 0..tokens.len() {
        let negated = i > 0
            && tokens[i - 1].is_any(CONTAIN_TRIGGERS)
            && negation_before(tokens, i - 1).is_some();
        if negated {
            continue;
        }
        for (phrase, c) in VOWEL_ALIASES {
            if phrase_at(tokens, i, phrase) {
                hits.push(Hit::new(
                    FilterKey::ContainsCharacter,
                    FilterValue::Char(*c),
                    i..i + phrase.len(),
                ));
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(scanner: fn(&[Token]) -> Vec<Hit>, input: &str) -> Vec<(FilterKey, FilterValue)> {
        scanner(&tokenize(input))
            .into_iter()
            .map(|h| (h.key, h.value))
            .collect()
    }

    #[test]
    fn test_quantity_digits_and_words() {
        let tokens = tokenize("10 three eleven 99999999999");
        assert_eq!(quantity(&tokens[0]), Some(10));
        assert_eq!(quantity(&tokens[1]), Some(3));
        assert_eq!(quantity(&tokens[2]), None);
        // Overflow is not a number
        assert_eq!(quantity(&tokens[3]), None);
    }

    #[test]
    fn test_palindrome_negations() {
        assert_eq!(
            scan(scan_palindrome, "palindromes"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(true))]
        );
        assert_eq!(
            scan(scan_palindrome, "strings that are not palindromic"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(false))]
        );
        assert_eq!(
            scan(scan_palindrome, "non-palindromic strings"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(false))]
        );
        assert_eq!(
            scan(scan_palindrome, "nonpalindromic strings"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(false))]
        );
    }

    #[test]
    fn test_palindrome_negation_skips_fillers() {
        for input in [
            "strings that are not a palindrome",
            "not a palindrome",
            "strings that aren't palindromes",
            "isn't a palindrome",
            "no palindromes",
        ] {
            assert_eq!(
                scan(scan_palindrome, input),
                vec![(FilterKey::IsPalindrome, FilterValue::Bool(false))],
                "input: {input}"
            );
        }
        // A filler alone does not negate
        assert_eq!(
            scan(scan_palindrome, "strings that are a palindrome"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(true))]
        );
        // A bare `t` only negates after a contraction stem
        assert_eq!(
            scan(scan_palindrome, "letter t palindromes"),
            vec![(FilterKey::IsPalindrome, FilterValue::Bool(true))]
        );
    }

    #[test]
    fn test_contraction_span_covers_stem() {
        let hits = scan_palindrome(&tokenize("aren't palindromes"));
        assert_eq!(hits[0].span, 0..3);
    }

    #[test]
    fn test_negation_span_covers_negating_word() {
        let hits = scan_palindrome(&tokenize("not palindromic"));
        assert_eq!(hits[0].span, 0..2);
    }

    #[test]
    fn test_word_count_skips_comparisons() {
        assert!(scan(scan_word_count, "more than 3 words").is_empty());
        assert_eq!(
            scan(scan_word_count, "two word strings"),
            vec![(FilterKey::WordCount, FilterValue::Int(2))]
        );
    }

    #[test]
    fn test_length_comparison_prefers_longest_phrase() {
        assert_eq!(
            scan(scan_length_comparison, "no more than 5 characters"),
            vec![(FilterKey::MaxLength, FilterValue::Int(5))]
        );
        assert_eq!(
            scan(scan_length_comparison, "no less than 5"),
            vec![(FilterKey::MinLength, FilterValue::Int(5))]
        );
    }

    #[test]
    fn test_length_comparison_negated() {
        assert_eq!(
            scan(scan_length_comparison, "not longer than 5 characters"),
            vec![(FilterKey::MaxLength, FilterValue::Int(5))]
        );
        assert_eq!(
            scan(scan_length_comparison, "not more than 5"),
            vec![(FilterKey::MaxLength, FilterValue::Int(5))]
        );
        assert_eq!(
            scan(scan_length_comparison, "not shorter than 5"),
            vec![(FilterKey::MinLength, FilterValue::Int(5))]
        );
        assert_eq!(
            scan(scan_length_comparison, "not fewer than 5"),
            vec![(FilterKey::MinLength, FilterValue::Int(5))]
        );
        assert_eq!(
            scan(scan_length_comparison, "isn't at least 5"),
            vec![(FilterKey::MaxLength, FilterValue::Int(4))]
        );
        assert_eq!(
            scan(scan_length_comparison, "not at most 5"),
            vec![(FilterKey::MinLength, FilterValue::Int(6))]
        );
        let hits = scan_length_comparison(&tokenize("not longer than 5"));
        assert_eq!(hits[0].span, 0..4);
    }

    #[test]
    fn test_length_comparison_rejects_word_unit() {
        assert!(scan(scan_length_comparison, "more than 3 words").is_empty());
    }

    #[test]
    fn test_length_comparison_underflow_is_non_match() {
        assert!(scan(scan_length_comparison, "shorter than 0 characters").is_empty());
    }

    #[test]
    fn test_length_comparison_span_includes_unit() {
        let hits = scan_length_comparison(&tokenize("longer than 10 characters"));
        assert_eq!(hits[0].span, 0..4);
        let hits = scan_length_comparison(&tokenize("longer than 10"));
        assert_eq!(hits[0].span, 0..3);
    }

    #[test]
    fn test_contains_character_forms() {
        for input in [
            "containing the letter z",
            "contains z",
            "contain letter z",
            "with the letter z",
            "including the character 'z'",
        ] {
            assert_eq!(
                scan(scan_contains_character, input),
                vec![(FilterKey::ContainsCharacter, FilterValue::Char('z'))],
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_contains_character_needs_single_letter() {
        assert!(scan(scan_contains_character, "containing the letter zz").is_empty());
        assert!(scan(scan_contains_character, "containing 7").is_empty());
        assert!(scan(scan_contains_character, "contain the first vowel").is_empty());
    }

    #[test]
    fn test_contains_character_skips_article() {
        assert_eq!(
            scan(scan_contains_character, "containing a letter z"),
            vec![(FilterKey::ContainsCharacter, FilterValue::Char('z'))]
        );
        assert!(scan(scan_contains_character, "containing a vowel").is_empty());
        // Without a noun after it, `a` is the letter
        assert_eq!(
            scan(scan_contains_character, "containing a"),
            vec![(FilterKey::ContainsCharacter, FilterValue::Char('a'))]
        );
    }

    #[test]
    fn test_contains_character_negated_is_dropped() {
        assert!(scan(scan_contains_character, "not containing the letter z").is_empty());
        assert!(scan(scan_contains_character, "doesn't contain z").is_empty());
        assert!(scan(scan_vowel_alias, "not containing the first vowel").is_empty());
    }

    #[test]
    fn test_vowel_aliases() {
        assert_eq!(
            scan(scan_vowel_alias, "the first vowel"),
            vec![(FilterKey::ContainsCharacter, FilterValue::Char('a'))]
        );
        assert_eq!(
            scan(scan_vowel_alias, "the last vowel"),
            vec![(FilterKey::ContainsCharacter, FilterValue::Char('u'))]
        );
    }

    #[test]
    fn test_interpret_reports_rule_ids() {
        let matches = QueryInterpreter::interpret("single word palindromic strings").unwrap();
        let rules: Vec<RuleId> = matches.iter().map(|m| m.rule).collect();
        assert_eq!(rules, vec![RuleId::Palindrome, RuleId::SingleWord]);
    }

    #[test]
    fn test_interpret_empty_query() {
        let err = QueryInterpreter::interpret("   ").unwrap_err();
        assert_eq!(err, FilterError::unparseable("query is empty"));
    }
}
