//! Lexer (tokenizer) for natural-language filter queries.
//!
//! Normalization lower-cases the input and treats every character that is not
//! alphanumeric as a separator, so `non-palindromic`, `"z"` and `single-word`
//! all split into plain words. Determiners that never change a query's meaning
//! are dropped here so rules do not have to skip them.

use std::iter::Peekable;
use std::str::Chars;

/// Words removed from the token stream before matching.
const IGNORED_WORDS: &[&str] = &["all", "the", "an"];

/// A word in a normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lower-cased word.
    pub text: String,
    /// The byte offset of the word in the original query.
    pub offset: usize,
}

impl Token {
    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the character if this token is a single alphabetic character.
    pub fn as_letter(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Some(c),
            _ => None,
        }
    }

    /// Returns true if the token is one of `words`.
    pub fn is_any(&self, words: &[&str]) -> bool {
        words.contains(&self.text.as_str())
    }
}

/// Lexer for turning a query into a sequence of normalized words.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the input string.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            self.position += ch.len_utf8();
        }
        c
    }

    /// Skips separator characters.
    fn skip_separators(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() {
                break;
            }
            self.next_char();
        }
    }

    /// Returns the next word, or None at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_separators();
        self.chars.peek()?;

        let offset = self.position;
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            text.extend(c.to_lowercase());
            self.next_char();
        }
        Some(Token { text, offset })
    }

    /// Collects every token, dropping ignored determiners.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            if !token.is_any(IGNORED_WORDS) {
                tokens.push(token);
            }
        }
        tokens
    }
}

/// Tokenizes `input` into normalized words.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
