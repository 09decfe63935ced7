use alloc::vec::Vec;
use core::ops::Range;

use crate::token::Token;

/// Number of sentinel tokens on each side of a sentence.
/// Rules never look further than 16 positions away.
pub const PAD_WIDTH: usize = 20;

static PAD: Token = Token::pad();

/// A token stream bracketed by sentinel pads.
///
/// Indices handed to rules are positions in the padded buffer; `range()` yields the
/// positions of the real tokens. Reads outside the buffer resolve to a pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(words: Vec<Token>) -> Self {
        let mut tokens = Vec::with_capacity(words.len() + 2 * PAD_WIDTH);
        tokens.extend((0..PAD_WIDTH).map(|_| Token::pad()));
        tokens.extend(words);
        tokens.extend((0..PAD_WIDTH).map(|_| Token::pad()));
        Self { tokens }
    }

    /// Builds a sentence from one POS-tagged line (`word_TAG word_TAG ...`).
    pub fn parse(line: &str) -> Self {
        Self::new(
            line.split(' ')
                .filter(|raw| !raw.is_empty())
                .map(Token::parse)
                .collect(),
        )
    }

    /// Number of real tokens.
    pub fn len(&self) -> usize {
        self.tokens.len() - 2 * PAD_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Padded positions of the real tokens.
    pub fn range(&self) -> Range<usize> {
        PAD_WIDTH..self.tokens.len() - PAD_WIDTH
    }

    /// Token at `i + offset`; a pad when that falls outside the buffer.
    pub fn at(&self, i: usize, offset: isize) -> &Token {
        i.checked_add_signed(offset)
            .and_then(|j| self.tokens.get(j))
            .unwrap_or(&PAD)
    }

    /// Mutable token at `i + offset`, if it exists and is not a pad.
    pub fn at_mut(&mut self, i: usize, offset: isize) -> Option<&mut Token> {
        i.checked_add_signed(offset)
            .and_then(|j| self.tokens.get_mut(j))
            .filter(|t| !t.is_pad())
    }

    pub fn retag(&mut self, i: usize, offset: isize, tag: &str) {
        if let Some(token) = self.at_mut(i, offset) {
            token.retag(tag);
        }
    }

    pub fn append(&mut self, i: usize, offset: isize, tag: &str) {
        if let Some(token) = self.at_mut(i, offset) {
            token.append(tag);
        }
    }

    /// The real tokens, pads excluded.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens[self.range()]
    }

    /// Plain-word projection of the real tokens.
    pub fn words(&self) -> Vec<&str> {
        self.tokens().iter().map(|t| t.word.as_str()).collect()
    }

    /// Strips the pads.
    pub fn into_tokens(mut self) -> Vec<Token> {
        let end = self.tokens.len() - PAD_WIDTH;
        self.tokens.truncate(end);
        self.tokens.drain(..PAD_WIDTH);
        self.tokens
    }
}
