use crate::error::Error;
use crate::error::Result;
use crate::parser::Parser;
use std::str::FromStr;

pub(crate) mod limits {
    /// Arbitrary limit to avoid oom
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
}

/// A classified term: either a flat constant or a group of dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(i64),
    Dice { count: u64, faces: u64 },
}

impl Token {
    pub fn is_dice(&self) -> bool {
        matches!(self, Token::Dice { .. })
    }
}

/// Keep one `+` separated term with its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    text: String,
    token: Token,
}

impl Term {
    /// Parse and classify a term, `NdM`, `dM`, `Nd`, `d` or a plain integer
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        let token = Parser::parse_term(text)?;
        if let Token::Dice { count, .. } = token {
            if count > limits::MAX_DICE_AMOUNT {
                return Err(Error::TooManyDice {
                    term: text.to_owned(),
                    limit: limits::MAX_DICE_AMOUNT,
                });
            }
        }
        Ok(Term {
            text: text.to_owned(),
            token,
        })
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Term::parse(s)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
