use crate::dice::Term;
use crate::error::Error;
use crate::error::Result;
use std::str::FromStr;

const TERM_SEPARATOR: char = '+';
const HIT_SIGIL: char = '!';
const THRESHOLD_SIGIL: char = '>';

/// Optional trailing modifier of a roll command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    /// `>t`: the summed total must meet or beat `t`
    SuccessThreshold(i64),
    /// `!h`, optionally followed by `>s`: count the dice meeting `h`,
    /// then compare the count to `s`
    HitThreshold { hit: i64, success: Option<i64> },
}

/// A split roll command: the dice expression, its terms and the modifier
///
/// The first `>` always splits off the success threshold, then the first `!`
/// of what remains splits off the hit threshold, so `3d6!5>2` counts hits
/// of 5 or more and succeeds on 2 hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    expr: String,
    terms: Vec<Term>,
    modifier: Modifier,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::EmptyCommand);
        }
        let (expr, success) = match input.split_once(THRESHOLD_SIGIL) {
            Some((expr, value)) => (expr, Some(parse_suffix(value, Error::InvalidThreshold)?)),
            None => (input, None),
        };
        let (expr, hit) = match expr.split_once(HIT_SIGIL) {
            Some((expr, value)) => (expr, Some(parse_suffix(value, Error::InvalidHitValue)?)),
            None => (expr, None),
        };
        let modifier = match (hit, success) {
            (Some(hit), success) => Modifier::HitThreshold { hit, success },
            (None, Some(threshold)) => Modifier::SuccessThreshold(threshold),
            (None, None) => Modifier::None,
        };
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(Error::EmptyCommand);
        }
        let terms = expr
            .split(TERM_SEPARATOR)
            .map(Term::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Command {
            expr: expr.to_owned(),
            terms,
            modifier,
        })
    }

    /// The dice expression without its modifier
    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

fn parse_suffix(value: &str, error: fn(String) -> Error) -> Result<i64> {
    let value = value.trim();
    value.parse::<i64>().map_err(|_| error(value.to_owned()))
}
