use crate::dice::Token;
use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

const DICE_SIGIL: char = 'd';
const MODIFIER_SIGILS: [char; 2] = ['!', '>'];

/// Pest parser
#[derive(Parser)]
#[grammar = "rollbot.pest"]
pub(crate) struct Parser;

impl Parser {
    /// Classify a single term as a constant or a group of dice
    pub(crate) fn parse_term(term: &str) -> Result<Token> {
        let pair = Self::parse(Rule::term, term)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .and_then(|pair| pair.into_inner().next())
            .ok_or_else(|| Self::reject(term))?;
        match pair.as_rule() {
            Rule::integer => pair
                .as_str()
                .parse::<i64>()
                .map(Token::Literal)
                .map_err(|_| Error::InvalidInteger(term.to_owned())),
            Rule::dice => Self::extract_dice(pair, term),
            _ => unreachable!("{:?}", pair),
        }
    }

    fn extract_dice(dice: Pair<Rule>, term: &str) -> Result<Token> {
        let invalid = || Error::InvalidDiceSyntax(term.to_owned());
        let (mut count, mut faces) = (1, 20);
        for inner in dice.into_inner() {
            let value = inner.as_str().parse::<i64>().map_err(|_| invalid())?;
            match inner.as_rule() {
                Rule::nb_dice => count = value,
                Rule::sides => faces = value,
                _ => unreachable!("{:?}", inner),
            }
        }
        if count <= 0 || faces <= 0 {
            return Err(invalid());
        }
        Ok(Token::Dice {
            count: count as u64,
            faces: faces as u64,
        })
    }

    fn reject(term: &str) -> Error {
        if term.contains(MODIFIER_SIGILS) {
            Error::UnexpectedModifierPosition(term.to_owned())
        } else if term.contains(DICE_SIGIL) {
            Error::InvalidDiceSyntax(term.to_owned())
        } else {
            Error::InvalidInteger(term.to_owned())
        }
    }
}
