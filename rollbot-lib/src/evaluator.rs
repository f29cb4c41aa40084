use crate::command::Command;
use crate::command::Modifier;
use crate::dice::Term;
use crate::dice::Token;
use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::roll::Hits;
use crate::roll::Outcome;
use tracing::trace;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Values generated by a single term, in throw order
    pub(crate) fn eval_term<S: roll::Source>(token: Token, source: &mut S) -> Vec<i64> {
        match token {
            Token::Literal(value) => vec![value],
            Token::Dice { count, faces } => Self::roll(count, faces, source),
        }
    }

    fn eval_terms<'a, S, I>(terms: I, source: &mut S) -> Vec<i64>
    where
        S: roll::Source,
        I: IntoIterator<Item = &'a Term>,
    {
        terms
            .into_iter()
            .flat_map(|term| Self::eval_term(term.token(), source))
            .collect()
    }

    /// Sum without wrapping, failing on the whole command
    fn sum(values: &[i64], command: &Command) -> Result<i64> {
        values
            .iter()
            .try_fold(0i64, |acc, &v| acc.checked_add(v))
            .ok_or_else(|| Error::Overflow(command.expr().to_owned()))
    }

    fn eval_hits<S: roll::Source>(
        command: &Command,
        hit: i64,
        success_threshold: Option<i64>,
        source: &mut S,
    ) -> Result<Hits> {
        let (dice, constants): (Vec<&Term>, Vec<&Term>) =
            command.terms().iter().partition(|term| term.token().is_dice());
        let values = Self::eval_terms(dice, source);
        let modifier = Self::sum(&Self::eval_terms(constants, source), command)?;
        let modified = values
            .iter()
            .map(|v| v.checked_add(modifier))
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| Error::Overflow(command.expr().to_owned()))?;
        let count = modified.iter().filter(|&&v| v >= hit).count();
        Ok(Hits {
            expr: command.expr().to_owned(),
            values,
            modified,
            hit,
            count,
            success_threshold,
        })
    }

    // compute a whole roll command
    pub(crate) fn eval<S: roll::Source>(command: &Command, source: &mut S) -> Result<Outcome> {
        let expr = command.expr().to_owned();
        let outcome = match command.modifier() {
            Modifier::None => {
                let values = Self::eval_terms(command.terms(), source);
                let total = Self::sum(&values, command)?;
                Outcome::PlainTotal {
                    expr,
                    values,
                    total,
                }
            }
            Modifier::SuccessThreshold(threshold) => {
                let total = Self::sum(&Self::eval_terms(command.terms(), source), command)?;
                Outcome::ThresholdCheck {
                    expr,
                    total,
                    threshold,
                    success: total >= threshold,
                }
            }
            Modifier::HitThreshold { hit, success } => {
                Outcome::HitCount(Self::eval_hits(command, hit, success, source)?)
            }
        };
        Ok(outcome)
    }

    pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<i64> {
        (0..amount)
            .map(|_| {
                let value = source.throw(sides);
                trace!("Threw `{}` on a d{}", value, sides);
                value as i64
            })
            .collect()
    }
}
