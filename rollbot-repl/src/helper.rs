use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

/// Usual polyhedral dice offered after a `d`
const COMMON_SIDES: [&str; 7] = ["4", "6", "8", "10", "12", "20", "100"];

#[derive(Helper)]
pub(crate) struct ReplHelper {
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
}

impl ReplHelper {
    /// Sides written so far right after the last `d` before `pos`
    fn partial_sides(line: &str, pos: usize) -> Option<(usize, &str)> {
        let head = &line[..pos];
        let start = head.rfind('d')? + 1;
        let partial = &head[start..];
        partial
            .chars()
            .all(|c| c.is_ascii_digit())
            .then_some((start, partial))
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        let candidates = match Self::partial_sides(line, pos) {
            Some((start, partial)) => (
                start,
                COMMON_SIDES
                    .iter()
                    .filter(|sides| sides.starts_with(partial))
                    .map(|sides| Pair {
                        display: format!("d{sides}"),
                        replacement: sides.to_string(),
                    })
                    .collect(),
            ),
            None => (pos, Vec::new()),
        };
        Ok(candidates)
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.contains(['!', '>', '+']) {
            return Borrowed(line);
        }
        Owned(line.chars().fold(String::new(), |mut s, c| {
            match c {
                '!' | '>' => s.push_str(&c.to_string().bold().yellow().to_string()),
                '+' => s.push_str(&c.to_string().cyan().to_string()),
                _ => s.push(c),
            }
            s
        }))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize) -> bool {
        line.contains(['!', '>', '+'])
    }
}

impl Validator for ReplHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}
