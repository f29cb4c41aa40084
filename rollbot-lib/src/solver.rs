use crate::command::Command;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::roll;
use rand::Rng;
use tracing::debug;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver and holds the parsed roll command
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    command: Command,
}

impl Solver {
    /// Split and classify the query, nothing is rolled yet
    pub fn new(input: &str) -> Result<Self> {
        let command = Command::parse(input)?;
        debug!("Parsed `{}` into {:?}", input, command);
        Ok(Solver {
            query: input.trim().to_owned(),
            command,
        })
    }

    /// Solve the roll command using the default Rng source
    pub fn solve(&self) -> Result<roll::Outcome> {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll command using the provided Rng source
    pub fn solve_with<S: Rng>(&self, generator: &mut S) -> Result<roll::Outcome> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll command using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Outcome> {
        let outcome = Evaluator::eval(&self.command, source)?;
        debug!("Solved `{}` to {:?}", self.query, outcome);
        Ok(outcome)
    }

    /// Solve and render the answer for `author`
    pub fn reply(&self, author: &str) -> Result<String> {
        Ok(roll::Reply::new(author, &self.solve()?).to_string())
    }

    /// Return the split command, terms already classified
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

/// Parse, roll and render `input` on behalf of `author`
pub fn reply(author: &str, input: &str) -> Result<String> {
    Solver::new(input)?.reply(author)
}
