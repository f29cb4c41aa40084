use super::Outcome;

/// Full answer to a requester, `<author> rolls <expr> = ...`
#[derive(Debug, Clone, Copy)]
pub struct Reply<'a> {
    pub author: &'a str,
    pub outcome: &'a Outcome,
}

impl<'a> Reply<'a> {
    pub fn new(author: &'a str, outcome: &'a Outcome) -> Self {
        Reply { author, outcome }
    }
}

impl std::fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (author, expr) = (self.author, self.outcome.expr());
        match self.outcome {
            Outcome::PlainTotal { .. } => write!(f, "{author} rolls {expr} = {}", self.outcome),
            Outcome::ThresholdCheck { .. } => write!(f, "{author} rolled {expr}: {}", self.outcome),
            Outcome::HitCount(_) => write!(f, "{author} rolled {expr} = {}", self.outcome),
        }
    }
}
