use itertools::Itertools;

/// Keep a hit counting result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hits {
    pub expr: String,
    /// Raw dice values, constants excluded
    pub values: Vec<i64>,
    /// Dice values with the sum of the constants added to each
    pub modified: Vec<i64>,
    pub hit: i64,
    pub count: usize,
    pub success_threshold: Option<i64>,
}

impl Hits {
    pub fn is_hit(&self, value: i64) -> bool {
        value >= self.hit
    }

    /// Whether enough hits were counted, when a success threshold was asked for
    pub fn success(&self) -> Option<bool> {
        self.success_threshold
            .map(|threshold| self.count as i64 >= threshold)
    }
}

/// Keep a classified roll command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PlainTotal {
        expr: String,
        values: Vec<i64>,
        total: i64,
    },
    HitCount(Hits),
    ThresholdCheck {
        expr: String,
        total: i64,
        threshold: i64,
        success: bool,
    },
}

impl Outcome {
    /// The dice expression that produced this outcome
    pub fn expr(&self) -> &str {
        match self {
            Outcome::PlainTotal { expr, .. } | Outcome::ThresholdCheck { expr, .. } => expr,
            Outcome::HitCount(hits) => &hits.expr,
        }
    }

    /// Overall success, when a threshold was asked for
    pub fn success(&self) -> Option<bool> {
        match self {
            Outcome::PlainTotal { .. } => None,
            Outcome::HitCount(hits) => hits.success(),
            Outcome::ThresholdCheck { success, .. } => Some(*success),
        }
    }
}

impl std::fmt::Display for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {}",
            self.modified
                .iter()
                .map(|&v| if self.is_hit(v) {
                    format!("**{v}**")
                } else {
                    v.to_string()
                })
                .format(" + "),
            self.count
        )?;
        match self.success_threshold {
            Some(threshold) if self.count as i64 >= threshold => {
                write!(f, " meets or beats the {threshold} threshold. ***Success***")
            }
            Some(threshold) => {
                write!(f, " does not meet the {threshold} threshold. ***Failure***")
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlainTotal { values, total, .. } => {
                write!(f, "{} = {}", values.iter().format(" + "), total)
            }
            Outcome::HitCount(hits) => write!(f, "{hits}"),
            Outcome::ThresholdCheck {
                expr,
                total,
                threshold,
                success: true,
            } => write!(
                f,
                "***Success***: {expr} = {total} meets or beats the threshold {threshold}."
            ),
            Outcome::ThresholdCheck {
                expr,
                total,
                threshold,
                success: false,
            } => write!(f, "***Failure***: {expr} = {total} < {threshold}"),
        }
    }
}
