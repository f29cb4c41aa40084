pub mod outcome;
pub mod reply;

pub use outcome::Hits;
pub use outcome::Outcome;
pub use reply::Reply;

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}
