pub mod command;
pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::roll::Outcome;
    use crate::roll::Reply;
    use crate::roll::Source;
    use crate::solver::Solver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn solve_mocked(input: &str, rolls: Vec<u64>) -> Outcome {
        let mut iter = rolls.into_iter();
        let outcome = Solver::new(input)
            .unwrap()
            .solve_with_source(&mut MockIter { iter: &mut iter })
            .unwrap();
        assert_eq!(None, iter.next(), "unused mocked dice");
        outcome
    }

    #[test]
    fn three_d_six_test() {
        let outcome = solve_mocked("3d6", vec![4, 2, 5]);
        assert_eq!("4 + 2 + 5 = 11", outcome.to_string());
    }

    #[test]
    fn one_hundred_sided_test() {
        let r = Solver::new("d100").unwrap();
        for _ in 0..100 {
            match r.solve().unwrap() {
                Outcome::PlainTotal { values, total, .. } => {
                    assert_eq!(1, values.len());
                    assert!((1..=100).contains(&total));
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn hit_test() {
        let outcome = solve_mocked("3d6!5", vec![4, 6, 5]);
        assert_eq!("4 + **6** + **5** = 2", outcome.to_string());
    }

    #[test]
    fn constant_term_test() {
        let outcome = solve_mocked("2d6+3", vec![2, 5]);
        match &outcome {
            Outcome::PlainTotal { values, total, .. } => {
                assert_eq!(&vec![2, 5, 3], values);
                assert_eq!(10, *total);
            }
            _ => unreachable!(),
        }
        assert_eq!("2 + 5 + 3 = 10", outcome.to_string());
    }

    #[test]
    fn threshold_success_test() {
        let outcome = solve_mocked("d20>15", vec![18]);
        assert_eq!(
            "***Success***: d20 = 18 meets or beats the threshold 15.",
            outcome.to_string()
        );
        assert_eq!(Some(true), outcome.success());
    }

    #[test]
    fn threshold_edge_test() {
        let outcome = solve_mocked("d20+2>15", vec![13]);
        assert_eq!(Some(true), outcome.success());
        let outcome = solve_mocked("d20+2>15", vec![12]);
        assert_eq!("***Failure***: d20+2 = 14 < 15", outcome.to_string());
        let outcome = solve_mocked("-3>0", vec![]);
        assert_eq!(Some(false), outcome.success());
        let outcome = solve_mocked("d4>-1", vec![1]);
        assert_eq!(Some(true), outcome.success());
    }

    #[test]
    fn empty_test() {
        assert_eq!(Error::EmptyCommand, Solver::new("").unwrap_err());
    }

    #[test]
    fn chained_hit_test() {
        // +1 lifts the 4 to a hit
        let outcome = solve_mocked("3d6+1!5>3", vec![4, 6, 1]);
        assert_eq!(
            "**5** + **7** + 2 = 2 does not meet the 3 threshold. ***Failure***",
            outcome.to_string()
        );
        let outcome = solve_mocked("3d6+1!5>2", vec![4, 6, 1]);
        assert_eq!(Some(true), outcome.success());
    }

    #[test]
    fn error_short_circuit_test() {
        let r = Solver::new("3d6+2dx");
        assert_eq!(
            Error::InvalidDiceSyntax("2dx".to_owned()),
            r.unwrap_err()
        );
    }

    #[test]
    fn overflow_test() {
        fn overflow<T>(expr: &str) -> crate::error::Result<T> {
            Err(Error::Overflow(expr.to_owned()))
        }
        assert_eq!(
            overflow("9223372036854775807+1"),
            Solver::new("9223372036854775807+1").unwrap().solve()
        );
        assert_eq!(
            overflow("d6+9223372036854775807"),
            Solver::new("d6+9223372036854775807!5").unwrap().solve()
        );
        let mut iter = std::iter::repeat(i64::MAX as u64).take(5000);
        assert_eq!(
            overflow("5000d9223372036854775807"),
            Solver::new("5000d9223372036854775807")
                .unwrap()
                .solve_with_source(&mut MockIter { iter: &mut iter })
        );
        assert_eq!(
            overflow("d6+9223372036854775807"),
            crate::solver::reply("mira", "d6+9223372036854775807!5")
        );
    }

    #[test]
    fn command_test() {
        let r = Solver::new(" 2d6+3!4 ").unwrap();
        assert_eq!("2d6+3!4", r.as_str());
        assert_eq!("2d6+3", r.command().expr());
        assert_eq!(2, r.command().terms().len());
    }

    #[test]
    fn seeded_test() {
        let r = Solver::new("10d6+4").unwrap();
        let lhs = r.solve_with(&mut StdRng::seed_from_u64(42)).unwrap();
        let rhs = r.solve_with(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn reply_test() {
        let outcome = solve_mocked("4d6!5", vec![1, 5, 6, 2]);
        assert_eq!(
            "mira rolled 4d6 = 1 + **5** + **6** + 2 = 2",
            Reply::new("mira", &outcome).to_string()
        );
        let answer = crate::solver::reply("mira", "7").unwrap();
        assert_eq!("mira rolls 7 = 7 = 7", answer);
        assert_eq!(
            Err(Error::InvalidThreshold("x".to_owned())),
            crate::solver::reply("mira", "d6>x")
        );
    }
}
