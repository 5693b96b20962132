//! # Generator Module
//!
//! Random question generation. The random source is an injected [`Rng`]
//! rather than an ambient global, so callers decide between an OS-seeded
//! generator in production and a fixed-seed [`rand::rngs::StdRng`] in tests.

use crate::types::{BetweenOp, CompareOp, InequalityFact};
use rand::Rng;
use util::session_config::QuestionOptions;

/// Generate the next inequality question.
///
/// With probability `opts.compound_probability` the question is compound:
/// boundary pairs are redrawn uniformly from the configured range until the
/// pair is strictly ordered, and each side's operator is drawn independently
/// from `<`/`\u{2264}`. Otherwise the question is single, with the boundary
/// uniform over the range and the operator uniform over all four comparisons.
///
/// The only side effect is consuming draws from `rng`.
pub fn generate<R: Rng>(rng: &mut R, opts: &QuestionOptions) -> InequalityFact {
    if rng.gen_bool(opts.compound_probability) {
        let (lower, upper) = loop {
            let a = rng.gen_range(opts.boundary_min..=opts.boundary_max);
            let b = rng.gen_range(opts.boundary_min..=opts.boundary_max);
            if a < b {
                break (a, b);
            }
        };

        InequalityFact::Compound {
            lower,
            upper,
            lower_op: BetweenOp::ALL[rng.gen_range(0..BetweenOp::ALL.len())],
            upper_op: BetweenOp::ALL[rng.gen_range(0..BetweenOp::ALL.len())],
        }
    } else {
        InequalityFact::Single {
            boundary: rng.gen_range(opts.boundary_min..=opts.boundary_max),
            op: CompareOp::ALL[rng.gen_range(0..CompareOp::ALL.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_facts_respect_range_and_ordering() {
        let mut rng = StdRng::seed_from_u64(42);
        let opts = QuestionOptions::default();

        for _ in 0..500 {
            match generate(&mut rng, &opts) {
                InequalityFact::Single { boundary, .. } => {
                    assert!((-5..=5).contains(&boundary));
                }
                InequalityFact::Compound { lower, upper, .. } => {
                    assert!((-5..=5).contains(&lower));
                    assert!((-5..=5).contains(&upper));
                    assert!(lower < upper);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let opts = QuestionOptions::default();
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            assert_eq!(generate(&mut first, &opts), generate(&mut second, &opts));
        }
    }

    #[test]
    fn test_both_forms_appear() {
        let mut rng = StdRng::seed_from_u64(1);
        let opts = QuestionOptions::default();
        let mut singles = 0;
        let mut compounds = 0;

        for _ in 0..200 {
            match generate(&mut rng, &opts) {
                InequalityFact::Single { .. } => singles += 1,
                InequalityFact::Compound { .. } => compounds += 1,
            }
        }

        assert!(singles > 0, "expected at least one single question");
        assert!(compounds > 0, "expected at least one compound question");
    }

    #[test]
    fn test_probability_extremes_force_one_form() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut opts = QuestionOptions::default();

        opts.compound_probability = 0.0;
        for _ in 0..20 {
            assert!(matches!(
                generate(&mut rng, &opts),
                InequalityFact::Single { .. }
            ));
        }

        opts.compound_probability = 1.0;
        for _ in 0..20 {
            assert!(matches!(
                generate(&mut rng, &opts),
                InequalityFact::Compound { .. }
            ));
        }
    }
}
