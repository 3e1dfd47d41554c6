use rand::Rng;

use crate::error::CaptchaError;

/// One-time arithmetic challenge shown next to the contact form.
///
/// This is a spam deterrent only, so any cheap RNG is good enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaChallenge {
    a: u8,
    b: u8,
}

impl CaptchaChallenge {
    pub const MIN_OPERAND: u8 = 1;
    pub const MAX_OPERAND: u8 = 9;

    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut challenge = Self { a: 0, b: 0 };
        challenge.generate(rng);
        challenge
    }

    /// Draws two fresh operands. `expected` follows automatically.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.a = rng.gen_range(Self::MIN_OPERAND..=Self::MAX_OPERAND);
        self.b = rng.gen_range(Self::MIN_OPERAND..=Self::MAX_OPERAND);
        log::debug!("New captcha: {}", self.prompt());
    }

    pub fn operands(&self) -> (u8, u8) {
        (self.a, self.b)
    }

    pub fn expected(&self) -> i64 {
        i64::from(self.a) + i64::from(self.b)
    }

    pub fn prompt(&self) -> String {
        format!("{} + {} =", self.a, self.b)
    }

    pub fn check(&self, input: &str) -> Result<(), CaptchaError> {
        let trimmed = input.trim();
        let given: i64 = trimmed
            .parse()
            .map_err(|_| CaptchaError::Unparseable(trimmed.to_string()))?;
        if given == self.expected() {
            Ok(())
        } else {
            Err(CaptchaError::Mismatch { given })
        }
    }

    pub fn verify(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }
}

/// Reads the two operands back out of a rendered prompt like `"3 + 4 ="`.
pub fn parse_prompt(prompt: &str) -> Option<(u8, u8)> {
    let (lhs, rhs) = prompt.trim().strip_suffix('=')?.split_once('+')?;
    Some((lhs.trim().parse().ok()?, rhs.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_draws_same_challenges() {
        let mut left = SmallRng::seed_from_u64(42);
        let mut right = SmallRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(CaptchaChallenge::new(&mut left), CaptchaChallenge::new(&mut right));
        }
    }

    #[test]
    fn accepts_sum_and_rejects_neighbour_for_every_seed() {
        for seed in 0..200 {
            let challenge = CaptchaChallenge::new(&mut SmallRng::seed_from_u64(seed));
            let (a, b) = challenge.operands();
            assert!((1..=9).contains(&a) && (1..=9).contains(&b));

            let sum = i64::from(a) + i64::from(b);
            assert!(challenge.verify(&sum.to_string()));
            assert!(!challenge.verify(&(sum - 1).to_string()));
        }
    }

    #[test]
    fn non_numeric_input_is_rejected_without_panicking() {
        let challenge = CaptchaChallenge::new(&mut SmallRng::seed_from_u64(7));
        for input in ["", "abc", " ", "4.0", "+-3"] {
            assert!(!challenge.verify(input), "accepted {:?}", input);
        }
        assert!(matches!(
            challenge.check("abc"),
            Err(CaptchaError::Unparseable(_))
        ));
    }

    #[test]
    fn partially_numeric_input_is_rejected() {
        let challenge = CaptchaChallenge::new(&mut SmallRng::seed_from_u64(3));
        let answer = challenge.expected();
        assert!(!challenge.verify(&format!("{}abc", answer)));
        assert!(!challenge.verify(&format!("{} 1", answer)));
        assert!(challenge.verify(&format!("  {} ", answer)));
    }

    #[test]
    fn prompt_round_trips_to_expected() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut challenge = CaptchaChallenge::new(&mut rng);
        for _ in 0..50 {
            challenge.generate(&mut rng);
            let (a, b) = parse_prompt(&challenge.prompt()).unwrap();
            assert_eq!(i64::from(a) + i64::from(b), challenge.expected());
        }
    }

    #[test]
    fn mismatch_reports_the_given_value() {
        let challenge = CaptchaChallenge { a: 2, b: 3 };
        assert_eq!(challenge.check("6"), Err(CaptchaError::Mismatch { given: 6 }));
        assert_eq!(challenge.check("5"), Ok(()));
    }
}
