use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use serde::Serialize;

use crate::error::SimError;
use crate::hat::Hat;
use crate::random::create_rng;

pub const DEFAULT_EXPERIMENTS: u32 = 1000;

/// Estimate the probability that drawing `num_balls_drawn` balls from `hat`
/// yields at least the `expected` count of every listed color.
///
/// Each trial draws from a fresh copy, so `hat` itself is never modified.
pub fn experiment<R: Rng + ?Sized>(
    hat: &Hat,
    expected: &BTreeMap<String, usize>,
    num_balls_drawn: usize,
    num_experiments: u32,
    rng: &mut R,
) -> Result<f64, SimError> {
    let successes = count_successes(hat, expected, num_balls_drawn, num_experiments, rng)?;
    Ok(f64::from(successes) / f64::from(num_experiments))
}

fn count_successes<R: Rng + ?Sized>(
    hat: &Hat,
    expected: &BTreeMap<String, usize>,
    num_balls_drawn: usize,
    num_experiments: u32,
    rng: &mut R,
) -> Result<u32, SimError> {
    if num_experiments == 0 {
        return Err(SimError::NoExperiments);
    }

    let mut successes = 0;
    for _ in 0..num_experiments {
        let mut trial = hat.clone();
        let drawn = trial.draw_with(num_balls_drawn, rng);
        if meets_expectation(&drawn, expected) {
            successes += 1;
        }
    }
    Ok(successes)
}

fn meets_expectation(drawn: &[String], expected: &BTreeMap<String, usize>) -> bool {
    let mut tally: HashMap<&str, usize> = HashMap::new();
    for ball in drawn {
        *tally.entry(ball.as_str()).or_default() += 1;
    }
    expected
        .iter()
        .all(|(color, want)| tally.get(color.as_str()).copied().unwrap_or(0) >= *want)
}

/// A configured experiment that owns its generator seed.
#[derive(Debug, Clone)]
pub struct Experiment {
    expected: BTreeMap<String, usize>,
    num_balls_drawn: usize,
    num_experiments: u32,
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub successes: u32,
    pub experiments: u32,
    pub probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Experiment {
    pub fn new<I, S>(expected: I, num_balls_drawn: usize) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self {
            expected: expected.into_iter().map(|(c, n)| (c.into(), n)).collect(),
            num_balls_drawn,
            num_experiments: DEFAULT_EXPERIMENTS,
            seed: None,
        }
    }

    pub fn with_experiments(mut self, num_experiments: u32) -> Self {
        self.num_experiments = num_experiments;
        self
    }

    /// Fix the generator seed so repeated runs give the same estimate.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn run(&self, hat: &Hat) -> Result<Outcome, SimError> {
        let mut rng = create_rng(self.seed);
        let successes = count_successes(
            hat,
            &self.expected,
            self.num_balls_drawn,
            self.num_experiments,
            &mut rng,
        )?;
        let outcome = Outcome {
            successes,
            experiments: self.num_experiments,
            probability: f64::from(successes) / f64::from(self.num_experiments),
            seed: self.seed,
        };
        tracing::debug!(
            hat_size = hat.len(),
            drawn = self.num_balls_drawn,
            successes = outcome.successes,
            experiments = outcome.experiments,
            "experiment finished"
        );
        Ok(outcome)
    }
}
