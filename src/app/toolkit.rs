use crate::adapters::random::SeededRandom;
use crate::app::report::{Outcome, ReportStyle};
use crate::core::decomposition::{factorial, factors, gcd};
use crate::core::finance::compound_interest;
use crate::core::predicates::{is_leap_year, is_prime};
use crate::core::simulation::simulate_dice_rolls;
use crate::core::summary::{fahrenheit_to_celsius, summarize};
use crate::core::{ConfigProvider, RandomSource};
use crate::utils::error::Result;

/// Runs toolkit operations with settings taken from a [`ConfigProvider`].
pub struct Toolkit<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Toolkit<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle::from_config(&self.config)
    }

    pub fn prime(&self, n: i64) -> Outcome {
        Outcome::Prime { n, prime: is_prime(n) }
    }

    pub fn factors(&self, n: i64) -> Outcome {
        let factors = factors(n);
        if factors.is_empty() {
            tracing::debug!("{} has no positive divisors to list", n);
        }
        Outcome::Factors { n, factors }
    }

    pub fn gcd(&self, a: i64, b: i64) -> Outcome {
        Outcome::Gcd { a, b, gcd: gcd(a, b) }
    }

    pub fn leap(&self, year: i64) -> Outcome {
        Outcome::Leap {
            year,
            leap: is_leap_year(year),
        }
    }

    /// `rate_percent` is the annual rate in percent (5 for 5%).
    pub fn interest(
        &self,
        principal: f64,
        rate_percent: f64,
        years: u32,
        times_per_year: Option<u32>,
    ) -> Result<Outcome> {
        let times_per_year = times_per_year.unwrap_or_else(|| self.config.times_per_year());
        let rate = rate_percent / 100.0;
        let amount = compound_interest(principal, rate, years, times_per_year)?;
        Ok(Outcome::Interest {
            principal,
            rate,
            years,
            times_per_year,
            amount,
        })
    }

    /// Rolls with an explicit seed, the configured seed, or fresh entropy, in that order.
    pub fn dice(&self, rolls: Option<i64>, seed: Option<u64>) -> Outcome {
        let mut rng = SeededRandom::from_optional_seed(seed.or_else(|| self.config.seed()));
        self.dice_with(rolls, &mut rng)
    }

    pub fn dice_with<R: RandomSource + ?Sized>(&self, rolls: Option<i64>, rng: &mut R) -> Outcome {
        let rolls = rolls.unwrap_or_else(|| self.config.default_rolls());
        if rolls <= 0 {
            tracing::warn!("Requested {} rolls, nothing to simulate", rolls);
        }
        Outcome::Dice {
            rolls,
            table: simulate_dice_rolls(rolls, rng),
        }
    }

    pub fn factorial(&self, n: u32) -> Result<Outcome> {
        Ok(Outcome::Factorial {
            n,
            value: factorial(n)?,
        })
    }

    pub fn summarize(&self, values: &[f64]) -> Outcome {
        Outcome::Summary {
            summary: summarize(values),
        }
    }

    pub fn celsius(&self, fahrenheit: &[f64]) -> Outcome {
        Outcome::Celsius {
            readings: fahrenheit
                .iter()
                .map(|&f| (f, fahrenheit_to_celsius(f)))
                .collect(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn execute(&self, command: &crate::config::cli::Command) -> Result<Outcome> {
        use crate::config::cli::Command;
        use chrono::Datelike;

        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Prime { n } => Ok(self.prime(*n)),
            Command::Factors { n } => Ok(self.factors(*n)),
            Command::Gcd { a, b } => Ok(self.gcd(*a, *b)),
            Command::Leap { year } => {
                let year = year.unwrap_or_else(|| i64::from(chrono::Local::now().year()));
                Ok(self.leap(year))
            }
            Command::Interest {
                principal,
                rate,
                years,
                times,
            } => self.interest(*principal, *rate, *years, *times),
            Command::Dice { rolls, seed } => Ok(self.dice(*rolls, *seed)),
            Command::Factorial { n } => self.factorial(*n),
            Command::Summarize { values } => Ok(self.summarize(values)),
            Command::Celsius { fahrenheit } => Ok(self.celsius(fahrenheit)),
            Command::Interactive => Err(crate::utils::error::ToolkitError::ConfigError {
                message: "interactive mode needs a terminal session".to_string(),
            }),
        }
    }
}
