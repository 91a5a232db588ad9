use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Check whether a number is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// List every positive divisor of a number
    Factors {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Greatest common divisor of two numbers
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Check whether a year is a leap year (defaults to the current year)
    Leap {
        #[arg(allow_negative_numbers = true)]
        year: Option<i64>,
    },

    /// Project a compound-interest balance
    Interest {
        #[arg(long)]
        principal: f64,

        /// Annual rate in percent, e.g. 5 for 5%
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        #[arg(long)]
        years: u32,

        /// Compounding periods per year (falls back to the config file, then 1)
        #[arg(long)]
        times: Option<u32>,
    },

    /// Roll two dice many times and count the sums
    Dice {
        /// Number of throws (falls back to the config file, then 1000)
        #[arg(long, allow_negative_numbers = true)]
        rolls: Option<i64>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// n! for n up to 20
    Factorial { n: u32 },

    /// Count, sum, mean, median, min and max of a list of numbers
    Summarize {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Convert Fahrenheit temperatures to Celsius
    Celsius {
        #[arg(required = true, allow_negative_numbers = true)]
        fahrenheit: Vec<f64>,
    },

    /// Walk through every tool with prompts on stdin
    Interactive,
}
