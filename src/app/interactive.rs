use crate::adapters::prompt::LinePrompter;
use crate::app::report::render_text;
use crate::app::toolkit::Toolkit;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Prompts for each tool in turn; a blank answer skips that step.
pub fn run_interactive<C, R, W>(toolkit: &Toolkit<C>, prompter: &mut LinePrompter<R, W>) -> Result<()>
where
    C: ConfigProvider,
    R: BufRead,
    W: Write,
{
    let style = toolkit.report_style();

    if let Some(n) = prompter.read_int("Enter a positive integer to find its factors (blank to skip): ", None)? {
        prompter.say(&render_text(&toolkit.factors(n), &style))?;
    }

    if let Some(n) = prompter.read_int("Check primality for a number (blank to skip): ", None)? {
        prompter.say(&render_text(&toolkit.prime(n), &style))?;
    }

    if let Some(a) = prompter.read_int("Enter a for gcd(a, b) (blank to skip): ", None)? {
        let b = prompter.read_int("Enter b for gcd(a, b): ", Some(0))?.unwrap_or(0);
        prompter.say(&render_text(&toolkit.gcd(a, b), &style))?;
    }

    if let Some(year) = prompter.read_int("Enter a year to test for leap year (blank to skip): ", None)? {
        prompter.say(&render_text(&toolkit.leap(year), &style))?;
    }

    if let Some(principal) = prompter.read_f64("Principal for compound interest (blank to skip): ", None)? {
        let rate = prompter.read_f64("Annual rate in % (e.g. 5): ", Some(5.0))?.unwrap_or(5.0);
        let years = prompter.read_int("Years (e.g. 3): ", Some(3))?.unwrap_or(3);
        let default_times = i64::from(toolkit.config().times_per_year());
        let times = prompter
            .read_int("Times compounded per year (blank for default): ", Some(default_times))?
            .unwrap_or(default_times);

        match (u32::try_from(years), u32::try_from(times)) {
            (Ok(years), Ok(times)) => match toolkit.interest(principal, rate, years, Some(times)) {
                Ok(outcome) => prompter.say(&render_text(&outcome, &style))?,
                Err(e) => {
                    tracing::warn!("Skipping compound interest: {}", e);
                    prompter.say(&format!("Skipping compound interest demo (bad input): {}", e))?;
                }
            },
            _ => prompter.say("Skipping compound interest demo (bad input): years and periods must be non-negative")?,
        }
    }

    if let Some(rolls) = prompter.read_int("Simulate how many dice throws? (blank to skip): ", None)? {
        if rolls > 0 {
            prompter.say(&render_text(&toolkit.dice(Some(rolls), None), &style))?;
        }
    }

    let numbers = prompter.read_numbers("Enter some numbers to summarize (e.g. 1 2 3.5): ")?;
    if !numbers.is_empty() {
        prompter.say(&render_text(&toolkit.summarize(&numbers), &style))?;
    }

    Ok(())
}
