// src/cli/handlers.rs
use console::style;
use serde_json::json;
use std::error::Error;

use crate::breach::BreachChecker;
use crate::charset::CharClass;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationPolicy;
use crate::random::RandomSource;
use crate::strength::{phrases, StrengthEstimator};

// Handlers for CLI commands

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    no_upper: bool,
    no_lower: bool,
    no_digits: bool,
    no_symbols: bool,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut policy = GenerationPolicy::new(length.unwrap_or(config.default_length));
    if !no_upper {
        policy = policy.with(CharClass::Upper);
    }
    if !no_lower {
        policy = policy.with(CharClass::Lower);
    }
    if !no_digits {
        policy = policy.with(CharClass::Digit);
    }
    if !no_symbols {
        policy = policy.with(CharClass::Symbol);
    }

    let mut generator = PasswordGenerator::new();
    let estimator = StrengthEstimator::with_guess_rate(config.guess_rate);
    let mut rng = RandomSource::new();

    for _ in 0..count.max(1) {
        let password = generator.generate(&policy)?;
        let report = estimator.evaluate(&password);

        if json {
            println!(
                "{}",
                json!({
                    "password": password,
                    "strength": report,
                })
            );
        } else {
            println!("{}", style(&password).bold());
            println!(
                "  {} ({}) \"{}\"",
                style(report.category).cyan(),
                report.crack_time,
                phrases::random_phrase(report.category, &mut rng)
            );
        }
    }

    Ok(())
}

pub fn handle_strength(
    config: &Config,
    password: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let password = resolve_password(password, "Password to evaluate:")?;
    let report = StrengthEstimator::with_guess_rate(config.guess_rate).evaluate(&password);

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        let mut rng = RandomSource::new();
        println!(
            "{} ({})",
            style(report.category).bold(),
            report.crack_time
        );
        println!("  entropy: {:.1} bits", report.entropy_bits);
        println!(
            "  \"{}\"",
            phrases::random_phrase(report.category, &mut rng)
        );
    }

    Ok(())
}

pub async fn handle_check(
    config: &Config,
    password: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let password = resolve_password(password, "Password to check:")?;
    let report = BreachChecker::new(config).check(&password).await?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.compromised {
        println!(
            "{} seen {} times in known breaches, change it wherever it is used",
            style("COMPROMISED").red().bold(),
            report.count
        );
    } else {
        println!(
            "{} not found in the breach corpus",
            style("OK").green().bold()
        );
    }

    Ok(())
}

// Prompt without echoing when the password was not passed on the command line.
fn resolve_password(password: Option<String>, prompt: &str) -> Result<String, Box<dyn Error>> {
    match password {
        Some(p) => Ok(p),
        None => Ok(inquire::Password::new(prompt)
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?),
    }
}
