use anyhow::{Context, Result};
use log::debug;
use rpawogen::configtool::{GenConfig, GenOverrides};
use rpawogen::passgen::PasswordGenerator;
use rpawogen::setclip;
use rpawogen::strength::StrengthScore;

const METER_WIDTH: usize = 20;

pub fn render_meter(strength: &StrengthScore) -> String {
    let filled = ((strength.score / 100.0) * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled),
        strength.score
    )
}

pub fn generate_random(
    config: &GenConfig,
    overrides: &GenOverrides,
    copy: bool,
    seed: Option<u64>,
) -> Result<()> {
    let request = config.to_request(overrides);
    debug!("generation request: {:?}", request);

    let (password, strength) = match seed {
        Some(seed) => request.execute(&mut PasswordGenerator::seeded(seed))?,
        None => request.execute(&mut PasswordGenerator::new())?,
    };

    println!("{}", password);
    println!("Generated a {}-character password", password.len());
    println!("{}", render_meter(&strength));
    println!("Password Strength: {}", strength.level);

    if copy {
        setclip::copy_to_clipboard(password.as_str(), config.clipboard_clear_secs)
            .context("Failed to copy password")?;
        if config.clipboard_clear_secs > 0 {
            println!(
                "Password copied to clipboard! It will be cleared in {}s.",
                config.clipboard_clear_secs
            );
        } else {
            println!("Password copied to clipboard!");
        }
    }
    Ok(())
}
