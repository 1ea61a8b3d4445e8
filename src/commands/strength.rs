use anyhow::Result;
use rpawogen::strength::estimate_strength;

use super::password_gen::render_meter;

pub fn show_estimate(length: usize, alphabet_size: usize) -> Result<()> {
    let strength = estimate_strength(length, alphabet_size);
    println!("Entropy: {:.2} bits", strength.entropy_bits);
    println!("{}", render_meter(&strength));
    println!("Password Strength: {}", strength.level);
    Ok(())
}
