//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;

use log::debug;
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::alphabet::{Alphabet, CharacterClassConfig, build_alphabet};
use crate::error::{PassGenError, Result};
use crate::strength::{StrengthScore, estimate_strength};

/// Shortest length the front end lets anyone ask for.
pub const MIN_LENGTH: usize = 8;
/// Longest length the front end lets anyone ask for.
pub const MAX_LENGTH: usize = 256;
pub const DEFAULT_LENGTH: usize = 16;

/// A freshly generated password. Not stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw `length` characters from `alphabet`, independently and uniformly,
/// with replacement.
pub fn generate_password<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: &Alphabet,
) -> Result<GeneratedPassword> {
    if alphabet.is_empty() {
        return Err(PassGenError::invalid_input("no character type selected, the alphabet is empty"));
    }
    if length == 0 {
        return Err(PassGenError::invalid_input("password length must be positive"));
    }

    let chars = alphabet.as_slice();
    let password: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    debug!("generated a {}-character password from {} symbols", length, chars.len());
    Ok(GeneratedPassword(password))
}

/// Password generator over an injectable random source.
///
/// `new()` reads from the operating system's CSPRNG. `seeded()` gives a
/// reproducible ChaCha20 stream for tests, and `with_rng()` accepts anything
/// implementing `RngCore`.
pub struct PasswordGenerator<R: RngCore = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<ChaCha20Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, length: usize, alphabet: &Alphabet) -> Result<GeneratedPassword> {
        generate_password(&mut self.rng, length, alphabet)
    }
}

/// One generation request as the front end collects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub config: CharacterClassConfig,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            config: CharacterClassConfig::default(),
        }
    }
}

impl PasswordRequest {
    pub fn new(length: usize, config: CharacterClassConfig) -> Self {
        Self { length, config }
    }

    pub fn is_within_bounds(&self) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&self.length)
    }

    /// Pull the length into `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn clamped(self) -> Self {
        Self {
            length: self.length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    /// Build the alphabet, generate, and score the configuration.
    ///
    /// The length is used as given; clamping is the caller's call.
    pub fn execute<R: RngCore>(
        &self,
        generator: &mut PasswordGenerator<R>,
    ) -> Result<(GeneratedPassword, StrengthScore)> {
        let alphabet = build_alphabet(&self.config);
        let password = generator.generate(self.length, &alphabet)?;
        let strength = estimate_strength(self.length, alphabet.len());
        Ok((password, strength))
    }
}
