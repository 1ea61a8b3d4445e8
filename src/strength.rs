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
// Password strength

use std::fmt;

use zxcvbn::zxcvbn;
use zxcvbn::Score;

/// Entropy in bits that counts as a full (100) score.
///
/// Heuristic calibration, not taken from any published standard.
pub const FULL_STRENGTH_BITS: f64 = 128.0;
pub const MAX_SCORE: f64 = 100.0;
/// Lowest score classified as `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 30.0;
/// Lowest score classified as `Strong`.
pub const STRONG_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            StrengthLevel::Weak
        } else if score < STRONG_THRESHOLD {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Strength of a (length, alphabet size) configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthScore {
    /// In `[0, 100]`.
    pub score: f64,
    pub entropy_bits: f64,
    pub level: StrengthLevel,
}

impl StrengthScore {
    pub fn estimate(length: usize, alphabet_size: usize) -> Self {
        estimate_strength(length, alphabet_size)
    }
}

/// Score `length` symbols drawn from `alphabet_size` choices.
///
/// entropy = length * log2(alphabet_size), normalised against
/// `FULL_STRENGTH_BITS` and capped at 100. An empty alphabet scores 0.
pub fn estimate_strength(length: usize, alphabet_size: usize) -> StrengthScore {
    let entropy_bits = if alphabet_size == 0 {
        0.0
    } else {
        length as f64 * (alphabet_size as f64).log2()
    };
    let score = (entropy_bits / FULL_STRENGTH_BITS * MAX_SCORE).min(MAX_SCORE);
    StrengthScore {
        score,
        entropy_bits,
        level: StrengthLevel::from_score(score),
    }
}

/// Pattern-aware rating of an arbitrary password, backed by zxcvbn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    pub rating: String,
    /// zxcvbn score, 0 to 4.
    pub score: u8,
    pub feedback: String,
}

pub fn assess_password(password: &str) -> PasswordAssessment {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let rating = match score {
        Score::Zero => "Very weak",
        Score::One => "Weak",
        Score::Two => "Medium",
        Score::Three => "Strong",
        Score::Four => "Very strong",
        _ => "Unknown",
    }.to_string();

    PasswordAssessment {
        rating,
        score: score as u8,
        feedback,
    }
}
