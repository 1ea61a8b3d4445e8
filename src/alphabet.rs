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
// Character alphabet builder

use std::fmt;

use log::debug;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/~";

/// Characters that are easy to misread for one another.
pub const SIMILAR_CHARS: [char; 6] = ['l', '1', 'I', 'O', '0', 'o'];

const SIMILAR_UPPERCASE: &str = "IO";
const SIMILAR_LOWERCASE: &str = "lo";
const SIMILAR_DIGITS: &str = "01";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn base_chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    // Special characters are never filtered.
    fn similar_chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => SIMILAR_UPPERCASE,
            CharacterClass::Lowercase => SIMILAR_LOWERCASE,
            CharacterClass::Digits => SIMILAR_DIGITS,
            CharacterClass::Special => "",
        }
    }

    /// The class's characters, minus the look-alikes when `avoid_similar` is set.
    pub fn chars(self, avoid_similar: bool) -> impl Iterator<Item = char> {
        let excluded = if avoid_similar { self.similar_chars() } else { "" };
        self.base_chars().chars().filter(move |c| !excluded.contains(*c))
    }
}

/// Which character classes go into an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassConfig {
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub avoid_similar: bool,
}

impl Default for CharacterClassConfig {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            avoid_similar: false,
        }
    }
}

impl CharacterClassConfig {
    /// A config with every class switched off.
    pub fn none() -> Self {
        Self {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            avoid_similar: false,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Special => self.include_special,
        }
    }

    pub fn any_class_enabled(&self) -> bool {
        CharacterClass::ALL.iter().any(|class| self.includes(*class))
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// Ordered set of distinct characters a password is drawn from.
///
/// Order is uppercase, lowercase, digits, special, each in its base order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl From<&CharacterClassConfig> for Alphabet {
    fn from(config: &CharacterClassConfig) -> Self {
        build_alphabet(config)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Concatenate the enabled classes into one alphabet.
///
/// The classes are disjoint, so no de-duplication pass is needed. With no
/// class enabled the result is empty; rejecting that is up to the generator.
pub fn build_alphabet(config: &CharacterClassConfig) -> Alphabet {
    let chars: Vec<char> = config
        .enabled_classes()
        .into_iter()
        .flat_map(|class| class.chars(config.avoid_similar))
        .collect();
    debug!(
        "built alphabet of {} characters (avoid_similar = {})",
        chars.len(),
        config.avoid_similar
    );
    Alphabet { chars }
}

/// Look-alike characters present in `password`, in order of appearance.
pub fn find_similar_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| SIMILAR_CHARS.contains(c)).collect()
}
