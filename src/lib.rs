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
// Random password generation and strength estimation.

pub mod alphabet;
pub mod configtool;
pub mod error;
pub mod logger;
pub mod passgen;
pub mod setclip;
pub mod strength;

pub use alphabet::{build_alphabet, Alphabet, CharacterClass, CharacterClassConfig};
pub use error::{PassGenError, Result};
pub use passgen::{generate_password, GeneratedPassword, PasswordGenerator, PasswordRequest};
pub use strength::{estimate_strength, StrengthLevel, StrengthScore};
