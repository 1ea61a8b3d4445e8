use rpawogen::alphabet::{build_alphabet, find_similar_chars, CharacterClassConfig, SIMILAR_CHARS};
use rpawogen::passgen::*;
use rpawogen::strength::StrengthLevel;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_password_default_options() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let password = PasswordGenerator::new().generate(16, &alphabet).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_length_is_exact() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let mut generator = PasswordGenerator::seeded(7);
        for length in [1, 2, MIN_LENGTH, DEFAULT_LENGTH, 100, MAX_LENGTH, 10_000] {
            let password = generator.generate(length, &alphabet).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_generator_accepts_lengths_outside_ui_range() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let mut generator = PasswordGenerator::seeded(1);
        assert_eq!(generator.generate(3, &alphabet).unwrap().len(), 3);
        assert_eq!(generator.generate(MAX_LENGTH + 1, &alphabet).unwrap().len(), MAX_LENGTH + 1);
    }

    #[test]
    fn test_digits_only_alphabet() {
        let config = CharacterClassConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_special: false,
            avoid_similar: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&config);
        let password = PasswordGenerator::seeded(3).generate(50, &alphabet).unwrap();
        assert!(password.as_str().chars().all(|c| ('2'..='9').contains(&c)));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let alphabet = build_alphabet(&CharacterClassConfig::none());
        let mut generator = PasswordGenerator::seeded(0);
        for length in [0, 1, 16, 256] {
            let err = generator.generate(length, &alphabet).unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let err = PasswordGenerator::new().generate(0, &alphabet).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let first = PasswordGenerator::seeded(42).generate(64, &alphabet).unwrap();
        let second = PasswordGenerator::seeded(42).generate(64, &alphabet).unwrap();
        let other = PasswordGenerator::seeded(43).generate(64, &alphabet).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_injected_rng_drives_sampling() {
        // A source that always yields zero picks the first alphabet entry.
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let mut generator = PasswordGenerator::with_rng(StepRng::new(0, 0));
        let password = generator.generate(12, &alphabet).unwrap();
        assert_eq!(password.as_str(), "AAAAAAAAAAAA");
    }

    #[test]
    fn test_free_function_matches_generator() {
        use rand::SeedableRng;
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(9);
        let direct = generate_password(&mut rng, 32, &alphabet).unwrap();
        let wrapped = PasswordGenerator::seeded(9).generate(32, &alphabet).unwrap();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_avoid_similar_never_emits_similar_chars() {
        let config = CharacterClassConfig {
            avoid_similar: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&config);
        let mut generator = PasswordGenerator::seeded(2024);
        for _ in 0..200 {
            let password = generator.generate(64, &alphabet).unwrap();
            assert!(find_similar_chars(password.as_str()).is_empty());
        }
    }

    #[test]
    fn test_every_character_reachable_without_avoid_similar() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        let password = PasswordGenerator::seeded(11).generate(20_000, &alphabet).unwrap();
        let seen: HashSet<char> = password.as_str().chars().collect();
        assert_eq!(seen.len(), alphabet.len());
        for c in SIMILAR_CHARS {
            assert!(seen.contains(&c), "{} never appeared", c);
        }
    }

    #[test]
    fn test_request_clamping() {
        let config = CharacterClassConfig::default();
        assert_eq!(PasswordRequest::new(2, config).clamped().length, MIN_LENGTH);
        assert_eq!(PasswordRequest::new(1000, config).clamped().length, MAX_LENGTH);
        assert_eq!(PasswordRequest::new(20, config).clamped().length, 20);
        assert!(!PasswordRequest::new(7, config).is_within_bounds());
        assert!(PasswordRequest::new(8, config).is_within_bounds());
        assert!(PasswordRequest::new(256, config).is_within_bounds());
        assert!(!PasswordRequest::new(257, config).is_within_bounds());
    }

    #[test]
    fn test_request_execute() {
        let request = PasswordRequest::default();
        let (password, strength) = request.execute(&mut PasswordGenerator::seeded(5)).unwrap();
        assert_eq!(password.len(), DEFAULT_LENGTH);
        // 16 chars over 90 symbols is roughly 104 bits.
        assert_eq!(strength.level, StrengthLevel::Strong);
    }

    #[test]
    fn test_request_execute_without_classes() {
        let request = PasswordRequest::new(16, CharacterClassConfig::none());
        let err = request.execute(&mut PasswordGenerator::seeded(5)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.user_message().contains("at least one character type"));
    }
}
