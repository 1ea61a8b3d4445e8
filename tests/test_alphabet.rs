use rpawogen::alphabet::*;
use std::collections::HashSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharacterClass, avoid_similar: bool) -> CharacterClassConfig {
        let mut config = CharacterClassConfig::none();
        config.avoid_similar = avoid_similar;
        match class {
            CharacterClass::Uppercase => config.include_uppercase = true,
            CharacterClass::Lowercase => config.include_lowercase = true,
            CharacterClass::Digits => config.include_digits = true,
            CharacterClass::Special => config.include_special = true,
        }
        config
    }

    #[test]
    fn test_base_class_sizes() {
        assert_eq!(build_alphabet(&only(CharacterClass::Uppercase, false)).len(), 26);
        assert_eq!(build_alphabet(&only(CharacterClass::Lowercase, false)).len(), 26);
        assert_eq!(build_alphabet(&only(CharacterClass::Digits, false)).len(), 10);
        assert_eq!(build_alphabet(&only(CharacterClass::Special, false)).len(), 28);
    }

    #[test]
    fn test_all_classes_enabled() {
        let alphabet = build_alphabet(&CharacterClassConfig::default());
        assert_eq!(alphabet.len(), 90);
        assert_eq!(
            alphabet.to_string(),
            format!("{}{}{}{}", UPPERCASE, LOWERCASE, DIGITS, SPECIAL)
        );
    }

    #[test]
    fn test_uppercase_avoid_similar_drops_i_and_o() {
        let alphabet = build_alphabet(&only(CharacterClass::Uppercase, true));
        assert_eq!(alphabet.len(), 24);
        assert!(!alphabet.contains('I'));
        assert!(!alphabet.contains('O'));
        assert!(alphabet.contains('A'));
        assert!(alphabet.contains('Z'));
    }

    #[test]
    fn test_lowercase_avoid_similar_drops_l_and_o() {
        let alphabet = build_alphabet(&only(CharacterClass::Lowercase, true));
        assert_eq!(alphabet.len(), 24);
        assert!(!alphabet.contains('l'));
        assert!(!alphabet.contains('o'));
        assert!(alphabet.contains('i'));
    }

    #[test]
    fn test_digits_avoid_similar() {
        let alphabet = build_alphabet(&only(CharacterClass::Digits, true));
        assert_eq!(alphabet.to_string(), "23456789");
    }

    #[test]
    fn test_special_never_filtered() {
        let plain = build_alphabet(&only(CharacterClass::Special, false));
        let filtered = build_alphabet(&only(CharacterClass::Special, true));
        assert_eq!(plain, filtered);
        assert_eq!(filtered.to_string(), SPECIAL);
    }

    #[test]
    fn test_all_classes_avoid_similar() {
        let config = CharacterClassConfig {
            avoid_similar: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&config);
        assert_eq!(alphabet.len(), 24 + 24 + 8 + 28);
        for c in SIMILAR_CHARS {
            assert!(!alphabet.contains(c), "{} should be excluded", c);
        }
    }

    #[test]
    fn test_filtering_is_independent_of_other_classes() {
        let digits_only = build_alphabet(&only(CharacterClass::Digits, true));
        let config = CharacterClassConfig {
            include_special: false,
            avoid_similar: true,
            ..Default::default()
        };
        let mixed = build_alphabet(&config);
        for c in digits_only.as_slice() {
            assert!(mixed.contains(*c));
        }
        assert!(!mixed.contains('0'));
        assert!(!mixed.contains('1'));
    }

    #[test]
    fn test_no_class_gives_empty_alphabet() {
        let mut config = CharacterClassConfig::none();
        config.avoid_similar = true;
        let alphabet = build_alphabet(&config);
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.len(), 0);
        assert!(!config.any_class_enabled());
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        for avoid_similar in [false, true] {
            for mask in 1u8..16 {
                let config = CharacterClassConfig {
                    include_uppercase: mask & 1 != 0,
                    include_lowercase: mask & 2 != 0,
                    include_digits: mask & 4 != 0,
                    include_special: mask & 8 != 0,
                    avoid_similar,
                };
                let alphabet = build_alphabet(&config);
                let unique: HashSet<char> = alphabet.as_slice().iter().copied().collect();
                assert_eq!(unique.len(), alphabet.len(), "duplicates for {:?}", config);
                assert!(!alphabet.is_empty());
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = CharacterClassConfig::default();
        assert_eq!(build_alphabet(&config), Alphabet::from(&config));
    }

    #[test]
    fn test_enabled_classes_order() {
        let config = CharacterClassConfig {
            include_lowercase: false,
            ..Default::default()
        };
        assert_eq!(
            config.enabled_classes(),
            vec![CharacterClass::Uppercase, CharacterClass::Digits, CharacterClass::Special]
        );
    }

    #[test]
    fn test_find_similar_chars() {
        assert_eq!(find_similar_chars("Hello World 2010"), vec!['l', 'l', 'o', 'o', 'l', '0', '1', '0']);
        assert!(find_similar_chars("ABC-xyz-789").is_empty());
    }
}
