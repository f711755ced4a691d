//! String utility functions

/// Title-case a string the way stored pokemon names are written.
///
/// A word starts after any character without case (space, `.`, `-`, `'`,
/// digits), its first cased letter is upper-cased and every following cased
/// letter lower-cased: `mr. mime` -> `Mr. Mime`, `ho-oh` -> `Ho-Oh`,
/// `PORYGON2` -> `Porygon2`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased {
            if previous_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_simple() {
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("CHARIZARD"), "Charizard");
        assert_eq!(title_case("cHaR"), "Char");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("mr. mime"), "Mr. Mime");
        assert_eq!(title_case("ho-oh"), "Ho-Oh");
        assert_eq!(title_case("tapu koko"), "Tapu Koko");
        assert_eq!(title_case("farfetch'd"), "Farfetch'D");
    }

    #[test]
    fn test_title_case_digits_start_new_word() {
        assert_eq!(title_case("porygon2"), "Porygon2");
        assert_eq!(title_case("pikachu123abc"), "Pikachu123Abc");
    }

    #[test]
    fn test_title_case_non_ascii() {
        assert_eq!(title_case("flabébé"), "Flabébé");
        assert_eq!(title_case("nidoran♀"), "Nidoran♀");
    }

    #[test]
    fn test_title_case_empty_and_whitespace() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("  "), "  ");
    }
}
