//! Field normalization helpers applied before persistence.

use rust_decimal::Decimal;

/// Title-cases a string: every alphabetic run starts with an uppercase
/// letter, the rest is lowercased. Non-alphabetic characters are word
/// boundaries ("notebook i7" -> "Notebook I7").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Rounds a monetary amount to 2 decimal places, half away from zero.
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("notebook"), "Notebook");
        assert_eq!(title_case("NOTEBOOK"), "Notebook");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("mouse sem fio"), "Mouse Sem Fio");
        assert_eq!(title_case("notebook i7 16gb"), "Notebook I7 16Gb");
    }

    #[test]
    fn test_title_case_preserves_whitespace_and_symbols() {
        assert_eq!(title_case("  cabo usb-c  "), "  Cabo Usb-C  ");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_round_price_half_up() {
        assert_eq!(round_price(dec("4500.905")), dec("4500.91"));
        assert_eq!(round_price(dec("4500.904")), dec("4500.90"));
    }

    #[test]
    fn test_round_price_already_two_places() {
        assert_eq!(round_price(dec("4500.90")), dec("4500.90"));
        assert_eq!(round_price(dec("10")), dec("10"));
    }
}
