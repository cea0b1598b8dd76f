use super::{Currency, Language};
use num_format::{Grouping, Locale};

fn number_locale(currency: Currency) -> Locale {
    match currency {
        Currency::Try => Locale::tr,
        Currency::Usd | Currency::Gbp => Locale::en,
        Currency::Eur => Locale::de,
    }
}

fn language_locale(language: Language) -> Locale {
    match language {
        Language::Tr => Locale::tr,
        Language::En => Locale::en,
    }
}

/// Magnitude with grouping and exactly two fraction digits, plus whether a
/// minus sign is due. Non-finite values come back as their symbol.
///
/// The value is rounded once, by `{:.2}`, so exports that print raw
/// `{:.2}` figures agree with the formatted ones.
fn fixed_two(value: f64, locale: &Locale) -> (bool, String) {
    if value.is_nan() {
        return (false, "NaN".to_string());
    }
    if value.is_infinite() {
        return (value < 0.0, "∞".to_string());
    }
    let fixed = format!("{:.2}", value.abs());
    let (digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let body = format!("{}{}{}", group_digits(digits, locale), locale.decimal(), fraction);
    (negative, body)
}

/// Inserts the locale's thousands separator into a run of ASCII digits.
fn group_digits(digits: &str, locale: &Locale) -> String {
    if locale.grouping() == Grouping::Posix {
        return digits.to_string();
    }
    let separator = locale.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

fn signed(negative: bool, body: String) -> String {
    if negative { format!("-{}", body) } else { body }
}

/// `₺1.234,50`, `$1,234.50`, `1.234,50 €`, `£1,234.50`.
pub fn format_currency(value: f64, currency: Currency) -> String {
    let (negative, body) = fixed_two(value, &number_locale(currency));
    let sign = if negative { "-" } else { "" };
    match currency {
        Currency::Eur => format!("{}{}\u{a0}{}", sign, body, currency.symbol()),
        _ => format!("{}{}{}", sign, currency.symbol(), body),
    }
}

/// Formats a 0–100 percentage: `%12,34` in Turkish, `12.34%` in English.
pub fn format_percent(value: f64, language: Language) -> String {
    let (negative, body) = fixed_two(value, &language_locale(language));
    match language {
        Language::Tr => format!("%{}", signed(negative, body)),
        Language::En => format!("{}%", signed(negative, body)),
    }
}

pub fn format_roas(value: f64, language: Language) -> String {
    let (negative, body) = fixed_two(value, &language_locale(language));
    signed(negative, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_follows_locale_conventions() {
        assert_eq!(format_currency(1234.5, Currency::Try), "₺1.234,50");
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_currency(1234.5, Currency::Eur), "1.234,50\u{a0}€");
        assert_eq!(format_currency(1234.5, Currency::Gbp), "£1,234.50");
        assert_eq!(format_currency(907.75, Currency::Usd), "$907.75");
    }

    #[test]
    fn negative_and_tiny_amounts() {
        assert_eq!(format_currency(-20.0, Currency::Usd), "-$20.00");
        assert_eq!(format_currency(-20.0, Currency::Eur), "-20,00\u{a0}€");
        assert_eq!(format_currency(-0.001, Currency::Usd), "$0.00");
        assert_eq!(format_currency(1_000_000.0, Currency::Try), "₺1.000.000,00");
    }

    #[test]
    fn percent_placement_depends_on_language() {
        assert_eq!(format_percent(90.775, Language::En), "90.78%");
        assert_eq!(format_percent(90.775, Language::Tr), "%90,78");
        assert_eq!(format_percent(-20.0, Language::Tr), "%-20,00");
        assert_eq!(format_percent(f64::NAN, Language::En), "NaN%");
    }

    #[test]
    fn computed_margins_round_once() {
        let margin = (907.75 / 1000.0) * 100.0;
        assert_eq!(format!("{:.2}", margin), "90.77");
        assert_eq!(format_percent(margin, Language::En), "90.77%");
        assert_eq!(format_percent(margin, Language::Tr), "%90,77");
        assert_eq!(format_roas(margin, Language::En), "90.77");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(
            format_currency(1e20, Currency::Usd),
            "$100,000,000,000,000,000,000.00"
        );
        assert_eq!(
            format_currency(-1e20, Currency::Eur),
            "-100.000.000.000.000.000.000,00\u{a0}€"
        );
        assert_eq!(format_currency(999.999, Currency::Gbp), "£1,000.00");
    }

    #[test]
    fn roas_uses_two_decimals() {
        assert_eq!(format_roas(1000.0 / 907.75, Language::En), "1.10");
        assert_eq!(format_roas(1000.0 / 907.75, Language::Tr), "1,10");
        assert_eq!(format_roas(0.0, Language::En), "0.00");
        assert_eq!(format_roas(f64::NEG_INFINITY, Language::En), "-∞");
    }
}
