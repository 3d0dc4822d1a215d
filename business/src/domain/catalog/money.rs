use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

/// Renders catalog prices as plain currency strings for the storefront.
///
/// The output never carries a sign or markup: `-5` and `5` both render as
/// `$5.00`, and a product without a computed price renders as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    code: String,
    symbol: String,
    fraction_digits: i64,
}

impl CurrencyFormatter {
    /// Builds a formatter for an ISO 4217 code.
    pub fn for_code(code: &str) -> Result<Self, String> {
        let code = code.trim().to_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid currency code: {}", code));
        }

        let (symbol, fraction_digits) = match code.as_str() {
            "USD" => ("$".to_string(), 2),
            "EUR" => ("€".to_string(), 2),
            "GBP" => ("£".to_string(), 2),
            "BRL" => ("R$".to_string(), 2),
            "CAD" => ("CA$".to_string(), 2),
            "AUD" => ("A$".to_string(), 2),
            "JPY" => ("¥".to_string(), 0),
            "KRW" => ("₩".to_string(), 0),
            other => (format!("{} ", other), 2),
        };

        Ok(Self {
            code,
            symbol,
            fraction_digits,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn format(&self, amount: Option<&BigDecimal>) -> String {
        let amount = amount.cloned().unwrap_or_else(BigDecimal::zero).abs();
        let rounded = amount
            .with_scale_round(self.fraction_digits, RoundingMode::HalfUp)
            .to_plain_string();

        let (integer, fraction) = match rounded.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rounded.as_str(), None),
        };

        match fraction {
            Some(fraction) => format!("{}{}.{}", self.symbol, group_thousands(integer), fraction),
            None => format!("{}{}", self.symbol, group_thousands(integer)),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
