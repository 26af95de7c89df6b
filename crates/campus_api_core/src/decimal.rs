//! Exact reading of decimal number text such as `8.50`, `85e-1` or `1E+20`.

/// Integral values wider than this are not expanded into digit strings.
const MAX_INTEGER_DIGITS: usize = 160;

/// Decimal text split into sign, significant digits and a power of ten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecimalText {
    pub(crate) negative: bool,
    /// No leading or trailing zeros; empty for zero.
    pub(crate) significant: String,
    pub(crate) scale: i32,
}

impl DecimalText {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(position) => (&text[..position], text[position + 1..].parse::<i32>().ok()?),
            None => (text, 0),
        };

        let (integer_part, fraction_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integer_part.is_empty() && fraction_part.is_empty() {
            return None;
        }
        if !integer_part
            .chars()
            .chain(fraction_part.chars())
            .all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let digits = format!("{integer_part}{fraction_part}");
        let digits = digits.trim_start_matches('0');
        let significant = digits.trim_end_matches('0');
        if significant.is_empty() {
            return Some(Self {
                negative,
                significant: String::new(),
                scale: 0,
            });
        }

        let fraction_len = i32::try_from(fraction_part.len()).ok()?;
        let trailing_zeros = i32::try_from(digits.len() - significant.len()).ok()?;
        let scale = exponent
            .checked_sub(fraction_len)?
            .checked_add(trailing_zeros)?;

        Some(Self {
            negative,
            significant: significant.to_string(),
            scale,
        })
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.significant.is_empty()
    }

    /// Exact integer digits, or `None` when the value has a fractional part.
    pub(crate) fn to_integer_string(&self) -> Option<String> {
        if self.is_zero() {
            return Some("0".to_string());
        }
        let zeros = usize::try_from(self.scale).ok()?;
        if self.significant.len() + zeros > MAX_INTEGER_DIGITS {
            return None;
        }
        let sign = if self.negative { "-" } else { "" };
        Some(format!("{sign}{}{}", self.significant, "0".repeat(zeros)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_significant_digits_and_scale() {
        let decimal = DecimalText::parse("08.50").expect("valid decimal");
        assert_eq!(decimal.significant, "85");
        assert_eq!(decimal.scale, -1);
        assert!(!decimal.negative);

        let decimal = DecimalText::parse("-1.2E+3").expect("valid decimal");
        assert_eq!(decimal.significant, "12");
        assert_eq!(decimal.scale, 2);
        assert!(decimal.negative);
    }

    #[test]
    fn rejects_text_that_is_not_a_decimal() {
        for raw in ["", ".", "abc", "nan", "inf", "1e", "--1", "+-1", "1.2.3", "0x10"] {
            assert_eq!(DecimalText::parse(raw), None, "{raw} should be rejected");
        }
    }

    #[test]
    fn integer_strings_are_exact() {
        let render = |raw: &str| DecimalText::parse(raw).and_then(|d| d.to_integer_string());
        assert_eq!(render("1E+20").as_deref(), Some("100000000000000000000"));
        assert_eq!(
            render("12345678901234567890123").as_deref(),
            Some("12345678901234567890123")
        );
        assert_eq!(render("-7.000").as_deref(), Some("-7"));
        assert_eq!(render("-0").as_deref(), Some("0"));
        assert_eq!(render("8.5"), None);
        assert_eq!(render("1e400"), None);
    }
}
