//! Display formatting for money and percentages.

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_PERCENT_DECIMALS: usize = 1;

/// Symbol and fraction digits for the currencies we show with a symbol.
fn currency_style(code: &str) -> Option<(&'static str, u32)> {
    match code {
        "USD" => Some(("$", 2)),
        "EUR" => Some(("€", 2)),
        "GBP" => Some(("£", 2)),
        "JPY" => Some(("¥", 0)),
        "INR" => Some(("₹", 2)),
        "CNY" => Some(("CN¥", 2)),
        "CAD" => Some(("CA$", 2)),
        "AUD" => Some(("A$", 2)),
        _ => None,
    }
}

/// Insert `,` between each group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round a plain non-negative decimal string (`"123.456"`) to `decimals`
/// fraction digits, ties away from zero. Returns the integer and fraction
/// digits separately.
fn round_half_up(plain: &str, decimals: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let mut frac = frac_part.bytes().chain(std::iter::repeat(b'0'));
    digits.extend(frac.by_ref().take(decimals));
    let round_up = frac.next().is_some_and(|next| next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let fraction = digits.split_off(digits.len() - decimals);
    // Only ASCII digits were pushed.
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

/// Format an amount the way an en-US locale shows currency.
///
/// Rounding works on the shortest decimal form of `amount`, so `1.005`
/// shows as `$1.01`.
///
/// ```
/// use nebulaai_core::format_currency;
///
/// assert_eq!(format_currency(1234.5, None), "$1,234.50");
/// assert_eq!(format_currency(-99.999, Some("eur")), "-€100.00");
/// assert_eq!(format_currency(1500.0, Some("CHF")), "CHF 1,500.00");
/// ```
pub fn format_currency(amount: f64, currency: Option<&str>) -> String {
    let code = currency.unwrap_or(DEFAULT_CURRENCY).to_ascii_uppercase();
    let (prefix, decimals) = match currency_style(&code) {
        Some((symbol, decimals)) => (symbol.to_string(), decimals),
        None => (format!("{} ", code), 2),
    };

    if amount.is_nan() {
        return format!("{}NaN", prefix);
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, prefix);
    }

    // `{}` on f64 prints the shortest round-trip digits without an exponent.
    let (whole, fraction) = round_half_up(&amount.abs().to_string(), decimals as usize);
    let whole = group_thousands(&whole);

    if fraction.is_empty() {
        format!("{}{}{}", sign, prefix, whole)
    } else {
        format!("{}{}{}.{}", sign, prefix, whole, fraction)
    }
}

/// Format `value` as a percentage with `decimals` fraction digits (default 1).
///
/// Rounds the exact binary value, ties away from zero: `2.5` with no
/// decimals is `3%`, while `1.005` with two is `1.00%` because the stored
/// value sits just below the tie.
pub fn format_percentage(value: f64, decimals: Option<usize>) -> String {
    let decimals = decimals.unwrap_or(DEFAULT_PERCENT_DECIMALS);
    if !value.is_finite() {
        return format!("{}%", value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = round_half_up(&exact, decimals);

    if fraction.is_empty() {
        format!("{}{}%", sign, whole)
    } else {
        format!("{}{}.{}%", sign, whole, fraction)
    }
}
