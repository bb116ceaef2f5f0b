/// Group digits in thousands: 12500 -> "12,500"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Star amount with separators and the star sign: "1,000 ⭐"
pub fn format_stars(amount: u64) -> String {
    format!("{} ⭐", group_thousands(amount))
}

/// Enough fractional digits to print any f64 exactly
const EXACT_DIGITS: usize = 1100;

/// Round to `decimals` places the way JavaScript's `toFixed` does: to the
/// nearest decimal of the exact binary value, with exact halves rounded away
/// from zero. `{:.N}` alone would send those halves to the even digit.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = frac_part.get(..decimals).unwrap_or(frac_part);
    let tail = frac_part.get(decimals..).unwrap_or("");

    let is_half = tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0');
    if !is_half {
        return format!("{:.*}", decimals, value);
    }

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
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

    let split = digits.len() - kept.len();
    let whole = String::from_utf8_lossy(&digits[..split]);
    let fraction = String::from_utf8_lossy(&digits[split..]);
    let sign = if value < 0.0 { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// Dollar amount with two decimals and grouped whole part: "$1,287.50"
pub fn format_usd(amount: f64) -> String {
    let fixed = to_fixed(amount.abs(), 2);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = whole
        .parse::<u64>()
        .map(group_thousands)
        .unwrap_or_else(|_| whole.to_string());
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_to_fixed_rounds_exact_halves_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
        assert_eq!(to_fixed(9.875, 2), "9.88");
        assert_eq!(to_fixed(0.9375, 3), "0.938");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_keeps_values_that_only_look_like_halves() {
        // Stored as 49.99499999..., 9.99499999... and 0.10499999...
        assert_eq!(to_fixed(500.0 * (99.99 / 1000.0), 2), "49.99");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(0.105, 3), "0.105");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(242.0, 2), "242.00");
    }

    #[test]
    fn test_money_and_stars() {
        assert_eq!(format_stars(2500), "2,500 ⭐");
        assert_eq!(format_usd(1287.5), "$1,287.50");
        assert_eq!(format_usd(99.99), "$99.99");
        assert_eq!(format_usd(485.0), "$485.00");
        assert_eq!(format_usd(1234.125), "$1,234.13");
    }
}
