/// Render an amount with `,` grouping and at most three fractional digits.
/// Ties at the third digit round away from zero.
pub fn grouped_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", half_away_from_zero(amount.abs(), 1_000.0));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && (whole != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Shortest decimal form of a price (`45.5`, `100`).
pub fn plain_amount(amount: f64) -> String {
    format!("{amount}")
}

/// One fractional digit, ties rounded away from zero (`1.25` renders `1.3`).
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", half_away_from_zero(value, 10.0))
}

fn half_away_from_zero(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Premium as a percentage of monthly income. Zero income reports zero.
pub fn share_of_monthly_income(premium: f64, monthly_income: f64) -> f64 {
    if monthly_income > 0.0 {
        premium / monthly_income * 100.0
    } else {
        0.0
    }
}
