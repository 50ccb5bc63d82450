// Values at or above this render in exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Fixed-decimal rendering, e.g. `format_fixed(26.928, 1) == "26.9"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Team size is reported in whole people; halves round up.
pub fn round_team_size(team_size: f64) -> u64 {
    if !team_size.is_finite() || team_size <= 0.0 {
        return 0;
    }
    (team_size + 0.5).floor() as u64
}

/// Rounds to `decimals`, drops trailing zeros and groups thousands with `,`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", value);
    }
    let fixed = format_fixed(value, decimals);
    if !value.is_finite() {
        return fixed;
    }

    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(trimmed.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Abbreviates with `K`/`M` suffixes above a thousand.
pub fn format_large_number(value: f64) -> String {
    if value >= EXPONENT_THRESHOLD {
        format!("{:e}", value)
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
