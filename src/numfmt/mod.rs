//! Number formatting helpers shared by the report-producing modules.

/// Group an integer into comma-separated thousands ("1234567" -> "1,234,567").
pub fn group_digits(value: u64) -> String {
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

/// Format a whole-dollar amount as a USD currency string.
pub fn currency(amount: u64) -> String {
    format!("${}", group_digits(amount))
}
