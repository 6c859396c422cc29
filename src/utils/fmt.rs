// src/utils/fmt.rs

//! Number and salary formatting helpers.

/// Format an integer with en-US style thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact salary label: `$45k` for amounts of at least 1000, else `$900`.
pub fn format_salary(amount: u32) -> String {
    if amount >= 1000 {
        // Rounded to the nearest thousand
        format!("${}k", (amount + 500) / 1000)
    } else {
        format!("${}", format_number(u64::from(amount)))
    }
}

/// Full salary label with separators: `$45,000`.
pub fn format_salary_full(amount: u32) -> String {
    format!("${}", format_number(u64::from(amount)))
}
