use super::types::TransactionType;

/// Formats an amount as Rupiah with `.` thousands separators, e.g. `Rp 5.500.000`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Formats an amount with the sign of its transaction type, e.g. `+Rp 5.500.000`.
pub fn format_signed(kind: TransactionType, amount: i64) -> String {
    format!("{}{}", kind.sign(), format_currency(amount))
}
