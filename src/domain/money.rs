use super::ExpenseError;

/// Amounts are plain floating-point values with no currency attached.
pub type Amount = f64;

/// Format an amount with exactly two decimal places.
/// Example: 12.5 -> "12.50", -3.456 -> "-3.46"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Anything that can be turned into an expense amount.
///
/// Text is trimmed and parsed as a decimal number; numeric values pass
/// straight through. Non-finite values are rejected so totals always add up.
pub trait ToAmount {
    fn to_amount(&self) -> Result<Amount, ExpenseError>;
}

fn finite(value: Amount, raw: impl ToString) -> Result<Amount, ExpenseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpenseError::InvalidAmount(raw.to_string()))
    }
}

impl ToAmount for str {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        let value: Amount = self
            .trim()
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(self.to_string()))?;
        finite(value, self)
    }
}

impl ToAmount for &str {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        (**self).to_amount()
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        self.as_str().to_amount()
    }
}

impl ToAmount for f64 {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        finite(*self, self)
    }
}

impl ToAmount for f32 {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        finite(f64::from(*self), self)
    }
}

impl ToAmount for i32 {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        Ok(f64::from(*self))
    }
}

impl ToAmount for u32 {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        Ok(f64::from(*self))
    }
}

impl ToAmount for i64 {
    fn to_amount(&self) -> Result<Amount, ExpenseError> {
        Ok(*self as f64)
    }
}
