//! Currency and percentage formatting (en-US conventions).

/// Whole-unit currency formatter: `$20,000`.
///
/// Amounts round half away from zero to whole units, thousands are grouped
/// with commas, and negative amounts render as `-$5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}{}", self.symbol, amount);
        }
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol, group_thousands(&digits))
    }
}

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

/// Percentage label with one decimal: `25.0%`.
///
/// Ties round half away from zero (`12.25` shows as `12.3%`); the `{:.1}`
/// formatter alone would round them to even.
pub fn format_percentage(percentage: f64) -> String {
    let tenths = (percentage * 10.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// CSS width for the progress fill, shortest float form: `25%`, `12.5%`.
pub fn format_fill_width(percentage: f64) -> String {
    format!("{percentage}%")
}
