//! Input validation for calculator fields
//!
//! Each calculator accepts free-form numeric input from user-editable
//! fields. A value that fails its range check never reaches a formula: the
//! calculator short-circuits to its zero-valued result instead. The checks
//! here are the whole error-handling surface of the calculators.

/// Inclusive numeric bounds for a user-editable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A value is accepted only if it is a finite number inside the bounds.
    /// NaN and infinities fail every range.
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// One-time or periodic currency amounts (principal, monthly contribution,
/// withdrawal, salary).
pub const AMOUNT: FieldRange = FieldRange::new(1.0, 1_000_000_000.0);

/// Annual interest / return / inflation rate, in percent.
pub const RATE_PERCENT: FieldRange = FieldRange::new(0.0, 100.0);

/// Investment or loan tenure, in whole years.
pub const TENURE_YEARS: FieldRange = FieldRange::new(1.0, 50.0);

/// Ages for the retirement planner.
pub const AGE_YEARS: FieldRange = FieldRange::new(18.0, 100.0);

/// Service tenure for gratuity. Zero is a legal entry; it is merely
/// ineligible for a payout.
pub const SERVICE_YEARS: FieldRange = FieldRange::new(0.0, 50.0);

/// A user-editable numeric field that keeps its last accepted value.
///
/// The raw text is retained so a UI can let the user continue editing an
/// invalid entry, while recomputation keeps seeing the last value that
/// passed the range check.
#[derive(Debug, Clone)]
pub struct CommittedField {
    range: FieldRange,
    raw: String,
    committed: f64,
}

impl CommittedField {
    pub fn new(range: FieldRange, initial: f64) -> Self {
        Self {
            range,
            raw: initial.to_string(),
            committed: initial,
        }
    }

    /// Record an edit. Returns true if the text parsed and passed the range
    /// check, in which case the committed value was updated.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.raw = text.to_string();
        match text.trim().parse::<f64>() {
            Ok(v) if self.range.accepts(v) => {
                self.committed = v;
                true
            }
            _ => false,
        }
    }

    /// The text currently in the field, valid or not.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The last value that passed validation.
    pub fn value(&self) -> f64 {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_accepts() {
        assert!(AMOUNT.accepts(1.0));
        assert!(AMOUNT.accepts(1_000_000_000.0));
        assert!(!AMOUNT.accepts(0.0));
        assert!(!AMOUNT.accepts(-500.0));
        assert!(!AMOUNT.accepts(f64::NAN));
        assert!(!AMOUNT.accepts(f64::INFINITY));

        assert!(RATE_PERCENT.accepts(0.0));
        assert!(RATE_PERCENT.accepts(100.0));
        assert!(!RATE_PERCENT.accepts(-1.0));
        assert!(!RATE_PERCENT.accepts(100.5));
    }

    #[test]
    fn test_committed_field_keeps_last_valid() {
        let mut field = CommittedField::new(RATE_PERCENT, 12.0);
        assert_eq!(field.value(), 12.0);

        // Valid edit commits
        assert!(field.set_text("8.5"));
        assert_eq!(field.value(), 8.5);

        // Invalid text is retained but does not commit
        assert!(!field.set_text("8.5x"));
        assert_eq!(field.raw(), "8.5x");
        assert_eq!(field.value(), 8.5);

        // Out-of-range number does not commit either
        assert!(!field.set_text("250"));
        assert_eq!(field.value(), 8.5);
    }
}
