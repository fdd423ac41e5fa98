use std::collections::HashSet;

/// Placeholder tokens the archive prints where a numeric line would be:
/// pick'em markers, "not listed", and a few historical even-money
/// abbreviations. All of them read as zero.
pub const SENTINEL_TOKENS: &[&str] = &[
    "pk", "PK", "NL", "nl", "a100", "a105", "a110", ".5+03", ".5ev", "-",
];

/// What one raw odds/line cell turned out to hold. Membership in the
/// sentinel set is tested before any numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    /// Sentinel token; canonical value is zero.
    Sentinel,
    /// Empty cell, filled with zero like the source's blank fill.
    Blank,
    Number(f64),
    /// Neither sentinel nor numeric; a data-quality problem.
    Garbled,
}

impl CellValue {
    pub fn value(self) -> f64 {
        match self {
            CellValue::Number(v) => v,
            CellValue::Sentinel | CellValue::Blank | CellValue::Garbled => 0.0,
        }
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, CellValue::Sentinel)
    }
}

/// Immutable sentinel configuration, built once per run and passed into the
/// engine.
#[derive(Debug, Clone)]
pub struct SentinelSet {
    tokens: HashSet<String>,
}

impl Default for SentinelSet {
    fn default() -> Self {
        Self::new(SENTINEL_TOKENS.iter().map(|t| t.to_string()))
    }
}

impl SentinelSet {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, raw: &str) -> bool {
        self.tokens.contains(raw)
    }

    pub fn classify(&self, raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if self.contains(trimmed) {
            return CellValue::Sentinel;
        }
        if trimmed.is_empty() {
            return CellValue::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => CellValue::Number(v),
            Err(_) => CellValue::Garbled,
        }
    }

    /// Log-and-zero coercion for odds cells: sentinels and blanks read as
    /// zero quietly, garbled cells read as zero with a warning carrying the
    /// row context. This is the documented policy at every odds call site.
    pub fn line_or_zero(
        &self,
        raw: &str,
        field: &str,
        context: &str,
        warnings: &mut Vec<String>,
    ) -> f64 {
        let cell = self.classify(raw);
        if cell == CellValue::Garbled {
            warnings.push(format!(
                "{context}: {field} value {raw:?} is neither numeric nor a known sentinel, using 0"
            ));
        }
        cell.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_normalize_to_zero() {
        let set = SentinelSet::default();
        for token in SENTINEL_TOKENS {
            let cell = set.classify(token);
            assert!(cell.is_sentinel(), "{token} should be a sentinel");
            assert_eq!(cell.value(), 0.0);
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        let set = SentinelSet::default();
        assert!(set.contains("pk"));
        assert!(set.contains("PK"));
        assert!(!set.contains("Pk"));
    }

    #[test]
    fn numbers_coerce() {
        let set = SentinelSet::default();
        assert_eq!(set.classify("-105"), CellValue::Number(-105.0));
        assert_eq!(set.classify(" 44.5 "), CellValue::Number(44.5));
    }

    #[test]
    fn blanks_are_quiet_zeros() {
        let set = SentinelSet::default();
        let mut warnings = Vec::new();
        assert_eq!(set.line_or_zero("", "open", "ctx", &mut warnings), 0.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn garbled_cells_warn_and_zero() {
        let set = SentinelSet::default();
        let mut warnings = Vec::new();
        let v = set.line_or_zero("n/a", "close", "DAL 2015-10-01", &mut warnings);
        assert_eq!(v, 0.0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("close"));
        assert!(warnings[0].contains("DAL 2015-10-01"));
    }

    #[test]
    fn duplicate_tokens_are_harmless() {
        let set = SentinelSet::new(["pk".to_string(), "pk".to_string(), "NL".to_string()]);
        assert!(set.contains("pk"));
        assert!(set.contains("NL"));
    }
}
