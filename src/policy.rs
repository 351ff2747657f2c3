//! Decision policy
//!
//! Chooses the target rendering for one declaration from two facts: does
//! its current source text span more than one line, and does its one-line
//! rendering exceed the length limit. Evaluated fresh per node; there is
//! no state carried between declarations.

/// Maximum allowed one-line rendering length, in characters.
///
/// Fixed in this version, not user-configurable.
pub const MAX_ONE_LINE_LEN: usize = 80;

/// Terminal outcome for one inspected declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Already in the canonical form for its length.
    Bail,
    /// Multi-line declaration whose one-line form fits the limit.
    ToOneLine,
    /// Single-line declaration whose one-line form exceeds the limit.
    ToMultiLine,
}

/// True when a one-line rendering is strictly longer than the limit.
/// An exactly-80-character rendering never triggers expansion.
pub fn exceeds_limit(one_line_len: usize) -> bool {
    one_line_len > MAX_ONE_LINE_LEN
}

/// Pick the outcome for a declaration.
///
/// The match over both flags is compiler-checked exhaustive, so the three
/// outcomes are total and mutually exclusive by construction.
pub fn decide(is_multiline: bool, is_exceeding: bool) -> Decision {
    match (is_multiline, is_exceeding) {
        (true, false) => Decision::ToOneLine,
        (false, true) => Decision::ToMultiLine,
        (true, true) | (false, false) => Decision::Bail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_grid_is_exhaustive() {
        // All four input combinations, each mapped to exactly one outcome.
        assert_eq!(decide(false, false), Decision::Bail);
        assert_eq!(decide(false, true), Decision::ToMultiLine);
        assert_eq!(decide(true, false), Decision::ToOneLine);
        assert_eq!(decide(true, true), Decision::Bail);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!exceeds_limit(MAX_ONE_LINE_LEN - 1));
        assert!(!exceeds_limit(MAX_ONE_LINE_LEN));
        assert!(exceeds_limit(MAX_ONE_LINE_LEN + 1));
    }
}
