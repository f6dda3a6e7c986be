// PagePulse - core/strength.rs
//
// Password strength scoring for the signup form's live feedback meter.
// Pure scoring only; rendering (meter colour, width) lives in the UI layer.

use crate::util::constants;

/// Score a password from 0 to 4 by counting matched criteria:
///
/// 1. At least `STRENGTH_MIN_LENGTH` characters
/// 2. Contains both a lowercase and an uppercase ASCII letter
/// 3. Contains an ASCII digit
/// 4. Contains at least one symbol (any non-alphanumeric character)
///
/// Mixed case counts as a single criterion, so lowercase-only or
/// uppercase-only passwords do not earn the case point.
pub fn strength_score(password: &str) -> u8 {
    let mut score = 0u8;

    if password.chars().count() >= constants::STRENGTH_MIN_LENGTH {
        score += 1;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }

    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Qualitative band derived from the numeric score. The meter renders
/// the band, not the raw score, so two- and three-point passwords look
/// identical to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    /// Nothing typed yet; the meter is hidden entirely.
    Empty,
    /// Score 0-1.
    Weak,
    /// Score 2-3.
    Medium,
    /// Score 4.
    Strong,
}

impl StrengthBand {
    /// Band for a password as typed. An empty field maps to `Empty`
    /// regardless of score so the meter does not flash "Weak" before
    /// the user has typed anything.
    pub fn for_password(password: &str) -> Self {
        if password.is_empty() {
            return Self::Empty;
        }
        Self::from_score(strength_score(password))
    }

    /// Band for a non-empty password's score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::Weak,
            2 | 3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Meter caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Fraction of the meter bar to fill.
    pub fn fraction(self) -> f32 {
        match self {
            Self::Empty => 0.0,
            Self::Weak => 0.33,
            Self::Medium => 0.66,
            Self::Strong => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(strength_score(""), 0);
        assert_eq!(StrengthBand::for_password(""), StrengthBand::Empty);
    }

    #[test]
    fn test_length_alone_scores_one() {
        assert_eq!(strength_score("aaaaaaaa"), 1);
    }

    #[test]
    fn test_short_lowercase_scores_zero() {
        // Lowercase without uppercase earns nothing.
        assert_eq!(strength_score("abc"), 0);
    }

    #[test]
    fn test_mixed_case_is_a_single_criterion() {
        // 3 chars, mixed case, no digit, no symbol.
        assert_eq!(strength_score("aBc"), 1);
        // Uppercase only does not earn the case point.
        assert_eq!(strength_score("ABC"), 0);
    }

    #[test]
    fn test_digit_criterion() {
        assert_eq!(strength_score("1234"), 1);
    }

    #[test]
    fn test_symbol_criterion() {
        assert_eq!(strength_score("!!!"), 1);
        // Space is not alphanumeric, so it counts as a symbol.
        assert_eq!(strength_score("   "), 1);
    }

    #[test]
    fn test_all_criteria() {
        // 9 chars, mixed case, digit, symbol.
        assert_eq!(strength_score("Abcdefg1!"), 4);
        assert_eq!(StrengthBand::for_password("Abcdefg1!"), StrengthBand::Strong);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StrengthBand::from_score(0), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(1), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(2), StrengthBand::Medium);
        assert_eq!(StrengthBand::from_score(3), StrengthBand::Medium);
        assert_eq!(StrengthBand::from_score(4), StrengthBand::Strong);
    }

    #[test]
    fn test_typical_progression() {
        // The bands a user sees while typing a decent password.
        assert_eq!(StrengthBand::for_password("p"), StrengthBand::Weak);
        assert_eq!(StrengthBand::for_password("password"), StrengthBand::Weak);
        assert_eq!(StrengthBand::for_password("Password"), StrengthBand::Medium);
        assert_eq!(StrengthBand::for_password("Password1"), StrengthBand::Medium);
        assert_eq!(StrengthBand::for_password("Password1!"), StrengthBand::Strong);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // Accented letters fall outside the ASCII classes, so they land
        // in the symbol bucket rather than the case bucket.
        assert_eq!(strength_score("é"), 1);
    }
}
