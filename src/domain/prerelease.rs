//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is a dot-separated list of identifiers following the `-` in a
//! version string. Each identifier is either numeric or an alphanumeric string.
//! See https://semver.org/#spec-item-9

use crate::error::VersionError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const RELEASE_CANDIDATE: &str = "rc";

/// One dot-separated segment of a pre-release.
///
/// Ordering follows semver precedence: numeric identifiers compare by value,
/// alphanumeric identifiers compare by code point, and a numeric identifier
/// always sorts below an alphanumeric one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreReleaseIdentifier {
    /// Decimal integer without leading zeroes
    Numeric(u64),
    /// Non-empty string of `[0-9A-Za-z-]`
    AlphaNumeric(String),
}

impl PreReleaseIdentifier {
    /// Parse a single pre-release identifier
    ///
    /// # Returns
    /// * `Ok(PreReleaseIdentifier)` - Numeric if `s` is all digits, otherwise alphanumeric
    /// * `Err` - If `s` is empty, has invalid characters, or is numeric with leading zeroes
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if s.is_empty() {
            return Err(VersionError::EmptyPreRelease);
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            if has_leading_zeroes(s) {
                return Err(VersionError::PreReleaseLeadingZeroes(s.to_string()));
            }
            let value = s
                .parse::<u64>()
                .map_err(|_| VersionError::PreReleaseOutOfRange(s.to_string()))?;
            return Ok(PreReleaseIdentifier::Numeric(value));
        }

        if !is_identifier(s) {
            return Err(VersionError::InvalidPreRelease(s.to_string()));
        }

        Ok(PreReleaseIdentifier::AlphaNumeric(s.to_string()))
    }

    /// Build the `rc<N>` identifier of a release-candidate series
    pub fn release_candidate(number: u64) -> Self {
        PreReleaseIdentifier::AlphaNumeric(format!("{}{}", RELEASE_CANDIDATE, number))
    }

    /// Whether this identifier names a release candidate (`rc`, `rc1`, `rc-final`, ...)
    pub fn is_release_candidate(&self) -> bool {
        matches!(self, PreReleaseIdentifier::AlphaNumeric(s) if s.starts_with(RELEASE_CANDIDATE))
    }

    /// The digits after `rc` in a release-candidate identifier, if they form a number
    pub fn release_candidate_number(&self) -> Option<u64> {
        match self {
            PreReleaseIdentifier::AlphaNumeric(s) => {
                s.strip_prefix(RELEASE_CANDIDATE)?.parse().ok()
            }
            PreReleaseIdentifier::Numeric(_) => None,
        }
    }

    /// Check a hand-built identifier against the parser's rules
    pub fn validate(&self) -> Result<(), VersionError> {
        match self {
            PreReleaseIdentifier::Numeric(_) => Ok(()),
            PreReleaseIdentifier::AlphaNumeric(s) if s.is_empty() => {
                Err(VersionError::BlankPreRelease(s.clone()))
            }
            PreReleaseIdentifier::AlphaNumeric(s) if !is_identifier(s) => {
                Err(VersionError::InvalidPreRelease(s.clone()))
            }
            PreReleaseIdentifier::AlphaNumeric(_) => Ok(()),
        }
    }
}

impl Ord for PreReleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PreReleaseIdentifier::Numeric(a), PreReleaseIdentifier::Numeric(b)) => a.cmp(b),
            (PreReleaseIdentifier::AlphaNumeric(a), PreReleaseIdentifier::AlphaNumeric(b)) => {
                a.cmp(b)
            }
            (PreReleaseIdentifier::Numeric(_), PreReleaseIdentifier::AlphaNumeric(_)) => {
                Ordering::Less
            }
            (PreReleaseIdentifier::AlphaNumeric(_), PreReleaseIdentifier::Numeric(_)) => {
                Ordering::Greater
            }
        }
    }
}

impl PartialOrd for PreReleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for PreReleaseIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreReleaseIdentifier::parse(s)
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PreReleaseIdentifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Characters allowed in pre-release and build identifiers
pub(crate) fn is_identifier(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub(crate) fn has_leading_zeroes(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(s: &str) -> PreReleaseIdentifier {
        PreReleaseIdentifier::AlphaNumeric(s.to_string())
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(
            PreReleaseIdentifier::parse("1").unwrap(),
            PreReleaseIdentifier::Numeric(1)
        );
        assert_eq!(
            PreReleaseIdentifier::parse("0").unwrap(),
            PreReleaseIdentifier::Numeric(0)
        );
    }

    #[test]
    fn test_parse_alphanumeric() {
        assert_eq!(PreReleaseIdentifier::parse("rc1").unwrap(), alpha("rc1"));
        assert_eq!(
            PreReleaseIdentifier::parse("snapshot-cf85392").unwrap(),
            alpha("snapshot-cf85392")
        );
        // Leading zeroes are fine once the identifier is not purely numeric
        assert_eq!(PreReleaseIdentifier::parse("01a").unwrap(), alpha("01a"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PreReleaseIdentifier::parse("").unwrap_err().to_string(),
            "prerelease is empty"
        );
        assert_eq!(
            PreReleaseIdentifier::parse("01").unwrap_err().to_string(),
            r#"numeric PreRelease version must not contain leading zeroes "01""#
        );
        assert_eq!(
            PreReleaseIdentifier::parse("@").unwrap_err().to_string(),
            r#"invalid character(s) found in prerelease "@""#
        );
        assert!(matches!(
            PreReleaseIdentifier::parse("99999999999999999999999"),
            Err(VersionError::PreReleaseOutOfRange(_))
        ));
    }

    #[test]
    fn test_compare_numeric() {
        let one = PreReleaseIdentifier::Numeric(1);
        let two = PreReleaseIdentifier::Numeric(2);
        assert_eq!(one.cmp(&one), Ordering::Equal);
        assert_eq!(two.cmp(&one), Ordering::Greater);
        assert_eq!(one.cmp(&two), Ordering::Less);
    }

    #[test]
    fn test_compare_numeric_below_alphanumeric() {
        let num = PreReleaseIdentifier::Numeric(1);
        let text = alpha("alpha5");
        assert_eq!(num.cmp(&text), Ordering::Less);
        assert_eq!(text.cmp(&num), Ordering::Greater);
    }

    #[test]
    fn test_compare_alphanumeric_by_code_point() {
        assert_eq!(alpha("alpha5").cmp(&alpha("alpha5")), Ordering::Equal);
        assert_eq!(alpha("alphabeta").cmp(&alpha("alpha5")), Ordering::Greater);
        assert_eq!(alpha("alpha5").cmp(&alpha("alphabeta")), Ordering::Less);
        // "rc10" sorts below "rc2": strings do not compare numerically
        assert_eq!(alpha("rc10").cmp(&alpha("rc2")), Ordering::Less);
    }

    #[test]
    fn test_release_candidate() {
        let rc = PreReleaseIdentifier::release_candidate(3);
        assert_eq!(rc.to_string(), "rc3");
        assert!(rc.is_release_candidate());
        assert_eq!(rc.release_candidate_number(), Some(3));

        assert!(!alpha("beta").is_release_candidate());
        assert!(!PreReleaseIdentifier::Numeric(1).is_release_candidate());
        assert_eq!(alpha("rcx").release_candidate_number(), None);
        assert_eq!(alpha("rc").release_candidate_number(), None);
    }

    #[test]
    fn test_validate() {
        assert!(PreReleaseIdentifier::Numeric(4).validate().is_ok());
        assert!(alpha("alpha5").validate().is_ok());
        assert_eq!(
            alpha("").validate().unwrap_err().to_string(),
            r#"prerelease can not be empty """#
        );
        assert_eq!(
            alpha("alpha5@#!").validate().unwrap_err().to_string(),
            r#"invalid character(s) found in prerelease "alpha5@#!""#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PreReleaseIdentifier::Numeric(4).to_string(), "4");
        assert_eq!(alpha("alpha5").to_string(), "alpha5");
    }
}
