use crate::domain::prerelease::{has_leading_zeroes, is_identifier, PreReleaseIdentifier};
use crate::error::{Component, VersionError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version with an optional textual prefix (e.g. the `v` of `v1.2.3`).
///
/// Equality is structural: two versions that differ only in build metadata or
/// prefix are not equal. Precedence is given by [`Version::compare`], which
/// ignores both. Because the two disagree, `Version` deliberately does not
/// implement `Ord`; use `compare` and the `gt`/`gte`/`lt`/`lte` helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<PreReleaseIdentifier>,
    pub build: Vec<String>,
    pub prefix: String,
}

impl Version {
    /// Create a new final-release version without prefix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    /// The zero version `<prefix>0.0.0`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Version {
            prefix: prefix.into(),
            ..Version::default()
        }
    }

    /// Strictly parse a version string such as `v1.2.3-rc1+build.5`.
    ///
    /// Everything before the first ASCII digit is taken as the prefix. The
    /// remainder must be `major.minor.patch`, optionally followed by `-` and
    /// dot-separated pre-release identifiers, and by `+` and dot-separated
    /// build identifiers.
    ///
    /// # Example
    /// ```
    /// # use git_semver::domain::Version;
    /// let v = Version::parse("v1.2.3-rc1").unwrap();
    /// assert_eq!(v.prefix, "v");
    /// assert_eq!(v.to_string(), "v1.2.3-rc1");
    /// assert!(Version::parse("01.0.1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        let (prefix, rest) = split_prefix(text);

        let mut parts = rest.splitn(3, '.');
        let (Some(major), Some(minor), Some(tail)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(VersionError::MissingComponents);
        };

        let major = parse_number(Component::Major, major)?;
        let minor = parse_number(Component::Minor, minor)?;

        let (tail, build) = match tail.split_once('+') {
            Some((head, build)) => (head, Some(build)),
            None => (tail, None),
        };
        let (patch, prerelease) = match tail.split_once('-') {
            Some((patch, prerelease)) => (patch, Some(prerelease)),
            None => (tail, None),
        };

        let patch = parse_number(Component::Patch, patch)?;

        let prerelease = match prerelease {
            Some(pre) => pre
                .split('.')
                .map(PreReleaseIdentifier::parse)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let build = match build {
            Some(build) => build
                .split('.')
                .map(|id| {
                    if id.is_empty() {
                        Err(VersionError::EmptyBuild)
                    } else if !is_identifier(id) {
                        Err(VersionError::InvalidBuild(id.to_string()))
                    } else {
                        Ok(id.to_string())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            prefix: prefix.to_string(),
        })
    }

    /// Relaxed parse for user input.
    ///
    /// Trims surrounding whitespace, removes leading zeroes from the numeric
    /// components and fills in a missing minor or patch with `0`. Short forms
    /// may not carry pre-release or build metadata.
    pub fn parse_tolerant(text: &str) -> Result<Self, VersionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let (prefix, rest) = split_prefix(trimmed);
        let mut parts: Vec<String> = rest.splitn(3, '.').map(strip_leading_zeroes).collect();

        if parts.len() < 3 {
            if parts.last().is_some_and(|last| last.contains(['-', '+'])) {
                return Err(VersionError::ShortVersionWithMetadata);
            }
            parts.resize(3, "0".to_string());
        }

        Version::parse(&format!("{}{}", prefix, parts.join(".")))
    }

    /// Compare by semver precedence, ignoring build metadata and prefix
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    pub fn gt(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn gte(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    pub fn lt(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn lte(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Next major version: minor and patch reset, pre-release cleared
    pub fn increment_major(&self) -> Result<Self, VersionError> {
        let major = self
            .major
            .checked_add(1)
            .ok_or(VersionError::Overflow(Component::Major))?;
        Ok(Version {
            major,
            minor: 0,
            patch: 0,
            prerelease: Vec::new(),
            ..self.clone()
        })
    }

    /// Next minor version: patch reset, pre-release cleared
    pub fn increment_minor(&self) -> Result<Self, VersionError> {
        let minor = self
            .minor
            .checked_add(1)
            .ok_or(VersionError::Overflow(Component::Minor))?;
        Ok(Version {
            minor,
            patch: 0,
            prerelease: Vec::new(),
            ..self.clone()
        })
    }

    /// Next patch version, pre-release cleared
    pub fn increment_patch(&self) -> Result<Self, VersionError> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or(VersionError::Overflow(Component::Patch))?;
        Ok(Version {
            patch,
            prerelease: Vec::new(),
            ..self.clone()
        })
    }

    /// Check pre-release and build identifiers of a hand-built version
    pub fn validate(&self) -> Result<(), VersionError> {
        for identifier in &self.prerelease {
            identifier.validate()?;
        }

        for build in &self.build {
            if build.is_empty() {
                return Err(VersionError::BlankBuild(build.clone()));
            }
            if !is_identifier(build) {
                return Err(VersionError::InvalidBuild(build.clone()));
            }
        }

        Ok(())
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// `<prefix><major>.<minor>.<patch>`, without pre-release or build
    pub fn release_line(&self) -> String {
        format!("{}{}.{}.{}", self.prefix, self.major, self.minor, self.patch)
    }
}

/// Validate a single build metadata identifier
pub fn parse_build_identifier(s: &str) -> Result<String, VersionError> {
    if s.is_empty() {
        return Err(VersionError::EmptyBuildIdentifier);
    }
    if !is_identifier(s) {
        return Err(VersionError::InvalidBuild(s.to_string()));
    }
    Ok(s.to_string())
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release_line())?;
        if !self.prerelease.is_empty() {
            let pre: Vec<String> = self.prerelease.iter().map(|p| p.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

fn compare_prerelease(a: &[PreReleaseIdentifier], b: &[PreReleaseIdentifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A final release outranks any pre-release of the same triple
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.iter().cmp(b.iter()),
    }
}

fn split_prefix(text: &str) -> (&str, &str) {
    match text.find(|c: char| c.is_ascii_digit()) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    }
}

fn parse_number(component: Component, s: &str) -> Result<u64, VersionError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidNumber {
            component,
            value: s.to_string(),
        });
    }
    if has_leading_zeroes(s) {
        return Err(VersionError::LeadingZeroes {
            component,
            value: s.to_string(),
        });
    }
    s.parse::<u64>().map_err(|_| VersionError::NumberOutOfRange {
        component,
        value: s.to_string(),
    })
}

fn strip_leading_zeroes(part: &str) -> String {
    if part.len() <= 1 {
        return part.to_string();
    }
    let stripped = part.trim_start_matches('0');
    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        stripped.to_string()
    } else {
        format!("0{}", stripped)
    }
}
