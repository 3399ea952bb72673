use crate::domain::version::Version;
use crate::error::VersionError;
use git2::Oid;

/// Reference namespace git stores tags under
pub const TAG_NAMESPACE: &str = "refs/tags/";

/// A repository tag whose name parsed as a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Tag name without the `refs/tags/` namespace
    pub name: String,
    /// Commit the tag points at
    pub target: Oid,
    pub version: Version,
}

impl TagRecord {
    /// Parse a tag reference (e.g. "refs/tags/v1.2.3" or "v1.2.3")
    ///
    /// # Returns
    /// * `Ok(TagRecord)` - The tag name is a strictly valid version
    /// * `Err` - The tag is not a version tag
    pub fn parse(reference: &str, target: Oid) -> Result<Self, VersionError> {
        let name = reference.strip_prefix(TAG_NAMESPACE).unwrap_or(reference);
        let version = Version::parse(name)?;

        Ok(TagRecord {
            name: name.to_string(),
            target,
            version,
        })
    }

    /// Key grouping tags of the same `prefix+major.minor.patch`
    pub fn release_line(&self) -> String {
        self.version.release_line()
    }
}
