//! Domain logic - pure versioning rules independent of git operations

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::PreReleaseIdentifier;
pub use tag::TagRecord;
pub use version::{parse_build_identifier, Version};
