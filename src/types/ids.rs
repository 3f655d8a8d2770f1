//! Galaxy identifies most things by an opaque, server-encoded string.

use aliri_braid::braid;

/// Encoded dataset ID (either an HDA or an LDDA)
#[braid(serde)]
pub struct DatasetId;

/// Encoded library folder ID, e.g. `F0a5b2c...`
#[braid(serde)]
pub struct FolderId;

/// Encoded data library ID
#[braid(serde)]
pub struct LibraryId;

/// Encoded history ID
#[braid(serde)]
pub struct HistoryId;

/// Encoded role ID
#[braid(serde)]
pub struct RoleId;

/// Encoded user ID
#[braid(serde)]
pub struct UserId;

/// Encoded group ID
#[braid(serde)]
pub struct GroupId;
