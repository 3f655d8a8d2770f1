//! Definitions of structs describing response data from the Galaxy API.
//!
//! Galaxy's responses vary between versions and between the "summary" and
//! "detailed" views of the same object, so most fields are optional.

use crate::types::*;
use serde::{Deserialize, Serialize};

// ==================================================
//                 DATASETS
// ==================================================

/// Which kind of dataset an ID refers to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HdaLdda {
    /// History dataset association
    #[default]
    Hda,
    /// Library dataset dataset association
    Ldda,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DatasetState {
    New,
    Upload,
    Queued,
    Running,
    Ok,
    Empty,
    Error,
    Paused,
    SettingMetadata,
    FailedMetadata,
    Deferred,
    Discarded,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    pub id: DatasetId,
    pub name: Option<String>,
    pub state: Option<DatasetState>,
    pub extension: Option<String>,
    pub file_ext: Option<String>,
    pub file_size: Option<u64>,
    pub history_id: Option<HistoryId>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub purged: bool,
    pub create_time: Option<DateString>,
    pub update_time: Option<DateString>,
    /// Everything else Galaxy said about the dataset.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Dataset {
    /// Datatype extension, which HDAs and LDDAs report under different names.
    pub fn datatype(&self) -> Option<&str> {
        self.extension.as_deref().or(self.file_ext.as_deref())
    }
}

// ==================================================
//                 FOLDERS
// ==================================================

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<FolderId>,
    pub parent_library_id: Option<LibraryId>,
    pub item_count: Option<u64>,
    pub genome_build: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    pub update_time: Option<DateString>,
}

#[derive(Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FolderItemKind {
    Folder,
    File,
}

/// A subfolder or a library dataset inside a folder.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FolderItem {
    /// Either a [FolderId] or a library dataset ID, depending on `kind`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FolderItemKind,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    pub file_size: Option<String>,
    pub update_time: Option<DateString>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FolderMetadata {
    pub folder_name: Option<String>,
    pub folder_description: Option<String>,
    pub parent_library_id: Option<LibraryId>,
    pub total_rows: Option<u64>,
    /// `(folder ID, folder name)` pairs from the library root down to this folder.
    #[serde(default)]
    pub full_path: Vec<(FolderId, String)>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FolderContents {
    #[serde(default)]
    pub metadata: FolderMetadata,
    pub folder_contents: Vec<FolderItem>,
}

// ==================================================
//                 ROLES
// ==================================================

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub role_type: Option<String>,
    pub url: Option<String>,
}

/// Older Galaxy versions answer role creation with a list of one role.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.into_iter().next(),
        }
    }
}

// ==================================================
//                 TOOL DATA
// ==================================================

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DataTableSummary {
    pub name: DataTableName,
    pub model_class: Option<String>,
}

/// Contents of a tool data table, e.g. the reference genomes known to `all_fasta`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DataTable {
    pub name: DataTableName,
    pub columns: Vec<String>,
    pub fields: Vec<Vec<String>>,
    pub model_class: Option<String>,
}
