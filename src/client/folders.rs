//! Galaxy data library folders API client module.

use super::domain::ResourceDomain;
use super::resource::{ResourceClient, NO_PARAMS};
use crate::connection::Connection;
use crate::errors::GalaxyError;
use crate::models::{Folder, FolderContents};
use crate::types::FolderId;
use serde::Serialize;
use shrinkwraprs::Shrinkwrap;
use std::sync::Arc;

/// A client for the `folders` API, which manages folders inside data libraries.
#[derive(Shrinkwrap, Clone)]
pub struct FoldersClient(ResourceClient);

#[derive(Serialize)]
struct FolderPayload<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct DeleteQuery {
    undelete: bool,
}

impl FoldersClient {
    pub(crate) fn new(conn: Arc<Connection>) -> Self {
        Self(ResourceClient::new(conn, ResourceDomain::Folders))
    }

    /// Get details of a folder.
    pub fn show_folder(&self, id: &FolderId) -> Result<Folder, GalaxyError> {
        self.get(&[id.as_str()], NO_PARAMS)
    }

    /// List the subfolders and datasets directly inside a folder.
    pub fn show_folder_contents(&self, id: &FolderId) -> Result<FolderContents, GalaxyError> {
        self.get(&[id.as_str(), "contents"], NO_PARAMS)
    }

    /// Create a folder inside `parent`.
    pub fn create_folder(
        &self,
        parent: &FolderId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Folder, GalaxyError> {
        self.post(&[parent.as_str()], &FolderPayload { name, description })
    }

    /// Rename a folder, optionally changing its description.
    pub fn update_folder(
        &self,
        id: &FolderId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Folder, GalaxyError> {
        self.put(&[id.as_str()], &FolderPayload { name, description })
    }

    /// Mark a folder as deleted, or restore it if `undelete` is true.
    pub fn delete_folder(&self, id: &FolderId, undelete: bool) -> Result<Folder, GalaxyError> {
        self.delete(&[id.as_str()], &DeleteQuery { undelete })
    }
}
