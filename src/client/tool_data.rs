//! Galaxy tool data tables API client module.

use super::domain::ResourceDomain;
use super::resource::{ResourceClient, NO_PARAMS};
use crate::connection::Connection;
use crate::errors::GalaxyError;
use crate::models::{DataTable, DataTableSummary};
use crate::types::DataTableName;
use serde::Serialize;
use shrinkwraprs::Shrinkwrap;
use std::sync::Arc;

/// A client for the `tool_data` API. Everything except listing requires an admin API key.
#[derive(Shrinkwrap, Clone)]
pub struct ToolDataClient(ResourceClient);

#[derive(Serialize)]
struct DeleteEntry<'a> {
    values: &'a str,
}

impl ToolDataClient {
    pub(crate) fn new(conn: Arc<Connection>) -> Self {
        Self(ResourceClient::new(conn, ResourceDomain::ToolData))
    }

    /// List the tool data tables known to Galaxy.
    pub fn get_data_tables(&self) -> Result<Vec<DataTableSummary>, GalaxyError> {
        self.get(&[], NO_PARAMS)
    }

    /// Get the columns and rows of a data table.
    pub fn show_data_table(&self, name: &DataTableName) -> Result<DataTable, GalaxyError> {
        self.get(&[name.as_str()], NO_PARAMS)
    }

    /// Make Galaxy re-read a data table from disk.
    pub fn reload_data_table(&self, name: &DataTableName) -> Result<DataTable, GalaxyError> {
        self.get(&[name.as_str(), "reload"], NO_PARAMS)
    }

    /// Remove a row from a data table. `values` is the row with its fields
    /// joined by tabs, e.g. `"hg38\thg38\tHuman\t/data/hg38.fa"`.
    pub fn delete_data_table(
        &self,
        name: &DataTableName,
        values: &str,
    ) -> Result<DataTable, GalaxyError> {
        self.delete_with_body(&[name.as_str()], &DeleteEntry { values })
    }
}
