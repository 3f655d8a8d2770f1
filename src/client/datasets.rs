//! Galaxy datasets API client module.

use super::domain::ResourceDomain;
use super::resource::ResourceClient;
use crate::connection::Connection;
use crate::errors::{FileIOError, GalaxyError};
use crate::models::{Dataset, HdaLdda};
use crate::types::DatasetId;
use bytes::Bytes;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err::File;
use log::debug;
use serde::Serialize;
use shrinkwraprs::Shrinkwrap;
use std::io::Read;
use std::sync::Arc;

/// A client for the `datasets` API.
#[derive(Shrinkwrap, Clone)]
pub struct DatasetClient(ResourceClient);

#[derive(Serialize)]
struct ShowQuery {
    hda_ldda: HdaLdda,
}

#[derive(Serialize)]
struct DisplayQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    to_ext: Option<&'a str>,
}

impl DatasetClient {
    pub(crate) fn new(conn: Arc<Connection>) -> Self {
        Self(ResourceClient::new(conn, ResourceDomain::Datasets))
    }

    /// Get details of a history dataset or a library dataset.
    pub fn show_dataset(&self, id: &DatasetId, kind: HdaLdda) -> Result<Dataset, GalaxyError> {
        self.get(&[id.as_str()], &ShowQuery { hda_ldda: kind })
    }

    /// Download the contents of a dataset, optionally converted to the
    /// datatype extension `to_ext`.
    pub fn download_dataset(
        &self,
        id: &DatasetId,
        to_ext: Option<&str>,
    ) -> Result<Bytes, GalaxyError> {
        self.get_bytes(&[id.as_str(), "display"], &DisplayQuery { to_ext })
    }

    /// Download the contents of a dataset to a local file, without holding
    /// it in memory. Returns the number of bytes written.
    ///
    /// The contents are written next to `dst` first and only moved to `dst`
    /// once complete, so a failed download leaves `dst` as it was.
    pub fn download_dataset_to(
        &self,
        id: &DatasetId,
        to_ext: Option<&str>,
        dst: &Utf8Path,
    ) -> Result<u64, FileIOError> {
        let mut res = self.get_response(&[id.as_str(), "display"], &DisplayQuery { to_ext })?;
        let written = write_whole(&mut res, dst)?;
        debug!("Downloaded dataset {} to {} ({} bytes)", id, dst, written);
        Ok(written)
    }
}

/// Copy `src` to `dst` by way of a `.part` file in the same directory,
/// which is removed if copying fails.
fn write_whole(src: &mut impl Read, dst: &Utf8Path) -> std::io::Result<u64> {
    let part = part_path(dst);
    let copied = File::create(&part).and_then(|mut file| std::io::copy(src, &mut file));
    match copied {
        Ok(written) => {
            fs_err::rename(&part, dst)?;
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = fs_err::remove_file(&part) {
                debug!("{}", cleanup);
            }
            Err(e)
        }
    }
}

fn part_path(dst: &Utf8Path) -> Utf8PathBuf {
    let name = dst.file_name().unwrap_or("download");
    dst.with_file_name(format!(".{}.part", name))
}
