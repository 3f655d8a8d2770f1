//! The request primitive shared by every resource client.

use super::domain::ResourceDomain;
use crate::config::GET_RETRY;
use crate::connection::Connection;
use crate::errors::{check, GalaxyError, InvalidGalaxyUrl};
use bytes::Bytes;
use log::{debug, warn};
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Query parameters for requests which have none of their own.
pub const NO_PARAMS: &[(&str, &str)] = &[];

/// A client for one resource domain of the Galaxy API, e.g. `histories`.
///
/// Every request goes to `<api url>/<module>[/<segment>...]` and carries
/// the instance's API key, default headers, and TLS setting.
#[derive(Clone)]
pub struct ResourceClient {
    conn: Arc<Connection>,
    domain: ResourceDomain,
}

impl ResourceClient {
    pub(crate) fn new(conn: Arc<Connection>, domain: ResourceDomain) -> Self {
        Self { conn, domain }
    }

    pub fn domain(&self) -> ResourceDomain {
        self.domain
    }

    /// URL of this resource domain, e.g. `https://usegalaxy.org/api/histories`
    pub fn url(&self) -> String {
        format!("{}/{}", self.conn.api_url(), self.domain.module())
    }

    /// URL of `segments` under this resource domain.
    ///
    /// Each segment is percent-encoded, so `/`, `?` and `#` stay inside it.
    /// Empty, `.` and `..` segments are rejected.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GalaxyError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(GalaxyError::InvalidPathSegment(bad.to_string()));
        }
        let api_url = self.conn.api_url().as_str();
        let mut url =
            Url::parse(api_url).map_err(|_| InvalidGalaxyUrl::Malformed(api_url.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| InvalidGalaxyUrl::Malformed(api_url.to_string()))?
            .pop_if_empty()
            .push(self.domain.module())
            .extend(segments);
        Ok(url)
    }

    /// GET JSON, retrying according to [GET_RETRY].
    pub fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &(impl Serialize + ?Sized),
    ) -> Result<T, GalaxyError> {
        Ok(self.get_response(segments, params)?.json()?)
    }

    /// GET raw bytes, retrying according to [GET_RETRY].
    pub fn get_bytes(
        &self,
        segments: &[&str],
        params: &(impl Serialize + ?Sized),
    ) -> Result<Bytes, GalaxyError> {
        Ok(self.get_response(segments, params)?.bytes()?)
    }

    /// POST a JSON body. Not retried.
    pub fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, GalaxyError> {
        let req = self.authed(Method::POST, segments, NO_PARAMS)?.json(body);
        Ok(send(req)?.json()?)
    }

    /// PUT a JSON body. Not retried.
    pub fn put<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, GalaxyError> {
        let req = self.authed(Method::PUT, segments, NO_PARAMS)?.json(body);
        Ok(send(req)?.json()?)
    }

    /// DELETE with query parameters. Not retried.
    pub fn delete<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &(impl Serialize + ?Sized),
    ) -> Result<T, GalaxyError> {
        let req = self.authed(Method::DELETE, segments, params)?;
        Ok(send(req)?.json()?)
    }

    /// DELETE with a JSON body. Not retried.
    pub fn delete_with_body<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, GalaxyError> {
        let req = self.authed(Method::DELETE, segments, NO_PARAMS)?.json(body);
        Ok(send(req)?.json()?)
    }

    /// GET with retries. The API key is resolved once, before the first
    /// attempt; failing to resolve it is never retried.
    pub(crate) fn get_response(
        &self,
        segments: &[&str],
        params: &(impl Serialize + ?Sized),
    ) -> Result<Response, GalaxyError> {
        let url = self.endpoint(segments)?;
        let defaults = self.conn.default_params()?;
        let max_attempts = GET_RETRY.max_attempts().max(1);
        let mut attempt = 1;
        loop {
            debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);
            let req = self
                .conn
                .raw(Method::GET, url.as_str())
                .query(&defaults)
                .query(params);
            match send(req) {
                Ok(res) => return Ok(res),
                Err(e) if attempt < max_attempts => {
                    let delay = GET_RETRY.delay();
                    warn!(
                        "GET {} failed ({}), retrying in {:?} ({}/{})",
                        url, e, delay, attempt, max_attempts
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn authed(
        &self,
        method: Method,
        segments: &[&str],
        params: &(impl Serialize + ?Sized),
    ) -> Result<RequestBuilder, GalaxyError> {
        let url = self.endpoint(segments)?;
        let defaults = self.conn.default_params()?;
        debug!("{} {}", method, url);
        Ok(self.conn.raw(method, url.as_str()).query(&defaults).query(params))
    }
}

fn send(req: RequestBuilder) -> Result<Response, GalaxyError> {
    check(req.send()?)
}
