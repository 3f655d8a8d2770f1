//! [GalaxyInstance] is the entry point: one configured connection to a Galaxy server.

use crate::client::datasets::DatasetClient;
use crate::client::domain::ResourceDomain;
use crate::client::folders::FoldersClient;
use crate::client::resource::ResourceClient;
use crate::client::roles::RolesClient;
use crate::client::tool_data::ToolDataClient;
use crate::config::{InstanceConfig, TransportConfig, GET_RETRY};
use crate::connection::{Connection, DefaultParams, Identity};
use crate::errors::GalaxyError;
use crate::types::{GalaxyApiUrl, GalaxyUrl};
use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A connection to a Galaxy server, identified by its URL and either a user's
/// API key or their email and password.
///
/// Creating a [GalaxyInstance] does no network I/O. When it is given an email and
/// password instead of an API key, the key is obtained the first time it is
/// needed, see [GalaxyInstance::key].
///
/// Each resource domain of the API has a client, which is a public field:
///
/// ```no_run
/// use bioblend_contrib::GalaxyInstance;
///
/// let gi = GalaxyInstance::new("http://127.0.0.1:8080", Some("your_api_key"), None, None)?;
/// let roles = gi.roles.get_roles()?;
/// # Ok::<(), bioblend_contrib::errors::GalaxyError>(())
/// ```
///
/// **TLS certificates are not verified** unless [GalaxyInstanceBuilder::verify] is used.
pub struct GalaxyInstance {
    conn: Arc<Connection>,
    pub libraries: ResourceClient,
    pub histories: ResourceClient,
    pub workflows: ResourceClient,
    pub datasets: DatasetClient,
    pub users: ResourceClient,
    pub genomes: ResourceClient,
    pub tools: ResourceClient,
    pub tool_shed: ResourceClient,
    pub config: ResourceClient,
    pub visual: ResourceClient,
    pub quotas: ResourceClient,
    pub groups: ResourceClient,
    pub roles: RolesClient,
    pub datatypes: ResourceClient,
    pub jobs: ResourceClient,
    pub forms: ResourceClient,
    pub ftp_files: ResourceClient,
    pub tool_data: ToolDataClient,
    pub folders: FoldersClient,
}

pub struct GalaxyInstanceBuilder {
    url: String,
    key: Option<String>,
    email: Option<String>,
    password: Option<String>,
    transport: TransportConfig,
}

impl GalaxyInstanceBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: None,
            email: None,
            password: None,
            transport: Default::default(),
        }
    }

    /// Use this API key. An empty key counts as no key.
    pub fn key(self, key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..self
        }
    }

    /// Obtain an API key using this email and password, unless a key is given.
    pub fn login(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            ..self
        }
    }

    /// Verify TLS certificates. Off by default.
    pub fn verify(mut self, verify: bool) -> Self {
        self.transport.verify = verify;
        self
    }

    /// Send an additional header with every request.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.transport.insert_header(name, value);
        self
    }

    /// Time limit for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = Some(timeout);
        self
    }

    /// Create the [GalaxyInstance]. Fails if the URL is invalid.
    pub fn build(self) -> Result<GalaxyInstance, GalaxyError> {
        let base_url = GalaxyUrl::normalize(&self.url)?;
        let key = self.key.filter(|k| !k.is_empty());
        let identity = if key.is_some() {
            None
        } else {
            Some(Identity {
                email: self.email,
                password: self.password,
            })
        };
        let conn = Connection::new(base_url, key, identity, self.transport)?;
        Ok(GalaxyInstance::with_connection(Arc::new(conn)))
    }
}

impl GalaxyInstance {
    /// Create a [GalaxyInstance]. If `key` is not given, both `email` and
    /// `password` must be, or else getting the key will fail.
    ///
    /// `url` may omit the scheme, in which case `http://` is used.
    pub fn new(
        url: &str,
        key: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, GalaxyError> {
        let mut builder = Self::build(url);
        builder.key = key.map(String::from);
        builder.email = email.map(String::from);
        builder.password = password.map(String::from);
        builder.build()
    }

    /// Create a builder, for more options than [GalaxyInstance::new].
    pub fn build(url: impl Into<String>) -> GalaxyInstanceBuilder {
        GalaxyInstanceBuilder::new(url)
    }

    /// Create a [GalaxyInstance] from deserialized configuration.
    pub fn from_config(config: &InstanceConfig) -> Result<Self, GalaxyError> {
        let mut builder = Self::build(config.url.as_str()).verify(config.verify);
        builder.key = config.key.clone();
        builder.email = config.email.clone();
        builder.password = config.password.clone();
        builder.build()
    }

    fn with_connection(conn: Arc<Connection>) -> Self {
        let client = |domain| ResourceClient::new(Arc::clone(&conn), domain);
        Self {
            libraries: client(ResourceDomain::Libraries),
            histories: client(ResourceDomain::Histories),
            workflows: client(ResourceDomain::Workflows),
            datasets: DatasetClient::new(Arc::clone(&conn)),
            users: client(ResourceDomain::Users),
            genomes: client(ResourceDomain::Genomes),
            tools: client(ResourceDomain::Tools),
            tool_shed: client(ResourceDomain::ToolShed),
            config: client(ResourceDomain::Config),
            visual: client(ResourceDomain::Visual),
            quotas: client(ResourceDomain::Quotas),
            groups: client(ResourceDomain::Groups),
            roles: RolesClient::new(Arc::clone(&conn)),
            datatypes: client(ResourceDomain::Datatypes),
            jobs: client(ResourceDomain::Jobs),
            forms: client(ResourceDomain::Forms),
            ftp_files: client(ResourceDomain::FtpFiles),
            tool_data: ToolDataClient::new(Arc::clone(&conn)),
            folders: FoldersClient::new(Arc::clone(&conn)),
            conn,
        }
    }

    /// Server root, e.g. `https://usegalaxy.org`
    pub fn base_url(&self) -> &GalaxyUrl {
        self.conn.base_url()
    }

    /// API root, e.g. `https://usegalaxy.org/api`
    pub fn api_url(&self) -> &GalaxyApiUrl {
        self.conn.api_url()
    }

    /// Get the API key.
    ///
    /// If this instance was created with an email and password instead of a key,
    /// the first call makes one (unretried) request to
    /// `<api url>/authenticate/baseauth` and remembers the result. Until that
    /// succeeds, every call tries again.
    pub fn key(&self) -> Result<String, GalaxyError> {
        self.conn.key()
    }

    /// Query parameters which are added to every request made by the resource
    /// clients. Gets the API key if necessary.
    pub fn default_params(&self) -> Result<DefaultParams, GalaxyError> {
        self.conn.default_params()
    }

    /// Whether TLS certificates are verified.
    pub fn verify(&self) -> bool {
        self.conn.transport().verify()
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        self.conn.transport().headers()
    }

    /// Start a request which has this instance's default headers and TLS setting,
    /// but neither the API key nor retries.
    pub fn raw_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.conn.raw(method, url)
    }

    /// Get the client for a resource domain.
    pub fn client(&self, domain: ResourceDomain) -> &ResourceClient {
        match domain {
            ResourceDomain::Libraries => &self.libraries,
            ResourceDomain::Histories => &self.histories,
            ResourceDomain::Workflows => &self.workflows,
            ResourceDomain::Datasets => &*self.datasets,
            ResourceDomain::Users => &self.users,
            ResourceDomain::Genomes => &self.genomes,
            ResourceDomain::Tools => &self.tools,
            ResourceDomain::ToolShed => &self.tool_shed,
            ResourceDomain::Config => &self.config,
            ResourceDomain::Visual => &self.visual,
            ResourceDomain::Quotas => &self.quotas,
            ResourceDomain::Groups => &self.groups,
            ResourceDomain::Roles => &*self.roles,
            ResourceDomain::Datatypes => &self.datatypes,
            ResourceDomain::Jobs => &self.jobs,
            ResourceDomain::Forms => &self.forms,
            ResourceDomain::FtpFiles => &self.ftp_files,
            ResourceDomain::ToolData => &*self.tool_data,
            ResourceDomain::Folders => &*self.folders,
        }
    }

    /// Iterate over every resource client.
    pub fn clients(&self) -> impl Iterator<Item = (ResourceDomain, &ResourceClient)> + '_ {
        ResourceDomain::ALL
            .into_iter()
            .map(move |domain| (domain, self.client(domain)))
    }

    // ==================================================
    //        PROCESS-WIDE GET RETRY POLICY
    // ==================================================
    // These read and write GET_RETRY, so they affect every instance.

    /// Maximum number of attempts for GET requests, shared by all instances.
    pub fn max_get_attempts(&self) -> u32 {
        GET_RETRY.max_attempts()
    }

    /// Set the maximum number of attempts for GET requests **of every instance**.
    pub fn set_max_get_attempts(&self, attempts: u32) {
        GET_RETRY.set_max_attempts(attempts)
    }

    /// Delay between GET attempts, shared by all instances.
    pub fn get_retry_delay(&self) -> Duration {
        GET_RETRY.delay()
    }

    /// Set the delay between GET attempts **of every instance**.
    pub fn set_get_retry_delay(&self, delay: Duration) {
        GET_RETRY.set_delay(delay)
    }
}

impl fmt::Display for GalaxyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GalaxyInstance object for Galaxy at {}", self.base_url())
    }
}

impl fmt::Debug for GalaxyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalaxyInstance")
            .field("base_url", self.base_url())
            .field("api_url", self.api_url())
            .field("verify", &self.verify())
            .finish_non_exhaustive()
    }
}
