//! A client for the API of a [Galaxy](https://galaxyproject.org) server.
//!
//! [GalaxyInstance] holds the connection to one server: its URL, the user's API key
//! (given directly, or obtained from an email and password on first use), and
//! transport settings. It has a client for each resource domain of the API.

mod client;
mod config;
mod connection;
mod constants;
pub mod errors;
mod instance;
pub mod models;
pub mod types;

pub use client::datasets::DatasetClient;
pub use client::domain::ResourceDomain;
pub use client::folders::FoldersClient;
pub use client::resource::{ResourceClient, NO_PARAMS};
pub use client::roles::RolesClient;
pub use client::tool_data::ToolDataClient;
pub use config::{GetRetrySettings, InstanceConfig, TransportConfig, GET_RETRY};
pub use connection::DefaultParams;
pub use instance::{GalaxyInstance, GalaxyInstanceBuilder};
pub use reqwest;
