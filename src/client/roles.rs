//! Galaxy roles API client module.

use super::domain::ResourceDomain;
use super::resource::{ResourceClient, NO_PARAMS};
use crate::connection::Connection;
use crate::errors::GalaxyError;
use crate::models::{OneOrMany, Role};
use crate::types::{GroupId, RoleId, UserId};
use serde::Serialize;
use shrinkwraprs::Shrinkwrap;
use std::sync::Arc;

/// A client for the `roles` API. Creating roles requires an admin API key.
#[derive(Shrinkwrap, Clone)]
pub struct RolesClient(ResourceClient);

#[derive(Serialize)]
struct CreateRole<'a> {
    name: &'a str,
    description: &'a str,
    user_ids: &'a [UserId],
    group_ids: &'a [GroupId],
}

impl RolesClient {
    pub(crate) fn new(conn: Arc<Connection>) -> Self {
        Self(ResourceClient::new(conn, ResourceDomain::Roles))
    }

    /// List the roles visible to the user.
    pub fn get_roles(&self) -> Result<Vec<Role>, GalaxyError> {
        self.get(&[], NO_PARAMS)
    }

    /// Get details of a role.
    pub fn show_role(&self, id: &RoleId) -> Result<Role, GalaxyError> {
        self.get(&[id.as_str()], NO_PARAMS)
    }

    /// Create a role which associates the given users and groups.
    pub fn create_role(
        &self,
        name: &str,
        description: &str,
        user_ids: &[UserId],
        group_ids: &[GroupId],
    ) -> Result<Role, GalaxyError> {
        let created: OneOrMany<Role> = self.post(
            &[],
            &CreateRole {
                name,
                description,
                user_ids,
                group_ids,
            },
        )?;
        created.into_first().ok_or_else(|| GalaxyError::EmptyResponse {
            endpoint: self.url(),
        })
    }
}
