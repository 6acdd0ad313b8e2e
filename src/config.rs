// Copyright 2024 Dmitry Tantsur <dtantsur@protonmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Authentication configuration.

use std::env;

use crate::error::{Error, Result};

/// Credentials required for authenticating to an OpenStack cloud.
///
/// All five fields are mandatory; [`OsClient::new`](crate::OsClient::new)
/// rejects a configuration with any of them empty.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// User name.
    pub user: String,
    /// Password of the user.
    pub password: String,
    /// Authentication endpoint of the Identity service.
    pub auth_url: String,
    /// Domain of the user and the tenant.
    pub auth_domain: String,
    /// Name of the tenant (project) to scope the session to.
    pub tenant_name: String,
}

impl AuthConfig {
    /// Create a configuration from environment variables.
    ///
    /// Reads `OS_USERNAME`, `OS_PASSWORD`, `OS_USER_DOMAIN_NAME`,
    /// `OS_AUTH_URL` and `OS_PROJECT_NAME`. An unset or empty variable
    /// results in [`Error::MissingEnv`] naming it.
    pub fn from_env() -> Result<AuthConfig> {
        Ok(AuthConfig {
            user: require_env("OS_USERNAME")?,
            password: require_env("OS_PASSWORD")?,
            auth_domain: require_env("OS_USER_DOMAIN_NAME")?,
            auth_url: require_env("OS_AUTH_URL")?,
            tenant_name: require_env("OS_PROJECT_NAME")?,
        })
    }

    /// Check that no field is empty.
    ///
    /// The first missing field is reported, checked in a fixed order:
    /// user, password, auth URL, auth domain, tenant name.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(Error::MissingConfig("user"));
        }
        if self.password.is_empty() {
            return Err(Error::MissingConfig("password"));
        }
        if self.auth_url.is_empty() {
            return Err(Error::MissingConfig("auth URL"));
        }
        if self.auth_domain.is_empty() {
            return Err(Error::MissingConfig("auth domain"));
        }
        if self.tenant_name.is_empty() {
            return Err(Error::MissingConfig("tenant name"));
        }
        Ok(())
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnv(name)),
    }
}
