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

//! Client API.

use log::{debug, error};
use openstack::compute::{Flavor, FlavorSummary};
use openstack::image::Image;
use openstack::Cloud;
use osauth::common::IdOrName;
use osauth::identity::Password;
use osauth::Session;

use crate::config::AuthConfig;
use crate::error::Result;
use crate::utils;

/// Region all service endpoints are resolved in.
const REGION: &str = "RegionOne";

/// An authenticated client for flavor and image retrieval.
///
/// Create one with [`new`](#method.new) or [`from_env`](#method.from_env),
/// then use the retrieval calls. All protocol work, token caching and
/// pagination happens in the underlying SDK.
#[derive(Clone, Debug)]
pub struct OsClient {
    cloud: Cloud,
}

impl OsClient {
    /// Authenticate with the given configuration and create a client.
    ///
    /// The configuration is validated first; the first empty field is
    /// reported as [`Error::MissingConfig`](crate::Error::MissingConfig).
    /// Identity v3 password authentication is then set up with the
    /// session scoped to the configured tenant.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example() -> osclient::Result<()> {
    /// let config = osclient::AuthConfig {
    ///     user: "admin".to_string(),
    ///     password: "pa$$w0rd".to_string(),
    ///     auth_url: "https://cloud.local/identity".to_string(),
    ///     auth_domain: "Default".to_string(),
    ///     tenant_name: "project1".to_string(),
    /// };
    /// let client = osclient::OsClient::new(&config).await?;
    /// # Ok(()) }
    /// # #[tokio::main]
    /// # async fn main() { example().await.unwrap(); }
    /// ```
    pub async fn new(config: &AuthConfig) -> Result<OsClient> {
        config.validate()?;

        let auth = Password::new(
            &config.auth_url,
            config.user.as_str(),
            config.password.as_str(),
            config.auth_domain.as_str(),
        )?
        .with_project_scope(
            IdOrName::from_name(config.tenant_name.as_str()),
            IdOrName::from_name(config.auth_domain.as_str()),
        );

        let session = match Session::new(auth).await {
            Ok(session) => session,
            Err(err) => {
                error!("Failed to establish an authenticated OpenStack session: {}", err);
                return Err(err.into());
            }
        };

        Ok(OsClient {
            cloud: Cloud::from(session.with_region(REGION)),
        })
    }

    /// Create a client from the standard `OS_*` environment variables.
    ///
    /// See [`AuthConfig::from_env`] for the variables involved.
    pub async fn from_env() -> Result<OsClient> {
        let config = AuthConfig::from_env()?;
        OsClient::new(&config).await
    }

    /// List all flavors visible to the tenant.
    pub async fn list_flavors(&self) -> Result<Vec<FlavorSummary>> {
        let flavors = self.cloud.list_flavors().await?;
        debug!("Retrieved {} flavors", flavors.len());
        Ok(flavors)
    }

    /// Get a flavor by its ID.
    pub async fn get_flavor_by_id<Id: AsRef<str>>(&self, id: Id) -> Result<Flavor> {
        self.cloud.get_flavor(id).await.map_err(Into::into)
    }

    /// Get a flavor by its name.
    ///
    /// The name must match exactly one flavor (exact, case-sensitive
    /// comparison), otherwise `ResourceNotFound` or `TooManyItems` is
    /// returned.
    pub async fn get_flavor_by_name<S: AsRef<str>>(&self, name: S) -> Result<Flavor> {
        let name = name.as_ref();
        let flavors = self.cloud.list_flavors().await?;
        let found = utils::one_by_name(flavors, name, "flavor", |flavor| flavor.name().as_str())?;
        self.get_flavor_by_id(found.id()).await
    }

    /// List all images visible to the tenant.
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        let images = self.cloud.list_images().await?;
        debug!("Retrieved {} images", images.len());
        Ok(images)
    }

    /// Get an image by its ID.
    pub async fn get_image_by_id<Id: AsRef<str>>(&self, id: Id) -> Result<Image> {
        self.cloud.get_image(id).await.map_err(Into::into)
    }

    /// Get an image by its name.
    ///
    /// The same match policy as for
    /// [`get_flavor_by_name`](#method.get_flavor_by_name) applies.
    pub async fn get_image_by_name<S: AsRef<str>>(&self, name: S) -> Result<Image> {
        let name = name.as_ref();
        let images = self.cloud.list_images().await?;
        utils::one_by_name(images, name, "image", |image| image.name().as_str())
    }
}
