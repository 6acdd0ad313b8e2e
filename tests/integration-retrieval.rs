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

// These tests need credentials for a live cloud in the standard OS_*
// environment variables. They are skipped when OS_AUTH_URL is unset.
#![cfg(feature = "integration-tests")]

use std::env;
use std::sync::Once;

use osclient::{AuthConfig, OsClient};

static INIT: Once = Once::new();

async fn set_up() -> Option<OsClient> {
    INIT.call_once(|| {
        env_logger::init();
    });

    if env::var("OS_AUTH_URL").is_err() {
        return None;
    }

    Some(
        OsClient::from_env()
            .await
            .expect("Failed to create a client from the environment"),
    )
}

#[tokio::test]
async fn test_create_client_with_wrong_password() {
    let Some(_) = set_up().await else { return };

    let mut config = AuthConfig::from_env().expect("Failed to read the environment");
    config.password = "not-the-password".to_string();

    // Depending on when the SDK first talks to the Identity service, the
    // failure surfaces either at session creation or at the first call.
    let outcome = async {
        let client = OsClient::new(&config).await?;
        client.list_flavors().await
    }
    .await;
    assert!(outcome.is_err(), "wrong password should not authenticate");
}

#[tokio::test]
async fn test_list_flavors() {
    let Some(client) = set_up().await else { return };

    let flavors = client.list_flavors().await.expect("Cannot list flavors");
    assert!(!flavors.is_empty());
}

#[tokio::test]
async fn test_get_flavor_by_id() {
    let Some(client) = set_up().await else { return };

    let flavors = client.list_flavors().await.expect("Cannot list flavors");
    let seed = flavors.first().expect("No flavors to test against");

    let flavor = client
        .get_flavor_by_id(seed.id())
        .await
        .expect("Cannot get a flavor by ID");
    assert_eq!(flavor.id(), seed.id());
    assert_eq!(flavor.name(), seed.name());
}

#[tokio::test]
async fn test_get_flavor_by_name() {
    let Some(client) = set_up().await else { return };

    let flavors = client.list_flavors().await.expect("Cannot list flavors");
    let seed = flavors.first().expect("No flavors to test against");

    let flavor = client
        .get_flavor_by_name(seed.name())
        .await
        .expect("Cannot get a flavor by name");
    assert_eq!(flavor.id(), seed.id());
    assert_eq!(flavor.name(), seed.name());
}

#[tokio::test]
async fn test_get_flavor_by_unknown_name() {
    let Some(client) = set_up().await else { return };

    let result = client.get_flavor_by_name("no-such-flavor-here").await;
    assert!(matches!(result, Err(osclient::Error::ResourceNotFound { .. })));
}

#[tokio::test]
async fn test_list_images() {
    let Some(client) = set_up().await else { return };

    let images = client.list_images().await.expect("Cannot list images");
    assert!(!images.is_empty());
}

#[tokio::test]
async fn test_get_image_by_id() {
    let Some(client) = set_up().await else { return };

    let images = client.list_images().await.expect("Cannot list images");
    let seed = images.first().expect("No images to test against");

    let image = client
        .get_image_by_id(seed.id())
        .await
        .expect("Cannot get an image by ID");
    assert_eq!(image.id(), seed.id());
    assert_eq!(image.name(), seed.name());
}

#[tokio::test]
async fn test_get_image_by_name() {
    let Some(client) = set_up().await else { return };

    let images = client.list_images().await.expect("Cannot list images");
    let seed = images.first().expect("No images to test against");

    let image = client
        .get_image_by_name(seed.name())
        .await
        .expect("Cannot get an image by name");
    assert_eq!(image.id(), seed.id());
    assert_eq!(image.name(), seed.name());
}
