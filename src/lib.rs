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

//! Thin authenticated retrieval client for OpenStack flavors and images.
//!
//! This crate builds an authenticated session from five credential fields
//! and exposes a small set of retrieval calls for compute flavors and
//! images. All protocol work is delegated to the
//! [openstack](https://crates.io/crates/openstack) and
//! [osauth](https://crates.io/crates/osauth) crates; this crate only
//! validates the configuration, constructs the client and unwraps the
//! results of pre-built SDK calls.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() -> osclient::Result<()> {
//! let config = osclient::AuthConfig::from_env()?;
//! let client = osclient::OsClient::new(&config).await?;
//!
//! for flavor in client.list_flavors().await? {
//!     println!("ID = {}, Name = {}", flavor.id(), flavor.name());
//! }
//! # Ok(()) }
//! # #[tokio::main]
//! # async fn main() { example().await.unwrap(); }
//! ```
//!
//! Credentials can also be taken from the standard `OS_*` environment
//! variables with [`OsClient::from_env`].

#![doc(html_root_url = "https://docs.rs/osclient/0.1.0")]
#![warn(
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod client;
mod config;
mod error;
mod utils;

pub use client::OsClient;
pub use config::AuthConfig;
pub use error::{Error, Result};

pub use openstack::compute::{Flavor, FlavorSummary};
pub use openstack::image::Image;
