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

//! Error and Result implementations.

/// Error from a client call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field of the authentication configuration is empty.
    #[error("no {0} was provided in the authentication configuration")]
    MissingConfig(&'static str),

    /// A required environment variable is unset or empty.
    #[error("no {0} was provided in the environment")]
    MissingEnv(&'static str),

    /// No resource matched the requested name.
    #[error("no {resource} with name {name:?} was found")]
    ResourceNotFound {
        /// Kind of the resource, e.g. `flavor`.
        resource: &'static str,
        /// The requested name.
        name: String,
    },

    /// More than one resource matched the requested name.
    #[error("found {count} {resource}s with name {name:?}, expected exactly one")]
    TooManyItems {
        /// Kind of the resource, e.g. `flavor`.
        resource: &'static str,
        /// The requested name.
        name: String,
        /// How many items matched.
        count: usize,
    },

    /// Error from the underlying SDK, passed through unchanged.
    #[error(transparent)]
    Cloud(#[from] openstack::Error),
}

/// Result of a client call.
pub type Result<T> = std::result::Result<T, Error>;
