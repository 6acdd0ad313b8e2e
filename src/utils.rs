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

//! Various utilities.

use crate::error::{Error, Result};

/// Pick the one item whose name equals `name`.
///
/// Matching is exact and case-sensitive. Fails with `ResourceNotFound`
/// if nothing matches and with `TooManyItems` if several items do.
pub(crate) fn one_by_name<T, F>(
    items: Vec<T>,
    name: &str,
    resource: &'static str,
    item_name: F,
) -> Result<T>
where
    F: Fn(&T) -> &str,
{
    let mut matched: Vec<T> = items
        .into_iter()
        .filter(|item| item_name(item) == name)
        .collect();
    match matched.len() {
        1 => Ok(matched.remove(0)),
        0 => Err(Error::ResourceNotFound {
            resource,
            name: name.to_string(),
        }),
        count => Err(Error::TooManyItems {
            resource,
            name: name.to_string(),
            count,
        }),
    }
}
