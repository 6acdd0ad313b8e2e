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

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = osclient::AuthConfig::from_env()
        .expect("Failed to read credentials from the environment");
    let client = osclient::OsClient::new(&config)
        .await
        .expect("Failed to create an authenticated client");

    let flavors = client.list_flavors().await.expect("Cannot list flavors");
    for flavor in &flavors {
        println!("ID = {}, Name = {}", flavor.id(), flavor.name());
    }
}
