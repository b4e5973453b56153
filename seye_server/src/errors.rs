/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type SeyeServerResult<T> = std::result::Result<T, SeyeServerError>;

#[derive(Error,Debug)]
pub enum SeyeServerError {

    #[error("simulation error: {0}")]
    SimError( #[from] seye_sim::SeyeSimError),

    #[error("config error: {0}")]
    ConfigError( #[from] seye_common::config::ConfigError),

    #[error("IO error: {0}")]
    IoError( #[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("transport disconnected")]
    TransportDisconnected,

    #[error("invalid server config: {0}")]
    InvalidConfig(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub fn invalid_config (msg: impl ToString)->SeyeServerError {
    SeyeServerError::InvalidConfig(msg.to_string())
}

pub fn invalid_request (msg: impl ToString)->SeyeServerError {
    SeyeServerError::InvalidRequest(msg.to_string())
}
