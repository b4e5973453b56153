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

pub type Result<T> = std::result::Result<T,SeyeSimError>;

#[derive(Error,Debug)]
pub enum SeyeSimError {

    #[error("duplicate aircraft id {0}")]
    DuplicateId(String),

    #[error("unknown aircraft id {0}")]
    NotFound(String),

    #[error("invalid deploy request: {0}")]
    InvalidDeploy(String),

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("flight store lock poisoned")]
    LockPoisoned,

    #[error("config error {0}")]
    ConfigError( #[from] seye_common::config::ConfigError),
}

macro_rules! invalid_deploy {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::SeyeSimError::InvalidDeploy( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_deploy;

macro_rules! invalid_config {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::SeyeSimError::InvalidConfig( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_config;
