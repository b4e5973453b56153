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

#![allow(unused)]

//! the flight simulation of S-EYE: a registry of simulated aircraft tracks that move inside of a
//! lat/lng box, bounce off its edges and can be added or removed by clients

pub mod errors;
pub use errors::{Result,SeyeSimError};

pub mod config;
pub use config::{SimConfig,load_config};

pub mod aircraft;
pub use aircraft::{Aircraft,AircraftInfo,Affiliation};

pub mod motion;

pub mod deploy;
pub use deploy::DeployRequest;

pub mod store;
pub use store::{FlightStore,SharedFlightStore};
