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

use std::path::Path;
use serde::{Serialize,Deserialize};
use seye_common::{config::load_config_path, geo::GeoBounds};

use crate::errors::{Result,invalid_config};

/// the tunables of the flight simulation. The defaults reproduce the behavior existing dashboard clients expect
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct SimConfig {
    pub bounds: GeoBounds,         // aircraft bounce off these edges
    pub spawn_area: GeoBounds,     // where randomly populated aircraft start (has to be inside of bounds)
    pub min_flights: usize,        // inclusive range for the number of randomly populated aircraft
    pub max_flights: usize,
    pub min_speed: f64,            // degrees per update step
    pub max_speed: f64,
    pub friendly_probability: f64, // chance that a randomly populated aircraft is friendly
    pub course_jitter: f64,        // max random heading change per update in degrees (both directions)
    #[serde(default)]
    pub seed: Option<u64>,         // if set the simulation is deterministic
}

impl Default for SimConfig {
    fn default()->Self {
        SimConfig {
            bounds: GeoBounds::new( 8.0, 32.0, 68.0, 88.0),
            spawn_area: GeoBounds::new( 15.0, 25.0, 75.0, 85.0),
            min_flights: 5,
            max_flights: 10,
            min_speed: 0.05,
            max_speed: 0.1,
            friendly_probability: 0.7,
            course_jitter: 5.0,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate (&self)->Result<()> {
        if !self.bounds.is_valid() { return Err( invalid_config!("invalid bounds {}", self.bounds)) }
        if !self.spawn_area.is_valid() { return Err( invalid_config!("invalid spawn area {}", self.spawn_area)) }
        if !self.bounds.contains_bounds( &self.spawn_area) {
            return Err( invalid_config!("spawn area {} not inside bounds {}", self.spawn_area, self.bounds))
        }
        if self.min_flights > self.max_flights {
            return Err( invalid_config!("min_flights {} > max_flights {}", self.min_flights, self.max_flights))
        }
        if !(self.min_speed.is_finite() && self.max_speed.is_finite()) || self.min_speed <= 0.0 || self.min_speed > self.max_speed {
            return Err( invalid_config!("invalid speed range {}..{}", self.min_speed, self.max_speed))
        }
        if !(0.0..=1.0).contains( &self.friendly_probability) {
            return Err( invalid_config!("friendly_probability {} not in [0,1]", self.friendly_probability))
        }
        if !self.course_jitter.is_finite() || self.course_jitter < 0.0 || self.course_jitter >= 180.0 {
            return Err( invalid_config!("invalid course_jitter {}", self.course_jitter))
        }
        Ok(())
    }
}

/// load and validate a SimConfig from a RON file
pub fn load_config<P: AsRef<Path>> (path: P)->Result<SimConfig> {
    let config: SimConfig = load_config_path( path)?;
    config.validate()?;
    Ok(config)
}
