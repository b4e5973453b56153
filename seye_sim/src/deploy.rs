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

use serde::{Deserialize,Deserializer};
use rand::Rng;
use uom::si::length::kilometer;
use tracing::debug;
use seye_common::{angle::Angle360, datetime::epoch_millis, geo::{self,LatLng}};

use crate::{aircraft::{Aircraft,AircraftInfo,Affiliation}, config::SimConfig};
use crate::errors::{Result,invalid_deploy};

/// what a client sends to put a new aircraft into the simulation. Clients can either pre-compute
/// bearing and speed or just provide origin and destination
#[derive(Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct DeployRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,

    #[serde(alias="originLat", alias="fromLat")]
    pub lat: f64,
    #[serde(alias="originLng", alias="fromLng")]
    pub lng: f64,

    #[serde(default, alias="destLat", alias="toLat")]
    pub target_lat: Option<f64>,
    #[serde(default, alias="destLng", alias="toLng")]
    pub target_lng: Option<f64>,

    #[serde(default)]
    pub bearing: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,

    pub is_friend: bool,

    // form inputs might send this as a string
    #[serde(default, deserialize_with="de_opt_number")]
    pub confidence: Option<f64>,

    #[serde(flatten)]
    pub info: AircraftInfo,
}

impl DeployRequest {
    pub fn new (name: impl ToString, origin: LatLng, is_friend: bool)->Self {
        DeployRequest {
            id: None,
            name: name.to_string(),
            lat: origin.lat,
            lng: origin.lng,
            target_lat: None,
            target_lng: None,
            bearing: None,
            speed: None,
            is_friend,
            confidence: None,
            info: AircraftInfo::default(),
        }
    }

    pub fn with_target (mut self, target: LatLng)->Self {
        self.target_lat = Some(target.lat);
        self.target_lng = Some(target.lng);
        self
    }

    pub fn origin (&self)->LatLng { LatLng::new( self.lat, self.lng) }

    pub fn target (&self)->Result<Option<LatLng>> {
        match (self.target_lat, self.target_lng) {
            (Some(lat),Some(lng)) => Ok( Some( LatLng::new(lat,lng))),
            (None,None) => Ok(None),
            _ => Err( invalid_deploy!("incomplete target position for '{}'", self.name))
        }
    }

    /// the id we use if the client did not provide one: upper case name with dashes, plus timestamp
    pub fn default_id (&self, millis: i64)->String {
        let base = self.name.split_whitespace().collect::<Vec<&str>>().join("-").to_uppercase();
        format!("{}-{}", base, millis)
    }

    /// turn the request into a fully specified aircraft. This checks all inputs but not id uniqueness,
    /// which is the responsibility of the store
    pub fn into_aircraft<R: Rng> (self, config: &SimConfig, rng: &mut R)->Result<Aircraft> {
        if self.name.trim().is_empty() { return Err( invalid_deploy!("empty name")) }

        let origin = self.origin();
        if !origin.is_valid() { return Err( invalid_deploy!("invalid origin {}", origin)) }
        if !config.bounds.contains( &origin) {
            return Err( invalid_deploy!("origin {} outside of simulation bounds {}", origin, config.bounds))
        }

        let target = self.target()?;
        if let Some(target) = &target {
            if !target.is_valid() { return Err( invalid_deploy!("invalid target {}", target)) }
        }

        let bearing = match (self.bearing, &target) {
            (Some(hdg),_) if hdg.is_finite() => Angle360::from_degrees(hdg),
            (Some(hdg),_) => return Err( invalid_deploy!("invalid bearing {}", hdg)),
            (None,Some(target)) => geo::initial_bearing( &origin, target),
            (None,None) => return Err( invalid_deploy!("'{}' has neither bearing nor target", self.name))
        };

        let speed = match self.speed {
            Some(spd) if spd.is_finite() && spd > 0.0 => spd,
            Some(spd) => return Err( invalid_deploy!("invalid speed {}", spd)),
            None => random_speed( config, rng)
        };

        if let Some(confidence) = self.confidence {
            if !(0.0..=100.0).contains( &confidence) { return Err( invalid_deploy!("confidence {} not in [0,100]", confidence)) }
        }

        let id = match &self.id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => self.default_id( epoch_millis())
        };

        if let Some(target) = &target {
            let dist = geo::haversine_distance( &origin, target);
            debug!("{} route {} -> {}: {:.0}km at {:.1}deg", id, origin, target, dist.get::<kilometer>(), bearing.degrees());
        }

        Ok( Aircraft {
            id,
            name: Some(self.name),
            position: origin,
            bearing,
            speed,
            affiliation: Affiliation::from_is_friend( self.is_friend),
            target,
            confidence: self.confidence,
            info: self.info,
        })
    }
}

pub (crate) fn random_speed<R: Rng> (config: &SimConfig, rng: &mut R)->f64 {
    if config.max_speed > config.min_speed {
        rng.random_range( config.min_speed..config.max_speed)
    } else {
        config.min_speed
    }
}

fn de_opt_number <'a,D>(deserializer: D) -> std::result::Result<Option<f64>,D::Error> where D: Deserializer<'a> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr { Num(f64), Str(String) }

    match Option::<NumOrStr>::deserialize(deserializer)? {
        Some(NumOrStr::Num(v)) => Ok( Some(v)),
        Some(NumOrStr::Str(s)) => {
            let s = s.trim();
            if s.is_empty() { Ok(None) } else { s.parse::<f64>().map(Some).map_err( serde::de::Error::custom) }
        }
        None => Ok(None)
    }
}
