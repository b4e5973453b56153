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

use axum::{Json, extract::State, http::StatusCode, response::{IntoResponse, Response}};
use rand::{Rng, seq::IndexedRandom};
use serde::{Serialize,Deserialize};
use serde_json::json;
use tracing::{debug,warn};
use uom::si::length::kilometer;
use seye_common::geo::{LatLng, haversine_distance};

use crate::{SeyeServerState, errors::{SeyeServerResult, invalid_config, invalid_request}};

type Result<T> = SeyeServerResult<T>;

/// value ranges for the aircraft parameters we make up for the deploy form
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct ParamsConfig {
    pub friendly_types: Vec<String>,
    pub threat_types: Vec<String>,
    pub weapon_states: Vec<String>,
    pub min_speed: f64,    // degrees per update step
    pub max_speed: f64,
    pub min_altitude: f64, // ft
    pub max_altitude: f64,
    pub min_velocity: f64, // km/h
    pub max_velocity: f64,
    pub min_fuel: f64,     // percent
    pub max_fuel: f64,
}

impl Default for ParamsConfig {
    fn default()->Self {
        fn strings (a: &[&str])->Vec<String> { a.iter().map( |s| s.to_string()).collect() }

        ParamsConfig {
            friendly_types: strings( &["Rafale", "Su-30MKI", "Tejas", "Mirage 2000"]),
            threat_types: strings( &["J-20", "J-10", "JF-17", "F-16"]),
            weapon_states: strings( &["ARMED", "SAFE", "HOLD"]),
            min_speed: 0.05,
            max_speed: 0.1,
            min_altitude: 15000.0,
            max_altitude: 45000.0,
            min_velocity: 700.0,
            max_velocity: 2100.0,
            min_fuel: 40.0,
            max_fuel: 100.0,
        }
    }
}

impl ParamsConfig {
    pub fn validate (&self)->Result<()> {
        if self.friendly_types.is_empty() || self.threat_types.is_empty() { return Err( invalid_config("no aircraft types")) }
        if self.weapon_states.is_empty() { return Err( invalid_config("no weapon states")) }

        for (what,min,max) in [("speed", self.min_speed, self.max_speed), ("altitude", self.min_altitude, self.max_altitude),
                               ("velocity", self.min_velocity, self.max_velocity), ("fuel", self.min_fuel, self.max_fuel)] {
            if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
                return Err( invalid_config( format!("invalid {} range {}..{}", what, min, max)))
            }
        }
        Ok(())
    }
}

/// what the deploy form sends before it creates an aircraft
#[derive(Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct ParamsRequest {
    #[serde(default)]
    pub name: String,
    #[serde(alias="lat", alias="originLat")]
    pub from_lat: f64,
    #[serde(alias="lng", alias="originLng")]
    pub from_lng: f64,
    #[serde(default, alias="targetLat", alias="destLat")]
    pub to_lat: Option<f64>,
    #[serde(default, alias="targetLng", alias="destLng")]
    pub to_lng: Option<f64>,
    pub is_friend: bool,
}

/// field names match the optional fields of a deployAircraft message
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct AircraftParams {
    pub speed: f64,
    pub aircraft_type: String,
    pub altitude: f64,
    pub velocity: f64,
    pub fuel_level: f64,
    pub weapon_status: String,
    #[serde(skip_serializing_if="Option::is_none")]
    pub eta: Option<String>,
}

fn pick<R: Rng> (choices: &[String], rng: &mut R)->String {
    choices.choose( rng).cloned().unwrap_or_default()
}

fn random_in<R: Rng> (min: f64, max: f64, rng: &mut R)->f64 {
    if max > min { rng.random_range( min..max) } else { min }
}

/// eta in minutes, formatted as `HH:MM`
fn format_eta (minutes: f64)->String {
    let m = minutes.round() as u64;
    format!("{:02}:{:02}", m / 60, m % 60)
}

pub fn random_params<R: Rng> (config: &ParamsConfig, req: &ParamsRequest, rng: &mut R)->Result<AircraftParams> {
    let origin = LatLng::new( req.from_lat, req.from_lng);
    if !origin.is_valid() { return Err( invalid_request( format!("invalid origin {}", origin))) }

    let target = match (req.to_lat, req.to_lng) {
        (Some(lat),Some(lng)) => {
            let target = LatLng::new( lat, lng);
            if !target.is_valid() { return Err( invalid_request( format!("invalid target {}", target))) }
            Some(target)
        }
        (None,None) => None,
        _ => return Err( invalid_request("incomplete target position"))
    };

    let types = if req.is_friend { &config.friendly_types } else { &config.threat_types };
    let velocity = random_in( config.min_velocity, config.max_velocity, rng).round();

    let eta = target.map( |target| {
        let dist = haversine_distance( &origin, &target).get::<kilometer>();
        debug!("{} route {} -> {}: {:.0}km", req.name, origin, target, dist);
        format_eta( 60.0 * dist / velocity)
    });

    Ok( AircraftParams {
        speed: random_in( config.min_speed, config.max_speed, rng),
        aircraft_type: pick( types, rng),
        altitude: (random_in( config.min_altitude, config.max_altitude, rng) / 100.0).round() * 100.0,
        velocity,
        fuel_level: random_in( config.min_fuel, config.max_fuel, rng).round(),
        weapon_status: pick( &config.weapon_states, rng),
        eta,
    })
}

pub async fn params_handler (State(state): State<SeyeServerState>, Json(req): Json<ParamsRequest>)->Response {
    match random_params( &state.config.params, &req, &mut rand::rng()) {
        Ok(params) => Json( params).into_response(),
        Err(e) => {
            warn!("rejected aircraft params request: {}", e);
            (StatusCode::BAD_REQUEST, Json( json!({ "error": e.to_string() }))).into_response()
        }
    }
}
