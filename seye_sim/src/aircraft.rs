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

use std::fmt;
use serde::{Serialize,Deserialize,ser::{Serializer,SerializeStruct}};
use seye_common::{angle::Angle360, geo::LatLng};

/// friend/foe classification of a track
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="SCREAMING_SNAKE_CASE")]
pub enum Affiliation {
    Friendly,
    UnknownThreat,
}

impl Affiliation {
    pub fn from_is_friend (is_friend: bool)->Self {
        if is_friend { Affiliation::Friendly } else { Affiliation::UnknownThreat }
    }

    pub fn is_friend (&self)->bool { *self == Affiliation::Friendly }

    /// the type label dashboard clients show if a track has no explicit aircraft type
    pub fn type_label (&self)->&'static str {
        match self {
            Affiliation::Friendly => "FRIENDLY",
            Affiliation::UnknownThreat => "UNKNOWN/THREAT",
        }
    }
}

/// optional descriptive data that comes with deployed aircraft. We just pass it through to clients
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct AircraftInfo {
    #[serde(rename="type")]
    pub aircraft_type: Option<String>,
    pub altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub fuel_level: Option<f64>,
    pub weapon_status: Option<String>,
    pub eta: Option<String>,
}

/// the data model for a simulated aircraft track
#[derive(Debug,Clone,PartialEq)]
pub struct Aircraft {
    pub id: String,
    pub name: Option<String>,

    pub position: LatLng,
    pub bearing: Angle360,
    pub speed: f64, // degrees per update step

    pub affiliation: Affiliation,

    pub target: Option<LatLng>,  // destination of deployed aircraft (informational only)
    pub confidence: Option<f64>, // manual threat confidence override in percent
    pub info: AircraftInfo,
}

impl Aircraft {
    pub fn new (id: impl ToString, position: LatLng, bearing: Angle360, speed: f64, affiliation: Affiliation)->Self {
        Aircraft {
            id: id.to_string(),
            name: None,
            position,
            bearing,
            speed,
            affiliation,
            target: None,
            confidence: None,
            info: AircraftInfo::default(),
        }
    }

    pub fn is_friend (&self)->bool { self.affiliation.is_friend() }

    pub fn type_label (&self)->&str {
        self.info.aircraft_type.as_deref().unwrap_or( self.affiliation.type_label())
    }
}

impl fmt::Display for Aircraft {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( id: {}", self.id)?;
        if let Some(name) = &self.name { write!( f, ", name: \"{name}\"")?; }
        write!( f, ", pos: {}, hdg: {:.0}, spd: {:.3}, {:?}", self.position, self.bearing.degrees(), self.speed, self.affiliation)?;
        if let Some(target) = &self.target { write!( f, ", target: {target}")?; }
        write!( f, ")")
    }
}

/// this serializes into the flat record format processed by the dashboard clients
impl Serialize for Aircraft {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("Aircraft", 18)?;
        state.serialize_field( "id", &self.id)?;
        if let Some(name) = &self.name { state.serialize_field( "name", name)?; }

        state.serialize_field( "lat", &self.position.lat)?;
        state.serialize_field( "lng", &self.position.lng)?;
        state.serialize_field( "bearing", &self.bearing)?;
        state.serialize_field( "speed", &self.speed)?;

        state.serialize_field( "affiliation", &self.affiliation)?;
        state.serialize_field( "isFriend", &self.is_friend())?;
        state.serialize_field( "type", self.type_label())?;

        if let Some(target) = &self.target {
            state.serialize_field( "targetLat", &target.lat)?;
            state.serialize_field( "targetLng", &target.lng)?;
        }
        if let Some(confidence) = &self.confidence { state.serialize_field( "confidence", confidence)?; }

        let info = &self.info;
        if let Some(v) = &info.altitude { state.serialize_field( "altitude", v)?; }
        if let Some(v) = &info.velocity { state.serialize_field( "velocity", v)?; }
        if let Some(v) = &info.fuel_level { state.serialize_field( "fuelLevel", v)?; }
        if let Some(v) = &info.weapon_status { state.serialize_field( "weaponStatus", v)?; }
        if let Some(v) = &info.eta { state.serialize_field( "eta", v)?; }

        state.end()
    }
}
