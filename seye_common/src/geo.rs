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

//! spherical earth geometry for latitude/longitude degree positions.
//! This is the simple (mean radius) sphere model the dashboard clients use to compute routes,
//! not an ellipsoid model.

use std::fmt;
use serde::{Serialize,Deserialize};
use geo::{Bearing, Distance, Haversine, Point};
use uom::si::{f64::Length, length::meter};

use crate::angle::Angle360;

/// a position given as latitude/longitude degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new (lat: f64, lng: f64)->Self { LatLng{lat,lng} }

    /// note that geo points are x/y, i.e. lng/lat
    pub fn point (&self)->Point { Point::new( self.lng, self.lat) }

    pub fn is_finite (&self)->bool { self.lat.is_finite() && self.lng.is_finite() }

    pub fn is_valid (&self)->bool {
        self.is_finite() && self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl fmt::Display for LatLng {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({:.4},{:.4})", self.lat, self.lng) }
}

/// initial great circle bearing when travelling from `from` to `to`
pub fn initial_bearing (from: &LatLng, to: &LatLng)->Angle360 {
    Angle360::from_degrees( Haversine.bearing( from.point(), to.point()))
}

/// great circle distance between two positions (haversine formula on a sphere with mean earth radius)
pub fn haversine_distance (from: &LatLng, to: &LatLng)->Length {
    Length::new::<meter>( Haversine.distance( from.point(), to.point()))
}

/// a lat/lng aligned rectangle. We do not support rectangles that cross the anti-meridian
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn new (south: f64, north: f64, west: f64, east: f64)->Self { GeoBounds{south,north,west,east} }

    pub fn is_valid (&self)->bool {
        LatLng::new(self.south,self.west).is_valid() && LatLng::new(self.north,self.east).is_valid()
            && self.south < self.north && self.west < self.east
    }

    #[inline] pub fn lat_outside (&self, lat: f64)->bool { lat < self.south || lat > self.north }
    #[inline] pub fn lng_outside (&self, lng: f64)->bool { lng < self.west || lng > self.east }

    pub fn contains (&self, p: &LatLng)->bool {
        !self.lat_outside(p.lat) && !self.lng_outside(p.lng)
    }

    pub fn contains_bounds (&self, other: &GeoBounds)->bool {
        other.south >= self.south && other.north <= self.north && other.west >= self.west && other.east <= self.east
    }
}

impl fmt::Display for GeoBounds {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[lat {}..{}, lng {}..{}]", self.south, self.north, self.west, self.east)
    }
}
