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

use std::{fmt, cmp};
use serde::{Serialize,Deserialize};

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    // rounding can turn tiny negative remainders into 360.0
    if x < 0.0 { let y = 360.0 + x; if y >= 360.0 { 0.0 } else { y } } else { x }
}

/// a heading or bearing in degrees that is always normalized to [0,360)
#[derive(Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="f64",into="f64")]
pub struct Angle360(f64);

impl Angle360 {
    #[inline] pub fn from_degrees (deg: f64)->Self { Angle360( normalize_360(deg)) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }
    #[inline] pub fn radians (&self)->f64 { self.0.to_radians() }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }

    /// heading rotated by `delta` degrees (positive is clockwise)
    #[inline] pub fn rotated (&self, delta: f64)->Self { Angle360::from_degrees( self.0 + delta) }
}

impl From<f64> for Angle360 {
    fn from (deg: f64)->Self { Angle360::from_degrees(deg) }
}

impl From<Angle360> for f64 {
    fn from (a: Angle360)->Self { a.0 }
}

impl fmt::Display for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl PartialOrd for Angle360 {
    fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp( &other.0) }
}
