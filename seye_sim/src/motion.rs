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

//! the pure motion model. All randomness is passed in so that these functions are deterministic

use seye_common::{angle::Angle360, geo::{GeoBounds,LatLng}};
use crate::aircraft::Aircraft;

/// move `speed` degrees along `bearing` on the flat lat/lng grid (this is not a geodesic)
pub fn project (pos: &LatLng, bearing: Angle360, speed: f64)->LatLng {
    LatLng::new( pos.lat + speed * bearing.cos(), pos.lng + speed * bearing.sin())
}

/// the bounce policy for positions outside of `bounds`: mirror the heading per violated axis.
/// This does not check if we are already heading back, i.e. it flips again on each step outside.
/// Returns un-normalized degrees
pub fn reflected_bearing (bearing: f64, pos: &LatLng, bounds: &GeoBounds)->f64 {
    let mut hdg = bearing;
    if bounds.lat_outside( pos.lat) { hdg = 180.0 - hdg; }
    if bounds.lng_outside( pos.lng) { hdg = 360.0 - hdg; }
    hdg
}

/// one update step of an aircraft: move, then either bounce or apply the course correction `jitter` (degrees).
/// An aircraft can only get outside of `bounds` by moving outwards, and the reflected heading exactly reverses
/// that motion on the violated axis. Suspending the jitter on bounce steps therefore keeps every position within
/// one step of the bounds
pub fn advanced (ac: &Aircraft, bounds: &GeoBounds, jitter: f64)->Aircraft {
    let position = project( &ac.position, ac.bearing, ac.speed);

    let bearing = if bounds.contains( &position) {
        ac.bearing.rotated( jitter)
    } else {
        Angle360::from_degrees( reflected_bearing( ac.bearing.degrees(), &position, bounds))
    };

    Aircraft { position, bearing, ..ac.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::Affiliation;

    fn bounds()->GeoBounds { GeoBounds::new( 8.0, 32.0, 68.0, 88.0) }

    #[test]
    fn test_inside_keeps_course() {
        let ac = Aircraft::new( "A", LatLng::new( 20.0, 80.0), Angle360::from_degrees(90.0), 0.1, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), 0.0);
        assert!( (ac1.position.lng - 80.1).abs() < 1e-12);
        assert!( (ac1.position.lat - 20.0).abs() < 1e-12);
        assert_eq!( ac1.bearing.degrees(), 90.0);
    }

    #[test]
    fn test_upper_lat_bounce() {
        let ac = Aircraft::new( "A", LatLng::new( 31.9, 80.0), Angle360::from_degrees(10.0), 0.2, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), 0.0);
        assert!( ac1.position.lat > 32.0 && ac1.position.lat <= 32.0 + ac.speed);
        assert!( (ac1.bearing.degrees() - 170.0).abs() < 1e-9);

        // the next step moves back inside
        let ac2 = advanced( &ac1, &bounds(), 0.0);
        assert!( ac2.position.lat < ac1.position.lat);
    }

    #[test]
    fn test_corner_bounce() {
        // out on both axes: 180-45 = 135, 360-135 = 225
        let ac = Aircraft::new( "A", LatLng::new( 31.95, 87.95), Angle360::from_degrees(45.0), 0.1, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), 0.0);
        assert!( (ac1.bearing.degrees() - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounce_ignores_jitter() {
        let ac = Aircraft::new( "A", LatLng::new( 20.0, 68.05), Angle360::from_degrees(270.0), 0.1, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), -3.0);
        // 360 - 270 = 90, no course correction while bouncing
        assert!( (ac1.bearing.degrees() - 90.0).abs() < 1e-9);

        let ac = Aircraft::new( "A", LatLng::new( 8.05, 80.0), Angle360::from_degrees(180.0), 0.1, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), -2.0);
        // 180 - 180 = 0
        assert!( ac1.bearing.degrees() < 1e-9 || ac1.bearing.degrees() > 360.0 - 1e-9);
        let ac2 = advanced( &ac1, &bounds(), 0.0);
        assert!( ac2.position.lat >= 8.0);
    }

    #[test]
    fn test_jitter_wraps_heading() {
        let ac = Aircraft::new( "A", LatLng::new( 20.0, 80.0), Angle360::from_degrees(1.0), 0.1, Affiliation::Friendly);
        let ac1 = advanced( &ac, &bounds(), -3.0);
        assert!( (ac1.bearing.degrees() - 358.0).abs() < 1e-9);
    }

    #[test]
    fn test_grazing_edge_stays_close() {
        // heading almost parallel to the upper edge with alternating course corrections that would
        // otherwise push it further out on every bounce
        let b = bounds();
        let mut ac = Aircraft::new( "A", LatLng::new( 31.99, 75.0), Angle360::from_degrees(85.0), 0.1, Affiliation::Friendly);
        for i in 0..100 {
            let jitter = if i % 2 == 0 { -5.0 } else { 5.0 };
            ac = advanced( &ac, &b, jitter);
            assert!( ac.position.lat <= b.north + ac.speed + 1e-9, "{ac}");
        }
    }
}
