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

use uom::si::length::kilometer;
use seye_common::angle::Angle360;
use seye_common::geo::*;

// run with "cargo test test_route -- --nocapture"

const DELHI: LatLng = LatLng { lat: 28.6139, lng: 77.2090 };
const MUMBAI: LatLng = LatLng { lat: 19.0760, lng: 72.8777 };

#[test]
fn test_route() {
    let hdg = initial_bearing( &DELHI, &MUMBAI);
    println!("Delhi -> Mumbai initial bearing: {hdg}");
    assert!( (hdg.degrees() - 203.4677).abs() < 1e-3);

    let dist = haversine_distance( &DELHI, &MUMBAI);
    println!("Delhi -> Mumbai distance: {:.1}km", dist.get::<kilometer>());
    assert!( (dist.get::<kilometer>() - 1148.09).abs() < 0.1);

    // the way back is not the reverse bearing on a sphere, but it has to point north-east
    let back = initial_bearing( &MUMBAI, &DELHI);
    assert!( back.degrees() > 0.0 && back.degrees() < 90.0);
}

#[test]
fn test_cardinal_bearings() {
    let p = LatLng::new( 20.0, 80.0);
    assert!( initial_bearing( &p, &LatLng::new(25.0, 80.0)).degrees().abs() < 1e-9);
    assert!( (initial_bearing( &p, &LatLng::new(15.0, 80.0)).degrees() - 180.0).abs() < 1e-9);
    assert!( (initial_bearing( &LatLng::new(0.0, 80.0), &LatLng::new(0.0, 85.0)).degrees() - 90.0).abs() < 1e-9);
    assert!( (initial_bearing( &LatLng::new(0.0, 80.0), &LatLng::new(0.0, 75.0)).degrees() - 270.0).abs() < 1e-9);
}

#[test]
fn test_bounds() {
    let bounds = GeoBounds::new( 8.0, 32.0, 68.0, 88.0);
    assert!( bounds.is_valid());
    assert!( bounds.contains( &LatLng::new( 20.0, 80.0)));
    assert!( bounds.contains( &LatLng::new( 32.0, 88.0))); // bounds are inclusive
    assert!( !bounds.contains( &LatLng::new( 32.01, 80.0)));
    assert!( bounds.lng_outside( 67.9));
    assert!( bounds.contains_bounds( &GeoBounds::new( 15.0, 25.0, 75.0, 85.0)));
    assert!( !GeoBounds::new( 32.0, 8.0, 68.0, 88.0).is_valid());

    let input = "GeoBounds( south: 8.0, north: 32.0, west: 68.0, east: 88.0 )";
    let b: GeoBounds = ron::from_str(input).unwrap();
    assert_eq!( b, bounds);
}

#[test]
fn test_angle_serde() {
    let a: Angle360 = serde_json::from_str("-90.0").unwrap();
    assert_eq!( a.degrees(), 270.0);
    assert_eq!( serde_json::to_string(&a).unwrap(), "270.0");
}
