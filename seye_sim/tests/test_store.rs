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

use std::collections::HashSet;
use anyhow::Result;
use seye_common::{angle::Angle360, geo::{LatLng,initial_bearing}};
use seye_sim::{Aircraft, Affiliation, DeployRequest, FlightStore, SharedFlightStore, SimConfig, SeyeSimError};

fn seeded_config (seed: u64)->SimConfig {
    SimConfig { seed: Some(seed), ..SimConfig::default() }
}

// run with "cargo test test_populate -- --nocapture"

#[test]
fn test_populate()->Result<()> {
    for seed in 0..50 {
        let mut store = FlightStore::new( seeded_config(seed))?;
        assert!( store.is_empty());

        let n = store.ensure_populated();
        assert!( (5..=10).contains(&n), "population size {n} out of range");
        assert_eq!( store.len(), n);

        let config = store.config().clone();
        let mut ids = HashSet::new();
        for ac in store.aircraft() {
            assert!( config.bounds.contains( &ac.position));
            assert!( config.spawn_area.contains( &ac.position));
            assert!( ac.speed >= config.min_speed && ac.speed < config.max_speed);
            assert!( matches!( ac.affiliation, Affiliation::Friendly | Affiliation::UnknownThreat));
            assert!( ids.insert( ac.id.clone()));
        }

        // no-op on a populated store
        assert_eq!( store.ensure_populated(), 0);
        assert_eq!( store.len(), n);
    }
    Ok(())
}

#[test]
fn test_generated_ids()->Result<()> {
    let mut store = FlightStore::new( seeded_config(42))?;
    let n = store.ensure_populated();
    assert_eq!( store.aircraft()[0].id, "FLT-1000");
    assert_eq!( store.aircraft()[n-1].id, format!("FLT-{}", 1000 + n - 1));

    // after a reset generated ids are not re-used
    let ids: Vec<String> = store.aircraft().iter().map( |ac| ac.id.clone()).collect();
    for id in &ids { store.remove( id)?; }
    assert!( store.is_empty());

    store.advance(); // re-populates
    assert!( !store.is_empty());
    for ac in store.aircraft() {
        assert!( !ids.contains( &ac.id), "re-used id {}", ac.id);
    }
    Ok(())
}

#[test]
fn test_advance_invariants()->Result<()> {
    for seed in 0..50 {
        let mut store = FlightStore::new( seeded_config(seed))?;
        store.ensure_populated();
        let bounds = store.config().bounds;

        for _ in 0..2000 {
            for ac in store.advance() {
                let hdg = ac.bearing.degrees();
                assert!( hdg >= 0.0 && hdg < 360.0, "heading {hdg} not normalized");

                // outside by at most one step
                let margin = ac.speed + 1e-9;
                assert!( ac.position.lat >= bounds.south - margin && ac.position.lat <= bounds.north + margin, "{ac}");
                assert!( ac.position.lng >= bounds.west - margin && ac.position.lng <= bounds.east + margin, "{ac}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_bounce_at_box_edge()->Result<()> {
    let config = SimConfig { course_jitter: 0.0, ..seeded_config(1) };
    let mut store = FlightStore::new( config)?;

    let ac = Aircraft::new( "EDGE-1", LatLng::new( 31.9, 80.0), Angle360::from_degrees(10.0), 0.2, Affiliation::UnknownThreat);
    store.add( ac)?;

    let ac = store.advance()[0].clone();
    assert!( (ac.bearing.degrees() - 170.0).abs() < 1e-9);
    assert!( ac.position.lat <= 32.0 + 0.2);

    let ac = store.advance()[0].clone();
    assert!( ac.position.lat <= 32.0 + 0.2);
    assert!( (ac.bearing.degrees() - 170.0).abs() < 1e-9); // back inside, no further bounce
    Ok(())
}

#[test]
fn test_jittered_bounce()->Result<()> {
    let mut store = FlightStore::new( seeded_config(3))?;
    let ac = Aircraft::new( "EDGE-2", LatLng::new( 31.9, 80.0), Angle360::from_degrees(10.0), 0.2, Affiliation::Friendly);
    store.add( ac)?;

    // the bounce step itself is not jittered
    let ac = store.advance()[0].clone();
    assert!( (ac.bearing.degrees() - 170.0).abs() < 1e-9);

    // back inside, course corrections resume
    let ac = store.advance()[0].clone();
    assert!( (ac.position.lat - 31.9).abs() < 1e-9);
    let hdg = ac.bearing.degrees();
    assert!( hdg >= 165.0 && hdg <= 175.0, "heading {hdg} not within jitter of reflected course");
    Ok(())
}

#[test]
fn test_add_remove()->Result<()> {
    let mut store = FlightStore::new( seeded_config(11))?;
    store.ensure_populated();
    let n = store.len();

    let ac = Aircraft::new( "GHOST-1", LatLng::new( 20.0, 80.0), Angle360::from_degrees(45.0), 0.05, Affiliation::UnknownThreat);
    store.add( ac.clone())?;
    assert_eq!( store.snapshot().iter().filter( |a| a.id == "GHOST-1").count(), 1);

    // duplicates leave the store unchanged
    let mut dup = ac.clone();
    dup.speed = 1.0;
    match store.add( dup) {
        Err(SeyeSimError::DuplicateId(id)) => assert_eq!( id, "GHOST-1"),
        other => panic!("expected DuplicateId, got {:?}", other)
    }
    assert_eq!( store.len(), n+1);
    assert_eq!( store.get("GHOST-1").map( |a| a.speed), Some(0.05));

    let removed = store.remove( "GHOST-1")?;
    assert_eq!( removed.id, "GHOST-1");
    assert!( store.snapshot().iter().all( |a| a.id != "GHOST-1"));
    assert_eq!( store.len(), n);

    assert!( matches!( store.remove( "GHOST-1"), Err(SeyeSimError::NotFound(_))));
    assert_eq!( store.len(), n);
    Ok(())
}

#[test]
fn test_deterministic_seed()->Result<()> {
    let mut s1 = FlightStore::new( seeded_config(99))?;
    let mut s2 = FlightStore::new( seeded_config(99))?;
    for _ in 0..10 {
        assert_eq!( s1.advance(), s2.advance());
    }
    Ok(())
}

#[test]
fn test_deploy_route()->Result<()> {
    let mut store = FlightStore::new( seeded_config(5))?;
    let delhi = LatLng::new( 28.6139, 77.2090);
    let mumbai = LatLng::new( 19.0760, 72.8777);

    let req = DeployRequest::new( "Night Hawk", delhi, false).with_target( mumbai);
    let id = store.deploy( req)?;
    assert!( id.starts_with("NIGHT-HAWK-"));

    let ac = store.get( &id).unwrap();
    let expected = initial_bearing( &delhi, &mumbai).degrees();
    assert!( (ac.bearing.degrees() - expected).abs() < 1e-9);
    assert!( (ac.bearing.degrees() - 203.4677).abs() < 1e-3);
    assert_eq!( ac.position, delhi);
    assert_eq!( ac.target, Some(mumbai));
    assert_eq!( ac.affiliation, Affiliation::UnknownThreat);
    assert!( ac.speed >= 0.05 && ac.speed < 0.1);
    Ok(())
}

#[test]
fn test_deploy_json()->Result<()> {
    let mut store = FlightStore::new( seeded_config(5))?;

    // what the dashboard simulator form sends
    let input = r#"{
        "id": "VIPER-1", "name": "Viper", "lat": 28.6139, "lng": 77.2090, "targetLat": 19.0760, "targetLng": 72.8777,
        "bearing": 203.5, "speed": 0.08, "isFriend": true, "confidence": "35", "type": "Rafale", "altitude": 32000,
        "weaponStatus": "ARMED"
    }"#;
    let req: DeployRequest = serde_json::from_str( input)?;
    assert_eq!( store.deploy( req.clone())?, "VIPER-1");

    let ac = store.get("VIPER-1").unwrap();
    assert_eq!( ac.bearing.degrees(), 203.5);
    assert_eq!( ac.speed, 0.08);
    assert_eq!( ac.confidence, Some(35.0));
    assert_eq!( ac.type_label(), "Rafale");
    assert_eq!( ac.info.altitude, Some(32000.0));
    assert!( ac.is_friend());

    // same id again
    assert!( matches!( store.deploy( req), Err(SeyeSimError::DuplicateId(_))));

    // origin/destination descriptor without precomputed bearing
    let input = r#"{ "name": "Raven", "originLat": 20.0, "originLng": 80.0, "destLat": 25.0, "destLng": 80.0, "isFriend": false }"#;
    let req: DeployRequest = serde_json::from_str( input)?;
    let id = store.deploy( req)?;
    assert!( store.get(&id).unwrap().bearing.degrees().abs() < 1e-9);
    Ok(())
}

#[test]
fn test_deploy_rejects()->Result<()> {
    let mut store = FlightStore::new( seeded_config(5))?;
    let n = store.len();

    let inside = LatLng::new( 20.0, 80.0);
    let rejected = vec![
        DeployRequest::new( "", inside, true).with_target( LatLng::new( 21.0, 80.0)),              // no name
        DeployRequest::new( "NoRoute", inside, true),                                              // no bearing, no target
        DeployRequest::new( "Outside", LatLng::new( 40.0, 80.0), true).with_target( inside),       // origin outside bounds
        DeployRequest { speed: Some(-1.0), ..DeployRequest::new( "Slow", inside, true).with_target( LatLng::new( 21.0, 80.0)) },
        DeployRequest { confidence: Some(120.0), bearing: Some(10.0), ..DeployRequest::new( "Sure", inside, true) },
        DeployRequest { target_lng: None, ..DeployRequest::new( "Half", inside, true).with_target( LatLng::new( 21.0, 80.0)) },
    ];

    for req in rejected {
        let name = req.name.clone();
        match store.deploy( req) {
            Err(SeyeSimError::InvalidDeploy(msg)) => println!("rejected '{name}': {msg}"),
            other => panic!("expected InvalidDeploy for '{name}', got {:?}", other)
        }
    }
    assert_eq!( store.len(), n);
    Ok(())
}

#[test]
fn test_shared_store()->Result<()> {
    let store = SharedFlightStore::from_config( seeded_config(8))?;
    let n = store.ensure_populated()?;

    let clone = store.clone();
    let snapshot = clone.advance()?;
    assert_eq!( snapshot.len(), n);
    assert_eq!( store.snapshot()?, snapshot);

    let json = store.with( |s| serde_json::to_string( s.aircraft()))??;
    assert!( json.starts_with("[{\"id\":\"FLT-1000\""));
    Ok(())
}

#[test]
fn test_config()->Result<()> {
    let config = seye_sim::load_config( concat!( env!("CARGO_MANIFEST_DIR"), "/configs/flight_sim.ron"))?;
    assert_eq!( config, SimConfig::default());

    let bad = SimConfig { min_flights: 11, ..SimConfig::default() };
    assert!( matches!( FlightStore::new( bad), Err(SeyeSimError::InvalidConfig(_))));

    let bad = SimConfig { spawn_area: seye_common::geo::GeoBounds::new( 0.0, 25.0, 75.0, 85.0), ..SimConfig::default() };
    assert!( bad.validate().is_err());
    Ok(())
}
