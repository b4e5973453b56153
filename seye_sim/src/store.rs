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

use std::sync::{Arc,Mutex,MutexGuard};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug,info};
use seye_common::{angle::Angle360, geo::{GeoBounds,LatLng}};

use crate::{
    aircraft::{Aircraft,Affiliation}, config::SimConfig, deploy::{DeployRequest,random_speed}, motion,
    errors::{Result,SeyeSimError}
};

/// the first serial number we use for generated aircraft ids
pub const FIRST_SERIAL: u32 = 1000;

/// the registry of simulated aircraft. This owns the single random source of the simulation.
/// Aircraft are kept in insertion order, which is also the order of snapshots
pub struct FlightStore {
    config: SimConfig,
    rng: StdRng,
    aircraft: Vec<Aircraft>,
    next_serial: u32, // never reset so that generated ids are not re-used
}

impl FlightStore {
    pub fn new (config: SimConfig)->Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64( seed),
            None => StdRng::from_os_rng()
        };
        Self::with_rng( config, rng)
    }

    pub fn with_rng (config: SimConfig, rng: StdRng)->Result<Self> {
        config.validate()?;
        Ok( FlightStore { config, rng, aircraft: Vec::new(), next_serial: FIRST_SERIAL } )
    }

    pub fn config (&self)->&SimConfig { &self.config }
    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }

    pub fn aircraft (&self)->&[Aircraft] { self.aircraft.as_slice() }
    pub fn snapshot (&self)->Vec<Aircraft> { self.aircraft.clone() }

    pub fn get (&self, id: &str)->Option<&Aircraft> {
        self.aircraft.iter().find( |ac| ac.id == id)
    }

    pub fn contains (&self, id: &str)->bool { self.get(id).is_some() }

    /// create a random batch of aircraft if we don't have any. Returns the number of new aircraft
    pub fn ensure_populated (&mut self)->usize {
        if !self.aircraft.is_empty() { return 0 }

        let n = self.rng.random_range( self.config.min_flights..=self.config.max_flights);
        for _ in 0..n {
            let ac = self.random_aircraft();
            self.aircraft.push( ac);
        }

        info!("populated flight store with {} aircraft", n);
        n
    }

    fn random_aircraft (&mut self)->Aircraft {
        let id = self.next_id();
        let area = self.config.spawn_area;

        let position = LatLng::new(
            self.rng.random_range( area.south..area.north),
            self.rng.random_range( area.west..area.east)
        );
        let bearing = Angle360::from_degrees( self.rng.random_range( 0..360) as f64);
        let speed = random_speed( &self.config, &mut self.rng);
        let affiliation = Affiliation::from_is_friend( self.rng.random_bool( self.config.friendly_probability));

        Aircraft::new( id, position, bearing, speed, affiliation)
    }

    fn next_id (&mut self)->String {
        loop {
            let id = format!("FLT-{}", self.next_serial);
            self.next_serial += 1;
            if !self.contains( &id) { return id }
        }
    }

    fn jitter (&mut self)->f64 {
        let j = self.config.course_jitter;
        if j > 0.0 { self.rng.random_range( -j..j) } else { 0.0 }
    }

    /// one simulation step for all aircraft. An empty store gets re-populated first
    pub fn advance (&mut self)->&[Aircraft] {
        self.ensure_populated();

        let bounds = self.config.bounds;
        for i in 0..self.aircraft.len() {
            let jitter = self.jitter();
            let ac = &mut self.aircraft[i];
            *ac = motion::advanced( ac, &bounds, jitter);
        }

        self.aircraft.as_slice()
    }

    /// add a fully specified aircraft
    pub fn add (&mut self, ac: Aircraft)->Result<()> {
        if self.contains( &ac.id) {
            Err( SeyeSimError::DuplicateId( ac.id))
        } else {
            debug!("adding {}", ac);
            self.aircraft.push( ac);
            Ok(())
        }
    }

    /// remove and return the aircraft with the given id
    pub fn remove (&mut self, id: &str)->Result<Aircraft> {
        match self.aircraft.iter().position( |ac| ac.id == id) {
            Some(idx) => Ok( self.aircraft.remove( idx)),
            None => Err( SeyeSimError::NotFound( id.to_string()))
        }
    }

    /// resolve a client deploy request and add the resulting aircraft. Returns the new id
    pub fn deploy (&mut self, req: DeployRequest)->Result<String> {
        let ac = req.into_aircraft( &self.config, &mut self.rng)?;
        let id = ac.id.clone();
        self.add( ac)?;
        info!("deployed aircraft {}", id);
        Ok(id)
    }
}

/// the handle through which concurrent tasks access a FlightStore. All access is serialized by a single
/// mutex, which is never held across await points
#[derive(Clone)]
pub struct SharedFlightStore {
    store: Arc<Mutex<FlightStore>>
}

impl SharedFlightStore {
    pub fn new (store: FlightStore)->Self {
        SharedFlightStore { store: Arc::new( Mutex::new( store)) }
    }

    pub fn from_config (config: SimConfig)->Result<Self> {
        Ok( Self::new( FlightStore::new( config)?) )
    }

    fn lock (&self)->Result<MutexGuard<'_,FlightStore>> {
        self.store.lock().map_err( |_| SeyeSimError::LockPoisoned)
    }

    /// execute `f` with exclusive access to the store. Use this to (e.g.) serialize snapshots without cloning.
    /// `f` must not block
    pub fn with<F,T> (&self, f: F)->Result<T> where F: FnOnce(&mut FlightStore)->T {
        let mut store = self.lock()?;
        Ok( f( &mut store) )
    }

    pub fn len (&self)->Result<usize> { self.with( |s| s.len()) }
    pub fn snapshot (&self)->Result<Vec<Aircraft>> { self.with( |s| s.snapshot()) }
    pub fn ensure_populated (&self)->Result<usize> { self.with( |s| s.ensure_populated()) }
    pub fn advance (&self)->Result<Vec<Aircraft>> { self.with( |s| s.advance().to_vec()) }

    pub fn add (&self, ac: Aircraft)->Result<()> { self.with( |s| s.add(ac))? }
    pub fn remove (&self, id: &str)->Result<Aircraft> { self.with( |s| s.remove(id))? }
    pub fn deploy (&self, req: DeployRequest)->Result<String> { self.with( |s| s.deploy(req))? }
}
