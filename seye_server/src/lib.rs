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

//! the S-EYE backend: serves simulated flight snapshots over websockets and the auxiliary analysis API

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};
use axum::{Router, Json, routing::{get,post}, response::IntoResponse};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use serde::{Deserialize,Serialize};
use serde_json::json;
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::{info,error};

use seye_common::{config::load_config_path, datetime::millis};
use seye_sim::SharedFlightStore;

pub mod errors;
use errors::{SeyeServerResult,invalid_config};

pub mod ws_service;
pub mod subscription;
use subscription::{SnapshotSource, SharedTicker};

pub mod analyze_service;
use analyze_service::AnalysisConfig;

pub mod params_service;
use params_service::ParamsConfig;

type Result<T> = SeyeServerResult<T>;

/// capacity of the snapshot channel in shared broadcast mode. Slow subscribers skip snapshots beyond this
pub const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

/// how snapshots get to subscribers
#[derive(Deserialize,Serialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum BroadcastMode {
    /// each subscriber has its own timer that advances the (shared) simulation. Note the simulation goes
    /// faster with each connected subscriber, which is what existing clients are used to
    PerSubscriber,
    /// one timer advances the simulation and all subscribers get the same snapshot
    Shared,
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
    pub update_interval: Duration,
    pub broadcast: BroadcastMode,
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub params: ParamsConfig,
    #[serde(default)]
    pub static_dir: Option<PathBuf>, // if set we serve the dashboard from here
}

impl Default for ServerConfig {
    fn default()->Self {
        ServerConfig {
            sock_addr: SocketAddr::from( ([0,0,0,0], 3000)),
            update_interval: millis(1000),
            broadcast: BroadcastMode::PerSubscriber,
            analysis: AnalysisConfig::default(),
            params: ParamsConfig::default(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn validate (&self)->Result<()> {
        if self.update_interval.is_zero() { return Err( invalid_config("update_interval must not be zero")) }
        if self.analysis.labels.is_empty() { return Err( invalid_config("no analysis labels")) }
        self.params.validate()?;
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() { return Err( invalid_config( format!("static_dir {:?} is not a directory", dir))) }
        }
        Ok(())
    }
}

/// load and validate a ServerConfig from a RON file
pub fn load_config<P: AsRef<std::path::Path>> (path: P)->Result<ServerConfig> {
    let config: ServerConfig = load_config_path( path)?;
    config.validate()?;
    Ok(config)
}

/// the state that is passed into axum handlers. This has to clone efficiently
#[derive(Clone)]
pub struct SeyeServerState {
    pub config: Arc<ServerConfig>,
    pub store: SharedFlightStore,
    pub snapshots: Option<broadcast::Sender<Arc<String>>>, // only in shared broadcast mode
}

impl SeyeServerState {
    pub fn new (config: ServerConfig, store: SharedFlightStore)->Self {
        let snapshots = match config.broadcast {
            BroadcastMode::Shared => Some( broadcast::channel( SNAPSHOT_CHANNEL_CAPACITY).0),
            BroadcastMode::PerSubscriber => None
        };
        SeyeServerState { config: Arc::new(config), store, snapshots }
    }

    /// where a new subscription gets its snapshots from
    pub fn snapshot_source (&self)->SnapshotSource {
        match &self.snapshots {
            Some(tx) => SnapshotSource::Shared( tx.subscribe()),
            None => SnapshotSource::PerSubscriber( self.config.update_interval)
        }
    }
}

pub fn build_router (state: SeyeServerState)->Router {
    let mut router = Router::new()
        .route( "/ws", get( ws_service::ws_handler))
        .route( "/api/analyze", get( analyze_service::analyze_handler))
        .route( "/api/generate-aircraft-params", post( params_service::params_handler))
        .route( "/api/status", get( status_handler));

    router = if let Some(dir) = &state.config.static_dir {
        router.fallback_service( ServeDir::new( dir))
    } else {
        router.route( "/", get( status_handler))
    };

    // note this won't log anything unless there also is a tracing subscriber set somewhere
    if cfg!(feature="trace_server") {
        router = router.layer( TraceLayer::new_for_http());
    }

    router
        .layer( CorsLayer::permissive())
        .with_state( state)
}

async fn status_handler ()->impl IntoResponse {
    Json( json!({ "message": "S-EYE Backend Operational" }))
}

/// the running server. Dropping this does not stop the server, use `abort()`
pub struct ServerTask {
    pub local_addr: SocketAddr,
    pub server: JoinHandle<()>,
    pub ticker: Option<SharedTicker>,
}

impl ServerTask {
    pub fn abort (&mut self) {
        if let Some(mut ticker) = self.ticker.take() { ticker.stop(); }
        self.server.abort();
    }
}

/// bind the configured socket and spawn the server (and in shared mode the simulation ticker)
pub async fn spawn_server_task (config: ServerConfig, store: SharedFlightStore)->Result<ServerTask> {
    config.validate()?;

    let state = SeyeServerState::new( config, store);
    let ticker = state.snapshots.as_ref().map( |tx| {
        SharedTicker::spawn( state.store.clone(), tx.clone(), state.config.update_interval)
    });

    let listener = tokio::net::TcpListener::bind( state.config.sock_addr).await?;
    let local_addr = listener.local_addr()?;
    let router_svc = build_router( state).into_make_service_with_connect_info::<SocketAddr>();

    let server = tokio::spawn( async move {
        if let Err(e) = axum::serve( listener, router_svc).await {
            error!("server terminated: {}", e);
        }
    });

    info!("serving http://{}", local_addr);
    Ok( ServerTask { local_addr, server, ticker } )
}
