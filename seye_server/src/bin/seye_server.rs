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

use std::path::PathBuf;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seye_common::define_cli;
use seye_sim::{SimConfig, SharedFlightStore};
use seye_server::{ServerConfig, spawn_server_task};

define_cli! { ARGS [about="S-EYE backend that broadcasts simulated aircraft over websockets"] =
    config: Option<PathBuf> [long, help="path of server config (RON), defaults to built-in config"],
    sim_config: Option<PathBuf> [long, help="path of flight simulation config (RON), defaults to built-in config"],
    seed: Option<u64> [long, help="random seed for a reproducible flight simulation"]
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let server_config = match &ARGS.config {
        Some(path) => seye_server::load_config( path)?,
        None => ServerConfig::default()
    };

    let mut sim_config = match &ARGS.sim_config {
        Some(path) => seye_sim::load_config( path)?,
        None => SimConfig::default()
    };
    if ARGS.seed.is_some() { sim_config.seed = ARGS.seed }

    let store = SharedFlightStore::from_config( sim_config)?;
    let mut server = spawn_server_task( server_config, store).await?;
    info!("S-EYE backend running on {}, terminate with ctrl-c", server.local_addr);

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    server.abort();

    Ok(())
}
