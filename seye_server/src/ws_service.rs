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

use std::net::SocketAddr;
use axum::{
    extract::{ws::{Message, WebSocket, WebSocketUpgrade}, connect_info::ConnectInfo, State},
    response::{Response,IntoResponse},
};
use futures_util::stream::StreamExt;
use serde::{Serialize,Deserialize};
use tracing::{info,warn,debug};

use seye_sim::{Aircraft, DeployRequest, SharedFlightStore};
use crate::{
    SeyeServerState,
    subscription::{Subscription, WsSink},
    errors::{SeyeServerError,SeyeServerResult}
};

type Result<T> = SeyeServerResult<T>;

/* #region ws messages *****************************************************************************************/

/// what we send to clients. Serialized as `{"event":"flightData","data":[..]}`
#[derive(Serialize,Debug)]
#[serde(tag="event", content="data", rename_all="camelCase")]
pub enum ServerMsg<'a> {
    FlightData( &'a [Aircraft] ),
}

/// what clients send to us
#[derive(Deserialize,Debug,Clone,PartialEq)]
#[serde(tag="event", content="data", rename_all="camelCase")]
pub enum ClientMsg {
    DeployAircraft( DeployRequest ),
    RemoveAircraft( String ),
}

pub fn flight_data_msg (aircraft: &[Aircraft])->Result<String> {
    Ok( serde_json::to_string( &ServerMsg::FlightData( aircraft))? )
}

/// the result of a successfully processed client message
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum CommandOutcome {
    Deployed(String),
    Removed(String),
}

/// parse and execute a client message. Malformed or rejected commands do not change the store
pub fn handle_client_msg (store: &SharedFlightStore, msg: &str)->Result<CommandOutcome> {
    match serde_json::from_str::<ClientMsg>( msg)? {
        ClientMsg::DeployAircraft(req) => {
            let id = store.deploy( req)?;
            Ok( CommandOutcome::Deployed(id) )
        }
        ClientMsg::RemoveAircraft(id) => {
            let ac = store.remove( id.as_str())?;
            info!("removed aircraft {}", ac.id);
            Ok( CommandOutcome::Removed(ac.id) )
        }
    }
}

/* #endregion ws messages */

pub async fn ws_handler (ws: WebSocketUpgrade, ConnectInfo(addr): ConnectInfo<SocketAddr>, State(state): State<SeyeServerState>)->Response {
    ws.on_upgrade( move |socket| handle_socket( socket, addr, state)).into_response()
}

async fn handle_socket (ws: WebSocket, remote_addr: SocketAddr, state: SeyeServerState) {
    info!("client connected: {}", remote_addr);
    let (ws_sender, mut ws_receiver) = ws.split();

    let mut subscription = match Subscription::connect( remote_addr, state.store.clone(), WsSink(ws_sender), state.snapshot_source()).await {
        Ok(sub) => sub,
        Err(e) => {
            warn!("failed to initialize subscription for {}: {}", remote_addr, e);
            return
        }
    };

    while let Some(Ok(msg)) = ws_receiver.next().await {
        match msg {
            Message::Text(text) => {
                if let Err(e) = handle_client_msg( &state.store, text.as_str()) {
                    warn!("rejected message from {}: {}", remote_addr, e);
                }
            }
            Message::Close(_) => break,
            Message::Binary(_) => debug!("ignoring binary message from {}", remote_addr),
            _ => {} // ping/pong is handled by axum
        }
    }

    subscription.disconnect();
    info!("client disconnected: {}", remote_addr);
}
