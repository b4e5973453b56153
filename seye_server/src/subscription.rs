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

use std::{sync::Arc, time::Duration};
use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{sink::SinkExt, stream::SplitSink};
use tokio::{sync::{broadcast, mpsc}, task::JoinHandle, time::{self, Instant, MissedTickBehavior}};
use tracing::{debug,info,warn,error};

use seye_sim::SharedFlightStore;
use crate::{ws_service::flight_data_msg, errors::{SeyeServerError,SeyeServerResult}};

type Result<T> = SeyeServerResult<T>;

/// the abstraction of where a subscription pushes its snapshot messages to
#[async_trait]
pub trait SnapshotSink: Send + 'static {
    /// this should fail with `TransportDisconnected` if the receiver is gone
    async fn push (&mut self, msg: String)->Result<()>;
}

/// the sending half of a websocket
pub struct WsSink(pub SplitSink<WebSocket,Message>);

#[async_trait]
impl SnapshotSink for WsSink {
    async fn push (&mut self, msg: String)->Result<()> {
        self.0.send( Message::Text( msg.into())).await.map_err( |_| SeyeServerError::TransportDisconnected)
    }
}

/// mostly for in-process subscribers such as tests
#[async_trait]
impl SnapshotSink for mpsc::UnboundedSender<String> {
    async fn push (&mut self, msg: String)->Result<()> {
        self.send( msg).map_err( |_| SeyeServerError::TransportDisconnected)
    }
}

/// where a subscription gets its snapshots from
#[derive(Debug)]
pub enum SnapshotSource {
    /// the subscription runs its own timer with the given interval that advances the simulation
    PerSubscriber(Duration),
    /// the subscription forwards what a SharedTicker publishes
    Shared(broadcast::Receiver<Arc<String>>),
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum SubscriptionState {
    Connected,    // initial snapshot sent, no timer yet
    Ticking,      // timer running
    Disconnected, // terminal, timer cancelled
}

/// the lifecycle of a single snapshot subscriber. The timer task owns the sink and is cancelled exactly once,
/// either by an explicit `disconnect()` or when the subscription is dropped
pub struct Subscription {
    name: String,
    state: SubscriptionState,
    timer: Option<JoinHandle<()>>,
}

impl Subscription {
    /// make sure the simulation is populated, push the current snapshot and start the timer
    pub async fn connect<S: SnapshotSink> (name: impl ToString, store: SharedFlightStore, mut sink: S, source: SnapshotSource)->Result<Self> {
        let name = name.to_string();
        let mut sub = Subscription { name, state: SubscriptionState::Connected, timer: None };

        store.ensure_populated()?;
        let msg = store.with( |s| flight_data_msg( s.aircraft()))??;
        sink.push( msg).await?;

        let timer = match source {
            SnapshotSource::PerSubscriber(interval) => tokio::spawn( run_timer( sub.name.clone(), store, sink, interval)),
            SnapshotSource::Shared(rx) => tokio::spawn( run_forwarder( sub.name.clone(), rx, sink)),
        };
        sub.timer = Some(timer);
        sub.state = SubscriptionState::Ticking;

        debug!("subscription {} ticking", sub.name);
        Ok(sub)
    }

    pub fn name (&self)->&str { self.name.as_str() }
    pub fn state (&self)->SubscriptionState { self.state }

    /// this can turn false while we are still `Ticking` if the timer found the sink closed
    pub fn is_timer_running (&self)->bool {
        self.timer.as_ref().map( |t| !t.is_finished()).unwrap_or(false)
    }

    pub fn disconnect (&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!("subscription {} timer cancelled", self.name);
        }
        self.state = SubscriptionState::Disconnected;
    }
}

impl Drop for Subscription {
    fn drop (&mut self) {
        if self.state != SubscriptionState::Disconnected {
            self.disconnect();
        }
    }
}

fn first_tick (interval: Duration)->time::Interval {
    let mut timer = time::interval_at( Instant::now() + interval, interval);
    timer.set_missed_tick_behavior( MissedTickBehavior::Delay);
    timer
}

/// advance the shared store and serialize the new snapshot. The lock is released before anything is sent
fn advanced_snapshot_msg (store: &SharedFlightStore)->Result<String> {
    store.with( |s| flight_data_msg( s.advance()))?
}

async fn run_timer<S: SnapshotSink> (name: String, store: SharedFlightStore, mut sink: S, interval: Duration) {
    let mut timer = first_tick( interval);
    loop {
        timer.tick().await;

        match advanced_snapshot_msg( &store) {
            Ok(msg) => {
                if let Err(e) = sink.push( msg).await {
                    debug!("subscription {} stopped: {}", name, e);
                    break;
                }
            }
            Err(e) => {
                error!("subscription {} failed to advance simulation: {}", name, e);
                break;
            }
        }
    }
}

async fn run_forwarder<S: SnapshotSink> (name: String, mut rx: broadcast::Receiver<Arc<String>>, mut sink: S) {
    loop {
        match rx.recv().await {
            Ok(msg) => {
                if let Err(e) = sink.push( msg.as_ref().clone()).await {
                    debug!("subscription {} stopped: {}", name, e);
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => warn!("subscription {} skipped {} snapshots", name, n),
            Err(broadcast::error::RecvError::Closed) => break
        }
    }
}

/// the single simulation timer of shared broadcast mode
pub struct SharedTicker {
    task: Option<JoinHandle<()>>
}

impl SharedTicker {
    pub fn spawn (store: SharedFlightStore, tx: broadcast::Sender<Arc<String>>, interval: Duration)->Self {
        let task = tokio::spawn( async move {
            let mut timer = first_tick( interval);
            loop {
                timer.tick().await;
                match advanced_snapshot_msg( &store) {
                    Ok(msg) => { let _ = tx.send( Arc::new(msg)); } // no receivers is not an error
                    Err(e) => {
                        error!("shared ticker failed to advance simulation: {}", e);
                        break;
                    }
                }
            }
        });
        info!("started shared simulation ticker with {:?} interval", interval);
        SharedTicker { task: Some(task) }
    }

    pub fn stop (&mut self) {
        if let Some(task) = self.task.take() { task.abort(); }
    }
}

impl Drop for SharedTicker {
    fn drop (&mut self) { self.stop(); }
}
