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

use std::time::Duration;
use axum::{Json, extract::State, response::IntoResponse};
use rand::{Rng, seq::IndexedRandom};
use serde::{Serialize,Deserialize};
use seye_common::datetime::millis;

use crate::SeyeServerState;

/// the mock image recognition. There is no image data involved, we just pick a random label
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct AnalysisConfig {
    pub delay: Duration, // artificial processing time
    pub labels: Vec<String>,
    pub min_probability: f64,
    pub max_probability: f64,
}

impl Default for AnalysisConfig {
    fn default()->Self {
        AnalysisConfig {
            delay: millis(1500),
            labels: ["Rafale", "Su-30MKI", "J-20", "F-16", "Mirage 2000"].iter().map( |s| s.to_string()).collect(),
            min_probability: 85.0,
            max_probability: 99.9,
        }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Analysis {
    pub tag_name: String,
    pub probability: String, // percent with two fractional digits - clients expect a string
    pub bounding_box: BoundingBox,
}

pub fn random_analysis<R: Rng> (config: &AnalysisConfig, rng: &mut R)->Analysis {
    let tag_name = config.labels.choose( rng).cloned().unwrap_or_else( || "UNKNOWN".to_string());
    let probability = if config.max_probability > config.min_probability {
        rng.random_range( config.min_probability..config.max_probability)
    } else {
        config.min_probability
    };

    Analysis {
        tag_name,
        probability: format!("{:.2}", probability),
        bounding_box: BoundingBox {
            left: rng.random::<f64>() * 0.5,
            top: rng.random::<f64>() * 0.5,
            width: 0.4,
            height: 0.3,
        }
    }
}

pub async fn analyze_handler (State(state): State<SeyeServerState>)->impl IntoResponse {
    let config = &state.config.analysis;
    tokio::time::sleep( config.delay).await;

    let analysis = random_analysis( config, &mut rand::rng());
    Json( analysis)
}
