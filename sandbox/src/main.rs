// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use clap::Parser;
use lorenz_sdk::prelude::*;
use lorenz_telemetry::init_logging;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sandbox")]
#[command(version)]
#[command(about = "Runs the Lorenz attractor visualizer without a window.", long_about = None)]
struct Args {
    /// JSON configuration file. Defaults are used when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Number of frames to run.
    #[arg(long, short, default_value_t = 6000)]
    frames: u64,
    /// Record frames as newline-delimited JSON into this file.
    #[arg(long, short)]
    record: Option<PathBuf>,
    /// Only record every n-th frame.
    #[arg(long, default_value_t = 1)]
    record_every: u64,
}

fn main() -> Result<()> {
    init_logging("info");
    let args = Args::parse();

    let config = VisualizerConfig::load_or_default(args.config.as_deref())?;
    let (width, height) = config.viewport;

    let renderer: Box<dyn TrajectoryRenderer> = match &args.record {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create recording '{}'", path.display()))?;
            log::info!("Recording frames to '{}'.", path.display());
            Box::new(JsonFrameRecorder::new(BufWriter::new(file)).with_stride(args.record_every))
        }
        None => Box::new(
            HeadlessRenderer::new(width, height).with_max_vertices(config.integrator.capacity),
        ),
    };

    let mut visualizer = Visualizer::new(&config, renderer)?;
    let summary = visualizer.run(args.frames)?;

    if let Some(err) = &summary.diverged {
        log::warn!("Integration stopped early: {err}");
    }
    log::info!("Final position: {}", visualizer.integrator().state());
    if let Some(bounds) = summary.metrics.bounds {
        log::info!(
            "Attractor bounds: min {:?}, max {:?}",
            bounds.min.to_array(),
            bounds.max.to_array()
        );
    }
    log::info!(
        "Evicted {} points, largest step {:.5}.",
        summary.metrics.evictions,
        summary.metrics.max_step_length
    );
    Ok(())
}
