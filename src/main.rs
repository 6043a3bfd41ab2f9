//! Headless gallery runner: opens the gallery and ticks it at ~60 Hz.

use std::time::Duration;

use anyhow::Context;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use vernissage::snapshot::{to_json, ActorSnapshot};
use vernissage::{init_logging, ActorStore, Args, GalleryConfig, GalleryPlugin};

const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = GalleryConfig::from_args(&args).context("invalid command line")?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)))
        .insert_resource(config.clone())
        .add_plugins(GalleryPlugin);

    let Some(frames) = config.frames else {
        info!("running until interrupted");
        if app.run().is_error() {
            anyhow::bail!("gallery loop exited with an error");
        }
        return Ok(());
    };

    app.finish();
    app.cleanup();
    for _ in 0..frames {
        app.update();
    }
    info!("stopped after {frames} frames");

    if config.dump_actors {
        let store = app.world().resource::<ActorStore>();
        let json = to_json(&ActorSnapshot::capture(store)).context("serialising actors")?;
        info!("actors:\n{json}");
    }
    Ok(())
}
