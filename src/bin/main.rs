//! Terminal bring-up host for the marquee carousel controller.
//!
//! Mounts a text-mode stage, replays a scripted interaction track, and
//! drives the controller from a wall-clock tick loop. Frames print one per
//! line whenever the stage changes.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use clap::Parser;
use log::info;
use marquee_core::{
    app::{CarouselApp, TickResult},
    config::CarouselConfig,
    input::queue::QueueInput,
};

use crate::stage::TermStage;
use crate::track::DemoTrack;

#[path = "main/stage.rs"]
mod stage;
#[path = "main/track.rs"]
mod track;

const TICK_SLEEP_MS: u64 = 16;
const EVENT_QUEUE_DEPTH: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Carousel controller demo on a terminal stage")]
struct Args {
    /// Number of slide panels to mount
    #[arg(long, default_value_t = 5)]
    slides: u16,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = 4_000)]
    interval_ms: u64,

    /// Entrance-animation duration in milliseconds
    #[arg(long, default_value_t = 1_200)]
    transition_ms: u16,

    /// How long the demo runs, in seconds
    #[arg(long, default_value_t = 30)]
    duration_secs: u64,

    /// Leave the progress element unmounted
    #[arg(long)]
    no_progress: bool,

    /// Disable the hover hold
    #[arg(long)]
    no_hover: bool,

    /// Disable keyboard navigation
    #[arg(long)]
    no_keyboard: bool,

    /// Disable touch swipes
    #[arg(long)]
    no_touch: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.slides > 0, "at least one slide panel is required");

    let units = thread::available_parallelism().ok().map(|n| n.get());
    let config = CarouselConfig {
        auto_slide_interval_ms: args.interval_ms,
        transition_duration_ms: args.transition_ms,
        pause_on_hover: !args.no_hover,
        enable_keyboard: !args.no_keyboard,
        enable_touch: !args.no_touch,
        show_progress_bar: !args.no_progress,
    }
    .adapted_for(units);
    info!(
        "marquee demo: {} slides, {} ms interval, host reports {:?} units",
        args.slides, config.auto_slide_interval_ms, units
    );

    let mut track = DemoTrack::standard(config.auto_slide_interval_ms, args.slides);
    let mut app = CarouselApp::new(
        TermStage::new(args.slides),
        QueueInput::<EVENT_QUEUE_DEPTH>::new(),
        config,
    );

    let start = Instant::now();
    app.start(0);

    let duration_ms = args.duration_secs.saturating_mul(1_000);
    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        if now_ms >= duration_ms {
            break;
        }

        while let Some(event) = track.pop_due(now_ms) {
            app.input_mut().push(event);
        }

        if app.tick(now_ms) == TickResult::Updated {
            println!("{}", app.stage().frame());
        }

        thread::sleep(Duration::from_millis(TICK_SLEEP_MS));
    }

    app.teardown();
    info!("marquee demo: finished after {} ms", start.elapsed().as_millis());
    Ok(())
}
