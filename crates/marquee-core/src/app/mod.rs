//! Carousel state machine: slide index, auto-advance cadence, suspension.

use log::{debug, info, warn};

use crate::{
    config::CarouselConfig,
    input::{
        InputEvent, InputProvider, Key,
        swipe::{SwipeConfig, SwipeDirection, SwipeTracker},
    },
    stage::{RevealSpec, SlidePart, Stage},
    timing::{Debounce, Repeat},
};

const STARTUP_REVEAL_DELAY_MS: u64 = 100;
const INTERACTION_QUIET_MS: u64 = 1_000;
const VISIBILITY_RESUME_DELAY_MS: u64 = 500;
const RESIZE_DEBOUNCE_MS: u64 = 250;
const REVEAL_STAGGER_MS: u16 = 300;

/// Direction of a user-driven slide change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Outcome of one `tick` call. `Updated` means the stage was driven and the
/// host may want to flush its frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    Idle,
    Updated,
}

/// Slide-carousel controller, generic over the host's visual collaborators
/// and input source.
///
/// All scheduling is deadline bookkeeping against the `now_ms` the host
/// passes to [`tick`](Self::tick); the controller owns no threads and no
/// timers. State is single-writer: only tick and the navigation entry
/// points mutate it, one event at a time.
pub struct CarouselApp<S, IN>
where
    S: Stage,
    IN: InputProvider,
{
    stage: S,
    input: IN,
    config: CarouselConfig,
    total_slides: u16,
    current: u16,
    auto: Option<Repeat>,
    paused: bool,
    interaction_until_ms: Option<u64>,
    reveal_at_ms: Option<u64>,
    resume_at_ms: Option<u64>,
    resize_debounce: Debounce,
    swipe: SwipeTracker,
    progress_shown: bool,
    started: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
