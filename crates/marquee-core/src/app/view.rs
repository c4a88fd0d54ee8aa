impl<S, IN> CarouselApp<S, IN>
where
    S: Stage,
    IN: InputProvider,
{
    /// Build a controller over the host's collaborators.
    ///
    /// The slide count is read here, once; mounting or unmounting slides
    /// afterwards is unsupported. Zero slides leaves the controller inert.
    pub fn new(stage: S, input: IN, mut config: CarouselConfig) -> Self {
        if config.auto_slide_interval_ms == 0 {
            config.auto_slide_interval_ms = 1;
        }

        let total_slides = stage.slide_count();
        if stage.indicator_count() != total_slides {
            warn!(
                "carousel: {} indicators for {} slides, extra handles stay untouched",
                stage.indicator_count(),
                total_slides
            );
        }

        Self {
            stage,
            input,
            config,
            total_slides,
            current: 0,
            auto: None,
            paused: false,
            interaction_until_ms: None,
            reveal_at_ms: None,
            resume_at_ms: None,
            resize_debounce: Debounce::new(RESIZE_DEBOUNCE_MS),
            swipe: SwipeTracker::new(SwipeConfig::default()),
            progress_shown: false,
            started: false,
        }
    }

    /// Bind the controller to the running host: mount the progress element
    /// when enabled, schedule the automatic cadence, and arm the delayed
    /// first reveal so the entrance animation starts from a clean state.
    pub fn start(&mut self, now_ms: u64) {
        if self.total_slides == 0 {
            warn!("carousel: no slides mounted, controller stays inert");
            return;
        }

        if self.config.show_progress_bar {
            match self.stage.create_progress() {
                Ok(true) => self.progress_shown = true,
                Ok(false) => debug!("carousel: host has nowhere to mount the progress element"),
                Err(_) => warn!("carousel: stage failed to create the progress element"),
            }
        }

        self.reveal_at_ms = Some(now_ms.saturating_add(STARTUP_REVEAL_DELAY_MS));
        self.start_auto_advance(now_ms);
        self.started = true;

        info!(
            "carousel: started with {} slides, interval {} ms, transition {} ms",
            self.total_slides, self.config.auto_slide_interval_ms, self.config.transition_duration_ms
        );
        info!("carousel: controls: arrows, space pause/play, swipe, indicator press");
    }

    /// Drain pending input, then settle every due deadline: startup reveal,
    /// visibility resume, auto-advance cadence, resize re-render.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if !self.started || self.total_slides == 0 {
            return TickResult::Idle;
        }

        let mut updated = false;

        if self.reveal_at_ms.is_some_and(|at| now_ms >= at) {
            self.reveal_at_ms = None;
            self.render_slide(self.current);
            updated = true;
        }

        if self.resume_at_ms.is_some_and(|at| now_ms >= at) {
            self.resume_at_ms = None;
            if self.is_suspended(now_ms) {
                debug!("carousel: visibility resume skipped, controller suspended");
            } else if self.auto.is_none() {
                debug!("carousel: visibility resume, restarting auto-advance");
                self.start_auto_advance(now_ms);
            }
        }

        let fired = self.auto.as_mut().is_some_and(|cadence| cadence.fired(now_ms));
        if fired {
            if self.is_suspended(now_ms) {
                debug!("carousel: tick suppressed inside the interaction quiet window");
            } else {
                let next = step_forward(self.current, self.total_slides);
                debug!("carousel: auto tick index {} -> {}", self.current, next);
                self.current = next;
                self.render_slide(next);
                updated = true;
            }
        }

        if self.resize_debounce.ready(now_ms) {
            debug!("carousel: resize settled, re-rendering index {}", self.current);
            self.render_slide(self.current);
            updated = true;
        }

        if self.interaction_until_ms.is_some_and(|until| now_ms >= until) {
            self.interaction_until_ms = None;
        }

        if updated {
            TickResult::Updated
        } else {
            TickResult::Idle
        }
    }

    pub fn current_index(&self) -> u16 {
        self.current
    }

    pub fn total_slides(&self) -> u16 {
        self.total_slides
    }

    /// Whether automatic advancement currently holds a timer.
    pub fn auto_advance_running(&self) -> bool {
        self.auto.is_some()
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Host-side handle to the input source, for providers that are fed
    /// from subscription callbacks (for instance a bounded queue).
    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
