impl<S, IN> CarouselApp<S, IN>
where
    S: Stage,
    IN: InputProvider,
{
    /// User-driven step with wrap-around in both directions. Opens the
    /// interaction quiet window and restarts the cadence.
    pub fn advance(&mut self, direction: Direction, now_ms: u64) {
        if self.total_slides == 0 {
            return;
        }

        let next = match direction {
            Direction::Forward => step_forward(self.current, self.total_slides),
            Direction::Backward => step_backward(self.current, self.total_slides),
        };
        debug!(
            "carousel: advance {:?} index {} -> {}",
            direction, self.current, next
        );
        self.current = next;
        self.render_slide(next);
        self.mark_interaction(now_ms);
    }

    /// Direct jump. An out-of-range index is silently ignored.
    pub fn go_to(&mut self, index: u16, now_ms: u64) {
        if index >= self.total_slides {
            debug!(
                "carousel: goto rejected, index {} outside 0..{}",
                index, self.total_slides
            );
            return;
        }
        self.go_to_valid(index, now_ms);
    }

    // Callers guarantee `index < total_slides`.
    fn go_to_valid(&mut self, index: u16, now_ms: u64) {
        debug!("carousel: goto index {} -> {}", self.current, index);
        self.current = index;
        self.render_slide(index);
        self.mark_interaction(now_ms);
    }

    /// One-based entry point kept for the legacy control surface.
    pub fn goto_slide(&mut self, one_based: u16, now_ms: u64) {
        match one_based.checked_sub(1) {
            Some(index) => self.go_to(index, now_ms),
            None => debug!("carousel: goto rejected, one-based index 0"),
        }
    }

    pub fn next(&mut self, now_ms: u64) {
        self.advance(Direction::Forward, now_ms);
    }

    pub fn prev(&mut self, now_ms: u64) {
        self.advance(Direction::Backward, now_ms);
    }

    /// Release suspension and (re)start the cadence.
    pub fn play(&mut self, now_ms: u64) {
        self.paused = false;
        self.interaction_until_ms = None;
        self.start_auto_advance(now_ms);
    }

    /// Hold suspension and drop the cadence entirely; only
    /// [`play`](Self::play) or a user navigation brings it back.
    pub fn pause(&mut self) {
        self.paused = true;
        self.stop_auto_advance();
    }

    /// Stop the cadence and take the progress element down. Input
    /// subscriptions stay with the host, whose lifetime the controller
    /// shares.
    pub fn teardown(&mut self) {
        debug!("carousel: teardown");
        self.stop_auto_advance();
        self.reveal_at_ms = None;
        self.resume_at_ms = None;
        self.resize_debounce.cancel();
        if self.progress_shown {
            let _ = self.stage.remove_progress();
            self.progress_shown = false;
        }
    }

    /// Legacy name for [`teardown`](Self::teardown).
    #[inline]
    pub fn destroy(&mut self) {
        self.teardown();
    }

    /// Whether automation is currently inhibited, either held (`pause`,
    /// hover) or inside the post-interaction quiet window.
    pub fn is_suspended(&self, now_ms: u64) -> bool {
        self.paused || self.interaction_until_ms.is_some_and(|until| now_ms < until)
    }

    // Suspension protocol: navigation restarts the cadence immediately and
    // only inhibits the tick effect for the quiet window.
    fn mark_interaction(&mut self, now_ms: u64) {
        self.paused = false;
        self.interaction_until_ms = Some(now_ms.saturating_add(INTERACTION_QUIET_MS));
        self.start_auto_advance(now_ms);
    }
}

fn step_forward(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn step_backward(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
