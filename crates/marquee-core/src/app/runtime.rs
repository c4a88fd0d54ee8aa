impl<S, IN> CarouselApp<S, IN>
where
    S: Stage,
    IN: InputProvider,
{
    /// Apply the active presentation to exactly the slide/indicator pair at
    /// `index`, remove it everywhere else, restart the staggered entrance
    /// animation for the slide's parts, and refresh the progress fill.
    ///
    /// Idempotent: rendering the current index again replays the animation,
    /// which is what the debounced resize path relies on.
    pub fn render_slide(&mut self, index: u16) {
        if index >= self.total_slides {
            return;
        }

        for i in 0..self.total_slides {
            let _ = self.stage.deactivate_slide(i);
        }
        for i in 0..self.stage.indicator_count() {
            let _ = self.stage.deactivate_indicator(i);
        }

        if self.stage.activate_slide(index).is_err() {
            warn!("carousel: stage rejected activating slide {}", index);
        }
        if index < self.stage.indicator_count() && self.stage.activate_indicator(index).is_err() {
            warn!("carousel: stage rejected activating indicator {}", index);
        }

        for (position, part) in SlidePart::ALL.into_iter().enumerate() {
            let spec = RevealSpec {
                part,
                delay_ms: REVEAL_STAGGER_MS * position as u16,
                duration_ms: self.config.transition_duration_ms,
            };
            let _ = self.stage.restart_reveal(index, spec);
        }

        self.update_progress();
    }

    fn update_progress(&mut self) {
        if !self.progress_shown || self.total_slides == 0 {
            return;
        }

        let percent = ((u32::from(self.current) + 1) * 100 / u32::from(self.total_slides)) as u8;
        let _ = self.stage.set_progress(percent);
    }

    /// Idempotent: an existing cadence is replaced, never doubled.
    fn start_auto_advance(&mut self, now_ms: u64) {
        self.resume_at_ms = None;
        self.auto = Some(Repeat::starting_at(
            now_ms.saturating_add(self.config.auto_slide_interval_ms),
            self.config.auto_slide_interval_ms,
        ));
    }

    fn stop_auto_advance(&mut self) {
        self.auto = None;
    }
}
