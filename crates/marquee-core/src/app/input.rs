impl<S, IN> CarouselApp<S, IN>
where
    S: Stage,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("carousel: input provider failed, dropping the rest of this poll");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::NextPressed => self.advance(Direction::Forward, now_ms),
            InputEvent::PrevPressed => self.advance(Direction::Backward, now_ms),
            InputEvent::IndicatorPressed(index) => self.go_to(index, now_ms),
            InputEvent::Key(key) => self.apply_key(key, now_ms),
            InputEvent::PointerEnter if self.config.pause_on_hover => {
                debug!("carousel: pointer entered, holding auto-advance");
                self.pause();
            }
            InputEvent::PointerLeave if self.config.pause_on_hover => {
                debug!("carousel: pointer left, releasing auto-advance");
                self.play(now_ms);
            }
            InputEvent::TouchStart { x, y } if self.config.enable_touch => {
                self.swipe.begin(x, y, now_ms);
            }
            InputEvent::TouchEnd { x, y } if self.config.enable_touch => {
                match self.swipe.finish(x, y, now_ms) {
                    Some(SwipeDirection::Left) => self.advance(Direction::Forward, now_ms),
                    Some(SwipeDirection::Right) => self.advance(Direction::Backward, now_ms),
                    None => {}
                }
            }
            // Scroll suppression during a drag is the host's concern.
            InputEvent::TouchMove { .. } => {}
            InputEvent::VisibilityChanged { hidden } => self.apply_visibility(hidden, now_ms),
            InputEvent::Resized => self.resize_debounce.poke(now_ms),
            // Remaining arms are events for disabled optional features.
            _ => {}
        }
    }

    fn apply_key(&mut self, key: Key, now_ms: u64) {
        if !self.config.enable_keyboard {
            return;
        }

        match key {
            Key::ArrowLeft => self.advance(Direction::Backward, now_ms),
            Key::ArrowRight => self.advance(Direction::Forward, now_ms),
            Key::Space => self.toggle_playback(now_ms),
        }
    }

    // Suspended resumes, running pauses.
    fn toggle_playback(&mut self, now_ms: u64) {
        if self.is_suspended(now_ms) {
            debug!("carousel: space toggle, resuming");
            self.play(now_ms);
        } else {
            debug!("carousel: space toggle, pausing");
            self.pause();
        }
    }

    fn apply_visibility(&mut self, hidden: bool, now_ms: u64) {
        if hidden {
            debug!("carousel: surface hidden, stopping auto-advance");
            self.resume_at_ms = None;
            self.stop_auto_advance();
        } else {
            debug!(
                "carousel: surface visible, resume scheduled in {} ms",
                VISIBILITY_RESUME_DELAY_MS
            );
            self.resume_at_ms = Some(now_ms.saturating_add(VISIBILITY_RESUME_DELAY_MS));
        }
    }
}
