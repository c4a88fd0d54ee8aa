use marquee_core::input::{InputEvent, Key};

/// Scripted interaction track for the demo: exercises each navigation path
/// once, spread across the first few advance intervals.
pub struct DemoTrack {
    events: Vec<(u64, InputEvent)>,
    cursor: usize,
}

impl DemoTrack {
    pub fn standard(interval_ms: u64, slides: u16) -> Self {
        let last = slides.saturating_sub(1);
        let i = interval_ms;
        let mut events = vec![
            (i + 500, InputEvent::NextPressed),
            (i + 800, InputEvent::PrevPressed),
            (2 * i, InputEvent::IndicatorPressed(last)),
            (2 * i + 400, InputEvent::TouchStart { x: 220, y: 120 }),
            (2 * i + 550, InputEvent::TouchEnd { x: 60, y: 130 }),
            (3 * i, InputEvent::Key(Key::Space)),
            (3 * i + 1_500, InputEvent::Key(Key::Space)),
            (4 * i, InputEvent::Resized),
            (4 * i + 60, InputEvent::Resized),
            (4 * i + 120, InputEvent::Resized),
        ];
        events.sort_by_key(|(at, _)| *at);
        Self { events, cursor: 0 }
    }

    /// Next event whose timestamp has passed, in track order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<InputEvent> {
        let (at, event) = *self.events.get(self.cursor)?;
        if at > now_ms {
            return None;
        }
        self.cursor += 1;
        Some(event)
    }
}
