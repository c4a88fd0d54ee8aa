use std::fmt::Write as _;

use log::debug;
use marquee_core::stage::{RevealSpec, Stage};

/// Text-mode rendition of the slide deck: panel markers, indicator dots,
/// and the progress fill on one line.
///
/// The terminal has no animatable parts, so reveal descriptors are logged
/// rather than drawn.
pub struct TermStage {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    progress: Option<u8>,
}

impl TermStage {
    pub fn new(count: u16) -> Self {
        Self {
            slides: vec![false; count as usize],
            indicators: vec![false; count as usize],
            progress: None,
        }
    }

    pub fn frame(&self) -> String {
        let mut out = String::new();

        for (index, active) in self.slides.iter().enumerate() {
            if *active {
                let _ = write!(out, "[*{}*]", index + 1);
            } else {
                let _ = write!(out, "[ {} ]", index + 1);
            }
        }

        out.push_str("  ");
        for active in &self.indicators {
            out.push(if *active { '●' } else { '○' });
        }

        if let Some(percent) = self.progress {
            let filled = usize::from(percent) / 10;
            out.push_str("  ");
            for cell in 0..10 {
                out.push(if cell < filled { '▰' } else { '▱' });
            }
            let _ = write!(out, " {:>3}%", percent);
        }

        out
    }
}

impl Stage for TermStage {
    type Error = std::convert::Infallible;

    fn slide_count(&self) -> u16 {
        self.slides.len() as u16
    }

    fn indicator_count(&self) -> u16 {
        self.indicators.len() as u16
    }

    fn activate_slide(&mut self, index: u16) -> Result<(), Self::Error> {
        if let Some(slot) = self.slides.get_mut(index as usize) {
            *slot = true;
        }
        Ok(())
    }

    fn deactivate_slide(&mut self, index: u16) -> Result<(), Self::Error> {
        if let Some(slot) = self.slides.get_mut(index as usize) {
            *slot = false;
        }
        Ok(())
    }

    fn activate_indicator(&mut self, index: u16) -> Result<(), Self::Error> {
        if let Some(slot) = self.indicators.get_mut(index as usize) {
            *slot = true;
        }
        Ok(())
    }

    fn deactivate_indicator(&mut self, index: u16) -> Result<(), Self::Error> {
        if let Some(slot) = self.indicators.get_mut(index as usize) {
            *slot = false;
        }
        Ok(())
    }

    fn restart_reveal(&mut self, index: u16, spec: RevealSpec) -> Result<(), Self::Error> {
        debug!(
            "term stage: slide {} reveals {:?} after {} ms over {} ms",
            index + 1,
            spec.part,
            spec.delay_ms,
            spec.duration_ms
        );
        Ok(())
    }

    fn create_progress(&mut self) -> Result<bool, Self::Error> {
        self.progress = Some(0);
        Ok(true)
    }

    fn set_progress(&mut self, percent: u8) -> Result<(), Self::Error> {
        if let Some(fill) = self.progress.as_mut() {
            *fill = percent;
        }
        Ok(())
    }

    fn remove_progress(&mut self) -> Result<(), Self::Error> {
        self.progress = None;
        Ok(())
    }
}
