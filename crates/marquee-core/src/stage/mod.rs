//! Presentation capability surface implemented by the host.
//!
//! The controller never touches markup or styling; it drives whatever the
//! host mounted through this trait. Slide and indicator collections are
//! fixed-order and identically indexed.

pub mod null;

/// Sub-element of a slide revealed with a staggered entrance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlidePart {
    Title,
    Body,
    Actions,
}

impl SlidePart {
    /// Reveal order; index position doubles as the stagger multiplier.
    pub const ALL: [SlidePart; 3] = [SlidePart::Title, SlidePart::Body, SlidePart::Actions];
}

/// Restartable entrance-animation descriptor for one slide part.
///
/// Handing the same spec to the stage again replays the animation from the
/// beginning; this is the explicit reset capability, the stage must not
/// depend on the part having settled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealSpec {
    pub part: SlidePart,
    /// Delay relative to the slide becoming active.
    pub delay_ms: u16,
    pub duration_ms: u16,
}

/// Visual collaborator set owned by the host.
///
/// Every operation is fallible so hosts can report detached or missing
/// elements; the controller logs and carries on, a failing collaborator
/// never takes the rest of the carousel down. Optional collaborators are
/// absent rather than failing: `create_progress` returns `Ok(false)` when
/// there is nowhere to mount the element.
pub trait Stage {
    type Error;

    /// Number of slide panels, read once at controller construction.
    fn slide_count(&self) -> u16;

    /// Number of indicator dots. Matching markup returns `slide_count`;
    /// a mismatch is a host misconfiguration.
    fn indicator_count(&self) -> u16;

    fn activate_slide(&mut self, index: u16) -> Result<(), Self::Error>;
    fn deactivate_slide(&mut self, index: u16) -> Result<(), Self::Error>;
    fn activate_indicator(&mut self, index: u16) -> Result<(), Self::Error>;
    fn deactivate_indicator(&mut self, index: u16) -> Result<(), Self::Error>;

    /// Reset and restart the entrance animation for one sub-element of the
    /// slide at `index`.
    fn restart_reveal(&mut self, index: u16, spec: RevealSpec) -> Result<(), Self::Error>;

    /// Insert the progress element; `Ok(false)` when the host has nowhere
    /// to mount it.
    fn create_progress(&mut self) -> Result<bool, Self::Error>;

    /// Set the progress fill, `0..=100` percent.
    fn set_progress(&mut self, percent: u8) -> Result<(), Self::Error>;

    fn remove_progress(&mut self) -> Result<(), Self::Error>;
}
