//! Basil slideshow playback.
//!
//! Playback is an explicit frame index advanced by a repeating timer. Each
//! run gets an id; starting again bumps it, so ticks from a cancelled run are
//! ignored even if one slips through.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

pub const SLIDE_CAPTIONS: [&str; 6] = [
    "Basil Day 0",
    "Basil Day 10",
    "Basil Day 20",
    "Basil Day 30",
    "Basil Day 40",
    "Basil Day 60",
];

pub const COMPLETION_MESSAGE: &str = "That's all the photos I have for now!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// 1-based frame number.
    pub index: usize,
    pub src: String,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideshowState {
    /// 1-based frame on screen; `0` before the first tick.
    pub frame: usize,
    pub running: bool,
    pub run_id: u64,
}

impl SlideshowState {
    /// Begin a new run from the top and return its id.
    pub fn start(&mut self) -> u64 {
        self.run_id += 1;
        self.frame = 0;
        self.running = true;
        self.run_id
    }

    /// Advance one frame for run `run_id`.
    ///
    /// Returns `true` if the run should keep ticking.
    pub fn tick(&mut self, run_id: u64) -> bool {
        if run_id != self.run_id || !self.running {
            return false;
        }
        self.frame += 1;
        if self.frame >= SLIDE_CAPTIONS.len() {
            self.running = false;
        }
        self.running
    }

    /// Slide to display; frame 1 until playback has advanced.
    #[must_use]
    pub fn current_slide(&self) -> Slide {
        let index = self.frame.clamp(1, SLIDE_CAPTIONS.len());
        Slide { index, src: format!("images/basil{index}.jpg"), alt: SLIDE_CAPTIONS[index - 1] }
    }

    #[must_use]
    pub fn completion_message(&self) -> Option<&'static str> {
        (self.frame == SLIDE_CAPTIONS.len()).then_some(COMPLETION_MESSAGE)
    }
}
