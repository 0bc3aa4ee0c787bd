use log::{info, log, Level};

use crate::color::{Color, Coloring};

/**
receives the coloring steps, synchronously and in algorithm order.

 - `on_color_assigned` is called after each coloring decision with the whole current coloring of
   the running strategy and a human readable description of the step.
 - `on_complete` is called once, after a successful dispatch, with the number of colors used.
*/
pub trait ColoringObserver {
    /// a vertex was colored
    fn on_color_assigned(&mut self, colors:&[Option<Color>], message:&str);

    /// the coloring is finished
    fn on_complete(&mut self, nb_colors:usize);
}

/// ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl ColoringObserver for NoObserver {
    fn on_color_assigned(&mut self, _colors:&[Option<Color>], _message:&str) {}

    fn on_complete(&mut self, _nb_colors:usize) {}
}

/// a coloring step, as seen by the observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringStep {
    /// coloring after the step
    pub colors: Coloring,
    /// description of the step
    pub message: String,
}

/// records every step and the final number of colors
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    /// steps, in algorithm order
    pub steps: Vec<ColoringStep>,
    /// number of colors (None until the coloring completes)
    pub nb_colors: Option<usize>,
}

impl ColoringObserver for StepRecorder {
    fn on_color_assigned(&mut self, colors:&[Option<Color>], message:&str) {
        self.steps.push(ColoringStep { colors: colors.to_vec(), message: message.to_string() });
    }

    fn on_complete(&mut self, nb_colors:usize) {
        self.nb_colors = Some(nb_colors);
    }
}

/// forwards the steps to the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    /// level used for the steps (the final count is logged at info level)
    level: Level,
    /// number of steps seen so far
    nb_steps: usize,
}

impl LogObserver {
    /// logs the steps with the given level
    pub fn new(level:Level) -> Self {
        Self { level, nb_steps: 0 }
    }
}

impl Default for LogObserver {
    fn default() -> Self { Self::new(Level::Trace) }
}

impl ColoringObserver for LogObserver {
    fn on_color_assigned(&mut self, _colors:&[Option<Color>], message:&str) {
        self.nb_steps += 1;
        log!(self.level, "[step {}] {}", self.nb_steps, message);
    }

    fn on_complete(&mut self, nb_colors:usize) {
        info!("coloring completed in {} steps using {} colors", self.nb_steps, nb_colors);
    }
}
