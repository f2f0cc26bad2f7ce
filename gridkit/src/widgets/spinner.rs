//! Spinner widget for loading states.
//!
//! A bouncing-bar pattern: a snake of filled blocks travels across a dotted
//! track and back, with configurable pauses at the ends. Hosts typically
//! paint a frame in place of the table body while
//! [`DataTable::is_loading`](crate::components::table::DataTable::is_loading)
//! is true.

use std::time::Duration;

const SNAKE_CHAR: char = '■';
const TRACK_CHAR: char = '⬝';

/// Configuration for the spinner.
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: usize,
    /// Length of the snake/bar.
    snake_len: usize,
    /// Pause frames at the right end.
    right_pause: usize,
    /// Pause frames at the left end.
    left_pause: usize,
    /// Frame duration in milliseconds.
    frame_ms: u64,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            track_width: 8,
            snake_len: 6,
            right_pause: 1,
            left_pause: 20,
            frame_ms: 60,
        }
    }
}

impl Spinner {
    /// Create a new spinner with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track width.
    pub fn track_width(mut self, width: usize) -> Self {
        self.track_width = width.max(1);
        self
    }

    /// Set the snake/bar length.
    pub fn snake_len(mut self, len: usize) -> Self {
        self.snake_len = len.max(1);
        self
    }

    /// Set pause frames at the right end.
    pub fn right_pause(mut self, frames: usize) -> Self {
        self.right_pause = frames;
        self
    }

    /// Set pause frames at the left end.
    pub fn left_pause(mut self, frames: usize) -> Self {
        self.left_pause = frames;
        self
    }

    /// Set frame duration in milliseconds.
    pub fn frame_ms(mut self, ms: u64) -> Self {
        self.frame_ms = ms.max(1);
        self
    }

    /// How long each frame should show.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// The frame for a tick counter, cycling through the animation.
    pub fn frame(&self, tick: usize) -> String {
        let frames = self.frames();
        frames[tick % frames.len()].clone()
    }

    /// Generate the full animation cycle.
    pub fn frames(&self) -> Vec<String> {
        let mut frames = Vec::new();
        let track_width = self.track_width as i64;
        let snake_len = self.snake_len as i64;

        // Right pass: snake enters from the left, travels across, exits right
        for head_pos in 0..=(track_width + snake_len - 2) {
            frames.push(self.make_snake_frame(head_pos));
        }

        for _ in 0..self.right_pause {
            frames.push(self.make_empty_frame());
        }

        // Left pass: snake enters from the right, travels across, exits left
        for head_pos in (0..=(track_width + snake_len - 2)).rev() {
            frames.push(self.make_snake_frame(head_pos));
        }

        for _ in 0..self.left_pause {
            frames.push(self.make_empty_frame());
        }

        frames
    }

    fn make_empty_frame(&self) -> String {
        TRACK_CHAR.to_string().repeat(self.track_width)
    }

    fn make_snake_frame(&self, head_pos: i64) -> String {
        let snake_len = self.snake_len as i64;
        let snake_start = head_pos - snake_len + 1;

        (0..self.track_width as i64)
            .map(|i| {
                if i >= snake_start && i <= head_pos {
                    SNAKE_CHAR
                } else {
                    TRACK_CHAR
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cover_both_passes_and_pauses() {
        let spinner = Spinner::new()
            .track_width(4)
            .snake_len(2)
            .right_pause(1)
            .left_pause(2);
        // Each pass is track + snake - 1 frames.
        assert_eq!(spinner.frames().len(), 5 + 1 + 5 + 2);
    }

    #[test]
    fn test_frame_width_is_constant() {
        let spinner = Spinner::new().track_width(6).snake_len(3);
        for frame in spinner.frames() {
            assert_eq!(frame.chars().count(), 6);
        }
    }

    #[test]
    fn test_frame_cycles() {
        let spinner = Spinner::new();
        let count = spinner.frames().len();
        assert_eq!(spinner.frame(0), spinner.frame(count));
    }
}
