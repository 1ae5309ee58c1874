//! Swipe detection for touch input on the dialog.

/// Minimum travel, in pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Right-to-left.
    NextMonth,
    /// Left-to-right.
    PreviousMonth,
    /// Downwards; closes the dialog.
    Dismiss,
}

/// Classify a completed touch by its travel. Diagonal and upward gestures
/// are not swipes.
pub fn classify_swipe(dist_x: f32, dist_y: f32) -> Option<Swipe> {
    let horizontal = dist_x.abs() >= SWIPE_THRESHOLD && dist_y.abs() <= SWIPE_THRESHOLD;
    let downwards = dist_y.abs() >= SWIPE_THRESHOLD && dist_x.abs() <= SWIPE_THRESHOLD && dist_y > 0.0;

    if horizontal {
        Some(if dist_x < 0.0 {
            Swipe::NextMonth
        } else {
            Swipe::PreviousMonth
        })
    } else if downwards {
        Some(Swipe::Dismiss)
    } else {
        None
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    start: Option<(f32, f32)>,
}

impl TouchTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// End the touch at `(x, y)`. A touch end without a start is ignored.
    pub fn finish(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let (start_x, start_y) = self.start.take()?;
        classify_swipe(x - start_x, y - start_y)
    }
}
