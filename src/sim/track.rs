//! Scrolling line track
//!
//! The track owns every active obstacle line: spawn at the bottom edge,
//! uniform upward scroll, eviction past the top edge, and the closest-line
//! scan the collision resolver works from.

use std::collections::VecDeque;

use rand::Rng;

use crate::consts::{CONTACT_BAND, HOLE_SIZE, LINE_SPACING, SCROLL_PER_TICK};

/// A horizontal obstacle line with one passable gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Vertical position (scrolls toward 0)
    pub y: i32,
    /// X coordinate where the gap begins (fixed at spawn)
    pub hole_start: i32,
    /// Gap width (same for every line)
    pub hole_width: i32,
}

impl Line {
    /// X coordinate just past the gap
    #[inline]
    pub fn hole_end(&self) -> i32 {
        self.hole_start + self.hole_width
    }
}

/// Ordered collection of active lines, oldest first
///
/// All lines scroll together and new lines are appended at the bottom, so
/// insertion order is also strictly increasing in `y`.
#[derive(Debug, Clone, Default)]
pub struct LineTrack {
    lines: VecDeque<Line>,
}

impl LineTrack {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    /// Scroll every line up by one tick's worth
    pub fn advance(&mut self) {
        for line in &mut self.lines {
            line.y -= SCROLL_PER_TICK;
        }
    }

    /// Append a new line at the bottom edge once the newest line has scrolled
    /// `LINE_SPACING` away from it. The track grows by at most one per tick.
    pub fn maybe_spawn(&mut self, width: i32, height: i32, rng: &mut impl Rng) {
        let newest_y = self.lines.back().map_or(0, |line| line.y);
        if height - newest_y > LINE_SPACING {
            // Viewports narrower than the hole get a full-width gap
            let span = (width - HOLE_SIZE).max(1);
            self.push(Line {
                y: height,
                hole_start: rng.random_range(0..span),
                hole_width: HOLE_SIZE,
            });
        }
    }

    /// Drop the oldest line once it has scrolled past the top edge.
    /// No-op on an empty track.
    pub fn maybe_evict(&mut self) {
        if self.lines.front().is_some_and(|line| line.y < 0) {
            self.lines.pop_front();
        }
    }

    /// First line (scanning oldest to newest) whose vertical band reaches
    /// the player.
    ///
    /// When several lines qualify the chronologically oldest wins; it has
    /// scrolled furthest and sits highest on screen. The scan order is
    /// load-bearing, not an artifact.
    pub fn closest_below(&self, player_y: i32, player_radius: i32) -> Option<Line> {
        self.lines
            .iter()
            .copied()
            .find(|line| line.y + CONTACT_BAND + player_radius >= player_y)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest (highest) line, if any
    pub fn oldest(&self) -> Option<&Line> {
        self.lines.front()
    }

    /// Newest (lowest) line, if any
    pub fn newest(&self) -> Option<&Line> {
        self.lines.back()
    }

    /// Append a line directly. Callers keep `y` strictly increasing toward
    /// the back.
    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push_back(line);
    }
}
