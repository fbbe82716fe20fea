//! Autoplaying carousel over a fixed, ordered catalog.
//!
//! The engine is plain state: the component feeds it timer ticks, pointer
//! events and clicks, and owns the actual browser timers. Cooldowns are handed
//! out as [`ResumeTicket`]s; only the most recently issued ticket can resume
//! autoplay, so a timer that fires late never undoes a newer pause.

use std::time::Duration;

use thiserror::Error;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);
pub const MANUAL_COOLDOWN: Duration = Duration::from_secs(10);
pub const DRAG_COOLDOWN: Duration = Duration::from_secs(5);
/// Minimum `|offset| * velocity` (px²/s) for a release to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// A scheduled end of a manual-interaction cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeTicket {
    generation: u64,
    after: Duration,
}

impl ResumeTicket {
    pub fn after(&self) -> Duration {
        self.after
    }
}

/// Horizontal drag measurement taken at release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    /// Pixels moved, positive to the right.
    pub offset: f64,
    /// Pixels per second, positive to the right.
    pub velocity: f64,
}

impl Swipe {
    pub fn power(&self) -> f64 {
        self.offset.abs() * self.velocity
    }

    pub fn intent(&self) -> Option<Direction> {
        let power = self.power();
        if power > SWIPE_THRESHOLD {
            Some(Direction::Forward)
        } else if power < -SWIPE_THRESHOLD {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// Samples closer together than this are too noisy to measure release speed.
const MIN_SAMPLE_GAP_MS: f64 = 10.0;

/// Follows one pointer drag. Release speed is measured over the last move,
/// so a drag that came to rest before release has no velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    start_x: f64,
    // (x, ms) of the two most recent samples
    previous: (f64, f64),
    last: (f64, f64),
}

impl DragTracker {
    pub fn begin(x: f64, at_ms: f64) -> Self {
        Self {
            start_x: x,
            previous: (x, at_ms),
            last: (x, at_ms),
        }
    }

    pub fn move_to(&mut self, x: f64, at_ms: f64) {
        self.previous = self.last;
        self.last = (x, at_ms);
    }

    /// Pixels moved since the pointer went down, positive to the right.
    pub fn offset(&self) -> f64 {
        self.last.0 - self.start_x
    }

    pub fn release(self, x: f64, at_ms: f64) -> Swipe {
        // a release right on top of the last move measures against the one before
        let (ref_x, ref_ms) = if at_ms - self.last.1 >= MIN_SAMPLE_GAP_MS {
            self.last
        } else {
            self.previous
        };
        let elapsed_secs = (at_ms - ref_ms).max(1.0) / 1000.0;
        Swipe {
            offset: x - self.start_x,
            velocity: (x - ref_x) / elapsed_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    direction: Direction,
    hovering: bool,
    dragging: bool,
    // generation of the outstanding cooldown, if any
    cooldown: Option<u64>,
    generation: u64,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            index: 0,
            direction: Direction::Forward,
            hovering: false,
            dragging: false,
            cooldown: None,
            generation: 0,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Item `offset` places away from the current one, wrapping both ways.
    pub fn at_offset(&self, offset: isize) -> &T {
        let len = self.items.len() as isize;
        let i = (self.index as isize + offset).rem_euclid(len) as usize;
        &self.items[i]
    }

    pub fn current(&self) -> &T {
        self.at_offset(0)
    }

    pub fn is_auto_playing(&self) -> bool {
        !self.hovering && !self.dragging && self.cooldown.is_none()
    }

    /// Autoplay step. Ignored while paused; returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_auto_playing() {
            return false;
        }
        self.step(Direction::Forward);
        true
    }

    pub fn next(&mut self) -> ResumeTicket {
        self.step(Direction::Forward);
        self.start_cooldown(MANUAL_COOLDOWN)
    }

    pub fn previous(&mut self) -> ResumeTicket {
        self.step(Direction::Backward);
        self.start_cooldown(MANUAL_COOLDOWN)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<ResumeTicket, CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if index > self.index {
            self.direction = Direction::Forward;
        } else if index < self.index {
            self.direction = Direction::Backward;
        }
        self.index = index;
        Ok(self.start_cooldown(MANUAL_COOLDOWN))
    }

    pub fn drag_start(&mut self) {
        self.dragging = true;
    }

    pub fn drag_release(&mut self, swipe: Swipe) -> ResumeTicket {
        self.dragging = false;
        match swipe.intent() {
            Some(Direction::Forward) => self.next(),
            Some(Direction::Backward) => self.previous(),
            None => self.start_cooldown(DRAG_COOLDOWN),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    /// Leaving resumes at once unless a cooldown is still running.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Ends the cooldown `ticket` was issued for. Stale tickets are ignored.
    /// Returns whether autoplay is running afterwards.
    pub fn resume(&mut self, ticket: ResumeTicket) -> bool {
        if self.cooldown == Some(ticket.generation) {
            self.cooldown = None;
        }
        self.is_auto_playing()
    }

    fn step(&mut self, direction: Direction) {
        let len = self.items.len();
        self.direction = direction;
        self.index = match direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        };
    }

    fn start_cooldown(&mut self, after: Duration) -> ResumeTicket {
        self.generation += 1;
        self.cooldown = Some(self.generation);
        log::debug!(
            "carousel paused at {} for {}ms",
            self.index,
            after.as_millis()
        );
        ResumeTicket {
            generation: self.generation,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Carousel<u32> {
        Carousel::new(vec![10, 11, 12, 13, 14]).unwrap()
    }

    fn slow_drag() -> Swipe {
        Swipe {
            offset: 40.0,
            velocity: 100.0,
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            Carousel::<u32>::new(Vec::new()).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn test_initial_state() {
        let c = five();
        assert_eq!(c.index(), 0);
        assert_eq!(*c.current(), 10);
        assert!(c.is_auto_playing());
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_from_zero_wraps() {
        let mut c = five();
        c.previous();
        assert_eq!(c.index(), 4);
        assert_eq!(*c.current(), 14);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_index_stays_in_range() {
        for len in 1..8usize {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            // deterministic mix of next/previous
            let mut expected = 0isize;
            for step in 0..50usize {
                if (step * 7 + len) % 3 == 0 {
                    c.previous();
                    expected -= 1;
                } else {
                    c.next();
                    expected += 1;
                }
                assert!(c.index() < len);
                assert_eq!(c.index(), expected.rem_euclid(len as isize) as usize);
            }
        }
    }

    #[test]
    fn test_autoplay_advances_modulo() {
        let mut c = five();
        for k in 1..=12 {
            assert!(c.tick());
            assert_eq!(c.index(), k % 5);
        }
    }

    #[test]
    fn test_tick_ignored_during_cooldown() {
        let mut c = five();
        let ticket = c.next();
        assert_eq!(ticket.after(), MANUAL_COOLDOWN);
        assert!(!c.is_auto_playing());
        assert!(!c.tick());
        assert_eq!(c.index(), 1);

        assert!(c.resume(ticket));
        assert!(c.tick());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_stale_ticket_does_not_override_later_pause() {
        let mut c = five();
        let first = c.next();
        let second = c.next();

        // first timer fires while the second cooldown is still running
        assert!(!c.resume(first));
        assert!(!c.is_auto_playing());
        assert!(!c.tick());

        assert!(c.resume(second));
        assert!(c.is_auto_playing());
    }

    #[test]
    fn test_three_clicks_with_cooldowns() {
        let mut c = five();
        for _ in 0..3 {
            let ticket = c.next();
            c.resume(ticket);
        }
        assert_eq!(c.index(), 3);
        assert!(c.is_auto_playing());
    }

    #[test]
    fn test_jump_to() {
        let mut c = five();
        let ticket = c.jump_to(3).unwrap();
        assert_eq!(c.index(), 3);
        assert_eq!(c.direction(), Direction::Forward);
        assert!(!c.is_auto_playing());
        c.resume(ticket);

        c.jump_to(1).unwrap();
        assert_eq!(c.direction(), Direction::Backward);

        assert_eq!(
            c.jump_to(5).unwrap_err(),
            CarouselError::OutOfRange { index: 5, len: 5 }
        );
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_slow_drag_keeps_index() {
        let mut c = five();
        c.drag_start();
        assert!(!c.is_auto_playing());
        let ticket = c.drag_release(slow_drag());
        assert_eq!(c.index(), 0);
        assert_eq!(ticket.after(), DRAG_COOLDOWN);
        assert!(!c.is_auto_playing());
        assert!(c.resume(ticket));
    }

    #[test]
    fn test_swipe_navigates() {
        let mut c = five();
        c.drag_start();
        let ticket = c.drag_release(Swipe {
            offset: 120.0,
            velocity: 400.0,
        });
        assert_eq!(c.index(), 1);
        assert_eq!(ticket.after(), MANUAL_COOLDOWN);

        c.drag_start();
        c.drag_release(Swipe {
            offset: -120.0,
            velocity: -400.0,
        });
        c.drag_start();
        c.drag_release(Swipe {
            offset: -120.0,
            velocity: -400.0,
        });
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn test_hover_pauses_until_leave() {
        let mut c = five();
        c.pointer_enter();
        assert!(!c.tick());
        c.pointer_leave();
        assert!(c.is_auto_playing());
        assert!(c.tick());
    }

    #[test]
    fn test_resume_while_hovering_waits_for_leave() {
        let mut c = five();
        c.pointer_enter();
        c.drag_start();
        let ticket = c.drag_release(slow_drag());
        assert!(!c.resume(ticket));
        c.pointer_leave();
        assert!(c.is_auto_playing());
    }

    #[test]
    fn test_leave_keeps_running_cooldown() {
        let mut c = five();
        c.pointer_enter();
        let ticket = c.next();
        c.pointer_leave();
        assert!(!c.is_auto_playing());
        assert!(c.resume(ticket));
    }

    #[test]
    fn test_drag_tracker_velocity() {
        let mut tracker = DragTracker::begin(100.0, 1_000.0);
        tracker.move_to(200.0, 1_250.0);
        tracker.move_to(300.0, 1_500.0);
        assert_eq!(tracker.offset(), 200.0);
        let swipe = tracker.release(300.0, 1_500.0);
        assert_eq!(swipe.offset, 200.0);
        assert_eq!(swipe.velocity, 400.0);
        assert_eq!(swipe.intent(), Some(Direction::Forward));

        let instant = DragTracker::begin(0.0, 10.0).release(0.0, 10.0);
        assert_eq!(instant.velocity, 0.0);
        assert_eq!(instant.intent(), None);
    }

    #[test]
    fn test_drag_that_came_to_rest_does_not_navigate() {
        let mut c = five();
        let mut tracker = DragTracker::begin(0.0, 0.0);
        tracker.move_to(75.0, 500.0);
        tracker.move_to(150.0, 1_000.0);
        c.drag_start();
        // pointer held still for a second before letting go
        let swipe = tracker.release(150.0, 2_000.0);
        assert_eq!(swipe.offset, 150.0);
        assert_eq!(swipe.velocity, 0.0);

        let ticket = c.drag_release(swipe);
        assert_eq!(c.index(), 0);
        assert_eq!(ticket.after(), DRAG_COOLDOWN);
    }

    #[test]
    fn test_release_without_moves_uses_whole_gesture() {
        let swipe = DragTracker::begin(0.0, 0.0).release(150.0, 2_000.0);
        assert_eq!(swipe.velocity, 75.0);
        assert_eq!(swipe.intent(), Some(Direction::Forward));
    }

    #[test]
    fn test_fast_flick_navigates_backward() {
        let mut c = five();
        let mut tracker = DragTracker::begin(400.0, 0.0);
        tracker.move_to(360.0, 16.0);
        tracker.move_to(300.0, 32.0);
        c.drag_start();
        // pointerup lands on the last move's position a few ms later
        let swipe = tracker.release(300.0, 34.0);
        assert_eq!(swipe.offset, -100.0);
        assert!(swipe.velocity < 0.0);
        c.drag_release(swipe);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn test_cooldown_durations() {
        assert_eq!(AUTOPLAY_INTERVAL, Duration::from_secs(5));
        assert_eq!(MANUAL_COOLDOWN, Duration::from_secs(10));
        assert_eq!(DRAG_COOLDOWN, Duration::from_secs(5));
        assert_eq!(SWIPE_THRESHOLD, 10_000.0);
    }

    #[test]
    fn test_at_offset_wraps() {
        let c = five();
        assert_eq!(*c.at_offset(-1), 14);
        assert_eq!(*c.at_offset(6), 11);
        assert_eq!(c.items().len(), 5);
    }
}
