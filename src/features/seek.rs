//! Pointer drag to fraction protocol
//!
//! Shared by the progress bar and the volume bar. An instance goes
//! `Idle -> Dragging -> Idle`: pressing enters `Dragging`, every move updates
//! the visual fraction, and releasing commits the final fraction. Only the
//! release is authoritative; the caller applies it to the media resource.

/// Which control a drag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekControl {
    /// Playback position
    Progress,
    /// Output volume
    Volume,
}

/// Horizontal extent of a draggable track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f32,
    pub width: f32,
}

impl TrackBounds {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Normalized position of `x` along the track, clamped to `[0, 1]`
    ///
    /// A zero-width (or degenerate) track yields 0.
    pub fn fraction_at(&self, x: f32) -> f32 {
        if !(self.width > 0.0) || !x.is_finite() {
            return 0.0;
        }
        ((x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// Pointer input forwarded from a drag bar widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed over the track
    Down { bounds: TrackBounds, x: f32 },
    /// Pointer moved anywhere while the button is held
    Move { x: f32 },
    /// Button released anywhere; `None` when the pointer left the window
    Up { x: Option<f32> },
}

/// Drag state of one control
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        bounds: TrackBounds,
        last_fraction: f32,
    },
}

/// Outcome of feeding a pointer event to a [`SeekProtocol`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Visual feedback only, nothing is committed yet
    Preview(f32),
    /// Drag finished, apply this fraction
    Commit(f32),
    /// Event did not apply to the current state
    Ignored,
}

/// Drag protocol for a single control
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekProtocol {
    state: DragState,
}

impl SeekProtocol {
    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Fraction shown while dragging, `None` when idle
    #[cfg(test)]
    pub fn drag_fraction(&self) -> Option<f32> {
        match self.state {
            DragState::Dragging { last_fraction, .. } => Some(last_fraction),
            DragState::Idle => None,
        }
    }

    /// Route a pointer event through the state machine
    pub fn handle(&mut self, event: PointerEvent) -> DragUpdate {
        match event {
            PointerEvent::Down { bounds, x } => DragUpdate::Preview(self.press(bounds, x)),
            PointerEvent::Move { x } => self.drag(x).map_or(DragUpdate::Ignored, DragUpdate::Preview),
            PointerEvent::Up { x } => self.release(x).map_or(DragUpdate::Ignored, DragUpdate::Commit),
        }
    }

    /// Enter `Dragging` and return the fraction under the pointer
    ///
    /// A second press while already dragging restarts the drag with the new bounds.
    pub fn press(&mut self, bounds: TrackBounds, x: f32) -> f32 {
        let fraction = bounds.fraction_at(x);
        self.state = DragState::Dragging {
            bounds,
            last_fraction: fraction,
        };
        fraction
    }

    /// Update the visual fraction; `None` when not dragging
    pub fn drag(&mut self, x: f32) -> Option<f32> {
        let DragState::Dragging {
            bounds,
            last_fraction,
        } = &mut self.state
        else {
            return None;
        };
        *last_fraction = bounds.fraction_at(x);
        Some(*last_fraction)
    }

    /// Leave `Dragging` and return the fraction to commit
    ///
    /// Without a release position the last dragged fraction is committed.
    pub fn release(&mut self, x: Option<f32>) -> Option<f32> {
        let DragState::Dragging {
            bounds,
            last_fraction,
        } = self.state
        else {
            return None;
        };
        self.state = DragState::Idle;
        Some(x.map_or(last_fraction, |x| bounds.fraction_at(x)))
    }

    /// Abort a drag without committing; returns whether a drag was active
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> TrackBounds {
        TrackBounds::new(100.0, 200.0)
    }

    #[test]
    fn test_fraction_clamps_outside_track() {
        assert_eq!(bar().fraction_at(20.0), 0.0);
        assert_eq!(bar().fraction_at(100.0), 0.0);
        assert_eq!(bar().fraction_at(200.0), 0.5);
        assert_eq!(bar().fraction_at(300.0), 1.0);
        assert_eq!(bar().fraction_at(1000.0), 1.0);
    }

    #[test]
    fn test_zero_width_track_is_fraction_zero() {
        let bounds = TrackBounds::new(50.0, 0.0);
        assert_eq!(bounds.fraction_at(10.0), 0.0);
        assert_eq!(bounds.fraction_at(60.0), 0.0);
        assert_eq!(TrackBounds::new(50.0, -4.0).fraction_at(60.0), 0.0);
        assert_eq!(bar().fraction_at(f32::NAN), 0.0);
    }

    #[test]
    fn test_press_drag_release_cycle() {
        let mut protocol = SeekProtocol::default();
        assert!(!protocol.is_dragging());

        assert_eq!(protocol.press(bar(), 150.0), 0.25);
        assert!(protocol.is_dragging());
        assert_eq!(protocol.drag_fraction(), Some(0.25));

        assert_eq!(protocol.drag(250.0), Some(0.75));
        assert_eq!(protocol.drag(-40.0), Some(0.0));
        assert_eq!(protocol.drag_fraction(), Some(0.0));

        assert_eq!(protocol.release(Some(500.0)), Some(1.0));
        assert!(!protocol.is_dragging());
        assert_eq!(protocol.state(), DragState::Idle);
    }

    #[test]
    fn test_move_and_release_ignored_when_idle() {
        let mut protocol = SeekProtocol::default();
        assert_eq!(protocol.drag(120.0), None);
        assert_eq!(protocol.release(Some(120.0)), None);
        assert_eq!(
            protocol.handle(PointerEvent::Move { x: 1.0 }),
            DragUpdate::Ignored
        );
        assert_eq!(
            protocol.handle(PointerEvent::Up { x: None }),
            DragUpdate::Ignored
        );
    }

    #[test]
    fn test_release_outside_window_commits_last_fraction() {
        let mut protocol = SeekProtocol::default();
        protocol.press(bar(), 120.0);
        protocol.drag(280.0);
        assert_eq!(protocol.release(None), Some(0.9));
        assert!(!protocol.is_dragging());
    }

    #[test]
    fn test_handle_maps_events_to_updates() {
        let mut protocol = SeekProtocol::default();
        assert_eq!(
            protocol.handle(PointerEvent::Down {
                bounds: bar(),
                x: 300.0
            }),
            DragUpdate::Preview(1.0)
        );
        assert_eq!(
            protocol.handle(PointerEvent::Move { x: 200.0 }),
            DragUpdate::Preview(0.5)
        );
        assert_eq!(
            protocol.handle(PointerEvent::Up { x: Some(100.0) }),
            DragUpdate::Commit(0.0)
        );
    }

    #[test]
    fn test_cancel_returns_to_idle_without_commit() {
        let mut protocol = SeekProtocol::default();
        assert!(!protocol.cancel());

        protocol.press(bar(), 200.0);
        assert!(protocol.cancel());
        assert!(!protocol.is_dragging());
        assert_eq!(protocol.release(Some(250.0)), None);
    }
}
