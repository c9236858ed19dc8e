//! Drag gesture state machine.
//!
//! The gesture is transient: it exists between drag-start and drop or
//! cancel, and it is never part of the board partition.
//!
//! ```text
//!            drag_start                    enter(stage)
//!   Idle ──────────────▶ Dragging ───────────────────────▶ Hovering
//!    ▲                     │  ▲                              │  │
//!    │   drop / cancel     │  └────────── leave ─────────────┘  │ enter(other)
//!    └─────────────────────┴──────────── drop / cancel ─────────┘ (retarget)
//! ```

use triage_models::Stage;

use crate::moves::MoveRequest;

/// Current state of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// Nothing is being dragged.
    #[default]
    Idle,
    /// A report is being dragged and the pointer is over no drop surface.
    Dragging {
        /// Stage the drag started in.
        source: Stage,
        /// Position of the dragged report when the drag started.
        index: usize,
    },
    /// A report is being dragged over a stage's drop surface.
    Hovering {
        /// Stage the drag started in.
        source: Stage,
        /// Position of the dragged report when the drag started.
        index: usize,
        /// Stage under the pointer.
        target: Stage,
    },
}

impl Gesture {
    /// Returns true if no drag is in flight.
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Origin of the drag in flight.
    pub fn source(&self) -> Option<(Stage, usize)> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { source, index } | Gesture::Hovering { source, index, .. } => {
                Some((source, index))
            }
        }
    }

    /// Stage currently under the pointer, for hover feedback.
    pub fn hover_target(&self) -> Option<Stage> {
        match *self {
            Gesture::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Starts dragging the report at `index` in `source`.
    ///
    /// A drag already in flight is abandoned.
    pub fn start(&mut self, source: Stage, index: usize) {
        *self = Gesture::Dragging { source, index };
    }

    /// Pointer entered a stage's drop surface. Ignored when idle.
    pub fn enter(&mut self, target: Stage) {
        if let Some((source, index)) = self.source() {
            *self = Gesture::Hovering {
                source,
                index,
                target,
            };
        }
    }

    /// Pointer left every drop surface. The drag itself continues.
    pub fn leave(&mut self) {
        if let Some((source, index)) = self.source() {
            *self = Gesture::Dragging { source, index };
        }
    }

    /// Ends the gesture with a drop on `target`, returning the move to apply.
    ///
    /// The gesture is always back to idle afterwards.
    pub fn drop_on(&mut self, target: Stage) -> Option<MoveRequest> {
        let request = self
            .source()
            .map(|(source, index)| MoveRequest::new(source, index, target));
        *self = Gesture::Idle;
        request
    }

    /// Abandons the gesture.
    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let gesture = Gesture::default();
        assert!(gesture.is_idle());
        assert_eq!(gesture.source(), None);
        assert_eq!(gesture.hover_target(), None);
    }

    #[test]
    fn test_start_then_hover() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::Pending, 2);
        assert_eq!(gesture, Gesture::Dragging { source: Stage::Pending, index: 2 });

        gesture.enter(Stage::InProgress);
        assert_eq!(gesture.hover_target(), Some(Stage::InProgress));
        assert_eq!(gesture.source(), Some((Stage::Pending, 2)));
    }

    #[test]
    fn test_enter_other_stage_retargets() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::InProgress, 0);
        gesture.enter(Stage::Pending);
        gesture.enter(Stage::Completed);

        assert_eq!(gesture.hover_target(), Some(Stage::Completed));
        assert_eq!(gesture.source(), Some((Stage::InProgress, 0)));
    }

    #[test]
    fn test_leave_clears_hover_keeps_drag() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::Pending, 1);
        gesture.enter(Stage::Completed);
        gesture.leave();

        assert_eq!(gesture, Gesture::Dragging { source: Stage::Pending, index: 1 });
    }

    #[test]
    fn test_enter_and_leave_ignored_when_idle() {
        let mut gesture = Gesture::default();
        gesture.enter(Stage::Completed);
        assert!(gesture.is_idle());
        gesture.leave();
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_drop_yields_request_and_resets() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::InProgress, 3);
        gesture.enter(Stage::Completed);

        let request = gesture.drop_on(Stage::Completed);

        assert_eq!(
            request,
            Some(MoveRequest::new(Stage::InProgress, 3, Stage::Completed))
        );
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_drop_while_idle_yields_nothing() {
        let mut gesture = Gesture::default();
        assert_eq!(gesture.drop_on(Stage::Pending), None);
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_cancel_resets() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::Pending, 0);
        gesture.enter(Stage::InProgress);
        gesture.cancel();
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_restart_replaces_source() {
        let mut gesture = Gesture::default();
        gesture.start(Stage::Pending, 0);
        gesture.enter(Stage::InProgress);
        gesture.start(Stage::Completed, 4);

        assert_eq!(gesture, Gesture::Dragging { source: Stage::Completed, index: 4 });
    }
}
