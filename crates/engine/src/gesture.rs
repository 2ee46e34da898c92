//! Gesture module - turns discrete drag messages into session calls
//!
//! Input layers report a drag as `Begin`, any number of `Update`s, then `End` or
//! `Cancel`. Updates only ever query the session; the grid changes on `End` alone.

use blockfit_types::Anchor;

use crate::error::PlaceError;
use crate::session::{GameSession, PlacementOutcome, Preview, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// Pointer picked up the piece in `slot`
    Begin { slot: usize },
    /// Pointer now hovers over `anchor`
    Update { anchor: Anchor },
    /// Pointer released over `anchor`
    End { anchor: Anchor },
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Event had no effect (no drag in progress, empty slot, game not running)
    Ignored,
    Picked { slot: usize },
    Preview(Preview),
    Placed(Box<PlacementOutcome>),
    /// Drop was refused; the piece goes back to its slot
    Returned { slot: usize, reason: PlaceError },
    Cancelled { slot: usize },
}

/// Tracks the one drag that may be in flight
#[derive(Debug, Clone, Default)]
pub struct GestureHandler {
    dragging: Option<usize>,
}

impl GestureHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot currently being dragged
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn handle(&mut self, session: &mut GameSession, event: DragEvent) -> GestureOutcome {
        match event {
            DragEvent::Begin { slot } => {
                let playing = session.state() == SessionState::Playing;
                if !playing || session.slate().get(slot).is_none() {
                    return GestureOutcome::Ignored;
                }
                self.dragging = Some(slot);
                GestureOutcome::Picked { slot }
            }
            DragEvent::Update { anchor } => self
                .dragging
                .and_then(|slot| session.preview(slot, anchor))
                .map_or(GestureOutcome::Ignored, GestureOutcome::Preview),
            DragEvent::End { anchor } => {
                let Some(slot) = self.dragging.take() else {
                    return GestureOutcome::Ignored;
                };
                match session.place(slot, anchor) {
                    Ok(outcome) => GestureOutcome::Placed(Box::new(outcome)),
                    Err(reason) => GestureOutcome::Returned { slot, reason },
                }
            }
            DragEvent::Cancel => match self.dragging.take() {
                Some(slot) => GestureOutcome::Cancelled { slot },
                None => GestureOutcome::Ignored,
            },
        }
    }
}
