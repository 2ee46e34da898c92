//! Slate module - the pieces currently on offer
//!
//! A slate holds `SLATE_SIZE` slots. Placing a piece empties its slot; when every
//! slot is empty the owner deals a fresh slate. Dealing avoids repeating a shape
//! within one slate, giving up after `DEAL_ATTEMPTS` redraws for a slot.

use arrayvec::ArrayVec;
use tracing::debug;

use blockfit_core::pieces::{pick, random_color};
use blockfit_core::{shapes_for, Shape, SimpleRng};
use blockfit_types::{Difficulty, Rgb, DEAL_ATTEMPTS, SLATE_SIZE};

/// One offered piece: a catalog shape plus the colour it was dealt with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlatePiece {
    pub shape: &'static Shape,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slate {
    slots: [Option<SlatePiece>; SLATE_SIZE],
}

impl Slate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [Option<SlatePiece>; SLATE_SIZE]) -> Self {
        Self { slots }
    }

    /// Deal a fresh slate from the tier's pool
    pub fn deal(difficulty: Difficulty, rng: &mut SimpleRng) -> Self {
        let pool = shapes_for(difficulty);
        let mut dealt: ArrayVec<&'static Shape, SLATE_SIZE> = ArrayVec::new();
        let mut slots = [None; SLATE_SIZE];

        for slot in slots.iter_mut() {
            let mut shape = pick(pool, rng);
            let mut attempts = 1;
            while dealt.iter().any(|s| s.name == shape.name) && attempts < DEAL_ATTEMPTS {
                shape = pick(pool, rng);
                attempts += 1;
            }
            dealt.push(shape);
            *slot = Some(SlatePiece {
                shape,
                color: random_color(rng),
            });
        }

        debug!(
            difficulty = difficulty.as_str(),
            pieces = ?dealt.iter().map(|s| s.name).collect::<ArrayVec<&str, SLATE_SIZE>>(),
            "slate dealt"
        );
        Self { slots }
    }

    pub fn get(&self, slot: usize) -> Option<&SlatePiece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remove the piece in `slot`
    pub fn take(&mut self, slot: usize) -> Option<SlatePiece> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn slots(&self) -> &[Option<SlatePiece>; SLATE_SIZE] {
        &self.slots
    }

    /// Pieces not yet placed, in slot order
    pub fn remaining(&self) -> impl Iterator<Item = &SlatePiece> {
        self.slots.iter().flatten()
    }

    pub fn remaining_shapes(&self) -> impl Iterator<Item = &'static Shape> + '_ {
        self.remaining().map(|piece| piece.shape)
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    /// True once every slot has been used
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.slots = [None; SLATE_SIZE];
    }
}
