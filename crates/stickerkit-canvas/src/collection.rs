//! Z-ordered storage for the stickers on a surface.

use stickerkit_core::Point;

use crate::sticker::{Sticker, StickerId};

/// Ordered, duplicate-free set of stickers.
///
/// Index order is paint order: the last sticker is drawn last and therefore
/// sits on top. The collection is the sole owner of its stickers; everything
/// else refers to them by [`StickerId`].
///
/// Layer operations with an out-of-range index are no-ops and report `false`.
#[derive(Debug, Default)]
pub struct StickerCollection {
    stickers: Vec<Sticker>,
}

impl StickerCollection {
    pub fn new() -> Self {
        Self {
            stickers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    pub fn contains(&self, id: StickerId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: StickerId) -> Option<usize> {
        self.stickers.iter().position(|s| s.id() == id)
    }

    pub fn get(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: StickerId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| s.id() == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Sticker> {
        self.stickers.get(index)
    }

    /// Stickers in paint order, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sticker> {
        self.stickers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sticker> {
        self.stickers.iter_mut()
    }

    pub fn ids(&self) -> Vec<StickerId> {
        self.stickers.iter().map(Sticker::id).collect()
    }

    /// Appends on top. Hands the sticker back if its id is already present.
    pub fn push(&mut self, sticker: Sticker) -> Result<(), Sticker> {
        if self.contains(sticker.id()) {
            return Err(sticker);
        }
        self.stickers.push(sticker);
        Ok(())
    }

    pub fn remove(&mut self, id: StickerId) -> Option<Sticker> {
        let index = self.index_of(id)?;
        Some(self.stickers.remove(index))
    }

    /// Empties the collection, handing back the stickers in paint order.
    pub fn clear(&mut self) -> Vec<Sticker> {
        std::mem::take(&mut self.stickers)
    }

    /// Moves a sticker to the top of the z-order.
    pub fn bring_to_front(&mut self, id: StickerId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let sticker = self.stickers.remove(index);
        self.stickers.push(sticker);
        true
    }

    /// Puts `replacement` in the slot of `id` and returns the displaced
    /// sticker. Nothing changes if `id` is absent or `replacement` is
    /// already a member.
    pub fn replace(&mut self, id: StickerId, replacement: Sticker) -> Result<Sticker, Sticker> {
        if self.contains(replacement.id()) {
            return Err(replacement);
        }
        match self.index_of(id) {
            Some(index) => Ok(std::mem::replace(&mut self.stickers[index], replacement)),
            None => Err(replacement),
        }
    }

    /// Swaps the stickers at two layers.
    pub fn swap(&mut self, first: usize, second: usize) -> bool {
        if first >= self.len() || second >= self.len() {
            return false;
        }
        self.stickers.swap(first, second);
        true
    }

    /// Moves the sticker at layer `from` to layer `to`, shifting the ones
    /// in between.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.len() || to >= self.len() {
            return false;
        }
        let sticker = self.stickers.remove(from);
        self.stickers.insert(to, sticker);
        true
    }

    /// Topmost sticker whose area contains `point`.
    pub fn topmost_at(&self, point: Point) -> Option<StickerId> {
        self.stickers
            .iter()
            .rev()
            .find(|s| s.contains(point))
            .map(Sticker::id)
    }
}
