//! Render callbacks for the paint pass.

use stickerkit_core::Point;
use stickerkit_settings::BorderStyle;

use crate::icon::IconHandle;
use crate::sticker::Sticker;

/// Paints what the controller lays out.
///
/// [`GestureController::paint`](crate::GestureController::paint) calls
/// `draw_sticker` for every sticker bottom to top, then the border and icons
/// of the active sticker when they are enabled.
pub trait StickerRenderer {
    /// Paint the sticker's content through its current transform.
    fn draw_sticker(&mut self, sticker: &Sticker);

    /// Outline the mapped quad, given in bound-point order (top-left,
    /// top-right, bottom-left, bottom-right).
    fn draw_border(&mut self, _quad: &[Point; 4], _style: &BorderStyle) {}

    /// Paint an icon at its laid-out position and transform.
    fn draw_icon(&mut self, _icon: &IconHandle, _style: &BorderStyle) {}
}
