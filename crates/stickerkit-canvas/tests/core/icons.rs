use std::cell::Cell;
use std::rc::Rc;

use stickerkit_canvas::{
    ActionMode, GestureController, IconEventHandler, IconGravity, IconHandle, PointerEvent,
    StickerEvent,
};
use stickerkit_core::Point;
use stickerkit_settings::StickerViewConfig;

use crate::support::{add_square, controller, EPS};

#[test]
fn test_layout_pins_icons_to_corners() {
    let (mut controller, _log) = controller(StickerViewConfig::editing());
    add_square(&mut controller);
    controller.layout();

    let positions: Vec<(IconGravity, Point)> = controller
        .icons()
        .iter()
        .map(|icon| (icon.gravity(), icon.position()))
        .collect();
    for (gravity, position) in positions {
        let expected = match gravity {
            IconGravity::LeftTop => Point::new(250.0, 250.0),
            IconGravity::RightTop => Point::new(750.0, 250.0),
            IconGravity::LeftBottom => Point::new(250.0, 750.0),
            IconGravity::RightBottom => Point::new(750.0, 750.0),
        };
        assert!((position.x - expected.x).abs() < EPS, "{:?}", gravity);
        assert!((position.y - expected.y).abs() < EPS, "{:?}", gravity);
    }
}

#[test]
fn test_layout_turns_icons_with_sticker() {
    let (mut controller, _log) = controller(StickerViewConfig::editing());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(450.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::pointer_down(
        Point::new(450.0, 500.0),
        Point::new(550.0, 500.0),
        5,
    ));
    // Quarter turn at constant distance.
    controller.on_pointer_event(&PointerEvent::two_finger_move(
        Point::new(500.0, 450.0),
        Point::new(500.0, 550.0),
        10,
    ));
    controller.layout();

    let angle = controller.sticker(id).unwrap().current_angle();
    for icon in controller.icons() {
        let turned = icon.transform().rotation_degrees();
        assert!((turned - angle).abs() < 1e-3, "{} vs {}", turned, angle);
    }
}

#[test]
fn test_delete_icon_removes_active_sticker() {
    let (mut controller, log) = controller(StickerViewConfig::editing());
    let id = add_square(&mut controller);

    assert!(controller.on_pointer_event(&PointerEvent::down(250.0, 250.0, 0)));
    assert_eq!(controller.action_mode(), ActionMode::Icon);
    assert_eq!(
        controller.current_icon().map(IconHandle::gravity),
        Some(IconGravity::LeftTop)
    );
    // The delete icon acts on release only.
    assert_eq!(controller.sticker_count(), 1);

    controller.on_pointer_event(&PointerEvent::up(250.0, 250.0, 20));
    assert_eq!(controller.sticker_count(), 0);
    assert_eq!(controller.current_sticker_id(), None);
    assert_eq!(controller.action_mode(), ActionMode::None);
    assert_eq!(log.count(|e| *e == StickerEvent::Deleted(id)), 1);
}

#[test]
fn test_flip_icon_flips_horizontally() {
    let (mut controller, log) = controller(StickerViewConfig::editing());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(750.0, 250.0, 0));
    controller.on_pointer_event(&PointerEvent::up(750.0, 250.0, 20));

    let sticker = controller.sticker(id).unwrap();
    assert!(sticker.is_flipped_horizontally());
    assert!(!sticker.is_flipped_vertically());
    assert_eq!(log.count(|e| *e == StickerEvent::Flipped(id)), 1);
}

#[test]
fn test_zoom_icon_scales_about_center() {
    let (mut controller, log) = controller(StickerViewConfig::editing());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(750.0, 750.0, 0));
    assert_eq!(controller.action_mode(), ActionMode::Icon);

    // Twice as far from the center, same direction.
    controller.on_pointer_event(&PointerEvent::move_to(1000.0, 1000.0, 10));
    let sticker = controller.sticker(id).unwrap();
    assert!((sticker.current_scale() - 10.0).abs() < EPS);
    let center = sticker.mapped_center_point();
    assert!((center.x - 500.0).abs() < EPS && (center.y - 500.0).abs() < EPS);

    controller.on_pointer_event(&PointerEvent::up(1000.0, 1000.0, 20));
    assert_eq!(log.count(|e| *e == StickerEvent::ZoomFinished(id)), 1);
    assert_eq!(controller.sticker_count(), 1);
}

#[test]
fn test_icons_ignored_when_hidden() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(250.0, 250.0, 0));
    assert_eq!(controller.action_mode(), ActionMode::Drag);
    controller.on_pointer_event(&PointerEvent::up(250.0, 250.0, 10));
    assert_eq!(controller.sticker_count(), 1);
}

#[test]
fn test_icons_ignored_without_active_sticker() {
    let (mut controller, _log) = controller(StickerViewConfig::editing());
    let id = add_square(&mut controller);
    controller.layout();
    controller.remove_sticker(id);

    assert!(!controller.on_pointer_event(&PointerEvent::down(250.0, 250.0, 0)));
    assert_eq!(controller.action_mode(), ActionMode::None);
}

#[derive(Debug)]
struct CountingHandler {
    ups: Rc<Cell<u32>>,
}

impl IconEventHandler for CountingHandler {
    fn on_pointer_up(&self, _controller: &mut GestureController, _event: &PointerEvent) {
        self.ups.set(self.ups.get() + 1);
    }
}

#[test]
fn test_overlapping_icons_first_in_list_wins() {
    let (mut controller, _log) = controller(StickerViewConfig::editing());
    add_square(&mut controller);

    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    controller.update_icons(vec![
        IconHandle::new(IconGravity::RightTop, 25.0).with_handler(CountingHandler {
            ups: first.clone(),
        }),
        IconHandle::new(IconGravity::RightTop, 25.0).with_handler(CountingHandler {
            ups: second.clone(),
        }),
    ]);

    controller.on_pointer_event(&PointerEvent::down(750.0, 250.0, 0));
    controller.on_pointer_event(&PointerEvent::up(750.0, 250.0, 10));

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
    assert_eq!(controller.sticker_count(), 1);
}

#[test]
fn test_icon_without_handler_is_inert() {
    let (mut controller, log) = controller(StickerViewConfig::editing());
    add_square(&mut controller);
    controller.update_icons(vec![IconHandle::new(IconGravity::LeftBottom, 25.0)]);
    log.clear();

    assert!(controller.on_pointer_event(&PointerEvent::down(250.0, 750.0, 0)));
    controller.on_pointer_event(&PointerEvent::move_to(260.0, 760.0, 5));
    controller.on_pointer_event(&PointerEvent::up(260.0, 760.0, 10));

    assert_eq!(controller.sticker_count(), 1);
    assert!(log.is_empty());
}

#[test]
fn test_would_claim_follows_dragged_sticker_icons() {
    let (mut controller, _log) = controller(StickerViewConfig::editing());
    add_square(&mut controller);

    // Lays the icons out at 250..750, then moves the sticker to 450..950.
    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::move_to(700.0, 700.0, 10));
    controller.on_pointer_event(&PointerEvent::up(700.0, 700.0, 20));

    let stale = Point::new(250.0, 250.0);
    let fresh = Point::new(440.0, 440.0);
    assert!(!controller.would_claim(stale));
    assert!(controller.would_claim(fresh));

    assert!(!controller.on_pointer_event(&PointerEvent::down(stale.x, stale.y, 1000)));
    assert!(controller.on_pointer_event(&PointerEvent::down(fresh.x, fresh.y, 2000)));
    assert_eq!(controller.action_mode(), ActionMode::Icon);
}
