use stickerkit_canvas::{ActionMode, Anchor, BlankContent, PointerEvent, Sticker, StickerEvent};
use stickerkit_core::Point;
use stickerkit_settings::StickerViewConfig;

use crate::support::{add_square, controller, normalize_degrees, EPS, SURFACE};

#[test]
fn test_two_finger_scale_and_rotate() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);
    let baseline_scale = controller.sticker(id).unwrap().current_scale();
    let baseline_angle = controller.sticker(id).unwrap().current_angle();

    assert!(controller.on_pointer_event(&PointerEvent::down(450.0, 500.0, 0)));
    assert_eq!(controller.action_mode(), ActionMode::Drag);

    // Fingers 100 apart on a horizontal line.
    let first = Point::new(450.0, 500.0);
    let second = Point::new(550.0, 500.0);
    assert!(controller.on_pointer_event(&PointerEvent::pointer_down(first, second, 10)));
    assert_eq!(controller.action_mode(), ActionMode::ZoomWithTwoFinger);

    // Fingers 200 apart on a vertical line: a quarter turn.
    let first = Point::new(500.0, 400.0);
    let second = Point::new(500.0, 600.0);
    controller.on_pointer_event(&PointerEvent::two_finger_move(first, second, 20));

    let sticker = controller.sticker(id).unwrap();
    assert!((sticker.current_scale() / baseline_scale - 2.0).abs() < EPS);
    let turned = normalize_degrees(sticker.current_angle() - baseline_angle);
    assert!((turned.abs() - 90.0).abs() < EPS, "turned {}", turned);

    // The pivot was the midpoint of the fingers, which is the sticker center.
    let center = sticker.mapped_center_point();
    assert!((center.x - 500.0).abs() < EPS && (center.y - 500.0).abs() < EPS);

    controller.on_pointer_event(&PointerEvent::pointer_up(first, second, 30));
    assert_eq!(controller.action_mode(), ActionMode::None);
    assert_eq!(
        log.count(|e| matches!(e, StickerEvent::ZoomFinished(_))),
        1
    );
    controller.on_pointer_event(&PointerEvent::up(500.0, 400.0, 40));
}

#[test]
fn test_two_finger_starts_from_dragged_position() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::move_to(540.0, 500.0, 5));
    let dragged = *controller.sticker(id).unwrap().transform();

    let first = Point::new(540.0, 500.0);
    let second = Point::new(640.0, 500.0);
    controller.on_pointer_event(&PointerEvent::pointer_down(first, second, 10));
    controller.on_pointer_event(&PointerEvent::two_finger_move(first, second, 20));

    // Same finger positions as at the start: nothing moves.
    assert!(controller
        .sticker(id)
        .unwrap()
        .transform()
        .approx_eq(&dragged, EPS));
}

#[test]
fn test_pinch_resumes_after_second_finger_lifts() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    let first = Point::new(450.0, 500.0);
    let second = Point::new(550.0, 500.0);
    controller.on_pointer_event(&PointerEvent::down(450.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::pointer_down(first, second, 10));
    controller.on_pointer_event(&PointerEvent::pointer_up(first, second, 20));
    assert_eq!(controller.action_mode(), ActionMode::None);
    let before = controller.sticker(id).unwrap().current_scale();

    // Same gesture, second finger goes down again.
    assert!(controller.on_pointer_event(&PointerEvent::pointer_down(first, second, 30)));
    assert_eq!(controller.action_mode(), ActionMode::ZoomWithTwoFinger);
    controller.on_pointer_event(&PointerEvent::two_finger_move(
        Point::new(400.0, 500.0),
        Point::new(600.0, 500.0),
        40,
    ));

    let after = controller.sticker(id).unwrap().current_scale();
    assert!((after / before - 2.0).abs() < EPS, "{} -> {}", before, after);
    controller.on_pointer_event(&PointerEvent::pointer_up(first, second, 50));
    assert_eq!(
        log.count(|e| matches!(e, StickerEvent::ZoomFinished(_))),
        2
    );
}

#[test]
fn test_second_pointer_outside_sticker_keeps_drag() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::pointer_down(
        Point::new(500.0, 500.0),
        Point::new(900.0, 900.0),
        10,
    ));
    assert_eq!(controller.action_mode(), ActionMode::Drag);
}

#[test]
fn test_repeat_tap_within_click_delay_fires_drag_finished_once() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::up(501.0, 501.0, 50));
    assert_eq!(log.count(|e| matches!(e, StickerEvent::DragFinished(_))), 0);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 100));
    controller.on_pointer_event(&PointerEvent::up(502.0, 499.0, 150));

    assert_eq!(log.count(|e| matches!(e, StickerEvent::DragFinished(_))), 1);
    assert_eq!(controller.action_mode(), ActionMode::None);
}

#[test]
fn test_slow_repeat_tap_fires_nothing_extra() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::up(500.0, 500.0, 50));
    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 1000));
    controller.on_pointer_event(&PointerEvent::up(500.0, 500.0, 1050));

    assert_eq!(log.count(|e| matches!(e, StickerEvent::DragFinished(_))), 0);
    assert_eq!(log.count(|e| matches!(e, StickerEvent::Clicked(_))), 2);
}

#[test]
fn test_drag_beyond_slop_is_not_a_click() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::up(500.0, 500.0, 10));

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 20));
    controller.on_pointer_event(&PointerEvent::move_to(560.0, 530.0, 30));
    controller.on_pointer_event(&PointerEvent::up(560.0, 530.0, 40));

    assert_eq!(log.count(|e| matches!(e, StickerEvent::DragFinished(_))), 0);
    let center = controller.sticker(id).unwrap().mapped_center_point();
    assert!((center.x - 560.0).abs() < EPS);
    assert!((center.y - 530.0).abs() < EPS);
}

#[test]
fn test_drag_is_relative_to_baseline() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(300.0, 300.0, 0));
    controller.on_pointer_event(&PointerEvent::move_to(310.0, 300.0, 5));
    controller.on_pointer_event(&PointerEvent::move_to(320.0, 290.0, 10));

    let center = controller.sticker(id).unwrap().mapped_center_point();
    assert!((center.x - 520.0).abs() < EPS);
    assert!((center.y - 490.0).abs() < EPS);
}

#[test]
fn test_constrained_drag_keeps_center_inside() {
    let config = StickerViewConfig {
        constrained: true,
        ..StickerViewConfig::default()
    };
    let (mut controller, _log) = controller(config);
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::move_to(2000.0, -300.0, 10));

    let sticker = controller.sticker(id).unwrap();
    let center = sticker.mapped_center_point();
    assert!((center.x - SURFACE).abs() < EPS);
    assert!(center.y.abs() < EPS);
    assert!((sticker.current_scale() - 5.0).abs() < EPS);
}

#[test]
fn test_unconstrained_drag_can_leave_surface() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    controller.on_pointer_event(&PointerEvent::move_to(2000.0, 500.0, 10));

    let center = controller.sticker(id).unwrap().mapped_center_point();
    assert!((center.x - 2000.0).abs() < EPS);
}

#[test]
fn test_down_on_empty_area_is_not_claimed() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);
    log.clear();

    assert!(!controller.on_pointer_event(&PointerEvent::down(50.0, 50.0, 0)));
    assert!(!controller.on_pointer_event(&PointerEvent::move_to(500.0, 500.0, 10)));
    assert!(!controller.on_pointer_event(&PointerEvent::up(500.0, 500.0, 20)));

    assert_eq!(controller.action_mode(), ActionMode::None);
    assert_eq!(controller.current_sticker_id(), Some(id));
    assert!(log.is_empty());
    let center = controller.sticker(id).unwrap().mapped_center_point();
    assert!((center.x - 500.0).abs() < EPS);
}

#[test]
fn test_locked_controller_claims_nothing() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    add_square(&mut controller);
    controller.update_locked(true);
    log.clear();

    assert!(!controller.would_claim(Point::new(500.0, 500.0)));
    assert!(!controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0)));
    assert_eq!(controller.action_mode(), ActionMode::None);
    assert!(log.is_empty());
}

#[test]
fn test_topmost_sticker_wins() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    let bottom = add_square(&mut controller);
    let top = add_square(&mut controller);
    log.clear();

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    assert_eq!(controller.current_sticker_id(), Some(top));
    assert_eq!(log.events(), vec![StickerEvent::Clicked(top)]);
    assert_ne!(top, bottom);
}

#[test]
fn test_bring_to_front_on_touch() {
    let config = StickerViewConfig {
        bring_to_front_on_touch: true,
        ..StickerViewConfig::default()
    };
    let (mut controller, _log) = controller(config);
    let first = add_square(&mut controller);
    // A 500x50 strip across the middle of the square.
    let second = controller.add_sticker(Sticker::new(BlankContent::new(10, 1)), Anchor::Center);

    controller.on_pointer_event(&PointerEvent::down(260.0, 260.0, 0));
    assert_eq!(controller.current_sticker_id(), Some(first));
    assert_eq!(controller.stickers().ids(), vec![second, first]);
}

#[test]
fn test_cancel_clears_gesture_keeps_active() {
    let (mut controller, _log) = controller(StickerViewConfig::default());
    let id = add_square(&mut controller);

    controller.on_pointer_event(&PointerEvent::down(500.0, 500.0, 0));
    assert!(controller.on_pointer_event(&PointerEvent::cancel(5)));
    assert_eq!(controller.action_mode(), ActionMode::None);
    assert_eq!(controller.current_sticker_id(), Some(id));
    assert!(controller.current_icon().is_none());

    // Moves after a cancel go nowhere.
    assert!(!controller.on_pointer_event(&PointerEvent::move_to(600.0, 600.0, 10)));
}

#[test]
fn test_would_claim_has_no_side_effects() {
    let (mut controller, log) = controller(StickerViewConfig::default());
    add_square(&mut controller);
    log.clear();

    assert!(controller.would_claim(Point::new(500.0, 500.0)));
    assert!(!controller.would_claim(Point::new(10.0, 10.0)));
    assert!(log.is_empty());
    assert_eq!(controller.action_mode(), ActionMode::None);
}
