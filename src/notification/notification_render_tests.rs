//! Tests for notification_render

use super::*;
use crate::notification::{Broadcaster, NotificationCategory};
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_to_string(items: &[Notification], width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| render_toasts(f, items)).unwrap();
    terminal.backend().to_string()
}

fn rows(output: &str) -> Vec<&str> {
    output.lines().map(|l| l.trim_matches('"')).collect()
}

#[test]
fn test_no_items_renders_nothing() {
    let output = render_to_string(&[], 40, 10);
    assert!(rows(&output).iter().all(|l| l.trim().is_empty()));
}

#[test]
fn snapshot_single_toast_in_top_right() {
    let broadcaster = Broadcaster::new();
    broadcaster.success("Saved");

    let output = render_to_string(&broadcaster.snapshot(), 30, 8);
    assert_snapshot!(output, @r#"
    "                              "
    "                              "
    "                   ┌───────┐  "
    "                   │ Saved │  "
    "                   └───────┘  "
    "                              "
    "                              "
    "                              "
    "#);
}

#[test]
fn snapshot_newest_toast_on_top() {
    let broadcaster = Broadcaster::new();
    broadcaster.publish("Upload ok", NotificationCategory::Success);
    broadcaster.publish("Query failed", NotificationCategory::Error);

    let output = render_to_string(&broadcaster.snapshot(), 40, 10);
    assert_snapshot!(output, @r#"
    "                                        "
    "                                        "
    "                      ┌──────────────┐  "
    "                      │ Query failed │  "
    "                      └──────────────┘  "
    "                         ┌───────────┐  "
    "                         │ Upload ok │  "
    "                         └───────────┘  "
    "                                        "
    "                                        "
    "#);
}

#[test]
fn test_toasts_past_bottom_are_skipped() {
    let broadcaster = Broadcaster::new();
    for i in 0..5 {
        broadcaster.success(format!("toast {}", i));
    }

    // Height 10: margin 2 leaves room for two 3-row banners
    let output = render_to_string(&broadcaster.snapshot(), 40, 10);
    let shown = rows(&output)
        .iter().filter(|l| l.contains("toast")).count();
    assert_eq!(shown, 2);
}

#[test]
fn test_category_colors_applied() {
    let broadcaster = Broadcaster::new();
    broadcaster.error("Boom");

    let mut terminal = create_test_terminal(30, 8);
    let items = broadcaster.snapshot();
    terminal.draw(|f| render_toasts(f, &items)).unwrap();

    let buffer = terminal.backend().buffer();
    let row = 3;
    let x = (0..30)
        .find(|&x| buffer[(x, row)].symbol() == "B")
        .unwrap();
    assert_eq!(
        buffer[(x, row)].bg,
        NotificationCategory::Error.colors().bg
    );
}

#[test]
fn test_tiny_frame_renders_nothing() {
    let broadcaster = Broadcaster::new();
    broadcaster.success("Too small");

    let output = render_to_string(&broadcaster.snapshot(), 6, 10);
    assert!(!output.contains("Too"));
}

#[test]
fn test_long_message_is_clipped_to_max_width() {
    let broadcaster = Broadcaster::new();
    broadcaster.success("x".repeat(200));

    let output = render_to_string(&broadcaster.snapshot(), 120, 10);
    let width = rows(&output)[2].trim().chars().count();
    assert_eq!(width, MAX_TOAST_WIDTH as usize);
}

#[test]
fn test_message_longer_than_u16_range_is_clipped() {
    let broadcaster = Broadcaster::new();
    // Lengths just below a multiple of 65536 wrap when narrowed to u16
    broadcaster.error("x".repeat(65533));
    broadcaster.error("y".repeat(u16::MAX as usize + 70_000));

    let output = render_to_string(&broadcaster.snapshot(), 80, 10);
    let rows = rows(&output);
    assert_eq!(rows[2].trim().chars().count(), MAX_TOAST_WIDTH as usize);
    assert_eq!(rows[5].trim().chars().count(), MAX_TOAST_WIDTH as usize);
}

#[test]
fn test_toast_area_saturates_on_huge_message() {
    let frame = Rect::new(0, 0, 80, 10);
    let message = "z".repeat(65535);

    let area = toast_area(frame, &message, 76, 2).unwrap();
    assert_eq!(area.width, MAX_TOAST_WIDTH);
    assert_eq!(area.x, 80 - MAX_TOAST_WIDTH - MARGIN);
}
