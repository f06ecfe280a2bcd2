//! E2E tests for closing the last tab with the welcome plugin installed

use crate::common::harness::{layout, WelcomeTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};
use fresh_welcome::host::LoopControl;
use fresh_welcome::plugin::HookStatus;

/// Without the plugin, closing the last tab ends the session
#[test]
fn test_close_last_tab_without_plugin_exits() {
    let mut harness = WelcomeTestHarness::with_welcome(40, 10, &["Welcome"]);
    harness.open_file("notes.txt", "some notes");

    assert_eq!(harness.close_tab(), LoopControl::Exit);
    assert_eq!(harness.tabs.open_tab_count(), 0);
}

/// Closing the only tab lands on the welcome document and keeps running
#[test]
fn test_close_last_tab_opens_welcome() {
    let mut harness = WelcomeTestHarness::with_welcome(40, 10, &["Hello there", "Press Ctrl+Q"]);
    harness.open_file("notes.txt", "some notes");
    let registration = harness.register();
    assert_eq!(registration.close_tab, HookStatus::Installed);

    assert_eq!(harness.close_tab(), LoopControl::Continue);
    assert_eq!(harness.tabs.open_tab_count(), 1);
    assert_eq!(harness.active_path().as_deref(), Some(harness.welcome_path()));
    assert_eq!(harness.plugin.recovery_stats().opened, 1);

    harness.render();
    assert!(harness
        .screen_row(layout::TAB_BAR_ROW)
        .starts_with(" Welcome.wlcm "));
    harness.assert_screen_contains("Hello there");
}

/// Closing a tab while others remain passes the original result through
#[test]
fn test_close_with_remaining_tabs_is_unchanged() {
    let mut harness = WelcomeTestHarness::with_welcome(40, 10, &["Welcome"]);
    let first = harness.open_file("a.txt", "a");
    harness.open_file("b.txt", "b");
    harness.register();

    assert_eq!(harness.close_tab(), LoopControl::Continue);
    assert_eq!(harness.active_path(), Some(first));
    assert_eq!(harness.plugin.recovery_stats().attempts(), 0);
}

/// Closing the welcome tab itself reopens it: the session never ends via Ctrl+W
#[test]
fn test_closing_welcome_reopens_it() {
    let mut harness = WelcomeTestHarness::with_welcome(40, 10, &["Welcome"]);
    harness.open_file("notes.txt", "n");
    harness.register();

    for _ in 0..3 {
        let control = harness.send_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(harness.tabs.open_tab_count(), 1);
    }
    assert_eq!(harness.plugin.recovery_stats().opened, 3);

    // Quitting explicitly still works
    let control = harness.send_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(control, LoopControl::Exit);
}

/// A missing welcome document leaves zero tabs but does not end the loop
#[test]
fn test_missing_welcome_document_leaves_empty_session() {
    let mut harness = WelcomeTestHarness::without_welcome_file(40, 6);
    harness.open_file("notes.txt", "n");
    harness.register();

    assert_eq!(harness.close_tab(), LoopControl::Continue);
    assert_eq!(harness.tabs.open_tab_count(), 0);
    assert_eq!(harness.plugin.recovery_stats().missing, 1);

    harness.render();
    for row in layout::CONTENT_START_ROW..6 {
        assert_eq!(harness.screen_row(row).trim(), "");
    }
}

/// Registering twice does not stack a second sentinel
#[test]
fn test_double_registration_opens_welcome_once() {
    let mut harness = WelcomeTestHarness::with_welcome(40, 10, &["Welcome"]);
    harness.open_file("notes.txt", "n");
    harness.register();
    let again = harness.register();
    assert_eq!(again.close_tab, HookStatus::AlreadyInstalled);
    assert_eq!(again.draw_pane, HookStatus::AlreadyInstalled);

    harness.close_tab();

    assert_eq!(harness.tabs.open_tab_count(), 1);
    assert_eq!(harness.plugin.recovery_stats().attempts(), 1);
}
