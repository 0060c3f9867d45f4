use std::cell::{Cell, RefCell};
use std::rc::Rc;

use layout_engine::prelude::*;

#[derive(Default)]
struct BrowserState {
    width: Cell<Option<f64>>,
    touch_actions: RefCell<Vec<TouchAction>>,
    scrolls_to_top: Cell<usize>,
}

/// Fake browser shared between the test and the controller
#[derive(Clone, Default)]
struct FakeBrowser(Rc<BrowserState>);

impl FakeBrowser {
    fn with_width(width: f64) -> Self {
        let browser = Self::default();
        browser.0.width.set(Some(width));
        browser
    }

    fn resize(&self, width: f64) {
        self.0.width.set(Some(width));
    }

    fn touch_actions(&self) -> Vec<TouchAction> {
        self.0.touch_actions.borrow().clone()
    }

    fn is_locked(&self) -> bool {
        self.0.touch_actions.borrow().last() == Some(&TouchAction::None)
    }
}

impl Document for FakeBrowser {
    fn viewport_width(&self) -> Option<f64> {
        self.0.width.get()
    }

    fn set_touch_action(&self, action: TouchAction) -> bool {
        self.0.touch_actions.borrow_mut().push(action);
        true
    }

    fn scroll_to_top(&self) {
        self.0.scrolls_to_top.set(self.0.scrolls_to_top.get() + 1);
    }
}

fn site() -> SiteConfig {
    SiteConfig {
        site_title: "Acme".to_string(),
        site_description: "Acme admin".to_string(),
        site_keywords: "admin,dashboard".to_string(),
        ..SiteConfig::default()
    }
}

fn mounted(width: f64, options: LayoutOptions) -> (LayoutController<FakeBrowser>, FakeBrowser) {
    let browser = FakeBrowser::with_width(width);
    let mut layout = LayoutController::new(site(), options, browser.clone());
    layout.mount();
    (layout, browser)
}

/// Resize the fake window and run the deferred classification like a host would.
fn resize(layout: &mut LayoutController<FakeBrowser>, browser: &FakeBrowser, width: f64) {
    browser.resize(width);
    layout.on_resize();
    for task in layout.drain_scheduled() {
        layout.run(task);
    }
}

fn run_all(layout: &mut LayoutController<FakeBrowser>) {
    for task in layout.drain_scheduled() {
        layout.run(task);
    }
}

const MOBILE: LayoutOptions = LayoutOptions {
    slim_capable: false,
    is_mobile: true,
};

#[test]
fn mobile_client_resizing_through_breakpoints() {
    let (mut layout, browser) = mounted(1300.0, MOBILE);
    assert!(layout.state().sidebar_collapsed);
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Xl));

    resize(&mut layout, &browser, 500.0);
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Xs));
    assert!(layout.state().sidebar_collapsed);

    resize(&mut layout, &browser, 1300.0);
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Xl));
    assert!(layout.state().sidebar_collapsed);
}

#[test]
fn desktop_sidebar_state_survives_a_trip_to_small_screens() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    assert!(!layout.state().sidebar_collapsed);

    resize(&mut layout, &browser, 700.0);
    assert!(layout.state().sidebar_collapsed);
    resize(&mut layout, &browser, 400.0);
    assert!(layout.state().sidebar_collapsed);

    resize(&mut layout, &browser, 1100.0);
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Lg));
    assert!(!layout.state().sidebar_collapsed);
}

#[test]
fn screen_size_tracks_every_width_in_a_long_sequence() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());

    // Deterministic LCG so the walk covers every bucket in varied order.
    let mut seed: u64 = 0x5eed;
    let mut saved = layout.state().sidebar_collapsed;
    for step in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let width = (seed >> 33) as f64 % 1600.0;
        let was_wide = layout.state().screen_size.is_some_and(ScreenSize::is_wide);

        if step % 7 == 0 {
            layout.toggle_sidebar();
            if layout.state().screen_size.is_some_and(ScreenSize::is_wide) {
                saved = layout.state().sidebar_collapsed;
            }
        }

        resize(&mut layout, &browser, width);
        let size = layout.state().screen_size.unwrap();
        assert_eq!(size, classify(width), "width {width}");

        if was_wide && size.is_overlay() {
            assert!(layout.state().sidebar_collapsed);
        }
        if size.is_wide() && !was_wide {
            assert_eq!(layout.state().sidebar_collapsed, saved, "step {step}");
        }
    }
}

#[test]
fn resize_bursts_are_coalesced_into_one_classification() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    run_all(&mut layout);

    browser.resize(800.0);
    for _ in 0..5 {
        layout.on_resize();
    }
    assert_eq!(layout.drain_scheduled(), vec![Deferred::Classify]);
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Xl));

    assert!(layout.run(Deferred::Classify));
    assert_eq!(layout.state().screen_size, Some(ScreenSize::Md));
    assert!(!layout.run(Deferred::Classify));
}

#[test]
fn animations_are_enabled_on_the_first_frame() {
    let (mut layout, _browser) = mounted(1300.0, LayoutOptions::default());
    assert!(layout.state().animations_disabled);
    assert_eq!(layout.drain_scheduled(), vec![Deferred::EnableAnimations]);

    layout.run(Deferred::EnableAnimations);
    assert!(!layout.state().animations_disabled);
}

#[test]
fn deferred_tasks_after_unmount_do_nothing() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    let scheduled = layout.drain_scheduled();
    browser.resize(500.0);
    layout.on_resize();
    let revision = layout.revision();

    layout.unmount();
    for task in scheduled.into_iter().chain([Deferred::Classify]) {
        assert!(!layout.run(task));
    }
    assert_eq!(layout.revision(), revision);
    assert!(layout.state().animations_disabled);
}

#[test]
fn page_calls_after_unmount_leave_state_frozen() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    run_all(&mut layout);
    layout.navigate("/dashboard");
    layout.unmount();
    let revision = layout.revision();
    let state = layout.state().clone();

    assert!(!layout.toggle_sidebar());
    assert!(!layout.on_viewport_change(400.0));
    assert!(!layout.set_visibility(VisibilityUpdate::all(true)));
    assert!(!layout.set_meta(MetaUpdate::title("Gone")));
    assert!(!layout.navigate("/apps/profile"));

    assert_eq!(layout.revision(), revision);
    assert_eq!(layout.state(), &state);
    assert_eq!(browser.0.scrolls_to_top.get(), 0);
    assert!(browser.touch_actions().is_empty());
}

#[test]
fn scroll_lock_stays_paired_across_random_sequences() {
    let mut seed: u64 = 0x10c4;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        seed >> 33
    };

    for round in 0..200 {
        let (mut layout, browser) = mounted((next() % 1600) as f64, LayoutOptions::default());
        for _ in 0..50 {
            match next() % 6 {
                0 => resize(&mut layout, &browser, (next() % 1600) as f64),
                1 | 2 => {
                    layout.toggle_sidebar();
                }
                3 => {
                    layout.set_visibility(VisibilityUpdate::default().sidebar(next() % 2 == 0));
                }
                4 => {
                    layout.navigate(&format!("/page/{}", next() % 3));
                }
                _ => run_all(&mut layout),
            }
        }
        layout.unmount();

        let actions = browser.touch_actions();
        for (index, action) in actions.iter().enumerate() {
            let expected = if index % 2 == 0 { TouchAction::None } else { TouchAction::Auto };
            assert_eq!(*action, expected, "round {round} write {index}");
        }
        assert_eq!(actions.len() % 2, 0, "round {round}");
    }
}

#[test]
fn overlay_sidebar_locks_and_unlocks_page_scroll() {
    let (mut layout, _browser) = mounted(600.0, LayoutOptions::default());
    let browser = layout.document().clone();
    assert!(!browser.is_locked());

    layout.toggle_sidebar();
    assert!(browser.is_locked());
    layout.toggle_sidebar();
    assert!(!browser.is_locked());

    assert_eq!(browser.touch_actions(), vec![TouchAction::None, TouchAction::Auto]);
}

#[test]
fn widening_the_viewport_with_an_open_overlay_releases_the_lock() {
    let (mut layout, browser) = mounted(900.0, LayoutOptions::default());
    layout.toggle_sidebar();
    assert!(browser.is_locked());

    resize(&mut layout, &browser, 1250.0);
    assert!(!browser.is_locked());
}

#[test]
fn unmount_and_drop_release_a_held_lock() {
    let (mut layout, browser) = mounted(500.0, LayoutOptions::default());
    layout.toggle_sidebar();
    layout.unmount();
    assert_eq!(browser.touch_actions(), vec![TouchAction::None, TouchAction::Auto]);

    let (mut layout, browser) = mounted(500.0, LayoutOptions::default());
    layout.toggle_sidebar();
    drop(layout);
    assert_eq!(browser.touch_actions(), vec![TouchAction::None, TouchAction::Auto]);
}

#[test]
fn wide_toggle_never_locks_scroll() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    layout.toggle_sidebar();
    layout.toggle_sidebar();
    assert!(browser.touch_actions().is_empty());
}

#[test]
fn navigation_scrolls_to_top_and_closes_overlay() {
    let (mut layout, browser) = mounted(500.0, LayoutOptions::default());
    run_all(&mut layout);
    layout.navigate("/dashboard");
    layout.toggle_sidebar();
    assert!(!layout.state().sidebar_collapsed);

    assert!(layout.navigate("/apps/profile"));
    assert_eq!(browser.0.scrolls_to_top.get(), 1);
    assert!(!layout.state().sidebar_collapsed, "collapse is delayed");
    assert_eq!(layout.drain_scheduled(), vec![Deferred::AutoCollapse]);
    assert_eq!(Deferred::AutoCollapse.timing(), Timing::After { millis: 100 });

    assert!(layout.run(Deferred::AutoCollapse));
    assert!(layout.state().sidebar_collapsed);
    assert!(!browser.is_locked());
}

#[test]
fn navigation_leaves_wide_or_hidden_sidebars_alone() {
    let (mut layout, browser) = mounted(1300.0, LayoutOptions::default());
    run_all(&mut layout);
    layout.navigate("/a");
    layout.navigate("/b");
    assert_eq!(browser.0.scrolls_to_top.get(), 1);
    assert!(layout.drain_scheduled().is_empty());

    let (mut layout, _browser) = mounted(500.0, LayoutOptions::default());
    run_all(&mut layout);
    layout.toggle_sidebar();
    layout.set_visibility(VisibilityUpdate::default().sidebar(true));
    layout.navigate("/a");
    layout.navigate("/b");
    assert!(layout.drain_scheduled().is_empty());
}

#[test]
fn auto_collapse_is_skipped_when_the_viewport_widened_meanwhile() {
    let (mut layout, browser) = mounted(500.0, LayoutOptions::default());
    run_all(&mut layout);
    layout.navigate("/a");
    layout.toggle_sidebar();
    layout.navigate("/b");
    let pending = layout.drain_scheduled();

    layout.on_viewport_change(1300.0);
    let collapsed = layout.state().sidebar_collapsed;
    for task in pending {
        layout.run(task);
    }
    assert_eq!(layout.state().sidebar_collapsed, collapsed);
    assert!(!browser.is_locked());
}

#[test]
fn hiding_navbars_leaves_other_regions_untouched() {
    let (mut layout, _browser) = mounted(1300.0, LayoutOptions::default());
    layout.set_visibility(VisibilityUpdate::default().footer(true));
    layout.set_visibility(VisibilityUpdate::default().navbar(true));

    let state = layout.state();
    assert!(state.navbar_hidden);
    assert!(!state.sidebar_hidden);
    assert!(state.footer_hidden);
    assert!(!layout.context().only_navbar);

    layout.set_visibility(VisibilityUpdate::default().sidebar(true).navbar(false));
    assert!(layout.context().only_navbar);
}

#[test]
fn page_meta_overrides_site_defaults() {
    let (mut layout, _browser) = mounted(1300.0, LayoutOptions::default());
    assert_eq!(layout.head().title, "Acme");
    assert_eq!(layout.head().description, "Acme admin");

    layout.set_meta(MetaUpdate::title("Profile"));
    assert_eq!(layout.head().title, "Acme - Profile");
    assert_eq!(layout.head().keywords, "admin,dashboard");
}

#[test]
fn every_change_produces_a_distinct_snapshot() {
    let (mut layout, _browser) = mounted(1300.0, LayoutOptions::default());
    let before = layout.context();
    layout.toggle_sidebar();
    let middle = layout.context();
    layout.toggle_sidebar();
    let after = layout.context();

    assert_ne!(before, middle);
    assert_ne!(middle, after);
    assert_eq!(before.state, after.state);
    assert_ne!(before, after);
}

#[test]
fn slim_sidebar_props_follow_breakpoint() {
    let options = LayoutOptions {
        slim_capable: true,
        is_mobile: false,
    };
    let (mut layout, browser) = mounted(1300.0, options);
    layout.toggle_sidebar();
    assert_eq!(
        layout.sidebar_props(),
        SidebarProps {
            sidebar_slim: true,
            sidebar_collapsed: false
        }
    );

    resize(&mut layout, &browser, 700.0);
    assert!(!layout.sidebar_props().sidebar_slim);
}
