// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The page: content plus every controller, wired to environment events.
//!
//! Scroll, visibility and resize notifications arrive through event
//! sources; the reveal controller, the section tracker and the mobile
//! menu are subscribed for as long as the page lives. `teardown` drops
//! the subscriptions and silences the timers.

use crate::config::PageConfig;
use crate::controllers::{
    carousel::PhotoCarousel,
    cursor::HoverCursor,
    events::{EventSource, Subscription},
    media_modal::{MediaModalController, ModalState},
    scroll_lock::ScrollLock,
    scroll_reveal::{RevealStyle, ScrollRevealController},
    section_tracker::{nav_scroll_target, SectionTracker, TieBreak},
    viewport::{Breakpoint, MobileMenu},
};
use crate::models::content::PortfolioContent;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// One section's visibility as measured this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub section_id: String,
    pub fraction: f32,
}

pub struct Page {
    content: PortfolioContent,
    config: PageConfig,
    scroll_lock: ScrollLock,

    reveal: Rc<RefCell<ScrollRevealController>>,
    tracker: Rc<RefCell<SectionTracker>>,
    menu: Rc<RefCell<MobileMenu>>,
    modal: MediaModalController,
    photos: PhotoCarousel,
    cursor: HoverCursor,

    scroll_events: EventSource<f32>,
    visibility_events: EventSource<Vec<VisibilityEntry>>,
    resize_events: EventSource<f32>,
    subscriptions: Vec<Subscription>,

    /// Last forwarded visible fraction per section.
    last_fractions: HashMap<String, f32>,
}

impl Page {
    pub fn new(content: PortfolioContent, config: PageConfig, now: Duration) -> Self {
        let scroll_lock = ScrollLock::new();
        let reveal = Rc::new(RefCell::new(ScrollRevealController::new(config.reveal)));
        let tracker = Rc::new(RefCell::new(
            SectionTracker::new(content.section_ids(), &config.sections)
                .with_tie_break(TieBreak::ArrivalOrder),
        ));
        let menu = Rc::new(RefCell::new(MobileMenu::new(config.layout, scroll_lock.clone())));
        let modal = MediaModalController::new(config.modal, scroll_lock.clone());
        let photos = PhotoCarousel::new(content.photos.len(), &config.carousel, now);
        let cursor = HoverCursor::new(&config.layout);

        let scroll_events = EventSource::new();
        let visibility_events = EventSource::new();
        let resize_events = EventSource::new();

        let mut subscriptions = Vec::new();
        {
            let reveal = reveal.clone();
            subscriptions.push(scroll_events.subscribe(move |y: &f32| {
                reveal.borrow_mut().on_scroll(*y);
            }));
        }
        {
            let tracker = tracker.clone();
            subscriptions.push(visibility_events.subscribe(move |batch: &Vec<VisibilityEntry>| {
                let entries: Vec<(&str, f32)> = batch
                    .iter()
                    .map(|e| (e.section_id.as_str(), e.fraction))
                    .collect();
                tracker.borrow_mut().on_visibility_batch(&entries);
            }));
        }
        {
            let menu = menu.clone();
            subscriptions.push(resize_events.subscribe(move |width: &f32| {
                menu.borrow_mut().on_resize(*width);
            }));
        }

        log::info!("Page ready: {} sections, {} projects", content.sections.len(), content.projects.len());
        log::debug!("Initial section: {:?}", tracker.borrow().initial_state());

        Self {
            content,
            config,
            scroll_lock,
            reveal,
            tracker,
            menu,
            modal,
            photos,
            cursor,
            scroll_events,
            visibility_events,
            resize_events,
            subscriptions,
            last_fractions: HashMap::new(),
        }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    // Environment notifications.

    pub fn notify_scroll(&self, offset_y: f32) {
        self.scroll_events.emit(&offset_y);
    }

    /// Report this frame's measurements. Only sections seen for the first
    /// time or whose fraction crossed the threshold are forwarded.
    pub fn notify_visibility(&mut self, measured: Vec<VisibilityEntry>) {
        let threshold = self.config.sections.visibility_threshold;
        let batch: Vec<VisibilityEntry> = measured
            .into_iter()
            .filter(|entry| {
                let crossed = match self.last_fractions.get(&entry.section_id) {
                    Some(&last) => (last >= threshold) != (entry.fraction >= threshold),
                    None => true,
                };
                if crossed {
                    self.last_fractions.insert(entry.section_id.clone(), entry.fraction);
                }
                crossed
            })
            .collect();

        if !batch.is_empty() {
            self.visibility_events.emit(&batch);
        }
    }

    pub fn notify_resize(&self, width: f32) {
        self.resize_events.emit(&width);
    }

    /// Run timers. Call once at the start of every frame.
    pub fn tick(&mut self, now: Duration) {
        self.modal.tick(now);
        self.photos.tick(now);
    }

    /// Release subscriptions and silence timers.
    pub fn teardown(&mut self) {
        self.subscriptions.clear();
        self.photos.stop();
        self.modal.reset();
        self.menu.borrow_mut().close();
        log::debug!("Page torn down");
    }

    // Derived values for the UI.

    pub fn style(&self) -> RevealStyle {
        self.reveal.borrow().style()
    }

    pub fn active_section(&self) -> Option<String> {
        self.tracker.borrow().active().map(str::to_string)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.menu.borrow().breakpoint()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.borrow().is_open()
    }

    pub fn modal_state(&self) -> ModalState<'_> {
        self.modal.state()
    }

    pub fn modal(&mut self) -> &mut MediaModalController {
        &mut self.modal
    }

    pub fn photos(&mut self) -> &mut PhotoCarousel {
        &mut self.photos
    }

    pub fn photo_index(&self) -> usize {
        self.photos.index()
    }

    pub fn until_next_photo(&self, now: Duration) -> Option<Duration> {
        self.photos.until_next(now)
    }

    pub fn cursor(&mut self) -> &mut HoverCursor {
        &mut self.cursor
    }

    // User actions.

    pub fn toggle_menu(&self) {
        self.menu.borrow_mut().toggle();
    }

    /// Open the overlay for a project id. Unknown ids are ignored.
    pub fn open_project(&mut self, id: &str) -> bool {
        match self.content.project(id) {
            Some(project) => self.modal.open(project.clone()),
            None => {
                log::warn!("Click on unknown project {}", id);
                false
            }
        }
    }

    pub fn close_project(&mut self, now: Duration) {
        self.modal.close(now);
    }

    /// Navigation click: highlight the section at once and return the
    /// scroll offset to move to. Closes the mobile drawer.
    pub fn nav_click(
        &mut self,
        section_id: &str,
        section_top: f32,
        section_height: f32,
        viewport_height: f32,
    ) -> f32 {
        self.tracker.borrow_mut().set_active(section_id);
        self.menu.borrow_mut().close();
        nav_scroll_target(
            section_top,
            section_height,
            viewport_height,
            self.config.sections.nav_min_margin,
        )
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{Photo, SectionMeta};
    use crate::models::project::{MediaItem, Project};

    fn content() -> PortfolioContent {
        let section = |id: &str| SectionMeta {
            id: id.to_string(),
            title: id.to_string(),
        };
        let photo = |id: &str| Photo {
            id: id.to_string(),
            src: format!("{id}.jpg"),
            alt: String::new(),
            caption: String::new(),
        };
        PortfolioContent {
            name: "Iris".to_string(),
            tagline: String::new(),
            links: Vec::new(),
            sections: vec![section("projects"), section("experience"), section("about")],
            projects: vec![Project::new("mappy", "Mappy", "Rust")
                .with_media(vec![MediaItem::image("a.png", "a"), MediaItem::image("b.png", "b")])],
            competitions: Vec::new(),
            skills: Vec::new(),
            photos: vec![photo("p1"), photo("p2")],
        }
    }

    fn page() -> Page {
        let mut config = PageConfig::default();
        config.reveal.max_scroll = 300.0;
        Page::new(content(), config, Duration::ZERO)
    }

    fn entry(id: &str, fraction: f32) -> VisibilityEntry {
        VisibilityEntry {
            section_id: id.to_string(),
            fraction,
        }
    }

    #[test]
    fn test_scroll_events_drive_reveal() {
        let page = page();
        page.notify_scroll(150.0);
        assert_eq!(page.style().progress, 0.5);
        page.notify_scroll(310.0);
        page.notify_scroll(0.0);
        assert!(page.style().intro_locked);
    }

    #[test]
    fn test_visibility_events_drive_active_section() {
        let mut page = page();
        assert_eq!(page.active_section().as_deref(), Some("projects"));
        page.notify_visibility(vec![entry("experience", 0.75)]);
        page.notify_visibility(vec![entry("projects", 0.5)]);
        assert_eq!(page.active_section().as_deref(), Some("experience"));
    }

    #[test]
    fn test_unchanged_frame_keeps_nav_click_highlight() {
        let mut page = page();
        let frame = || vec![entry("projects", 1.0), entry("experience", 1.0), entry("about", 1.0)];

        page.notify_visibility(frame());
        assert_eq!(page.active_section().as_deref(), Some("about"));

        page.nav_click("projects", 0.0, 400.0, 800.0);
        page.notify_visibility(frame());
        assert_eq!(page.active_section().as_deref(), Some("projects"));
    }

    #[test]
    fn test_only_threshold_crossings_are_forwarded() {
        let mut page = page();
        page.notify_visibility(vec![entry("projects", 0.9), entry("about", 0.2)]);
        assert_eq!(page.active_section().as_deref(), Some("projects"));

        // Growing without crossing changes nothing.
        page.notify_visibility(vec![entry("projects", 1.0), entry("about", 0.5)]);
        assert_eq!(page.active_section().as_deref(), Some("projects"));

        page.notify_visibility(vec![entry("projects", 0.3), entry("about", 0.7)]);
        assert_eq!(page.active_section().as_deref(), Some("about"));

        // Dropping back under and crossing again re-activates.
        page.notify_visibility(vec![entry("projects", 0.8), entry("about", 0.7)]);
        assert_eq!(page.active_section().as_deref(), Some("projects"));
    }

    #[test]
    fn test_teardown_releases_observers_and_timers() {
        let mut page = page();
        page.open_project("mappy");
        assert!(page.is_scroll_locked());

        page.teardown();
        page.notify_scroll(400.0);
        page.notify_visibility(vec![entry("about", 1.0)]);
        page.tick(Duration::from_secs(10));

        assert!(!page.style().intro_locked);
        assert_eq!(page.active_section().as_deref(), Some("projects"));
        assert_eq!(page.photo_index(), 0);
        assert!(!page.is_scroll_locked());
    }

    #[test]
    fn test_open_project_by_id() {
        let mut page = page();
        assert!(!page.open_project("nope"));
        assert!(page.open_project("mappy"));
        page.tick(Duration::from_millis(16));
        let state = page.modal_state();
        assert!(state.is_open);
        assert_eq!(state.selected_project.map(|p| p.title.as_str()), Some("Mappy"));

        page.close_project(Duration::from_millis(100));
        page.tick(Duration::from_millis(400));
        assert!(page.modal_state().selected_project.is_none());
        assert!(!page.is_scroll_locked());
    }

    #[test]
    fn test_nav_click_activates_and_closes_menu() {
        let mut page = page();
        page.notify_resize(400.0);
        page.toggle_menu();
        assert!(page.is_menu_open());
        assert!(page.is_scroll_locked());

        let target = page.nav_click("about", 2000.0, 200.0, 800.0);
        assert_eq!(target, 1800.0);
        assert_eq!(page.active_section().as_deref(), Some("about"));
        assert!(!page.is_menu_open());
        assert!(!page.is_scroll_locked());
    }

    #[test]
    fn test_photo_strip_advances() {
        let mut page = page();
        page.tick(Duration::from_secs(3));
        assert_eq!(page.photo_index(), 1);
        page.photos().prev(Duration::from_secs(3));
        assert_eq!(page.photo_index(), 0);
    }
}
