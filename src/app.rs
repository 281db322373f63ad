// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The window plays the role of the browser: its vertical scroll area is
//! the page, section rectangles measured each frame become visibility
//! notifications, and the pointer drives the cursor ring. All view state
//! lives in `Page`; this module only translates between egui and it.

use crate::config::PageConfig;
use crate::controllers::media_modal::ModalPhase;
use crate::controllers::section_tracker::visible_fraction;
use crate::controllers::viewport::Breakpoint;
use crate::io::media::MediaLoader;
use crate::models::content::PortfolioContent;
use crate::models::project::MediaKind;
use crate::page::{Page, VisibilityEntry};
use crate::ui::{hero, media_view, modal, nav, photos, projects, theme, timeline};
use crate::util::geometry::Point;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Section position in scroll-content coordinates, measured last frame.
struct SectionLayout {
    id: String,
    top: f32,
    height: f32,
}

/// Main application state.
pub struct FolioApp {
    /// Page parameters applied to every loaded page
    config: PageConfig,

    /// Current page (if content is loaded)
    page: Option<Page>,

    /// Background image decoder for the current page
    media_loader: Option<MediaLoader>,

    /// Decoded textures by `src`
    textures: media_view::TextureCache,

    /// Receiver for background content loading
    content_loader: Option<Receiver<Result<(PortfolioContent, PathBuf), String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last load failure, shown in the status bar
    error_message: Option<String>,

    /// Section geometry from the previous frame
    sections: Vec<SectionLayout>,

    /// Visible height of the page scroll area
    viewport_height: f32,

    /// Scroll offset requested by a navigation click
    scroll_to: Option<f32>,

    /// Last window width reported to the page
    last_width: Option<f32>,
}

impl FolioApp {
    /// Create the application, optionally loading a content file right away.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PageConfig, content: Option<PathBuf>) -> Self {
        theme::apply(&cc.egui_ctx);

        let mut app = Self {
            config,
            page: None,
            media_loader: None,
            textures: media_view::TextureCache::new(),
            content_loader: None,
            loading_message: None,
            error_message: None,
            sections: Vec::new(),
            viewport_height: 0.0,
            scroll_to: None,
            last_width: None,
        };
        if let Some(path) = content {
            app.load_content_file(path);
        }
        app
    }

    /// Load a content file (asynchronously).
    pub fn load_content_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.content_loader = Some(receiver);
        self.loading_message = Some("Loading portfolio...".to_string());

        std::thread::spawn(move || {
            let result = crate::io::serialization::import_content(&path)
                .map(|content| (content, path))
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Swap in freshly loaded content and queue its images.
    fn install_content(&mut self, content: PortfolioContent, path: PathBuf, now: Duration) {
        // Dropping the old page tears down its subscriptions and timers.
        self.page = None;
        self.textures.clear();
        self.sections.clear();
        self.last_width = None;

        let mut loader = MediaLoader::new(path.parent().map(|p| p.to_path_buf()));
        for photo in &content.photos {
            loader.request(&photo.src);
        }
        for item in content.projects.iter().flat_map(|p| &p.media) {
            if item.kind == MediaKind::Image {
                loader.request(&item.src);
            }
        }

        self.media_loader = Some(loader);
        self.page = Some(Page::new(content, self.config, now));
        log::info!("Loaded portfolio from {}", path.display());
    }

    fn poll_loaders(&mut self, ctx: &egui::Context, now: Duration) {
        if let Some(ref receiver) = self.content_loader {
            if let Ok(result) = receiver.try_recv() {
                self.content_loader = None;
                self.loading_message = None;
                match result {
                    Ok((content, path)) => {
                        self.error_message = None;
                        self.install_content(content, path, now);
                    }
                    Err(e) => {
                        log::error!("Failed to load content: {}", e);
                        self.error_message = Some(e);
                    }
                }
            }
        }

        if let Some(ref loader) = self.media_loader {
            for (src, result) in loader.drain() {
                match result {
                    Ok(image) => {
                        let size = [image.width as usize, image.height as usize];
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                        let texture = ctx.load_texture(src.clone(), color_image, egui::TextureOptions::LINEAR);
                        self.textures.insert(src, texture);
                    }
                    Err(e) => log::error!("Failed to load media {}: {}", src, e),
                }
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Content...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Portfolio", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_content_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn welcome(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    if let Some(ref message) = self.loading_message {
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(egui::RichText::new(message).size(16.0).color(theme::MUTED));
                        return;
                    }
                    ui.heading(egui::RichText::new("Folio").size(32.0).color(theme::INK));
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Open a portfolio content file to begin")
                            .color(theme::MUTED),
                    );
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("File → Open Content...").weak());
                    if let Some(ref error) = self.error_message {
                        ui.add_space(20.0);
                        ui.colored_label(theme::PINK, error);
                    }
                });
            });
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.poll_loaders(ctx, now);

        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        self.menu_bar(ctx);

        if self.page.is_none() {
            self.welcome(ctx);
            return;
        }
        let Some(page) = self.page.as_mut() else {
            return;
        };

        // Deferred transitions run before this frame's input is handled,
        // so an overlay opened this frame renders hidden first.
        page.tick(now);

        let width = ctx.screen_rect().width();
        if self.last_width != Some(width) {
            page.notify_resize(width);
            self.last_width = Some(width);
        }

        let pointer = ctx.input(|i| i.pointer.hover_pos());
        page.cursor().on_pointer_move(pointer.map(Point::from));

        let style = page.style();
        let mut goto: Option<String> = None;

        // Navigation: drawer on mobile, index column on desktop.
        match page.breakpoint() {
            Breakpoint::Mobile => {
                egui::TopBottomPanel::top("mobile_bar").show(ctx, |ui| {
                    if ui.button(if page.is_menu_open() { "✕" } else { "☰" }).clicked() {
                        page.toggle_menu();
                    }
                });
                if page.is_menu_open() {
                    egui::SidePanel::left("drawer").show(ctx, |ui| {
                        let active = page.active_section();
                        if let nav::NavAction::Goto(id) =
                            nav::show(ui, &page.content().sections, active.as_deref())
                        {
                            goto = Some(id);
                        }
                    });
                }
            }
            Breakpoint::Desktop => {
                if style.content_opacity > 0.0 {
                    egui::SidePanel::left("index")
                        .resizable(false)
                        .default_width(180.0)
                        .show(ctx, |ui| {
                            ui.set_opacity(style.content_opacity);
                            ui.add_space(style.top_offset_px(self.viewport_height));
                            let active = page.active_section();
                            if let nav::NavAction::Goto(id) =
                                nav::show(ui, &page.content().sections, active.as_deref())
                            {
                                goto = Some(id);
                            }
                        });
                }
            }
        }

        if let Some(ref error) = self.error_message {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.colored_label(theme::PINK, error);
            });
        }

        // The page itself.
        let textures = &self.textures;
        let photo_index = page.photo_index();
        let scroll_enabled = !page.is_scroll_locked();
        let scroll_to = self.scroll_to.take();

        let (output, projects_response, photo_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_source("page")
                    .auto_shrink([false, false])
                    .enable_scrolling(scroll_enabled);
                if let Some(target) = scroll_to {
                    area = area.vertical_scroll_offset(target);
                }

                let viewport_height = ui.available_height();
                let content = page.content();
                let mut projects_response = None;
                let mut photo_action = photos::PhotoAction::None;

                let output = area.show(ui, |ui| {
                    let mut rects = Vec::new();
                    ui.add_space(style.top_offset_px(viewport_height));
                    hero::show(ui, content, &style);
                    ui.add_space(40.0);

                    ui.add_enabled_ui(style.content_opacity > 0.0, |ui| {
                        ui.set_opacity(style.content_opacity);
                        for section in &content.sections {
                            let rect = ui
                                .vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(&section.title)
                                            .size(13.0)
                                            .strong()
                                            .color(theme::MUTED),
                                    );
                                    ui.add_space(12.0);
                                    match section.id.as_str() {
                                        "projects" => {
                                            projects_response = Some(projects::show(ui, &content.projects));
                                        }
                                        "experience" | "competitions" => {
                                            timeline::show_competitions(ui, &content.competitions);
                                        }
                                        "technologies" | "skills" => {
                                            timeline::show_skills(ui, &content.skills);
                                        }
                                        "about" => {
                                            photo_action = photos::show(ui, &content.photos, photo_index, textures);
                                        }
                                        _ => {}
                                    }
                                })
                                .response
                                .rect;
                            rects.push((section.id.clone(), rect));
                            ui.add_space(64.0);
                        }
                    });
                    // Room to scroll the last section to the top.
                    ui.add_space(viewport_height * 0.5);
                    rects
                });
                (output, projects_response, photo_action)
            })
            .inner;

        // Report scroll and section visibility.
        let viewport = output.inner_rect;
        let offset = output.state.offset.y;
        page.notify_scroll(offset);

        let batch = output
            .inner
            .iter()
            .map(|(id, rect)| VisibilityEntry {
                section_id: id.clone(),
                fraction: visible_fraction(rect.top(), rect.height(), viewport.top(), viewport.height()),
            })
            .collect();
        page.notify_visibility(batch);

        self.sections = output
            .inner
            .iter()
            .map(|(id, rect)| SectionLayout {
                id: id.clone(),
                top: rect.top() - viewport.top() + offset,
                height: rect.height(),
            })
            .collect();
        self.viewport_height = viewport.height();

        if let Some(id) = goto {
            if let Some(layout) = self.sections.iter().find(|s| s.id == id) {
                self.scroll_to = Some(page.nav_click(&id, layout.top, layout.height, self.viewport_height));
            }
        }

        // Content interactions.
        let hovering = projects_response.as_ref().map_or(false, |r| r.hovered);
        if let Some(id) = projects_response.and_then(|r| r.open) {
            page.open_project(&id);
        }
        match photo_action {
            photos::PhotoAction::Prev => page.photos().prev(now),
            photos::PhotoAction::Next => page.photos().next(now),
            photos::PhotoAction::Select(i) => {
                page.photos().select(i, now);
            }
            photos::PhotoAction::None => {}
        }

        // Overlay.
        let modal_state = page.modal_state();
        let is_open = modal_state.is_open;
        let opacity = ctx.animate_bool_with_time(
            egui::Id::new("project_modal_fade"),
            is_open,
            self.config.modal.close_transition().as_secs_f32(),
        );
        let mut modal_action = modal::show(ctx, &modal_state, &self.textures, opacity);
        let has_selection = modal_state.selected_project.is_some();
        let phase = modal_state.phase;

        if has_selection {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::Escape) {
                    modal_action = modal::ModalAction::Close;
                } else if i.key_pressed(egui::Key::ArrowLeft) {
                    modal_action = modal::ModalAction::Prev;
                } else if i.key_pressed(egui::Key::ArrowRight) {
                    modal_action = modal::ModalAction::Next;
                }
            });
        }
        match modal_action {
            modal::ModalAction::Close => page.close_project(now),
            modal::ModalAction::Prev => page.modal().prev_media(),
            modal::ModalAction::Next => page.modal().next_media(),
            modal::ModalAction::Select(i) => {
                page.modal().select_media(i);
            }
            modal::ModalAction::None => {}
        }

        // Cursor ring.
        let cursor = page.cursor();
        cursor.set_hovering(hovering && !has_selection);
        let animating = cursor.step();
        if let Some(pos) = cursor.position() {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Tooltip,
                egui::Id::new("cursor_ring"),
            ));
            painter.circle_stroke(pos.into(), cursor.radius(), egui::Stroke::new(1.5, theme::PINK));
        }

        // Keep timers running.
        if animating || matches!(phase, ModalPhase::Opening | ModalPhase::Closing) {
            ctx.request_repaint();
        } else if let Some(delay) = page.until_next_photo(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
