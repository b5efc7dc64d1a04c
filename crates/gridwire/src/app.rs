use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::level::Level;
use crate::theme::Theme;
use crate::wire::{
    Cell, GridStore, PathController, PlacedSegment, PointerSample, SegmentKind, SegmentMap,
    TileGrid, TileType,
};

const BOARD_MARGIN: f32 = 32.0;
const TOAST_DURATION: f32 = 2.2;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_DURATION - 0.5 {
            1.0
        } else {
            ((TOAST_DURATION - elapsed) / 0.5).clamp(0.0, 1.0)
        }
    }

    fn expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

struct WireApp {
    level: Level,
    controller: PathController<TileGrid, SegmentMap>,
    theme: Theme,
    delete_mode: bool,
    show_hud: bool,
    toast: Option<Toast>,
    /// Connection count already announced, so each completion toasts once.
    connected_seen: usize,
    /// Cached board rect from last frame, used for pointer hit-testing.
    board_rect: egui::Rect,
    cell_size: f32,
}

impl WireApp {
    fn new(level: Level, theme: Theme) -> Self {
        let controller = build_controller(&level);
        Self {
            level,
            controller,
            theme,
            delete_mode: false,
            show_hud: true,
            toast: None,
            connected_seen: 0,
            board_rect: egui::Rect::ZERO,
            cell_size: 0.0,
        }
    }

    fn restart(&mut self) {
        self.controller = build_controller(&self.level);
        self.connected_seen = 0;
        self.delete_mode = false;
        self.toast = Some(Toast::new("Level restarted".to_string()));
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn toggle_delete_mode(&mut self) {
        self.delete_mode = !self.delete_mode;
        let message = if self.delete_mode {
            "Delete mode: click a building to remove it and its wire"
        } else {
            "Delete mode off"
        };
        self.toast = Some(Toast::new(message.to_string()));
    }

    /// The board cell under a screen position, if any.
    fn cell_at_pos(&self, pos: egui::Pos2) -> Option<Cell> {
        if self.cell_size <= 0.0 || !self.board_rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - self.board_rect.left()) / self.cell_size) as usize;
        let row = ((pos.y - self.board_rect.top()) / self.cell_size) as usize;
        if col >= self.level.width || row >= self.level.height {
            return None;
        }
        Some(self.level.index().cell_at(col, row))
    }

    fn cell_rect(&self, cell: Cell) -> egui::Rect {
        let index = self.level.index();
        let x = self.board_rect.left() + index.col(cell) as f32 * self.cell_size;
        let y = self.board_rect.top() + index.row(cell) as f32 * self.cell_size;
        egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(self.cell_size, self.cell_size))
    }

    /// Fit the board into the available rect and cache the geometry.
    fn layout_board(&mut self, avail: egui::Rect) {
        let cols = self.level.width as f32;
        let rows = self.level.height as f32;
        let cell = ((avail.width() - BOARD_MARGIN * 2.0) / cols)
            .min((avail.height() - BOARD_MARGIN * 2.0) / rows)
            .floor()
            .max(8.0);
        let size = egui::vec2(cell * cols, cell * rows);
        self.board_rect = egui::Rect::from_center_size(avail.center(), size);
        self.cell_size = cell;
    }

    fn handle_delete_click(&mut self, cell: Cell) {
        if let TileType::Building(kind) = self.controller.grid().type_of(cell) {
            self.controller.remove_full_path(cell);
            self.controller.grid_mut().set_type(cell, TileType::Empty);
            self.toast = Some(Toast::new(format!("Removed {}", kind.display_name())));
        }
    }

    fn announce_connections(&mut self) {
        let connected = self.controller.connected().len();
        if connected > self.connected_seen {
            self.connected_seen = connected;
            let total = connected + self.controller.eligible_sources().len();
            let message = if connected == total {
                "All buildings connected!".to_string()
            } else {
                format!("Connected! {connected}/{total}")
            };
            self.toast = Some(Toast::new(message));
        }
    }

    fn paint_board(&self, painter: &egui::Painter) {
        painter.rect_filled(self.board_rect, 4.0, self.theme.board);

        let grid_stroke = egui::Stroke::new(1.0, self.theme.grid_line);
        for col in 0..=self.level.width {
            let x = self.board_rect.left() + col as f32 * self.cell_size;
            painter.line_segment(
                [
                    egui::pos2(x, self.board_rect.top()),
                    egui::pos2(x, self.board_rect.bottom()),
                ],
                grid_stroke,
            );
        }
        for row in 0..=self.level.height {
            let y = self.board_rect.top() + row as f32 * self.cell_size;
            painter.line_segment(
                [
                    egui::pos2(self.board_rect.left(), y),
                    egui::pos2(self.board_rect.right(), y),
                ],
                grid_stroke,
            );
        }

        for cell in 0..self.controller.grid().len() {
            match self.controller.grid().type_of(cell) {
                TileType::Building(kind) => {
                    let rect = self.cell_rect(cell).shrink(self.cell_size * 0.12);
                    painter.rect_filled(rect, 3.0, self.theme.building_color(kind));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        kind.glyph(),
                        egui::FontId::proportional(self.cell_size * 0.42),
                        self.theme.building_glyph,
                    );
                    if self.controller.eligible_sources().contains(&cell) {
                        painter.circle_filled(
                            rect.right_top(),
                            self.cell_size * 0.08,
                            self.theme.eligible_ring,
                        );
                    }
                }
                TileType::Goal => {
                    let rect = self.cell_rect(cell).shrink(self.cell_size * 0.12);
                    painter.rect_filled(rect, 3.0, self.theme.goal);
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "G",
                        egui::FontId::proportional(self.cell_size * 0.42),
                        self.theme.goal_glyph,
                    );
                }
                _ => {}
            }
        }

        for (cell, placed) in self.controller.renderer().iter() {
            self.paint_segment(painter, cell, placed);
        }
    }

    /// Wire glyphs are arms from the cell center to its edges: a straight
    /// piece spans two opposite edges, a corner joins two adjacent ones.
    /// The base shapes point along the column axis / east-south and rotate
    /// clockwise with the segment rotation.
    fn paint_segment(&self, painter: &egui::Painter, cell: Cell, placed: &PlacedSegment) {
        let center = self.cell_rect(cell).center();
        let half = self.cell_size * 0.5;
        let width = (self.cell_size * 0.22).max(2.0);
        let color = self.theme.wire_color(placed.material);
        let stroke = egui::Stroke::new(width, color);

        let base: [f32; 2] = match placed.segment.kind {
            SegmentKind::Straight => [90.0, 270.0],
            SegmentKind::Corner => [0.0, 90.0],
        };
        for angle in base {
            let rad = (angle + placed.segment.rotation.degrees()).to_radians();
            let tip = center + egui::vec2(rad.cos(), rad.sin()) * half;
            painter.line_segment([center, tip], stroke);
        }
        painter.circle_filled(center, width * 0.5, color);
    }

    fn paint_hud(&self, painter: &egui::Painter, rect: egui::Rect) {
        let connected = self.controller.connected().len();
        let total = connected + self.controller.eligible_sources().len();
        let status = format!("{} - {connected}/{total} connected", self.level.name);
        painter.text(
            egui::pos2(rect.left() + 16.0, rect.top() + 12.0),
            egui::Align2::LEFT_TOP,
            status,
            egui::FontId::proportional(16.0),
            self.theme.hud_text,
        );

        let hint = if self.delete_mode {
            "DELETE MODE - click a building to remove it  [D] exit"
        } else {
            "[D]elete mode  [T]heme  [R]estart  [H]ud  [Q]uit"
        };
        painter.text(
            egui::pos2(rect.left() + 16.0, rect.bottom() - 12.0),
            egui::Align2::LEFT_BOTTOM,
            hint,
            egui::FontId::proportional(13.0),
            Theme::with_opacity(self.theme.hud_text, 0.8),
        );
    }

    fn paint_toast(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        let font = egui::FontId::proportional(15.0);
        let galley = painter.layout_no_wrap(
            toast.message.clone(),
            font.clone(),
            Theme::with_opacity(self.theme.toast_text, opacity),
        );
        let padding = egui::vec2(14.0, 8.0);
        let size = galley.rect.size() + padding * 2.0;
        let toast_rect = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.bottom() - 48.0),
            size,
        );
        painter.rect_filled(
            toast_rect,
            6.0,
            Theme::with_opacity(self.theme.toast_background, opacity * 0.9),
        );
        painter.galley(toast_rect.min + padding, galley, egui::Color32::TRANSPARENT);
    }
}

fn build_controller(level: &Level) -> PathController<TileGrid, SegmentMap> {
    let mut controller =
        PathController::new(TileGrid::new(level.width, level.height), SegmentMap::new());
    let index = level.index();
    for b in &level.buildings {
        let cell = index.cell_at(b.col, b.row);
        controller
            .grid_mut()
            .set_type(cell, TileType::Building(b.kind));
        controller.register_source(cell);
    }
    controller
        .grid_mut()
        .set_type(level.goal_cell(), TileType::Goal);
    controller
}

impl eframe::App for WireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        let (primary_pressed, primary_down, pointer_pos) = ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
            }
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_down(egui::PointerButton::Primary),
                i.pointer.hover_pos(),
            )
        });

        let (toggle_delete, toggle_theme, toggle_hud, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::R),
            )
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_delete {
            self.toggle_delete_mode();
        }
        if toggle_theme {
            self.toggle_theme();
        }
        if toggle_hud {
            self.show_hud = !self.show_hud;
        }
        if restart {
            self.restart();
        }

        let hovered = pointer_pos.and_then(|pos| self.cell_at_pos(pos));
        let sample = PointerSample {
            button_down: primary_down,
            cell: hovered,
        };
        self.controller.tick(&sample, self.delete_mode);

        if self.delete_mode && primary_pressed {
            if let Some(cell) = hovered {
                self.handle_delete_click(cell);
            }
        }
        self.announce_connections();

        if self.toast.as_ref().is_some_and(|t| t.expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.layout_board(rect);

                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, bg);
                self.paint_board(painter);
                if self.show_hud {
                    self.paint_hud(painter, rect);
                }
                self.paint_toast(painter, rect);
            });

        if self.toast.is_some() || primary_down {
            ctx.request_repaint();
        }
    }
}

pub fn run(level_path: Option<PathBuf>, windowed: bool) -> anyhow::Result<()> {
    let level = match &level_path {
        Some(path) => Level::load(path)?,
        None => Level::builtin(),
    };

    let config = Config::load_or_default();
    let theme_name = config
        .defaults
        .as_ref()
        .and_then(|d| d.theme.clone())
        .unwrap_or_else(|| "dark".to_string());
    let windowed = windowed
        || config
            .defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false);

    tracing::info!(
        level = %level.name,
        width = level.width,
        height = level.height,
        buildings = level.buildings.len(),
        "starting board"
    );

    let title = format!("Gridwire - {}", level.name);
    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(WireApp::new(level, Theme::from_name(&theme_name))))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
