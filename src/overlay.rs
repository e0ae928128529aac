use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use egui::text::LayoutJob;
use egui::{Color32, FontFamily, FontId, Id, LayerId, Order, Pos2, Rect, Rgba, TextFormat};
use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::config::TextConfig;
use crate::scene::{HoverTarget, Scene};

/// Halo copies drawn around glowing text
const GLOW_TAPS: usize = 8;
/// Halo radius as a fraction of the glyph height
const GLOW_RADIUS: f32 = 0.06;
const GLOW_ALPHA: u8 = 28;
/// Text smaller than this is not drawn
const MIN_TEXT_PX: f32 = 1.0;
/// Largest glyph height handed to the font atlas
pub const MAX_TEXT_PX: f32 = 256.0;

/// Register the configured font as the first proportional face
pub fn install_font(ctx: &egui::Context, path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font file: {:?}", path))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "scene".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, "scene".to_owned());
    ctx.set_fonts(fonts);

    log::info!("Loaded font {:?}", path);
    Ok(())
}

/// Screen text height for a glyph `world_size` units tall at view `depth`.
/// Rounded to half points so the glyph cache sees a bounded set of sizes, and
/// capped at [`MAX_TEXT_PX`] for labels right in front of the camera.
pub fn text_size_px(world_size: f32, focal: f32, depth: f32) -> f32 {
    if depth <= 0.0 {
        return 0.0;
    }
    ((world_size * focal / depth * 2.0).round() / 2.0).min(MAX_TEXT_PX)
}

/// Nearest of the billboards under the pointer
pub fn front_most(hits: impl IntoIterator<Item = (HoverTarget, f32)>) -> HoverTarget {
    hits.into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| target)
        .unwrap_or_default()
}

/// One camera-facing label ready to paint
struct Billboard<'a> {
    target: HoverTarget,
    text: &'a str,
    position: Vec3,
    color: [f32; 3],
    glow: bool,
}

struct Placed {
    target: HoverTarget,
    depth: f32,
    rect: Rect,
    galley: Arc<egui::Galley>,
    color: Color32,
    glow: bool,
}

/// Per-frame numbers shown in the diagnostics window
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub fps: f32,
}

/// Paints word and phrase billboards with egui and tracks pointer hover over them
pub struct Overlay {
    font_size: f32,
    letter_spacing: f32,
    show_diagnostics: bool,
}

impl Overlay {
    pub fn new(text: &TextConfig, show_diagnostics: bool) -> Self {
        Self {
            font_size: text.font_size,
            letter_spacing: text.letter_spacing,
            show_diagnostics,
        }
    }

    pub fn draw(&self, ctx: &egui::Context, scene: &mut Scene, camera: &Camera, stats: Stats) {
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("billboards")));
        let placed = self.place(&painter, scene, camera, screen);

        let pointer = if ctx.is_pointer_over_area() {
            None
        } else {
            ctx.input(|i| i.pointer.hover_pos())
        };
        let hovered = match pointer {
            Some(pos) => front_most(
                placed
                    .iter()
                    .filter(|p| p.rect.contains(pos))
                    .map(|p| (p.target, p.depth)),
            ),
            None => HoverTarget::None,
        };

        if scene.set_hover(hovered) {
            log::trace!("Hover: {:?}", hovered);
        }
        if matches!(scene.hover(), HoverTarget::Word(_)) {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if scene.is_hovering() && ctx.input(|i| i.pointer.primary_clicked()) {
            scene.click();
        }

        for item in placed.iter().rev() {
            if item.glow {
                let radius = item.rect.height() * GLOW_RADIUS;
                let halo = Color32::from_white_alpha(GLOW_ALPHA);
                for tap in 0..GLOW_TAPS {
                    let angle = tap as f32 / GLOW_TAPS as f32 * std::f32::consts::TAU;
                    let offset = egui::vec2(angle.cos(), angle.sin()) * radius;
                    painter.galley_with_override_text_color(
                        item.rect.min + offset,
                        item.galley.clone(),
                        halo,
                    );
                }
            }
            painter.galley(item.rect.min, item.galley.clone(), item.color);
        }

        if self.show_diagnostics {
            self.diagnostics(ctx, scene, camera, stats);
        }
    }

    /// Project and lay out every visible billboard, nearest first
    fn place(
        &self,
        painter: &egui::Painter,
        scene: &Scene,
        camera: &Camera,
        screen: Rect,
    ) -> Vec<Placed> {
        let viewport = Vec2::new(screen.width(), screen.height());
        let focal = camera.focal_length(screen.height());
        let fog = scene.fog();

        let phrase = scene.phrase();
        let billboards = scene
            .words()
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| Billboard {
                target: HoverTarget::Word(i),
                text: word.label(),
                position: word.position,
                color: word.color(),
                glow: false,
            })
            .chain(std::iter::once(Billboard {
                target: HoverTarget::Phrase,
                text: phrase.text(),
                position: phrase.position,
                color: scene.base_text_color(),
                glow: phrase.has_glow(),
            }));

        let mut placed: Vec<Placed> = billboards
            .filter_map(|billboard| {
                let projected = camera.project(billboard.position, viewport)?;
                let size = text_size_px(self.font_size, focal, projected.depth);
                if size < MIN_TEXT_PX {
                    return None;
                }

                let fogged = fog.apply(billboard.color, projected.depth);
                let color = Color32::from(Rgba::from_rgb(fogged[0], fogged[1], fogged[2]));

                let job = LayoutJob::single_section(
                    billboard.text.to_owned(),
                    TextFormat {
                        font_id: FontId::proportional(size),
                        extra_letter_spacing: self.letter_spacing * size,
                        line_height: Some(size),
                        color,
                        ..Default::default()
                    },
                );
                let galley = painter.layout_job(job);

                let center = screen.min + egui::vec2(projected.screen.x, projected.screen.y);
                let rect = Rect::from_center_size(center, galley.size());

                Some(Placed {
                    target: billboard.target,
                    depth: projected.depth,
                    rect,
                    galley,
                    color,
                    glow: billboard.glow,
                })
            })
            .collect();

        placed.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        placed
    }

    fn diagnostics(&self, ctx: &egui::Context, scene: &Scene, camera: &Camera, stats: Stats) {
        let frustum = camera.frustum();

        egui::Window::new("Diagnostics")
            .title_bar(true)
            .resizable(false)
            .fixed_pos(Pos2::new(10.0, 10.0))
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", stats.fps))
                        .size(28.0)
                        .color(Color32::from_rgb(74, 158, 255)),
                );
                let frame_time_ms = if stats.fps > 0.0 {
                    1000.0 / stats.fps
                } else {
                    0.0
                };
                ui.label(
                    egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                        .size(14.0)
                        .color(Color32::GRAY),
                );

                ui.add_space(6.0);
                ui.separator();

                ui.label(
                    egui::RichText::new("Camera")
                        .size(16.0)
                        .color(Color32::from_rgb(100, 200, 100)),
                );
                ui.monospace(format!(
                    "Pos: ({:.2}, {:.2}, {:.2})",
                    camera.position.x, camera.position.y, camera.position.z
                ));
                ui.monospace(format!("Distance: {:.2}", camera.distance_to_target()));
                let mode = if scene.is_zooming() {
                    "zoom"
                } else {
                    scene.controls_name()
                };
                ui.monospace(format!("Mode: {}", mode));

                ui.add_space(6.0);
                ui.separator();

                ui.label(
                    egui::RichText::new("Frustum")
                        .size(16.0)
                        .color(Color32::from_rgb(200, 100, 200)),
                );
                ui.monospace(format!(
                    "Near: {:.2} x {:.2}",
                    frustum.near_width, frustum.near_height
                ));
                ui.monospace(format!(
                    "Far: {:.1} x {:.1}",
                    frustum.far_width, frustum.far_height
                ));

                ui.add_space(6.0);
                ui.separator();

                ui.monospace(format!("Words: {}", scene.words().len()));
                ui.monospace(format!("Stars: {}", scene.stars().len()));
                ui.monospace(format!(
                    "Hover: {}",
                    scene.hovered_label().unwrap_or("-")
                ));
            });
    }
}
