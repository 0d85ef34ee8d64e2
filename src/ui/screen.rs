//! Play field and summary screens

use crate::core::config::GradeThresholds;
use crate::game::state::State;
use crate::game::summary::{hourglass_asset, session_stage, Grade};
use crate::renderer::TextureCache;
use crate::tasks::catalog::TaskDatabase;
use crate::ui::layout::{
    scale_to_width, HOURGLASS_WIDTH, MEDAL_WIDTH, PICTURE_WIDTH, POSITION_WIDTH,
};
use egui::{Color32, RichText};
use std::path::Path;

const LARGE_FONT: f32 = 64.0;
const SMALL_FONT: f32 = 32.0;
const MARGIN: f32 = 10.0;

/// Draws the game from a read-only view of the session state
pub struct GameScreen {
    textures: TextureCache,
    grades: GradeThresholds,
}

impl GameScreen {
    pub fn new(textures: TextureCache, grades: GradeThresholds) -> Self {
        Self { textures, grades }
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn draw(&mut self, ctx: &egui::Context, state: &State, db: &TaskDatabase) {
        let surface_width = ctx.screen_rect().width();

        egui::TopBottomPanel::bottom("hint")
            .frame(black_frame())
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Press ESC or \"q\" to quit")
                        .size(SMALL_FONT)
                        .color(Color32::WHITE),
                );
            });

        egui::CentralPanel::default()
            .frame(black_frame())
            .show(ctx, |ui| {
                if state.game_over {
                    self.summary(ui, state, surface_width);
                } else {
                    self.play_field(ui, state, db, surface_width);
                }
            });
    }

    fn play_field(
        &mut self,
        ui: &mut egui::Ui,
        state: &State,
        db: &TaskDatabase,
        surface_width: f32,
    ) {
        let task = db.get(state.task);

        ui.horizontal_top(|row| {
            row.vertical(|left| {
                self.image(left, &task.expected_position, POSITION_WIDTH, surface_width);
                left.add_space(MARGIN);
                let stage = session_stage(state);
                self.image(left, &hourglass_asset(stage), HOURGLASS_WIDTH, surface_width);
            });

            row.add_space(5.0 * MARGIN);

            row.vertical(|right| {
                self.image(right, &task.picture, PICTURE_WIDTH, surface_width);
                right.add_space(5.0 * MARGIN);
                right.label(
                    RichText::new(format!("Score: {}", state.score))
                        .size(LARGE_FONT)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
        });
    }

    fn summary(&mut self, ui: &mut egui::Ui, state: &State, surface_width: f32) {
        ui.vertical_centered(|col| {
            col.label(
                RichText::new("Game Over")
                    .size(LARGE_FONT)
                    .strong()
                    .color(Color32::WHITE),
            );
            col.add_space(2.0 * MARGIN);
            col.label(
                RichText::new(format!("Score: {}", state.score))
                    .size(LARGE_FONT)
                    .color(Color32::WHITE),
            );
            col.add_space(2.0 * MARGIN);

            match Grade::for_score(state.score, &self.grades) {
                Some(grade) => {
                    self.image(col, &grade.medal_asset(), MEDAL_WIDTH, surface_width);
                    col.label(
                        RichText::new(grade.name())
                            .size(SMALL_FONT)
                            .color(Color32::WHITE),
                    );
                }
                None => {
                    col.label(
                        RichText::new("No medal this time")
                            .size(SMALL_FONT)
                            .color(Color32::GRAY),
                    );
                }
            }
        });
    }

    /// Add an image scaled to a share of the screen width
    fn image(&mut self, ui: &mut egui::Ui, relative: &Path, fraction: f32, surface_width: f32) {
        let ctx = ui.ctx().clone();
        let Some(texture) = self.textures.get_or_load(&ctx, relative) else {
            return;
        };
        let size = scale_to_width(texture.size_vec2(), fraction, surface_width);
        ui.add(
            egui::Image::new(egui::load::SizedTexture::new(texture.id(), size))
                .fit_to_exact_size(size),
        );
    }
}

fn black_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(Color32::BLACK)
        .inner_margin(egui::Margin::same(MARGIN))
}
