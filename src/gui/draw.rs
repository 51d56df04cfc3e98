use super::App;
use crate::{sparse::Cell, utils::Config, NiceInt};
use eframe::egui::{vec2, Align2, FontId, Pos2, Rect, Ui, Vec2};

/// Screen rectangle of `cell` on a canvas of `canvas_size` whose top left corner is `origin`.
///
/// Cell `(0, 0)` sits in the middle of the canvas; neighbouring squares are
/// separated by `Config::SQUARE_GAP` pixels.
pub fn cell_rect(cell: Cell, origin: Pos2, canvas_size: Vec2) -> Rect {
    let square = Vec2::splat(Config::SQUARE_SIZE);
    let center = origin + (canvas_size - square) / 2.;
    let pitch = Config::SQUARE_SIZE + Config::SQUARE_GAP;
    let min = center + vec2(cell.x as f32 * pitch, cell.y as f32 * pitch);
    Rect::from_min_size(min, square)
}

impl App {
    fn draw_generation(&self, ui: &Ui) {
        let canvas = ui.max_rect();
        let painter = ui.painter_at(canvas);
        let driver = self.driver.borrow();
        for cell in driver.current().iter() {
            let rect = cell_rect(cell, canvas.min, canvas.size());
            // skip squares that fell off screen
            if canvas.intersects(rect) {
                painter.rect_filled(rect, 0., Config::LIVE_COLOR);
            }
        }
    }

    fn draw_stats(&self, ui: &Ui) {
        let driver = self.driver.borrow();
        let text = format!(
            "Generation: {}\nPopulation: {}\nGenerations/s: {:.1}",
            NiceInt::from(driver.generation()),
            NiceInt::from(driver.current().population()),
            self.fps_limiter.fps(),
        );
        let corner = ui.max_rect().min + Vec2::splat(Config::TEXT_MARGIN);
        ui.painter().text(
            corner,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(Config::TEXT_SIZE),
            Config::TEXT_COLOR,
        );
    }

    pub fn draw(&self, ui: &Ui) {
        self.draw_generation(ui);
        self.draw_stats(ui);
    }
}
