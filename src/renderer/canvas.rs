//! Canvas 2D renderer
//!
//! Draws the line track, the player circle, and the score overlay. Runs on
//! its own cadence (one pass per animation frame) and keeps running after
//! the session ends to show the terminal screen.

use web_sys::CanvasRenderingContext2d;

use crate::format_thousands;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameSession};

const HUD_FONT: &str = "bold 30px Helvetica";

/// Renderer over a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    settings: Settings,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: i32, height: i32, settings: Settings) -> Self {
        Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
            settings,
        }
    }

    /// Draw one frame of the session
    pub fn draw(&self, session: &GameSession) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        // Each line is two segments with the hole skipped between them
        ctx.set_stroke_style_str(&self.settings.line_color);
        for line in session.track.iter() {
            let y = f64::from(line.y);
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(f64::from(line.hole_start), y);
            ctx.move_to(f64::from(line.hole_end()), y);
            ctx.line_to(self.width, y);
            ctx.stroke();
            ctx.close_path();
        }

        ctx.begin_path();
        ctx.set_fill_style_str(&self.settings.player_color);
        let _ = ctx.arc(
            f64::from(session.player.pos.x),
            f64::from(session.player.pos.y),
            f64::from(session.player.radius),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.close_path();
        ctx.fill();

        match session.phase {
            GamePhase::Running => {
                if self.settings.show_score {
                    self.draw_score(session.score);
                }
            }
            GamePhase::Over => self.draw_final_panel(session.score),
        }
    }

    /// Running score in the top-left corner
    fn draw_score(&self, score: u64) {
        let ctx = &self.ctx;
        ctx.set_font(HUD_FONT);
        ctx.set_fill_style_str(&self.settings.player_color);
        let _ = ctx.fill_text(&format_thousands(score), 20.0, 50.0);
    }

    /// Centered terminal panel with the final score
    fn draw_final_panel(&self, score: u64) {
        let ctx = &self.ctx;
        let line_one = "YOU LOST.";
        let line_two = format!("Final score: {}", format_thousands(score));

        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;

        ctx.set_font(HUD_FONT);
        let line_one_width = self.text_width(line_one);
        let line_two_width = self.text_width(&line_two);

        // Panel sized to the wider line of text
        ctx.begin_path();
        ctx.rect(
            center_x - line_two_width / 2.0 - 20.0,
            center_y - 80.0,
            line_two_width + 40.0,
            160.0,
        );
        ctx.set_fill_style_str("grey");
        ctx.fill();
        ctx.stroke();
        ctx.close_path();

        ctx.set_fill_style_str("black");
        let _ = ctx.fill_text(line_one, center_x - line_one_width / 2.0, center_y - 30.0);
        let _ = ctx.fill_text(&line_two, center_x - line_two_width / 2.0, center_y + 30.0);
    }

    fn text_width(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0)
    }
}
