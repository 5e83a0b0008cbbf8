use std::f64::consts::TAU;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::reveal::score::RING_CIRCUMFERENCE;

/// Number of dots drawn around the ring.
const RING_DOTS: usize = 40;

/// Circular score gauge: dots clockwise from twelve o'clock, filled up to
/// `fill` out of [`RING_CIRCUMFERENCE`], with the score label in the middle.
pub struct ScoreRing<'a> {
    fill: f64,
    label: &'a str,
    filled: Style,
    empty: Style,
}

impl<'a> ScoreRing<'a> {
    pub fn new(fill: f64, label: &'a str) -> Self {
        Self {
            fill,
            label,
            filled: Style::default(),
            empty: Style::default().add_modifier(Modifier::DIM),
        }
    }

    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled = style;
        self
    }

    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty = style;
        self
    }

    /// Dots lit for the current fill.
    pub fn lit_dots(&self) -> usize {
        let share = (self.fill / RING_CIRCUMFERENCE).clamp(0.0, 1.0);
        (share * RING_DOTS as f64).round() as usize
    }
}

impl Widget for ScoreRing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height < 3 {
            return;
        }
        // Terminal cells are about twice as tall as wide.
        let radius_y = f64::from(area.height - 1) / 2.0;
        let radius_x = (radius_y * 2.0).min(f64::from(area.width - 1) / 2.0);
        let center_x = f64::from(area.x) + f64::from(area.width - 1) / 2.0;
        let center_y = f64::from(area.y) + f64::from(area.height - 1) / 2.0;

        let lit = self.lit_dots();
        for dot in 0..RING_DOTS {
            let angle = dot as f64 / RING_DOTS as f64 * TAU;
            let x = (center_x + radius_x * angle.sin()).round() as u16;
            let y = (center_y - radius_y * angle.cos()).round() as u16;
            let (symbol, style) = if dot < lit {
                ("●", self.filled)
            } else {
                ("·", self.empty)
            };
            buf.set_string(x, y, symbol, style);
        }

        let label_width = self.label.chars().count() as u16;
        let x = (center_x.round() as u16).saturating_sub(label_width / 2);
        buf.set_string(
            x.max(area.x),
            center_y.round() as u16,
            self.label,
            self.filled.add_modifier(Modifier::BOLD),
        );
    }
}
