use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph, Widget};

/// Deck title plus the progress bar, when the deck has one.
pub struct Header<'a> {
    title: &'a str,
    section: usize,
    sections: usize,
    progress: Option<f64>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, section: usize, sections: usize, progress: Option<f64>) -> Self {
        Self {
            title,
            section,
            sections,
            progress,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{}/{}", self.section + 1, self.sections),
                separator_style,
            ),
        ]);

        let Some(percent) = self.progress else {
            Paragraph::new(line).render(inner, buf);
            return;
        };
        let [title_area, gauge_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Percentage(40)]).areas(inner);
        Paragraph::new(line).render(title_area, buf);
        LineGauge::default()
            .filled_style(Style::default().fg(ACCENT))
            .unfilled_style(separator_style)
            .label(format!("{percent:>3.0}%"))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .render(gauge_area, buf);
    }
}
