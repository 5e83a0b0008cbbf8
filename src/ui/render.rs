use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::deck::{SectionKind, SectionSpec};
use crate::effects::{fade_slots, FadeLevel};
use crate::quiz::{OptionMark, Outcome};
use crate::reveal::RevealStage;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{content_column, layout_regions};
use crate::ui::score_ring::ScoreRing;
use crate::ui::theme::{palette, Palette, ACCENT, STATUS_ERROR, STATUS_OK};

/// Widest the text column gets on large terminals.
const COLUMN_WIDTH: u16 = 76;
const CARET: &str = "▌";
const BUTTON_GAP: &str = "  ";

/// Title, content and control rows of a non-fade section.
struct SectionRegions {
    title: Rect,
    content: Rect,
    controls: Rect,
}

fn section_regions(area: Rect) -> SectionRegions {
    let column = content_column(area.inner(Margin::new(2, 1)), COLUMN_WIDTH);
    let [title, content, controls] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(column);
    SectionRegions {
        title,
        content,
        controls,
    }
}

/// Splits an input section's content into its body text and the field.
fn field_regions(content: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(content)
}

/// One row per quiz option, below the wrapped question and a blank line.
/// Options that do not fit are left out.
fn option_rows(content: Rect, question: &str, count: usize) -> Vec<Rect> {
    let question_rows = Paragraph::new(question)
        .wrap(Wrap { trim: false })
        .line_count(content.width) as u16;
    let first = content.y.saturating_add(question_rows + 1);
    (0..count as u16)
        .map(|k| Rect::new(content.x, first.saturating_add(k), content.width, 1))
        .take_while(|row| row.bottom() <= content.bottom())
        .collect()
}

/// Control under the screen cell `(column, row)`, with its section index.
pub fn control_at(app: &App, screen: Rect, column: u16, row: u16) -> Option<(usize, Control)> {
    let (_, body, _) = layout_regions(screen);
    if !body.contains(Position::new(column, row)) {
        return None;
    }
    let viewport = app.viewport();
    let height = u32::from(viewport.section_height());
    if height == 0 {
        return None;
    }
    let content_row = viewport.offset() + u32::from(row - body.y);
    let index = (content_row / height) as usize;
    let section = app.deck().sections.get(index)?;
    if !section.fade.is_empty() {
        return None;
    }
    let local = Position::new(column - body.x, (content_row % height) as u16);
    let regions = section_regions(Rect::new(0, 0, body.width, height as u16));

    if regions.controls.contains(local) {
        let palette = palette(app.theme());
        let mut x = regions.controls.x;
        for (control, button) in control_buttons(app, index, &palette) {
            let width = button.width() as u16;
            if (x..x + width).contains(&local.x) {
                return Some((index, control));
            }
            x += width + BUTTON_GAP.len() as u16;
        }
        return None;
    }

    let hit = match &section.kind {
        SectionKind::Quiz { question, .. } => {
            let (group, _) = app.quiz(index)?;
            option_rows(regions.content, question, group.options().len())
                .iter()
                .position(|rect| rect.contains(local))
                .map(Control::Option)
        }
        SectionKind::PointInput { .. } => field_regions(regions.content)[1]
            .contains(local)
            .then_some(Control::PointInput),
        SectionKind::EditPrompt => field_regions(regions.content)[1]
            .contains(local)
            .then_some(Control::PromptEditor),
        _ => None,
    };
    hit.map(|control| (index, control))
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let deck = app.deck();
    frame.render_widget(
        Header::new(
            &deck.title,
            app.focus_section(),
            deck.sections.len(),
            app.progress().map(|bar| bar.percent()),
        ),
        header,
    );
    render_body(frame.buffer_mut(), body, app);
    frame.render_widget(Footer::new(deck.is_interactive()).widget(footer), footer);
}

/// Renders each section overlapping the viewport into its own buffer and
/// copies the visible rows.
fn render_body(buf: &mut Buffer, area: Rect, app: &App) {
    if area.is_empty() {
        return;
    }
    let palette = palette(app.theme());
    let base = Style::default().bg(palette.background).fg(palette.text);
    buf.set_style(area, base);

    let viewport = app.viewport();
    let height = viewport.section_height();
    let offset = viewport.offset();
    let view_end = offset + u32::from(area.height);

    for index in 0..viewport.section_count() {
        let top = viewport.section_top(index);
        let bottom = top + u32::from(height);
        if bottom <= offset || top >= view_end {
            continue;
        }

        let section_area = Rect::new(0, 0, area.width, height);
        let mut scratch = Buffer::empty(section_area);
        scratch.set_style(section_area, base);
        render_section(&mut scratch, section_area, app, index, &palette);

        for row in top.max(offset)..bottom.min(view_end) {
            let src_y = (row - top) as u16;
            let dst_y = area.y + (row - offset) as u16;
            for x in 0..area.width {
                if let (Some(src), Some(dst)) =
                    (scratch.cell((x, src_y)), buf.cell_mut((area.x + x, dst_y)))
                {
                    *dst = src.clone();
                }
            }
        }
    }
}

fn render_section(buf: &mut Buffer, area: Rect, app: &App, index: usize, palette: &Palette) {
    let Some(section) = app.deck().sections.get(index) else {
        return;
    };

    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .render(area, buf);

    if !section.fade.is_empty() {
        render_fade_section(buf, area, app, index, section, palette);
        return;
    }

    let SectionRegions {
        title: title_area,
        content: content_area,
        controls: controls_area,
    } = section_regions(area);

    title_line(app, index, section, palette).render(title_area, buf);

    let body = Paragraph::new(section.body.as_str())
        .style(Style::default().fg(palette.muted))
        .wrap(Wrap { trim: false });

    match &section.kind {
        SectionKind::Intro | SectionKind::Content => body.render(content_area, buf),
        SectionKind::Quiz {
            question,
            explanation,
            ..
        } => render_quiz(buf, content_area, app, index, question, explanation, palette),
        SectionKind::PointInput { placeholder } => {
            let [body_area, field_area] = field_regions(content_area);
            body.render(body_area, buf);
            let focused = is_focused(app, index, Control::PointInput);
            text_field(app.point_input().value(), placeholder, focused, palette)
                .render(field_area, buf);
        }
        SectionKind::EditPrompt => {
            let [body_area, field_area] = field_regions(content_area);
            body.render(body_area, buf);
            let focused = is_focused(app, index, Control::PromptEditor);
            let placeholder = if app.reveal().stage == RevealStage::Drafting {
                "Drafting your prompt..."
            } else {
                "Your prompt appears here."
            };
            text_field(app.prompt_editor().value(), placeholder, focused, palette)
                .render(field_area, buf);
        }
        SectionKind::Result { .. } => render_result(buf, content_area, app, palette),
    }

    controls_line(app, index, palette).render(controls_area, buf);
}

fn title_line<'a>(
    app: &App,
    index: usize,
    section: &'a SectionSpec,
    palette: &Palette,
) -> Paragraph<'a> {
    let marker = if app.is_section_active(index) {
        Span::styled("● ", Style::default().fg(ACCENT))
    } else {
        Span::styled("○ ", Style::default().fg(palette.muted))
    };
    let title_style = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    let line = if app.deck().is_interactive() {
        Line::from(vec![marker, Span::styled(section.title.as_str(), title_style)])
    } else {
        Line::from(Span::styled(section.title.as_str(), title_style))
    };
    Paragraph::new(line)
}

fn render_quiz(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    index: usize,
    question: &str,
    explanation: &str,
    palette: &Palette,
) {
    let Some((group, answer)) = app.quiz(index) else {
        return;
    };
    let marks = answer.marks(group);
    let rows = option_rows(area, question, group.options().len());

    Paragraph::new(question)
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: false })
        .render(area, buf);

    for (option, ((spec, mark), row)) in group.options().iter().zip(marks).zip(&rows).enumerate() {
        let (symbol, style) = match mark {
            OptionMark::Correct => ("✓", Style::default().fg(STATUS_OK)),
            OptionMark::Wrong => ("✗", Style::default().fg(STATUS_ERROR)),
            OptionMark::Unmarked => (" ", Style::default().fg(palette.text)),
        };
        let mut style = style;
        if is_focused(app, index, Control::Option(option)) {
            style = style.bg(palette.focus).add_modifier(Modifier::BOLD);
        }
        Line::from(vec![
            Span::styled(format!(" [{symbol}] "), style),
            Span::styled(spec.label.as_str(), style),
        ])
        .render(*row, buf);
    }

    let explanation_top = rows.last().map_or(area.bottom(), |row| row.bottom() + 1);
    let explanation_area = Rect::new(
        area.x,
        explanation_top.min(area.bottom()),
        area.width,
        area.bottom().saturating_sub(explanation_top),
    );

    let Some(outcome) = answer.explanation() else {
        return;
    };
    let (heading, color) = match outcome {
        Outcome::Correct => ("Correct!", STATUS_OK),
        Outcome::Wrong => ("Not quite.", STATUS_ERROR),
    };
    Paragraph::new(explanation)
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    heading,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
        )
        .render(explanation_area, buf);
}

fn render_result(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let reveal = app.reveal();
    let [text_area, ring_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);

    let [speech_area, evaluation_area] = if reveal.evaluation_visible {
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(text_area)
    } else {
        [text_area, Rect::default()]
    };

    let speech = streamed_text(
        reveal.speech.revealed(),
        matches!(
            reveal.stage,
            RevealStage::PreparingSpeech | RevealStage::StreamingSpeech
        ),
        palette.text,
    );
    Paragraph::new(speech)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Response "),
        )
        .render(speech_area, buf);

    if reveal.evaluation_visible {
        let evaluation = streamed_text(
            reveal.evaluation.revealed(),
            reveal.stage == RevealStage::StreamingEval,
            palette.text,
        );
        Paragraph::new(evaluation)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title(" Evaluation "),
            )
            .render(evaluation_area, buf);
    }

    let label = reveal.score_label();
    ScoreRing::new(reveal.ring_fill(), &label)
        .filled_style(Style::default().fg(ACCENT))
        .empty_style(Style::default().fg(palette.border))
        .render(ring_area.inner(Margin::new(1, 1)), buf);
}

fn render_fade_section(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    index: usize,
    section: &SectionSpec,
    palette: &Palette,
) {
    let inset = area.inner(Margin::new(2, 0));
    let column = content_column(inset, COLUMN_WIDTH);
    let title_area = Rect::new(column.x, area.y + 1, column.width, 1);
    title_line(app, index, section, palette).render(title_area, buf);
    let body_area = Rect::new(column.x, area.y + 2, column.width, 1);
    Paragraph::new(section.body.as_str())
        .style(Style::default().fg(palette.muted))
        .render(body_area, buf);

    let slots = fade_slots(area.height, section.fade.len());
    for (slot, (item, (top, rows))) in section.fade.iter().zip(slots).enumerate() {
        let style = match app.fade_level(index, slot) {
            FadeLevel::Hidden => continue,
            FadeLevel::Rising => Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM),
            FadeLevel::Visible => Style::default().fg(palette.text),
        };
        let rows = rows.min(area.height.saturating_sub(top));
        Paragraph::new(item.as_str())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(Rect::new(column.x, area.y + top, column.width, rows), buf);
    }
}

fn text_field<'a>(
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { palette.border };
    let text = if value.is_empty() && !focused {
        Text::from(Span::styled(placeholder, Style::default().fg(palette.muted)))
    } else {
        let mut text = Text::styled(value, Style::default().fg(palette.text));
        if focused {
            let caret = Span::styled(CARET, Style::default().fg(ACCENT));
            match text.lines.last_mut() {
                Some(line) => line.push_span(caret),
                None => text.push_line(Line::from(caret)),
            }
        }
        text
    };
    Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    )
}

fn streamed_text(revealed: &str, typing: bool, color: Color) -> Text<'_> {
    let mut text = Text::styled(revealed, Style::default().fg(color));
    if typing {
        let caret = Span::styled(CARET, Style::default().fg(ACCENT));
        match text.lines.last_mut() {
            Some(line) => line.push_span(caret),
            None => text.push_line(Line::from(caret)),
        }
    }
    text
}

fn controls_line<'a>(app: &'a App, index: usize, palette: &Palette) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (_, button) in control_buttons(app, index, palette) {
        spans.push(button);
        spans.push(Span::raw(BUTTON_GAP));
    }
    Paragraph::new(Line::from(spans))
}

/// Buttons of a section's control row, in drawing order.
fn control_buttons<'a>(app: &'a App, index: usize, palette: &Palette) -> Vec<(Control, Span<'a>)> {
    let mut buttons = Vec::new();
    for control in app.controls_of(index) {
        if control.is_text_field() || matches!(control, Control::Option(_)) {
            continue;
        }
        let (label, enabled, primary) = match control {
            Control::Next => ("Next →", true, true),
            Control::Back => ("← Back", true, false),
            Control::Skip => (app.skip_label(index), true, app.skip_promoted(index)),
            Control::GeneratePrompt => (app.prompt_label(), app.prompt_enabled(), true),
            Control::GenerateSpeech => (app.speech_label(), app.speech_enabled(), true),
            Control::TryAgain => ("Try again", true, false),
            Control::Done => ("Done", true, true),
            Control::Option(_) | Control::PointInput | Control::PromptEditor => continue,
        };
        let mut style = if primary {
            Style::default().fg(Color::White).bg(ACCENT)
        } else {
            Style::default().fg(palette.text).bg(palette.focus)
        };
        if !enabled {
            style = style.add_modifier(Modifier::DIM);
        }
        if is_focused(app, index, control) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        buttons.push((control, Span::styled(format!(" {label} "), style)));
    }
    buttons
}

fn is_focused(app: &App, index: usize, control: Control) -> bool {
    app.focus_section() == index && app.focused_control() == Some(control)
}
