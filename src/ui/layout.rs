use ratatui::layout::{Constraint, Layout, Rect};

/// Header, body and footer of the full frame.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Horizontally centered column of at most `max_width` cells.
pub fn content_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_frame() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body, Rect::new(0, 3, 80, 18));
    }

    #[test]
    fn tiny_frames_collapse_the_body() {
        let (_, body, _) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(body.height, 0);
    }

    #[test]
    fn column_is_centered() {
        let column = content_column(Rect::new(0, 0, 100, 10), 60);
        assert_eq!(column, Rect::new(20, 0, 60, 10));
    }
}
