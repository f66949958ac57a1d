use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_basic() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        };

        let popup = centered_popup(frame, 40, 20);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        };

        let popup = centered_popup(frame, 200, 100);

        assert_eq!(popup.width, 100);
        assert_eq!(popup.height, 50);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_centered_popup_respects_offset_area() {
        let area = Rect {
            x: 10,
            y: 4,
            width: 40,
            height: 10,
        };

        let popup = centered_popup(area, 20, 4);

        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 7);
    }
}
