//! Browse-mode list rendering.
//!
//! Rows are laid out at a fixed pitch of two lines: a gap line (where the
//! drop indicator appears) followed by the entry text. Row bounds are
//! re-recorded in content coordinates on every draw so pointer events always
//! resolve against what is actually on screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::util::unicode;

use super::super::app::{App, ROW_PITCH};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    app.list_area = area;
    app.bounds.clear();
    let len = app.store.len();
    if len == 0 {
        let hint = Line::styled(
            "  press a to add your first entry",
            Style::default().fg(app.theme.dim),
        );
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let height = area.height as i32;
    if !app.drag.is_dragging() {
        // Keep the keyboard cursor's row fully on screen.
        let top = ROW_PITCH * app.cursor as i32;
        if top < app.scroll_offset {
            app.scroll_offset = top;
        }
        if top + 1 >= app.scroll_offset + height {
            app.scroll_offset = top + 2 - height;
        }
    }
    let max_scroll = (ROW_PITCH * len as i32 - height).max(0);
    app.scroll_offset = app.scroll_offset.clamp(0, max_scroll);

    let drag_source = if app.drag.is_dragging() {
        app.drag.source()
    } else {
        None
    };
    let drag_target = app.drag.target();
    let text_width = (area.width as usize).saturating_sub(2);

    for (i, entry) in app.store.entries().iter().enumerate() {
        let gap = ROW_PITCH * i as i32;
        app.bounds.record(i, gap, gap + 1);

        if drag_target == Some(i) {
            let indicator = "─".repeat(area.width as usize);
            draw_line(
                frame,
                area,
                gap - app.scroll_offset,
                Line::styled(indicator, Style::default().fg(app.theme.accent)),
            );
        }

        let first = entry.split('\n').next().unwrap_or("");
        let preview = format!("  {}", unicode::truncate_to_width(first, text_width));
        let style = if drag_source == Some(i) {
            Style::default().fg(app.theme.drag_fg).bg(app.theme.drag_bg)
        } else if i == app.cursor && drag_source.is_none() {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.text)
        };
        draw_line(
            frame,
            area,
            gap + 1 - app.scroll_offset,
            Line::styled(preview, style),
        );
    }
}

fn draw_line(frame: &mut Frame, area: Rect, y: i32, line: Line) {
    if y < 0 || y >= area.height as i32 {
        return;
    }
    let rect = Rect {
        x: area.x,
        y: area.y + y as u16,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), rect);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{render_to_string, test_app};
    use crate::tui::app::ROW_PITCH;

    #[test]
    fn rows_render_at_fixed_pitch() {
        let mut app = test_app(&["first", "second"]);
        let screen = render_to_string(&mut app, 30, 8);
        let lines: Vec<&str> = screen.lines().collect();
        // Title, then gap/text pairs.
        assert!(lines[0].contains("2 entries"));
        assert_eq!(lines[2].trim(), "first");
        assert_eq!(lines[4].trim(), "second");
    }

    #[test]
    fn empty_list_shows_the_add_hint() {
        let mut app = test_app(&[]);
        let screen = render_to_string(&mut app, 40, 6);
        assert!(screen.contains("press a to add"));
    }

    #[test]
    fn long_entries_truncate_with_ellipsis() {
        let mut app = test_app(&["a very long entry that cannot possibly fit"]);
        let screen = render_to_string(&mut app, 16, 6);
        assert!(screen.contains('…'), "screen:\n{screen}");
    }

    #[test]
    fn multi_line_entries_preview_their_first_line() {
        let mut app = test_app(&["headline\ndetail below"]);
        let screen = render_to_string(&mut app, 30, 6);
        assert!(screen.contains("headline"));
        assert!(!screen.contains("detail below"));
    }

    #[test]
    fn draw_records_resolvable_bounds() {
        let mut app = test_app(&["a", "b", "c"]);
        render_to_string(&mut app, 30, 10);
        for i in 0..3 {
            let y = ROW_PITCH * i as i32 + 1;
            assert_eq!(app.bounds.resolve_index(y, 0), Some(i));
        }
    }

    #[test]
    fn drop_indicator_appears_in_the_target_gap() {
        let mut app = test_app(&["a", "b", "c"]);
        render_to_string(&mut app, 20, 10);
        app.drag.press(0, 2, 1);
        // Move over row 2's text line.
        app.drag.moved(5, 0, &app.bounds);
        let screen = render_to_string(&mut app, 20, 10);
        let lines: Vec<&str> = screen.lines().collect();
        // Row 2's gap is content line 4; plus the title row.
        assert!(lines[5].contains('─'), "screen:\n{screen}");
    }
}
