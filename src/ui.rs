use ratatui::{prelude::*, widgets::*};

use crate::models::{AttendanceStatus, GradeStatus, StudentStatus};
use crate::views::{grade_band, GradeBand};

/// Renders a single-line text input with its title
pub fn render_input<'a>(content: &'a str, title: &'a str, is_editing: bool) -> Paragraph<'a> {
    let style = if is_editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders a selectable list of pre-styled rows
pub fn render_list<'a>(items: Vec<ListItem<'a>>, title: String, is_focused: bool) -> List<'a> {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ")
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Grade color by share of the scale
pub fn grade_color(value: f64, max: u8) -> Color {
    if value <= 0.0 {
        return Color::DarkGray;
    }
    match grade_band(value, max) {
        GradeBand::Good => Color::Green,
        GradeBand::Average => Color::Yellow,
        GradeBand::Weak => Color::Red,
    }
}

/// Grade session workflow color
pub fn grade_status_color(status: GradeStatus) -> Color {
    match status {
        GradeStatus::Draft => Color::Gray,
        GradeStatus::Submitted => Color::Cyan,
        GradeStatus::Published => Color::Green,
        GradeStatus::Returned => Color::Magenta,
    }
}

/// Roll-call status color
pub fn attendance_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => Color::Green,
        AttendanceStatus::Absent => Color::Red,
        AttendanceStatus::Late => Color::Yellow,
    }
}

/// Student status color
pub fn student_status_color(status: StudentStatus) -> Color {
    match status {
        StudentStatus::Active => Color::Green,
        StudentStatus::Watch => Color::Yellow,
        StudentStatus::Suspended => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color_bands() {
        assert_eq!(grade_color(16.0, 20), Color::Green);
        assert_eq!(grade_color(11.0, 20), Color::Yellow);
        assert_eq!(grade_color(6.0, 20), Color::Red);
        assert_eq!(grade_color(0.0, 20), Color::DarkGray);
    }
}
