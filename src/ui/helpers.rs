use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::form::{CustomerForm, FormField, NoticeLevel};

/// Column width reserved for field captions so every input starts at the same
/// x offset.
pub(crate) const LABEL_WIDTH: usize = 28;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the notice dialog.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Border and title colour for a notice.
pub(crate) fn notice_style(level: NoticeLevel) -> Style {
    let color = match level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    Style::default().fg(color)
}

fn caption(field: FormField) -> String {
    format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH)
}

/// Render one row of the form. Text inputs show their value or a placeholder,
/// the selector shows the current method between arrows, and the submit row
/// renders as a button.
pub(crate) fn build_field_line(form: &CustomerForm, field: FormField) -> Line<'static> {
    let is_active = form.active == field;
    let active_style = Style::default().fg(Color::Yellow);

    match field {
        FormField::Submit => {
            let style = if is_active {
                active_style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH)),
                Span::styled("[ Submit ]", style),
            ])
        }
        FormField::ContactMethod => {
            let style = if is_active {
                active_style
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(caption(field)),
                Span::styled(format!("< {} >", form.contact_method), style),
            ])
        }
        _ => {
            let value = form.value(field).unwrap_or_default();
            let placeholder = if field.is_required() {
                "<required>"
            } else {
                "<optional>"
            };

            let display = if value.is_empty() && !is_active {
                placeholder.to_string()
            } else {
                value.to_string()
            };

            let style = if is_active {
                active_style
            } else if value.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            Line::from(vec![Span::raw(caption(field)), Span::styled(display, style)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_inputs_show_placeholders_unless_focused() {
        let form = CustomerForm::default();
        assert!(text(&build_field_line(&form, FormField::Email)).ends_with("<required>"));
        assert!(text(&build_field_line(&form, FormField::Phone)).ends_with("<optional>"));
        // Name has focus, so it renders empty for the cursor to sit in.
        assert_eq!(text(&build_field_line(&form, FormField::Name)).trim_end(), "Name:");
    }

    #[test]
    fn selector_shows_current_method() {
        let mut form = CustomerForm::default();
        form.cycle_contact_method(true);
        let line = text(&build_field_line(&form, FormField::ContactMethod));
        assert!(line.starts_with("Preferred Contact Method:"));
        assert!(line.ends_with("< Phone >"));
    }
}
