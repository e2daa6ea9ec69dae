use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::warn;

use crate::db::RecordStore;
use crate::form::{CustomerForm, FormField, Notice, NoticeLevel};

use super::helpers::{build_field_line, centered_rect, notice_style, LABEL_WIDTH};

/// Window title shown on the outer frame.
pub const WINDOW_TITLE: &str = "Customer Information Management System";
/// Footer space reserved for the key binding summary.
const FOOTER_HEIGHT: u16 = 3;

/// Application context: the store handle, the form and whichever notice is
/// on screen. Built once in `main` and handed to the event loop.
pub struct App {
    store: RecordStore,
    form: CustomerForm,
    notice: Option<Notice>,
    records_on_file: Option<i64>,
}

impl App {
    pub fn new(store: RecordStore) -> Self {
        let mut app = Self {
            store,
            form: CustomerForm::default(),
            notice: None,
            records_on_file: None,
        };
        app.refresh_count();
        app
    }

    /// Route a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.notice.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return false;
        }

        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left if self.form.active == FormField::ContactMethod => {
                self.form.cycle_contact_method(false)
            }
            KeyCode::Right | KeyCode::Char(' ')
                if self.form.active == FormField::ContactMethod =>
            {
                self.form.cycle_contact_method(true)
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        false
    }

    /// Ctrl+S submits from anywhere, except while a notice is waiting to be
    /// acknowledged.
    pub(crate) fn handle_ctrl_s(&mut self) {
        if self.notice.is_none() {
            self.submit();
        }
    }

    fn submit(&mut self) {
        let notice = self.form.submit(&self.store);
        if notice.level == NoticeLevel::Info {
            self.refresh_count();
        }
        self.notice = Some(notice);
    }

    fn refresh_count(&mut self) {
        self.records_on_file = match self.store.count() {
            Ok(count) => Some(count),
            Err(err) => {
                warn!(error = %err, "could not count customers");
                None
            }
        };
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_form(frame, content_area);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Some(notice) = &self.notice {
            self.draw_notice(frame, area, notice);
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(WINDOW_TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let count_text = match self.records_on_file {
            Some(count) => format!("Customers on file: {count}"),
            None => "Customers on file: unavailable".to_string(),
        };

        let mut lines = vec![
            Line::from(Span::styled(count_text, Style::default().fg(Color::Gray))),
            Line::from(""),
        ];
        for field in FormField::ALL {
            if field == FormField::Submit {
                lines.push(Line::from(""));
            }
            lines.push(build_field_line(&self.form, field));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        if self.notice.is_none() && self.form.active.is_text() {
            if let Some(row) = FormField::ALL.iter().position(|f| *f == self.form.active) {
                let value_len = self
                    .form
                    .value(self.form.active)
                    .map(|value| value.chars().count())
                    .unwrap_or(0);
                let cursor_x = inner.x + (LABEL_WIDTH + value_len) as u16;
                let cursor_y = inner.y + 2 + row as u16;
                if cursor_x < inner.right() && cursor_y < inner.bottom() {
                    frame.set_cursor_position((cursor_x, cursor_y));
                }
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.footer_instructions()).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        if self.notice.is_some() {
            return Line::from(vec![
                Span::styled("[Enter/Esc]", key_style),
                Span::raw(" Dismiss"),
            ]);
        }

        let mut spans = vec![
            Span::styled("[Tab/↑↓]", key_style),
            Span::raw(" Move   "),
        ];
        if self.form.active == FormField::ContactMethod {
            spans.push(Span::styled("[←→]", key_style));
            spans.push(Span::raw(" Change   "));
        }
        spans.extend([
            Span::styled("[Enter/Ctrl+S]", key_style),
            Span::raw(" Submit   "),
            Span::styled("[Esc]", key_style),
            Span::raw(" Quit"),
        ]);
        Line::from(spans)
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let style = notice_style(notice.level);
        let block = Block::default()
            .title(Span::styled(notice.title.clone(), style.add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_style(style);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
