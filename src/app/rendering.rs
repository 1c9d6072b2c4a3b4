use std::io;

use crossterm::style::Stylize;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal, TerminalOptions, Viewport,
};

use super::App;

impl App {
    /// One styled line per button, with the focus attribute on the selected one.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, button)| button.render().to_line(&self.palette, self.selected == Some(i)))
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .title(" Sidebar ")
            .title_style(Style::default().fg(self.theme.colors.accent.to_color()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.colors.muted.to_color()));

        let items: Vec<ListItem> = self.lines().into_iter().map(ListItem::new).collect();
        let mut state = ListState::default();
        state.select(self.selected);
        frame.render_stateful_widget(List::new(items).block(block), chunks[0], &mut state);

        let status = Line::from(Span::styled(
            self.state().status_line(),
            Style::default().fg(self.theme.colors.muted.to_color()),
        ));
        frame.render_widget(Paragraph::new(status), chunks[1]);
    }

    /// Draw once below the cursor without taking over the screen.
    pub fn draw_inline(&self) -> io::Result<()> {
        let height = inline_height(self.buttons.len());
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        terminal.draw(|frame| self.render(frame, frame.area()))?;
        println!();
        Ok(())
    }

    /// Unstyled rendition for pipes and logs.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .buttons
            .iter()
            .enumerate()
            .map(|(i, button)| {
                let marker = if self.selected == Some(i) { ">" } else { " " };
                format!("{}{}", marker, button.render().text())
            })
            .collect();
        lines.push(self.state().status_line());
        lines
    }

    pub fn print_plain(&self) {
        for (i, line) in self.plain_lines().into_iter().enumerate() {
            if self.selected == Some(i) {
                println!("{}", line.as_str().bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Viewport rows for `rows` list entries: two borders plus the status line.
fn inline_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(3)
}
