use crate::tui::component::Component;
use crate::tui::components::TitleBar;
use crate::tui::host::PresentationHost;
use crate::tui::shell::{HELP_TEXT, Shell};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, shell: &Shell) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar::from_navigator(&shell.navigator).render(frame, title_area);

    PresentationHost::new(&shell.navigator, &shell.destinations, &shell.root)
        .render(frame, main_area);

    // Footer: last status, else key help
    let footer = if shell.status_message.is_empty() {
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            shell.status_message.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}
