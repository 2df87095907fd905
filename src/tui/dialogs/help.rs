use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::{app::AppState, ui::theme::THEME_NAMES};
use crate::tui::dialogs::centered;

const HELP_HEIGHT: u16 = 24;

pub fn render(f: &mut Frame, app: &AppState) {
    let help_area = centered(f.size(), 62, HELP_HEIGHT);
    f.render_widget(Clear, help_area);

    let section = |name: &'static str| {
        Line::from(Span::styled(name, Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD)))
    };

    let help_text = vec![
        section("Navigation"),
        Line::from("  h/l      previous/next day"),
        Line::from("  j/k      next/previous week (month) or hour"),
        Line::from("  n/p      next/previous month, week or day"),
        Line::from("  t        today"),
        Line::from("  m/w/d    month/week/day view"),
        Line::from(""),
        section("Events"),
        Line::from("  a        new event at the cursor"),
        Line::from("  Tab      cycle events of the selected day"),
        Line::from("  Enter    edit selected event"),
        Line::from("  x        delete selected event"),
        Line::from("  g        grab selected event, move, Enter to drop"),
        Line::from(""),
        section("Editor"),
        Line::from("  Tab/S-Tab  switch field"),
        Line::from("  Enter      save, Esc cancel, Del delete"),
        Line::from(""),
        section("Commands"),
        Line::from("  :q                 quit"),
        Line::from("  :goto YYYY-MM-DD   jump to a date"),
        Line::from("  :month :week :day  switch view"),
        Line::from("  :today             jump to today"),
        Line::from("  :new [title]       new event"),
        Line::from(format!("  :theme NAME        {}", THEME_NAMES.join(", "))),
        Line::from("  :help              this screen"),
    ];

    let visible_lines = HELP_HEIGHT.saturating_sub(2) as usize;
    let total_lines = help_text.len();
    let scroll = app.help_scroll.min(total_lines.saturating_sub(visible_lines));

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Help (j/k scroll, Esc close) ")
            .title_style(Style::default().fg(app.theme.title)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
