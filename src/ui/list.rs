// List rendering for the portfolio views.
// Styled lists with loading, error, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::content::{JourneyEntry, MajorProject, SideMission};
use crate::github::RepoSummary;
use crate::state::{JourneyState, MissionsState, ProjectsState};
use crate::theme::Theme;

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the major projects list.
pub fn render_projects_list(
    frame: &mut Frame,
    state: &mut ProjectsState,
    projects: &[MajorProject],
    theme: &Theme,
    area: Rect,
) {
    if projects.is_empty() {
        render_empty(frame, area, "No projects");
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            let mut spans = vec![
                Span::styled(&project.title, Style::default().fg(theme.accent())),
                Span::styled(
                    format!("  {}", project.company),
                    Style::default().fg(theme.muted()),
                ),
            ];
            if let Some(year) = &project.year {
                spans.push(Span::styled(
                    format!("  ({})", year),
                    Style::default().fg(theme.muted()),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Projects "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut state.list_state);
}

/// Render the career timeline.
pub fn render_journey_list(
    frame: &mut Frame,
    state: &mut JourneyState,
    entries: &[JourneyEntry],
    theme: &Theme,
    area: Rect,
) {
    if entries.is_empty() {
        render_empty(frame, area, "No journey entries");
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(&entry.position, Style::default().fg(theme.accent())),
                Span::styled(
                    format!("  {}", entry.company),
                    Style::default().fg(theme.fg()),
                ),
                Span::styled(
                    format!("  {}", entry.duration),
                    Style::default().fg(theme.muted()),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Journey "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut state.list_state);
}

/// Render the fetched repository list for the current page.
pub fn render_missions_list(frame: &mut Frame, state: &mut MissionsState, theme: &Theme, area: Rect) {
    let page = state.page + 1;
    let pages = state.page_count().max(1);
    let title = format!(" GitHub Repositories [page {}/{}] ", page, pages);

    // Clone the page so the items do not borrow `state` while the
    // stateful render needs `list_state` mutably.
    let repos = state.current_page_items().to_vec();
    let items: Vec<ListItem> = repos.iter().map(|repo| repo_line(repo, theme)).collect();

    if items.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(title);
        let text = Paragraph::new("No repositories found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted()))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut state.list_state);
}

fn repo_line<'a>(repo: &'a RepoSummary, theme: &Theme) -> ListItem<'a> {
    let mut spans = vec![Span::styled(
        &repo.name,
        Style::default().fg(theme.accent()),
    )];

    if let Some(language) = &repo.language {
        spans.push(Span::styled(
            format!("  {}", language),
            Style::default().fg(Color::Magenta),
        ));
    }

    spans.push(Span::styled(
        format!("  ★ {}", repo.stargazers_count),
        Style::default().fg(Color::Yellow),
    ));

    if let Some(updated) = &repo.updated_at {
        spans.push(Span::styled(
            format!("  {}", format_relative_time(updated)),
            Style::default().fg(theme.muted()),
        ));
    }

    if let Some(description) = &repo.description {
        spans.push(Span::styled(
            format!("  {}", description),
            Style::default().fg(theme.fg()),
        ));
    }

    if !repo.topics.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", repo.topics.join(", ")),
            Style::default().fg(Color::Cyan),
        ));
    }

    ListItem::new(Line::from(spans))
}

/// Render the bundled side missions when the remote listing failed.
pub fn render_fallback_missions(
    frame: &mut Frame,
    missions: &[SideMission],
    theme: &Theme,
    area: Rect,
) {
    let items: Vec<ListItem> = missions
        .iter()
        .map(|mission| {
            ListItem::new(Line::from(vec![
                Span::styled(&mission.title, Style::default().fg(theme.accent())),
                Span::styled(
                    format!("  {}", mission.description),
                    Style::default().fg(theme.fg()),
                ),
                Span::styled(
                    format!("  [{}]", mission.technologies.join(", ")),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Side Missions (offline) "),
    );

    frame.render_widget(list_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(3))), "3h ago");
        assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    }

    #[test]
    fn test_render_missions_list_with_selection() {
        let mut state = MissionsState::new();
        state.begin_fetch();
        state.set_loaded(vec![RepoSummary {
            id: 1,
            name: "tidewatch".to_string(),
            description: Some("tide tables offline".to_string()),
            html_url: "https://github.com/demo/tidewatch".to_string(),
            homepage: None,
            topics: vec!["cli".to_string()],
            language: Some("Rust".to_string()),
            stargazers_count: 12,
            updated_at: None,
        }]);

        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_missions_list(frame, &mut state, &Theme::default(), frame.area())
            })
            .unwrap();

        let rendered = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(rendered.contains("tidewatch"));
        assert!(rendered.contains("page 1/1"));
        assert_eq!(state.list_state.selected(), Some(0));
    }
}
