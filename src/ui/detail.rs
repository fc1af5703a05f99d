// Project detail panel.
// Problem/approach/outcome narrative for the selected project.

use ratatui::{prelude::*, widgets::*};

use crate::content::MajorProject;
use crate::theme::Theme;

/// Draw the detail panel beside the projects list.
pub fn draw_project_detail(frame: &mut Frame, project: &MajorProject, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            match &project.year {
                Some(year) => format!("{} · {}", project.company, year),
                None => project.company.clone(),
            },
            Style::default().fg(theme.muted()),
        )),
        Line::from(""),
    ];

    for (heading, body) in [
        ("Problem", &project.problem),
        ("Approach", &project.approach),
        ("Outcome", &project.outcome),
    ] {
        lines.push(Line::from(Span::styled(
            heading,
            Style::default()
                .fg(theme.fg())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(body.clone())));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("Tech: {}", project.technologies.join(", ")),
        Style::default().fg(Color::Cyan),
    )));

    if let Some(url) = &project.live_url {
        lines.push(Line::from(Span::styled(
            format!("Live: {}", url),
            Style::default().fg(Color::Blue),
        )));
    }
    if let Some(url) = &project.github_url {
        lines.push(Line::from(Span::styled(
            format!("Code: {}", url),
            Style::default().fg(Color::Blue),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Detail "));

    frame.render_widget(paragraph, area);
}
