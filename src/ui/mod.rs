// UI module for rendering the TUI.
// Tab bar, per-view content, modals, and the status bar.

mod detail;
mod form;
mod list;
mod modal;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::LoadingState;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Overlays render last, on top of everything.
    if app.cv.open {
        modal::draw_cv_modal(frame, &app.cv, &app.theme);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on the active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Dashboard => draw_dashboard(frame, app, area),
        Tab::Projects => draw_projects(frame, app, area),
        Tab::Journey => draw_journey(frame, app, area),
        Tab::Lab => draw_lab(frame, app, area),
        Tab::Contact => draw_contact(frame, app, area),
        Tab::SideMissions => draw_missions(frame, app, area),
    }
}

/// Dashboard: hero with typewriter one-liner, then the skills list.
fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Hero
            Constraint::Min(3),    // Skills
        ])
        .split(area);

    let hero = app.content.hero();
    let theme = &app.theme;

    let hero_lines = vec![
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.tagline.clone(),
            Style::default().fg(theme.fg()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                app.typewriter.visible(&hero.one_liner).to_string(),
                Style::default().fg(theme.muted()),
            ),
            Span::styled(
                if app.typewriter.done(&hero.one_liner) {
                    ""
                } else {
                    "▌"
                },
                Style::default().fg(theme.accent()),
            ),
        ]),
    ];

    let hero_widget = Paragraph::new(hero_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero_widget, chunks[0]);

    let skills = Line::from(
        app.content
            .skills()
            .iter()
            .flat_map(|skill| {
                vec![
                    Span::styled(format!(" {} ", skill), Style::default().fg(theme.accent())),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>(),
    );

    let skills_widget = Paragraph::new(skills)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Skills "));
    frame.render_widget(skills_widget, chunks[1]);
}

/// Projects: list on the left, detail panel when opened.
fn draw_projects(frame: &mut Frame, app: &mut App, area: Rect) {
    let projects = app.content.major_projects().to_vec();

    if app.projects.detail_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        list::render_projects_list(frame, &mut app.projects, &projects, &app.theme, chunks[0]);
        if let Some(project) = app.projects.selected(&projects) {
            detail::draw_project_detail(frame, project, &app.theme, chunks[1]);
        }
    } else {
        list::render_projects_list(frame, &mut app.projects, &projects, &app.theme, area);
    }
}

/// Journey: timeline list with the selected entry expanded below.
fn draw_journey(frame: &mut Frame, app: &mut App, area: Rect) {
    let entries = app.content.journey().to_vec();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(7)])
        .split(area);

    list::render_journey_list(frame, &mut app.journey, &entries, &app.theme, chunks[0]);

    if let Some(entry) = app.journey.selected(&entries) {
        let detail = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} · {}", entry.location, entry.duration),
                Style::default().fg(app.theme.muted()),
            )),
            Line::from(Span::raw(entry.description.clone())),
            Line::from(Span::styled(
                format!("Tech: {}", entry.technologies.join(", ")),
                Style::default().fg(Color::Cyan),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Role "));
        frame.render_widget(detail, chunks[1]);
    }
}

/// Lab: theme experiments. Hue gauge, accent swatch, mode display.
fn draw_lab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hue gauge
            Constraint::Length(3), // Swatch
            Constraint::Min(3),    // Notes
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Accent hue: {}° ", theme.hue)),
        )
        .gauge_style(Style::default().fg(theme.accent()))
        .ratio(f64::from(theme.hue) / 360.0);
    frame.render_widget(gauge, chunks[0]);

    let swatch = Paragraph::new(Line::from(Span::styled(
        "████████████████████",
        Style::default().fg(theme.accent()),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Mode: {} ", theme.mode.label())),
    );
    frame.render_widget(swatch, chunks[1]);

    let notes = Paragraph::new(vec![
        Line::from("Experimental playground for the site theme."),
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" shift hue   "),
            Span::styled("t", Style::default().fg(Color::Yellow)),
            Span::raw(" toggle dark/light   "),
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" replay hero animation"),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Lab "));
    frame.render_widget(notes, chunks[2]);
}

/// Contact: form on the left, contact card on the right.
fn draw_contact(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    form::draw_contact_form(frame, &app.contact, &app.theme, chunks[0]);
    form::draw_contact_card(frame, app.content.contact(), &app.theme, chunks[1]);
}

/// Side Missions: fetched repos, a loading state, or the static fallback
/// with an inline error banner.
fn draw_missions(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.missions.data {
        LoadingState::Idle | LoadingState::Loading => {
            list::render_loading(frame, area, "Loading repositories");
        }
        LoadingState::Loaded(_) => {
            list::render_missions_list(frame, &mut app.missions, &app.theme, area);
        }
        LoadingState::Error(error) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(area);

            let banner = Paragraph::new(format!("❌ {} (showing bundled list)", error))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(banner, chunks[0]);

            let missions = app.content.side_missions().to_vec();
            list::render_fallback_missions(frame, &missions, &app.theme, chunks[1]);
        }
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
    ];

    match app.active_tab {
        Tab::Projects => {
            hints.extend([
                Span::raw("  ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↵ "),
                Span::styled("Detail", Style::default().fg(Color::DarkGray)),
                Span::raw("  Esc "),
                Span::styled("Close", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Tab::Journey => {
            hints.extend([
                Span::raw("  ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Tab::Lab => {
            hints.extend([
                Span::raw("  ←→ "),
                Span::styled("Hue", Style::default().fg(Color::DarkGray)),
                Span::raw("  t "),
                Span::styled("Mode", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Tab::Contact => {
            hints.extend([
                Span::raw("  ↑↓ "),
                Span::styled("Field", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↵ "),
                Span::styled("Send", Style::default().fg(Color::DarkGray)),
                Span::raw("  ^D "),
                Span::styled("CV", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Tab::SideMissions => {
            hints.extend([
                Span::raw("  ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
                Span::raw("  ←→ "),
                Span::styled("Page", Style::default().fg(Color::DarkGray)),
                Span::raw("  r "),
                Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            ]);
        }
        Tab::Dashboard => {}
    }

    hints.extend([
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  [{}]", app.theme.mode.label()),
            Style::default().fg(app.theme.muted()),
        ),
    ]);

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 55;
    let popup_height = 18;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        entry("Tab/Shift+Tab", "Switch views"),
        entry("↑/↓ or j/k", "Navigate lists / form fields"),
        entry("←/→", "Page repos / shift hue (Lab)"),
        entry("Enter", "Open detail / submit form"),
        entry("Esc", "Close detail, modal, or help"),
        entry("r", "Refresh repositories"),
        entry("t", "Toggle dark/light (Lab)"),
        entry("Ctrl+D", "Download CV (Contact)"),
        entry("?", "Show/hide this help"),
        entry("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
