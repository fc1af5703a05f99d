// Modal UI components.
// The CV download dialog rendered on top of the current view.

use ratatui::{prelude::*, widgets::*};

use crate::state::CvModalState;
use crate::theme::Theme;

/// Draw the CV download modal: email input, status, and instructions.
pub fn draw_cv_modal(frame: &mut Frame, modal: &CvModalState, theme: &Theme) {
    let area = frame.area();

    let modal_width = 60;
    let modal_height = 12;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email input
            Constraint::Min(1),    // Status
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()))
        .title(" Download CV ");

    let input_line = Line::from(vec![
        Span::styled("Email: ", Style::default().fg(theme.muted())),
        Span::raw(modal.email.clone()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let input_widget = Paragraph::new(input_line).block(input_block);
    frame.render_widget(input_widget, chunks[0]);

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted()));

    let mut status_lines = vec![Line::from(Span::styled(
        "The password will be sent to your email.",
        Style::default().fg(theme.muted()),
    ))];

    if modal.busy {
        status_lines.push(Line::from(Span::styled(
            "Processing...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(outcome) = &modal.email_outcome {
        let color = if outcome.success { Color::Green } else { Color::Red };
        status_lines.push(Line::from(Span::styled(
            outcome.message.clone(),
            Style::default().fg(color),
        )));
    }
    match &modal.download_result {
        Some(Ok(path)) => status_lines.push(Line::from(Span::styled(
            format!("Saved to {}", path.display()),
            Style::default().fg(Color::Green),
        ))),
        Some(Err(e)) => status_lines.push(Line::from(Span::styled(
            format!("Download failed: {}", e),
            Style::default().fg(Color::Red),
        ))),
        None => {}
    }

    let status_widget = Paragraph::new(status_lines)
        .wrap(Wrap { trim: true })
        .block(status_block);
    frame.render_widget(status_widget, chunks[1]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Download  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[2]);
}
