// Contact form rendering.
// Focused-field highlighting and the submit status line.

use ratatui::{prelude::*, widgets::*};

use crate::content::Contact;
use crate::state::{ContactFormState, Field};
use crate::theme::Theme;

/// Draw the contact form with its field inputs and status line.
pub fn draw_contact_form(frame: &mut Frame, form: &ContactFormState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Subject
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Status
        ])
        .split(area);

    let fields = [Field::Name, Field::Email, Field::Subject, Field::Message];
    for (field, chunk) in fields.into_iter().zip(chunks.iter()) {
        draw_field(frame, form, field, theme, *chunk);
    }

    draw_status_line(frame, form, chunks[4]);
}

fn draw_field(frame: &mut Frame, form: &ContactFormState, field: Field, theme: &Theme, area: Rect) {
    let focused = form.focus == field;

    let border_style = if focused {
        Style::default().fg(theme.accent())
    } else {
        Style::default().fg(theme.muted())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label()));

    let mut spans = vec![Span::raw(form.field_value(field).to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(theme.accent())));
    }

    let widget = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(widget, area);
}

fn draw_status_line(frame: &mut Frame, form: &ContactFormState, area: Rect) {
    let line = if form.submitting {
        Line::from(Span::styled(
            " Sending...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(status) = &form.status {
        let color = if status.success {
            Color::Green
        } else {
            Color::Red
        };
        Line::from(Span::styled(
            format!(" {}", status.message),
            Style::default().fg(color),
        ))
    } else {
        Line::from(Span::styled(
            " ↑↓ field · Enter send · Ctrl+D download CV",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the contact details card next to the form.
pub fn draw_contact_card(frame: &mut Frame, contact: &Contact, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Email     ", Style::default().fg(theme.muted())),
            Span::styled(contact.email.clone(), Style::default().fg(theme.fg())),
        ]),
        Line::from(vec![
            Span::styled("GitHub    ", Style::default().fg(theme.muted())),
            Span::styled(contact.github.clone(), Style::default().fg(theme.fg())),
        ]),
        Line::from(vec![
            Span::styled("LinkedIn  ", Style::default().fg(theme.muted())),
            Span::styled(contact.linkedin.clone(), Style::default().fg(theme.fg())),
        ]),
    ];

    if let Some(topmate) = &contact.topmate_url {
        lines.push(Line::from(vec![
            Span::styled("Topmate   ", Style::default().fg(theme.muted())),
            Span::styled(topmate.clone(), Style::default().fg(theme.fg())),
        ]));
    }
    if let Some(discord) = &contact.discord_username {
        lines.push(Line::from(vec![
            Span::styled("Discord   ", Style::default().fg(theme.muted())),
            Span::styled(discord.clone(), Style::default().fg(theme.fg())),
        ]));
    }
    if contact.cv_url.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "CV available: Ctrl+D to download",
            Style::default().fg(theme.accent()),
        )));
    }

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Reach me "));
    frame.render_widget(card, area);
}
