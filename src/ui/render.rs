use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{gate, App, ConfirmOutcome, FieldFocus, GateDecision, Route};

use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  CarePortal";
    let screen = app.route.title();

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(title.len() + screen.len() + 2),
        )),
        Span::styled(screen, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    // The gate owns the decision; redirects are applied in the tick, so a
    // frame that lands here in the redirect state just stays neutral.
    match gate(&app.auth.snapshot(), app.route) {
        GateDecision::Defer | GateDecision::RedirectToLogin => {
            render_centered_message(frame, area, "Checking session...")
        }
        GateDecision::Allow => match app.route {
            Route::Login => render_login(frame, app, area),
            Route::SignUp => render_signup(frame, app, area),
            Route::ConfirmEmail => render_confirm(frame, app, area),
            Route::Profile => render_profile(frame, app, area),
        },
    }
}

fn render_centered_message(frame: &mut Frame, area: Rect, message: &str) {
    let block = centered_rect_fixed(46, 3, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(message, styles::muted_style())))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, block);
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.pages.login;
    let area = centered_rect_fixed(46, 14, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Notice / spacer
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Button
            Constraint::Length(2), // Error
        ])
        .split(area);

    if let Some(ref notice) = form.notice {
        let line = Paragraph::new(Span::styled(notice.as_str(), styles::success_style()))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[0]);
    }

    render_input_field(
        frame,
        chunks[1],
        "Email",
        &form.email,
        form.focus == FieldFocus::Email,
    );
    render_input_field(
        frame,
        chunks[2],
        "Password",
        &"*".repeat(form.password.chars().count()),
        form.focus == FieldFocus::Password,
    );
    render_submit_button(frame, chunks[3], " Log In ", form.focus == FieldFocus::Submit);

    if let Some(ref error) = form.error {
        let line = Paragraph::new(Span::styled(error.as_str(), styles::error_style()))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[4]);
    }
}

fn render_signup(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.pages.signup;
    let area = centered_rect_fixed(46, 14, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Success notice / spacer
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Button
            Constraint::Length(2), // Error
        ])
        .split(area);

    if let Some(ref success) = form.success {
        let line = Paragraph::new(Span::styled(success.as_str(), styles::success_style()))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[0]);
    }

    render_input_field(
        frame,
        chunks[1],
        "Email",
        &form.email,
        form.focus == FieldFocus::Email,
    );
    render_input_field(
        frame,
        chunks[2],
        "Password (min 6 characters)",
        &"*".repeat(form.password.chars().count()),
        form.focus == FieldFocus::Password,
    );
    render_submit_button(frame, chunks[3], " Sign Up ", form.focus == FieldFocus::Submit);

    if let Some(ref error) = form.error {
        let line = Paragraph::new(Span::styled(error.as_str(), styles::error_style()))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[4]);
    }
}

fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.pages.confirm;
    let area = centered_rect_fixed(60, 12, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Length(3), // Link input
            Constraint::Length(4), // Outcome
        ])
        .split(area);

    let instructions = Paragraph::new(Span::styled(
        "Paste the verification link from your email:",
        styles::muted_style(),
    ));
    frame.render_widget(instructions, chunks[0]);

    render_input_field(frame, chunks[1], "Verification link", &form.link, true);

    match form.outcome {
        Some(ConfirmOutcome::Verified) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Email verified. You can now log in.",
                    styles::success_style(),
                )),
                Line::from(Span::styled("[Enter] go to login", styles::muted_style())),
            ];
            frame.render_widget(Paragraph::new(lines), chunks[2]);
        }
        Some(ConfirmOutcome::Invalid(ref message)) => {
            let lines = vec![
                Line::from(Span::styled(message.as_str(), styles::error_style())),
                Line::from(Span::styled(
                    "[Ctrl+S] back to sign up",
                    styles::muted_style(),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), chunks[2]);
        }
        None => {}
    }
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.pages.profile;
    let area = centered_rect_fixed(50, 10, area);

    if view.loading || !view.loaded {
        render_centered_message(frame, area, "Loading profile...");
        return;
    }

    if let Some(ref error) = view.error {
        let lines = vec![
            Line::from(Span::styled(error.as_str(), styles::error_style())),
            Line::from(""),
            Line::from(Span::styled("[r] retry   [l] log out", styles::muted_style())),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let session = app.auth.snapshot();
    let email = session.email.as_deref().unwrap_or("(unknown)");

    let lines = vec![
        Line::from(Span::styled("User Profile", styles::title_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email: ", styles::muted_style()),
            Span::raw(email.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("[l] log out", styles::muted_style())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_input_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
        .title(label);

    // Keep the tail visible when the value overflows the field
    let inner_width = area.width.saturating_sub(2) as usize;
    let shown: String = if value.chars().count() > inner_width {
        value
            .chars()
            .skip(value.chars().count() - inner_width)
            .collect()
    } else {
        value.to_string()
    };

    frame.render_widget(Paragraph::new(shown).block(block), area);
}

fn render_submit_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let paragraph = Paragraph::new(Span::styled(label, styles::button_style(focused)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.route {
        Route::Login => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("^S", "sign up"),
            ("^E", "confirm email"),
            ("Esc", "quit"),
        ],
        Route::SignUp => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("^L", "log in"),
            ("Esc", "back"),
        ],
        Route::ConfirmEmail => &[("Enter", "verify"), ("^S", "sign up"), ("Esc", "back")],
        Route::Profile => &[("l", "log out"), ("r", "reload"), ("q", "quit")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("[{}]", key), styles::help_key_style()));
        spans.push(Span::raw(format!(" {}", desc)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
