//! Keyboard input handling for the TUI.
//!
//! Each screen gets its own handler; network calls triggered here are
//! awaited inline, so at most one request is ever in flight.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{
    can_add_email_char, can_add_link_char, can_add_password_char, App, ConfirmOutcome, FieldFocus,
    Route,
};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.route {
        Route::Login => handle_login_input(app, key).await,
        Route::SignUp => handle_signup_input(app, key).await,
        Route::ConfirmEmail => Ok(handle_confirm_input(app, key)),
        Route::Profile => Ok(handle_profile_input(app, key)),
    }
}

async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Screen switches
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                app.navigate(Route::SignUp);
                return Ok(false);
            }
            KeyCode::Char('e') => {
                app.navigate(Route::ConfirmEmail);
                return Ok(false);
            }
            _ => return Ok(false),
        }
    }

    match key.code {
        KeyCode::Esc => {
            // Quit from the login screen
            app.quitting = true;
            return Ok(true);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.pages.login.focus = app.pages.login.focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.pages.login.focus = app.pages.login.focus.prev();
        }
        KeyCode::Enter => match app.pages.login.focus {
            FieldFocus::Email => {
                app.pages.login.focus = FieldFocus::Password;
            }
            FieldFocus::Password | FieldFocus::Submit => {
                app.attempt_login().await;
            }
        },
        KeyCode::Backspace => match app.pages.login.focus {
            FieldFocus::Email => {
                app.pages.login.email.pop();
            }
            FieldFocus::Password => {
                app.pages.login.password.pop();
            }
            FieldFocus::Submit => {}
        },
        KeyCode::Char(c) => match app.pages.login.focus {
            FieldFocus::Email => {
                if can_add_email_char(app.pages.login.email.chars().count(), c) {
                    app.pages.login.email.push(c);
                }
            }
            FieldFocus::Password => {
                if can_add_password_char(app.pages.login.password.chars().count(), c) {
                    app.pages.login.password.push(c);
                }
            }
            FieldFocus::Submit => {}
        },
        _ => {}
    }

    Ok(false)
}

async fn handle_signup_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('l') {
            app.navigate(Route::Login);
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Login);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.pages.signup.focus = app.pages.signup.focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.pages.signup.focus = app.pages.signup.focus.prev();
        }
        KeyCode::Enter => match app.pages.signup.focus {
            FieldFocus::Email => {
                app.pages.signup.focus = FieldFocus::Password;
            }
            FieldFocus::Password | FieldFocus::Submit => {
                app.attempt_signup().await;
            }
        },
        KeyCode::Backspace => match app.pages.signup.focus {
            FieldFocus::Email => {
                app.pages.signup.email.pop();
            }
            FieldFocus::Password => {
                app.pages.signup.password.pop();
            }
            FieldFocus::Submit => {}
        },
        KeyCode::Char(c) => match app.pages.signup.focus {
            FieldFocus::Email => {
                if can_add_email_char(app.pages.signup.email.chars().count(), c) {
                    app.pages.signup.email.push(c);
                }
            }
            FieldFocus::Password => {
                if can_add_password_char(app.pages.signup.password.chars().count(), c) {
                    app.pages.signup.password.push(c);
                }
            }
            FieldFocus::Submit => {}
        },
        _ => {}
    }

    Ok(false)
}

fn handle_confirm_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            app.navigate(Route::SignUp);
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Login);
        }
        KeyCode::Enter => {
            // A verified link is done; Enter moves on to login
            if app.pages.confirm.outcome == Some(ConfirmOutcome::Verified) {
                app.navigate(Route::Login);
            } else {
                app.submit_confirmation_link();
            }
        }
        KeyCode::Backspace => {
            app.pages.confirm.link.pop();
            app.pages.confirm.outcome = None;
        }
        KeyCode::Char(c) => {
            if can_add_link_char(app.pages.confirm.link.chars().count(), c) {
                app.pages.confirm.link.push(c);
                app.pages.confirm.outcome = None;
            }
        }
        _ => {}
    }

    false
}

fn handle_profile_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quitting = true;
            return true;
        }
        KeyCode::Char('l') => {
            app.logout();
        }
        KeyCode::Char('r') => {
            // Clears the loaded flag; the next tick refetches
            app.retry_profile_load();
        }
        _ => {}
    }

    false
}
