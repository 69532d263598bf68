use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::{AuthField, AuthMode, ComposeField, UiState};
use blogspace_app::{AppState, View};

pub(crate) fn draw(f: &mut Frame, state: &AppState, ui: &UiState) {
    if state.is_authenticated() {
        draw_main(f, state, ui);
    } else {
        draw_auth(f, ui);
    }
}

// --------------------------------------------------------
// Auth screen
// --------------------------------------------------------

fn draw_auth(f: &mut Frame, ui: &UiState) {
    let is_signup = ui.auth.mode == AuthMode::Signup;
    let field_count: u16 = if is_signup { 3 } else { 2 };
    // subtitle + fields + message + submit + hint, plus outer borders
    let height = 2 + field_count * 3 + 3 + 2;

    let area = centered_rect(f.area(), 52, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " BlogSpace ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(std::iter::repeat_n(Constraint::Length(3), field_count as usize));
    constraints.push(Constraint::Length(1)); // message
    constraints.push(Constraint::Length(1)); // submit
    constraints.push(Constraint::Length(1)); // hint

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let subtitle = if is_signup {
        "Join our community"
    } else {
        "Welcome back!"
    };
    f.render_widget(
        Paragraph::new(subtitle)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let mut chunk_idx = 1;
    if is_signup {
        render_field(f, chunks[chunk_idx], "Name", &ui.auth.name, ui.auth.focus == AuthField::Name);
        chunk_idx += 1;
    }
    render_field(f, chunks[chunk_idx], "Email", &ui.auth.email, ui.auth.focus == AuthField::Email);
    chunk_idx += 1;

    let masked = "*".repeat(ui.auth.password.chars().count());
    render_field(f, chunks[chunk_idx], "Password", &masked, ui.auth.focus == AuthField::Password);
    chunk_idx += 1;

    if let Some(message) = &ui.auth.message {
        f.render_widget(
            Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            chunks[chunk_idx],
        );
    }
    chunk_idx += 1;

    let submit = match ui.busy {
        Some(label) => label,
        None if is_signup => "[ Sign Up ]",
        None => "[ Login ]",
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            submit,
            Style::default()
                .fg(if ui.busy.is_some() { Color::DarkGray } else { Color::LightCyan })
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[chunk_idx],
    );
    chunk_idx += 1;

    let toggle_hint = if is_signup {
        "Ctrl+T: back to login"
    } else {
        "Ctrl+T: create an account"
    };
    f.render_widget(
        Paragraph::new(format!("Enter: submit · Tab: next field · {} · Esc: quit", toggle_hint))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[chunk_idx],
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label.to_string()),
    );
    f.render_widget(field, area);
}

// --------------------------------------------------------
// Main screen
// --------------------------------------------------------

fn draw_main(f: &mut Frame, state: &AppState, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    match state.view {
        View::Posts => render_posts(f, chunks[1], state, ui),
        View::Compose => render_compose(f, chunks[1], ui),
        View::Profile => render_profile(f, chunks[1], state),
    }

    render_footer(f, chunks[2], state, ui);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let tab = |label: &str, view: View| {
        let style = if state.view == view {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label.to_string(), style)
    };

    let user_name = state
        .user
        .as_ref()
        .map(|user| user.name.as_str())
        .unwrap_or_default();

    let header = Line::from(vec![
        Span::styled(
            "BlogSpace",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        tab("1 Posts", View::Posts),
        Span::raw("  "),
        tab("2 Write", View::Compose),
        Span::raw("  "),
        tab("3 Profile", View::Profile),
        Span::raw("   "),
        Span::styled(user_name.to_string(), Style::default().fg(Color::White)),
    ]);

    let widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}

fn render_posts(f: &mut Frame, area: Rect, state: &AppState, ui: &UiState) {
    if state.posts.is_empty() {
        let placeholder = Paragraph::new("No blogs yet. Be the first to write one!")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .posts
        .iter()
        .map(|post| {
            let mut byline = vec![Span::styled(
                format!("By {}", post.author_name()),
                Style::default().fg(Color::DarkGray),
            )];
            if state.can_delete(post) {
                byline.push(Span::styled(" · d: delete", Style::default().fg(Color::Red)));
            }

            let mut lines = vec![
                Line::from(Span::styled(
                    post.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(byline),
            ];
            for preview_line in post.preview().lines() {
                lines.push(Line::from(preview_line.to_string()));
            }
            lines.push(Line::from(""));

            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_compose(f: &mut Frame, area: Rect, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let title_focused = ui.compose.focus == ComposeField::Title;
    render_field(f, chunks[0], "Title", &ui.compose.title, title_focused);

    let content_style = if title_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let content = Paragraph::new(ui.compose.content.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(content_style)
                .title("Content"),
        );
    f.render_widget(content, chunks[1]);
}

fn render_profile(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(user) = &state.user else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Name     ", Style::default().fg(Color::DarkGray)),
            Span::raw(user.name.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email    ", Style::default().fg(Color::DarkGray)),
            Span::raw(user.email.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("User ID  ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("#{}", user.id), Style::default().fg(Color::Gray)),
        ]),
    ];

    let widget = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Profile "),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState, ui: &UiState) {
    let hints = match state.view {
        View::Posts => "j/k: select · d: delete · r: refresh · 1/2/3: views · l: logout · q: quit",
        View::Compose => "Tab: switch field · Enter: newline · Ctrl+S: publish · Esc: cancel",
        View::Profile => "1/2/3: views · l: logout · q: quit",
    };

    let status = if let Some(label) = ui.busy {
        Line::from(Span::styled(label, Style::default().fg(Color::Yellow)))
    } else if ui.pending_delete.is_some() {
        Line::from(Span::styled(
            "Delete this post? (y/n)",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = &ui.status {
        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Yellow)))
    } else {
        Line::from("")
    };

    let footer = Paragraph::new(Text::from(vec![
        status,
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogspace_types::{Post, User};
    use ratatui::{Terminal, backend::TestBackend};

    fn authenticated_state() -> AppState {
        let mut state = AppState::default();
        state.user = Some(User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });
        state
    }

    fn rendered(state: &AppState, ui: &UiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, state, ui)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_post_list_renders_placeholder() {
        let state = authenticated_state();
        let ui = UiState::new();

        let text = rendered(&state, &ui);
        assert!(text.contains("No blogs yet. Be the first to write one!"));
    }

    #[test]
    fn test_post_list_renders_title_and_byline() {
        let mut state = authenticated_state();
        state.posts = vec![Post {
            id: 1,
            title: "Hello".to_string(),
            content: "World".to_string(),
            author_id: 2,
            author: None,
        }];
        let ui = UiState::new();

        let text = rendered(&state, &ui);
        assert!(text.contains("Hello"));
        assert!(text.contains("By Anonymous"));
        // Only the footer hint mentions delete; the byline stays clean.
        assert_eq!(text.matches("d: delete").count(), 1);
    }

    #[test]
    fn test_own_post_shows_delete_hint() {
        let mut state = authenticated_state();
        state.posts = vec![Post {
            id: 1,
            title: "Mine".to_string(),
            content: "c".to_string(),
            author_id: 1,
            author: None,
        }];
        let ui = UiState::new();

        let text = rendered(&state, &ui);
        // Footer hint plus the per-post byline marker.
        assert_eq!(text.matches("d: delete").count(), 2);
    }

    #[test]
    fn test_unauthenticated_state_renders_auth_screen() {
        let state = AppState::default();
        let ui = UiState::new();

        let text = rendered(&state, &ui);
        assert!(text.contains("BlogSpace"));
        assert!(text.contains("Welcome back!"));
    }
}
