//! Screen-local state: form buffers, focus, selection, confirmation.
//!
//! Everything here is UI state the controller never sees; the
//! controller's `AppState` stays the single source of truth for the
//! session, the post collection, and the view selector.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthField {
    Name,
    Email,
    Password,
}

pub(crate) struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: AuthField,
    pub message: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            focus: AuthField::Email,
            message: None,
        }
    }

    /// Switch between login and signup, clearing fields and message.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.clear_fields();
        self.message = None;
        self.focus = self.first_field();
    }

    fn first_field(&self) -> AuthField {
        match self.mode {
            AuthMode::Login => AuthField::Email,
            AuthMode::Signup => AuthField::Name,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match (self.mode, self.focus) {
            (AuthMode::Login, AuthField::Email) => AuthField::Password,
            (AuthMode::Login, _) => AuthField::Email,
            (AuthMode::Signup, AuthField::Name) => AuthField::Email,
            (AuthMode::Signup, AuthField::Email) => AuthField::Password,
            (AuthMode::Signup, AuthField::Password) => AuthField::Name,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match (self.mode, self.focus) {
            (AuthMode::Login, AuthField::Email) => AuthField::Password,
            (AuthMode::Login, _) => AuthField::Email,
            (AuthMode::Signup, AuthField::Name) => AuthField::Password,
            (AuthMode::Signup, AuthField::Email) => AuthField::Name,
            (AuthMode::Signup, AuthField::Password) => AuthField::Email,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    /// Whether every field the current mode requires is filled in.
    pub fn is_complete(&self) -> bool {
        let base = !self.email.is_empty() && !self.password.is_empty();
        match self.mode {
            AuthMode::Login => base,
            AuthMode::Signup => base && !self.name.is_empty(),
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComposeField {
    Title,
    Content,
}

pub(crate) struct ComposeForm {
    pub title: String,
    pub content: String,
    pub focus: ComposeField,
}

impl ComposeForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            focus: ComposeField::Title,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ComposeField::Title => ComposeField::Content,
            ComposeField::Content => ComposeField::Title,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::Title => &mut self.title,
            ComposeField::Content => &mut self.content,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.focus = ComposeField::Title;
    }
}

pub(crate) struct UiState {
    pub auth: AuthForm,
    pub compose: ComposeForm,
    /// Selected index into the post list
    pub selected: usize,
    /// Post armed for deletion, awaiting y/n
    pub pending_delete: Option<i64>,
    /// Transient message shown in the footer of authenticated views
    pub status: Option<String>,
    /// Label shown instead of the submit hint while a request runs
    pub busy: Option<&'static str>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            auth: AuthForm::new(),
            compose: ComposeForm::new(),
            selected: 0,
            pending_delete: None,
            status: None,
            busy: None,
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Drop everything tied to the old session after a logout.
    pub fn reset_session_state(&mut self) {
        self.auth = AuthForm::new();
        self.compose.clear();
        self.selected = 0;
        self.pending_delete = None;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_mode_does_not_require_name() {
        let mut form = AuthForm::new();
        form.email = "a@b.com".to_string();
        form.password = "x".to_string();
        assert!(form.is_complete());

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Signup);
        // Toggling clears the fields
        assert!(!form.is_complete());

        form.name = "A".to_string();
        form.email = "a@b.com".to_string();
        form.password = "x".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn test_focus_cycles_per_mode() {
        let mut form = AuthForm::new();
        assert_eq!(form.focus, AuthField::Email);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Password);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Email);

        form.toggle_mode();
        assert_eq!(form.focus, AuthField::Name);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Email);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut ui = UiState::new();
        ui.select_next(3);
        ui.select_next(3);
        ui.select_next(3);
        assert_eq!(ui.selected, 2);

        ui.clamp_selection(1);
        assert_eq!(ui.selected, 0);

        ui.select_previous();
        assert_eq!(ui.selected, 0);
    }

    #[test]
    fn test_clamp_selection_on_empty_list() {
        let mut ui = UiState::new();
        ui.selected = 5;
        ui.clamp_selection(0);
        assert_eq!(ui.selected, 0);
    }
}
