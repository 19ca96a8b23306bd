//! College verification.
//!
//! Three steps: confirm enrollment with ERP credentials, choose a password
//! for the generated anonymous username, then a success screen. The backend
//! calls are simulated with fixed delays; the caller schedules each
//! [`VerificationTimer`] and feeds it back through
//! [`VerificationState::on_timer`].

use std::time::Duration;

use uuid::Uuid;

use crate::models::{VerifiedUser, COLLEGES};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const USERNAME_PREFIX: &str = "vibe_";

const USERNAME_SUFFIX_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStep {
    #[default]
    College,
    Username,
    Success,
}

/// Focusable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    College,
    ErpLogin,
    ErpPassword,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::College => "College",
            Field::ErpLogin => "ERP Login",
            Field::ErpPassword => "ERP Password",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            Field::ErpPassword | Field::Password | Field::ConfirmPassword
        )
    }
}

const COLLEGE_FIELDS: [Field; 3] = [Field::College, Field::ErpLogin, Field::ErpPassword];
const USERNAME_FIELDS: [Field; 2] = [Field::Password, Field::ConfirmPassword];

/// Simulated backend round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationTimer {
    /// ERP credentials accepted
    CollegeVerified,
    /// Verification email sent
    VerificationEmailSent,
    /// Success screen shown long enough
    SetupFinished,
}

impl VerificationTimer {
    pub fn delay(&self) -> Duration {
        match self {
            VerificationTimer::CollegeVerified => Duration::from_millis(1500),
            VerificationTimer::VerificationEmailSent => Duration::from_millis(1000),
            VerificationTimer::SetupFinished => Duration::from_millis(2000),
        }
    }
}

/// Why a submit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationIssue {
    MissingCollege,
    MissingErpLogin,
    MissingErpPassword,
    PasswordTooShort,
    PasswordMismatch,
}

impl VerificationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            VerificationIssue::MissingCollege => "Select your college",
            VerificationIssue::MissingErpLogin => "Enter your ERP login",
            VerificationIssue::MissingErpPassword => "Enter your ERP password",
            VerificationIssue::PasswordTooShort => "Password must be at least 8 characters",
            VerificationIssue::PasswordMismatch => "Passwords don't match",
        }
    }
}

/// What happened when a timer fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Not the timer we were waiting for.
    Ignored,
    /// Moved to the next step; nothing else to wait for.
    Advanced,
    /// Moved on and needs another timer.
    Schedule(VerificationTimer),
    /// Verification finished.
    Completed(VerifiedUser),
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `vibe_` followed by seven base-36 digits.
pub fn generate_username() -> String {
    format!("{}{}", USERNAME_PREFIX, base36_suffix(Uuid::new_v4().as_u128()))
}

/// Low-order base-36 digits of `bits`; the low bits of a v4 uuid are all
/// random.
fn base36_suffix(mut bits: u128) -> String {
    let mut suffix = String::with_capacity(USERNAME_SUFFIX_LEN);
    for _ in 0..USERNAME_SUFFIX_LEN {
        suffix.push(BASE36_DIGITS[(bits % 36) as usize] as char);
        bits /= 36;
    }
    suffix
}

#[derive(Debug, Clone)]
pub struct VerificationState {
    step: VerificationStep,
    focus: Field,
    college_index: Option<usize>,
    erp_login: String,
    erp_password: String,
    generated_username: String,
    password: String,
    confirm_password: String,
    verification_sent: bool,
    show_why_verify: bool,
    pending: Option<VerificationTimer>,
    last_issue: Option<VerificationIssue>,
}

impl Default for VerificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationState {
    pub fn new() -> Self {
        Self {
            step: VerificationStep::College,
            focus: Field::College,
            college_index: None,
            erp_login: String::new(),
            erp_password: String::new(),
            generated_username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            verification_sent: false,
            show_why_verify: false,
            pending: None,
            last_issue: None,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn step(&self) -> VerificationStep {
        self.step
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn selected_college(&self) -> Option<&'static str> {
        self.college_index.map(|i| COLLEGES[i])
    }

    pub fn generated_username(&self) -> &str {
        &self.generated_username
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn verification_sent(&self) -> bool {
        self.verification_sent
    }

    pub fn show_why_verify(&self) -> bool {
        self.show_why_verify
    }

    pub fn last_issue(&self) -> Option<VerificationIssue> {
        self.last_issue
    }

    /// Fields shown on the current step.
    pub fn fields(&self) -> &'static [Field] {
        match self.step {
            VerificationStep::College => &COLLEGE_FIELDS,
            VerificationStep::Username => &USERNAME_FIELDS,
            VerificationStep::Success => &[],
        }
    }

    /// Raw value of a text field. The college field has no text.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::College => self.selected_college().unwrap_or(""),
            Field::ErpLogin => &self.erp_login,
            Field::ErpPassword => &self.erp_password,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Value as rendered, with secrets masked.
    pub fn display_value(&self, field: Field) -> String {
        let value = self.value(field);
        if field.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    /// Whether the "Complete Setup" control should be enabled.
    pub fn password_ready(&self) -> bool {
        self.validate_password().is_ok()
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.move_focus(len.saturating_sub(1));
    }

    fn move_focus(&mut self, by: usize) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + by) % fields.len()];
    }

    /// Step through the college list when the picker is focused.
    pub fn cycle_college(&mut self, forward: bool) {
        if self.is_pending() || self.focus != Field::College {
            return;
        }
        let len = COLLEGES.len();
        let next = match (self.college_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.college_index = Some(next);
        self.last_issue = None;
    }

    pub fn select_college(&mut self, index: usize) {
        if !self.is_pending() && index < COLLEGES.len() {
            self.college_index = Some(index);
            self.last_issue = None;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_pending() {
            return;
        }
        if let Some(field) = self.focused_text_mut() {
            field.push(c);
            self.last_issue = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.is_pending() {
            return;
        }
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::College => None,
            Field::ErpLogin => Some(&mut self.erp_login),
            Field::ErpPassword => Some(&mut self.erp_password),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
        }
    }

    pub fn toggle_why_verify(&mut self) {
        self.show_why_verify = !self.show_why_verify;
    }

    // ========================================================================
    // Submission
    // ========================================================================

    fn validate_college(&self) -> Result<(), VerificationIssue> {
        if self.college_index.is_none() {
            return Err(VerificationIssue::MissingCollege);
        }
        if self.erp_login.trim().is_empty() {
            return Err(VerificationIssue::MissingErpLogin);
        }
        if self.erp_password.is_empty() {
            return Err(VerificationIssue::MissingErpPassword);
        }
        Ok(())
    }

    fn validate_password(&self) -> Result<(), VerificationIssue> {
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(VerificationIssue::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(VerificationIssue::PasswordMismatch);
        }
        Ok(())
    }

    /// Submit the current step.
    ///
    /// Returns the timer to schedule, `Ok(None)` if there is nothing to do
    /// (a request is already pending or the flow is on the success screen),
    /// or the validation issue that blocked the submit.
    pub fn submit(&mut self) -> Result<Option<VerificationTimer>, VerificationIssue> {
        if self.is_pending() {
            return Ok(None);
        }
        let result = match self.step {
            VerificationStep::College => self
                .validate_college()
                .map(|()| VerificationTimer::CollegeVerified),
            VerificationStep::Username => self.validate_password().map(|()| {
                self.verification_sent = true;
                VerificationTimer::VerificationEmailSent
            }),
            VerificationStep::Success => return Ok(None),
        };
        match result {
            Ok(timer) => {
                tracing::debug!("Verification submit accepted, waiting for {:?}", timer);
                self.pending = Some(timer);
                self.last_issue = None;
                Ok(Some(timer))
            }
            Err(issue) => {
                self.last_issue = Some(issue);
                Err(issue)
            }
        }
    }

    /// Feed back a fired timer.
    pub fn on_timer(&mut self, timer: VerificationTimer) -> TimerOutcome {
        if self.pending != Some(timer) {
            return TimerOutcome::Ignored;
        }
        self.pending = None;
        match timer {
            VerificationTimer::CollegeVerified => {
                self.generated_username = generate_username();
                self.step = VerificationStep::Username;
                self.focus = Field::Password;
                tracing::info!("College verified, username {}", self.generated_username);
                TimerOutcome::Advanced
            }
            VerificationTimer::VerificationEmailSent => {
                self.step = VerificationStep::Success;
                self.pending = Some(VerificationTimer::SetupFinished);
                TimerOutcome::Schedule(VerificationTimer::SetupFinished)
            }
            VerificationTimer::SetupFinished => TimerOutcome::Completed(VerifiedUser {
                username: self.generated_username.clone(),
                college: self.selected_college().unwrap_or_default().to_string(),
            }),
        }
    }
}
