//! Client-side registration dialog.
//!
//! Nothing is ever sent anywhere: submitting always fails with
//! [`RegistrationError::InvalidInput`]. The close icon discards what the
//! visitor typed, the cancel button keeps it.

use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    Name,
    Email,
    Affiliation,
    PaperTitle,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("UnknownField: {0}")]
pub struct UnknownFieldError(String);

impl RegistrationField {
    pub const ALL: [RegistrationField; 4] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Affiliation,
        RegistrationField::PaperTitle,
    ];

    /// Form field name, as used in the `name` attribute of the input.
    pub fn name(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Affiliation => "affiliation",
            RegistrationField::PaperTitle => "paperTitle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Name => "Full Name",
            RegistrationField::Email => "Email Address",
            RegistrationField::Affiliation => "Institutional Affiliation",
            RegistrationField::PaperTitle => "Paper Title (if presenting)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RegistrationField::Name => "Enter your full name",
            RegistrationField::Email => "your.email@domain.com",
            RegistrationField::Affiliation => "University/Organization",
            RegistrationField::PaperTitle => "Title of your research paper",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RegistrationField::Email => "email",
            _ => "text",
        }
    }

    /// Marked with an asterisk in the dialog. Nothing enforces it.
    pub fn is_marked_required(self) -> bool {
        !matches!(self, RegistrationField::PaperTitle)
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegistrationField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistrationField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub paper_title: String,
}

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Affiliation => &self.affiliation,
            RegistrationField::PaperTitle => &self.paper_title,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Affiliation => &mut self.affiliation,
            RegistrationField::PaperTitle => &mut self.paper_title,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        RegistrationField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

/// Visibility of the dialog combined with whether an error is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenClean,
    OpenWithError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    Open,
    /// Close icon in the dialog header
    Dismiss,
    /// Cancel button next to submit
    Cancel,
    Update(RegistrationField, String),
    /// Submit button or Enter in any field
    Submit,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationController {
    visible: bool,
    form: RegistrationForm,
    error: Option<RegistrationError>,
}

impl RegistrationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn error(&self) -> Option<&RegistrationError> {
        self.error.as_ref()
    }

    pub fn state(&self) -> ModalState {
        match (self.visible, self.error.is_some()) {
            (false, _) => ModalState::Closed,
            (true, false) => ModalState::OpenClean,
            (true, true) => ModalState::OpenWithError,
        }
    }

    pub fn open(&mut self) {
        debug!("registration dialog opened");
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        debug!("registration dialog dismissed");
        self.visible = false;
        self.error = None;
        self.form = RegistrationForm::default();
    }

    pub fn cancel(&mut self) {
        debug!("registration dialog cancelled");
        self.visible = false;
        self.error = None;
    }

    pub fn update_field(&mut self, field: RegistrationField, value: String) {
        self.form.set(field, value);
        self.error = None;
    }

    /// Always rejects. Returns the error now shown in the dialog, or `None`
    /// when the dialog is closed and there is nothing to submit.
    pub fn submit(&mut self) -> Option<&RegistrationError> {
        if !self.visible {
            debug!("ignoring submit while registration dialog is closed");
            return None;
        }
        info!("registration submission rejected");
        self.error = Some(RegistrationError::InvalidInput);
        self.error.as_ref()
    }

    pub fn apply(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::Open => self.open(),
            RegistrationAction::Dismiss => self.dismiss(),
            RegistrationAction::Cancel => self.cancel(),
            RegistrationAction::Update(field, value) => self.update_field(field, value),
            RegistrationAction::Submit => {
                self.submit();
            }
        }
    }
}

/// True for the key that submits the form from inside a field.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_REGISTRATION_MESSAGE;

    fn filled() -> RegistrationController {
        let mut controller = RegistrationController::new();
        controller.open();
        controller.update_field(RegistrationField::Name, "Jane Doe".into());
        controller.update_field(RegistrationField::Email, "jane@example.org".into());
        controller.update_field(RegistrationField::Affiliation, "MIT".into());
        controller.update_field(RegistrationField::PaperTitle, "A Study".into());
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = RegistrationController::new();
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(controller.form().is_empty());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_valid_looking_input_is_still_rejected() {
        let mut controller = filled();
        assert_eq!(controller.state(), ModalState::OpenClean);
        let error = controller.submit().cloned();
        assert_eq!(error, Some(RegistrationError::InvalidInput));
        assert_eq!(
            controller.error().map(ToString::to_string).as_deref(),
            Some(INVALID_REGISTRATION_MESSAGE)
        );
        assert_eq!(controller.state(), ModalState::OpenWithError);
    }

    #[test]
    fn test_resubmit_keeps_error() {
        let mut controller = filled();
        controller.submit();
        controller.submit();
        assert_eq!(controller.state(), ModalState::OpenWithError);
        assert_eq!(controller.error(), Some(&RegistrationError::InvalidInput));
    }

    #[test]
    fn test_edit_clears_error_even_with_empty_value() {
        let mut controller = filled();
        controller.submit();
        controller.update_field(RegistrationField::Email, String::new());
        assert_eq!(controller.state(), ModalState::OpenClean);
        assert_eq!(controller.form().email, "");
    }

    #[test]
    fn test_dismiss_resets_fields() {
        let mut controller = filled();
        controller.submit();
        controller.dismiss();
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(controller.form().is_empty());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_cancel_keeps_fields() {
        let mut controller = filled();
        controller.submit();
        controller.cancel();
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(controller.error().is_none());
        assert_eq!(controller.form().name, "Jane Doe");
        assert_eq!(controller.form().paper_title, "A Study");

        controller.open();
        assert_eq!(controller.state(), ModalState::OpenClean);
        assert_eq!(controller.form().affiliation, "MIT");
    }

    #[test]
    fn test_reopen_after_dismiss_is_clean() {
        let mut controller = filled();
        controller.submit();
        controller.dismiss();
        controller.open();
        assert_eq!(controller.state(), ModalState::OpenClean);
        assert!(controller.form().is_empty());
    }

    #[test]
    fn test_submit_while_closed_is_ignored() {
        let mut controller = RegistrationController::new();
        assert!(controller.submit().is_none());
        assert_eq!(controller.state(), ModalState::Closed);
    }

    #[test]
    fn test_enter_matches_submit_button() {
        let mut by_button = filled();
        by_button.apply(RegistrationAction::Submit);

        let mut by_enter = filled();
        if is_submit_key("Enter") {
            by_enter.apply(RegistrationAction::Submit);
        }
        assert_eq!(by_button, by_enter);
        assert!(!is_submit_key("a"));
        assert!(!is_submit_key("enter"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(
            "paperTitle".parse::<RegistrationField>(),
            Ok(RegistrationField::PaperTitle)
        );
        assert_eq!(RegistrationField::Email.input_type(), "email");
        assert_eq!(RegistrationField::Name.input_type(), "text");
        assert!(RegistrationField::Affiliation.is_marked_required());
        assert!(!RegistrationField::PaperTitle.is_marked_required());
        assert!("paper_title".parse::<RegistrationField>().is_err());
    }
}
