//! Viewer identity: the applied email plus an unapplied edit.
//!
//! Typing only changes the pending value. Nothing is fetched until the edit
//! is applied, so there is no request per keystroke.

use thiserror::Error;

use crate::models::Viewer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("Viewer email cannot be empty")]
    EmptyEmail,
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    pending_email: String,
    applied: Viewer,
}

impl ViewerSession {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            pending_email: email.clone(),
            applied: Viewer::new(email),
        }
    }

    /// Replace the pending edit. Never triggers a fetch.
    pub fn edit(&mut self, email: impl Into<String>) {
        self.pending_email = email.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.pending_email.push(c);
    }

    pub fn backspace(&mut self) {
        self.pending_email.pop();
    }

    /// Drop the pending edit and go back to the applied email.
    pub fn revert(&mut self) {
        self.pending_email = self.applied.email.clone();
    }

    /// Promote the pending edit to the applied viewer.
    ///
    /// Surrounding whitespace is trimmed. An empty email is rejected and the
    /// applied viewer is left as it was.
    pub fn apply(&mut self) -> Result<&Viewer, ViewerError> {
        let email = self.pending_email.trim().to_string();
        if email.is_empty() {
            return Err(ViewerError::EmptyEmail);
        }
        self.pending_email = email.clone();
        self.applied = Viewer::new(email);
        Ok(&self.applied)
    }

    pub fn pending_email(&self) -> &str {
        &self.pending_email
    }

    pub fn applied(&self) -> &Viewer {
        &self.applied
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_email != self.applied.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_does_not_change_applied() {
        let mut session = ViewerSession::new("grandma@family.demo");
        session.edit("grandpa@family.demo");

        assert_eq!(session.pending_email(), "grandpa@family.demo");
        assert_eq!(session.applied().email, "grandma@family.demo");
        assert!(session.has_pending_edit());
    }

    #[test]
    fn test_apply_promotes_pending() {
        let mut session = ViewerSession::new("grandma@family.demo");
        session.edit("  grandpa@family.demo ");

        let applied = session.apply().unwrap().clone();
        assert_eq!(applied.email, "grandpa@family.demo");
        assert_eq!(session.pending_email(), "grandpa@family.demo");
        assert!(!session.has_pending_edit());
    }

    #[test]
    fn test_reapplying_padded_email_is_stable() {
        let mut session = ViewerSession::new("grandma@family.demo");
        session.edit(" grandpa@family.demo\t");
        session.apply().unwrap();

        session.edit("  grandpa@family.demo  ");
        let applied = session.apply().unwrap().clone();

        assert_eq!(applied, Viewer::new("grandpa@family.demo"));
        assert_eq!(session.pending_email(), "grandpa@family.demo");
        assert!(!session.has_pending_edit());
    }

    #[test]
    fn test_apply_rejects_empty() {
        let mut session = ViewerSession::new("grandma@family.demo");
        session.edit("   ");

        assert_eq!(session.apply().unwrap_err(), ViewerError::EmptyEmail);
        assert_eq!(session.applied().email, "grandma@family.demo");
    }

    #[test]
    fn test_char_editing_and_revert() {
        let mut session = ViewerSession::new("a@b");
        session.backspace();
        session.push_char('c');
        assert_eq!(session.pending_email(), "a@c");

        session.revert();
        assert_eq!(session.pending_email(), "a@b");
        assert!(!session.has_pending_edit());
    }
}
