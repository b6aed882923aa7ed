// Login session of the coach using the board
// Credentials and password checks belong to the auth provider; only the
// resulting user identity is tracked here.

use tracing::info;

use crate::error::{LineupError, Result};
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous login.
    pub fn login(&mut self, user: User) {
        info!(user = %user.id, "logged in");
        *self = Session::LoggedIn(user);
    }

    pub fn logout(&mut self) -> Option<User> {
        match std::mem::take(self) {
            Session::LoggedIn(user) => {
                info!(user = %user.id, "logged out");
                Some(user)
            }
            Session::LoggedOut => None,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::LoggedIn(user) => Some(user),
            Session::LoggedOut => None,
        }
    }

    pub fn require_user(&self) -> Result<&User> {
        self.current_user().ok_or(LineupError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn coach() -> User {
        User { id: UserId::new("u1"), email: "coach@example.com".into(), name: "Coach".into() }
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut session = Session::new();
        assert_eq!(session.require_user(), Err(LineupError::NotAuthenticated));

        session.login(coach());
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Coach"));

        assert_eq!(session.logout(), Some(coach()));
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.logout(), None);
    }
}
