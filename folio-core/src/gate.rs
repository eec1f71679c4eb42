//! Passphrase gate for the calendar pages.
//!
//! This keeps casual visitors out of the calendar; it is not authentication.
//! The passphrase is compared verbatim and nothing is hashed or rate limited.
//! The resulting flag lives in a [`Session`] that the caller owns and passes
//! in, so the whole flow can be exercised without a browser.

/// Message shown when a submitted passphrase doesn't match.
pub const DENIED_MESSAGE: &str = "That passphrase didn't match. Try again.";

/// Per-visitor state. Lives as long as the visitor's browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    calendar_unlocked: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_calendar_unlocked(&self) -> bool {
        self.calendar_unlocked
    }

    /// Explicit sign-out.
    pub fn lock_calendar(&mut self) {
        self.calendar_unlocked = false;
    }
}

/// Result of one passphrase submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Denied,
}

impl GateOutcome {
    /// Static message to show next to the (cleared) input, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GateOutcome::Granted => None,
            GateOutcome::Denied => Some(DENIED_MESSAGE),
        }
    }
}

/// The configured shared secret.
#[derive(Clone, Default)]
pub struct Gate {
    passphrase: Option<String>,
}

impl Gate {
    /// A gate with no passphrase denies every submission.
    pub fn new(passphrase: Option<String>) -> Self {
        Gate {
            passphrase: passphrase.filter(|p| !p.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Check an attempt and record the result in `session`.
    ///
    /// A wrong attempt leaves the session as it was; it never signs out a
    /// session that was already unlocked.
    pub fn submit(&self, session: &mut Session, attempt: &str) -> GateOutcome {
        match &self.passphrase {
            Some(secret) if secret == attempt => {
                session.calendar_unlocked = true;
                tracing::debug!("Calendar passphrase accepted");
                GateOutcome::Granted
            }
            _ => {
                tracing::debug!("Calendar passphrase rejected");
                GateOutcome::Denied
            }
        }
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_passphrase_unlocks_session() {
        let gate = Gate::new(Some("abc123".into()));
        let mut session = Session::new();

        assert_eq!(gate.submit(&mut session, "abc123"), GateOutcome::Granted);
        assert!(session.is_calendar_unlocked());
    }

    #[test]
    fn wrong_passphrase_shows_static_message() {
        let gate = Gate::new(Some("abc123".into()));
        let mut session = Session::new();

        let outcome = gate.submit(&mut session, "wrong");
        assert_eq!(outcome, GateOutcome::Denied);
        assert_eq!(outcome.message(), Some(DENIED_MESSAGE));
        assert!(!session.is_calendar_unlocked());
    }

    #[test]
    fn unlocked_session_survives_later_wrong_attempt() {
        let gate = Gate::new(Some("abc123".into()));
        let mut session = Session::new();

        gate.submit(&mut session, "abc123");
        gate.submit(&mut session, "nope");
        assert!(session.is_calendar_unlocked());
    }

    #[test]
    fn comparison_is_verbatim() {
        let gate = Gate::new(Some("abc123".into()));
        let mut session = Session::new();

        assert_eq!(gate.submit(&mut session, "ABC123"), GateOutcome::Denied);
        assert_eq!(gate.submit(&mut session, " abc123"), GateOutcome::Denied);
    }

    #[test]
    fn unconfigured_gate_denies_everything() {
        let gate = Gate::new(None);
        let mut session = Session::new();

        assert!(!gate.is_configured());
        assert_eq!(gate.submit(&mut session, ""), GateOutcome::Denied);

        let empty = Gate::new(Some(String::new()));
        assert_eq!(empty.submit(&mut session, ""), GateOutcome::Denied);
    }

    #[test]
    fn sign_out_clears_flag() {
        let gate = Gate::new(Some("abc123".into()));
        let mut session = Session::new();

        gate.submit(&mut session, "abc123");
        session.lock_calendar();
        assert!(!session.is_calendar_unlocked());
    }

    #[test]
    fn debug_hides_passphrase() {
        let gate = Gate::new(Some("abc123".into()));
        assert!(!format!("{gate:?}").contains("abc123"));
    }
}
