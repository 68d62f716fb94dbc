use crate::common::{LoggerError, LoggerResult};
use std::fmt;

/// A domain occurrence logged at INFO as
/// `GAME_EVENT: <type>[ | Player: <id>][ | Details: <details>]`.
///
/// Empty optional fields are treated as absent and never rendered as empty segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEvent<'a> {
    event_type: &'a str,
    player_id: Option<&'a str>,
    details: Option<&'a str>,
}

impl<'a> GameEvent<'a> {
    pub fn new(event_type: &'a str) -> LoggerResult<Self> {
        if event_type.is_empty() {
            return Err(LoggerError::EmptyEventType);
        }
        Ok(Self {
            event_type,
            player_id: None,
            details: None,
        })
    }

    pub fn with_player(mut self, player_id: Option<&'a str>) -> Self {
        self.player_id = player_id.filter(|p| !p.is_empty());
        self
    }

    pub fn with_details(mut self, details: Option<&'a str>) -> Self {
        self.details = details.filter(|d| !d.is_empty());
        self
    }

    pub fn event_type(&self) -> &str {
        self.event_type
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player_id
    }

    pub fn details(&self) -> Option<&str> {
        self.details
    }
}

impl fmt::Display for GameEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GAME_EVENT: {}", self.event_type)?;
        if let Some(player) = self.player_id {
            write!(f, " | Player: {}", player)?;
        }
        if let Some(details) = self.details {
            write!(f, " | Details: {}", details)?;
        }
        Ok(())
    }
}

/// Build the game-event message without emitting it.
pub fn format_game_event(
    event_type: &str,
    player_id: Option<&str>,
    details: Option<&str>,
) -> LoggerResult<String> {
    Ok(GameEvent::new(event_type)?
        .with_player(player_id)
        .with_details(details)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_event_message() {
        assert_eq!(
            format_game_event("LOGIN", Some("p1"), Some("ok")).unwrap(),
            "GAME_EVENT: LOGIN | Player: p1 | Details: ok"
        );
    }

    #[test]
    fn test_event_without_optionals_has_no_separators() {
        assert_eq!(format_game_event("LOGIN", None, None).unwrap(), "GAME_EVENT: LOGIN");
    }

    #[test]
    fn test_details_without_player() {
        assert_eq!(
            format_game_event("APPLICATION_START", None, Some("main initialized")).unwrap(),
            "GAME_EVENT: APPLICATION_START | Details: main initialized"
        );
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        assert_eq!(
            format_game_event("LOGOUT", Some(""), Some("")).unwrap(),
            "GAME_EVENT: LOGOUT"
        );
    }

    #[test]
    fn test_empty_event_type_is_rejected() {
        assert!(matches!(
            format_game_event("", Some("p1"), None),
            Err(LoggerError::EmptyEventType)
        ));
    }
}
