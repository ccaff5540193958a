use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use super::bot_controller::BotType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    TwoPlayers,
    AiEasy,
    AiHard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::TwoPlayers, GameMode::AiEasy, GameMode::AiHard];

    /// Bot driving the O side, if any.
    pub fn bot_type(&self) -> Option<BotType> {
        match self {
            GameMode::TwoPlayers => None,
            GameMode::AiEasy => Some(BotType::Random),
            GameMode::AiHard => Some(BotType::Minimax),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayers => "two-players",
            GameMode::AiEasy => "ai-easy",
            GameMode::AiHard => "ai-hard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::TwoPlayers => "Player vs Player",
            GameMode::AiEasy => "Player vs AI (Normal)",
            GameMode::AiHard => "Player vs AI (Hard)",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown game mode '{}', expected one of: two-players, ai-easy, ai-hard",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("two-players".parse::<GameMode>(), Ok(GameMode::TwoPlayers));
        assert_eq!("AI-Easy".parse::<GameMode>(), Ok(GameMode::AiEasy));
        assert_eq!(" ai-hard ".parse::<GameMode>(), Ok(GameMode::AiHard));
        assert!("hard".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_bot_type() {
        assert_eq!(GameMode::TwoPlayers.bot_type(), None);
        assert_eq!(GameMode::AiEasy.bot_type(), Some(BotType::Random));
        assert_eq!(GameMode::AiHard.bot_type(), Some(BotType::Minimax));
    }

    #[test]
    fn test_yaml_names() {
        let yaml = serde_yaml_ng::to_string(&GameMode::AiHard).unwrap();
        assert_eq!(yaml.trim(), "ai-hard");
        let parsed: GameMode = serde_yaml_ng::from_str("ai-easy").unwrap();
        assert_eq!(parsed, GameMode::AiEasy);
    }
}
