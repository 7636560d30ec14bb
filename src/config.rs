use log::Level;
use serde::Deserialize;
use thiserror::Error;

const CARD_JSON: &str = include_str!("../card.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse card config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid card config: {0}")]
    Invalid(String),
}

/// Everything on the card that is content rather than behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub gate_title: String,
    pub gate_tagline: String,
    pub gate_button: String,
    pub intro_title: String,
    pub intro_body: String,
    pub gallery_title: String,
    pub photos: Vec<String>,
    pub playlist_title: String,
    pub playlist_url: String,
    pub question: String,
    pub success_title: String,
    pub success_body: String,
    pub success_photo: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            gate_title: "Hey You...".to_string(),
            gate_tagline: "I have a little story to tell.".to_string(),
            gate_button: "Open My Heart".to_string(),
            intro_title: "Once upon a time...".to_string(),
            intro_body: "A boy met a girl, and the world suddenly became a brighter place.".to_string(),
            gallery_title: "My Favorite View".to_string(),
            photos: ["one", "two", "three", "four", "five", "six"]
                .iter()
                .map(|name| format!("/image/{}.jpg", name))
                .collect(),
            playlist_title: "The Rhythm of Us".to_string(),
            playlist_url: "https://open.spotify.com/embed/playlist/6nOcT2cW5CW2O5xcA3boTw?utm_source=generator".to_string(),
            question: "Will you be my Valentine?".to_string(),
            success_title: "YAYYY!!!".to_string(),
            success_body: "I knew you'd say yes! You've made me the happiest person in the universe! ❤️".to_string(),
            success_photo: "/image/one.jpg".to_string(),
        }
    }
}

impl CardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: CardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.playlist_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "playlist_url must be https, got {:?}",
                self.playlist_url
            )));
        }
        if let Some(index) = self.photos.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("photo #{} has an empty path", index + 1)));
        }
        for (index, photo) in self.photos.iter().enumerate() {
            if self.photos[..index].contains(photo) {
                return Err(ConfigError::Invalid(format!("photo {} is listed twice", photo)));
            }
        }
        if self.success_photo.trim().is_empty() {
            return Err(ConfigError::Invalid("success_photo is empty".to_string()));
        }
        Ok(())
    }

    /// Loads the embedded card.json, falling back to the built-in content so the
    /// card still renders with a broken config.
    pub fn load() -> Self {
        Self::load_from(CARD_JSON)
    }

    fn load_from(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => {
                log::debug!("Loaded card config with {} photos", config.photos.len());
                config
            }
            Err(e) => {
                log::error!("{}, using built-in card content", e);
                Self::default()
            }
        }
    }
}
