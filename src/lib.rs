//! Color Stories
//!
//! Generates story cards: a random background color paired with a random
//! adjective/noun phrase, rendered to a 1080×1080 PNG with a white caption
//! bar, and exported as `ColorStories_output.png`.
//!
//! # Example
//!
//! ```no_run
//! use colorstories::{DirectorySink, Studio, StudioConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StudioConfig {
//!     adjectives_location: "datasets/adjectives.json".to_string(),
//!     nouns_location: "datasets/nouns.json".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut studio = Studio::new(config);
//! studio.load().await?;
//! let story = studio.generate().await?;
//! println!("{} {}", story.record.color, story.record.description());
//! studio.export(&DirectorySink::new("."))?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod export;
pub mod fetch;
pub mod rendering;
pub mod session;
pub mod story;
pub mod studio;
pub mod words;

pub use color::ColorValue;
pub use export::{ArtifactSink, DirectorySink, MemorySink, EXPORT_FILENAME};
pub use fetch::{ResourceFetcher, ResourceLoader};
pub use rendering::RenderedImage;
pub use story::StoryRecord;
pub use studio::{CurrentStory, LoadReport, Studio};
pub use words::WordList;

/// Configuration for a [`Studio`]
///
/// The defaults match the usual project layout: word lists under
/// `datasets/`, resolved against the current directory, and exports written
/// to the current directory.
///
/// # Examples
///
/// ```
/// let cfg = colorstories::StudioConfig::default();
/// assert_eq!(cfg.nouns_location, "datasets/nouns.json");
/// ```
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Location of the `{ "adjectives": [...] }` resource
    pub adjectives_location: String,
    /// Location of the `{ "nouns": [...] }` resource
    pub nouns_location: String,
    /// Base URL for relative locations; when unset they are read from disk
    pub base_url: Option<String>,
    /// Directory relative file locations are resolved against
    pub base_dir: PathBuf,
    /// User agent sent when fetching over HTTP
    pub user_agent: String,
    /// Timeout for HTTP fetches in milliseconds
    pub timeout_ms: u64,
    /// Directory exports are written to
    pub output_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            adjectives_location: "datasets/adjectives.json".to_string(),
            nouns_location: "datasets/nouns.json".to_string(),
            base_url: None,
            base_dir: PathBuf::from("."),
            user_agent: format!("colorstories/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: 30000,
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.adjectives_location, "datasets/adjectives.json");
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.user_agent.starts_with("colorstories/"));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_override() {
        let config = StudioConfig {
            seed: Some(5),
            base_url: Some("http://localhost:8080/".into()),
            ..Default::default()
        };
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.nouns_location, "datasets/nouns.json");
    }
}
