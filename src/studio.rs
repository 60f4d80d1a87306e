//! Application state: word lists, the RNG and the current story card.

use std::path::PathBuf;

use futures::future::join;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::export::{ArtifactSink, EXPORT_FILENAME};
use crate::fetch::{ResourceFetcher, ResourceLoader};
use crate::rendering::{render_story, RenderedImage};
use crate::story::StoryRecord;
use crate::words::{load_word_list, WordList};
use crate::{Error, Result, StudioConfig};

/// JSON field holding the adjective array.
pub const ADJECTIVES_KEY: &str = "adjectives";
/// JSON field holding the noun array.
pub const NOUNS_KEY: &str = "nouns";

/// Outcome of [`Studio::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub adjectives: usize,
    pub nouns: usize,
    /// One message per list that failed to load
    pub failures: Vec<String>,
}

impl LoadReport {
    /// Both lists have at least one word.
    pub fn is_ready(&self) -> bool {
        self.adjectives > 0 && self.nouns > 0
    }
}

/// The most recently generated card together with the story behind it.
#[derive(Debug, Clone)]
pub struct CurrentStory {
    pub record: StoryRecord,
    pub image: RenderedImage,
}

/// Owned application state driven by the generate/save triggers.
///
/// Every mutating operation takes `&mut self`, so a generation can never
/// start while another one is still waiting on fonts.
pub struct Studio {
    config: StudioConfig,
    adjectives: WordList,
    nouns: WordList,
    current: Option<CurrentStory>,
    rng: StdRng,
}

impl Studio {
    /// Create a studio with empty word lists.
    pub fn new(config: StudioConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            adjectives: WordList::default(),
            nouns: WordList::default(),
            current: None,
            rng,
        }
    }

    /// Create a studio around already-loaded lists.
    pub fn with_words(config: StudioConfig, adjectives: WordList, nouns: WordList) -> Self {
        let mut studio = Self::new(config);
        studio.adjectives = adjectives;
        studio.nouns = nouns;
        studio
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn adjectives(&self) -> &WordList {
        &self.adjectives
    }

    pub fn nouns(&self) -> &WordList {
        &self.nouns
    }

    /// Both lists are populated and generation may proceed.
    pub fn is_ready(&self) -> bool {
        !self.adjectives.is_empty() && !self.nouns.is_empty()
    }

    pub fn current(&self) -> Option<&CurrentStory> {
        self.current.as_ref()
    }

    pub fn current_image(&self) -> Option<&RenderedImage> {
        self.current.as_ref().map(|c| &c.image)
    }

    /// Load both word lists using the default fetcher.
    pub async fn load(&mut self) -> Result<LoadReport> {
        let loader = ResourceLoader::new(&self.config)?;
        Ok(self.load_with(&loader).await)
    }

    /// Load both word lists concurrently through `fetcher`.
    ///
    /// A list that fails to load is logged and left empty; it does not fail
    /// the whole load.
    pub async fn load_with<F: ResourceFetcher>(&mut self, fetcher: &F) -> LoadReport {
        let adjectives_at = self.config.adjectives_location.clone();
        let nouns_at = self.config.nouns_location.clone();

        let (adjectives, nouns) = join(
            load_word_list(fetcher, &adjectives_at, ADJECTIVES_KEY),
            load_word_list(fetcher, &nouns_at, NOUNS_KEY),
        )
        .await;

        let mut report = LoadReport::default();
        match adjectives {
            Ok(list) => self.adjectives = list,
            Err(e) => {
                error!("Failed to load {}: {}", adjectives_at, e);
                report.failures.push(format!("{}: {}", adjectives_at, e));
            }
        }
        match nouns {
            Ok(list) => self.nouns = list,
            Err(e) => {
                error!("Failed to load {}: {}", nouns_at, e);
                report.failures.push(format!("{}: {}", nouns_at, e));
            }
        }

        report.adjectives = self.adjectives.len();
        report.nouns = self.nouns.len();
        info!(
            "word lists loaded: {} adjectives, {} nouns",
            report.adjectives, report.nouns
        );
        report
    }

    /// Pick a new story, render it and make it the current card.
    ///
    /// With an empty list this fails with [`Error::ListsNotLoaded`] and the
    /// current card is left as it was.
    pub async fn generate(&mut self) -> Result<&CurrentStory> {
        let record = StoryRecord::random(&self.adjectives, &self.nouns, &mut self.rng)?;
        self.publish(record).await
    }

    /// Render a caller-chosen story and make it the current card.
    pub async fn generate_from(&mut self, record: StoryRecord) -> Result<&CurrentStory> {
        self.publish(record).await
    }

    async fn publish(&mut self, record: StoryRecord) -> Result<&CurrentStory> {
        let image = render_story(&record).await?;
        info!("generated {} {}", record.color, record.description());
        Ok(&*self.current.insert(CurrentStory { record, image }))
    }

    /// Hand the current card to `sink` as `ColorStories_output.png`.
    pub fn export(&self, sink: &dyn ArtifactSink) -> Result<PathBuf> {
        let current = self.current.as_ref().ok_or(Error::NothingToExport)?;
        sink.save(EXPORT_FILENAME, &current.image.png_data)
    }
}
