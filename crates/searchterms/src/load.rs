//! Building an analyzer from command line inputs

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use searchterms_core::{AnalyzerConfig, MemoryDictionary, MemoryGazetteer, QueryAnalyzer};
use tracing::info;

use crate::error::{Error, Result};

/// Read an [`AnalyzerConfig`] from JSON; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let json = fs::read_to_string(path)?;
    let config: AnalyzerConfig = serde_json::from_str(&json)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AnalyzerConfig) -> Result<()> {
    if config.max_phrase_words == 0 {
        return Err(Error::Config("maxPhraseWords must be at least 1".into()));
    }
    if config.max_location_words == 0 {
        return Err(Error::Config("maxLocationWords must be at least 1".into()));
    }
    if config.min_year > config.max_year {
        return Err(Error::Config(format!(
            "minYear {} is after maxYear {}",
            config.min_year, config.max_year
        )));
    }
    Ok(())
}

/// Assemble the analyzer. Without a dictionary file the built-in English
/// vocabulary is used; without a gazetteer file places are not extracted.
pub fn build_analyzer(
    dictionary: Option<&Path>,
    gazetteer: Option<&Path>,
    config: Option<&Path>,
) -> Result<QueryAnalyzer> {
    let dictionary = match dictionary {
        Some(path) => {
            let dictionary = MemoryDictionary::from_path(path)?;
            info!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");
            dictionary
        }
        None => MemoryDictionary::english(),
    };

    let mut analyzer = QueryAnalyzer::new(Arc::new(dictionary));

    if let Some(path) = gazetteer {
        let gazetteer = MemoryGazetteer::from_path(path)?;
        info!(path = %path.display(), places = gazetteer.len(), "loaded gazetteer");
        analyzer = analyzer.with_gazetteer(Arc::new(gazetteer));
    }

    if let Some(path) = config {
        analyzer = analyzer.with_config(load_config(path)?);
    }

    Ok(analyzer)
}

/// Analysis clock: the given RFC 3339 instant, or the current time.
pub fn parse_now(text: Option<&str>) -> Result<DateTime<Utc>> {
    match text {
        Some(text) => Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
