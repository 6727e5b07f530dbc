//! The refresh cycle: regenerate every department's bulletins and rewrite
//! the content store once.

use bureau_core::{Bulletins, DEPARTMENTS, fallback_bulletins, normalize_bulletins, today};
use bureau_store::{ContentStore, StoreError};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::client::{AnthropicClient, GenerateError, GenerateRequest, TextGenerator};
use crate::config::{ConfigError, RefresherConfig};
use crate::prompt::build_prompt;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to save content document: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub date: NaiveDate,
    /// Departments whose bulletins came from the generation service.
    pub generated: usize,
    /// Departments that fell back to the fixed template, in processing order.
    pub fallbacks: Vec<String>,
}

impl RefreshReport {
    pub fn total(&self) -> usize {
        self.generated + self.fallbacks.len()
    }
}

/// Regenerates bulletins for the fixed department list.
///
/// Departments are processed one at a time. A failed generation only affects
/// its own department, which gets [`fallback_bulletins`]; the document is
/// written once after the last department.
pub struct Refresher<G, S> {
    generator: G,
    store: S,
    max_tokens: u32,
}

impl<S: ContentStore> Refresher<AnthropicClient, S> {
    /// Validate `config` and build a refresher that calls the Anthropic API.
    ///
    /// Fails before touching the store or the network if the credential is
    /// missing.
    pub fn from_config(config: &RefresherConfig, store: S) -> Result<Self, RefreshError> {
        let generator = AnthropicClient::from_config(config)?;
        Ok(Self::new(generator, store, config.max_tokens))
    }
}

impl<G: TextGenerator, S: ContentStore> Refresher<G, S> {
    pub fn new(generator: G, store: S, max_tokens: u32) -> Self {
        Self {
            generator,
            store,
            max_tokens,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run a full cycle dated today.
    pub async fn run(&self) -> Result<RefreshReport, RefreshError> {
        self.run_on(today()).await
    }

    /// Run a full cycle, stamping the document with `date`.
    pub async fn run_on(&self, date: NaiveDate) -> Result<RefreshReport, RefreshError> {
        let mut doc = self.store.load();
        let mut report = RefreshReport {
            date,
            generated: 0,
            fallbacks: Vec::new(),
        };

        for department in &DEPARTMENTS {
            info!(department = department.name, "generating bulletins");
            let bulletins = match self.generate(department.name).await {
                Ok(bulletins) => {
                    report.generated += 1;
                    bulletins
                }
                Err(e) => {
                    warn!(department = department.name, error = %e, "generation failed, using fallback");
                    report.fallbacks.push(department.name.to_string());
                    fallback_bulletins(department.name)
                }
            };
            doc.set_bulletins(department.name, bulletins);
        }

        doc.last_updated = date;
        self.store.save(&doc)?;

        info!(
            date = %date,
            generated = report.generated,
            fallbacks = report.fallbacks.len(),
            "content updated"
        );
        Ok(report)
    }

    async fn generate(&self, department: &str) -> Result<Bulletins, GenerateError> {
        let request = GenerateRequest {
            prompt: build_prompt(department),
            max_tokens: self.max_tokens,
        };
        let text = self.generator.generate(&request).await?;
        Ok(normalize_bulletins(&text))
    }
}
