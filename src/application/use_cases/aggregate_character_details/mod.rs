use crate::catalog::domain::{CharacterDetail, CharacterViewModel, Film, Homeworld, Species};
use crate::catalog::policies::SpeciesResolution;
use crate::ports::outbound::{decode_resource, CatalogRepository, ProgressReporter};
use crate::shared::error::{AggregationStage, CatalogError};
use crate::shared::Result;
use anyhow::Context;
use futures::future::join_all;

/// AggregateCharacterDetailsUseCase - resolves one character into a detail view
///
/// A character resource only carries references to its homeworld, species
/// and films. This use case fetches the character, then dereferences those
/// references and merges everything into a `CharacterViewModel`.
///
/// The homeworld, species and film requests are issued together once the
/// character is known and all of them are awaited before anything is
/// returned. A single failure fails the whole aggregation.
///
/// # Type Parameters
/// * `R` - CatalogRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AggregateCharacterDetailsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> AggregateCharacterDetailsUseCase<R, PR>
where
    R: CatalogRepository,
    PR: ProgressReporter,
{
    /// Creates a new AggregateCharacterDetailsUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Executes the aggregation for a character locator
    ///
    /// # Arguments
    /// * `locator` - Absolute URL of the character resource
    ///
    /// # Returns
    /// The fully resolved CharacterViewModel, or the first failure wrapped in
    /// `CatalogError::AggregationFailed`
    pub async fn execute(&self, locator: &str) -> Result<CharacterViewModel> {
        self.progress_reporter
            .start_loading("Loading character details...");
        let result = self.aggregate(locator).await;
        self.progress_reporter.finish_loading();
        result
    }

    async fn aggregate(&self, locator: &str) -> Result<CharacterViewModel> {
        // Step 1: the character itself; everything else hangs off its references
        let mut detail = self
            .fetch_character(locator)
            .await
            .with_context(|| Self::failed(locator, AggregationStage::Character))?;
        if detail.url.is_empty() {
            detail.url = locator.to_string();
        }

        // Step 2: homeworld, species and films together
        let (homeworld, species, films) = futures::join!(
            self.resolve_homeworld(detail.homeworld.as_deref()),
            self.resolve_species(&detail.species),
            self.resolve_films(&detail.films),
        );

        let homeworld =
            homeworld.with_context(|| Self::failed(locator, AggregationStage::Homeworld))?;
        let species = species.with_context(|| Self::failed(locator, AggregationStage::Species))?;
        let films = films
            .map_err(|(index, e)| e.context(Self::failed(locator, AggregationStage::Film(index))))?;

        // Step 3: merge
        CharacterViewModel::merge(detail, homeworld, species, films)
    }

    fn failed(locator: &str, stage: AggregationStage) -> CatalogError {
        CatalogError::AggregationFailed {
            locator: locator.to_string(),
            stage,
        }
    }

    async fn fetch_character(&self, locator: &str) -> Result<CharacterDetail> {
        let value = self.repository.fetch_resource(locator).await?;
        decode_resource(locator, value)
    }

    async fn resolve_homeworld(&self, reference: Option<&str>) -> Result<Homeworld> {
        match reference {
            Some(reference) => {
                let value = self.repository.fetch_resource(reference).await?;
                decode_resource(reference, value)
            }
            None => Ok(Homeworld::unknown()),
        }
    }

    async fn resolve_species(&self, references: &[String]) -> Result<String> {
        match SpeciesResolution::reference_to_fetch(references) {
            Some(reference) => {
                let value = self.repository.fetch_resource(reference).await?;
                let species: Species = decode_resource(reference, value)?;
                Ok(species.name)
            }
            None => Ok(SpeciesResolution::default_species()),
        }
    }

    /// Resolves every film title, in reference order
    ///
    /// On failure returns the zero-based index of the first failed reference.
    async fn resolve_films(
        &self,
        references: &[String],
    ) -> std::result::Result<Vec<String>, (usize, anyhow::Error)> {
        let fetches = references.iter().map(|reference| async move {
            let value = self.repository.fetch_resource(reference).await?;
            let film: Film = decode_resource(reference, value)?;
            Ok::<_, anyhow::Error>(film.title)
        });

        join_all(fetches)
            .await
            .into_iter()
            .enumerate()
            .map(|(index, result)| result.map_err(|e| (index, e)))
            .collect()
    }
}
