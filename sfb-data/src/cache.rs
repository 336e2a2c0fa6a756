use crate::filter::{select_subset, FilterParams, Selection};
use crate::subset::Subset;
use sfb_transect::{DataContext, ValidationError};

/// Remembers the most recent subset, keyed by its [`Selection`].
///
/// Display-only changes (parameter, map style, overlay toggles) leave the
/// selection untouched and reuse the cached rows.
#[derive(Debug, Default)]
pub struct SubsetCache {
    last: Option<(Selection, Subset)>,
    hits: u64,
    misses: u64,
}

impl SubsetCache {
    pub fn new() -> SubsetCache {
        SubsetCache::default()
    }

    /// Return the cached subset when the selection is unchanged, otherwise
    /// run the filter engine and remember the result. Invalid parameters
    /// never reach the cache.
    pub fn get_or_select(
        &mut self,
        ctx: &DataContext,
        params: &FilterParams,
    ) -> Result<Subset, ValidationError> {
        params.validate(ctx.len())?;
        let selection = params.selection();
        if let Some((cached, subset)) = &self.last {
            if *cached == selection {
                self.hits += 1;
                log::debug!("[SFB] cache: hit for {:?}", selection);
                return Ok(subset.clone());
            }
        }
        self.misses += 1;
        log::debug!("[SFB] cache: miss for {:?}", selection);
        let subset = select_subset(ctx, params)?;
        self.last = Some((selection, subset.clone()));
        Ok(subset)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
