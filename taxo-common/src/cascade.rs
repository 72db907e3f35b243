//! Cascading classification-level selection
//!
//! Six dependent selection levels, Kingdom through Genus. A level can only
//! hold a value while every level before it does; changing a level resets
//! everything below it and recomputes the next level's options from the
//! records matching the selections so far. Once Genus is selected the
//! matching records form the final species list.
//!
//! States are values: every transition returns a new [`CascadeState`].

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::taxonomy::{Dataset, Level, TaxonNode, TaxonPath, TaxonomyRecord};

/// Rejected cascade transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// A value was chosen for a level whose predecessors are not all selected
    #[error("{0} is disabled until every preceding level is selected")]
    LevelDisabled(Level),

    /// The value is not among the level's current options
    #[error("'{value}' is not an available {level}")]
    UnknownOption { level: Level, value: String },
}

/// Selection control state for one level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelState {
    pub selected: Option<TaxonNode>,
    /// Candidate values, sorted by English name
    pub options: Vec<TaxonNode>,
    pub enabled: bool,
}

/// Immutable snapshot of all six selection levels plus the final result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeState {
    levels: [LevelState; Level::COUNT],
    /// Dataset indices of the final species list (non-empty only once Genus is selected)
    species: Vec<usize>,
}

impl CascadeState {
    /// Initial state: Kingdom enabled with every distinct kingdom, the rest disabled
    pub fn new(dataset: &Dataset) -> Self {
        let mut levels: [LevelState; Level::COUNT] = Default::default();
        levels[Level::Kingdom.index()] = LevelState {
            selected: None,
            options: distinct_options(dataset.records(), Level::Kingdom),
            enabled: true,
        };
        Self {
            levels,
            species: Vec::new(),
        }
    }

    pub fn level(&self, level: Level) -> &LevelState {
        &self.levels[level.index()]
    }

    pub fn selected(&self, level: Level) -> Option<&TaxonNode> {
        self.level(level).selected.as_ref()
    }

    pub fn options(&self, level: Level) -> &[TaxonNode] {
        &self.level(level).options
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.level(level).enabled
    }

    /// Deepest level holding a selection, if any
    pub fn deepest_selected(&self) -> Option<Level> {
        Level::ALL
            .into_iter()
            .take_while(|&level| self.selected(level).is_some())
            .last()
    }

    /// First enabled level without a selection (the one awaiting input)
    pub fn pending_level(&self) -> Option<Level> {
        Level::ALL
            .into_iter()
            .find(|&level| self.is_enabled(level) && self.selected(level).is_none())
    }

    /// True once Genus is selected
    pub fn is_complete(&self) -> bool {
        self.selected(Level::Genus).is_some()
    }

    /// Dataset indices of the final species list
    pub fn species_indices(&self) -> &[usize] {
        &self.species
    }

    /// Records of the final species list, in dataset order
    pub fn species<'a>(&self, dataset: &'a Dataset) -> Vec<&'a TaxonomyRecord> {
        self.species
            .iter()
            .filter_map(|&index| dataset.get(index))
            .collect()
    }

    /// Position in the final species list of the species with the given Arabic name
    pub fn species_position(&self, dataset: &Dataset, arabic: &str) -> Option<usize> {
        self.species(dataset)
            .iter()
            .position(|record| record.species.arabic == arabic)
    }

    /// Set or clear the value at `level` and run the transition
    ///
    /// # Errors
    /// Choosing a value (not clearing) fails if the level is disabled or the
    /// value is not among its options.
    pub fn select(
        &self,
        dataset: &Dataset,
        level: Level,
        value: Option<TaxonNode>,
    ) -> Result<Self, CascadeError> {
        if let Some(node) = &value {
            if !self.is_enabled(level) {
                return Err(CascadeError::LevelDisabled(level));
            }
            if !self.options(level).contains(node) {
                return Err(CascadeError::UnknownOption {
                    level,
                    value: node.english.clone(),
                });
            }
        }

        let mut next = self.clone();
        next.levels[level.index()].selected = value;
        Ok(next.transition(dataset, level))
    }

    /// Select the option at `level` whose English name is `english`
    pub fn select_by_english(
        &self,
        dataset: &Dataset,
        level: Level,
        english: &str,
    ) -> Result<Self, CascadeError> {
        if !self.is_enabled(level) {
            return Err(CascadeError::LevelDisabled(level));
        }
        let node = self
            .options(level)
            .iter()
            .find(|node| node.english == english)
            .cloned()
            .ok_or_else(|| CascadeError::UnknownOption {
                level,
                value: english.to_string(),
            })?;
        self.select(dataset, level, Some(node))
    }

    /// Clear `level`, resetting every level below it
    pub fn clear(&self, dataset: &Dataset, level: Level) -> Self {
        let mut next = self.clone();
        next.levels[level.index()].selected = None;
        next.transition(dataset, level)
    }

    /// Apply a full classification path top-down, one level at a time
    pub fn select_path(&self, dataset: &Dataset, path: &TaxonPath) -> Result<Self, CascadeError> {
        Level::ALL.into_iter().try_fold(self.clone(), |state, level| {
            state.select(dataset, level, Some(path[level.index()].clone()))
        })
    }

    fn transition(mut self, dataset: &Dataset, level: Level) -> Self {
        for &below in level.following() {
            self.levels[below.index()] = LevelState::default();
        }
        self.species.clear();

        if level
            .preceding()
            .iter()
            .any(|&above| self.selected(above).is_none())
        {
            debug!(%level, "Preceding level unset, skipping filter");
            return self;
        }
        if self.selected(level).is_none() {
            debug!(%level, "Level cleared");
            return self;
        }

        let filtered: Vec<usize> = dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches_through(record, level))
            .map(|(index, _)| index)
            .collect();

        match level.next() {
            Some(next) => {
                let options = distinct_options(
                    filtered.iter().filter_map(|&index| dataset.get(index)),
                    next,
                );
                debug!(
                    %level,
                    matching = filtered.len(),
                    next_level = %next,
                    options = options.len(),
                    "Cascade advanced"
                );
                self.levels[next.index()] = LevelState {
                    selected: None,
                    options,
                    enabled: true,
                };
            }
            None => {
                debug!(species = filtered.len(), "Cascade complete");
                self.species = filtered;
            }
        }
        self
    }

    /// English-name equality on every selected level up to and including `through`
    fn matches_through(&self, record: &TaxonomyRecord, through: Level) -> bool {
        Level::ALL[..=through.index()]
            .iter()
            .all(|&level| match self.selected(level) {
                Some(selected) => record.node(level).english == selected.english,
                None => true,
            })
    }
}

/// Distinct nodes at `level` across `records`, sorted by English name
///
/// Uniqueness is full equality on both names; first-seen order breaks ties.
pub fn distinct_options<'a>(
    records: impl IntoIterator<Item = &'a TaxonomyRecord>,
    level: Level,
) -> Vec<TaxonNode> {
    let mut seen: HashSet<&TaxonNode> = HashSet::new();
    let mut options: Vec<TaxonNode> = Vec::new();
    for record in records {
        let node = record.node(level);
        if seen.insert(node) {
            options.push(node.clone());
        }
    }
    options.sort_by(|a, b| compare_english(&a.english, &b.english));
    options
}

fn compare_english(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
