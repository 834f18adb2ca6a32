// src/presentation/controllers/search.rs
use crate::application::dto::PostDto;
use crate::application::queries::PostQueryService;
use crate::application::queries::posts::MIN_QUERY_LEN;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::Arc;
use std::time::Duration;

/// Search surface state as a tagged union: a phase carries exactly the data
/// that is valid in it, so "results with an error" or "a selection without
/// results" cannot be expressed.
#[derive(Debug, Clone)]
pub enum SearchPhase {
    Empty,
    Debouncing,
    Searching,
    Results {
        items: Vec<PostDto>,
        selected: Option<usize>,
    },
    NoResults,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press asks the host UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Nothing beyond re-rendering the snapshot.
    None,
    /// Navigate to the activated post.
    Activate(String),
    /// Close the search surface.
    Closed,
}

#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    /// The raw query, echoed immediately on every keystroke.
    pub query: String,
    /// The query that last survived the quiet window; trails `query` while
    /// a countdown is running.
    pub debounced: String,
    pub phase: SearchPhase,
}

struct SearchInner {
    query: String,
    debounced: String,
    phase: SearchPhase,
    generation: u64,
}

/// Debounced search coordinator with keyboard navigation.
///
/// Each keystroke lands through `input`, which restarts the quiet-window
/// countdown; only the final keystroke in a burst reaches the store. The
/// generation counter doubles as the stale-response guard for searches that
/// resolve after newer input.
pub struct SearchController {
    queries: Arc<PostQueryService>,
    debounce: Duration,
    limit: u32,
    inner: Mutex<SearchInner>,
}

impl SearchController {
    pub fn new(queries: Arc<PostQueryService>, debounce: Duration, limit: u32) -> Self {
        Self {
            queries,
            debounce,
            limit,
            inner: Mutex::new(SearchInner {
                query: String::new(),
                debounced: String::new(),
                phase: SearchPhase::Empty,
                generation: 0,
            }),
        }
    }

    /// Record a keystroke. The raw query updates immediately for responsive
    /// echo; the store is only consulted once input has been quiet for the
    /// debounce window.
    pub async fn input(&self, text: impl Into<String>) {
        let text = text.into();
        let generation = {
            let mut inner = self.state();
            inner.generation += 1;
            inner.query = text.clone();
            inner.phase = SearchPhase::Debouncing;
            inner.generation
        };

        tokio::time::sleep(self.debounce).await;

        {
            let mut inner = self.state();
            if inner.generation != generation {
                // A newer keystroke restarted the countdown.
                return;
            }
            inner.debounced = text.clone();
        }

        self.run_search(generation, &text).await;
    }

    pub async fn handle_key(&self, key: SearchKey) -> SearchAction {
        match key {
            SearchKey::Escape => {
                self.reset();
                SearchAction::Closed
            }
            SearchKey::ArrowDown | SearchKey::ArrowUp => {
                self.move_selection(key);
                SearchAction::None
            }
            SearchKey::Enter => {
                let target = {
                    let mut inner = self.state();
                    let target = match &inner.phase {
                        SearchPhase::Results {
                            items,
                            selected: Some(index),
                        } => items.get(*index).map(|post| post.id.clone()),
                        _ => None,
                    };
                    if target.is_some() {
                        // Activation leaves the surface; next open starts
                        // from scratch.
                        Self::clear(&mut inner);
                    }
                    target
                };
                match target {
                    Some(id) => SearchAction::Activate(id),
                    None => {
                        let (generation, raw) = {
                            let mut inner = self.state();
                            inner.generation += 1;
                            (inner.generation, inner.query.clone())
                        };
                        self.run_search(generation, &raw).await;
                        SearchAction::None
                    }
                }
            }
        }
    }

    /// Hard reset: query, results, error, and selection all go. Called on
    /// Escape and when the host closes the surface.
    pub fn close(&self) {
        self.reset();
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let inner = self.state();
        SearchSnapshot {
            query: inner.query.clone(),
            debounced: inner.debounced.clone(),
            phase: inner.phase.clone(),
        }
    }

    async fn run_search(&self, generation: u64, raw: &str) {
        if raw.trim().chars().count() < MIN_QUERY_LEN {
            let mut inner = self.state();
            if inner.generation == generation {
                inner.phase = SearchPhase::Empty;
            }
            return;
        }

        {
            let mut inner = self.state();
            if inner.generation != generation {
                return;
            }
            inner.phase = SearchPhase::Searching;
        }

        let outcome = self.queries.search(raw, self.limit).await;

        let mut inner = self.state();
        if inner.generation != generation {
            tracing::debug!(generation, "discarding superseded search response");
            return;
        }
        inner.phase = match outcome {
            Ok(items) if items.is_empty() => SearchPhase::NoResults,
            Ok(items) => SearchPhase::Results {
                items,
                selected: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                SearchPhase::Error(err.to_string())
            }
        };
    }

    fn move_selection(&self, key: SearchKey) {
        let mut inner = self.state();
        if let SearchPhase::Results { items, selected } = &mut inner.phase {
            if items.is_empty() {
                return;
            }
            let last = items.len() - 1;
            *selected = Some(match (key, *selected) {
                (SearchKey::ArrowDown, Some(index)) if index < last => index + 1,
                (SearchKey::ArrowDown, _) => 0,
                (SearchKey::ArrowUp, Some(index)) if index > 0 => index - 1,
                (SearchKey::ArrowUp, _) => last,
                _ => return,
            });
        }
    }

    fn reset(&self) {
        let mut inner = self.state();
        Self::clear(&mut inner);
    }

    fn clear(inner: &mut SearchInner) {
        // Bumping the generation cancels any in-flight debounce or search.
        inner.generation += 1;
        inner.query.clear();
        inner.debounced.clear();
        inner.phase = SearchPhase::Empty;
    }

    fn state(&self) -> MutexGuard<'_, SearchInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
