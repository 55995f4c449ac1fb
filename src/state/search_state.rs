// ============================================================================
// SEARCH STATE - Estado de la tabla de perros
// ============================================================================
// Idle → Loading → Ready | Error. Cada ciclo de búsqueda recibe una
// generación; los resultados de una generación vieja se descartan.
// Paginación en dos niveles: el servicio entrega páginas de 25 ids y la
// tabla corta páginas locales de 5 filas sobre el array en memoria.
// ============================================================================

use std::collections::HashSet;

use crate::models::{Dog, SearchCriteria, SearchCursor};
use crate::utils::constants::LOCAL_PAGE_SIZE;
use crate::utils::dedup::merge_by_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleKind {
    /// Criteria changed: start a new cursor chain
    Fresh,
    /// Follow the cursor of the current chain
    NextPage(SearchCursor),
}

/// Everything a search cycle needs, captured when it starts
#[derive(Debug, Clone, PartialEq)]
pub struct CycleRequest {
    pub generation: u64,
    pub criteria: SearchCriteria,
    pub kind: CycleKind,
    /// Ids already loaded in this cursor chain
    pub seen_ids: HashSet<String>,
}

/// Result of a completed cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleOutcome {
    pub generation: u64,
    /// Ids sent to the detail fetch (deduped, capped)
    pub requested_ids: Vec<String>,
    pub dogs: Vec<Dog>,
    pub next: Option<SearchCursor>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Fresh,
    NextPage { target_page: usize },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ResultSet {
    dogs: Vec<Dog>,
    seen_ids: HashSet<String>,
    cursor: Option<SearchCursor>,
    page: usize,
    total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    criteria: SearchCriteria,
    results: ResultSet,
    /// Last shown result set, put back if a fresh cycle fails
    stashed: Option<ResultSet>,
    phase: SearchPhase,
    generation: u64,
    in_flight: Option<InFlight>,
    last_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.results.dogs
    }

    pub fn page(&self) -> usize {
        self.results.page
    }

    pub fn cursor(&self) -> Option<&SearchCursor> {
        self.results.cursor.as_ref()
    }

    pub fn total(&self) -> Option<u64> {
        self.results.total
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Starts a cycle with the current criteria (first load, manual refresh)
    pub fn refresh(&mut self) -> CycleRequest {
        self.begin_fresh_cycle()
    }

    pub fn set_breed_filter(&mut self, breed: impl Into<String>) -> Option<CycleRequest> {
        let breed = breed.into();
        if breed == self.criteria.breed {
            return None;
        }
        self.criteria.breed = breed;
        Some(self.begin_fresh_cycle())
    }

    pub fn set_zip_code(&mut self, zip_code: impl Into<String>) -> Option<CycleRequest> {
        let zip_code = zip_code.into().trim().to_string();
        if zip_code == self.criteria.zip_code {
            return None;
        }
        self.criteria.zip_code = zip_code;
        Some(self.begin_fresh_cycle())
    }

    pub fn set_radius(&mut self, radius_miles: u32) -> Option<CycleRequest> {
        if radius_miles == self.criteria.radius_miles {
            return None;
        }
        self.criteria.radius_miles = radius_miles;
        Some(self.begin_fresh_cycle())
    }

    pub fn toggle_sort(&mut self) -> CycleRequest {
        self.criteria.sort = self.criteria.sort.toggled();
        self.begin_fresh_cycle()
    }

    fn begin_fresh_cycle(&mut self) -> CycleRequest {
        self.generation += 1;

        // Rows are cleared right away; keep the last shown set unless it was
        // already a cleared placeholder of a superseded fresh cycle
        let previous = std::mem::take(&mut self.results);
        if self.in_flight != Some(InFlight::Fresh) {
            self.stashed = Some(previous);
        }

        self.in_flight = Some(InFlight::Fresh);
        self.phase = SearchPhase::Loading;
        self.last_error = None;

        CycleRequest {
            generation: self.generation,
            criteria: self.criteria.clone(),
            kind: CycleKind::Fresh,
            seen_ids: HashSet::new(),
        }
    }

    /// Next table page. Slices locally when rows are loaded, otherwise
    /// returns the cycle that follows the cursor. `None` means nothing to fetch.
    pub fn next_page(&mut self) -> Option<CycleRequest> {
        if self.is_loading() {
            return None;
        }

        let target_page = self.results.page + 1;
        if target_page * LOCAL_PAGE_SIZE < self.results.dogs.len() {
            self.results.page = target_page;
            return None;
        }

        let Some(cursor) = self.results.cursor.clone() else {
            log::warn!("⚠️ [SEARCH] No hay más páginas disponibles");
            return None;
        };

        self.generation += 1;
        self.in_flight = Some(InFlight::NextPage { target_page });
        self.phase = SearchPhase::Loading;
        self.last_error = None;

        Some(CycleRequest {
            generation: self.generation,
            criteria: self.criteria.clone(),
            kind: CycleKind::NextPage(cursor),
            seen_ids: self.results.seen_ids.clone(),
        })
    }

    /// Previous table page; always local. Refused while a cursor fetch is
    /// pending, since its outcome moves the page forward.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.results.page -= 1;
        true
    }

    /// Applies a finished cycle; `false` when it belongs to a superseded generation
    pub fn apply_outcome(&mut self, outcome: CycleOutcome) -> bool {
        if outcome.generation != self.generation {
            log::debug!(
                "🗑️ [SEARCH] Resultado descartado (generación {} != {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        match self.in_flight.take() {
            Some(InFlight::NextPage { target_page }) => {
                self.results.page = target_page;
            }
            Some(InFlight::Fresh) | None => {
                self.stashed = None;
            }
        }

        merge_by_id(&mut self.results.dogs, outcome.dogs);
        self.results.seen_ids.extend(outcome.requested_ids);
        self.results.cursor = outcome.next;
        if outcome.total.is_some() {
            self.results.total = outcome.total;
        }
        self.phase = SearchPhase::Ready;
        true
    }

    /// Records a failed cycle. A failed fresh cycle puts the previous rows
    /// back; a failed next page leaves the current rows as they are.
    pub fn apply_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }

        if let Some(InFlight::Fresh) = self.in_flight.take() {
            if let Some(previous) = self.stashed.take() {
                self.results = previous;
            }
        }

        self.phase = SearchPhase::Error;
        self.last_error = Some(message.into());
        true
    }

    /// Rows of the current table page
    pub fn displayed(&self) -> &[Dog] {
        let dogs = &self.results.dogs;
        let start = self.results.page.saturating_mul(LOCAL_PAGE_SIZE);
        if start >= dogs.len() {
            return &[];
        }
        let end = (start + LOCAL_PAGE_SIZE).min(dogs.len());
        &dogs[start..end]
    }

    /// "No dogs found" row: a search has run, nothing to show and nothing on the way
    pub fn shows_empty_row(&self) -> bool {
        self.phase != SearchPhase::Idle && self.displayed().is_empty() && !self.is_loading()
    }

    pub fn can_go_prev(&self) -> bool {
        self.results.page > 0 && !matches!(self.in_flight, Some(InFlight::NextPage { .. }))
    }

    pub fn can_go_next(&self) -> bool {
        if self.is_loading() {
            return false;
        }
        (self.results.page + 1) * LOCAL_PAGE_SIZE < self.results.dogs.len() || self.results.cursor.is_some()
    }

    pub fn loaded_pages(&self) -> usize {
        self.results.dogs.len().div_ceil(LOCAL_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use crate::services::mock::dog;

    fn cursor(path: &str) -> SearchCursor {
        SearchCursor(path.to_string())
    }

    fn outcome(request: &CycleRequest, ids: &[&str], next: Option<&str>) -> CycleOutcome {
        CycleOutcome {
            generation: request.generation,
            requested_ids: ids.iter().map(|id| id.to_string()).collect(),
            dogs: ids.iter().map(|id| dog(id, "Poodle")).collect(),
            next: next.map(cursor),
            total: None,
        }
    }

    fn ready_state(ids: &[&str], next: Option<&str>) -> SearchState {
        let mut state = SearchState::new();
        let request = state.refresh();
        assert!(state.apply_outcome(outcome(&request, ids, next)));
        state
    }

    fn displayed_ids(state: &SearchState) -> Vec<String> {
        state.displayed().iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = SearchState::new();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(state.displayed().is_empty());
        assert!(!state.shows_empty_row());
        assert!(!state.can_go_next());
    }

    #[test]
    fn refresh_enters_loading_without_empty_row() {
        let mut state = SearchState::new();
        let request = state.refresh();

        assert_eq!(request.kind, CycleKind::Fresh);
        assert_eq!(request.generation, 1);
        assert!(state.is_loading());
        assert!(!state.shows_empty_row());
    }

    #[test]
    fn toggling_sort_resets_page_and_cursor() {
        let ids: Vec<String> = (0..12).map(|i| format!("d{}", i)).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut state = ready_state(&id_refs, Some("/dogs/search?from=25"));
        assert!(state.next_page().is_none());
        assert_eq!(state.page(), 1);

        let request = state.toggle_sort();

        assert_eq!(request.criteria.sort, SortOrder::Desc);
        assert_eq!(request.kind, CycleKind::Fresh);
        assert!(request.seen_ids.is_empty());
        assert_eq!(state.page(), 0);
        assert!(state.cursor().is_none());
        assert!(state.dogs().is_empty());
    }

    #[test]
    fn changing_filters_clears_rows_and_starts_fresh() {
        let mut state = ready_state(&["a", "b"], None);

        let request = state.set_breed_filter("Poodle").unwrap();
        assert_eq!(request.criteria.breed, "Poodle");
        assert!(state.dogs().is_empty());

        let request = state.set_zip_code("10001").unwrap();
        assert_eq!(request.criteria.zip_code, "10001");
        assert!(state.dogs().is_empty());

        let request = state.set_radius(25).unwrap();
        assert_eq!(request.criteria.radius_miles, 25);
        assert_eq!(request.generation, 4);
        assert!(state.is_loading());
    }

    #[test]
    fn unchanged_criteria_start_nothing() {
        let mut state = SearchState::new();
        assert!(state.set_breed_filter("").is_none());
        assert!(state.set_zip_code("  ").is_none());
        assert!(state.set_radius(0).is_none());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn stale_outcome_is_dropped() {
        let mut state = SearchState::new();
        let first = state.set_breed_filter("Pug").unwrap();
        let second = state.set_breed_filter("Poodle").unwrap();

        assert!(!state.apply_outcome(outcome(&first, &["pug-1"], None)));
        assert!(state.dogs().is_empty());
        assert!(state.is_loading());

        assert!(state.apply_outcome(outcome(&second, &["poodle-1"], None)));
        assert_eq!(displayed_ids(&state), vec!["poodle-1"]);
        assert_eq!(state.phase(), SearchPhase::Ready);
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut state = SearchState::new();
        let first = state.refresh();
        let _second = state.toggle_sort();

        assert!(!state.apply_failure(first.generation, "boom"));
        assert!(state.is_loading());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn local_pages_slice_by_five() {
        let mut state = ready_state(&["a", "b", "c", "d", "e", "f", "g"], None);
        assert_eq!(displayed_ids(&state), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(state.loaded_pages(), 2);
        assert!(state.can_go_next());

        assert!(state.next_page().is_none());
        assert_eq!(displayed_ids(&state), vec!["f", "g"]);
        assert!(!state.can_go_next());

        // past the last page with no cursor: no-op
        assert!(state.next_page().is_none());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn prev_page_is_local() {
        let mut state = ready_state(&["a", "b", "c", "d", "e", "f"], None);
        assert!(!state.prev_page());
        state.next_page();
        let generation = state.generation();

        assert!(state.prev_page());
        assert_eq!(state.page(), 0);
        assert_eq!(state.generation(), generation);
        assert!(!state.is_loading());
    }

    #[test]
    fn prev_page_is_refused_while_cursor_page_loads() {
        let ids = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let mut state = ready_state(&ids, Some("/dogs/search?from=25"));
        assert!(state.next_page().is_none());
        assert_eq!(state.page(), 1);

        let request = state.next_page().unwrap();
        assert!(!state.can_go_prev());
        assert!(!state.prev_page());
        assert_eq!(state.page(), 1);

        assert!(state.apply_outcome(outcome(&request, &["k", "l"], None)));
        assert_eq!(state.page(), 2);
        assert_eq!(displayed_ids(&state), vec!["k", "l"]);
        assert!(state.can_go_prev());
    }

    #[test]
    fn next_page_follows_cursor_when_rows_run_out() {
        let mut state = ready_state(&["a", "b", "c"], Some("/dogs/search?from=25"));

        let request = state.next_page().unwrap();
        assert_eq!(request.kind, CycleKind::NextPage(cursor("/dogs/search?from=25")));
        assert!(request.seen_ids.contains("a"));
        assert_eq!(request.seen_ids.len(), 3);
        assert!(state.is_loading());
        assert!(!state.can_go_next());
        // rows stay while the next page loads
        assert_eq!(displayed_ids(&state), vec!["a", "b", "c"]);

        assert!(state.apply_outcome(outcome(&request, &["d", "e"], None)));
        assert_eq!(state.page(), 1);
        assert!(state.cursor().is_none());
        assert_eq!(state.dogs().len(), 5);
    }

    #[test]
    fn page_beyond_rows_shows_empty_row_only_when_idle() {
        let mut state = ready_state(&["a", "b", "c", "d", "e"], Some("/next"));
        let request = state.next_page().unwrap();
        assert!(state.displayed().len() == 5);

        // cursor page brought nothing new
        assert!(state.apply_outcome(outcome(&request, &[], None)));
        assert_eq!(state.page(), 1);
        assert!(state.displayed().is_empty());
        assert!(state.shows_empty_row());
    }

    #[test]
    fn next_page_ignored_while_loading() {
        let mut state = SearchState::new();
        state.refresh();
        assert!(state.next_page().is_none());
    }

    #[test]
    fn failed_fresh_cycle_restores_previous_rows() {
        let mut state = ready_state(&["a", "b"], Some("/next"));
        let request = state.set_zip_code("10001").unwrap();
        assert!(state.dogs().is_empty());

        assert!(state.apply_failure(request.generation, "ZIP code '10001' not found"));
        assert_eq!(state.phase(), SearchPhase::Error);
        assert_eq!(displayed_ids(&state), vec!["a", "b"]);
        assert_eq!(state.cursor(), Some(&cursor("/next")));
        assert_eq!(state.last_error(), Some("ZIP code '10001' not found"));
    }

    #[test]
    fn retry_after_failure_reruns_the_same_criteria() {
        let mut state = ready_state(&["a"], None);
        let failed = state.set_breed_filter("Husky").unwrap();
        state.apply_failure(failed.generation, "Network error: offline");

        let retry = state.refresh();
        assert_eq!(retry.kind, CycleKind::Fresh);
        assert_eq!(retry.criteria, failed.criteria);
        assert!(retry.generation > failed.generation);
        assert!(state.last_error().is_none());

        let mut done = outcome(&retry, &["h"], None);
        done.total = Some(42);
        assert!(state.apply_outcome(done));
        assert_eq!(displayed_ids(&state), vec!["h"]);
        assert_eq!(state.total(), Some(42));
    }

    #[test]
    fn superseded_fresh_cycles_keep_the_last_shown_rows() {
        let mut state = ready_state(&["a"], None);
        state.set_breed_filter("P").unwrap();
        let request = state.set_breed_filter("Po").unwrap();

        assert!(state.apply_failure(request.generation, "HTTP 500: Internal Server Error"));
        assert_eq!(displayed_ids(&state), vec!["a"]);
    }

    #[test]
    fn failed_next_page_keeps_rows_and_page() {
        let mut state = ready_state(&["a"], Some("/next"));
        let request = state.next_page().unwrap();

        assert!(state.apply_failure(request.generation, "Network error: offline"));
        assert_eq!(state.page(), 0);
        assert_eq!(displayed_ids(&state), vec!["a"]);
        assert!(state.can_go_next());
    }

    #[test]
    fn repeated_ids_merge_in_place() {
        let mut state = ready_state(&["a", "b"], Some("/next"));
        let request = state.next_page().unwrap();
        let mut next = outcome(&request, &["c"], None);
        let mut renamed = dog("a", "Poodle");
        renamed.name = "Renamed".to_string();
        next.dogs.push(renamed);

        state.apply_outcome(next);
        let names: Vec<&str> = state.dogs().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Renamed", "Dog b", "Dog c"]);
    }
}
