// Application shell state machine.
//
// Pure state - no terminal, no network. The TUI drives it with key
// events and background search results; tests drive it directly.
//
// Searches are tagged with a generation counter. Submitting a new query
// makes any older in-flight result stale, so a slow response can never
// overwrite a newer one.

use propseek_client::ClientError;
use propseek_config::favorites::{FavoritesBackend, FavoritesError, FavoritesStore};
use propseek_model::{GroundingSource, Language, PropertySuggestion, RecommendationResponse};

/// Where the shell is in the search lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    /// Nothing searched yet
    Idle,
    /// A search is in flight
    Searching,
    /// A response arrived (its suggestion list may be empty)
    Results,
    /// The search failed; the message is operator-facing
    Error(String),
}

/// A search accepted by the shell, to be run on a background task.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchJob {
    pub generation: u64,
    pub query: String,
    pub lang: Language,
}

pub struct Shell<B: FavoritesBackend> {
    lang: Language,
    phase: SearchPhase,
    data: Option<RecommendationResponse>,
    favorites: FavoritesStore<B>,
    favorites_only: bool,
    lead_panel: bool,
    generation: u64,
}

impl<B: FavoritesBackend> Shell<B> {
    pub fn new(lang: Language, favorites: FavoritesStore<B>) -> Self {
        Self {
            lang,
            phase: SearchPhase::Idle,
            data: None,
            favorites,
            favorites_only: false,
            lead_panel: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn set_lang(&mut self, lang: Language) {
        self.lang = lang;
    }

    pub fn favorites(&self) -> &FavoritesStore<B> {
        &self.favorites
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    /// Whether the lead-capture panel is surfaced (zero-match outcome).
    pub fn lead_panel(&self) -> bool {
        self.lead_panel
    }

    pub fn summary(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.summary.as_str())
    }

    pub fn sources(&self) -> &[GroundingSource] {
        self.data.as_ref().map(|d| d.sources.as_slice()).unwrap_or(&[])
    }

    /// Accept a query. Whitespace-only input is a no-op: no transition,
    /// nothing dispatched. Otherwise the shell enters `Searching`,
    /// clears the stale error/lead panel and the favorites-only filter,
    /// and hands back a job tagged with a fresh generation.
    pub fn submit(&mut self, query: &str) -> Option<SearchJob> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.generation += 1;
        self.phase = SearchPhase::Searching;
        self.lead_panel = false;
        self.favorites_only = false;
        Some(SearchJob {
            generation: self.generation,
            query: trimmed.to_string(),
            lang: self.lang,
        })
    }

    /// Deliver a finished search. Results from superseded generations
    /// are dropped.
    pub fn on_response(
        &mut self,
        generation: u64,
        result: Result<RecommendationResponse, ClientError>,
    ) {
        if generation != self.generation {
            return;
        }
        match result {
            Ok(response) => {
                self.lead_panel = response.suggestions.is_empty();
                self.data = Some(response);
                self.phase = SearchPhase::Results;
            }
            Err(e) => {
                self.phase = SearchPhase::Error(e.to_string());
            }
        }
    }

    /// Display filter: all suggestions vs saved ones only. Independent
    /// of the search lifecycle; never re-fetches.
    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    pub fn toggle_favorite(&mut self, link: &str) -> Result<bool, FavoritesError> {
        self.favorites.toggle(link)
    }

    /// Suggestions currently on display: all of them, or exactly those
    /// whose link is saved, in original order.
    pub fn visible(&self) -> Vec<&PropertySuggestion> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        data.suggestions
            .iter()
            .filter(|p| !self.favorites_only || self.favorites.contains(&p.link))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propseek_config::favorites::MemoryBackend;

    fn shell() -> Shell<MemoryBackend> {
        Shell::new(
            Language::En,
            FavoritesStore::open(MemoryBackend::default()).unwrap(),
        )
    }

    fn suggestion(link: &str) -> PropertySuggestion {
        PropertySuggestion {
            id: String::new(),
            title: format!("Listing {}", link),
            price: String::new(),
            location: String::new(),
            description: "d".to_string(),
            link: link.to_string(),
            image_url: None,
            reason: "r".to_string(),
            tags: None,
            pros: vec![],
            cons: vec![],
            auction_info: None,
        }
    }

    fn response(links: &[&str]) -> RecommendationResponse {
        RecommendationResponse {
            summary: "s".to_string(),
            suggestions: links.iter().map(|l| suggestion(l)).collect(),
            sources: vec![],
        }
    }

    #[test]
    fn whitespace_query_is_a_noop() {
        let mut shell = shell();
        assert!(shell.submit("   ").is_none());
        assert!(shell.submit("").is_none());
        assert_eq!(*shell.phase(), SearchPhase::Idle);
    }

    #[test]
    fn submit_enters_searching_and_resolves_to_results() {
        let mut shell = shell();
        let job = shell.submit("small office").unwrap();
        assert_eq!(*shell.phase(), SearchPhase::Searching);
        assert_eq!(job.query, "small office");
        assert_eq!(job.lang, Language::En);

        shell.on_response(job.generation, Ok(response(&["https://a"])));
        assert_eq!(*shell.phase(), SearchPhase::Results);
        assert!(!shell.lead_panel());
        assert_eq!(shell.visible().len(), 1);
    }

    #[test]
    fn empty_result_surfaces_lead_panel() {
        let mut shell = shell();
        let job = shell.submit("impossible wish").unwrap();
        shell.on_response(job.generation, Ok(response(&[])));
        assert_eq!(*shell.phase(), SearchPhase::Results);
        assert!(shell.lead_panel());

        // A later non-empty result clears it again
        let job = shell.submit("office").unwrap();
        assert!(!shell.lead_panel());
        shell.on_response(job.generation, Ok(response(&["https://a"])));
        assert!(!shell.lead_panel());
    }

    #[test]
    fn failure_reaches_the_error_phase() {
        let mut shell = shell();
        let job = shell.submit("office").unwrap();
        shell.on_response(job.generation, Err(ClientError::Network("timed out".into())));
        match shell.phase() {
            SearchPhase::Error(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut shell = shell();
        let first = shell.submit("office").unwrap();
        let second = shell.submit("shop").unwrap();
        assert!(second.generation > first.generation);

        // The superseded search finishing late must not leave Searching
        shell.on_response(first.generation, Ok(response(&["https://old"])));
        assert_eq!(*shell.phase(), SearchPhase::Searching);

        shell.on_response(second.generation, Ok(response(&["https://new"])));
        assert_eq!(shell.visible()[0].link, "https://new");
    }

    #[test]
    fn resubmit_clears_error_and_filter() {
        let mut shell = shell();
        let job = shell.submit("office").unwrap();
        shell.on_response(job.generation, Err(ClientError::MissingKey));
        shell.toggle_favorites_only();
        assert!(shell.favorites_only());

        shell.submit("shop").unwrap();
        assert_eq!(*shell.phase(), SearchPhase::Searching);
        assert!(!shell.favorites_only());
    }

    #[test]
    fn favorites_filter_is_the_saved_subset_in_order() {
        let mut shell = shell();
        let job = shell.submit("anything").unwrap();
        shell.on_response(job.generation, Ok(response(&["https://a", "https://b", "https://c"])));

        shell.toggle_favorite("https://c").unwrap();
        shell.toggle_favorite("https://a").unwrap();

        shell.toggle_favorites_only();
        let visible: Vec<&str> = shell.visible().iter().map(|p| p.link.as_str()).collect();
        // Original suggestion order, not toggle order
        assert_eq!(visible, ["https://a", "https://c"]);

        shell.toggle_favorites_only();
        assert_eq!(shell.visible().len(), 3);
    }

    #[test]
    fn searches_replace_results_wholesale() {
        let mut shell = shell();
        let job = shell.submit("first").unwrap();
        shell.on_response(job.generation, Ok(response(&["https://a", "https://b"])));

        let job = shell.submit("second").unwrap();
        shell.on_response(job.generation, Ok(response(&["https://z"])));
        let visible: Vec<&str> = shell.visible().iter().map(|p| p.link.as_str()).collect();
        assert_eq!(visible, ["https://z"]);
    }
}
