use crate::core::search::PortmanteauSearch;
use crate::core::{ConfigProvider, Fetcher, SearchOutcome, SearchQuery};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const NO_RESULT_PLACEHOLDER: &str = "(no portmanteau found)";

#[derive(Debug, Clone)]
pub enum DisplayState {
    Idle,
    InFlight { word: String },
    Done(SearchOutcome),
}

impl DisplayState {
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            DisplayState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// The one screen: a trigger per word and a single display target.
///
/// Each trigger runs its search on its own task. Searches are not
/// coordinated with each other and can't be cancelled; whichever finishes
/// last owns the display.
pub struct SearchScreen<F: Fetcher + 'static, C: ConfigProvider + 'static> {
    search: Arc<PortmanteauSearch<F, C>>,
    display: Arc<watch::Sender<DisplayState>>,
}

impl<F: Fetcher + 'static, C: ConfigProvider + 'static> SearchScreen<F, C> {
    pub fn new(search: PortmanteauSearch<F, C>) -> Self {
        let (display, _) = watch::channel(DisplayState::Idle);
        Self {
            search: Arc::new(search),
            display: Arc::new(display),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.display.subscribe()
    }

    pub fn current(&self) -> DisplayState {
        self.display.borrow().clone()
    }

    /// Starts a search for `word` in the background. Must be called from
    /// within a tokio runtime.
    pub fn trigger(&self, word: &str) -> JoinHandle<()> {
        self.display.send_replace(DisplayState::InFlight {
            word: word.to_string(),
        });

        let search = Arc::clone(&self.search);
        let display = Arc::clone(&self.display);
        let query = SearchQuery::new(word);
        tokio::spawn(async move {
            let outcome = search.run(&query).await;
            display.send_replace(DisplayState::Done(outcome));
        })
    }
}

pub fn render_text(outcome: &SearchOutcome) -> String {
    match &outcome.portmanteau {
        Some(portmanteau) => portmanteau.clone(),
        None => NO_RESULT_PLACEHOLDER.to_string(),
    }
}
