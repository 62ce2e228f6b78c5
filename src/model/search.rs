//! Search state: committed query, result set and loading status.
//!
//! All transitions are plain functions on [`SearchState`]. The result set and
//! the loading status are only ever changed together, inside one call, so a
//! reader holding the lock always sees a consistent pair.

use super::content::Album;

/// Maximum number of albums kept from a response
pub const MAX_RESULTS: usize = 20;

/// User-facing text for any failed search
pub const SEARCH_FAILED_MESSAGE: &str = "Could not load albums. Please try again later.";

/// Identifies one issued search request.
///
/// A response is applied only if its token is still the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchRequestToken(u64);

impl std::fmt::Display for SearchRequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What the executor has to do after a commit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Blank query: results cleared, nothing to fetch
    Cleared,
    /// Same query as before and not failed: nothing to do
    Unchanged,
    /// Issue one request for this query under this token
    Fetch {
        token: SearchRequestToken,
        query: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    committed_query: String,
    results: Vec<Album>,
    status: LoadingStatus,
    current_token: Option<SearchRequestToken>,
    next_token: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn results(&self) -> &[Album] {
        &self.results
    }

    pub fn status(&self) -> &LoadingStatus {
        &self.status
    }

    pub fn current_token(&self) -> Option<SearchRequestToken> {
        self.current_token
    }

    /// Accept a newly committed query.
    ///
    /// A blank query always resets to `Idle` with no results and no current
    /// token. A repeated query is a no-op unless the previous attempt failed.
    pub fn commit(&mut self, query: &str) -> CommitOutcome {
        if query.trim().is_empty() {
            self.committed_query = query.to_string();
            self.results.clear();
            self.status = LoadingStatus::Idle;
            self.current_token = None;
            return CommitOutcome::Cleared;
        }

        let failed = matches!(self.status, LoadingStatus::Failed(_));
        if query == self.committed_query && !failed {
            return CommitOutcome::Unchanged;
        }

        let token = self.mint_token();
        self.committed_query = query.to_string();
        self.current_token = Some(token);
        self.results.clear();
        self.status = LoadingStatus::Loading;

        CommitOutcome::Fetch {
            token,
            query: query.to_string(),
        }
    }

    /// Apply a successful response. Returns `false` if the token is stale.
    pub fn apply_success(&mut self, token: SearchRequestToken, mut albums: Vec<Album>) -> bool {
        if !self.is_current(token) {
            return false;
        }

        albums.truncate(MAX_RESULTS);
        self.results = albums;
        self.status = LoadingStatus::Ready;
        true
    }

    /// Apply a failed response. Returns `false` if the token is stale.
    pub fn apply_failure(&mut self, token: SearchRequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }

        self.results.clear();
        self.status = LoadingStatus::Failed(SEARCH_FAILED_MESSAGE.to_string());
        true
    }

    pub fn is_current(&self, token: SearchRequestToken) -> bool {
        self.current_token() == Some(token)
    }

    fn mint_token(&mut self) -> SearchRequestToken {
        self.next_token += 1;
        SearchRequestToken(self.next_token)
    }
}

/// Read-only copy handed to the view each frame
#[derive(Clone, Debug, Default)]
pub struct SearchSnapshot {
    pub committed_query: String,
    pub results: Vec<Album>,
    pub status: LoadingStatus,
}

impl From<&SearchState> for SearchSnapshot {
    fn from(state: &SearchState) -> Self {
        Self {
            committed_query: state.committed_query().to_string(),
            results: state.results().to_vec(),
            status: state.status().clone(),
        }
    }
}
