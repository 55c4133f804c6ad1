//! Gallery listing state: the query sent to the public listing endpoint and
//! the bookkeeping around in-flight fetches.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use url::form_urlencoded;

use crate::submission::{AiModel, Submission, SubmissionPage};

pub const PER_PAGE_OPTIONS: [u32; 4] = [6, 9, 12, 18];
pub const DEFAULT_PER_PAGE: u32 = 9;
pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred while fetching submissions. Please try again later.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[default]
    Timestamp,
    LumenName,
    RewardAmount,
    AiUsed,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Timestamp => "Date",
            SortField::LumenName => "Name",
            SortField::RewardAmount => "Reward",
            SortField::AiUsed => "AI Used",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

/// Everything that shapes a listing request. Every mutator reports whether
/// the query changed, which is exactly when a re-fetch is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub ai_used: Option<String>,
    pub ai_agent: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            ai_used: None,
            ai_agent: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl GalleryQuery {
    pub fn with_per_page(per_page: u32) -> Self {
        let mut query = Self::default();
        query.set_per_page(per_page);
        query
    }

    /// Form-urlencoded parameters for `/api/public/submissions`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("page", &self.page.to_string())
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("search", &self.search)
            .append_pair("sort_by", self.sort_by.as_ref())
            .append_pair("order", self.order.as_ref());
        if let Some(ai_used) = &self.ai_used {
            serializer.append_pair("ai_used", ai_used);
        }
        if let Some(ai_agent) = &self.ai_agent {
            serializer.append_pair("ai_agent", ai_agent);
        }
        serializer.finish()
    }

    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if self.search == search {
            return false;
        }
        self.search = search.to_string();
        self.page = 1;
        true
    }

    pub fn set_ai_filter(&mut self, ai_used: &str) -> bool {
        let next = non_empty(ai_used);
        if self.ai_used == next {
            return false;
        }
        self.ai_used = next;
        self.page = 1;
        true
    }

    pub fn set_agent_filter(&mut self, ai_agent: &str) -> bool {
        let next = non_empty(ai_agent);
        if self.ai_agent == next {
            return false;
        }
        self.ai_agent = next;
        self.page = 1;
        true
    }

    /// Unknown sizes fall back to the default page size.
    pub fn set_per_page(&mut self, per_page: u32) -> bool {
        let per_page = if PER_PAGE_OPTIONS.contains(&per_page) {
            per_page
        } else {
            DEFAULT_PER_PAGE
        };
        if self.per_page == per_page {
            return false;
        }
        self.per_page = per_page;
        self.page = 1;
        true
    }

    /// Re-selecting the active field only flips the direction and keeps the
    /// current page; a new field starts ascending from page 1.
    pub fn sort(&mut self, field: SortField) -> bool {
        if self.sort_by == field {
            self.order = self.order.flipped();
        } else {
            self.sort_by = field;
            self.order = SortOrder::Asc;
            self.page = 1;
        }
        true
    }

    pub fn go_to(&mut self, page: u32, pages: u32) -> bool {
        let page = page.clamp(1, pages.max(1));
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self, pages: u32) -> bool {
        self.go_to(self.page.saturating_add(1), pages)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1), self.page)
    }

    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        match (self.sort_by == field, self.order) {
            (false, _) => "",
            (true, SortOrder::Asc) => " ↑",
            (true, SortOrder::Desc) => " ↓",
        }
    }
}

/// Ticket handed out per listing request; only the newest one may land.
pub type FetchTicket = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub query: GalleryQuery,
    pub submissions: Vec<Submission>,
    pub pages: u32,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    latest_ticket: FetchTicket,
}

impl GalleryState {
    pub fn new(query: GalleryQuery) -> Self {
        Self {
            query,
            pages: 1,
            ..Self::default()
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        self.latest_ticket
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        if ticket != self.latest_ticket {
            log::warn!(
                "Discarding stale gallery response (ticket {}, latest {})",
                ticket,
                self.latest_ticket
            );
            return false;
        }
        true
    }

    /// Returns false when the response was stale and ignored.
    pub fn finish_ok(&mut self, ticket: FetchTicket, page: SubmissionPage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.pages = page.pagination.pages.max(1);
        self.total = page.pagination.total;
        self.query.page = page.pagination.page.clamp(1, self.pages);
        self.submissions = page.submissions;
        true
    }

    pub fn finish_err(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        true
    }

    pub fn has_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.query.page < self.pages
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats::new(&self.submissions, self.total)
    }

    pub fn ai_options(&self) -> Vec<String> {
        AiModel::iter().map(|model| model.to_string()).collect()
    }

    /// Distinct agents on the visible page, keeping the active filter
    /// selectable even when the page no longer contains it.
    pub fn agent_options(&self) -> Vec<String> {
        let mut agents: BTreeSet<String> = self
            .submissions
            .iter()
            .filter_map(Submission::agent)
            .map(str::to_string)
            .collect();
        if let Some(active) = &self.query.ai_agent {
            agents.insert(active.clone());
        }
        agents.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryStats {
    pub total_submissions: u64,
    pub average_reward: f64,
    pub top_ai: String,
}

impl GalleryStats {
    /// Average and top model cover the visible page only.
    pub fn new(submissions: &[Submission], total: u64) -> Self {
        let average_reward = if submissions.is_empty() {
            0.0
        } else {
            submissions.iter().map(|s| s.reward_amount).sum::<f64>() / submissions.len() as f64
        };

        let mut counts: Vec<(&str, usize)> = Vec::new();
        for submission in submissions {
            match counts.iter_mut().find(|(name, _)| *name == submission.ai_used) {
                Some((_, count)) => *count += 1,
                None => counts.push((submission.ai_used.as_str(), 1)),
            }
        }
        // max_by_key keeps the last maximum, so scan in reverse to let the
        // first-seen model win ties.
        let top_ai = counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        Self {
            total_submissions: total.max(submissions.len() as u64),
            average_reward,
            top_ai,
        }
    }
}

/// Image index for the details modal; wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Points the carousel at a new media list, back at the first item.
    pub fn reset(&mut self, len: usize) -> bool {
        let next = Self::new(len);
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn counter(&self) -> String {
        format!("{} of {} images", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{Pagination, SubmissionId};
    use proptest::prelude::*;

    fn submission(id: i64, ai_used: &str, agent: Option<&str>, reward: f64) -> Submission {
        Submission {
            id: SubmissionId(id),
            lumen_name: format!("user{}", id),
            prompt_text: "prompt".into(),
            ai_used: ai_used.into(),
            ai_agent: agent.map(str::to_string),
            reward_amount: reward,
            screenshot_path: None,
            additional_screenshots: Vec::new(),
            timestamp: None,
        }
    }

    fn page(page: u32, pages: u32, submissions: Vec<Submission>) -> SubmissionPage {
        SubmissionPage {
            pagination: Pagination {
                page,
                pages,
                per_page: 9,
                total: submissions.len() as u64,
            },
            submissions,
        }
    }

    #[test]
    fn default_query_string() {
        assert_eq!(
            GalleryQuery::default().to_query_string(),
            "page=1&per_page=9&search=&sort_by=timestamp&order=desc"
        );
    }

    #[test]
    fn filters_are_serialized_only_when_set() {
        let mut query = GalleryQuery::default();
        query.set_search("todo app");
        query.set_ai_filter("GPT-5");
        query.set_agent_filter("Cursor & Co");

        assert_eq!(
            query.to_query_string(),
            "page=1&per_page=9&search=todo+app&sort_by=timestamp&order=desc\
             &ai_used=GPT-5&ai_agent=Cursor+%26+Co"
        );

        query.set_ai_filter("");
        assert!(!query.to_query_string().contains("ai_used"));
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut query = GalleryQuery::default();

        query.page = 4;
        assert!(query.set_search("x"));
        assert_eq!(query.page, 1);

        query.page = 4;
        assert!(query.set_ai_filter("Claude"));
        assert_eq!(query.page, 1);

        query.page = 4;
        assert!(query.set_agent_filter("Devin"));
        assert_eq!(query.page, 1);

        query.page = 4;
        assert!(query.set_per_page(18));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn unchanged_filters_do_not_refetch() {
        let mut query = GalleryQuery::default();
        query.page = 3;
        assert!(!query.set_search(""));
        assert!(!query.set_ai_filter("  "));
        assert!(!query.set_per_page(DEFAULT_PER_PAGE));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn search_ignores_surrounding_whitespace() {
        let mut query = GalleryQuery::default();
        query.page = 2;
        assert!(!query.set_search("   "));
        assert_eq!(query.page, 2);
        assert!(query.to_query_string().contains("search=&"));

        assert!(query.set_search("  todo "));
        assert_eq!(query.search, "todo");
        assert!(!query.set_search("todo  "));
    }

    #[test]
    fn unsupported_page_size_falls_back() {
        let mut query = GalleryQuery::default();
        query.set_per_page(12);
        assert!(query.set_per_page(1000));
        assert_eq!(query.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn toggling_sort_direction_keeps_page() {
        let mut query = GalleryQuery::default();
        query.page = 3;

        assert!(query.sort(SortField::Timestamp));
        assert_eq!(query.order, SortOrder::Asc);
        assert_eq!(query.page, 3);

        assert!(query.sort(SortField::Timestamp));
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn new_sort_field_starts_ascending_on_first_page() {
        let mut query = GalleryQuery::default();
        query.page = 3;

        assert!(query.sort(SortField::RewardAmount));
        assert_eq!(query.sort_by, SortField::RewardAmount);
        assert_eq!(query.order, SortOrder::Asc);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_indicator(SortField::RewardAmount), " ↑");
        assert_eq!(query.sort_indicator(SortField::Timestamp), "");
        assert!(query.to_query_string().contains("sort_by=reward_amount&order=asc"));
    }

    #[test]
    fn paging_is_clamped() {
        let mut query = GalleryQuery::default();
        assert!(!query.prev_page());
        assert!(query.next_page(2));
        assert_eq!(query.page, 2);
        assert!(!query.next_page(2));
        assert!(query.prev_page());
        assert_eq!(query.page, 1);
        assert!(!query.go_to(0, 5));
        assert!(query.go_to(9, 5));
        assert_eq!(query.page, 5);
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = GalleryState::new(GalleryQuery::default());
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_ok(second, page(1, 3, vec![submission(2, "Claude", None, 1.0)])));
        assert!(!state.finish_ok(first, page(1, 1, Vec::new())));
        assert!(!state.finish_err(first));

        assert_eq!(state.submissions.len(), 1);
        assert_eq!(state.pages, 3);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn failed_fetch_sets_message_and_stops_loading() {
        let mut state = GalleryState::new(GalleryQuery::default());
        let ticket = state.begin_fetch();
        assert!(state.loading);
        assert!(state.finish_err(ticket));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));

        state.begin_fetch();
        assert!(state.error.is_none());
    }

    #[test]
    fn server_page_is_adopted() {
        let mut state = GalleryState::new(GalleryQuery::default());
        state.query.page = 7;
        let ticket = state.begin_fetch();
        state.finish_ok(ticket, page(2, 2, Vec::new()));
        assert_eq!(state.query.page, 2);

        let ticket = state.begin_fetch();
        state.finish_ok(ticket, page(0, 0, Vec::new()));
        assert_eq!(state.query.page, 1);
        assert_eq!(state.pages, 1);
    }

    #[test]
    fn stats_cover_visible_page() {
        let items = vec![
            submission(1, "Claude", Some("Cursor"), 10.0),
            submission(2, "GPT-5", None, 20.0),
            submission(3, "GPT-5", Some("Devin"), 30.0),
            submission(4, "Claude", Some(""), 40.0),
        ];
        let stats = GalleryStats::new(&items, 40);

        assert_eq!(stats.total_submissions, 40);
        assert_eq!(stats.average_reward, 25.0);
        // Tie between Claude and GPT-5: first seen wins.
        assert_eq!(stats.top_ai, "Claude");

        let empty = GalleryStats::new(&[], 0);
        assert_eq!(empty.top_ai, "N/A");
        assert_eq!(empty.average_reward, 0.0);
    }

    #[test]
    fn agent_options_are_distinct_and_keep_active_filter() {
        let mut state = GalleryState::new(GalleryQuery::default());
        state.submissions = vec![
            submission(1, "Claude", Some("Devin"), 1.0),
            submission(2, "Claude", Some("Cursor"), 1.0),
            submission(3, "Claude", Some("Devin"), 1.0),
            submission(4, "Claude", None, 1.0),
        ];
        state.query.set_agent_filter("Aider");

        assert_eq!(state.agent_options(), ["Aider", "Cursor", "Devin"]);
        assert_eq!(state.ai_options().len(), 6);
    }

    #[test]
    fn carousel_wraps_and_bounds_selection() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.prev());
        assert_eq!(carousel.index, 2);
        assert!(carousel.next());
        assert_eq!(carousel.index, 0);
        assert!(carousel.select(1));
        assert!(!carousel.select(3));
        assert_eq!(carousel.counter(), "2 of 3 images");

        let mut single = Carousel::new(1);
        assert!(!single.next());
        assert!(!single.prev());
        assert_eq!(single.index, 0);
    }

    #[test]
    fn carousel_reset_drops_stale_index() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.select(4));

        assert!(carousel.reset(2));
        assert_eq!(carousel.index, 0);
        assert_eq!(carousel.len, 2);
        assert_eq!(carousel.counter(), "1 of 2 images");
        assert!(!carousel.reset(2));
    }

    fn any_field() -> impl Strategy<Value = SortField> {
        prop::sample::select(SortField::iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn sort_resets_page_only_for_new_field(
            start in 1u32..50,
            current in any_field(),
            next in any_field(),
        ) {
            let mut query = GalleryQuery::default();
            query.sort_by = current;
            query.page = start;
            let order = query.order;

            query.sort(next);

            if current == next {
                prop_assert_eq!(query.page, start);
                prop_assert_eq!(query.order, order.flipped());
            } else {
                prop_assert_eq!(query.page, 1);
                prop_assert_eq!(query.order, SortOrder::Asc);
            }
        }

        #[test]
        fn search_always_lands_on_first_page(start in 1u32..50, term in "[a-z][a-z ]{0,11}") {
            let mut query = GalleryQuery::default();
            query.page = start;
            query.set_search(&term);
            prop_assert_eq!(query.page, 1);
        }
    }
}
