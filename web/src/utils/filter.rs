use std::cmp::Ordering;

use shared_types::{Capsule, JobPosting, MentorProfile, MentorshipRequest};

/// A single named filter rule. Text search is a case-insensitive substring
/// match, `Is` is exact equality against a tag-like field, `AtLeast` is a
/// numeric `>=` bound, `Flag` is boolean equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Search(String),
    Is(String),
    AtLeast(f64),
    Flag(bool),
}

/// The active filter rules for a listing page. Empty-string and `"all"`
/// inputs never become rules, so an untouched control constrains nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    rules: Vec<(String, Constraint)>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, key: &str, query: &str) -> Self {
        let query = query.trim();
        if !query.is_empty() {
            self.rules
                .push((key.to_string(), Constraint::Search(query.to_string())));
        }
        self
    }

    pub fn is(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() && value != "all" {
            self.rules
                .push((key.to_string(), Constraint::Is(value.to_string())));
        }
        self
    }

    pub fn at_least(mut self, key: &str, minimum: Option<f64>) -> Self {
        if let Some(minimum) = minimum {
            self.rules
                .push((key.to_string(), Constraint::AtLeast(minimum)));
        }
        self
    }

    pub fn flag(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.rules.push((key.to_string(), Constraint::Flag(value)));
        }
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules must hold. A record that lacks the facet a rule names does
    /// not match.
    pub fn matches<T: Facets>(&self, record: &T) -> bool {
        self.rules
            .iter()
            .all(|(key, constraint)| rule_matches(constraint, record.facet(key)))
    }
}

fn rule_matches(constraint: &Constraint, facet: Option<Facet>) -> bool {
    match (constraint, facet) {
        (Constraint::Search(query), Some(Facet::Text(haystack))) => {
            haystack.to_lowercase().contains(&query.to_lowercase())
        }
        (Constraint::Is(wanted), Some(Facet::Text(actual))) => actual == *wanted,
        (Constraint::AtLeast(minimum), Some(Facet::Number(actual))) => actual >= *minimum,
        (Constraint::Flag(wanted), Some(Facet::Flag(actual))) => actual == *wanted,
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    Text(String),
    Number(f64),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortRank {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Recent,
    Popular,
    Name,
    Rating,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recent => "Most Recent",
            SortKey::Popular => "Most Popular",
            SortKey::Name => "Name (A-Z)",
            SortKey::Rating => "Highest Rated",
        }
    }

    fn descending(self) -> bool {
        matches!(self, SortKey::Recent | SortKey::Popular | SortKey::Rating)
    }
}

/// Listing records expose their filterable fields by key and a rank per sort
/// key. A `search` facet may aggregate several display fields into one
/// haystack.
pub trait Facets {
    fn facet(&self, key: &str) -> Option<Facet>;
    fn sort_rank(&self, key: SortKey) -> SortRank;
    fn record_id(&self) -> i64;
}

/// Filters `records` down to those matching every rule, then sorts by the
/// fixed direction of `sort`. Ties break by ascending record id. Pure: the
/// input slice is never mutated.
pub fn apply<T: Facets + Clone>(records: &[T], criteria: &FilterCriteria, sort: SortKey) -> Vec<T> {
    let mut kept: Vec<T> = records
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect();

    kept.sort_by(|a, b| {
        let ordering = match (a.sort_rank(sort), b.sort_rank(sort)) {
            (SortRank::Text(left), SortRank::Text(right)) => {
                left.to_lowercase().cmp(&right.to_lowercase())
            }
            (SortRank::Number(left), SortRank::Number(right)) => left.total_cmp(&right),
            _ => Ordering::Equal,
        };
        let ordering = if sort.descending() {
            ordering.reverse()
        } else {
            ordering
        };
        ordering.then_with(|| a.record_id().cmp(&b.record_id()))
    });

    kept
}

impl Facets for JobPosting {
    fn facet(&self, key: &str) -> Option<Facet> {
        match key {
            "search" => Some(Facet::Text(format!(
                "{} {} {}",
                self.title, self.company, self.location
            ))),
            "category" => Some(Facet::Text(self.category.clone())),
            "status" => Some(Facet::Text(self.status.clone())),
            "remote" => Some(Facet::Flag(self.remote)),
            _ => None,
        }
    }

    fn sort_rank(&self, key: SortKey) -> SortRank {
        match key {
            SortKey::Recent => SortRank::Text(self.posted_at.clone()),
            SortKey::Popular => SortRank::Number(self.applicant_count as f64),
            _ => SortRank::Text(self.title.clone()),
        }
    }

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Facets for MentorProfile {
    fn facet(&self, key: &str) -> Option<Facet> {
        match key {
            "search" => Some(Facet::Text(format!(
                "{} {} {}",
                self.name,
                self.industry,
                self.skills.join(" ")
            ))),
            "industry" => Some(Facet::Text(self.industry.clone())),
            "rating" => Some(Facet::Number(self.rating)),
            "accepting" => Some(Facet::Flag(self.accepting)),
            _ => None,
        }
    }

    fn sort_rank(&self, key: SortKey) -> SortRank {
        match key {
            SortKey::Rating => SortRank::Number(self.rating),
            SortKey::Popular => SortRank::Number(self.mentee_count as f64),
            _ => SortRank::Text(self.name.clone()),
        }
    }

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Facets for Capsule {
    fn facet(&self, key: &str) -> Option<Facet> {
        match key {
            "search" => Some(Facet::Text(format!(
                "{} {} {}",
                self.title, self.body, self.author
            ))),
            "topic" => Some(Facet::Text(self.topic.clone())),
            "status" => Some(Facet::Text(self.status.clone())),
            _ => None,
        }
    }

    fn sort_rank(&self, key: SortKey) -> SortRank {
        match key {
            SortKey::Popular => SortRank::Number((self.like_count + self.bookmark_count) as f64),
            SortKey::Name => SortRank::Text(self.title.clone()),
            _ => SortRank::Text(self.created_at.clone()),
        }
    }

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Facets for MentorshipRequest {
    fn facet(&self, key: &str) -> Option<Facet> {
        match key {
            "search" => Some(Facet::Text(format!("{} {}", self.mentor_name, self.focus))),
            "status" => Some(Facet::Text(self.status.clone())),
            _ => None,
        }
    }

    fn sort_rank(&self, _key: SortKey) -> SortRank {
        SortRank::Text(self.created_at.clone())
    }

    fn record_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        title: String,
        status: String,
        score: f64,
        archived: bool,
        created_at: String,
    }

    impl Row {
        fn new(id: i64, title: &str, status: &str, score: f64, created_at: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
                status: status.to_string(),
                score,
                archived: false,
                created_at: created_at.to_string(),
            }
        }
    }

    impl Facets for Row {
        fn facet(&self, key: &str) -> Option<Facet> {
            match key {
                "search" => Some(Facet::Text(self.title.clone())),
                "status" => Some(Facet::Text(self.status.clone())),
                "score" => Some(Facet::Number(self.score)),
                "archived" => Some(Facet::Flag(self.archived)),
                _ => None,
            }
        }

        fn sort_rank(&self, key: SortKey) -> SortRank {
            match key {
                SortKey::Recent => SortRank::Text(self.created_at.clone()),
                SortKey::Popular | SortKey::Rating => SortRank::Number(self.score),
                SortKey::Name => SortRank::Text(self.title.clone()),
            }
        }

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new(1, "Backend Engineer", "pending", 4.0, "2025-06-01T10:00:00Z"),
            Row::new(2, "Data Analyst", "accepted", 2.5, "2025-06-03T10:00:00Z"),
            Row::new(3, "backend intern", "pending", 3.0, "2025-06-02T10:00:00Z"),
        ]
    }

    #[test]
    fn empty_criteria_returns_everything() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .search("search", "")
            .is("status", "all")
            .at_least("score", None)
            .flag("archived", None);
        assert!(criteria.is_unconstrained());
        let result = apply(&rows, &criteria, SortKey::Name);
        assert_eq!(result.len(), rows.len());
    }

    #[test]
    fn text_search_is_case_insensitive_and_exhaustive() {
        let rows = sample();
        let criteria = FilterCriteria::new().search("search", "BACKEND");
        let result = apply(&rows, &criteria, SortKey::Name);
        let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        for row in &rows {
            let included = ids.contains(&row.id);
            assert_eq!(included, row.title.to_lowercase().contains("backend"));
        }
    }

    #[test]
    fn status_equality_keeps_only_exact_matches() {
        let rows = vec![
            Row::new(1, "one", "pending", 0.0, "2025-01-01T00:00:00Z"),
            Row::new(2, "two", "accepted", 0.0, "2025-01-02T00:00:00Z"),
        ];
        let criteria = FilterCriteria::new().is("status", "pending");
        let result = apply(&rows, &criteria, SortKey::Name);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .search("search", "backend")
            .at_least("score", Some(3.5));
        let result = apply(&rows, &criteria, SortKey::Name);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn missing_facet_fails_the_rule() {
        let rows = sample();
        let criteria = FilterCriteria::new().is("nonexistent", "anything");
        assert!(apply(&rows, &criteria, SortKey::Name).is_empty());
    }

    #[test]
    fn apply_is_pure_and_idempotent() {
        let rows = sample();
        let snapshot = rows.clone();
        let criteria = FilterCriteria::new().search("search", "backend");
        let first = apply(&rows, &criteria, SortKey::Recent);
        let second = apply(&rows, &criteria, SortKey::Recent);
        assert_eq!(first, second);
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rows: Vec<Row> = Vec::new();
        let criteria = FilterCriteria::new().is("status", "pending");
        assert!(apply(&rows, &criteria, SortKey::Recent).is_empty());
    }

    #[test]
    fn recent_sorts_newest_first() {
        let rows = sample();
        let result = apply(&rows, &FilterCriteria::new(), SortKey::Recent);
        let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn name_sorts_ascending_ignoring_case() {
        let rows = sample();
        let result = apply(&rows, &FilterCriteria::new(), SortKey::Name);
        let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let rows = vec![
            Row::new(9, "same", "pending", 1.0, "2025-01-01T00:00:00Z"),
            Row::new(4, "same", "pending", 1.0, "2025-01-01T00:00:00Z"),
            Row::new(7, "same", "pending", 1.0, "2025-01-01T00:00:00Z"),
        ];
        let result = apply(&rows, &FilterCriteria::new(), SortKey::Recent);
        let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn mentor_min_rating_filter() {
        let mentors = vec![
            MentorProfile {
                id: 1,
                name: "Ada".to_string(),
                class_year: 2012,
                industry: "Software".to_string(),
                skills: vec!["rust".to_string()],
                rating: 4.8,
                mentee_count: 3,
                accepting: true,
                headline: String::new(),
            },
            MentorProfile {
                id: 2,
                name: "Brook".to_string(),
                class_year: 2015,
                industry: "Finance".to_string(),
                skills: vec!["excel".to_string()],
                rating: 3.9,
                mentee_count: 1,
                accepting: true,
                headline: String::new(),
            },
        ];
        let criteria = FilterCriteria::new().at_least("rating", Some(4.0));
        let result = apply(&mentors, &criteria, SortKey::Rating);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ada");
    }
}
