//! The list-filtering rule shared by the Users and Subscriptions pages.
//!
//! Both pages derive their visible rows the same way: a free-text query
//! matched case-insensitively against a record's searchable fields,
//! combined with a status chip that is either a wildcard or one concrete
//! status. Summary numbers are computed over the full store, never the
//! filtered view, so they stay put while the list narrows.

/// A record that can appear in a filterable list.
pub trait Filterable {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> impl Iterator<Item = &str>;
}

/// The status chip selection. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    /// Parse a chip label. Unrecognized labels fall back to the wildcard
    /// rather than failing.
    pub fn from_label(label: &str, parse: impl Fn(&str) -> Option<S>) -> Self {
        match label {
            "all" => StatusFilter::All,
            other => parse(other).map_or(StatusFilter::All, StatusFilter::Only),
        }
    }
}

/// The records visible under the current query and status selection.
///
/// Returns an order-preserving subsequence of `records`. The query is
/// case-folded and matched as a substring of any searchable field; an
/// empty query matches everything.
pub fn visible<'a, R: Filterable>(
    records: &'a [R],
    query: &str,
    selector: StatusFilter<R::Status>,
) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| selector.matches(r.status()))
        .filter(|r| {
            needle.is_empty()
                || r.search_fields()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// How many records carry the given status, over the full store.
pub fn count_with_status<R: Filterable>(records: &[R], status: R::Status) -> usize {
    records.iter().filter(|r| r.status() == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        label: String,
        on: bool,
    }

    impl Filterable for Row {
        type Status = bool;

        fn status(&self) -> bool {
            self.on
        }

        fn search_fields(&self) -> impl Iterator<Item = &str> {
            std::iter::once(self.label.as_str())
        }
    }

    fn rows() -> Vec<Row> {
        ["alpha", "Beta", "gamma", "beta max"]
            .iter()
            .enumerate()
            .map(|(i, label)| Row {
                label: label.to_string(),
                on: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn empty_query_and_wildcard_is_identity() {
        let rows = rows();
        let all = visible(&rows, "", StatusFilter::All);
        assert_eq!(all.len(), rows.len());
        for (got, want) in all.iter().zip(rows.iter()) {
            assert_eq!(**got, *want);
        }
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let rows = rows();
        let hits = visible(&rows, "beta", StatusFilter::All);
        let labels: Vec<_> = hits.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Beta", "beta max"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let rows = rows();
        assert_eq!(visible(&rows, "BETA", StatusFilter::All).len(), 2);
        assert_eq!(visible(&rows, "AlPhA", StatusFilter::All).len(), 1);
    }

    #[test]
    fn status_and_query_combine_conjunctively() {
        let rows = rows();
        let hits = visible(&rows, "a", StatusFilter::Only(true));
        let labels: Vec<_> = hits.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["alpha", "gamma"]);
        // No on-row matches "beta".
        assert!(visible(&rows, "beta", StatusFilter::Only(true)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = rows();
        let once: Vec<Row> = visible(&rows, "a", StatusFilter::Only(true))
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Row> = visible(&once, "a", StatusFilter::Only(true))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_store_yields_empty_result() {
        let rows: Vec<Row> = Vec::new();
        assert!(visible(&rows, "anything", StatusFilter::All).is_empty());
    }

    #[test]
    fn count_uses_the_full_store() {
        let rows = rows();
        assert_eq!(count_with_status(&rows, true), 2);
        assert_eq!(count_with_status(&rows, false), 2);
    }

    #[test]
    fn unknown_chip_label_falls_back_to_wildcard() {
        let parse = |s: &str| (s == "on").then_some(true);
        assert_eq!(StatusFilter::from_label("on", parse), StatusFilter::Only(true));
        assert_eq!(StatusFilter::from_label("all", parse), StatusFilter::All);
        assert_eq!(StatusFilter::from_label("bogus", parse), StatusFilter::All);
    }
}
