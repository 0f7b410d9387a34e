//! Query-parameter filters over fixture records
//!
//! A filter is active only when its parameter is present and non-empty.
//! Active filters are ANDed together; a record whose attribute is missing or
//! not a string never satisfies an active filter.

use std::collections::HashMap;

use super::document::ResourceRecord;

/// How an attribute is compared with the query value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,
    /// Lexicographic `<=`; only meaningful for fixed-width dates like `2024-03-01`
    AtMost,
}

/// A recognised query parameter and the attribute of the same name it constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParam {
    pub name: &'static str,
    pub comparison: Comparison,
}

impl FilterParam {
    pub const fn equals(name: &'static str) -> Self {
        Self {
            name,
            comparison: Comparison::Equals,
        }
    }

    pub const fn at_most(name: &'static str) -> Self {
        Self {
            name,
            comparison: Comparison::AtMost,
        }
    }

    fn matches(&self, record: &ResourceRecord, value: &str) -> bool {
        record
            .attribute_str(self.name)
            .is_some_and(|attr| match self.comparison {
                Comparison::Equals => attr == value,
                Comparison::AtMost => attr <= value,
            })
    }
}

/// Decoded query string; a repeated key keeps its last value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parse a raw query string (`None` when the URI has no `?`)
    pub fn parse(query: Option<&str>) -> Result<Self, serde_urlencoded::de::Error> {
        let Some(query) = query else {
            return Ok(Self::default());
        };
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self(pairs.into_iter().collect()))
    }

    /// Value of a parameter, treating an empty value as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Keep the records satisfying every active filter, preserving file order
pub fn apply_filters(
    records: Vec<ResourceRecord>,
    filters: &[FilterParam],
    params: &QueryParams,
) -> Vec<ResourceRecord> {
    let active: Vec<(&FilterParam, &str)> = filters
        .iter()
        .filter_map(|f| params.get(f.name).map(|v| (f, v)))
        .collect();

    if active.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| active.iter().all(|(f, v)| f.matches(record, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PRIOR_FILTERS: &[FilterParam] =
        &[FilterParam::equals("topic_id"), FilterParam::at_most("as_of")];
    const CANDIDATE_FILTERS: &[FilterParam] =
        &[FilterParam::equals("candidate_id"), FilterParam::equals("topic_id")];

    fn record(id: &str, attributes: serde_json::Value) -> ResourceRecord {
        serde_json::from_value(json!({"type": "x", "id": id, "attributes": attributes})).unwrap()
    }

    fn ids(records: &[ResourceRecord]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.id().and_then(serde_json::Value::as_str).unwrap())
            .collect()
    }

    fn priors() -> Vec<ResourceRecord> {
        vec![
            record("p1", json!({"topic_id": "t1", "as_of": "2024-01-01"})),
            record("p2", json!({"topic_id": "t2", "as_of": "2024-02-01"})),
            record("p3", json!({"topic_id": "t1", "as_of": "2024-03-01"})),
            record("p4", json!({"topic_id": "t1"})),
        ]
    }

    fn stances() -> Vec<ResourceRecord> {
        vec![
            record("s1", json!({"candidate_id": "c1", "topic_id": "t1"})),
            record("s2", json!({"candidate_id": "c1", "topic_id": "t2"})),
            record("s3", json!({"candidate_id": "c2", "topic_id": "t1"})),
            record("s4", json!({"candidate_id": 1, "topic_id": "t1"})),
        ]
    }

    #[test]
    fn test_parse_query() {
        let params = QueryParams::parse(Some("topic_id=t%201&as_of=2024-02-01&topic_id=t2")).unwrap();
        assert_eq!(params.get("topic_id"), Some("t2"));
        assert_eq!(params.get("as_of"), Some("2024-02-01"));
        assert_eq!(params.get("candidate_id"), None);

        let spaced = QueryParams::parse(Some("topic_id=t+1")).unwrap();
        assert_eq!(spaced.get("topic_id"), Some("t 1"));

        assert_eq!(QueryParams::parse(None).unwrap(), QueryParams::default());
    }

    #[test]
    fn test_empty_value_is_absent() {
        let params = QueryParams::parse(Some("topic_id=")).unwrap();
        assert_eq!(params.get("topic_id"), None);
        assert_eq!(ids(&apply_filters(priors(), PRIOR_FILTERS, &params)), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_no_params_returns_everything_in_order() {
        let out = apply_filters(priors(), PRIOR_FILTERS, &QueryParams::default());
        assert_eq!(ids(&out), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_equality_filter() {
        let params = QueryParams::parse(Some("topic_id=t1")).unwrap();
        let out = apply_filters(priors(), PRIOR_FILTERS, &params);
        assert_eq!(ids(&out), vec!["p1", "p3", "p4"]);
        assert!(out.iter().all(|r| r.attribute_str("topic_id") == Some("t1")));
    }

    #[test]
    fn test_as_of_is_inclusive_and_skips_missing() {
        let params = QueryParams::parse(Some("as_of=2024-02-01")).unwrap();
        assert_eq!(ids(&apply_filters(priors(), PRIOR_FILTERS, &params)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let params = QueryParams::parse(Some("topic_id=t1&as_of=2024-02-15")).unwrap();
        assert_eq!(ids(&apply_filters(priors(), PRIOR_FILTERS, &params)), vec!["p1"]);

        let params = QueryParams::parse(Some("candidate_id=c1&topic_id=t1")).unwrap();
        assert_eq!(ids(&apply_filters(stances(), CANDIDATE_FILTERS, &params)), vec!["s1"]);
    }

    #[test]
    fn test_single_param_filters_alone() {
        let params = QueryParams::parse(Some("candidate_id=c1")).unwrap();
        assert_eq!(ids(&apply_filters(stances(), CANDIDATE_FILTERS, &params)), vec!["s1", "s2"]);

        let params = QueryParams::parse(Some("topic_id=t1")).unwrap();
        assert_eq!(
            ids(&apply_filters(stances(), CANDIDATE_FILTERS, &params)),
            vec!["s1", "s3", "s4"]
        );
    }

    #[test]
    fn test_non_string_attribute_never_matches() {
        let params = QueryParams::parse(Some("candidate_id=1")).unwrap();
        assert!(apply_filters(stances(), CANDIDATE_FILTERS, &params).is_empty());
    }

    #[test]
    fn test_unrecognised_params_are_ignored() {
        let params = QueryParams::parse(Some("page=2&candidate_id=c2")).unwrap();
        assert_eq!(ids(&apply_filters(stances(), CANDIDATE_FILTERS, &params)), vec!["s3"]);
        assert_eq!(ids(&apply_filters(stances(), &[], &params)).len(), 4);
    }
}
