//! Query wire format for the record store
//!
//! The store exposes a single query endpoint per collection and expects a
//! JSON body naming the fields to project plus optional filter clauses.
//! Casing is uneven on the wire (`where` clauses use PascalCase keys,
//! `whereGroups` use camelCase) and is pinned here with serde renames.

use serde::Serialize;

/// Body for `POST {collection}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryParams {
    pub fields: Vec<FieldSpec>,
    #[serde(rename = "where", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<WhereClause>,
    #[serde(rename = "whereGroups", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<WhereGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub field: FieldName,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

/// A single exact or substring filter, AND-ed with its siblings.
#[derive(Debug, Clone, Serialize)]
pub struct WhereClause {
    #[serde(rename = "FieldName")]
    pub field_name: String,
    #[serde(rename = "Operator")]
    pub operator: FilterOperator,
    #[serde(rename = "Values")]
    pub values: Vec<String>,
    #[serde(rename = "Include")]
    pub include: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    ExactMatch,
    Contains,
}

/// OR-composed filter group used for multi-field text search.
#[derive(Debug, Clone, Serialize)]
pub struct WhereGroup {
    pub operator: String,
    #[serde(rename = "subGroups")]
    pub sub_groups: Vec<SubGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubGroup {
    pub operator: String,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl QueryParams {
    /// Projects the given fields with no filters.
    pub fn select(fields: &[&str]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|name| FieldSpec {
                    field: FieldName {
                        name: (*name).to_string(),
                    },
                })
                .collect(),
            filters: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Adds an `ExactMatch` clause on a single field.
    pub fn matching(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(WhereClause {
            field_name: field.to_string(),
            operator: FilterOperator::ExactMatch,
            values: vec![value.into()],
            include: true,
        });
        self
    }

    /// Adds an OR group of `Contains` clauses, one per field, all testing
    /// the same term. Matches records where any field contains the term.
    pub fn containing_any(mut self, fields: &[&str], term: impl Into<String>) -> Self {
        let term = term.into();
        self.groups.push(WhereGroup {
            operator: "Or".to_string(),
            sub_groups: fields
                .iter()
                .map(|field| SubGroup {
                    operator: "And".to_string(),
                    conditions: vec![Condition {
                        field_name: (*field).to_string(),
                        operator: FilterOperator::Contains,
                        values: vec![term.clone()],
                    }],
                })
                .collect(),
        });
        self
    }
}
