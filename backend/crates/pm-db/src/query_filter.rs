//! Equality filters for collection queries.
//!
//! Callers address fields by their public camelCase names. Each repository
//! maps those names to columns; an unknown name is an error instead of a
//! silently ignored condition.

use crate::{DbError, Result};

use pm_core::ErrorLocation;

use std::panic::Location;

use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
    Bool(bool),
    /// Matches `IS NULL`
    Null,
}

impl FilterValue {
    /// Interpret a raw query-string value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "null" => Self::Null,
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(Self::Int)
                .unwrap_or_else(|_| Self::Text(raw.to_string())),
        }
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Option<i64>> for FilterValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Self::Null, Self::Int)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    conditions: Vec<(String, FilterValue)>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.conditions.push((key.into(), value.into()));
        self
    }

    /// Build from query-string pairs such as `projectId=3&sprintId=null`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let conditions = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), FilterValue::parse(v.as_ref())))
            .collect();
        Self { conditions }
    }

    pub fn conditions(&self) -> &[(String, FilterValue)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Append a `WHERE` clause. `columns` maps public keys to column names.
    #[track_caller]
    pub(crate) fn push_where(
        &self,
        qb: &mut QueryBuilder<'_, Sqlite>,
        entity: &'static str,
        columns: &[(&str, &'static str)],
    ) -> Result<()> {
        for (i, (key, value)) in self.conditions.iter().enumerate() {
            let column = columns
                .iter()
                .find(|(public, _)| public == key)
                .map(|(_, column)| *column)
                .ok_or_else(|| DbError::InvalidFilter {
                    entity,
                    key: key.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(column);

            match value {
                FilterValue::Null => {
                    qb.push(" IS NULL");
                }
                FilterValue::Int(v) => {
                    qb.push(" = ").push_bind(*v);
                }
                FilterValue::Text(v) => {
                    qb.push(" = ").push_bind(v.clone());
                }
                FilterValue::Bool(v) => {
                    qb.push(" = ").push_bind(*v);
                }
            }
        }

        Ok(())
    }
}
