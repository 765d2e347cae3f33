//! Typed conditional-update command.
//!
//! The original store access chained dynamically-typed filter calls; here
//! each guarded write is an explicit value: the table, the columns to set
//! and the columns that must all match for any row to be touched. The match
//! columns are ANDed into one parameterized statement, so the ownership
//! check and the status write are a single atomic store operation with no
//! read-then-write window.

/// A conditional `UPDATE` against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalUpdate {
    table: &'static str,
    set: Vec<(&'static str, String)>,
    matches: Vec<(&'static str, String)>,
}

impl ConditionalUpdate {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            set: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Add a column to write.
    pub fn set(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.set.push((column, value.into()));
        self
    }

    /// Add a column that must match for the update to apply. All match
    /// columns are combined with AND.
    pub fn matching(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.matches.push((column, value.into()));
        self
    }

    /// The parameterized SQL statement, placeholders numbered in the order
    /// returned by [`values`](Self::values).
    pub fn to_sql(&self) -> String {
        let mut placeholder = 0usize;
        let set_clause = self
            .set
            .iter()
            .map(|(column, _)| {
                placeholder += 1;
                format!("{column} = ${placeholder}")
            })
            .collect::<Vec<_>>()
            .join(", ");
        let where_clause = self
            .matches
            .iter()
            .map(|(column, _)| {
                placeholder += 1;
                format!("{column} = ${placeholder}")
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        format!("UPDATE {} SET {} WHERE {}", self.table, set_clause, where_clause)
    }

    /// Bind values in placeholder order: set columns first, then match
    /// columns.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.set
            .iter()
            .map(|(_, value)| value.as_str())
            .chain(self.matches.iter().map(|(_, value)| value.as_str()))
    }

    /// True when the command has at least one set column and one match
    /// column. A conditional update with no condition would touch every row.
    pub fn is_guarded(&self) -> bool {
        !self.set.is_empty() && !self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_to_one_statement_with_anded_matches() {
        let update = ConditionalUpdate::new("bookings")
            .set("status", "cancelled")
            .matching("id", "b-1")
            .matching("traveler_id", "t-1");

        assert_eq!(
            update.to_sql(),
            "UPDATE bookings SET status = $1 WHERE id = $2 AND traveler_id = $3"
        );
        assert_eq!(
            update.values().collect::<Vec<_>>(),
            vec!["cancelled", "b-1", "t-1"]
        );
        assert!(update.is_guarded());
    }

    #[test]
    fn unguarded_command_is_detectable() {
        let update = ConditionalUpdate::new("bookings").set("status", "declined");
        assert!(!update.is_guarded());
    }
}
