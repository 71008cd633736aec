//! Query filters for listing records.
//!
//! A filter pairs a field-selection list with an Airtable formula. It is
//! encoded as the `fields[]` and `filterByFormula` query parameters of the
//! list-records call.

/// Characters with special meaning in RE2 patterns.
const REGEX_METACHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

/// Immutable field selection plus formula predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    fields: Vec<String>,
    formula: String,
}

impl QueryFilter {
    /// Filter from an explicit field list and raw formula.
    pub fn new(fields: Vec<String>, formula: impl Into<String>) -> Self {
        Self {
            fields,
            formula: formula.into(),
        }
    }

    /// Select `field` and keep only records whose `field` equals `value` exactly.
    ///
    /// The comparison is a case-sensitive, anchored regex match, so `Test`
    /// matches neither `Testing` nor `test`.
    ///
    /// ```
    /// use airtable_client::QueryFilter;
    ///
    /// let filter = QueryFilter::exact_match("Business Name", "Test");
    /// assert_eq!(filter.formula(), r#"REGEX_MATCH({Business Name},"^Test$")"#);
    /// ```
    pub fn exact_match(field: &str, value: &str) -> Self {
        let pattern = format!("^{}$", escape_regex(value));
        Self {
            fields: vec![field.to_string()],
            formula: format!(
                "REGEX_MATCH({{{}}},\"{}\")",
                field,
                escape_string_literal(&pattern)
            ),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Query parameters in request order: one `fields[]` per selected field,
    /// then `filterByFormula`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs: Vec<(&'static str, &str)> = self
            .fields
            .iter()
            .map(|field| ("fields[]", field.as_str()))
            .collect();
        if !self.formula.is_empty() {
            pairs.push(("filterByFormula", self.formula.as_str()));
        }
        pairs
    }
}

fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape a value for use inside a double-quoted formula string.
fn escape_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
