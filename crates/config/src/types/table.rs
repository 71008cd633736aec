//! Location of the table inside an Airtable base.

/// Identifies the base and table that records are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub base_id: String,
    pub table: String,
}
