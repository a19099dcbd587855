// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema collaborator types.
//!
//! The schema loader supplies, per table, an ordered sequence of column
//! definitions. Everything here is consumed read-only by the generator;
//! nothing in this module knows about semantic types or generated methods.

/// Physical column type as declared in a schema.
///
/// The mapping table in [`crate::typing`] covers the fixed set of variants;
/// [`StorageType::Other`] carries any tag outside it and maps to the untyped
/// fallback rather than failing the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// Integer column.
    Integer,
    /// Character/text column.
    String,
    /// Calendar date column.
    Date,
    /// Arbitrary-precision decimal column.
    Decimal,
    /// Floating-point column.
    Float,
    /// Boolean column.
    Boolean,
    /// Date-and-time column.
    DateTime,
    /// Time-of-day column.
    Time,
    /// Timestamp column.
    Timestamp,
    /// Any storage tag outside the mapping table.
    Other(String)
}

impl StorageType {
    /// Parse a schema storage tag.
    ///
    /// Unrecognized tags become [`StorageType::Other`]; they are never an
    /// error at this boundary.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "integer" | "int" | "bigint" => Self::Integer,
            "string" | "text" => Self::String,
            "date" => Self::Date,
            "decimal" | "numeric" => Self::Decimal,
            "float" | "double" => Self::Float,
            "boolean" | "bool" => Self::Boolean,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            other => Self::Other(other.to_string())
        }
    }
}

/// A single physical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name.
    pub name:     String,
    /// Declared storage type.
    pub storage:  StorageType,
    /// Whether the column accepts NULL. Columns are nullable unless
    /// declared otherwise, matching the schema DSL default.
    pub nullable: bool
}

impl ColumnSpec {
    /// Create a nullable column.
    #[must_use]
    pub fn new(name: impl Into<String>, storage: StorageType) -> Self {
        Self {
            name: name.into(),
            storage,
            nullable: true
        }
    }

    /// Mark the column NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// An ordered collection of columns for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDef {
    name:    String,
    columns: Vec<ColumnSpec>
}

impl TableDef {
    /// Create an empty table definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            columns: Vec::new()
        }
    }

    /// Append a nullable column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, storage: StorageType) -> Self {
        self.columns.push(ColumnSpec::new(name, storage));
        self
    }

    /// Append a fully specified column.
    #[must_use]
    pub fn with(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }
}

/// All tables visible to one decoration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: Vec<TableDef>
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table definition.
    #[must_use]
    pub fn table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }

    /// Look up a table by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }
}
