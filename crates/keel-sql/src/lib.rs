//! SQL pushdown for `keel-model` queries.
//!
//! Renders a [`keel_model::Query`]'s criteria into a parameterised `WHERE`
//! clause so the filter runs inside the database instead of after the rows have
//! been materialised. Only text and parameters are produced; executing the
//! statement is the caller's business.
//!
//! ```
//! use keel_model::{AuditedEntity, Query};
//! use keel_sql::SqlTranslator;
//!
//! let query = Query::<AuditedEntity<i64, String>>::new()
//!   .where_was_created_by("alice".to_string())
//!   .unwrap()
//!   .where_deleted(false);
//! let filter = query.translate(&SqlTranslator::default()).unwrap();
//!
//! assert_eq!(
//!   filter.where_clause(),
//!   r#"WHERE "created_by" = ?1 COLLATE BINARY AND "deleted_on" IS NULL"#
//! );
//! ```

mod translate;

#[cfg(feature = "rusqlite")]
pub mod encode;
pub mod error;

pub use error::{Error, Result};
pub use translate::{ColumnMap, SqlFilter, SqlTranslator};
