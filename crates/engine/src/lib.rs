//! `marklist-engine` — mark-list tabulation and model reconciliation engine.
//!
//! Pure engine crate: receives raw list text and pre-loaded entity lists,
//! returns structured tables and annotated results. No CLI or IO
//! dependencies.

pub mod classify;
pub mod config;
pub mod error;
pub mod expand;
pub mod header;
pub mod index;
pub mod model;
pub mod reconcile;
pub mod roles;
pub mod selection;
pub mod summary;
pub mod tabulate;

pub use config::{JobConfig, Separator, ShortRowPolicy, TabulateConfig};
pub use error::EngineError;
pub use model::{Entity, EntityRef, ReconcileReport, Row, RowWarning, Table};
pub use reconcile::run;
pub use roles::ColumnRoles;
pub use tabulate::tabulate;
