//! Cardfill store: entity models and the query functions behind each admin list.
mod database;
mod error;
mod models;
mod persist;
mod rows;
mod search;
mod seed;

pub use database::Database;
pub use error::StoreError;
pub use models::{
    AuditLog, AuditOutcome, Card, CardEditRequest, CardVisibility, FieldLibrary, FillRecord,
    FillStatus, Link, Notice, NoticeStatus, RequestStatus, Snapshot, User, UserRole, UserStatus,
};
pub use persist::{ensure_dir, load_snapshot, save_snapshot, write_atomically, PersistError};
pub use rows::{AuditLogRow, CardEditRequestRow, CardRow, FillRecordRow, LinkRow};
pub use seed::{
    demo_snapshot, DEMO_AUDIT_LOGS, DEMO_CARDS, DEMO_EDIT_REQUESTS, DEMO_FIELD_LIBRARIES,
    DEMO_FILL_RECORDS, DEMO_LINKS, DEMO_NOTICES, DEMO_USERS,
};
