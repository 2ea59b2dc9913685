//! Query results with their card/user references already followed.
use cardfill_core::Relation;

use crate::models::{AuditLog, Card, CardEditRequest, FillRecord, Link, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub card: Card,
    pub owner: Relation<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEditRequestRow {
    pub request: CardEditRequest,
    pub card: Relation<Card>,
    pub user: Relation<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogRow {
    pub log: AuditLog,
    pub user: Relation<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRecordRow {
    pub record: FillRecord,
    pub card: Relation<Card>,
    pub user: Relation<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub link: Link,
    pub card: Relation<Card>,
    pub user: Relation<User>,
}
