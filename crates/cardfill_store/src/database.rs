use std::borrow::Cow;
use std::path::{Path, PathBuf};

use cardfill_core::Relation;
use cardfill_logging::{admin_debug, admin_info};

use crate::error::StoreError;
use crate::models::{FieldLibrary, Notice, Snapshot, User};
use crate::persist::{load_snapshot, save_snapshot};
use crate::rows::{AuditLogRow, CardEditRequestRow, CardRow, FillRecordRow, LinkRow};
use crate::search::search;

enum Backing {
    Memory(Snapshot),
    /// Re-read on every query so external edits show up on the next refresh.
    File(PathBuf),
}

/// Read side of the admin data: one `(keyword, filter)` query per screen.
///
/// Every query returns the full matching set, newest first, with card and
/// user references resolved into [`Relation`]s.
pub struct Database {
    backing: Backing,
}

impl Database {
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            backing: Backing::Memory(snapshot),
        }
    }

    /// Opens a JSON snapshot file, checking once that it can be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = load_snapshot(&path)?;
        admin_info!(
            "Opened database {:?} ({} users, {} cards, {} fill records)",
            path,
            snapshot.users.len(),
            snapshot.cards.len(),
            snapshot.fill_records.len()
        );
        Ok(Self {
            backing: Backing::File(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::Memory(_) => None,
            Backing::File(path) => Some(path),
        }
    }

    pub fn snapshot(&self) -> Result<Cow<'_, Snapshot>, StoreError> {
        match &self.backing {
            Backing::Memory(snapshot) => Ok(Cow::Borrowed(snapshot)),
            Backing::File(path) => {
                admin_debug!("Reading snapshot from {:?}", path);
                load_snapshot(path).map(Cow::Owned)
            }
        }
    }

    /// Writes the current contents to `path` as a snapshot file.
    pub fn export(&self, path: &Path) -> Result<(), StoreError> {
        let snapshot = self.snapshot()?;
        save_snapshot(path, &snapshot)
    }

    /// Users by username, email, phone or role; filter on status.
    pub fn users(&self, keyword: &str, status: Option<&str>) -> Result<Vec<User>, StoreError> {
        let snapshot = self.snapshot()?;
        Ok(search(snapshot.users.iter().cloned(), keyword, status))
    }

    /// Cards by name, category or owner; filter on category.
    pub fn cards(&self, keyword: &str, category: Option<&str>) -> Result<Vec<CardRow>, StoreError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot.cards.iter().map(|card| CardRow {
            card: card.clone(),
            owner: snapshot.owner(card),
        });
        Ok(search(rows, keyword, category))
    }

    /// Field definitions by name, key or type; filter on category.
    pub fn field_libraries(
        &self,
        keyword: &str,
        category: Option<&str>,
    ) -> Result<Vec<FieldLibrary>, StoreError> {
        let snapshot = self.snapshot()?;
        Ok(search(
            snapshot.field_libraries.iter().cloned(),
            keyword,
            category,
        ))
    }

    /// Edit requests by summary, card or requester; filter on status.
    pub fn card_edit_requests(
        &self,
        keyword: &str,
        status: Option<&str>,
    ) -> Result<Vec<CardEditRequestRow>, StoreError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot
            .card_edit_requests
            .iter()
            .map(|request| CardEditRequestRow {
                request: request.clone(),
                card: Relation::resolve(request.card_id, |id| snapshot.card(id).cloned()),
                user: snapshot.owner(request),
            });
        Ok(search(rows, keyword, status))
    }

    /// Notices by title or content; filter on status.
    pub fn notices(&self, keyword: &str, status: Option<&str>) -> Result<Vec<Notice>, StoreError> {
        let snapshot = self.snapshot()?;
        Ok(search(snapshot.notices.iter().cloned(), keyword, status))
    }

    /// Audit entries by action, target, user or address; filter on action.
    pub fn audit_logs(
        &self,
        keyword: &str,
        action: Option<&str>,
    ) -> Result<Vec<AuditLogRow>, StoreError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot.audit_logs.iter().map(|log| AuditLogRow {
            log: log.clone(),
            user: snapshot.owner(log),
        });
        Ok(search(rows, keyword, action))
    }

    /// Fill runs by site, card or user; filter on status.
    pub fn fill_records(
        &self,
        keyword: &str,
        status: Option<&str>,
    ) -> Result<Vec<FillRecordRow>, StoreError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot.fill_records.iter().map(|record| FillRecordRow {
            record: record.clone(),
            card: Relation::resolve(record.card_id, |id| snapshot.card(id).cloned()),
            user: snapshot.owner(record),
        });
        Ok(search(rows, keyword, status))
    }

    /// Links by title, url, card or user; filter on `active`/`inactive`.
    pub fn links(&self, keyword: &str, state: Option<&str>) -> Result<Vec<LinkRow>, StoreError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot.links.iter().map(|link| LinkRow {
            link: link.clone(),
            card: Relation::resolve(link.card_id, |id| snapshot.card(id).cloned()),
            user: snapshot.owner(link),
        });
        Ok(search(rows, keyword, state))
    }
}
