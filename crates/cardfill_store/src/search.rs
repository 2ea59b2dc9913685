use std::cmp::Reverse;

use cardfill_core::RecordId;

use crate::models::{FieldLibrary, Notice, User};
use crate::rows::{AuditLogRow, CardEditRequestRow, CardRow, FillRecordRow, LinkRow};

/// How a table takes part in keyword search and the extra filter.
pub(crate) trait Searchable {
    fn id(&self) -> RecordId;

    /// Text fields the keyword is matched against, case-insensitively.
    fn search_fields(&self) -> Vec<&str>;

    /// Value the screen's category/status filter is compared with.
    fn filter_key(&self) -> &str;
}

/// Keeps the rows matching `keyword` and `filter`, newest (highest id) first.
///
/// A blank keyword or filter matches everything.
pub(crate) fn search<T: Searchable>(
    rows: impl IntoIterator<Item = T>,
    keyword: &str,
    filter: Option<&str>,
) -> Vec<T> {
    let needle = keyword.trim().to_lowercase();
    let filter = filter.map(str::trim).filter(|value| !value.is_empty());

    let mut hits: Vec<T> = rows
        .into_iter()
        .filter(|row| {
            filter.is_none_or(|value| row.filter_key().eq_ignore_ascii_case(value))
        })
        .filter(|row| {
            needle.is_empty()
                || row
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect();
    hits.sort_by_key(|row| Reverse(row.id()));
    hits
}

impl Searchable for User {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str(), self.role.as_str()];
        fields.extend(self.email.as_deref());
        fields.extend(self.phone.as_deref());
        fields
    }

    fn filter_key(&self) -> &str {
        self.status.as_str()
    }
}

impl Searchable for CardRow {
    fn id(&self) -> RecordId {
        self.card.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.card.name.as_str(),
            self.card.category.as_str(),
            self.owner.label(),
        ]
    }

    fn filter_key(&self) -> &str {
        &self.card.category
    }
}

impl Searchable for FieldLibrary {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.field_key.as_str(),
            self.field_type.as_str(),
        ]
    }

    fn filter_key(&self) -> &str {
        &self.category
    }
}

impl Searchable for CardEditRequestRow {
    fn id(&self) -> RecordId {
        self.request.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.request.summary.as_str(),
            self.card.label(),
            self.user.label(),
        ]
    }

    fn filter_key(&self) -> &str {
        self.request.status.as_str()
    }
}

impl Searchable for Notice {
    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn filter_key(&self) -> &str {
        self.status.as_str()
    }
}

impl Searchable for AuditLogRow {
    fn id(&self) -> RecordId {
        self.log.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.log.action.as_str(),
            self.log.target.as_str(),
            self.user.label(),
        ];
        fields.extend(self.log.ip_address.as_deref());
        fields
    }

    fn filter_key(&self) -> &str {
        &self.log.action
    }
}

impl Searchable for FillRecordRow {
    fn id(&self) -> RecordId {
        self.record.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.record.site.as_str(),
            self.card.label(),
            self.user.label(),
        ]
    }

    fn filter_key(&self) -> &str {
        self.record.status.as_str()
    }
}

impl Searchable for LinkRow {
    fn id(&self) -> RecordId {
        self.link.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.link.title.as_str(),
            self.link.url.as_str(),
            self.card.label(),
            self.user.label(),
        ]
    }

    fn filter_key(&self) -> &str {
        if self.link.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}
