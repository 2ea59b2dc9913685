use std::rc::Rc;

use cardfill_core::{
    apply, query_fn, ConfigError, ListError, ListMsg, PagedListController, RecordSource,
};
use cardfill_store::{
    AuditLogRow, AuditOutcome, CardEditRequestRow, CardRow, CardVisibility, Database, FieldLibrary,
    FillRecordRow, FillStatus, LinkRow, Notice, NoticeStatus, RequestStatus, StoreError, User,
    UserRole, UserStatus,
};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::render::TableView;

/// The admin list screens, in menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Users,
    Cards,
    Fields,
    Requests,
    Notices,
    Audit,
    Fills,
    Links,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 8] = [
        ScreenKind::Users,
        ScreenKind::Cards,
        ScreenKind::Fields,
        ScreenKind::Requests,
        ScreenKind::Notices,
        ScreenKind::Audit,
        ScreenKind::Fills,
        ScreenKind::Links,
    ];

    /// Name typed at the console prompt.
    pub fn name(self) -> &'static str {
        match self {
            ScreenKind::Users => "users",
            ScreenKind::Cards => "cards",
            ScreenKind::Fields => "fields",
            ScreenKind::Requests => "requests",
            ScreenKind::Notices => "notices",
            ScreenKind::Audit => "audit",
            ScreenKind::Fills => "fills",
            ScreenKind::Links => "links",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Users => "User management",
            ScreenKind::Cards => "Card management",
            ScreenKind::Fields => "Field library",
            ScreenKind::Requests => "Card edit requests",
            ScreenKind::Notices => "Notices",
            ScreenKind::Audit => "Audit log",
            ScreenKind::Fills => "Fill records",
            ScreenKind::Links => "Links",
        }
    }

    /// What the extra filter of this screen compares against.
    pub fn filter_hint(self) -> &'static str {
        match self {
            ScreenKind::Users => "active | disabled",
            ScreenKind::Cards | ScreenKind::Fields => "<category>",
            ScreenKind::Requests => "pending | approved | rejected",
            ScreenKind::Notices => "draft | published | archived",
            ScreenKind::Audit => "<action>, e.g. login or card.update",
            ScreenKind::Fills => "success | failed",
            ScreenKind::Links => "active | inactive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A list screen as the console sees it, independent of its record type.
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    fn handle(&mut self, msg: ListMsg) -> Result<(), ListError<StoreError>>;

    fn table(&self) -> TableView;
}

type RowFormatter<T> = fn(&T) -> Vec<String>;

/// One controller plus the columns it is rendered with.
pub struct ListScreen<S: RecordSource> {
    kind: ScreenKind,
    controller: PagedListController<S>,
    columns: &'static [&'static str],
    format_row: RowFormatter<S::Record>,
}

impl<S: RecordSource> ListScreen<S> {
    pub fn new(
        kind: ScreenKind,
        controller: PagedListController<S>,
        columns: &'static [&'static str],
        format_row: RowFormatter<S::Record>,
    ) -> Self {
        Self {
            kind,
            controller,
            columns,
            format_row,
        }
    }
}

impl<S> Screen for ListScreen<S>
where
    S: RecordSource<Error = StoreError>,
{
    fn kind(&self) -> ScreenKind {
        self.kind
    }

    fn handle(&mut self, msg: ListMsg) -> Result<(), ListError<StoreError>> {
        apply(&mut self.controller, msg).map(|_| ())
    }

    fn table(&self) -> TableView {
        let view = self.controller.view();
        TableView {
            title: self.kind.title().to_string(),
            filter: self.controller.filter().clone(),
            headers: self.columns.to_vec(),
            rows: view.items.iter().map(self.format_row).collect(),
            aggregates: view.aggregates.clone(),
            state: view.state,
        }
    }
}

/// Page size to use for each screen.
pub trait PageSizes {
    fn page_size_for(&self, kind: ScreenKind) -> usize;
}

/// Builds every screen over `db`, one controller each.
pub fn build_screens(
    db: &Rc<Database>,
    sizes: &impl PageSizes,
) -> Result<Vec<Box<dyn Screen>>, ConfigError> {
    ScreenKind::ALL
        .into_iter()
        .map(|kind| build_screen(kind, Rc::clone(db), sizes.page_size_for(kind)))
        .collect()
}

pub fn build_screen(
    kind: ScreenKind,
    db: Rc<Database>,
    page_size: usize,
) -> Result<Box<dyn Screen>, ConfigError> {
    match kind {
        ScreenKind::Users => users_screen(db, page_size),
        ScreenKind::Cards => cards_screen(db, page_size),
        ScreenKind::Fields => fields_screen(db, page_size),
        ScreenKind::Requests => requests_screen(db, page_size),
        ScreenKind::Notices => notices_screen(db, page_size),
        ScreenKind::Audit => audit_screen(db, page_size),
        ScreenKind::Fills => fills_screen(db, page_size),
        ScreenKind::Links => links_screen(db, page_size),
    }
}

fn users_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source = query_fn(move |keyword: &str, status: Option<&str>| db.users(keyword, status));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("active", |u: &User| u.status == UserStatus::Active)
        .with_counter("disabled", |u: &User| u.status == UserStatus::Disabled)
        .with_counter("admins", |u: &User| u.role == UserRole::Admin);
    Ok(Box::new(ListScreen::new(
        ScreenKind::Users,
        controller,
        &[
            "ID", "Username", "Email", "Phone", "Role", "Status", "Created",
        ],
        |u: &User| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                optional(u.email.as_deref()),
                optional(u.phone.as_deref()),
                u.role.as_str().to_string(),
                u.status.as_str().to_string(),
                timestamp(&u.created_at),
            ]
        },
    )))
}

fn cards_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source = query_fn(move |keyword: &str, category: Option<&str>| db.cards(keyword, category));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("public", |r: &CardRow| {
            r.card.visibility == CardVisibility::Public
        })
        .with_counter("private", |r: &CardRow| {
            r.card.visibility == CardVisibility::Private
        })
        .with_counter("orphaned", |r: &CardRow| !r.owner.is_present());
    Ok(Box::new(ListScreen::new(
        ScreenKind::Cards,
        controller,
        &["ID", "Name", "Category", "Owner", "Visibility", "Created"],
        |r: &CardRow| {
            vec![
                r.card.id.to_string(),
                r.card.name.clone(),
                r.card.category.clone(),
                r.owner.label().to_string(),
                r.card.visibility.as_str().to_string(),
                timestamp(&r.card.created_at),
            ]
        },
    )))
}

fn fields_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source = query_fn(move |keyword: &str, category: Option<&str>| {
        db.field_libraries(keyword, category)
    });
    let controller = PagedListController::new(source, page_size)?
        .with_counter("enabled", |field: &FieldLibrary| field.is_active)
        .with_counter("disabled", |field: &FieldLibrary| !field.is_active);
    Ok(Box::new(ListScreen::new(
        ScreenKind::Fields,
        controller,
        &["ID", "Name", "Key", "Category", "Type", "Enabled"],
        |field: &FieldLibrary| {
            vec![
                field.id.to_string(),
                field.name.clone(),
                field.field_key.clone(),
                field.category.clone(),
                field.field_type.clone(),
                yes_no(field.is_active),
            ]
        },
    )))
}

fn requests_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source =
        query_fn(move |keyword: &str, status: Option<&str>| db.card_edit_requests(keyword, status));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("pending", |r: &CardEditRequestRow| {
            r.request.status == RequestStatus::Pending
        })
        .with_counter("approved", |r: &CardEditRequestRow| {
            r.request.status == RequestStatus::Approved
        })
        .with_counter("rejected", |r: &CardEditRequestRow| {
            r.request.status == RequestStatus::Rejected
        });
    Ok(Box::new(ListScreen::new(
        ScreenKind::Requests,
        controller,
        &[
            "ID",
            "Card",
            "Requested by",
            "Summary",
            "Status",
            "Submitted",
        ],
        |r: &CardEditRequestRow| {
            vec![
                r.request.id.to_string(),
                r.card.label().to_string(),
                r.user.label().to_string(),
                r.request.summary.clone(),
                r.request.status.as_str().to_string(),
                timestamp(&r.request.created_at),
            ]
        },
    )))
}

fn notices_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source = query_fn(move |keyword: &str, status: Option<&str>| db.notices(keyword, status));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("published", |n: &Notice| n.status == NoticeStatus::Published)
        .with_counter("drafts", |n: &Notice| n.status == NoticeStatus::Draft)
        .with_counter("pinned", |n: &Notice| n.pinned);
    Ok(Box::new(ListScreen::new(
        ScreenKind::Notices,
        controller,
        &["ID", "Title", "Status", "Pinned", "Created"],
        |n: &Notice| {
            vec![
                n.id.to_string(),
                n.title.clone(),
                n.status.as_str().to_string(),
                yes_no(n.pinned),
                timestamp(&n.created_at),
            ]
        },
    )))
}

fn audit_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source =
        query_fn(move |keyword: &str, action: Option<&str>| db.audit_logs(keyword, action));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("success", |r: &AuditLogRow| {
            r.log.outcome == AuditOutcome::Success
        })
        .with_counter("failure", |r: &AuditLogRow| {
            r.log.outcome == AuditOutcome::Failure
        });
    Ok(Box::new(ListScreen::new(
        ScreenKind::Audit,
        controller,
        &["ID", "User", "Action", "Target", "Outcome", "IP", "Time"],
        |r: &AuditLogRow| {
            vec![
                r.log.id.to_string(),
                r.user.label().to_string(),
                r.log.action.clone(),
                r.log.target.clone(),
                r.log.outcome.as_str().to_string(),
                optional(r.log.ip_address.as_deref()),
                timestamp(&r.log.created_at),
            ]
        },
    )))
}

fn fills_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source =
        query_fn(move |keyword: &str, status: Option<&str>| db.fill_records(keyword, status));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("success", |r: &FillRecordRow| {
            r.record.status == FillStatus::Success
        })
        .with_counter("failed", |r: &FillRecordRow| {
            r.record.status == FillStatus::Failed
        });
    Ok(Box::new(ListScreen::new(
        ScreenKind::Fills,
        controller,
        &["ID", "Card", "User", "Site", "Fields", "Status", "Time"],
        |r: &FillRecordRow| {
            vec![
                r.record.id.to_string(),
                r.card.label().to_string(),
                r.user.label().to_string(),
                r.record.site.clone(),
                r.record.field_count.to_string(),
                r.record.status.as_str().to_string(),
                timestamp(&r.record.created_at),
            ]
        },
    )))
}

fn links_screen(db: Rc<Database>, page_size: usize) -> Result<Box<dyn Screen>, ConfigError> {
    let source = query_fn(move |keyword: &str, state: Option<&str>| db.links(keyword, state));
    let controller = PagedListController::new(source, page_size)?
        .with_counter("active", |r: &LinkRow| r.link.is_active)
        .with_counter("inactive", |r: &LinkRow| !r.link.is_active);
    Ok(Box::new(ListScreen::new(
        ScreenKind::Links,
        controller,
        &["ID", "Title", "Card", "Owner", "URL", "Visits", "Active"],
        |r: &LinkRow| {
            vec![
                r.link.id.to_string(),
                r.link.title.clone(),
                r.card.label().to_string(),
                r.user.label().to_string(),
                r.link.url.clone(),
                r.link.visit_count.to_string(),
                yes_no(r.link.is_active),
            ]
        },
    )))
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn yes_no(value: bool) -> String {
    String::from(if value { "yes" } else { "no" })
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
