//! Registry of remote repository servers.
//!
//! At most one server is the default at any time. Every write that can
//! change the default runs in one transaction that clears the old default
//! before setting the new one; the `servers_single_default` partial index
//! rejects anything that slips past.

use crate::database::Database;
use crate::error::{ServerError, ServerResult, StoreError, StoreResult};
use metabridge_types::ServerId;
use regex_lite::Regex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::LazyLock;
use tracing::{error, info};

const SERVER_URL_PATTERN: &str = r"^https?://[^/\s]+/(?:\S*/)?fedora(?:/\S*)?$";

/// Scheme, authority, then a `fedora` path segment.
static SERVER_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| match Regex::new(SERVER_URL_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            error!(error = %e, "server url pattern does not compile; rejecting all urls");
            None
        }
    });

/// Page size used when a listing does not set one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A registered server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    pub url: String,
    pub is_default: bool,
}

/// Input for [`ServerRegistry::register_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub name: String,
    pub url: String,
    pub is_default: bool,
}

impl NewServer {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            is_default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Partial update for [`ServerRegistry::update_server`]. `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Url,
    IsDefault,
}

impl SortColumn {
    /// Parses a listing column name; `None` for anything unsortable.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(SortColumn::Name),
            "url" => Some(SortColumn::Url),
            "is_default" => Some(SortColumn::IsDefault),
            _ => None,
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Url => "url",
            SortColumn::IsDefault => "is_default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"a"` is ascending; every other token sorts descending.
    pub fn from_token(token: &str) -> Self {
        if token == "a" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Builds an order from request tokens such as `sort_field=name` and
    /// `sort_dir=d`. Unknown columns give `None`, which lists unsorted.
    pub fn from_tokens(column: &str, direction: &str) -> Option<Self> {
        SortColumn::from_name(column).map(|c| Self::new(c, SortDirection::from_token(direction)))
    }
}

/// Which slice of the registry to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerListing {
    /// 1-based page; `None` lists everything.
    pub page: Option<u32>,
    pub per_page: u32,
    pub order: Option<SortOrder>,
}

impl Default for ServerListing {
    fn default() -> Self {
        Self {
            page: None,
            per_page: DEFAULT_PER_PAGE,
            order: None,
        }
    }
}

impl ServerListing {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn ordered_by(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }
}

/// Returns true if `url` looks like a repository service endpoint.
pub fn is_valid_server_url(url: &str) -> bool {
    SERVER_URL.as_ref().is_some_and(|re| re.is_match(url))
}

/// Server registry backed by the `servers` table.
#[derive(Debug, Clone)]
pub struct ServerRegistry {
    db: Database,
}

impl ServerRegistry {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Adds a server. When it is marked default, the previous default is
    /// cleared in the same transaction.
    pub fn register_server(&self, new: NewServer) -> ServerResult<Server> {
        check_url(&new.url)?;
        let server = Server {
            id: ServerId::new(),
            name: new.name,
            url: new.url,
            is_default: new.is_default,
        };

        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if name_taken(&tx, &server.name, None)? {
            return Err(ServerError::DuplicateName(server.name));
        }
        if server.is_default {
            clear_default(&tx)?;
        }
        tx.execute(
            "INSERT INTO servers (id, name, url, is_default) VALUES (?1, ?2, ?3, ?4)",
            params![
                server.id.to_string(),
                server.name,
                server.url,
                server.is_default
            ],
        )?;
        tx.commit()?;

        info!(server = %server.id, name = %server.name, default = server.is_default, "registered server");
        Ok(server)
    }

    /// Makes `id` the only default server. Setting the current default again
    /// changes nothing.
    pub fn set_default(&self, id: ServerId) -> ServerResult<()> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        if select_server(&tx, id)?.is_none() {
            return Err(ServerError::NotFound(id.to_string()));
        }
        clear_default(&tx)?;
        tx.execute(
            "UPDATE servers SET is_default = 1 WHERE id = ?1",
            params![id.to_string()],
        )?;
        tx.commit()?;

        info!(server = %id, "default server changed");
        Ok(())
    }

    /// Applies a partial update with the same validation as registration.
    /// The old default is cleared only when this server becomes default.
    pub fn update_server(&self, id: ServerId, update: ServerUpdate) -> ServerResult<Server> {
        if let Some(url) = &update.url {
            check_url(url)?;
        }

        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        let mut server =
            select_server(&tx, id)?.ok_or_else(|| ServerError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            if name_taken(&tx, &name, Some(id))? {
                return Err(ServerError::DuplicateName(name));
            }
            server.name = name;
        }
        if let Some(url) = update.url {
            server.url = url;
        }
        if let Some(is_default) = update.is_default {
            if is_default && !server.is_default {
                clear_default(&tx)?;
            }
            server.is_default = is_default;
        }

        tx.execute(
            "UPDATE servers SET name = ?2, url = ?3, is_default = ?4 WHERE id = ?1",
            params![id.to_string(), server.name, server.url, server.is_default],
        )?;
        tx.commit()?;

        info!(server = %id, name = %server.name, default = server.is_default, "updated server");
        Ok(server)
    }

    /// Removes a server. Deleting the default leaves no default.
    pub fn delete_server(&self, id: ServerId) -> ServerResult<Server> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        let server =
            select_server(&tx, id)?.ok_or_else(|| ServerError::NotFound(id.to_string()))?;
        tx.execute("DELETE FROM servers WHERE id = ?1", params![id.to_string()])?;
        tx.commit()?;

        info!(server = %id, name = %server.name, "deleted server");
        Ok(server)
    }

    pub fn get_server(&self, id: ServerId) -> ServerResult<Server> {
        let conn = self.db.lock()?;
        select_server(&conn, id)?.ok_or_else(|| ServerError::NotFound(id.to_string()))
    }

    /// The current default server, if one is set.
    pub fn default_server(&self) -> ServerResult<Option<Server>> {
        let conn = self.db.lock()?;
        let server = conn
            .query_row(
                "SELECT id, name, url, is_default FROM servers WHERE is_default = 1",
                [],
                raw_server,
            )
            .optional()?;
        Ok(server.map(decode_server).transpose()?)
    }

    /// Lists servers in registration order unless `listing.order` says
    /// otherwise.
    pub fn list_servers(&self, listing: ServerListing) -> ServerResult<Vec<Server>> {
        let mut sql = String::from("SELECT id, name, url, is_default FROM servers");
        match listing.order {
            Some(order) => {
                sql.push_str(&format!(
                    " ORDER BY {} {}, seq",
                    order.column.sql(),
                    order.direction.sql()
                ));
            }
            None => sql.push_str(" ORDER BY seq"),
        }
        let (limit, offset) = match listing.page {
            Some(page) => {
                let per_page = i64::from(listing.per_page.max(1));
                // past-the-end pages saturate to an empty result
                let offset = i64::from(page.max(1) - 1).saturating_mul(per_page);
                (per_page, offset)
            }
            None => (-1, 0),
        };
        sql.push_str(" LIMIT ?1 OFFSET ?2");

        let conn = self.db.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit, offset], raw_server)?;
        let mut servers = Vec::new();
        for row in rows {
            servers.push(decode_server(row?)?);
        }
        Ok(servers)
    }

    pub fn count(&self) -> ServerResult<usize> {
        let conn = self.db.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM servers", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Returns true if some server already uses `name`.
    pub fn is_name_taken(&self, name: &str) -> ServerResult<bool> {
        let conn = self.db.lock()?;
        name_taken(&conn, name, None)
    }
}

/// Rejects URLs that do not point at a repository service path.
pub fn check_url(url: &str) -> ServerResult<()> {
    if is_valid_server_url(url) {
        Ok(())
    } else {
        Err(ServerError::InvalidUrl(url.to_string()))
    }
}

fn clear_default(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("UPDATE servers SET is_default = 0 WHERE is_default = 1", [])
}

fn name_taken(conn: &Connection, name: &str, except: Option<ServerId>) -> ServerResult<bool> {
    let owner: Option<String> = conn
        .query_row(
            "SELECT id FROM servers WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    let except = except.map(|id| id.to_string());
    Ok(owner.is_some_and(|owner| Some(owner) != except))
}

fn select_server(conn: &Connection, id: ServerId) -> ServerResult<Option<Server>> {
    let server = conn
        .query_row(
            "SELECT id, name, url, is_default FROM servers WHERE id = ?1",
            params![id.to_string()],
            raw_server,
        )
        .optional()?;
    Ok(server.map(decode_server).transpose()?)
}

type RawServer = (String, String, String, bool);

fn raw_server(row: &Row<'_>) -> rusqlite::Result<RawServer> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn decode_server((id, name, url, is_default): RawServer) -> StoreResult<Server> {
    let id = ServerId::parse(&id)
        .map_err(|e| StoreError::InvalidData(format!("invalid server id {id:?}: {e}")))?;
    Ok(Server {
        id,
        name,
        url,
        is_default,
    })
}
