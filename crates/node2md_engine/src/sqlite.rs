//! Content source over a SQLite copy of the CMS database.
//!
//! Reads the stock node/body/user tables, the taxonomy index and the two
//! image fields (`field_copertina` for the cover, `field_galleria` for the
//! gallery). The schema is consumed as-is; nothing here creates or migrates
//! tables.

use std::path::Path;

use chrono::{TimeZone, Utc};
use node2md_core::{ContentRecord, NodeId};
use node2md_logging::export_debug;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::source::{ContentSource, SourceError};

const PUBLISHED_NODES_SQL: &str = "
    SELECT n.nid, n.title, b.body_value, b.body_summary, n.created, n.type, u.name
    FROM node n
    JOIN field_data_body b ON n.nid = b.entity_id
    JOIN users u ON n.uid = u.uid
    WHERE n.status = 1
    ORDER BY n.nid";

const TAXONOMY_SQL: &str = "
    SELECT td.name
    FROM taxonomy_index ti
    JOIN taxonomy_term_data td ON ti.tid = td.tid
    WHERE ti.nid = ?1
    ORDER BY ti.rowid";

const COVER_SQL: &str = "
    SELECT fm.uri
    FROM file_managed fm
    JOIN field_data_field_copertina fc ON fm.fid = fc.field_copertina_fid
    WHERE fc.entity_id = ?1
    ORDER BY fc.delta
    LIMIT 1";

const GALLERY_SQL: &str = "
    SELECT fm.uri
    FROM file_managed fm
    JOIN field_data_field_galleria fg ON fm.fid = fg.field_galleria_fid
    WHERE fg.entity_id = ?1
    ORDER BY fg.delta";

pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Opens the database read-only.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        export_debug!("opened content database {:?}", path);
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn query_strings(&self, sql: &str, nid: NodeId) -> Result<Vec<String>, SourceError> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params![node_param(nid)?], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

struct RawRow {
    nid: i64,
    title: String,
    body: Option<String>,
    summary: Option<String>,
    created: i64,
    content_type: String,
    author: String,
}

impl RawRow {
    fn into_record(self) -> Result<ContentRecord, SourceError> {
        let id = NodeId::try_from(self.nid)
            .map_err(|_| SourceError::InvalidNodeId(self.nid.to_string()))?;
        let created_at = Utc
            .timestamp_opt(self.created, 0)
            .single()
            .ok_or(SourceError::InvalidTimestamp {
                nid: id,
                timestamp: self.created,
            })?;
        Ok(ContentRecord {
            id,
            title: self.title,
            body_html: self.body,
            summary_html: self.summary,
            created_at,
            content_type: self.content_type,
            author_name: self.author,
        })
    }
}

fn node_param(nid: NodeId) -> Result<i64, SourceError> {
    i64::try_from(nid).map_err(|_| SourceError::InvalidNodeId(nid.to_string()))
}

impl ContentSource for SqliteSource {
    fn published_records(&self) -> Result<Vec<ContentRecord>, SourceError> {
        let mut stmt = self.conn.prepare(PUBLISHED_NODES_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(RawRow {
                nid: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
                summary: row.get(3)?,
                created: row.get(4)?,
                content_type: row.get(5)?,
                author: row.get(6)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.into_record()?);
        }
        export_debug!("loaded {} published nodes", records.len());
        Ok(records)
    }

    fn taxonomy_terms(&self, nid: NodeId) -> Result<Vec<String>, SourceError> {
        self.query_strings(TAXONOMY_SQL, nid)
    }

    fn cover_image(&self, nid: NodeId) -> Result<Option<String>, SourceError> {
        let mut stmt = self.conn.prepare_cached(COVER_SQL)?;
        let uri = stmt
            .query_row(params![node_param(nid)?], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(uri)
    }

    fn gallery_images(&self, nid: NodeId) -> Result<Vec<String>, SourceError> {
        self.query_strings(GALLERY_SQL, nid)
    }
}
