#![allow(dead_code)]

use std::path::Path;

use rusqlite::{params, Connection};

/// The slice of the CMS schema the exporter reads.
const FIXTURE_SCHEMA: &str = "
    CREATE TABLE users (uid INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE node (
        nid INTEGER PRIMARY KEY,
        type TEXT NOT NULL,
        title TEXT NOT NULL,
        uid INTEGER NOT NULL,
        status INTEGER NOT NULL,
        created INTEGER NOT NULL
    );
    CREATE TABLE field_data_body (
        entity_id INTEGER NOT NULL,
        body_value TEXT,
        body_summary TEXT
    );
    CREATE TABLE taxonomy_term_data (tid INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE taxonomy_index (nid INTEGER NOT NULL, tid INTEGER NOT NULL);
    CREATE TABLE file_managed (fid INTEGER PRIMARY KEY, uri TEXT NOT NULL);
    CREATE TABLE field_data_field_copertina (
        entity_id INTEGER NOT NULL,
        delta INTEGER NOT NULL DEFAULT 0,
        field_copertina_fid INTEGER NOT NULL
    );
    CREATE TABLE field_data_field_galleria (
        entity_id INTEGER NOT NULL,
        delta INTEGER NOT NULL,
        field_galleria_fid INTEGER NOT NULL
    );
";

pub struct Fixture {
    pub conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_connection(Connection::open_in_memory().unwrap())
    }

    pub fn at_path(path: &Path) -> Self {
        Self::with_connection(Connection::open(path).unwrap())
    }

    fn with_connection(conn: Connection) -> Self {
        conn.execute_batch(FIXTURE_SCHEMA).unwrap();
        Self { conn }
    }

    pub fn user(&self, uid: i64, name: &str) -> &Self {
        self.conn
            .execute("INSERT INTO users (uid, name) VALUES (?1, ?2)", params![uid, name])
            .unwrap();
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn node(
        &self,
        nid: i64,
        uid: i64,
        title: &str,
        status: i64,
        created: i64,
        body: Option<&str>,
        summary: Option<&str>,
    ) -> &Self {
        self.conn
            .execute(
                "INSERT INTO node (nid, type, title, uid, status, created)
                 VALUES (?1, 'article', ?2, ?3, ?4, ?5)",
                params![nid, title, uid, status, created],
            )
            .unwrap();
        self.conn
            .execute(
                "INSERT INTO field_data_body (entity_id, body_value, body_summary)
                 VALUES (?1, ?2, ?3)",
                params![nid, body, summary],
            )
            .unwrap();
        self
    }

    pub fn term(&self, nid: i64, tid: i64, name: &str) -> &Self {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO taxonomy_term_data (tid, name) VALUES (?1, ?2)",
                params![tid, name],
            )
            .unwrap();
        self.conn
            .execute(
                "INSERT INTO taxonomy_index (nid, tid) VALUES (?1, ?2)",
                params![nid, tid],
            )
            .unwrap();
        self
    }

    pub fn cover(&self, nid: i64, fid: i64, uri: &str) -> &Self {
        self.file(fid, uri);
        self.conn
            .execute(
                "INSERT INTO field_data_field_copertina (entity_id, field_copertina_fid)
                 VALUES (?1, ?2)",
                params![nid, fid],
            )
            .unwrap();
        self
    }

    pub fn gallery(&self, nid: i64, delta: i64, fid: i64, uri: &str) -> &Self {
        self.file(fid, uri);
        self.conn
            .execute(
                "INSERT INTO field_data_field_galleria (entity_id, delta, field_galleria_fid)
                 VALUES (?1, ?2, ?3)",
                params![nid, delta, fid],
            )
            .unwrap();
        self
    }

    fn file(&self, fid: i64, uri: &str) {
        self.conn
            .execute(
                "INSERT INTO file_managed (fid, uri) VALUES (?1, ?2)",
                params![fid, uri],
            )
            .unwrap();
    }
}

/// 2020-01-02 03:04:05 UTC
pub const JAN_2_2020: i64 = 1_577_934_245;
