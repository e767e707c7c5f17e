//! SQL schema for the joke store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are never updated or deleted once written.
CREATE TABLE IF NOT EXISTS jokes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    external_id TEXT NOT NULL UNIQUE,  -- provider id; the dedup key
    joke_url    TEXT,
    content     TEXT NOT NULL CHECK (content <> ''),
    created_at  TEXT NOT NULL          -- RFC 3339 UTC
);

-- External-content index over jokes.content, keyed by jokes.id.
CREATE VIRTUAL TABLE IF NOT EXISTS jokes_fts USING fts5(
    content,
    content = 'jokes',
    content_rowid = 'id'
);

CREATE TRIGGER IF NOT EXISTS jokes_fts_insert AFTER INSERT ON jokes BEGIN
    INSERT INTO jokes_fts (rowid, content) VALUES (new.id, new.content);
END;

PRAGMA user_version = 1;
";
