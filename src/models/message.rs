use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Mensaje del formulario de contacto
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageStats {
    pub total: i64,
    pub unread: i64,
    pub read: i64,
}

impl MessageStats {
    pub fn new(total: i64, unread: i64) -> Self {
        Self {
            total,
            unread,
            read: total - unread,
        }
    }
}
