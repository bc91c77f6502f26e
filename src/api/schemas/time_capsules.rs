use crate::domain::capsule::TimeCapsule;
use crate::services::capsule_service::TimeCapsulePatch;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateTimeCapsule {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub open_date: String,
}

#[derive(Deserialize)]
pub struct UpdateTimeCapsule {
    pub message: Option<String>,
    pub open_date: Option<String>,
}

impl From<UpdateTimeCapsule> for TimeCapsulePatch {
    fn from(payload: UpdateTimeCapsule) -> Self {
        Self { message: payload.message, open_date: payload.open_date }
    }
}

#[derive(Serialize)]
pub struct TimeCapsuleBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub open_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<TimeCapsule> for TimeCapsuleBody {
    fn from(capsule: TimeCapsule) -> Self {
        Self {
            id: capsule.id,
            user_id: capsule.user_id,
            message: capsule.message,
            open_date: capsule.open_date,
            created_at: capsule.created_at,
        }
    }
}
