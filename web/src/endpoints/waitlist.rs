/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use core::types::*;
use email_address::EmailAddress;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeWaitlistRequest {
    pub email: String,
    pub name: Option<String>,
    pub interest: Option<String>,
    pub newsletter: Option<bool>,
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeWaitlistRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MWaitlist>>)> {
    if !EmailAddress::is_valid(&body.email) {
        return Err(WebError::invalid_email());
    }

    if EWaitlist::find()
        .filter(CWaitlist::Email.eq(body.email.clone()))
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(WebError::Conflict(
            "Email is already registered in the waitlist".to_string(),
        ));
    }

    let entry = AWaitlist {
        id: Set(Uuid::new_v4()),
        email: Set(body.email.clone()),
        name: Set(body.name.clone()),
        interest: Set(body.interest.clone()),
        newsletter: Set(body.newsletter.unwrap_or(false)),
        created_at: Set(Utc::now().naive_utc()),
    };

    let entry = entry.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: entry,
    };

    Ok((StatusCode::CREATED, Json(res)))
}
