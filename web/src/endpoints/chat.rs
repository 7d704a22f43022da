/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeChatRequest {
    pub message: String,
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeChatRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if body.message.trim().is_empty() {
        return Err(WebError::BadRequest("Message is required".to_string()));
    }

    let answer = state
        .ai
        .respond_to_chat(&body.message)
        .await
        .map_err(WebError::ExternalService)?;

    let res = BaseResponse {
        error: false,
        message: answer,
    };

    Ok(Json(res))
}
