/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Path, Query, State};
use core::types::*;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
pub struct GetNewsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<GetNewsQuery>,
) -> WebResult<Json<BaseResponse<Vec<MNews>>>> {
    let news = ENews::find()
        .order_by_desc(CNews::CreatedAt)
        .limit(query.limit.unwrap_or(10))
        .offset(query.offset.unwrap_or(0))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: news,
    };

    Ok(Json(res))
}

pub async fn get_news(
    state: State<Arc<ServerState>>,
    Path(news): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MNews>>> {
    let news = ENews::find_by_id(news)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("News item"))?;

    let res = BaseResponse {
        error: false,
        message: news,
    };

    Ok(Json(res))
}
