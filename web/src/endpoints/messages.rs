/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::user::PublicUserResponse;
use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use core::messaging::aggregate_conversations;
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeMessageRequest {
    pub receiver: Uuid,
    pub content: String,
    pub project: Option<Uuid>,
}

/// One entry of the conversation overview. `counterpart_user` is `None` when
/// the other account no longer exists.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversationResponse {
    pub counterpart: Uuid,
    pub counterpart_user: Option<PublicUserResponse>,
    pub last_message: MMessage,
    pub unread_count: i64,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MMessage>>>> {
    let messages = EMessage::find()
        .filter(
            Condition::any()
                .add(CMessage::Sender.eq(user.id))
                .add(CMessage::Receiver.eq(user.id)),
        )
        .order_by_desc(CMessage::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: messages,
    };

    Ok(Json(res))
}

pub async fn get_conversations(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<ConversationResponse>>>> {
    let messages = EMessage::find()
        .filter(
            Condition::any()
                .add(CMessage::Sender.eq(user.id))
                .add(CMessage::Receiver.eq(user.id)),
        )
        .order_by_asc(CMessage::CreatedAt)
        .all(&state.db)
        .await?;

    let summaries = aggregate_conversations(user.id, &messages);

    let counterparts = summaries
        .iter()
        .map(|summary| summary.counterpart)
        .collect::<Vec<Uuid>>();

    let users = EUser::find()
        .filter(CUser::Id.is_in(counterparts))
        .all(&state.db)
        .await?;

    let conversations = summaries
        .into_iter()
        .map(|summary| {
            let counterpart_user = users
                .iter()
                .find(|u| u.id == summary.counterpart)
                .map(PublicUserResponse::from);

            ConversationResponse {
                counterpart: summary.counterpart,
                counterpart_user,
                last_message: summary.last_message,
                unread_count: summary.unread_count,
            }
        })
        .collect::<Vec<ConversationResponse>>();

    let res = BaseResponse {
        error: false,
        message: conversations,
    };

    Ok(Json(res))
}

pub async fn get_conversation(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(other): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MMessage>>>> {
    // Opening a conversation marks everything the other user sent as read.
    EMessage::update_many()
        .col_expr(CMessage::Read, Expr::value(true))
        .filter(
            Condition::all()
                .add(CMessage::Receiver.eq(user.id))
                .add(CMessage::Sender.eq(other))
                .add(CMessage::Read.eq(false)),
        )
        .exec(&state.db)
        .await?;

    let messages = EMessage::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(CMessage::Sender.eq(user.id))
                        .add(CMessage::Receiver.eq(other)),
                )
                .add(
                    Condition::all()
                        .add(CMessage::Sender.eq(other))
                        .add(CMessage::Receiver.eq(user.id)),
                ),
        )
        .order_by_asc(CMessage::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: messages,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeMessageRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MMessage>>)> {
    if EUser::find_by_id(body.receiver)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(WebError::not_found("User"));
    }

    if let Some(project) = body.project {
        if EProject::find_by_id(project)
            .one(&state.db)
            .await?
            .is_none()
        {
            return Err(WebError::not_found("Project"));
        }
    }

    let message = AMessage {
        id: Set(Uuid::new_v4()),
        content: Set(body.content.clone()),
        sender: Set(user.id),
        receiver: Set(body.receiver),
        project: Set(body.project),
        read: Set(false),
        created_at: Set(Utc::now().naive_utc()),
    };

    let message = message.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_read(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(message): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MMessage>>> {
    let message = EMessage::find_by_id(message)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Message"))?;

    if message.receiver != user.id {
        return Err(WebError::Forbidden(
            "You don't have permission to mark this message as read".to_string(),
        ));
    }

    let mut amessage: AMessage = message.into();
    amessage.read = Set(true);

    let message = amessage.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message,
    };

    Ok(Json(res))
}
