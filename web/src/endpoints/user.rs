/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use core::input::{check_display_name, check_username};
use core::types::*;
use email_address::EmailAddress;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: chrono::NaiveDateTime,
}

/// Profile data safe to show to other users. The email address and password
/// hash never leave the server through this response.
#[derive(Serialize, Deserialize, Debug)]
pub struct PublicUserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<&MUser> for PublicUserResponse {
    fn from(user: &MUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchUserSettingsRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

pub async fn get(
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let user_info = UserInfoResponse {
        id: user.id.to_string(),
        username: user.username.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        bio: user.bio.clone(),
        avatar: user.avatar.clone(),
        role: user.role,
        created_at: user.created_at,
    };

    let res = BaseResponse {
        error: false,
        message: user_info,
    };

    Ok(Json(res))
}

pub async fn get_user(
    state: State<Arc<ServerState>>,
    Path(user): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicUserResponse>>> {
    let user = EUser::find_by_id(user)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let res = BaseResponse {
        error: false,
        message: PublicUserResponse::from(&user),
    };

    Ok(Json(res))
}

pub async fn patch_settings(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<PatchUserSettingsRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let user_id = user.id;
    let mut auser: AUser = user.into();

    if let Some(username) = body.username {
        check_username(username.as_str())?;

        let existing_user = EUser::find()
            .filter(CUser::Username.eq(username.clone()))
            .filter(CUser::Id.ne(user_id))
            .one(&state.db)
            .await?;

        if existing_user.is_some() {
            return Err(WebError::already_exists("Username"));
        }

        auser.username = Set(username);
    }

    if let Some(name) = body.name {
        check_display_name(name.as_str())?;
        auser.name = Set(name);
    }

    if let Some(email) = body.email {
        if !EmailAddress::is_valid(email.as_str()) {
            return Err(WebError::invalid_email());
        }

        let existing_user = EUser::find()
            .filter(CUser::Email.eq(email.clone()))
            .filter(CUser::Id.ne(user_id))
            .one(&state.db)
            .await?;

        if existing_user.is_some() {
            return Err(WebError::already_exists("Email"));
        }

        auser.email = Set(email);
    }

    if let Some(bio) = body.bio {
        auser.bio = Set(Some(bio));
    }

    if let Some(avatar) = body.avatar {
        auser.avatar = Set(Some(avatar));
    }

    auser.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "User updated".to_string(),
    };

    Ok(Json(res))
}
