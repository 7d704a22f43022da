/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use core::types::*;
use entity::project::ProjectStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
pub struct GetProjectsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProjectRequest {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub min_budget: Option<i64>,
    pub max_budget: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub min_budget: Option<i64>,
    pub max_budget: Option<i64>,
    pub deadline: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchProjectStatusRequest {
    pub status: ProjectStatus,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<GetProjectsQuery>,
) -> WebResult<Json<BaseResponse<Vec<MProject>>>> {
    let projects = EProject::find()
        .order_by_desc(CProject::CreatedAt)
        .limit(query.limit.unwrap_or(10))
        .offset(query.offset.unwrap_or(0))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

pub async fn get_user_projects(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MProject>>>> {
    let projects = EProject::find()
        .filter(CProject::CreatedBy.eq(user.id))
        .order_by_desc(CProject::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(project): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let project = EProject::find_by_id(project)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MProject>>)> {
    let project = AProject {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.clone()),
        description: Set(body.description.clone()),
        requirements: Set(body.requirements.clone()),
        min_budget: Set(body.min_budget),
        max_budget: Set(body.max_budget),
        deadline: Set(body.deadline.clone()),
        status: Set(ProjectStatus::Open),
        created_by: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let project = project.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn put_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
    Json(body): Json<UpdateProjectRequest>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let project = EProject::find_by_id(project)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    if project.created_by != user.id {
        return Err(WebError::Forbidden(
            "You don't have permission to update this project".to_string(),
        ));
    }

    let mut aproject: AProject = project.into();

    if let Some(title) = body.title {
        aproject.title = Set(title);
    }

    if let Some(description) = body.description {
        aproject.description = Set(description);
    }

    if let Some(requirements) = body.requirements {
        aproject.requirements = Set(requirements);
    }

    if let Some(min_budget) = body.min_budget {
        aproject.min_budget = Set(Some(min_budget));
    }

    if let Some(max_budget) = body.max_budget {
        aproject.max_budget = Set(Some(max_budget));
    }

    if let Some(deadline) = body.deadline {
        aproject.deadline = Set(Some(deadline));
    }

    let project = aproject.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

pub async fn patch_status(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
    Json(body): Json<PatchProjectStatusRequest>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let project = EProject::find_by_id(project)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    if project.created_by != user.id {
        return Err(WebError::Forbidden(
            "You don't have permission to update this project".to_string(),
        ));
    }

    let mut aproject: AProject = project.into();
    aproject.status = Set(body.status);

    let project = aproject.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}
