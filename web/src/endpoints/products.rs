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
use entity::product::VerificationStatus;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
pub struct GetProductsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProductRequest {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: Option<String>,
    pub category: String,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VerifyProductRequest {
    pub automated: bool,
    pub verification_status: Option<VerificationStatus>,
    pub verification_notes: Option<String>,
}

/// Verification outcome for a product. The risk score is only reported, it is
/// never stored with the product and is absent for manual overrides.
#[derive(Serialize, Deserialize, Debug)]
pub struct VerifyProductResponse {
    pub product: MProduct,
    pub risk_score: Option<i64>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<GetProductsQuery>,
) -> WebResult<Json<BaseResponse<Vec<MProduct>>>> {
    let products = EProduct::find()
        .order_by_desc(CProduct::CreatedAt)
        .limit(query.limit.unwrap_or(10))
        .offset(query.offset.unwrap_or(0))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: products,
    };

    Ok(Json(res))
}

pub async fn get_featured(
    state: State<Arc<ServerState>>,
    Query(query): Query<GetProductsQuery>,
) -> WebResult<Json<BaseResponse<Vec<MProduct>>>> {
    let products = EProduct::find()
        .filter(CProduct::Featured.eq(true))
        .order_by_desc(CProduct::CreatedAt)
        .limit(query.limit.unwrap_or(6))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: products,
    };

    Ok(Json(res))
}

pub async fn get_by_category(
    state: State<Arc<ServerState>>,
    Path(category): Path<String>,
) -> WebResult<Json<BaseResponse<Vec<MProduct>>>> {
    let products = EProduct::find()
        .filter(CProduct::Category.eq(category))
        .order_by_desc(CProduct::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: products,
    };

    Ok(Json(res))
}

pub async fn get_by_seller(
    state: State<Arc<ServerState>>,
    Path(seller): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<MProduct>>>> {
    let products = EProduct::find()
        .filter(CProduct::Seller.eq(seller))
        .order_by_desc(CProduct::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: products,
    };

    Ok(Json(res))
}

pub async fn get_product(
    state: State<Arc<ServerState>>,
    Path(product): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let product = EProduct::find_by_id(product)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    let res = BaseResponse {
        error: false,
        message: product,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProductRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MProduct>>)> {
    let product = AProduct {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        price: Set(body.price),
        image: Set(body.image.clone()),
        category: Set(body.category.clone()),
        tags: Set(body.tags.clone()),
        seller: Set(user.id),
        featured: Set(false),
        verification_status: Set(VerificationStatus::Pending),
        verification_notes: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    };

    let product = product.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: product,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn put_product(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(product): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let product = EProduct::find_by_id(product)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    if product.seller != user.id {
        return Err(WebError::Forbidden(
            "You don't have permission to update this product".to_string(),
        ));
    }

    let mut aproduct: AProduct = product.into();

    if let Some(name) = body.name {
        aproduct.name = Set(name);
    }

    if let Some(description) = body.description {
        aproduct.description = Set(description);
    }

    if let Some(price) = body.price {
        aproduct.price = Set(price);
    }

    if let Some(image) = body.image {
        aproduct.image = Set(Some(image));
    }

    if let Some(category) = body.category {
        aproduct.category = Set(category);
    }

    if let Some(tags) = body.tags {
        aproduct.tags = Set(Some(tags));
    }

    let product = aproduct.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: product,
    };

    Ok(Json(res))
}

pub async fn delete_product(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(product): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let product = EProduct::find_by_id(product)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    if product.seller != user.id {
        return Err(WebError::Forbidden(
            "You don't have permission to delete this product".to_string(),
        ));
    }

    let aproduct: AProduct = product.into();
    aproduct.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Product deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_verify(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(product): Path<Uuid>,
    Json(body): Json<VerifyProductRequest>,
) -> WebResult<Json<BaseResponse<VerifyProductResponse>>> {
    let product = EProduct::find_by_id(product)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    if body.automated {
        if product.seller != user.id && user.role != UserRole::Admin {
            return Err(WebError::Forbidden(
                "You don't have permission to verify this product".to_string(),
            ));
        }

        let result = state
            .ai
            .verify_product(&product)
            .await
            .map_err(WebError::ExternalService)?;

        let mut aproduct: AProduct = product.into();
        aproduct.verification_status = Set(result.status);
        aproduct.verification_notes = Set(Some(result.notes.clone()));

        let product = aproduct.update(&state.db).await?;

        let res = BaseResponse {
            error: false,
            message: VerifyProductResponse {
                product,
                risk_score: Some(result.risk_score),
            },
        };

        return Ok(Json(res));
    }

    if user.role != UserRole::Admin {
        return Err(WebError::Forbidden(
            "Only administrators can override verification".to_string(),
        ));
    }

    let verification_status = body.verification_status.ok_or_else(|| {
        WebError::BadRequest("verification_status is required for manual verification".to_string())
    })?;

    let mut aproduct: AProduct = product.into();
    aproduct.verification_status = Set(verification_status);
    aproduct.verification_notes = Set(body.verification_notes.clone());

    let product = aproduct.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: VerifyProductResponse {
            product,
            risk_score: None,
        },
    };

    Ok(Json(res))
}
