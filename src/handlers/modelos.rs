// src/handlers/modelos.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::modelo::{
        ExtrairVariaveisPayload, ModeloEmail, ModeloEmailPayload, ModeloWhatsApp,
        ModeloWhatsAppPayload, VariaveisExtraidas,
    },
};

// =============================================================================
//  MODELOS DE E-MAIL
// =============================================================================

// GET /api/modelos/email
#[utoipa::path(
    get,
    path = "/api/modelos/email",
    tag = "Modelos",
    responses(
        (status = 200, description = "Lista de modelos de e-mail", body = Vec<ModeloEmail>)
    )
)]
pub async fn listar_modelos_email(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let modelos = app_state.modelo_service.listar_email().await?;
    Ok((StatusCode::OK, Json(modelos)))
}

// POST /api/modelos/email
#[utoipa::path(
    post,
    path = "/api/modelos/email",
    tag = "Modelos",
    request_body = ModeloEmailPayload,
    responses(
        (status = 201, description = "Modelo de e-mail criado", body = ModeloEmail),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_modelo_email(
    State(app_state): State<AppState>,
    Json(payload): Json<ModeloEmailPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let modelo = app_state.modelo_service.criar_email(payload).await?;
    Ok((StatusCode::CREATED, Json(modelo)))
}

// PUT /api/modelos/email/{id}
#[utoipa::path(
    put,
    path = "/api/modelos/email/{id}",
    tag = "Modelos",
    request_body = ModeloEmailPayload,
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 200, description = "Modelo atualizado", body = ModeloEmail),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn atualizar_modelo_email(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModeloEmailPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let modelo = app_state.modelo_service.atualizar_email(id, payload).await?;
    Ok((StatusCode::OK, Json(modelo)))
}

// DELETE /api/modelos/email/{id}
#[utoipa::path(
    delete,
    path = "/api/modelos/email/{id}",
    tag = "Modelos",
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 204, description = "Modelo excluído"),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn excluir_modelo_email(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.modelo_service.excluir_email(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/modelos/email/{id}/extrair-variaveis
#[utoipa::path(
    post,
    path = "/api/modelos/email/{id}/extrair-variaveis",
    tag = "Modelos",
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 200, description = "Lista declarada re-derivada do corpo", body = ModeloEmail),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn reextrair_modelo_email(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let modelo = app_state.modelo_service.reextrair_email(id).await?;
    Ok((StatusCode::OK, Json(modelo)))
}

// =============================================================================
//  MODELOS DE WHATSAPP
// =============================================================================

// GET /api/modelos/whatsapp
#[utoipa::path(
    get,
    path = "/api/modelos/whatsapp",
    tag = "Modelos",
    responses(
        (status = 200, description = "Lista de modelos de WhatsApp", body = Vec<ModeloWhatsApp>)
    )
)]
pub async fn listar_modelos_whatsapp(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let modelos = app_state.modelo_service.listar_whatsapp().await?;
    Ok((StatusCode::OK, Json(modelos)))
}

// POST /api/modelos/whatsapp
#[utoipa::path(
    post,
    path = "/api/modelos/whatsapp",
    tag = "Modelos",
    request_body = ModeloWhatsAppPayload,
    responses(
        (status = 201, description = "Modelo de WhatsApp criado", body = ModeloWhatsApp),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_modelo_whatsapp(
    State(app_state): State<AppState>,
    Json(payload): Json<ModeloWhatsAppPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let modelo = app_state.modelo_service.criar_whatsapp(payload).await?;
    Ok((StatusCode::CREATED, Json(modelo)))
}

// PUT /api/modelos/whatsapp/{id}
#[utoipa::path(
    put,
    path = "/api/modelos/whatsapp/{id}",
    tag = "Modelos",
    request_body = ModeloWhatsAppPayload,
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 200, description = "Modelo atualizado", body = ModeloWhatsApp),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn atualizar_modelo_whatsapp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModeloWhatsAppPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let modelo = app_state
        .modelo_service
        .atualizar_whatsapp(id, payload)
        .await?;
    Ok((StatusCode::OK, Json(modelo)))
}

// DELETE /api/modelos/whatsapp/{id}
#[utoipa::path(
    delete,
    path = "/api/modelos/whatsapp/{id}",
    tag = "Modelos",
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 204, description = "Modelo excluído"),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn excluir_modelo_whatsapp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.modelo_service.excluir_whatsapp(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/modelos/whatsapp/{id}/extrair-variaveis
#[utoipa::path(
    post,
    path = "/api/modelos/whatsapp/{id}/extrair-variaveis",
    tag = "Modelos",
    params(
        ("id" = Uuid, Path, description = "ID do modelo")
    ),
    responses(
        (status = 200, description = "Lista declarada re-derivada do corpo", body = ModeloWhatsApp),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn reextrair_modelo_whatsapp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let modelo = app_state.modelo_service.reextrair_whatsapp(id).await?;
    Ok((StatusCode::OK, Json(modelo)))
}

// =============================================================================
//  EXTRAÇÃO AVULSA
// =============================================================================

// POST /api/modelos/extrair-variaveis
#[utoipa::path(
    post,
    path = "/api/modelos/extrair-variaveis",
    tag = "Modelos",
    request_body = ExtrairVariaveisPayload,
    responses(
        (status = 200, description = "Variáveis do texto, ordem de primeira ocorrência", body = VariaveisExtraidas)
    )
)]
pub async fn extrair_variaveis(
    State(app_state): State<AppState>,
    Json(payload): Json<ExtrairVariaveisPayload>,
) -> Result<impl IntoResponse, AppError> {
    let variaveis = app_state.modelo_service.extrair(&payload.texto);
    Ok((StatusCode::OK, Json(VariaveisExtraidas { variaveis })))
}
