// src/handlers/envios.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::envio::{
        EmailEnviado, EnvioEmailPayload, EnvioWhatsAppPayload, PreviewPayload, PreviewResposta,
        WhatsAppSimulado,
    },
};

// GET /api/envios
#[utoipa::path(
    get,
    path = "/api/envios",
    tag = "Envios",
    responses(
        (status = 200, description = "Log de e-mails enviados, mais recentes primeiro", body = Vec<EmailEnviado>)
    )
)]
pub async fn listar_envios(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let envios = app_state.envio_service.listar().await?;
    Ok((StatusCode::OK, Json(envios)))
}

// POST /api/envios/email
#[utoipa::path(
    post,
    path = "/api/envios/email",
    tag = "Envios",
    request_body = EnvioEmailPayload,
    responses(
        (status = 201, description = "E-mail renderizado e registrado no log", body = EmailEnviado),
        (status = 404, description = "Cliente ou modelo não encontrado"),
        (status = 422, description = "Assunto ou variáveis obrigatórias em branco")
    )
)]
pub async fn enviar_email(
    State(app_state): State<AppState>,
    Json(payload): Json<EnvioEmailPayload>,
) -> Result<impl IntoResponse, AppError> {
    let envio = app_state.envio_service.enviar_email(payload).await?;
    Ok((StatusCode::CREATED, Json(envio)))
}

// POST /api/envios/whatsapp
#[utoipa::path(
    post,
    path = "/api/envios/whatsapp",
    tag = "Envios",
    request_body = EnvioWhatsAppPayload,
    responses(
        (status = 200, description = "Envio simulado, nada é persistido", body = WhatsAppSimulado),
        (status = 404, description = "Cliente ou modelo não encontrado"),
        (status = 422, description = "Variáveis obrigatórias em branco")
    )
)]
pub async fn enviar_whatsapp(
    State(app_state): State<AppState>,
    Json(payload): Json<EnvioWhatsAppPayload>,
) -> Result<impl IntoResponse, AppError> {
    let confirmacao = app_state.envio_service.enviar_whatsapp(payload).await?;
    Ok((StatusCode::OK, Json(confirmacao)))
}

// POST /api/envios/preview
#[utoipa::path(
    post,
    path = "/api/envios/preview",
    tag = "Envios",
    request_body = PreviewPayload,
    responses(
        (status = 200, description = "Pré-visualização com marcadores [nome] para o que falta", body = PreviewResposta),
        (status = 404, description = "Modelo não encontrado")
    )
)]
pub async fn preview(
    State(app_state): State<AppState>,
    Json(payload): Json<PreviewPayload>,
) -> Result<impl IntoResponse, AppError> {
    let resposta = app_state.envio_service.preview(payload).await?;
    Ok((StatusCode::OK, Json(resposta)))
}

// DELETE /api/envios/{id}
#[utoipa::path(
    delete,
    path = "/api/envios/{id}",
    tag = "Envios",
    params(
        ("id" = Uuid, Path, description = "ID do registro de envio")
    ),
    responses(
        (status = 204, description = "Registro excluído"),
        (status = 404, description = "Envio não encontrado")
    )
)]
pub async fn excluir_envio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.envio_service.excluir(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
