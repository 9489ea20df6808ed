// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Validação do envio: campo -> código do problema
    #[error("Envio inválido")]
    EnvioInvalido(HashMap<String, String>),

    #[error("CNPJ já cadastrado: {0}")]
    CnpjJaCadastrado(String),

    #[error("Cliente não encontrado")]
    ClienteNaoEncontrado,

    #[error("Modelo não encontrado")]
    ModeloNaoEncontrado,

    #[error("Envio não encontrado")]
    EnvioNaoEncontrado,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EnvioInvalido(details) => {
                let body = Json(json!({
                    "error": "O envio não pode ser realizado.",
                    "details": details,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::CnpjJaCadastrado(cnpj) => (
                StatusCode::CONFLICT,
                format!("O CNPJ '{}' já está cadastrado.", cnpj),
            ),
            AppError::ClienteNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Cliente não encontrado.".to_string())
            }
            AppError::ModeloNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Modelo não encontrado.".to_string())
            }
            AppError::EnvioNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Envio não encontrado.".to_string())
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
