// src/db/envio_repo.rs

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::envio::{EmailEnviado, StatusEnvio},
};

// Repositório do log de mensagens, tabela 'emails_enviados'.
// Registros são criados pela ação de envio e nunca atualizados.
#[derive(Clone)]
pub struct EnvioRepository {
    pool: PgPool,
}

impl EnvioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<EmailEnviado>, AppError> {
        let envios = sqlx::query_as::<_, EmailEnviado>(
            "SELECT * FROM emails_enviados ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(envios)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn registrar(
        &self,
        cliente_id: Uuid,
        modelo_id: Uuid,
        assunto: &str,
        corpo_html: &str,
        status: StatusEnvio,
        variaveis_utilizadas: &Value,
        data_envio: DateTime<Utc>,
        resposta_api: &str,
    ) -> Result<EmailEnviado, AppError> {
        let envio = sqlx::query_as::<_, EmailEnviado>(
            r#"
            INSERT INTO emails_enviados
                (cliente_id, modelo_id, assunto, corpo_html, status,
                 variaveis_utilizadas, data_envio, resposta_api)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(modelo_id)
        .bind(assunto)
        .bind(corpo_html)
        .bind(status)
        .bind(variaveis_utilizadas)
        .bind(data_envio)
        .bind(resposta_api)
        .fetch_one(&self.pool)
        .await?;
        Ok(envio)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM emails_enviados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::EnvioNaoEncontrado);
        }
        Ok(())
    }
}
