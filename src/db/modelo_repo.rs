// src/db/modelo_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::modelo::{ModeloEmail, ModeloWhatsApp},
};

// Repositório dos modelos de mensagem, tabelas 'modelos_email' e
// 'modelos_whatsapp'. As duas coleções são independentes e têm o mesmo
// ciclo de vida (CRUD sem soft-delete).
#[derive(Clone)]
pub struct ModeloRepository {
    pool: PgPool,
}

impl ModeloRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  MODELOS DE E-MAIL
    // =========================================================================

    pub async fn listar_email(&self) -> Result<Vec<ModeloEmail>, AppError> {
        let modelos =
            sqlx::query_as::<_, ModeloEmail>("SELECT * FROM modelos_email ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(modelos)
    }

    pub async fn buscar_email_por_id(&self, id: Uuid) -> Result<Option<ModeloEmail>, AppError> {
        let modelo = sqlx::query_as::<_, ModeloEmail>("SELECT * FROM modelos_email WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(modelo)
    }

    pub async fn criar_email(
        &self,
        nome: &str,
        assunto: &str,
        corpo_html: &str,
        variaveis: &[String],
    ) -> Result<ModeloEmail, AppError> {
        let modelo = sqlx::query_as::<_, ModeloEmail>(
            r#"
            INSERT INTO modelos_email (nome, assunto, corpo_html, variaveis)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(assunto)
        .bind(corpo_html)
        .bind(variaveis)
        .fetch_one(&self.pool)
        .await?;
        Ok(modelo)
    }

    pub async fn atualizar_email(
        &self,
        id: Uuid,
        nome: &str,
        assunto: &str,
        corpo_html: &str,
        variaveis: &[String],
    ) -> Result<ModeloEmail, AppError> {
        sqlx::query_as::<_, ModeloEmail>(
            r#"
            UPDATE modelos_email
            SET nome = $2, assunto = $3, corpo_html = $4, variaveis = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(assunto)
        .bind(corpo_html)
        .bind(variaveis)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ModeloNaoEncontrado)
    }

    pub async fn excluir_email(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM modelos_email WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ModeloNaoEncontrado);
        }
        Ok(())
    }

    // =========================================================================
    //  MODELOS DE WHATSAPP
    // =========================================================================

    pub async fn listar_whatsapp(&self) -> Result<Vec<ModeloWhatsApp>, AppError> {
        let modelos = sqlx::query_as::<_, ModeloWhatsApp>(
            "SELECT * FROM modelos_whatsapp ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(modelos)
    }

    pub async fn buscar_whatsapp_por_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ModeloWhatsApp>, AppError> {
        let modelo =
            sqlx::query_as::<_, ModeloWhatsApp>("SELECT * FROM modelos_whatsapp WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(modelo)
    }

    pub async fn criar_whatsapp(
        &self,
        nome: &str,
        corpo_texto: &str,
        variaveis: &[String],
    ) -> Result<ModeloWhatsApp, AppError> {
        let modelo = sqlx::query_as::<_, ModeloWhatsApp>(
            r#"
            INSERT INTO modelos_whatsapp (nome, corpo_texto, variaveis)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(corpo_texto)
        .bind(variaveis)
        .fetch_one(&self.pool)
        .await?;
        Ok(modelo)
    }

    pub async fn atualizar_whatsapp(
        &self,
        id: Uuid,
        nome: &str,
        corpo_texto: &str,
        variaveis: &[String],
    ) -> Result<ModeloWhatsApp, AppError> {
        sqlx::query_as::<_, ModeloWhatsApp>(
            r#"
            UPDATE modelos_whatsapp
            SET nome = $2, corpo_texto = $3, variaveis = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(corpo_texto)
        .bind(variaveis)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ModeloNaoEncontrado)
    }

    pub async fn excluir_whatsapp(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM modelos_whatsapp WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ModeloNaoEncontrado);
        }
        Ok(())
    }
}
