// src/db/cliente_repo.rs

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cliente::{Cliente, ClienteEmail, EmailPayload},
};

// Repositório de clientes, responsável pelas tabelas 'clientes' e
// 'clientes_emails'. Os e-mails são inteiramente possuídos pelo cliente:
// na atualização a lista é substituída por completo (delete + reinsert),
// dentro de uma única transação.
#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista clientes (mais recentes primeiro) com seus e-mails em uma única
    /// chamada lógica. `busca` filtra por razão social, CNPJ ou e-mail.
    pub async fn listar(&self, busca: Option<&str>) -> Result<Vec<Cliente>, AppError> {
        let mut clientes = match busca {
            Some(q) => {
                let termo = format!("%{}%", q);
                sqlx::query_as::<_, Cliente>(
                    r#"
                    SELECT * FROM clientes
                    WHERE razao_social ILIKE $1
                       OR cnpj LIKE $1
                       OR EXISTS (
                            SELECT 1 FROM clientes_emails e
                            WHERE e.cliente_id = clientes.id AND e.email ILIKE $1
                       )
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(termo)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        let ids: Vec<Uuid> = clientes.iter().map(|c| c.id).collect();
        let emails = sqlx::query_as::<_, ClienteEmail>(
            "SELECT * FROM clientes_emails WHERE cliente_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut por_cliente: HashMap<Uuid, Vec<ClienteEmail>> = HashMap::new();
        for email in emails {
            por_cliente.entry(email.cliente_id).or_default().push(email);
        }
        for cliente in &mut clientes {
            cliente.emails = por_cliente.remove(&cliente.id).unwrap_or_default();
        }

        Ok(clientes)
    }

    /// Busca um cliente pelo seu ID, com e-mails.
    pub async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(mut cliente) = cliente else {
            return Ok(None);
        };

        cliente.emails = sqlx::query_as::<_, ClienteEmail>(
            "SELECT * FROM clientes_emails WHERE cliente_id = $1 ORDER BY created_at ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(cliente))
    }

    /// Cria o cliente e seus e-mails na mesma transação.
    pub async fn criar(
        &self,
        razao_social: &str,
        cnpj: &str,
        telefone_whatsapp: Option<&str>,
        emails: &[EmailPayload],
    ) -> Result<Cliente, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (razao_social, cnpj, telefone_whatsapp)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(razao_social)
        .bind(cnpj)
        .bind(telefone_whatsapp)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| Self::mapear_cnpj_duplicado(e, cnpj))?;

        cliente.emails = Self::inserir_emails(&mut tx, cliente.id, emails).await?;

        tx.commit().await?;
        Ok(cliente)
    }

    /// Atualiza o cliente e substitui a lista de e-mails por inteiro,
    /// tudo na mesma transação (sem janela de perda entre delete e insert).
    pub async fn atualizar(
        &self,
        id: Uuid,
        razao_social: &str,
        cnpj: &str,
        telefone_whatsapp: Option<&str>,
        emails: &[EmailPayload],
    ) -> Result<Cliente, AppError> {
        let mut tx = self.pool.begin().await?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET razao_social = $2, cnpj = $3, telefone_whatsapp = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(razao_social)
        .bind(cnpj)
        .bind(telefone_whatsapp)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| Self::mapear_cnpj_duplicado(e, cnpj))?;

        let Some(mut cliente) = cliente else {
            return Err(AppError::ClienteNaoEncontrado);
        };

        sqlx::query("DELETE FROM clientes_emails WHERE cliente_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        cliente.emails = Self::inserir_emails(&mut tx, id, emails).await?;

        tx.commit().await?;
        Ok(cliente)
    }

    /// Exclusão imediata e irreversível; os e-mails caem por cascata.
    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::ClienteNaoEncontrado);
        }
        Ok(())
    }

    async fn inserir_emails(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        cliente_id: Uuid,
        emails: &[EmailPayload],
    ) -> Result<Vec<ClienteEmail>, AppError> {
        let mut inseridos = Vec::with_capacity(emails.len());
        for email in emails {
            let inserido = sqlx::query_as::<_, ClienteEmail>(
                r#"
                INSERT INTO clientes_emails (cliente_id, email, principal)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(cliente_id)
            .bind(&email.email)
            .bind(email.principal)
            .fetch_one(&mut **tx)
            .await?;
            inseridos.push(inserido);
        }
        Ok(inseridos)
    }

    // Converte violação de chave única do CNPJ em um erro mais amigável
    fn mapear_cnpj_duplicado(e: sqlx::Error, cnpj: &str) -> AppError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return AppError::CnpjJaCadastrado(cnpj.to_string());
            }
        }
        e.into()
    }
}
