// src/models/cliente.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::format::somente_digitos;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: Uuid,
    pub razao_social: String,
    // Sempre armazenado como 14 dígitos, sem máscara
    pub cnpj: String,
    pub telefone_whatsapp: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Sub-registros carregados junto na listagem (1-N)
    #[sqlx(skip)]
    #[serde(default)]
    pub emails: Vec<ClienteEmail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClienteEmail {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub email: String,
    pub principal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ClientePayload {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Acme Indústria LTDA")]
    pub razao_social: String,

    #[validate(custom(function = validar_cnpj))]
    #[schema(example = "12345678000199")]
    pub cnpj: String,

    #[schema(example = "5511999998888")]
    pub telefone_whatsapp: Option<String>,

    #[validate(nested)]
    pub emails: Vec<EmailPayload>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EmailPayload {
    #[validate(email(message = "email_invalido"))]
    #[schema(example = "financeiro@acme.com.br")]
    pub email: String,

    #[serde(default)]
    pub principal: bool,
}

fn validar_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    if somente_digitos(cnpj).len() != 14 {
        return Err(ValidationError::new("cnpj_invalido")
            .with_message("O CNPJ deve conter 14 dígitos".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(cnpj: &str) -> ClientePayload {
        ClientePayload {
            razao_social: "Acme Indústria LTDA".to_string(),
            cnpj: cnpj.to_string(),
            telefone_whatsapp: None,
            emails: vec![EmailPayload {
                email: "contato@acme.com.br".to_string(),
                principal: true,
            }],
        }
    }

    #[test]
    fn cnpj_com_14_digitos_passa() {
        assert!(payload("12345678000199").validate().is_ok());
    }

    #[test]
    fn cnpj_mascarado_tambem_passa() {
        // A máscara é descartada antes da contagem
        assert!(payload("12.345.678/0001-99").validate().is_ok());
    }

    #[test]
    fn cnpj_incompleto_falha() {
        assert!(payload("123456").validate().is_err());
    }

    #[test]
    fn email_invalido_falha() {
        let mut p = payload("12345678000199");
        p.emails[0].email = "não-é-email".to_string();
        assert!(p.validate().is_err());
    }
}
