// src/models/modelo.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ModeloEmail {
    pub id: Uuid,
    pub nome: String,
    // O assunto também pode conter tokens {{variavel}}
    pub assunto: String,
    pub corpo_html: String,
    // Lista declarada: derivada do corpo sob demanda, pode divergir até o
    // autor pedir uma nova extração
    pub variaveis: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ModeloWhatsApp {
    pub id: Uuid,
    pub nome: String,
    // Texto plano: quebras de linha e emoji são significativos
    pub corpo_texto: String,
    pub variaveis: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ModeloEmailPayload {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Cobrança de NF")]
    pub nome: String,

    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Proposta para {{nome_cliente}}")]
    pub assunto: String,

    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "<p>Olá {{nome_cliente}}, segue proposta de {{valor}}.</p>")]
    pub corpo_html: String,

    #[serde(default)]
    #[schema(example = json!(["nome_cliente", "valor"]))]
    pub variaveis: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ModeloWhatsAppPayload {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Lembrete de vencimento")]
    pub nome: String,

    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Olá {{nome_cliente}}! 📄 NF {{numero_nf}} vence em {{data_vencimento}}.")]
    pub corpo_texto: String,

    #[serde(default)]
    #[schema(example = json!(["nome_cliente", "numero_nf", "data_vencimento"]))]
    pub variaveis: Vec<String>,
}

// Entrada da operação explícita de extração de variáveis
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ExtrairVariaveisPayload {
    #[schema(example = "Olá {{nome_cliente}}, valor {{valor}}")]
    pub texto: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VariaveisExtraidas {
    #[schema(example = json!(["nome_cliente", "valor"]))]
    pub variaveis: Vec<String>,
}
