// src/models/envio.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE status_envio do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, ToSchema)]
#[sqlx(type_name = "status_envio", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StatusEnvio {
    Pendente,
    Enviado,
    Erro,
}

// Registro do log de mensagens. Criado apenas pela ação de envio e nunca
// alterado depois disso.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmailEnviado {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub modelo_id: Uuid,
    pub assunto: String,
    pub corpo_html: String,
    pub status: StatusEnvio,
    // Mapa variável -> valor usado na renderização (JSONB)
    #[schema(value_type = Object)]
    pub variaveis_utilizadas: Value,
    pub data_envio: Option<DateTime<Utc>>,
    pub resposta_api: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnvioEmailPayload {
    pub cliente_id: Uuid,
    pub modelo_id: Uuid,
    #[schema(example = "Proposta para Acme")]
    pub assunto: String,
    #[serde(default)]
    #[schema(example = json!({"nome_cliente": "Acme", "valor": "R$ 1.200,00"}))]
    pub variaveis_valores: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnvioWhatsAppPayload {
    pub cliente_id: Uuid,
    pub modelo_id: Uuid,
    #[serde(default)]
    #[schema(example = json!({"nome_cliente": "Acme", "valor": "R$ 1.200,00"}))]
    pub variaveis_valores: HashMap<String, String>,
}

// Resposta do envio simulado de WhatsApp: nada é persistido
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WhatsAppSimulado {
    pub cliente_id: Uuid,
    pub modelo_id: Uuid,
    #[schema(example = "+55 (11) 99999-8888")]
    pub destinatario: Option<String>,
    pub corpo_texto: String,
    pub simulado: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipoModelo {
    Email,
    Whatsapp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PreviewPayload {
    pub tipo: TipoModelo,
    pub modelo_id: Uuid,
    #[serde(default)]
    pub variaveis_valores: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreviewResposta {
    // Presente apenas para modelos de e-mail
    pub assunto: Option<String>,
    pub corpo: String,
}
