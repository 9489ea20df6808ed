// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::clientes::listar_clientes,
        handlers::clientes::criar_cliente,
        handlers::clientes::atualizar_cliente,
        handlers::clientes::excluir_cliente,

        // --- Modelos ---
        handlers::modelos::listar_modelos_email,
        handlers::modelos::criar_modelo_email,
        handlers::modelos::atualizar_modelo_email,
        handlers::modelos::excluir_modelo_email,
        handlers::modelos::reextrair_modelo_email,
        handlers::modelos::listar_modelos_whatsapp,
        handlers::modelos::criar_modelo_whatsapp,
        handlers::modelos::atualizar_modelo_whatsapp,
        handlers::modelos::excluir_modelo_whatsapp,
        handlers::modelos::reextrair_modelo_whatsapp,
        handlers::modelos::extrair_variaveis,

        // --- Envios ---
        handlers::envios::listar_envios,
        handlers::envios::enviar_email,
        handlers::envios::enviar_whatsapp,
        handlers::envios::preview,
        handlers::envios::excluir_envio,
    ),
    components(
        schemas(
            models::cliente::Cliente,
            models::cliente::ClienteEmail,
            models::cliente::ClientePayload,
            models::cliente::EmailPayload,
            models::modelo::ModeloEmail,
            models::modelo::ModeloEmailPayload,
            models::modelo::ModeloWhatsApp,
            models::modelo::ModeloWhatsAppPayload,
            models::modelo::ExtrairVariaveisPayload,
            models::modelo::VariaveisExtraidas,
            models::envio::EmailEnviado,
            models::envio::StatusEnvio,
            models::envio::EnvioEmailPayload,
            models::envio::EnvioWhatsAppPayload,
            models::envio::WhatsAppSimulado,
            models::envio::TipoModelo,
            models::envio::PreviewPayload,
            models::envio::PreviewResposta,
        )
    ),
    tags(
        (name = "Clientes", description = "Cadastro de clientes e seus e-mails"),
        (name = "Modelos", description = "Modelos de e-mail e WhatsApp com variáveis {{nome}}"),
        (name = "Envios", description = "Renderização, envio simulado e log de mensagens"),
    )
)]
pub struct ApiDoc;
