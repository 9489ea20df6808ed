// src/services/envio_service.rs

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    common::{error::AppError, format::formatar_telefone, template::renderizar},
    db::{ClienteRepository, EnvioRepository, ModeloRepository},
    models::envio::{
        EmailEnviado, EnvioEmailPayload, EnvioWhatsAppPayload, PreviewPayload, PreviewResposta,
        StatusEnvio, TipoModelo, WhatsAppSimulado,
    },
};

#[derive(Clone)]
pub struct EnvioService {
    envios: EnvioRepository,
    clientes: ClienteRepository,
    modelos: ModeloRepository,
}

impl EnvioService {
    pub fn new(
        envios: EnvioRepository,
        clientes: ClienteRepository,
        modelos: ModeloRepository,
    ) -> Self {
        Self {
            envios,
            clientes,
            modelos,
        }
    }

    pub async fn listar(&self) -> Result<Vec<EmailEnviado>, AppError> {
        self.envios.listar().await
    }

    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        self.envios.excluir(id).await
    }

    /// Renderiza assunto e corpo, registra no log com status 'enviado' e a
    /// resposta simulada da API. Nenhuma mensagem sai de verdade.
    pub async fn enviar_email(
        &self,
        payload: EnvioEmailPayload,
    ) -> Result<EmailEnviado, AppError> {
        let modelo = self
            .modelos
            .buscar_email_por_id(payload.modelo_id)
            .await?
            .ok_or(AppError::ModeloNaoEncontrado)?;
        let cliente = self
            .clientes
            .buscar_por_id(payload.cliente_id)
            .await?
            .ok_or(AppError::ClienteNaoEncontrado)?;

        validar_envio(
            Some(&payload.assunto),
            &modelo.variaveis,
            &payload.variaveis_valores,
        )?;

        let assunto = renderizar(&payload.assunto, &modelo.variaveis, &payload.variaveis_valores);
        let corpo = renderizar(
            &modelo.corpo_html,
            &modelo.variaveis,
            &payload.variaveis_valores,
        );

        let resposta_api = json!({
            "status": "success",
            "message": "E-mail enviado com sucesso (simulado)"
        })
        .to_string();

        let envio = self
            .envios
            .registrar(
                cliente.id,
                modelo.id,
                &assunto,
                &corpo,
                StatusEnvio::Enviado,
                &valores_como_json(&payload.variaveis_valores),
                Utc::now(),
                &resposta_api,
            )
            .await?;

        tracing::info!(
            "E-mail registrado para '{}' com o modelo '{}'",
            cliente.razao_social,
            modelo.nome
        );
        Ok(envio)
    }

    /// Caminho WhatsApp: valida e renderiza, mas apenas confirma o envio.
    /// Nada é persistido no log.
    pub async fn enviar_whatsapp(
        &self,
        payload: EnvioWhatsAppPayload,
    ) -> Result<WhatsAppSimulado, AppError> {
        let modelo = self
            .modelos
            .buscar_whatsapp_por_id(payload.modelo_id)
            .await?
            .ok_or(AppError::ModeloNaoEncontrado)?;
        let cliente = self
            .clientes
            .buscar_por_id(payload.cliente_id)
            .await?
            .ok_or(AppError::ClienteNaoEncontrado)?;

        validar_envio(None, &modelo.variaveis, &payload.variaveis_valores)?;

        let corpo_texto = renderizar(
            &modelo.corpo_texto,
            &modelo.variaveis,
            &payload.variaveis_valores,
        );
        let destinatario = cliente
            .telefone_whatsapp
            .as_deref()
            .map(formatar_telefone);

        tracing::info!(
            "WhatsApp simulado para '{}' com o modelo '{}'",
            cliente.razao_social,
            modelo.nome
        );
        Ok(WhatsAppSimulado {
            cliente_id: cliente.id,
            modelo_id: modelo.id,
            destinatario,
            corpo_texto,
            simulado: true,
        })
    }

    /// Pré-visualização ao vivo: variáveis em branco aparecem como `[nome]`.
    /// Não há gate de validação nem persistência aqui.
    pub async fn preview(&self, payload: PreviewPayload) -> Result<PreviewResposta, AppError> {
        match payload.tipo {
            TipoModelo::Email => {
                let modelo = self
                    .modelos
                    .buscar_email_por_id(payload.modelo_id)
                    .await?
                    .ok_or(AppError::ModeloNaoEncontrado)?;
                Ok(PreviewResposta {
                    assunto: Some(renderizar(
                        &modelo.assunto,
                        &modelo.variaveis,
                        &payload.variaveis_valores,
                    )),
                    corpo: renderizar(
                        &modelo.corpo_html,
                        &modelo.variaveis,
                        &payload.variaveis_valores,
                    ),
                })
            }
            TipoModelo::Whatsapp => {
                let modelo = self
                    .modelos
                    .buscar_whatsapp_por_id(payload.modelo_id)
                    .await?
                    .ok_or(AppError::ModeloNaoEncontrado)?;
                Ok(PreviewResposta {
                    assunto: None,
                    corpo: renderizar(
                        &modelo.corpo_texto,
                        &modelo.variaveis,
                        &payload.variaveis_valores,
                    ),
                })
            }
        }
    }
}

/// Gate do envio: assunto não-vazio (quando é e-mail) e toda variável
/// declarada com valor não-vazio pós-trim. Os problemas são acumulados em
/// um mapa campo -> código, nunca um de cada vez.
pub fn validar_envio(
    assunto: Option<&str>,
    declaradas: &[String],
    valores: &HashMap<String, String>,
) -> Result<(), AppError> {
    let mut erros: HashMap<String, String> = HashMap::new();

    if let Some(assunto) = assunto {
        if assunto.trim().is_empty() {
            erros.insert("assunto".to_string(), "obrigatório".to_string());
        }
    }

    for nome in declaradas {
        let preenchida = valores.get(nome).is_some_and(|v| !v.trim().is_empty());
        if !preenchida {
            erros.insert(nome.clone(), "obrigatório".to_string());
        }
    }

    if !erros.is_empty() {
        return Err(AppError::EnvioInvalido(erros));
    }
    Ok(())
}

fn valores_como_json(valores: &HashMap<String, String>) -> Value {
    Value::Object(
        valores
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valores(pares: &[(&str, &str)]) -> HashMap<String, String> {
        pares
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn declaradas(nomes: &[&str]) -> Vec<String> {
        nomes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn bloqueia_enquanto_houver_variavel_em_branco() {
        let resultado = validar_envio(
            Some("Proposta"),
            &declaradas(&["nome_cliente", "valor"]),
            &valores(&[("nome_cliente", "Acme"), ("valor", "  ")]),
        );
        match resultado {
            Err(AppError::EnvioInvalido(erros)) => {
                assert_eq!(erros.len(), 1);
                assert_eq!(erros.get("valor").map(String::as_str), Some("obrigatório"));
            }
            outro => panic!("esperava EnvioInvalido, veio {:?}", outro),
        }
    }

    #[test]
    fn libera_quando_todas_preenchidas() {
        let resultado = validar_envio(
            Some("Proposta"),
            &declaradas(&["nome_cliente", "valor"]),
            &valores(&[("nome_cliente", "Acme"), ("valor", "R$ 10,00")]),
        );
        assert!(resultado.is_ok());
    }

    #[test]
    fn email_exige_assunto_nao_vazio() {
        let resultado = validar_envio(Some("   "), &[], &valores(&[]));
        match resultado {
            Err(AppError::EnvioInvalido(erros)) => {
                assert!(erros.contains_key("assunto"));
            }
            outro => panic!("esperava EnvioInvalido, veio {:?}", outro),
        }
    }

    #[test]
    fn whatsapp_nao_exige_assunto() {
        assert!(validar_envio(None, &[], &valores(&[])).is_ok());
    }

    #[test]
    fn variavel_ausente_do_mapa_tambem_bloqueia() {
        let resultado = validar_envio(
            None,
            &declaradas(&["numero_nf"]),
            &valores(&[("outra", "x")]),
        );
        assert!(resultado.is_err());
    }

    #[test]
    fn acumula_todos_os_problemas_de_uma_vez() {
        let resultado = validar_envio(
            Some(""),
            &declaradas(&["a", "b"]),
            &valores(&[]),
        );
        match resultado {
            Err(AppError::EnvioInvalido(erros)) => assert_eq!(erros.len(), 3),
            outro => panic!("esperava EnvioInvalido, veio {:?}", outro),
        }
    }
}
