// src/services/modelo_service.rs

use uuid::Uuid;

use crate::{
    common::{error::AppError, template::extrair_variaveis},
    db::ModeloRepository,
    models::modelo::{ModeloEmail, ModeloEmailPayload, ModeloWhatsApp, ModeloWhatsAppPayload},
};

#[derive(Clone)]
pub struct ModeloService {
    repo: ModeloRepository,
}

impl ModeloService {
    pub fn new(repo: ModeloRepository) -> Self {
        Self { repo }
    }

    // A lista declarada de variáveis é gravada como veio do formulário.
    // Ela só é re-derivada do corpo quando o autor pede a extração, então
    // pode divergir dos tokens reais até lá.

    // =========================================================================
    //  MODELOS DE E-MAIL
    // =========================================================================

    pub async fn listar_email(&self) -> Result<Vec<ModeloEmail>, AppError> {
        self.repo.listar_email().await
    }

    pub async fn criar_email(&self, payload: ModeloEmailPayload) -> Result<ModeloEmail, AppError> {
        let modelo = self
            .repo
            .criar_email(
                &payload.nome,
                &payload.assunto,
                &payload.corpo_html,
                &payload.variaveis,
            )
            .await?;
        tracing::info!("Modelo de e-mail criado: {}", modelo.nome);
        Ok(modelo)
    }

    pub async fn atualizar_email(
        &self,
        id: Uuid,
        payload: ModeloEmailPayload,
    ) -> Result<ModeloEmail, AppError> {
        self.repo
            .atualizar_email(
                id,
                &payload.nome,
                &payload.assunto,
                &payload.corpo_html,
                &payload.variaveis,
            )
            .await
    }

    pub async fn excluir_email(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.excluir_email(id).await
    }

    /// Re-deriva a lista declarada a partir do corpo e sobrescreve a
    /// armazenada. Variáveis declaradas à mão que não existem no corpo
    /// são perdidas aqui.
    pub async fn reextrair_email(&self, id: Uuid) -> Result<ModeloEmail, AppError> {
        let modelo = self
            .repo
            .buscar_email_por_id(id)
            .await?
            .ok_or(AppError::ModeloNaoEncontrado)?;

        let variaveis = extrair_variaveis(&modelo.corpo_html);
        self.repo
            .atualizar_email(
                id,
                &modelo.nome,
                &modelo.assunto,
                &modelo.corpo_html,
                &variaveis,
            )
            .await
    }

    // =========================================================================
    //  MODELOS DE WHATSAPP
    // =========================================================================

    pub async fn listar_whatsapp(&self) -> Result<Vec<ModeloWhatsApp>, AppError> {
        self.repo.listar_whatsapp().await
    }

    pub async fn criar_whatsapp(
        &self,
        payload: ModeloWhatsAppPayload,
    ) -> Result<ModeloWhatsApp, AppError> {
        let modelo = self
            .repo
            .criar_whatsapp(&payload.nome, &payload.corpo_texto, &payload.variaveis)
            .await?;
        tracing::info!("Modelo de WhatsApp criado: {}", modelo.nome);
        Ok(modelo)
    }

    pub async fn atualizar_whatsapp(
        &self,
        id: Uuid,
        payload: ModeloWhatsAppPayload,
    ) -> Result<ModeloWhatsApp, AppError> {
        self.repo
            .atualizar_whatsapp(id, &payload.nome, &payload.corpo_texto, &payload.variaveis)
            .await
    }

    pub async fn excluir_whatsapp(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.excluir_whatsapp(id).await
    }

    pub async fn reextrair_whatsapp(&self, id: Uuid) -> Result<ModeloWhatsApp, AppError> {
        let modelo = self
            .repo
            .buscar_whatsapp_por_id(id)
            .await?
            .ok_or(AppError::ModeloNaoEncontrado)?;

        let variaveis = extrair_variaveis(&modelo.corpo_texto);
        self.repo
            .atualizar_whatsapp(id, &modelo.nome, &modelo.corpo_texto, &variaveis)
            .await
    }

    // =========================================================================
    //  EXTRAÇÃO AVULSA (auxílio de autoria, sem persistência)
    // =========================================================================

    pub fn extrair(&self, texto: &str) -> Vec<String> {
        extrair_variaveis(texto)
    }
}
