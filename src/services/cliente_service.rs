// src/services/cliente_service.rs

use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        format::{formatar_cnpj, somente_digitos},
    },
    db::ClienteRepository,
    models::cliente::{Cliente, ClientePayload, EmailPayload},
};

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository) -> Self {
        Self { repo }
    }

    pub async fn listar(&self, busca: Option<&str>) -> Result<Vec<Cliente>, AppError> {
        self.repo.listar(busca).await
    }

    pub async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        self.repo.buscar_por_id(id).await
    }

    pub async fn criar(&self, payload: ClientePayload) -> Result<Cliente, AppError> {
        let cnpj = somente_digitos(&payload.cnpj);
        let telefone = normalizar_telefone(payload.telefone_whatsapp.as_deref());
        let emails = normalizar_principais(payload.emails);

        let cliente = self
            .repo
            .criar(
                &payload.razao_social,
                &cnpj,
                telefone.as_deref(),
                &emails,
            )
            .await?;

        tracing::info!(
            "Cliente criado: {} ({})",
            cliente.razao_social,
            formatar_cnpj(&cliente.cnpj)
        );
        Ok(cliente)
    }

    pub async fn atualizar(&self, id: Uuid, payload: ClientePayload) -> Result<Cliente, AppError> {
        let cnpj = somente_digitos(&payload.cnpj);
        let telefone = normalizar_telefone(payload.telefone_whatsapp.as_deref());
        let emails = normalizar_principais(payload.emails);

        let cliente = self
            .repo
            .atualizar(
                id,
                &payload.razao_social,
                &cnpj,
                telefone.as_deref(),
                &emails,
            )
            .await?;

        tracing::info!(
            "Cliente atualizado: {} ({})",
            cliente.razao_social,
            formatar_cnpj(&cliente.cnpj)
        );
        Ok(cliente)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.excluir(id).await?;
        tracing::info!("Cliente excluído: {}", id);
        Ok(())
    }
}

fn normalizar_telefone(telefone: Option<&str>) -> Option<String> {
    let digitos = somente_digitos(telefone?);
    if digitos.is_empty() {
        return None;
    }
    Some(digitos)
}

// =============================================================================
//  INVARIANTE DO E-MAIL PRINCIPAL
//  Lista não-vazia => exatamente uma entrada com principal = true.
// =============================================================================

/// Normaliza a lista recebida do formulário antes de persistir: se houver
/// mais de um marcado, vence o primeiro; se nenhum estiver marcado, o
/// primeiro da lista é promovido.
pub fn normalizar_principais(mut emails: Vec<EmailPayload>) -> Vec<EmailPayload> {
    if emails.is_empty() {
        return emails;
    }
    let escolhido = emails.iter().position(|e| e.principal).unwrap_or(0);
    for (i, email) in emails.iter_mut().enumerate() {
        email.principal = i == escolhido;
    }
    emails
}

/// Adiciona uma entrada nova, sempre como não-principal.
pub fn adicionar_email(emails: &mut Vec<EmailPayload>, email: String) {
    emails.push(EmailPayload {
        email,
        principal: false,
    });
}

/// Marca a entrada no índice como principal e desmarca todas as outras
/// (seleção única, não é um toggle).
pub fn marcar_principal(emails: &mut [EmailPayload], indice: usize) {
    for (i, email) in emails.iter_mut().enumerate() {
        email.principal = i == indice;
    }
}

/// Remove a entrada no índice. Se a removida era a principal, a nova
/// primeira entrada restante é promovida; caso contrário nada muda.
pub fn remover_email(emails: &mut Vec<EmailPayload>, indice: usize) {
    if indice >= emails.len() {
        return;
    }
    let era_principal = emails[indice].principal;
    emails.remove(indice);
    if era_principal {
        if let Some(primeiro) = emails.first_mut() {
            primeiro.principal = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lista(flags: &[bool]) -> Vec<EmailPayload> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &principal)| EmailPayload {
                email: format!("email{}@acme.com.br", i),
                principal,
            })
            .collect()
    }

    fn principais(emails: &[EmailPayload]) -> Vec<bool> {
        emails.iter().map(|e| e.principal).collect()
    }

    #[test]
    fn normalizar_promove_o_primeiro_quando_nenhum_marcado() {
        let emails = normalizar_principais(lista(&[false, false, false]));
        assert_eq!(principais(&emails), vec![true, false, false]);
    }

    #[test]
    fn normalizar_mantem_um_unico_principal() {
        let emails = normalizar_principais(lista(&[false, true, true]));
        assert_eq!(principais(&emails), vec![false, true, false]);
    }

    #[test]
    fn normalizar_lista_vazia_fica_vazia() {
        assert!(normalizar_principais(vec![]).is_empty());
    }

    #[test]
    fn adicionar_entra_como_nao_principal() {
        let mut emails = lista(&[true]);
        adicionar_email(&mut emails, "novo@acme.com.br".to_string());
        assert_eq!(principais(&emails), vec![true, false]);
    }

    #[test]
    fn marcar_indice_2_desmarca_os_demais() {
        let mut emails = lista(&[true, false, false, false]);
        marcar_principal(&mut emails, 2);
        assert_eq!(principais(&emails), vec![false, false, true, false]);
    }

    #[test]
    fn remover_a_principal_promove_a_nova_primeira() {
        let mut emails = lista(&[true, false, false]);
        remover_email(&mut emails, 0);
        assert_eq!(principais(&emails), vec![true, false]);
        assert_eq!(emails[0].email, "email1@acme.com.br");
    }

    #[test]
    fn remover_nao_principal_nao_mexe_na_flag() {
        let mut emails = lista(&[false, true, false]);
        remover_email(&mut emails, 2);
        assert_eq!(principais(&emails), vec![false, true]);
    }

    #[test]
    fn lista_nao_vazia_sempre_termina_com_exatamente_um_principal() {
        let mut emails = lista(&[false, true, false]);
        remover_email(&mut emails, 1);
        let emails = normalizar_principais(emails);
        assert_eq!(emails.iter().filter(|e| e.principal).count(), 1);
    }

    #[test]
    fn normalizar_telefone_descarta_vazio_e_mascara() {
        assert_eq!(normalizar_telefone(None), None);
        assert_eq!(normalizar_telefone(Some("")), None);
        assert_eq!(
            normalizar_telefone(Some("+55 (11) 99999-8888")),
            Some("5511999998888".to_string())
        );
    }
}
