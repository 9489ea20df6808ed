// src/common/template.rs

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// Token de variável: {{nome}}, onde nome é qualquer sequência sem '}'
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("regex válida"));

/// Extrai os nomes de variáveis `{{nome}}` de um texto, na ordem da primeira
/// ocorrência e sem duplicatas. A comparação é por igualdade exata de string.
pub fn extrair_variaveis(texto: &str) -> Vec<String> {
    let mut nomes: Vec<String> = Vec::new();
    for cap in TOKEN.captures_iter(texto) {
        let nome = cap[1].to_string();
        if !nomes.contains(&nome) {
            nomes.push(nome);
        }
    }
    nomes
}

/// Substitui todas as ocorrências de `{{nome}}` para cada variável declarada.
/// Variável sem valor (ou com valor em branco após trim) vira o marcador
/// visível `[nome]`, para que o autor perceba o que ainda falta preencher.
/// Tokens presentes no texto mas fora da lista declarada ficam intactos.
pub fn renderizar(
    texto: &str,
    declaradas: &[String],
    valores: &HashMap<String, String>,
) -> String {
    let mut resultado = texto.to_string();
    for nome in declaradas {
        let token = format!("{{{{{}}}}}", nome);
        let substituto = match valores.get(nome) {
            Some(valor) if !valor.trim().is_empty() => valor.clone(),
            _ => format!("[{}]", nome),
        };
        resultado = resultado.replace(&token, &substituto);
    }
    resultado
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

    #[test]
    fn extrai_na_ordem_da_primeira_ocorrencia_sem_duplicatas() {
        let corpo = "Oi {{a}}, cobramos {{a}} de {{b}}";
        assert_eq!(extrair_variaveis(corpo), vec!["a", "b"]);
    }

    #[test]
    fn extracao_e_idempotente() {
        let corpo = "Olá {{nome_cliente}}, NF {{numero_nf}} vence em {{data_vencimento}}";
        let primeira = extrair_variaveis(corpo);
        let segunda = extrair_variaveis(corpo);
        assert_eq!(primeira, segunda);
        assert_eq!(
            primeira,
            vec!["nome_cliente", "numero_nf", "data_vencimento"]
        );
    }

    #[test]
    fn texto_vazio_ou_sem_tokens_produz_lista_vazia() {
        assert!(extrair_variaveis("").is_empty());
        assert!(extrair_variaveis("sem variáveis aqui").is_empty());
    }

    #[test]
    fn substitui_todas_as_ocorrencias() {
        let corpo = "{{nome}} e de novo {{nome}}";
        let declaradas = vec!["nome".to_string()];
        let preview = renderizar(corpo, &declaradas, &valores(&[("nome", "Acme")]));
        assert_eq!(preview, "Acme e de novo Acme");
    }

    #[test]
    fn valor_em_branco_vira_marcador_visivel() {
        let corpo = "Olá {{nome_cliente}}, valor {{valor}}";
        let declaradas = vec!["nome_cliente".to_string(), "valor".to_string()];
        let preview = renderizar(
            corpo,
            &declaradas,
            &valores(&[("nome_cliente", "Acme"), ("valor", "")]),
        );
        assert_eq!(preview, "Olá Acme, valor [valor]");
    }

    #[test]
    fn valor_so_com_espacos_conta_como_vazio() {
        let corpo = "valor {{valor}}";
        let declaradas = vec!["valor".to_string()];
        let preview = renderizar(corpo, &declaradas, &valores(&[("valor", "   ")]));
        assert_eq!(preview, "valor [valor]");
    }

    #[test]
    fn token_nao_declarado_fica_intacto() {
        let corpo = "{{conhecida}} e {{desconhecida}}";
        let declaradas = vec!["conhecida".to_string()];
        let preview = renderizar(corpo, &declaradas, &valores(&[("conhecida", "ok")]));
        assert_eq!(preview, "ok e {{desconhecida}}");
    }

}
