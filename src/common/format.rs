// src/common/format.rs

/// Remove tudo que não for dígito ASCII.
pub fn somente_digitos(valor: &str) -> String {
    valor.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formata um CNPJ de 14 dígitos como `NN.NNN.NNN/NNNN-NN`.
/// Qualquer outro comprimento volta só com os dígitos, sem máscara.
pub fn formatar_cnpj(valor: &str) -> String {
    let digitos = somente_digitos(valor);
    if digitos.len() != 14 {
        return digitos;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digitos[..2],
        &digitos[2..5],
        &digitos[5..8],
        &digitos[8..12],
        &digitos[12..]
    )
}

/// Formata um telefone internacional de 12 ou 13 dígitos como
/// `+CC (DD) NNNN-NNNN` (grupo do meio com 4 ou 5 dígitos).
pub fn formatar_telefone(valor: &str) -> String {
    let digitos = somente_digitos(valor);
    match digitos.len() {
        12 => format!(
            "+{} ({}) {}-{}",
            &digitos[..2],
            &digitos[2..4],
            &digitos[4..8],
            &digitos[8..]
        ),
        13 => format!(
            "+{} ({}) {}-{}",
            &digitos[..2],
            &digitos[2..4],
            &digitos[4..9],
            &digitos[9..]
        ),
        _ => valor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cnpj_com_14_digitos_recebe_mascara() {
        assert_eq!(formatar_cnpj("12345678000199"), "12.345.678/0001-99");
    }

    #[test]
    fn cnpj_ja_mascarado_e_normalizado_antes() {
        assert_eq!(formatar_cnpj("12.345.678/0001-99"), "12.345.678/0001-99");
    }

    #[test]
    fn cnpj_incompleto_volta_sem_mascara() {
        assert_eq!(formatar_cnpj("123456"), "123456");
    }

    #[test]
    fn telefone_celular_13_digitos() {
        assert_eq!(formatar_telefone("5511999998888"), "+55 (11) 99999-8888");
    }

    #[test]
    fn telefone_fixo_12_digitos() {
        assert_eq!(formatar_telefone("551133334444"), "+55 (11) 3333-4444");
    }

    #[test]
    fn telefone_fora_do_padrao_fica_como_esta() {
        assert_eq!(formatar_telefone("11999"), "11999");
    }

    #[test]
    fn somente_digitos_descarta_pontuacao() {
        assert_eq!(somente_digitos("+55 (11) 99999-8888"), "5511999998888");
    }
}
