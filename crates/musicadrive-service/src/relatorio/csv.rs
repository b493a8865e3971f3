//! CSV export of pedidos.
//!
//! Semicolon-separated (the Excel convention for pt-BR locales), with
//! double-quote escaping on fields that need it.

use std::fmt::Write;

use musicadrive_entity::pedido::Pedido;

const SEPARADOR: char = ';';

const CABECALHO: &[&str] = &[
    "id",
    "data",
    "cliente",
    "contato",
    "pendrive_gb",
    "status",
    "forma_pagamento",
    "total_itens",
    "total_musicas",
    "total_gb",
    "total_valor",
    "observacoes",
];

/// Quote a field when it contains the separator, quotes, or line breaks.
fn campo(valor: &str) -> String {
    if valor.contains(SEPARADOR) || valor.contains('"') || valor.contains('\n') {
        format!("\"{}\"", valor.replace('"', "\"\""))
    } else {
        valor.to_string()
    }
}

fn linha(campos: &[String]) -> String {
    campos
        .iter()
        .map(|c| campo(c))
        .collect::<Vec<_>>()
        .join(&SEPARADOR.to_string())
}

/// Render a list of pedidos as a CSV document with a header row.
pub fn exportar_pedidos(pedidos: &[Pedido]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        CABECALHO
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(&SEPARADOR.to_string())
    );

    for pedido in pedidos {
        let campos = vec![
            pedido.id.to_string(),
            pedido.created_at.format("%d/%m/%Y %H:%M").to_string(),
            pedido.cliente_nome.clone(),
            pedido.cliente_contato.clone(),
            pedido.pendrive_gb.as_gb().to_string(),
            pedido.status.to_string(),
            pedido
                .forma_pagamento
                .map(|f| f.to_string())
                .unwrap_or_default(),
            pedido.total_itens.to_string(),
            pedido.total_musicas.to_string(),
            format!("{:.2}", pedido.total_gb),
            format!("{:.2}", pedido.total_valor),
            pedido.observacoes.clone().unwrap_or_default(),
        ];
        let _ = writeln!(out, "{}", linha(&campos));
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    use musicadrive_entity::pendrive::PendriveSize;
    use musicadrive_entity::pedido::{FormaPagamento, PedidoStatus};

    use super::*;

    fn pedido(nome: &str, observacoes: Option<&str>) -> Pedido {
        Pedido {
            id: Uuid::new_v4(),
            cliente_nome: nome.to_string(),
            cliente_contato: "(11) 98888-7777".to_string(),
            pendrive_gb: PendriveSize::Gb32,
            status: PedidoStatus::EmSeparacao,
            forma_pagamento: Some(FormaPagamento::CartaoCredito),
            observacoes: observacoes.map(str::to_string),
            total_itens: 4,
            total_musicas: 200,
            total_gb: 2.0,
            total_valor: 45.5,
            historico_status: Json(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn header_then_one_row_per_pedido() {
        let csv = exportar_pedidos(&[pedido("Ana", None), pedido("Bruno", None)]);
        let linhas: Vec<&str> = csv.lines().collect();
        assert_eq!(linhas.len(), 3);
        assert!(linhas[0].starts_with("id;data;cliente"));
        assert!(linhas[1].contains("Ana"));
        assert!(linhas[2].contains("Bruno"));
    }

    #[test]
    fn quotes_fields_containing_the_separator() {
        let csv = exportar_pedidos(&[pedido("Silva; Filho", None)]);
        assert!(csv.contains("\"Silva; Filho\""));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let csv = exportar_pedidos(&[pedido("Ana", Some("pedido \"urgente\""))]);
        assert!(csv.contains("\"pedido \"\"urgente\"\"\""));
    }

    #[test]
    fn plain_fields_stay_unquoted() {
        let csv = exportar_pedidos(&[pedido("Ana", None)]);
        assert!(csv.contains(";Ana;"));
        assert!(csv.contains(";32;"));
        assert!(csv.contains(";EM_SEPARACAO;"));
        assert!(csv.contains(";45.50"));
    }
}
