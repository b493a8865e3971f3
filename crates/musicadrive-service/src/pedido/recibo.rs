//! Printable HTML receipt for a pedido.
//!
//! Per-unit item rows are grouped back into (pasta, quantity) lines for
//! display. All customer-supplied text is HTML-escaped.

use std::fmt::Write;

use uuid::Uuid;

use musicadrive_entity::pedido::{Pedido, PedidoItem};

/// One grouped display line of the receipt.
#[derive(Debug, PartialEq)]
struct LinhaRecibo {
    pasta_id: Uuid,
    nome: String,
    quantidade: u32,
    preco_unit: f64,
}

impl LinhaRecibo {
    fn subtotal(&self) -> f64 {
        f64::from(self.quantidade) * self.preco_unit
    }
}

/// Collapse per-unit rows into display lines, preserving first-seen order.
///
/// Rows are keyed by the frozen `pasta_id`; two pastas that share a name
/// and price still print as separate lines.
fn agrupar(itens: &[PedidoItem]) -> Vec<LinhaRecibo> {
    let mut linhas: Vec<LinhaRecibo> = Vec::new();
    for item in itens {
        match linhas.iter_mut().find(|l| l.pasta_id == item.pasta_id) {
            Some(linha) => linha.quantidade += 1,
            None => linhas.push(LinhaRecibo {
                pasta_id: item.pasta_id,
                nome: item.nome_pasta.clone(),
                quantidade: 1,
                preco_unit: item.preco_unit,
            }),
        }
    }
    linhas
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn moeda(valor: f64) -> String {
    format!("R$ {valor:.2}").replace('.', ",")
}

/// Render the printable receipt document.
pub fn render(pedido: &Pedido, itens: &[PedidoItem]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = write!(
        html,
        "<title>Recibo - Pedido {}</title>\n",
        &pedido.id.to_string()[..8]
    );
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; max-width: 480px; margin: 2rem auto; }\n\
         h1 { font-size: 1.2rem; }\n\
         table { width: 100%; border-collapse: collapse; }\n\
         th, td { text-align: left; padding: 0.25rem 0.5rem; border-bottom: 1px solid #ddd; }\n\
         td.num, th.num { text-align: right; }\n\
         tfoot td { font-weight: bold; border-top: 2px solid #333; }\n\
         @media print { body { margin: 0; } }\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str("<h1>MusicaDrive</h1>\n");
    let _ = write!(
        html,
        "<p>Pedido <strong>{}</strong><br>\n",
        &pedido.id.to_string()[..8]
    );
    let _ = write!(
        html,
        "Data: {}<br>\n",
        pedido.created_at.format("%d/%m/%Y %H:%M")
    );
    let _ = write!(html, "Cliente: {}<br>\n", escape(&pedido.cliente_nome));
    let _ = write!(html, "Contato: {}<br>\n", escape(&pedido.cliente_contato));
    let _ = write!(html, "Pendrive: {} GB", pedido.pendrive_gb.as_gb());
    if let Some(forma) = pedido.forma_pagamento {
        let _ = write!(html, "<br>\nPagamento: {}", forma.label());
    }
    html.push_str("</p>\n");

    html.push_str(
        "<table>\n<thead>\n<tr><th>Pasta</th><th class=\"num\">Qtd</th>\
         <th class=\"num\">Unit.</th><th class=\"num\">Subtotal</th></tr>\n</thead>\n<tbody>\n",
    );
    for linha in agrupar(itens) {
        let _ = write!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td></tr>\n",
            escape(&linha.nome),
            linha.quantidade,
            moeda(linha.preco_unit),
            moeda(linha.subtotal()),
        );
    }
    html.push_str("</tbody>\n<tfoot>\n");
    let _ = write!(
        html,
        "<tr><td>Total</td><td class=\"num\">{}</td><td></td><td class=\"num\">{}</td></tr>\n",
        pedido.total_itens,
        moeda(pedido.total_valor),
    );
    html.push_str("</tfoot>\n</table>\n");

    let _ = write!(
        html,
        "<p>{} músicas &bull; {:.2} GB</p>\n",
        pedido.total_musicas, pedido.total_gb
    );

    if let Some(obs) = &pedido.observacoes {
        let _ = write!(html, "<p>Obs.: {}</p>\n", escape(obs));
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    use musicadrive_entity::pendrive::PendriveSize;
    use musicadrive_entity::pedido::{FormaPagamento, PedidoStatus};

    use super::*;

    fn item(pedido_id: Uuid, pasta_id: Uuid, nome: &str, preco: f64) -> PedidoItem {
        PedidoItem {
            id: Uuid::new_v4(),
            pedido_id,
            pasta_id,
            nome_pasta: nome.to_string(),
            qtd_musicas: 50,
            tamanho_gb: 0.5,
            preco_unit: preco,
            created_at: Utc::now(),
        }
    }

    fn pedido() -> Pedido {
        Pedido {
            id: Uuid::new_v4(),
            cliente_nome: "Maria <Silva>".to_string(),
            cliente_contato: "(11) 99999-0000".to_string(),
            pendrive_gb: PendriveSize::Gb16,
            status: PedidoStatus::Enviado,
            forma_pagamento: Some(FormaPagamento::Pix),
            observacoes: None,
            total_itens: 3,
            total_musicas: 150,
            total_gb: 1.5,
            total_valor: 30.0,
            historico_status: Json(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_per_unit_rows_into_quantity_lines() {
        let pid = Uuid::new_v4();
        let sertanejo = Uuid::new_v4();
        let forro = Uuid::new_v4();
        let itens = vec![
            item(pid, sertanejo, "Sertanejo 2024", 10.0),
            item(pid, sertanejo, "Sertanejo 2024", 10.0),
            item(pid, forro, "Forró Raiz", 12.0),
        ];
        let linhas = agrupar(&itens);
        assert_eq!(linhas.len(), 2);
        assert_eq!(linhas[0].quantidade, 2);
        assert_eq!(linhas[0].subtotal(), 20.0);
        assert_eq!(linhas[1].quantidade, 1);
    }

    #[test]
    fn distinct_pastas_with_same_name_and_price_stay_separate() {
        let pid = Uuid::new_v4();
        let itens = vec![
            item(pid, Uuid::new_v4(), "Anos 80", 10.0),
            item(pid, Uuid::new_v4(), "Anos 80", 10.0),
        ];
        let linhas = agrupar(&itens);
        assert_eq!(linhas.len(), 2);
        assert!(linhas.iter().all(|l| l.quantidade == 1));
    }

    #[test]
    fn escapes_customer_text() {
        let p = pedido();
        let html = render(&p, &[item(p.id, Uuid::new_v4(), "Rock & Pop", 10.0)]);
        assert!(html.contains("Maria &lt;Silva&gt;"));
        assert!(html.contains("Rock &amp; Pop"));
        assert!(!html.contains("Maria <Silva>"));
    }

    #[test]
    fn shows_totals_and_payment() {
        let p = pedido();
        let html = render(&p, &[item(p.id, Uuid::new_v4(), "Sertanejo 2024", 10.0)]);
        assert!(html.contains("R$ 30,00"));
        assert!(html.contains("PIX"));
        assert!(html.contains("16 GB"));
        assert!(html.contains("150 músicas"));
    }
}
