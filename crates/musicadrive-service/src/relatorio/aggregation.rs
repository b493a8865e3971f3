//! Pure aggregation of pedidos into the sales report.
//!
//! All numbers are derived from the frozen pedido totals, never from the
//! live catalog. Cancelled pedidos are counted in their own status bucket
//! but excluded from revenue figures.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use musicadrive_entity::pedido::{FormaPagamento, Pedido, PedidoStatus};

/// Headline numbers of a sales period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumoVendas {
    /// Pedidos in the period, including cancelled ones.
    pub total_pedidos: u64,
    /// Revenue (cancelled pedidos excluded).
    pub total_valor: f64,
    /// Units sold (cancelled pedidos excluded).
    pub total_itens: i64,
    /// Tracks sold (cancelled pedidos excluded).
    pub total_musicas: i64,
    /// Average revenue per non-cancelled pedido.
    pub ticket_medio: f64,
}

/// Revenue of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaPorDia {
    /// The calendar day (UTC).
    pub dia: NaiveDate,
    /// Pedidos created that day.
    pub pedidos: u64,
    /// Revenue that day.
    pub valor: f64,
}

/// Pedido count per fulfillment status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaPorStatus {
    /// The status bucket.
    pub status: PedidoStatus,
    /// Pedidos currently in that status.
    pub pedidos: u64,
}

/// Revenue per declared payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaPorPagamento {
    /// The payment method, if the customer declared one.
    pub forma_pagamento: Option<FormaPagamento>,
    /// Pedidos declaring that method.
    pub pedidos: u64,
    /// Revenue from those pedidos.
    pub valor: f64,
}

/// The full sales report for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioVendas {
    /// Headline numbers.
    pub resumo: ResumoVendas,
    /// Per-day breakdown, chronological.
    pub vendas_por_dia: Vec<VendaPorDia>,
    /// Per-status breakdown.
    pub vendas_por_status: Vec<VendaPorStatus>,
    /// Per-payment-method breakdown.
    pub vendas_por_pagamento: Vec<VendaPorPagamento>,
}

/// Aggregate a period's pedidos into the sales report.
pub fn agregar_vendas(pedidos: &[Pedido]) -> RelatorioVendas {
    let mut total_valor = 0.0;
    let mut total_itens = 0i64;
    let mut total_musicas = 0i64;
    let mut vendidos = 0u64;

    let mut por_dia: BTreeMap<NaiveDate, (u64, f64)> = BTreeMap::new();
    let mut por_status: BTreeMap<&'static str, (PedidoStatus, u64)> = BTreeMap::new();
    let mut por_pagamento: BTreeMap<Option<&'static str>, (Option<FormaPagamento>, u64, f64)> =
        BTreeMap::new();

    for pedido in pedidos {
        let cancelado = pedido.status == PedidoStatus::Cancelado;
        let valor = if cancelado { 0.0 } else { pedido.total_valor };

        if !cancelado {
            vendidos += 1;
            total_valor += pedido.total_valor;
            total_itens += i64::from(pedido.total_itens);
            total_musicas += pedido.total_musicas;
        }

        let dia = pedido.created_at.date_naive();
        let entrada = por_dia.entry(dia).or_insert((0, 0.0));
        entrada.0 += 1;
        entrada.1 += valor;

        let status = por_status
            .entry(pedido.status.as_str())
            .or_insert((pedido.status, 0));
        status.1 += 1;

        let chave = pedido.forma_pagamento.map(|f| f.as_str());
        let pagamento = por_pagamento
            .entry(chave)
            .or_insert((pedido.forma_pagamento, 0, 0.0));
        pagamento.1 += 1;
        pagamento.2 += valor;
    }

    let ticket_medio = if vendidos > 0 {
        total_valor / vendidos as f64
    } else {
        0.0
    };

    RelatorioVendas {
        resumo: ResumoVendas {
            total_pedidos: pedidos.len() as u64,
            total_valor,
            total_itens,
            total_musicas,
            ticket_medio,
        },
        vendas_por_dia: por_dia
            .into_iter()
            .map(|(dia, (pedidos, valor))| VendaPorDia {
                dia,
                pedidos,
                valor,
            })
            .collect(),
        vendas_por_status: por_status
            .into_values()
            .map(|(status, pedidos)| VendaPorStatus { status, pedidos })
            .collect(),
        vendas_por_pagamento: por_pagamento
            .into_values()
            .map(|(forma_pagamento, pedidos, valor)| VendaPorPagamento {
                forma_pagamento,
                pedidos,
                valor,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    use musicadrive_entity::pendrive::PendriveSize;

    use super::*;

    fn pedido(
        dia: u32,
        status: PedidoStatus,
        forma: Option<FormaPagamento>,
        valor: f64,
    ) -> Pedido {
        let created = Utc.with_ymd_and_hms(2024, 3, dia, 12, 0, 0).unwrap();
        Pedido {
            id: Uuid::new_v4(),
            cliente_nome: "Cliente".to_string(),
            cliente_contato: "contato".to_string(),
            pendrive_gb: PendriveSize::Gb16,
            status,
            forma_pagamento: forma,
            observacoes: None,
            total_itens: 2,
            total_musicas: 100,
            total_gb: 1.0,
            total_valor: valor,
            historico_status: Json(vec![]),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn empty_period_yields_zeroed_report() {
        let relatorio = agregar_vendas(&[]);
        assert_eq!(relatorio.resumo.total_pedidos, 0);
        assert_eq!(relatorio.resumo.ticket_medio, 0.0);
        assert!(relatorio.vendas_por_dia.is_empty());
    }

    #[test]
    fn cancelled_pedidos_count_but_earn_nothing() {
        let pedidos = vec![
            pedido(1, PedidoStatus::Entregue, Some(FormaPagamento::Pix), 30.0),
            pedido(1, PedidoStatus::Cancelado, Some(FormaPagamento::Pix), 50.0),
        ];
        let relatorio = agregar_vendas(&pedidos);

        assert_eq!(relatorio.resumo.total_pedidos, 2);
        assert_eq!(relatorio.resumo.total_valor, 30.0);
        assert_eq!(relatorio.resumo.total_itens, 2);
        assert_eq!(relatorio.resumo.ticket_medio, 30.0);

        let pix = &relatorio.vendas_por_pagamento[0];
        assert_eq!(pix.pedidos, 2);
        assert_eq!(pix.valor, 30.0);
    }

    #[test]
    fn groups_by_day_in_chronological_order() {
        let pedidos = vec![
            pedido(5, PedidoStatus::Entregue, None, 10.0),
            pedido(2, PedidoStatus::Enviado, None, 20.0),
            pedido(5, PedidoStatus::Pronto, None, 15.0),
        ];
        let relatorio = agregar_vendas(&pedidos);

        assert_eq!(relatorio.vendas_por_dia.len(), 2);
        assert!(relatorio.vendas_por_dia[0].dia < relatorio.vendas_por_dia[1].dia);
        assert_eq!(relatorio.vendas_por_dia[1].pedidos, 2);
        assert_eq!(relatorio.vendas_por_dia[1].valor, 25.0);
    }

    #[test]
    fn splits_status_and_payment_buckets() {
        let pedidos = vec![
            pedido(1, PedidoStatus::Enviado, Some(FormaPagamento::Dinheiro), 10.0),
            pedido(1, PedidoStatus::Enviado, Some(FormaPagamento::Pix), 20.0),
            pedido(2, PedidoStatus::Entregue, None, 30.0),
        ];
        let relatorio = agregar_vendas(&pedidos);

        let enviado = relatorio
            .vendas_por_status
            .iter()
            .find(|v| v.status == PedidoStatus::Enviado)
            .unwrap();
        assert_eq!(enviado.pedidos, 2);

        let sem_forma = relatorio
            .vendas_por_pagamento
            .iter()
            .find(|v| v.forma_pagamento.is_none())
            .unwrap();
        assert_eq!(sem_forma.valor, 30.0);
    }
}
