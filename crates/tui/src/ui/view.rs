//! Plain-data projection of the bill list, kept apart from the widgets so it
//! can be checked without a terminal.

use engine::Money;

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub id: i32,
    pub description: String,
    pub amount: Money,
    pub amount_label: String,
    pub selected: bool,
}

pub fn bill_rows(state: &AppState) -> Vec<BillRow> {
    let selected = state.bills.selected;
    state
        .bills
        .items
        .iter()
        .enumerate()
        .map(|(index, bill)| BillRow {
            id: bill.id,
            description: bill.description.clone(),
            amount: bill.amount,
            amount_label: bill.amount.format(&state.currency_symbol),
            selected: index == selected,
        })
        .collect()
}

pub fn total_label(state: &AppState) -> String {
    format!(
        "Total: {}",
        state.bills.total.format(&state.currency_symbol)
    )
}
