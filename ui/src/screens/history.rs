//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::copy_cell::CopyCell;
use crate::components::empty_state::EmptyState;
use crate::components::loading::Loading;
use crate::components::pico::{Button, Card, Grid};
use crate::hooks::use_wallet_history::{use_wallet_history, ResultView};
use api::display::{count_label, truncate_middle, HistoryRow, NO_DATA};
use api::form::MAX_LIMIT;
use api::{HistoryForm, HistoryItem, Network};
use dioxus::prelude::*;
use std::rc::Rc;

/// Toast text for a submit that could not even be started.
pub const SUBMIT_FAILED: &str = "Something went wrong!";

const COLUMNS: [&str; 10] = [
    "#",
    "Transaction Hash",
    "From",
    "To",
    "Network",
    "Amount",
    "Transfer Type",
    "Block Hash",
    "Block Height",
    "Block Timestamp",
];

/// Feedback state of the limit input.
///
/// An entry above the maximum bumps `revision`. The input is keyed on it, so it
/// remounts showing the stored limit again. Other rejected entries (empty, zero)
/// stay visible while the user is still typing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LimitFeedback {
    rejected: bool,
    revision: u32,
}

impl LimitFeedback {
    fn record(&mut self, input: &str, accepted: bool) {
        self.rejected = !accepted;
        if HistoryForm::exceeds_max_limit(input) {
            self.revision = self.revision.wrapping_add(1);
        }
    }
}

/// A single row of the history table.
#[component]
fn HistoryTableRow(row: HistoryRow) -> Element {
    let abbreviated_hash = truncate_middle(&row.transaction_hash);

    rsx! {
        tr {
            td { "{row.position}" }
            td {
                class: "clickable",
                title: "{row.transaction_hash}",
                a {
                    href: "{row.transaction_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    code { "{abbreviated_hash}" }
                }
            }
            CopyCell { value: row.from_address.clone() }
            CopyCell { value: row.to_address.clone() }
            td { "{row.network}" }
            td { "{row.amount}" }
            td { "{row.transfer_type}" }
            CopyCell { value: row.block_hash.clone() }
            td { "{row.block_height}" }
            td { "{row.block_timestamp}" }
        }
    }
}

#[component]
fn HistoryTable(items: Rc<Vec<HistoryItem>>) -> Element {
    let rows = HistoryRow::from_items(&items);
    let label = count_label(rows.len());

    rsx! {
        div {
            class: "table-container",
            p { class: "table-count", "{label}" }
            div {
                class: "overflow-auto",
                table {
                    class: "striped",
                    thead {
                        tr {
                            for heading in COLUMNS {
                                th { "{heading}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows {
                            HistoryTableRow {
                                key: "{row.position}",
                                row,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut notifier = use_context::<AppStateMut>();
    let mut form = use_signal(HistoryForm::default);
    let mut limit_feedback = use_signal(LimitFeedback::default);
    let mut history = use_wallet_history();

    let (address, selected_network, limit) = {
        let f = form.read();
        (f.wallet_address().to_string(), f.network(), f.limit())
    };
    let LimitFeedback {
        rejected: limit_rejected,
        revision: limit_revision,
    } = limit_feedback();
    let is_pending = history.is_pending();
    let result_view = ResultView::from(&*history.state().read());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let request = form.read().to_request();
        match request {
            Ok(request) => {
                history.fetch(app_state.client.clone(), request);
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("submit rejected: {}", e);
                notifier.error(SUBMIT_FAILED);
            }
        }
    };

    rsx! {
        Card {
            form {
                onsubmit: on_submit,
                Grid {
                    input {
                        r#type: "text",
                        name: "wallet",
                        "aria-label": "Wallet address",
                        placeholder: "Enter wallet address. E.g: 0xsOmEAdDrEsS",
                        value: "{address}",
                        required: true,
                        oninput: move |evt: FormEvent| form.write().set_wallet_address(evt.value()),
                    }
                    select {
                        name: "networks",
                        "aria-label": "Network",
                        value: "{selected_network}",
                        onchange: move |evt: FormEvent| {
                            if !form.write().set_network_input(&evt.value()) {
                                dioxus_logger::tracing::warn!("unknown network: {}", evt.value());
                            }
                        },
                        for network in Network::all() {
                            option {
                                key: "{network}",
                                value: network.id(),
                                selected: network == selected_network,
                                "{network}"
                            }
                        }
                    }
                }
                div {
                    class: "limit-line",
                    span { "Get the last" }
                    for revision in [limit_revision] {
                        input {
                            key: "{revision}",
                            r#type: "number",
                            name: "amount",
                            "aria-label": "Number of transactions",
                            min: "1",
                            max: "{MAX_LIMIT}",
                            value: "{limit}",
                            required: true,
                            "aria-invalid": limit_rejected.then_some("true"),
                            onmounted: move |evt: MountedEvent| async move {
                                if revision > 0 {
                                    let _ = evt.set_focus(true).await;
                                }
                            },
                            oninput: move |evt: FormEvent| {
                                let input = evt.value();
                                let accepted = form.write().set_limit_input(&input);
                                limit_feedback.write().record(&input, accepted);
                            },
                        }
                    }
                    span { "transactions" }
                    Button {
                        disabled: is_pending,
                        busy: is_pending,
                        "Submit"
                    }
                }
                if limit_rejected {
                    small {
                        class: "limit-hint",
                        "Enter a whole number from 1 to {MAX_LIMIT}. Keeping {limit}."
                    }
                }
            }
        }
        match result_view {
            ResultView::Nothing => rsx! {},
            ResultView::Loading => rsx! {
                Loading { caption: "Fetching transactions..." }
            },
            ResultView::Empty => rsx! {
                EmptyState { title: "{NO_DATA}" }
            },
            ResultView::Table(items) => rsx! {
                HistoryTable { items }
            },
        }
    }
}
