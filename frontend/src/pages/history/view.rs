//! View rendering for the history page.
//!
//! File names come from the user's machine and are untrusted: they only ever
//! reach the DOM as text nodes or attribute values, which the virtual DOM
//! escapes. Nothing here uses `inner_html`.

use common::history::{HistoryRow, HistoryStats};
use common::messages::{CLEAR_CONFIRMATION, EMPTY_HISTORY};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::HistoryPage;
use crate::components::confirm_dialog::ConfirmDialog;

pub fn view(page: &HistoryPage, ctx: &Context<HistoryPage>) -> Html {
    let link = ctx.link();
    let empty = page.view.is_empty();

    html! {
        <section class="history-page">
            <h2>{ "Historique des documents envoyés" }</h2>

            { build_toolbar(empty, link) }

            if let Some(notice) = &page.notice {
                <p class="notice">{ notice.clone() }</p>
            }

            <p id="emptyState" style={if empty { "display:block;" } else { "display:none;" }}>
                { EMPTY_HISTORY }
            </p>

            if !empty {
                { build_stats(&page.view.stats) }
            }

            <table id="historyTable" style={if empty { "display:none;" } else { "" }}>
                <thead>
                    <tr>
                        <th>{ "Fichier" }</th>
                        <th>{ "Taille" }</th>
                        <th>{ "Type" }</th>
                        <th>{ "Dernière modification" }</th>
                        <th>{ "Téléversé le" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for page.view.rows.iter().map(|row| build_row(row, link)) }
                </tbody>
            </table>

            <ConfirmDialog
                open={page.confirm_open}
                message={CLEAR_CONFIRMATION}
                on_decision={link.callback(Msg::ClearDecision)}
            />
        </section>
    }
}

fn build_toolbar(empty: bool, link: &Scope<HistoryPage>) -> Html {
    html! {
        <div class="toolbar">
            <button onclick={link.callback(|_| Msg::Refresh)}>{ "Actualiser" }</button>
            <button id="clearHistoryBtn" class="danger" disabled={empty}
                onclick={link.callback(|_| Msg::RequestClear)}>
                { "Effacer l'historique" }
            </button>
        </div>
    }
}

fn build_stats(stats: &HistoryStats) -> Html {
    html! {
        <div class="stats" style="display:flex;gap:32px;margin:16px 0;">
            <div class="metric">
                <div class="metric-label">{ "Documents" }</div>
                <div class="metric-value">{ stats.count.to_string() }</div>
            </div>
            <div class="metric">
                <div class="metric-label">{ "Dernier téléversement" }</div>
                <div class="metric-value">{ stats.last_uploaded_label().to_string() }</div>
            </div>
            <div class="metric">
                <div class="metric-label">{ "Espace utilisé" }</div>
                <div class="metric-value">{ stats.total_size_label() }</div>
            </div>
        </div>
    }
}

fn build_row(row: &HistoryRow, link: &Scope<HistoryPage>) -> Html {
    let on_remove = {
        let id = row.id.clone();
        let name = row.name.clone();
        link.callback(move |_| Msg::Remove {
            id: id.clone(),
            name: name.clone(),
        })
    };

    html! {
        <tr>
            <td class="name" title={row.name.clone()}>{ row.name.clone() }</td>
            <td>{ row.size.clone() }</td>
            <td>{ row.mime_type.clone() }</td>
            <td>{ row.last_modified.clone() }</td>
            <td>{ row.uploaded_at.clone() }</td>
            <td>
                <button class="link" onclick={on_remove}>{ "Supprimer" }</button>
            </td>
        </tr>
    }
}
