use common::history::clear_history;
use common::messages::record_removed;
use jiff::tz::TimeZone;
use yew::prelude::*;

use super::messages::Msg;
use super::state::HistoryPage;

/// Returns `true` when the page must re-render.
pub fn update(page: &mut HistoryPage, ctx: &Context<HistoryPage>, msg: Msg) -> bool {
    let store = ctx.props().store.store();

    match msg {
        Msg::Refresh => {
            page.reload(store);
            true
        }
        Msg::RequestClear => {
            page.confirm_open = true;
            true
        }
        Msg::ClearDecision(confirmed) => {
            page.confirm_open = false;
            if let Some(view) = clear_history(store, confirmed, &TimeZone::system()) {
                page.view = view;
                page.notice = None;
            }
            true
        }
        Msg::Remove { id, name } => {
            if store.remove(&id) {
                page.notice = Some(record_removed(&name));
            }
            page.reload(store);
            true
        }
    }
}
