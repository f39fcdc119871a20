//! History page: sorted table of every recorded document.
//!
//! Responsibilities
//! - Project the store into a `HistoryView` on page load and after every
//!   mutation (clear, per-row removal).
//! - Gate the clear action behind the confirmation dialog.
//!
//! The component delegates to `update::update` and `view::view`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::HistoryPageProps;
pub use state::HistoryPage;

impl Component for HistoryPage {
    type Message = Msg;
    type Properties = HistoryPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        HistoryPage::load(ctx.props().store.store())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
