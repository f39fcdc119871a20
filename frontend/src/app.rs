use crate::components::header::Header;
use crate::pages::history::HistoryPage;
use crate::pages::upload::UploadPage;
use crate::pages::Page;
use crate::storage::StoreHandle;
use yew::{html, Component, Context, Html};

pub enum Msg {
    Navigate(Page),
}

/// Root component. Owns the single store handle handed to both pages.
pub struct App {
    store: StoreHandle,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: StoreHandle::new(),
            page: Page::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Header current={self.page} on_navigate={ctx.link().callback(Msg::Navigate)} />
                {
                    match self.page {
                        Page::Upload => html! { <UploadPage store={self.store.clone()} /> },
                        Page::History => html! { <HistoryPage store={self.store.clone()} /> },
                    }
                }
            </div>
        }
    }
}
