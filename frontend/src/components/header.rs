use common::config::APP_TITLE;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

/// Title bar with the two navigation buttons and the current page caption.
pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let nav_button = |page: Page, label: &'static str, help: &'static str| {
            let class = if props.current == page {
                "nav-btn primary"
            } else {
                "nav-btn secondary"
            };
            html! {
                <button class={class} title={help} onclick={props.on_navigate.reform(move |_| page)}>
                    { label }
                </button>
            }
        };

        html! {
            <header class="app-header">
                <h1>{ APP_TITLE }</h1>
                <nav>
                    { nav_button(Page::Upload, "Uploader", "Aller à l'upload") }
                    { nav_button(Page::History, "Historique", "Voir l'historique") }
                </nav>
                <p class="page-info">{ format!("Page actuelle : {}", props.current.caption()) }</p>
                <hr />
            </header>
        }
    }
}
