use yew::{html, AttrValue, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub message: AttrValue,
    /// Emits `true` on confirm, `false` on cancel.
    pub on_decision: Callback<bool>,
}

/// Modal yes/no gate placed in front of destructive actions.
///
/// The dialog holds no state of its own: the parent opens it through `open`
/// and closes it when the decision arrives.
pub struct ConfirmDialog;

impl Component for ConfirmDialog {
    type Message = ();
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfirmDialog
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_confirm = props.on_decision.reform(|_| true);
        let on_cancel = props.on_decision.reform(|_| false);

        html! {
            <div class="top-sheet show" role="dialog" aria-modal="true"
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;padding:24px 32px;border-radius:8px;min-width:320px;box-shadow:0 0 8px #333;">
                    <p style="margin:0 0 24px 0;">{ props.message.clone() }</p>
                    <div style="display:flex;justify-content:flex-end;gap:12px;">
                        <button
                            onclick={on_cancel}
                            style="padding:0.5rem 1rem;background:#fff;border:1px solid #ccc;border-radius:4px;cursor:pointer;"
                        >
                            { "Annuler" }
                        </button>
                        <button
                            onclick={on_confirm}
                            style="padding:0.5rem 1rem;background:#e4002b;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                        >
                            { "Effacer" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
