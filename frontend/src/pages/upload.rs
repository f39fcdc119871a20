//! Upload page: file input, upload button and feedback line.
//!
//! Recording happens only on the button click, never on file selection.
//! Only the file's intrinsic properties are read; its bytes never are.

use common::upload::{handle_upload, Feedback, SelectedFile};
use jiff::Timestamp;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::storage::StoreHandle;

#[derive(Properties, PartialEq)]
pub struct UploadPageProps {
    pub store: StoreHandle,
}

pub enum Msg {
    Upload,
}

pub struct UploadPage {
    file_input_ref: NodeRef,
    feedback: Option<Feedback>,
}

impl Component for UploadPage {
    type Message = Msg;
    type Properties = UploadPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input_ref: NodeRef::default(),
            feedback: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Upload => {
                let input = self.file_input_ref.cast::<HtmlInputElement>();
                let selection = input.as_ref().and_then(selected_file);
                let outcome = handle_upload(ctx.props().store.store(), selection, Timestamp::now());

                if outcome.reset_input {
                    if let Some(input) = &input {
                        input.set_value("");
                    }
                }
                self.feedback = Some(outcome.feedback);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (feedback_text, feedback_color) = match &self.feedback {
            Some(feedback) => (feedback.message.clone(), feedback.color()),
            None => (String::new(), "#64748b"),
        };

        html! {
            <section class="upload-page">
                <h2>{ "Téléverser un document" }</h2>
                <p>{ "Sélectionnez un fichier depuis votre machine. Seules ses métadonnées sont conservées, dans ce navigateur." }</p>
                <input id="fileInput" type="file" ref={self.file_input_ref.clone()} />
                <button id="uploadBtn" class="primary" onclick={ctx.link().callback(|_| Msg::Upload)}>
                    { "Ajouter à l'historique" }
                </button>
                <p id="feedback" aria-live="polite" style={format!("color:{};", feedback_color)}>
                    { feedback_text }
                </p>
            </section>
        }
    }
}

fn selected_file(input: &HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    Some(SelectedFile {
        name: file.name(),
        size: file.size() as u64,
        mime_type: file.type_(),
        last_modified: file.last_modified() as i64,
    })
}
