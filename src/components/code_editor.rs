use web_sys::{HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use crate::model::Language;
use crate::util::alert;

#[derive(Properties, PartialEq, Clone)]
pub struct CodeEditorProps {
    pub code: AttrValue,
    pub language: Language,
    pub on_change: Callback<String>,
    /// Set when paste is blocked; the text is shown to the player.
    #[prop_or_default]
    pub paste_warning: Option<&'static str>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(CodeEditor)]
pub fn code_editor(props: &CodeEditorProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    let onpaste = {
        let warning = props.paste_warning;
        Callback::from(move |e: Event| {
            if let Some(msg) = warning {
                e.prevent_default();
                log::info!("paste blocked");
                alert(msg);
            }
        })
    };
    html! {
        <textarea
            class={classes!("code-editor", format!("lang-{}", props.language.file_extension()))}
            spellcheck="false"
            autocomplete="off"
            value={props.code.clone()}
            disabled={props.disabled}
            {oninput}
            {onpaste}
        />
    }
}
