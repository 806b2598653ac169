use yew::prelude::*;

use crate::state::Preview;

const FRAME_STYLE: &str =
    "<style>body{color:lime;font-family:monospace;background:#050505;margin:0;padding:10px;}*{max-width:100%;word-wrap:break-word;}</style>";

#[derive(Properties, PartialEq, Clone)]
pub struct OutputPaneProps {
    pub preview: Preview,
    pub idle_text: AttrValue,
}

/// Markup is shown in a sandboxed frame; everything else as console text.
#[function_component(OutputPane)]
pub fn output_pane(props: &OutputPaneProps) -> Html {
    match &props.preview {
        Preview::Markup(code) => html! {
            <iframe
                title="preview"
                sandbox="allow-scripts"
                srcdoc={format!("{}{}", FRAME_STYLE, code)}
                style="width:100%; height:100%; border:none; background:#050505;"
            />
        },
        Preview::Console(text) => html! {
            <pre class="console">{ text.clone() }</pre>
        },
        Preview::Idle => html! {
            <pre class="console">{ props.idle_text.clone() }</pre>
        },
    }
}
