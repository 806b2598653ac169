use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TutorialPromptProps {
    pub plain: bool,
    pub on_accept: Callback<()>,
    pub on_decline: Callback<()>,
}

/// One-time offer shown on a profile's first visit to level select.
#[function_component(TutorialPrompt)]
pub fn tutorial_prompt(props: &TutorialPromptProps) -> Html {
    let accept_cb = {
        let cb = props.on_accept.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let decline_cb = {
        let cb = props.on_decline.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (title, body, yes, no) = if props.plain {
        (
            "Welcome!",
            "Is this your first time here? The tutorial walks you through the editor, the run button and how your code gets graded.",
            "Start Tutorial",
            "Skip",
        )
    } else {
        (
            "NEW OPERATOR DETECTED",
            "No prior session data on record. Run the initialization sequence to calibrate the editor, the output buffer and the evaluation uplink?",
            "RUN_INIT_SEQUENCE",
            "BYPASS",
        )
    };
    html! {
        <div class="overlay">
            <div class="card" style="padding:28px 36px; max-width:520px; width:90%; line-height:1.4;">
                <h2 style="margin:0 0 12px 0; font-size:22px; color:var(--primary); text-align:center;">{ title }</h2>
                <p style="margin:4px 0 16px 0; text-align:center; opacity:0.85;">{ body }</p>
                <div style="display:flex; gap:12px; justify-content:center;">
                    <button class="btn" onclick={accept_cb}>{ yes }</button>
                    <button class="btn secondary" onclick={decline_cb}>{ no }</button>
                </div>
            </div>
        </div>
    }
}
