use yew::prelude::*;

use crate::catalog::QUOTES;
use crate::util::random_index;

const BANNER: &str = r"
  _____ _   _  ____  ____  _____ _____
 | ____| \ | |/ ___|/ __ \|  _  \ ____|
 |  _| |  \| | |   | |  | | | | |  _|
 | |___| |\  | |___| |__| | |_| | |___
 |_____|_| \_|\____|\____/|____/|_____|
      - PROJECT ENCODE TERMINAL V2.5 -
";

#[derive(Properties, PartialEq, Clone)]
pub struct MainMenuProps {
    pub on_start: Callback<()>,
    pub on_configure: Callback<()>,
}

#[function_component(MainMenu)]
pub fn main_menu(props: &MainMenuProps) -> Html {
    let quote = use_state(|| QUOTES[random_index(QUOTES.len())]);
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let configure_cb = {
        let cb = props.on_configure.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="screen centered">
            <pre class="banner">{ BANNER }</pre>
            <div style="display:flex; flex-direction:column; gap:12px; width:100%; max-width:360px;">
                <button class="btn" onclick={start_cb.clone()}>{"Initialize System"}</button>
                <button class="btn" onclick={start_cb}>{"User Profiles"}</button>
                <button class="btn" onclick={configure_cb}>{"Configuration"}</button>
            </div>
            <p style="margin-top:32px; font-style:italic; opacity:0.6;">{ format!("\"{}\"", *quote) }</p>
        </div>
    }
}
