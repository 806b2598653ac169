use yew::prelude::*;

use super::card::Card;
use crate::catalog::chapter_name;
use crate::model::Level;

#[derive(Properties, PartialEq, Clone)]
pub struct BriefingProps {
    pub level: &'static Level,
    pub plain: bool,
    pub on_start: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(Briefing)]
pub fn briefing(props: &BriefingProps) -> Html {
    let level = props.level;
    let plain = props.plain;
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="screen centered">
            <Card title={AttrValue::from(if plain { "Lesson Briefing" } else { "MISSION BRIEFING" })} style={AttrValue::from("max-width:640px; width:100%;")}>
                <div style="padding:20px; display:flex; flex-direction:column; gap:14px;">
                    <div style="font-size:11px; opacity:0.7;">
                        { format!("{} // {} // {}", chapter_name(level.chapter, plain), level.id, level.language) }
                    </div>
                    <h2 style="margin:0; color:var(--primary);">{ level.title }</h2>
                    <p style="margin:0; line-height:1.5;">{ level.description_for(plain) }</p>
                    <div class="objective">
                        <div style="font-size:10px; opacity:0.7;">{ if plain { "Your goal" } else { "PRIMARY OBJECTIVE" } }</div>
                        <div style="font-weight:700;">{ level.objective_for(plain) }</div>
                    </div>
                    <div style="font-size:11px; opacity:0.7;">{ format!("DIFFICULTY: {}", level.difficulty) }</div>
                    <div style="display:flex; gap:12px; justify-content:flex-end;">
                        <button class="btn secondary" onclick={back_cb}>{ if plain { "Back" } else { "ABORT" } }</button>
                        <button class="btn" onclick={start_cb}>{ if plain { "Start" } else { "ENGAGE" } }</button>
                    </div>
                </div>
            </Card>
        </div>
    }
}
