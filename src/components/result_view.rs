use yew::prelude::*;

use super::card::Card;
use crate::model::{GameSession, Level};

#[derive(Properties, PartialEq, Clone)]
pub struct ResultViewProps {
    pub session: GameSession,
    /// Present for standard sessions only.
    #[prop_or_default]
    pub level: Option<&'static Level>,
    pub plain: bool,
    pub on_continue: Callback<()>,
    pub on_retry: Callback<()>,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let plain = props.plain;
    let session = &props.session;
    let continue_btn = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retry_btn = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let heading = match (session.is_retention(), plain) {
        (true, true) => "Time's Up!",
        (true, false) => "RETENTION SEQUENCE TERMINATED",
        (false, true) => "Lesson Complete",
        (false, false) => "MISSION DEBRIEF",
    };
    let details = match session.retention_score {
        Some(nodes) => html! {
            <p style="margin:4px 0; font-size:18px;">{ format!("{}: {}", if plain { "Challenges solved" } else { "NODES CLEARED" }, nodes) }</p>
        },
        None => html! {
            <>
                { match props.level {
                    Some(level) => html!{ <p style="margin:4px 0; opacity:0.8;">{ format!("{} // {}", level.id, level.title) }</p> },
                    None => html!{},
                } }
                <p style="margin:4px 0;">{ format!("{}: {}%", if plain { "Score" } else { "ACCURACY" }, session.accuracy) }</p>
                <p style="margin:4px 0;">{ format!("{}: {}", if plain { "Time" } else { "TIME_ELAPSED" }, session.time_elapsed) }</p>
                <p style="margin:4px 0;">{ format!("{}: {}", if plain { "Tries" } else { "ATTEMPTS" }, session.attempts) }</p>
                <Card title={AttrValue::from(if plain { "Your code" } else { "SUBMITTED_PAYLOAD" })} style={AttrValue::from("margin-top:12px; text-align:left;")}>
                    <pre class="console" style="max-height:240px;">{ session.code.clone() }</pre>
                </Card>
            </>
        },
    };
    html! {
        <div class="screen centered">
            <div class="card" style="padding:24px 32px; text-align:center; min-width:320px; max-width:640px; width:100%;">
                <h2 style="margin:0 0 12px 0; color:var(--primary);">{ heading }</h2>
                <div class="grade-letter big">{ session.grade.letter() }</div>
                { details }
                <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                    <button class="btn secondary" onclick={retry_btn}>{ if plain { "Try Again" } else { "RETRY" } }</button>
                    <button class="btn" onclick={continue_btn}>{ if plain { "Continue" } else { "RETURN_TO_DIRECTORY" } }</button>
                </div>
            </div>
        </div>
    }
}
