use yew::prelude::*;

use super::card::Card;
use super::tutorial_prompt::TutorialPrompt;
use crate::catalog::{TUTORIAL_START_ID, chapter_name, chapters, find_level};
use crate::model::{Level, Profile};

#[derive(Properties, PartialEq, Clone)]
pub struct LevelSelectProps {
    pub profile: Profile,
    pub plain: bool,
    pub on_choose_level: Callback<&'static Level>,
    pub on_retention: Callback<()>,
    pub on_back: Callback<()>,
    pub on_tutorial_seen: Callback<()>,
}

#[function_component(LevelSelect)]
pub fn level_select(props: &LevelSelectProps) -> Html {
    let plain = props.plain;

    let sections: Vec<Html> = chapters()
        .into_iter()
        .map(|(chapter, levels)| {
            let tiles: Vec<Html> = levels
                .into_iter()
                .map(|level| {
                    let choose_cb = {
                        let cb = props.on_choose_level.clone();
                        Callback::from(move |_| cb.emit(level))
                    };
                    let done = props.profile.has_reached(level);
                    html! {
                        <button class={classes!("level-tile", done.then_some("reached"))} onclick={choose_cb}>
                            <div style="display:flex; justify-content:space-between; font-size:10px; opacity:0.7;">
                                <span>{ level.id }</span>
                                <span>{ level.language.as_str() }</span>
                            </div>
                            <div style="font-weight:700; margin:6px 0;">{ level.title }</div>
                            <div style="display:flex; justify-content:space-between; font-size:10px;">
                                <span>{ level.difficulty.to_string() }</span>
                                { if done { html!{ <span style="color:var(--primary);">{ if plain { "Reached" } else { "REACHED" } }</span> } } else { html!{} } }
                            </div>
                        </button>
                    }
                })
                .collect();
            html! {
                <Card title={AttrValue::from(chapter_name(chapter, plain))}>
                    <div class="grid" style="padding:12px;">{ for tiles }</div>
                </Card>
            }
        })
        .collect();

    let retention_cb = {
        let cb = props.on_retention.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let accept_tutorial = {
        let seen = props.on_tutorial_seen.clone();
        let choose = props.on_choose_level.clone();
        Callback::from(move |_| {
            seen.emit(());
            if let Some(level) = find_level(TUTORIAL_START_ID) {
                choose.emit(level);
            }
        })
    };
    let decline_tutorial = {
        let seen = props.on_tutorial_seen.clone();
        Callback::from(move |_| seen.emit(()))
    };

    html! {
        <div class="screen">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px; flex-wrap:wrap;">
                <div>
                    <h2 class="heading" style="margin:0;">{ if plain { "Choose a Lesson" } else { "Mission Directory" } }</h2>
                    <div style="font-size:12px; opacity:0.7;">{ format!("OPERATOR: {}", props.profile.name) }</div>
                </div>
                <div style="display:flex; gap:8px;">
                    <button class="btn warn" onclick={retention_cb}>{ if plain { "Speed Challenge" } else { "RETENTION_PROTOCOL" } }</button>
                    <button class="btn secondary" onclick={back_cb}>{ if plain { "Back" } else { "LOGOUT" } }</button>
                </div>
            </div>
            <div style="display:flex; flex-direction:column; gap:16px; margin-top:16px;">{ for sections }</div>
            { if !props.profile.has_seen_tutorial_prompt {
                html!{ <TutorialPrompt {plain} on_accept={accept_tutorial} on_decline={decline_tutorial} /> }
            } else { html!{} } }
        </div>
    }
}
