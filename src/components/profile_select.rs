use yew::prelude::*;

use super::card::Card;
use super::profile_stats::ProfileStats;
use crate::model::Profile;
use crate::state::{MAX_PROFILES, ProfileRoster};

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileSelectProps {
    pub profiles: Vec<Profile>,
    pub on_select: Callback<String>,
    pub on_create: Callback<()>,
    pub on_delete: Callback<String>,
    pub on_back: Callback<()>,
}

#[function_component(ProfileSelect)]
pub fn profile_select(props: &ProfileSelectProps) -> Html {
    let cards: Vec<Html> = props
        .profiles
        .iter()
        .map(|profile| {
            let select_cb = {
                let cb = props.on_select.clone();
                let id = profile.id.clone();
                Callback::from(move |_| cb.emit(id.clone()))
            };
            let delete_cb = {
                let cb = props.on_delete.clone();
                let id = profile.id.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    cb.emit(id.clone())
                })
            };
            let footer = if ProfileRoster::is_protected(&profile.id) {
                html! { <div class="badge danger">{"SYSTEM ADMIN"}</div> }
            } else {
                html! { <button class="btn danger small" onclick={delete_cb}>{"WIPE_USER"}</button> }
            };
            html! {
                <Card title={AttrValue::from(profile.name.clone())}>
                    <div class="clickable" style="padding:12px; display:flex; flex-direction:column; gap:12px;" onclick={select_cb}>
                        <ProfileStats profile={profile.clone()} />
                        { footer }
                    </div>
                </Card>
            }
        })
        .collect();

    let create_cb = {
        let cb = props.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="screen centered">
            <h2 class="heading">{"User Registry"}</h2>
            <div class="grid">
                { for cards }
                { if props.profiles.len() < MAX_PROFILES {
                    html!{
                        <Card title={AttrValue::from("NEW_REGISTRY")} style={AttrValue::from("border-style:dashed;")}>
                            <div class="clickable" style="height:120px; display:flex; align-items:center; justify-content:center; font-weight:700;" onclick={create_cb}>
                                {"+ Initialize User"}
                            </div>
                        </Card>
                    }
                } else { html!{} } }
            </div>
            <button class="btn secondary" onclick={back_cb}>{"Exit to BIOS"}</button>
        </div>
    }
}
