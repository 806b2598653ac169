use yew::prelude::*;

use super::card::Card;
use crate::model::Theme;
use crate::state::{Settings, SettingsAction};

#[derive(Properties, PartialEq, Clone)]
pub struct OptionsViewProps {
    pub settings: UseReducerHandle<Settings>,
    /// Best `levels_completed` across all profiles; gates theme unlocks.
    pub max_levels_cleared: u32,
    pub on_back: Callback<()>,
}

#[function_component(OptionsView)]
pub fn options_view(props: &OptionsViewProps) -> Html {
    let settings = &*props.settings;
    let plain = settings.plain_language;
    let max_cleared = props.max_levels_cleared;

    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_plain_cb = {
        let s = props.settings.clone();
        Callback::from(move |_| s.dispatch(SettingsAction::TogglePlainLanguage))
    };
    let toggle_effects_cb = {
        let s = props.settings.clone();
        Callback::from(move |_| s.dispatch(SettingsAction::ToggleReducedEffects))
    };
    let toggle_red_team_cb = {
        let s = props.settings.clone();
        Callback::from(move |_| s.dispatch(SettingsAction::ToggleRedTeam))
    };

    let themes: Vec<Html> = Theme::ALL
        .iter()
        .map(|&theme| {
            let unlocked = theme.is_unlocked(max_cleared);
            let active = settings.theme == theme;
            let pick_cb = {
                let s = props.settings.clone();
                Callback::from(move |_| {
                    s.dispatch(SettingsAction::SetTheme { theme, max_levels_cleared: max_cleared })
                })
            };
            html! {
                <button
                    class={classes!("theme-tile", active.then_some("active"))}
                    disabled={!unlocked}
                    onclick={pick_cb}
                >
                    <div style="font-weight:700;">{ theme.display_name() }</div>
                    <div style="font-size:11px; opacity:0.7;">
                        { if unlocked {
                            theme.blurb().to_string()
                        } else {
                            format!("LOCKED: clear {} levels", theme.unlock_threshold())
                        } }
                    </div>
                </button>
            }
        })
        .collect();

    html! {
        <div class="screen centered">
            <h2 class="heading">{ if plain { "Settings" } else { "SYSTEM CONFIGURATION" } }</h2>
            <div style="display:flex; flex-direction:column; gap:16px; width:100%; max-width:560px;">
                <Card title={AttrValue::from(if plain { "Look" } else { "VISUAL_INTERFACE" })}>
                    <div class="grid" style="padding:12px;">{ for themes }</div>
                </Card>
                <Card title={AttrValue::from(if plain { "Accessibility" } else { "ACCESSIBILITY" })}>
                    <div style="padding:12px; display:flex; flex-direction:column; gap:10px;">
                        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                            <input type="checkbox" checked={settings.plain_language} onclick={toggle_plain_cb} />
                            <span>{"Simple Mode (plain-language text)"}</span>
                        </label>
                        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                            <input type="checkbox" checked={settings.reduced_effects} onclick={toggle_effects_cb} />
                            <span>{"Remove Effects (no scanlines or glow)"}</span>
                        </label>
                    </div>
                </Card>
                { if settings.red_team_revealed {
                    html!{
                        <Card title={AttrValue::from("RED_TEAM")} style={AttrValue::from("border-color:#ff4141;")}>
                            <div style="padding:12px; display:flex; flex-direction:column; gap:8px;">
                                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                                    <input type="checkbox" checked={settings.red_team} onclick={toggle_red_team_cb} />
                                    <span>{"Red Team Mode"}</span>
                                </label>
                                <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Disables paste interception in the editor."}</div>
                            </div>
                        </Card>
                    }
                } else { html!{} } }
                <button class="btn secondary" onclick={back_cb}>{ if plain { "Back" } else { "SAVE_AND_EXIT" } }</button>
            </div>
        </div>
    }
}
