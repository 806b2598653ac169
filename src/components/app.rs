use super::{
    briefing::Briefing, gameplay::Gameplay, level_select::LevelSelect, main_menu::MainMenu,
    options_view::OptionsView, profile_select::ProfileSelect, result_view::ResultView,
    retention_view::RetentionView,
};
use crate::grading::GraderHandle;
use crate::model::{GameSession, Level};
use crate::state::settings::REVEAL_ALERT;
use crate::state::{NavEvent, Navigator, ProfileAction, ProfileRoster, RevealGesture, Screen, Settings, SettingsAction};
use crate::storage::{ProfileSync, StorageHandle};
use crate::util::{alert, now_ms};
use yew::prelude::*;

// Settings and grader shared with the gameplay screens.
#[derive(Clone, PartialEq)]
pub struct GameContext {
    pub settings: Settings,
    pub grader: GraderHandle,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub storage: StorageHandle,
    pub grader: GraderHandle,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let settings = {
        let storage = props.storage.clone();
        use_reducer(move || Settings::load(&*storage))
    };
    let profile_sync = use_mut_ref(ProfileSync::default);
    let roster = {
        let storage = props.storage.clone();
        let sync = profile_sync.clone();
        use_reducer(move || ProfileRoster::new(sync.borrow_mut().load(&*storage)))
    };
    let nav = use_reducer(Navigator::default);
    let gesture = use_mut_ref(RevealGesture::default);

    // Persist settings on every change
    {
        let storage = props.storage.clone();
        use_effect_with((*settings).clone(), move |s| {
            if let Err(e) = s.save(&*storage) {
                log::error!("failed to save settings: {e}");
            }
            || ()
        });
    }
    // Persist the whole roster whenever it differs from what is stored
    {
        let storage = props.storage.clone();
        use_effect_with(roster.clone(), move |r| {
            match profile_sync.borrow_mut().sync(&*storage, r.list()) {
                Ok(true) => log::debug!("saved {} profiles", r.len()),
                Ok(false) => {}
                Err(e) => log::error!("failed to save profiles: {e}"),
            }
            || ()
        });
    }
    // Reflect theme and effect flags on the document
    {
        use_effect_with((*settings).clone(), move |s| {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(root) = doc.document_element() {
                    let _ = root.set_attribute("data-theme", s.theme.as_str());
                }
                if let Some(body) = doc.body() {
                    let classes = body.class_list();
                    let _ = classes.toggle_with_force("effects-disabled", s.reduced_effects);
                    let _ = classes.toggle_with_force("red-team-active", s.red_team);
                }
            }
            || ()
        });
    }

    let navigate = |event: fn() -> NavEvent| {
        let nav = nav.clone();
        Callback::from(move |_: ()| nav.dispatch(event()))
    };

    let on_hotspot = {
        let gesture = gesture.clone();
        let settings = settings.clone();
        let profile_active = nav.screen.active_profile().is_some();
        Callback::from(move |_: MouseEvent| {
            let revealed = gesture.borrow_mut().tap(profile_active, settings.red_team_revealed);
            if revealed {
                log::warn!("red team mode revealed");
                settings.dispatch(SettingsAction::RevealRedTeam);
                alert(REVEAL_ALERT);
            }
        })
    };

    let finish_for = |profile_id: &str| {
        let roster = roster.clone();
        let nav = nav.clone();
        let profile_id = profile_id.to_string();
        Callback::from(move |session: GameSession| {
            roster.dispatch(ProfileAction::RecordSession { profile_id: profile_id.clone(), session: session.clone() });
            nav.dispatch(NavEvent::Finish(session));
        })
    };

    let plain = settings.plain_language;
    let content = match &nav.screen {
        Screen::Menu => html! {
            <MainMenu on_start={navigate(|| NavEvent::Start)} on_configure={navigate(|| NavEvent::Configure)} />
        },
        Screen::Options => html! {
            <OptionsView
                settings={settings.clone()}
                max_levels_cleared={roster.max_levels_cleared()}
                on_back={navigate(|| NavEvent::Back)}
            />
        },
        Screen::Profiles => {
            let on_select = {
                let nav = nav.clone();
                Callback::from(move |id: String| nav.dispatch(NavEvent::ChooseProfile(id)))
            };
            let on_create = {
                let roster = roster.clone();
                Callback::from(move |_| {
                    let created = now_ms();
                    let mut trial = (*roster).clone();
                    match trial.create(created) {
                        Ok(_) => roster.dispatch(ProfileAction::Create { created }),
                        Err(e) => alert(e.player_message()),
                    }
                })
            };
            let on_delete = {
                let roster = roster.clone();
                Callback::from(move |id: String| {
                    let mut trial = (*roster).clone();
                    if let Err(e) = trial.delete(&id) {
                        alert(e.player_message());
                        return;
                    }
                    let confirmed = web_sys::window()
                        .map(|win| win.confirm_with_message("Permanently wipe this user and all progress?").unwrap_or(false))
                        .unwrap_or(true);
                    if confirmed {
                        roster.dispatch(ProfileAction::Delete { id });
                    }
                })
            };
            html! {
                <ProfileSelect
                    profiles={roster.list().to_vec()}
                    {on_select}
                    {on_create}
                    {on_delete}
                    on_back={navigate(|| NavEvent::Back)}
                />
            }
        }
        Screen::LevelSelect { profile_id } => match roster.find(profile_id) {
            Some(profile) => {
                let on_choose_level = {
                    let nav = nav.clone();
                    Callback::from(move |level: &'static Level| nav.dispatch(NavEvent::ChooseLevel(level)))
                };
                let on_tutorial_seen = {
                    let roster = roster.clone();
                    let profile_id = profile_id.clone();
                    Callback::from(move |_| {
                        roster.dispatch(ProfileAction::MarkTutorialSeen { profile_id: profile_id.clone() })
                    })
                };
                html! {
                    <LevelSelect
                        profile={profile.clone()}
                        {plain}
                        {on_choose_level}
                        on_retention={navigate(|| NavEvent::StartRetention)}
                        on_back={navigate(|| NavEvent::Back)}
                        {on_tutorial_seen}
                    />
                }
            }
            None => missing_profile(navigate(|| NavEvent::Back)),
        },
        Screen::Briefing { level, .. } => html! {
            <Briefing
                level={*level}
                {plain}
                on_start={navigate(|| NavEvent::StartLevel)}
                on_back={navigate(|| NavEvent::Back)}
            />
        },
        Screen::Gameplay { profile_id, level } => html! {
            <Gameplay
                key={level.id}
                level={*level}
                on_finish={finish_for(profile_id)}
                on_exit={navigate(|| NavEvent::Exit)}
            />
        },
        Screen::Retention { profile_id } => html! {
            <RetentionView on_finish={finish_for(profile_id)} on_exit={navigate(|| NavEvent::Exit)} />
        },
        Screen::Result { level, session, .. } => html! {
            <ResultView
                session={session.clone()}
                level={*level}
                {plain}
                on_continue={navigate(|| NavEvent::Continue)}
                on_retry={navigate(|| NavEvent::Retry)}
            />
        },
    };

    let ctx = GameContext {
        settings: (*settings).clone(),
        grader: props.grader.clone(),
    };

    html! {
        <ContextProvider<GameContext> context={ctx}>
            <div class="app">
                <header class="app-header">
                    <span class="hotspot" onclick={on_hotspot}>{"ENCODE_OS"}</span>
                    <span style="opacity:0.6;">{ format!("v2.5 // {}", nav.screen.name()) }</span>
                </header>
                <main class="app-main">{ content }</main>
            </div>
        </ContextProvider<GameContext>>
    }
}

fn missing_profile(on_back: Callback<()>) -> Html {
    let back_cb = Callback::from(move |_| on_back.emit(()));
    html! {
        <div class="screen centered">
            <p>{"USER RECORD NOT FOUND"}</p>
            <button class="btn secondary" onclick={back_cb}>{"Back"}</button>
        </div>
    }
}
