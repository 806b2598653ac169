use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::app::GameContext;
use super::card::Card;
use super::code_editor::CodeEditor;
use super::output_pane::OutputPane;
use super::time_display::TimeDisplay;
use crate::catalog::LEVELS;
use crate::model::GameSession;
use crate::state::retention::START_SECONDS;
use crate::state::{RetentionSession, SecondTicker, SessionMode, paste_warning};
use crate::util::random_index;

#[derive(Properties, PartialEq, Clone)]
pub struct RetentionViewProps {
    pub on_finish: Callback<GameSession>,
    pub on_exit: Callback<()>,
}

#[function_component(RetentionView)]
pub fn retention_view(props: &RetentionViewProps) -> Html {
    let ctx = use_context::<GameContext>().expect("GameContext");
    let plain = ctx.settings.plain_language;
    let session = use_mut_ref(move || RetentionSession::new(LEVELS, random_index(LEVELS.len()), plain));
    let finished = use_state(|| None::<GameSession>);
    let redraw = use_force_update();

    {
        let session = session.clone();
        let redraw = redraw.clone();
        let finished = finished.clone();
        use_effect_with((), move |_| {
            let ticker = {
                let session = session.clone();
                SecondTicker::start(move || {
                    let done = session.borrow_mut().tick();
                    match done {
                        Some(s) => finished.set(Some(s)),
                        None => redraw.force_update(),
                    }
                })
            };
            move || {
                drop(ticker);
                session.borrow_mut().abort();
            }
        });
    }
    // The run is reported from an effect so the navigator never changes
    // screens from inside the timer callback.
    {
        let cb = props.on_finish.clone();
        use_effect_with((*finished).clone(), move |done| {
            if let Some(s) = done {
                cb.emit(s.clone());
            }
            || ()
        });
    }

    let on_change = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |code: String| {
            session.borrow_mut().set_code(code);
            redraw.force_update();
        })
    };
    let on_run = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            session.borrow_mut().run();
            redraw.force_update();
        })
    };
    let on_submit = {
        let session = session.clone();
        let redraw = redraw.clone();
        let grader = ctx.grader.clone();
        Callback::from(move |_| {
            let Some((ticket, request)) = session.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();
            let weak = Rc::downgrade(&session);
            let grader = grader.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let response = grader.grade(request).await;
                let Some(session) = weak.upgrade() else {
                    return;
                };
                let applied = session.borrow_mut().apply_grade(ticket, &response, random_index(LEVELS.len()));
                if applied {
                    redraw.force_update();
                } else {
                    log::info!("dropping retention grade for ticket {ticket}");
                }
            });
        })
    };
    let on_abort = {
        let session = session.clone();
        let cb = props.on_exit.clone();
        Callback::from(move |_| {
            session.borrow_mut().abort();
            cb.emit(());
        })
    };

    let s = session.borrow();
    let target = s.target();
    let evaluating = s.is_evaluating();
    let warning = paste_warning(ctx.settings.anti_cheat_enabled(), plain, SessionMode::Retention);
    let fill = (s.time_left().min(START_SECONDS) * 100) / START_SECONDS;
    let idle_text = if plain { "Run your code to see it here." } else { "> BUFFER EMPTY" };

    html! {
        <div class="screen gameplay">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <div>
                    <div style="font-size:10px; opacity:0.6;">{ if plain { "Speed Challenge" } else { "RETENTION_PROTOCOL" } }</div>
                    <h2 style="margin:0; color:#facc15;">{ format!("{}: {}", if plain { "Solved" } else { "NODES" }, s.nodes_cleared()) }</h2>
                </div>
                <TimeDisplay label={AttrValue::from(if plain { "Time left" } else { "UPTIME" })} secs={u64::from(s.time_left())} countdown={true} />
                <button class="btn danger" onclick={on_abort}>{ if plain { "Quit" } else { "ABORT" } }</button>
            </div>
            <div class="progress">
                <div class="progress-fill" style={format!("width:{}%;", fill)}></div>
            </div>
            { match s.feedback() {
                Some(f) => html!{
                    <div class={classes!("banner-msg", f.penalty.then_some("penalty"))}>{ f.message }</div>
                },
                None => html!{},
            } }
            <Card title={AttrValue::from(format!("{} // {}", target.title, target.language))}>
                <div style="padding:10px 12px;">{ target.objective_for(plain) }</div>
            </Card>
            <div class="split">
                <Card title={AttrValue::from(format!("node.{}", target.language.file_extension()))}>
                    <CodeEditor
                        code={AttrValue::from(s.code().to_string())}
                        language={target.language}
                        {on_change}
                        paste_warning={warning}
                        disabled={s.is_finished()}
                    />
                </Card>
                <Card title={AttrValue::from(if plain { "Output" } else { "OUTPUT_BUFFER" })}>
                    <OutputPane preview={s.preview().clone()} idle_text={AttrValue::from(idle_text)} />
                </Card>
            </div>
            <div style="display:flex; gap:12px; justify-content:flex-end;">
                <button class="btn secondary" onclick={on_run}>{ if plain { "Run" } else { "EXECUTE" } }</button>
                <button class="btn" onclick={on_submit} disabled={evaluating || s.is_finished()}>
                    { if evaluating {
                        if plain { "Checking..." } else { "EVALUATING..." }
                    } else if plain { "Submit" } else { "UPLOAD" } }
                </button>
            </div>
        </div>
    }
}
