use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::app::GameContext;
use super::card::Card;
use super::code_editor::CodeEditor;
use super::output_pane::OutputPane;
use super::time_display::TimeDisplay;
use crate::catalog::{DISCOVERY_OBJECTIVE, is_discovery};
use crate::grading::GradeResponse;
use crate::model::{GameSession, Grade, Level};
use crate::state::{SecondTicker, SessionMode, StandardSession, paste_warning};

#[derive(Properties, PartialEq, Clone)]
pub struct GameplayProps {
    pub level: &'static Level,
    pub on_finish: Callback<GameSession>,
    pub on_exit: Callback<()>,
}

#[function_component(Gameplay)]
pub fn gameplay(props: &GameplayProps) -> Html {
    let ctx = use_context::<GameContext>().expect("GameContext");
    let plain = ctx.settings.plain_language;
    let session = {
        let level = props.level;
        use_mut_ref(move || StandardSession::new(level, plain))
    };
    let redraw = use_force_update();

    // Clock lives exactly as long as the screen.
    {
        let session = session.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let ticker = {
                let session = session.clone();
                SecondTicker::start(move || {
                    session.borrow_mut().tick();
                    redraw.force_update();
                })
            };
            move || {
                drop(ticker);
                session.borrow_mut().abandon();
            }
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
                    log::debug!("grade for ticket {ticket} arrived after the screen closed");
                    return;
                };
                let applied = session.borrow_mut().apply_grade(ticket, response);
                if applied {
                    redraw.force_update();
                } else {
                    log::info!("dropping stale grade for ticket {ticket}");
                }
            });
        })
    };
    let on_commit = {
        let session = session.clone();
        let cb = props.on_finish.clone();
        Callback::from(move |_| {
            let finished = session.borrow().commit();
            if let Some(s) = finished {
                cb.emit(s);
            }
        })
    };
    let on_edit = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            session.borrow_mut().edit();
            redraw.force_update();
        })
    };
    let exit_cb = {
        let cb = props.on_exit.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let s = session.borrow();
    let level = s.level();
    let evaluating = s.is_evaluating();
    let warning = paste_warning(ctx.settings.anti_cheat_enabled(), plain, SessionMode::Standard);
    let idle_text = if plain { "Click Run to preview your code." } else { "> AWAITING EXECUTION..." };

    html! {
        <div class="screen gameplay">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <div>
                    <div style="font-size:10px; opacity:0.6;">{ format!("{} // {}", level.id, level.language) }</div>
                    <h2 style="margin:0; color:var(--primary);">{ level.title }</h2>
                </div>
                <TimeDisplay label={AttrValue::from(if plain { "Time" } else { "ELAPSED" })} secs={s.elapsed_secs()} />
                <button class="btn secondary" onclick={exit_cb}>{ if plain { "Exit" } else { "DISCONNECT" } }</button>
            </div>
            <Card title={AttrValue::from(if plain { "Goal" } else { "OBJECTIVE" })}>
                <div style="padding:10px 12px;">{ level.objective_for(plain) }</div>
            </Card>
            <div class="split">
                <Card title={AttrValue::from(format!("main.{}", level.language.file_extension()))}>
                    <CodeEditor
                        code={AttrValue::from(s.code().to_string())}
                        language={level.language}
                        {on_change}
                        paste_warning={warning}
                        disabled={evaluating || s.result().is_some()}
                    />
                </Card>
                <Card title={AttrValue::from(if plain { "Output" } else { "OUTPUT_BUFFER" })}>
                    <OutputPane preview={s.preview().clone()} idle_text={AttrValue::from(idle_text)} />
                </Card>
            </div>
            <div style="display:flex; gap:12px; justify-content:flex-end;">
                <button class="btn secondary" onclick={on_run} disabled={evaluating}>{ if plain { "Run" } else { "EXECUTE" } }</button>
                <button class="btn" onclick={on_submit} disabled={evaluating || s.result().is_some()}>
                    { if evaluating {
                        if plain { "Checking..." } else { "EVALUATING..." }
                    } else if plain { "Submit" } else { "SUBMIT_FOR_REVIEW" } }
                </button>
            </div>
            { match s.result() {
                Some(result) => html!{ <ReviewPanel level={level} result={result.clone()} {plain} {on_commit} {on_edit} /> },
                None => html!{},
            } }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ReviewPanelProps {
    level: &'static Level,
    result: GradeResponse,
    plain: bool,
    on_commit: Callback<()>,
    on_edit: Callback<()>,
}

/// Grader verdict shown before the player commits or keeps editing.
#[function_component(ReviewPanel)]
fn review_panel(props: &ReviewPanelProps) -> Html {
    let plain = props.plain;
    let commit_cb = {
        let cb = props.on_commit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let edit_cb = {
        let cb = props.on_edit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let grade = Grade::from_score(props.result.score);
    let (reveal_label, reveal) = if is_discovery(props.level) {
        (if plain { "The secret goal" } else { "HIDDEN_OBJECTIVE" }, DISCOVERY_OBJECTIVE)
    } else {
        (if plain { "Expected answer" } else { "REFERENCE_OUTPUT" }, props.level.target_output)
    };
    let verdict_color = if props.result.is_correct { "var(--primary)" } else { "#ff4141" };
    html! {
        <div class="overlay">
            <div class="card" style="padding:24px 32px; min-width:320px; max-width:560px; display:flex; flex-direction:column; gap:12px;">
                <div style="display:flex; justify-content:space-between; align-items:baseline;">
                    <h2 style={format!("margin:0; color:{};", verdict_color)}>
                        { if props.result.is_correct {
                            if plain { "Correct!" } else { "VALIDATION PASSED" }
                        } else if plain { "Not quite" } else { "VALIDATION FAILED" } }
                    </h2>
                    <span class="grade-letter">{ grade.letter() }</span>
                </div>
                <div>{ format!("{}: {}%", if plain { "Score" } else { "ACCURACY" }, props.result.score) }</div>
                <p style="margin:0; line-height:1.5;">{ props.result.feedback.clone() }</p>
                <div class="objective">
                    <div style="font-size:10px; opacity:0.7;">{ reveal_label }</div>
                    <pre style="margin:4px 0 0 0; white-space:pre-wrap;">{ reveal }</pre>
                </div>
                <div style="display:flex; gap:12px; justify-content:flex-end;">
                    <button class="btn secondary" onclick={edit_cb}>{ if plain { "Keep Editing" } else { "EDIT" } }</button>
                    <button class="btn" onclick={commit_cb}>{ if plain { "Continue" } else { "COMMIT" } }</button>
                </div>
            </div>
        </div>
    }
}
