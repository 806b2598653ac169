// End-to-end flows over the pure game core. Nothing here touches the browser,
// so the suite runs natively under `cargo test`.

use std::rc::Rc;

use encode_terminal::catalog::{DISCOVERY_LEVEL_ID, LEVELS, find_level};
use encode_terminal::grading::{GradeFuture, GradeRequest, GradeResponse, Grader, GraderHandle};
use encode_terminal::model::{GameSession, Grade, Profile, Theme};
use encode_terminal::state::{
    ADMIN_PROFILE_ID, NavEvent, Navigator, ProfileAction, ProfileError, ProfileRoster, RetentionSession, Screen,
    Settings, SettingsAction, StandardSession,
};
use encode_terminal::storage::{KeyValueStore, MemoryStore, ProfileSync, load_profiles, save_profiles};
use futures::executor::block_on;
use yew::Reducible;

/// Grader that answers every request with a fixed score.
struct FixedGrader(u8);

impl Grader for FixedGrader {
    fn grade(&self, _request: GradeRequest) -> GradeFuture {
        let score = self.0;
        Box::pin(async move {
            GradeResponse { score, feedback: format!("scored {score}"), is_correct: score >= 50 }
        })
    }
}

fn standard_session(id: &str, accuracy: u8, secs: u64) -> GameSession {
    GameSession::standard(find_level(id).unwrap(), "code".into(), accuracy, secs, 1)
}

fn navigate(nav: Rc<Navigator>, events: Vec<NavEvent>) -> Rc<Navigator> {
    events.into_iter().fold(nav, |n, e| n.reduce(e))
}

#[test]
fn first_profile_clears_the_discovery_level() {
    let mut roster = Rc::new(ProfileRoster::default());
    roster = roster.reduce(ProfileAction::Create { created: 1_700_000_000_000 });
    let profile = roster.list()[0].clone();
    assert_eq!(profile.name, "USR_1");
    assert_eq!(profile.levels_completed, 0);

    let level = find_level(DISCOVERY_LEVEL_ID).unwrap();
    let nav = navigate(
        Rc::new(Navigator::default()),
        vec![
            NavEvent::Start,
            NavEvent::ChooseProfile(profile.id.clone()),
            NavEvent::ChooseLevel(level),
            NavEvent::StartLevel,
        ],
    );
    assert!(matches!(nav.screen, Screen::Gameplay { level: l, .. } if l.id == DISCOVERY_LEVEL_ID));

    let grader = GraderHandle::new(FixedGrader(3));
    let mut session = StandardSession::new(level, false);
    session.set_code("anything at all".into());
    for _ in 0..12 {
        session.tick();
    }
    let (ticket, request) = session.begin_submit().unwrap();
    let response = block_on(grader.grade(request));
    assert!(session.apply_grade(ticket, response));
    assert_eq!(session.result().unwrap().score, 100);

    let finished = session.commit().unwrap();
    assert_eq!(finished.grade, Grade::S);
    assert_eq!(finished.time_elapsed, "0:12");

    roster = roster.reduce(ProfileAction::RecordSession { profile_id: profile.id.clone(), session: finished.clone() });
    let nav = nav.reduce(NavEvent::Finish(finished));
    assert!(matches!(nav.screen, Screen::Result { .. }));

    let updated = roster.find(&profile.id).unwrap();
    assert_eq!(updated.levels_completed, 1);
    assert_eq!(updated.accuracy_rate, 100);
    assert_eq!(updated.fastest_clear, Some(12));
}

#[test]
fn retention_penalty_then_reward() {
    let mut run = RetentionSession::new(LEVELS, 0, false);
    for _ in 0..50 {
        assert!(run.tick().is_none());
    }
    assert_eq!(run.time_left(), 40);

    let (t, _) = run.begin_submit().unwrap();
    assert!(run.apply_grade(t, &GradeResponse { score: 20, feedback: String::new(), is_correct: false }, 4));
    assert_eq!(run.time_left(), 35);

    let (t, _) = run.begin_submit().unwrap();
    run.set_code("<h1>partial</h1>".into());
    assert!(run.apply_grade(t, &GradeResponse { score: 80, feedback: String::new(), is_correct: true }, 4));
    assert_eq!(run.time_left(), 50);
    assert_eq!(run.nodes_cleared(), 1);
    assert_eq!(run.target().id, LEVELS[4].id);
    assert_ne!(run.code(), "<h1>partial</h1>");
}

#[test]
fn retention_fail_then_clear_from_a_fresh_clock() {
    let mut run = RetentionSession::new(LEVELS, 0, false);
    assert_eq!(run.time_left(), 90);
    let first_target = run.target().id;
    run.set_code("<h1>draft</h1>".into());

    let (t, _) = run.begin_submit().unwrap();
    assert!(run.apply_grade(t, &GradeResponse { score: 40, feedback: String::new(), is_correct: false }, 4));
    assert_eq!(run.time_left(), 85);
    assert_eq!(run.nodes_cleared(), 0);
    assert_eq!(run.target().id, first_target);
    assert_eq!(run.code(), "<h1>draft</h1>");

    let (t, _) = run.begin_submit().unwrap();
    assert!(run.apply_grade(t, &GradeResponse { score: 80, feedback: String::new(), is_correct: true }, 4));
    assert_eq!(run.time_left(), 100);
    assert_eq!(run.nodes_cleared(), 1);
    assert_ne!(run.target().id, first_target);
    assert_eq!(run.target().id, LEVELS[4].id);
    assert_ne!(run.code(), "<h1>draft</h1>");
}

#[test]
fn profiles_written_by_the_web_app_load_intact() {
    let raw = r#"[{"id":"1700000000000","name":"USR_1","levelsCompleted":2,"errorsMade":0,"accuracyRate":88,"fastestClear":"--:--","retentionBest":3,"created":1700000000000}]"#;
    let store = MemoryStore::new();
    store.set("encode_profiles", raw).unwrap();

    let mut sync = ProfileSync::default();
    let loaded = sync.load(&store);
    assert_eq!(loaded.len(), 1);
    let p = &loaded[0];
    assert_eq!(p.id, "1700000000000");
    assert_eq!(p.levels_completed, 2);
    assert_eq!(p.accuracy_rate, 88);
    assert_eq!(p.retention_best, 3);
    assert_eq!(p.fastest_clear, None);

    assert!(!sync.sync(&store, &loaded).unwrap());
    assert_eq!(store.get("encode_profiles").as_deref(), Some(raw));
}

#[test]
fn new_profile_has_no_level_marked() {
    let roster = Rc::new(ProfileRoster::default()).reduce(ProfileAction::Create { created: 5 });
    let profile = &roster.list()[0];
    assert!(LEVELS.iter().all(|level| !profile.has_reached(level)));
}

#[test]
fn admin_profile_survives_delete() {
    let mut admin = Profile::new(ADMIN_PROFILE_ID, "ARCHITECT", 0);
    admin.levels_completed = 4;
    let mut roster = ProfileRoster::new(vec![admin]);
    assert_eq!(
        roster.delete(ADMIN_PROFILE_ID).unwrap_err(),
        ProfileError::Protected { id: ADMIN_PROFILE_ID.into() }
    );
    let roster = Rc::new(roster).reduce(ProfileAction::Delete { id: ADMIN_PROFILE_ID.into() });
    assert_eq!(roster.len(), 1);
}

#[test]
fn progress_never_regresses() {
    let mut roster = Rc::new(ProfileRoster::default());
    roster = roster.reduce(ProfileAction::Create { created: 7 });
    let id = roster.list()[0].id.clone();
    let strong = standard_session("2-2", 96, 40);
    let weak = standard_session("0-3", 10, 5);
    roster = roster.reduce(ProfileAction::RecordSession { profile_id: id.clone(), session: strong });
    let before = roster.find(&id).unwrap().clone();
    roster = roster.reduce(ProfileAction::RecordSession { profile_id: id.clone(), session: weak });
    assert_eq!(roster.find(&id).unwrap(), &before);
}

#[test]
fn roster_and_reveal_survive_reload() {
    let store = MemoryStore::new();
    let mut roster = ProfileRoster::default();
    roster.create(1).unwrap();
    roster.create(2).unwrap();
    save_profiles(&store, roster.list()).unwrap();

    let settings = Rc::new(Settings::load(&store))
        .reduce(SettingsAction::RevealRedTeam)
        .reduce(SettingsAction::ToggleRedTeam);
    settings.save(&store).unwrap();

    assert_eq!(load_profiles(&store), roster.list());
    let reloaded = Settings::load(&store);
    assert!(reloaded.red_team_revealed);
    assert!(reloaded.red_team);
    assert!(!reloaded.anti_cheat_enabled());
    assert_eq!(reloaded.theme, Theme::Terminal);
}

#[test]
fn corrupt_profile_blob_loads_empty() {
    let store = MemoryStore::new();
    store.set("encode_profiles", "{not json").unwrap();
    assert!(load_profiles(&store).is_empty());
}
