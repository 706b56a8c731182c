use abacus::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use abacus::config::Config;
use abacus::keypad::Mode;
use abacus::screen::render;
use abacus::session::{Session, SessionError};

fn info<'a>(session: &'a Session) -> SessionInfo<'a> {
    SessionInfo {
        mode: session.mode(),
        state: session.state(),
        presses: session.presses(),
        db_path: ":memory:",
    }
}

#[test]
fn lines_accumulate_across_feeds() {
    let mut session = Session::default();
    session.feed("2 +").unwrap();
    session.feed("3").unwrap();
    assert_eq!(session.feed("+ 4 =").unwrap(), "9");
}

#[test]
fn basic_mode_blocks_scientific_keys_until_toggled() {
    let mut session = Session::default();
    assert!(matches!(
        session.feed("2 x²"),
        Err(SessionError::Unavailable { .. })
    ));
    assert_eq!(session.display(), "2");

    session.feed("mode").unwrap();
    assert_eq!(session.feed("x²").unwrap(), "4");
}

#[test]
fn toggling_mode_keeps_pending_chain() {
    let mut session = Session::new(Mode::Scientific);
    session.feed("6 ×").unwrap();
    session.toggle_mode();
    session.toggle_mode();
    assert_eq!(session.feed("7 =").unwrap(), "42");
}

#[tokio::test]
async fn mode_command_result_applies_to_session() {
    let registry = CommandRegistry::new();
    let mut session = Session::default();
    session.feed("5 +").unwrap();

    let result = registry.dispatch("/mode", &info(&session)).await;
    let CommandResult::StateChanged(StateChange::Mode(next)) = result else {
        panic!("expected a mode change");
    };
    if session.mode() != next {
        session.toggle_mode();
    }

    assert_eq!(session.mode(), Mode::Scientific);
    assert_eq!(session.feed("4 =").unwrap(), "9");
}

#[tokio::test]
async fn key_lines_are_not_commands() {
    let registry = CommandRegistry::new();
    let session = Session::default();
    assert!(matches!(
        registry.dispatch("12 × 3 =", &info(&session)).await,
        CommandResult::NotACommand
    ));
    assert!(matches!(
        registry.dispatch("quit", &info(&session)).await,
        CommandResult::Quit
    ));
}

#[test]
fn stored_mode_starts_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abacus.db");
    let path = path.to_str().unwrap();

    {
        let config = Config::open(path).unwrap();
        let mut session = Session::new(config.mode().unwrap());
        session.feed("mode").unwrap();
        config.set_mode(session.mode()).unwrap();
    }

    let config = Config::open(path).unwrap();
    let session = Session::new(config.mode().unwrap());
    assert_eq!(session.mode(), Mode::Scientific);
    assert_eq!(session.display(), "0");
}

#[test]
fn screen_tracks_session() {
    let mut session = Session::new(Mode::Scientific);
    session.feed("12 +").unwrap();
    let screen = render(session.state(), session.mode(), 16);
    assert!(screen.contains("sci"));
    assert!(screen.contains("12 +"));

    session.feed("0 1/x").unwrap();
    let screen = render(session.state(), session.mode(), 16);
    assert!(screen.contains("Error"));
    assert!(!screen.contains("12 +"));
}
