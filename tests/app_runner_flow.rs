mod common;

use std::{sync::Arc, time::Duration};

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;
use worldaware::{
    core::state::{intel::AWAITING_CONNECTION, ui::Tab, AppState},
    infrastructure::{
        gemini::IntelProvider,
        tui::{event_source::EventSource, test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

use common::{test_config, ticker, CannedProvider, FailingProvider, REPLY};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn runner(
    provider: Arc<dyn IntelProvider>,
    events: Vec<Event>,
) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let concrete = Arc::new(Mutex::new(TestTui::new(120, 40)?));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&concrete);
    let runner = AppRunner::new(
        test_config(),
        tui,
        EventSource::test(events),
        provider,
        ticker("NVDA"),
    );
    Ok((runner, concrete))
}

/// Step the runner until `done` holds, failing after one second.
async fn run_until(runner: &mut AppRunner, done: impl Fn(&AppState) -> bool) -> Result<()> {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !done(runner.state()) {
            runner.run_one_cycle_for_tests().await?;
        }
        Ok::<_, color_eyre::Report>(())
    })
    .await
    .map_err(|_| eyre!("condition not reached in time"))?
}

#[tokio::test]
async fn test_startup_fetch_fills_the_dashboard() -> Result<()> {
    let (mut runner, tui) = runner(Arc::new(CannedProvider::new(REPLY)), vec![])?;

    run_until(&mut runner, |state| state.intel.probability == 72).await?;
    runner.render_for_tests().await?;

    let state = runner.state();
    assert!(state.intel.is_live);
    assert!(!state.intel.is_loading);
    assert_eq!(state.intel.citations.len(), 1);

    let tui = tui.lock().await;
    assert!(tui.screen_contains("WorldAware"));
    assert!(tui.screen_contains("72%"));
    assert!(tui.screen_contains("Strong data-center demand"));
    assert!(tui.screen_contains("Reuters"));
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_shows_awaiting_connection() -> Result<()> {
    let (mut runner, tui) = runner(Arc::new(FailingProvider), vec![])?;

    run_until(&mut runner, |state| state.intel.summary == AWAITING_CONNECTION).await?;
    runner.render_for_tests().await?;

    assert!(!runner.state().intel.is_loading);
    assert_eq!(runner.state().intel.probability, 50);
    assert!(!runner.state().intel.is_live);
    assert!(tui.lock().await.screen_contains(AWAITING_CONNECTION));
    Ok(())
}

#[tokio::test]
async fn test_number_key_switches_tab_and_renders() -> Result<()> {
    let (mut runner, tui) = runner(
        Arc::new(CannedProvider::new(REPLY)),
        vec![key('2'), Event::Render],
    )?;

    runner.run_one_cycle_for_tests().await?;
    assert_eq!(runner.state().ui.active_tab, Tab::SituationRoom);

    runner.run_one_cycle_for_tests().await?;
    assert!(tui.lock().await.screen_contains("SITUATION ROOM: NVDA"));
    Ok(())
}

#[tokio::test]
async fn test_search_changes_ticker() -> Result<()> {
    let (mut runner, _tui) = runner(
        Arc::new(CannedProvider::new(REPLY)),
        vec![
            key('/'),
            key('t'),
            key('s'),
            key('l'),
            key('a'),
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        ],
    )?;

    let tsla = ticker("TSLA");
    run_until(&mut runner, |state| state.ticker() == &tsla).await?;
    assert_eq!(runner.state().market.probability.ticker, tsla);

    run_until(&mut runner, |state| !state.is_busy()).await?;
    assert_eq!(runner.state().intel.probability, 72);
    assert!(runner.state().ui.search.content.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_quit_event_stops_the_runner() -> Result<()> {
    let (mut runner, _tui) = runner(Arc::new(FailingProvider), vec![Event::Quit])?;

    runner.run_one_cycle_for_tests().await?;

    assert!(runner.state().system.should_quit);
    assert_eq!(runner.state().ticker(), &ticker("NVDA"));
    Ok(())
}

#[tokio::test]
async fn test_run_enters_and_restores_terminal() -> Result<()> {
    let (mut runner, tui) = runner(Arc::new(FailingProvider), vec![Event::Quit])?;

    runner.run().await?;

    assert!(runner.state().system.should_quit);
    let tui = tui.lock().await;
    assert_eq!(tui.session_counts(), (1, 1));
    assert!(tui.draw_count() >= 1);
    Ok(())
}
