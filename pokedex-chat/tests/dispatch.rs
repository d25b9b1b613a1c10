//! Integration Tests — Chat Dispatch
//!
//! Messages go in as a chat user would type them; replies come out as the
//! lines the bot would send.

use std::sync::Arc;

use proptest::prelude::*;

use pokedex_chat::config::ChatSection;
use pokedex_chat::dispatch::UNKNOWN_GAME;
use pokedex_chat::{
    ChannelSettings, DispatchError, Dispatcher, MemorySettings, RecordingSink,
};
use pokedex_core::config::PokedexConfig;
use pokedex_core::error::PokedexError;
use pokedex_core::store::SqliteStore;
use pokedex_core::Pokedex;

const FIXTURE: &str = include_str!("../../pokedex-core/tests/fixtures/gen1.sql");

fn dispatcher_with(settings: Arc<MemorySettings>, chat: ChatSection) -> Dispatcher {
    let store = SqliteStore::from_script(FIXTURE).expect("fixture loads");
    let pokedex = Pokedex::new(&PokedexConfig::default(), Arc::new(store));
    Dispatcher::new(Arc::new(pokedex), settings, chat)
}

fn dispatcher() -> Dispatcher {
    dispatcher_with(Arc::new(MemorySettings::new()), ChatSection::default())
}

async fn reply(dispatcher: &Dispatcher, channel: &str, message: &str) -> Vec<String> {
    dispatcher
        .handle(channel, message)
        .await
        .expect("dispatch succeeds")
        .expect("message is a command")
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pokedex_command_answers_with_report_lines() {
    let dispatcher = dispatcher();
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokedex bulbasaur").await,
        vec![
            "Pokemon Name: Bulbasaur, Pokedex Number: 1, Weight: 15 lbs (6.9kg), Height: 2'4\" (0.7m)",
            "Pokedex: A strange seed was planted on its back at birth.",
        ]
    );
}

#[tokio::test]
async fn multi_word_queries_are_kept_whole() {
    let dispatcher = dispatcher();
    let lines = reply(&dispatcher, "#kanto", "!pokemove body slam").await;
    assert!(lines[0].starts_with("Move Name: Body Slam"), "{lines:?}");
}

#[tokio::test]
async fn suffix_changes_the_listing() {
    let dispatcher = dispatcher();
    let summary = reply(&dispatcher, "#kanto", "!pokelearn bulbasaur").await;
    let level = reply(&dispatcher, "#kanto", "!pokelearn-level bulbasaur").await;
    assert_eq!(summary.len(), 3);
    assert_eq!(level[1], "---: Tackle");

    let wild = reply(&dispatcher, "#kanto", "!pokewild-full route 1").await;
    assert_eq!(wild[1], "Grass Encounters:");
}

#[tokio::test]
async fn not_found_is_an_ordinary_reply() {
    let dispatcher = dispatcher();
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokelocation nowhere").await,
        vec!["Location Not Found"]
    );
}

#[tokio::test]
async fn missing_argument_answers_with_usage() {
    let dispatcher = dispatcher();
    for (message, usage) in [
        ("!pokedex", "Please specify a pokemon or a number"),
        ("!pokeindex", "Please specify a number"),
        ("!poketmhm-full", "Please specify a move"),
        ("!pokefish", "Please specify a location or a number"),
        ("!pokelearn-tmhm   ", "Please specify a pokemon or a number or a move"),
    ] {
        assert_eq!(reply(&dispatcher, "#kanto", message).await, vec![usage]);
    }
}

#[tokio::test]
async fn other_messages_are_ignored() {
    let dispatcher = dispatcher();
    for message in ["hello", "!pokemon pikachu", "!pokedex-full bulbasaur", ""] {
        let handled = dispatcher.handle("#kanto", message).await.expect("no fault");
        assert!(handled.is_none(), "{message}");
    }
}

#[tokio::test]
async fn custom_prefix() {
    let chat = ChatSection {
        command_prefix: "?".to_string(),
        ..ChatSection::default()
    };
    let dispatcher = dispatcher_with(Arc::new(MemorySettings::new()), chat);
    assert!(dispatcher
        .handle("#kanto", "!pokedex bulbasaur")
        .await
        .expect("no fault")
        .is_none());
    assert_eq!(reply(&dispatcher, "#kanto", "?pokestats 16").await.len(), 2);
}

#[tokio::test]
async fn respond_delivers_lines_to_the_channel() {
    let dispatcher = dispatcher();
    let sink = RecordingSink::new();
    let sent = dispatcher
        .respond("#kanto", "!pokeevolve eevee", &sink)
        .await
        .expect("delivered");
    assert_eq!(sent, 2);
    assert_eq!(
        sink.lines_for("#kanto"),
        vec![
            "Pokemon Name: Eevee, Pokedex Number: 133",
            "Evolves to Vaporeon with item Water Stone",
        ]
    );

    let ignored = dispatcher
        .respond("#kanto", "good game", &sink)
        .await
        .expect("nothing to deliver");
    assert_eq!(ignored, 0);
    assert_eq!(sink.len(), 2);
}

// ---------------------------------------------------------------------------
// !pokegame
// ---------------------------------------------------------------------------

#[tokio::test]
async fn game_defaults_to_red() {
    let dispatcher = dispatcher();
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokegame").await,
        vec!["Bot Pokedex is currently set to Red"]
    );
}

#[tokio::test]
async fn game_is_set_per_channel() {
    let settings = Arc::new(MemorySettings::new());
    let dispatcher = dispatcher_with(settings.clone(), ChatSection::default());

    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokegame Yellow").await,
        vec!["Set the Bot Pokedex to Pokemon Yellow"]
    );
    assert_eq!(settings.game("#kanto").as_deref(), Some("yellow"));
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokegame").await,
        vec!["Bot Pokedex is currently set to Yellow"]
    );
    assert_eq!(
        reply(&dispatcher, "#johto", "!pokegame").await,
        vec!["Bot Pokedex is currently set to Red"]
    );

    let yellow = reply(&dispatcher, "#kanto", "!pokedex bulbasaur").await;
    assert_eq!(
        yellow[1],
        "Pokedex: It can go for days without eating a single morsel."
    );
}

#[tokio::test]
async fn unknown_game_is_rejected() {
    let settings = Arc::new(MemorySettings::new());
    let dispatcher = dispatcher_with(settings.clone(), ChatSection::default());
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokegame gold").await,
        vec![UNKNOWN_GAME]
    );
    assert!(settings.game("#kanto").is_none());
}

#[tokio::test]
async fn stale_channel_game_is_answered_not_raised() {
    let settings = Arc::new(MemorySettings::new());
    settings.set_game("#kanto", "crystal");
    let dispatcher = dispatcher_with(settings, ChatSection::default());
    assert_eq!(
        reply(&dispatcher, "#kanto", "!pokedex bulbasaur").await,
        vec![UNKNOWN_GAME]
    );
}

// ---------------------------------------------------------------------------
// Faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_fault_is_raised() {
    let broken = SqliteStore::from_script("CREATE TABLE unrelated (id INTEGER);")
        .expect("script runs");
    let pokedex = Pokedex::new(&PokedexConfig::default(), Arc::new(broken));
    let dispatcher = Dispatcher::new(
        Arc::new(pokedex),
        Arc::new(MemorySettings::new()),
        ChatSection::default(),
    );
    let err = dispatcher
        .handle("#kanto", "!pokedex bulbasaur")
        .await
        .expect_err("dataset has no tables");
    assert!(matches!(
        err,
        DispatchError::Pokedex(PokedexError::ReferenceStore(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_channels_do_not_interfere() {
    let settings = Arc::new(MemorySettings::new());
    settings.set_game("#yellow", "yellow");
    let dispatcher = Arc::new(dispatcher_with(settings, ChatSection::default()));

    let mut handles = Vec::new();
    for i in 0..16 {
        let dispatcher = Arc::clone(&dispatcher);
        let channel = if i % 2 == 0 { "#red" } else { "#yellow" };
        handles.push(tokio::spawn(async move {
            let lines = dispatcher
                .handle(channel, "!pokewild route 1")
                .await
                .expect("no fault")
                .expect("command");
            (channel, lines)
        }));
    }
    for handle in handles {
        let (channel, lines) = handle.await.expect("task completes");
        let expected = if channel == "#red" {
            "Grass Encounters: Pidgey L2 - L5 @ 59.8%, Rattata L2 - L4 @ 40.2%"
        } else {
            "Grass Encounters: Pidgey L3 - L5 @ 100.0%"
        };
        assert_eq!(lines[1], expected);
    }
    assert_eq!(dispatcher.pokedex().counters().snapshot().requests, 16);
}

// ---------------------------------------------------------------------------
// Property: non-commands never reach the Pokédex
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn plain_chat_is_ignored(message in "[a-zA-Z0-9 ,.?]{0,40}") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        let dispatcher = dispatcher();
        let handled = runtime
            .block_on(dispatcher.handle("#kanto", &message))
            .expect("no fault");
        prop_assert!(handled.is_none());
        prop_assert_eq!(dispatcher.pokedex().counters().snapshot().requests, 0);
    }
}
