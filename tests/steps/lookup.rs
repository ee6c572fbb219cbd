//! Step definitions for driving the lookup controller

use crate::common::world::LookupWorld;
use cucumber::{then, when};
use pinpoint::QueryStatus;
use tracing::info;

#[when(expr = "I type {string}")]
async fn when_i_type(world: &mut LookupWorld, raw: String) {
    info!("Typing {raw:?}");
    world.controller().set_input(&raw);
}

#[when("I clear the lookup")]
async fn when_i_clear(world: &mut LookupWorld) {
    world.controller().clear();
}

#[when("the lookup finishes")]
async fn when_lookup_finishes(world: &mut LookupWorld) {
    world.controller().wait_until_settled().await;
}

#[then(expr = "the input should be {string}")]
async fn then_input_should_be(world: &mut LookupWorld, expected: String) {
    assert_eq!(world.controller().input(), expected);
}

#[then(expr = "the status should be {string}")]
async fn then_status_should_be(world: &mut LookupWorld, expected: String) {
    let expected = match expected.as_str() {
        "idle" => QueryStatus::Idle,
        "loading" => QueryStatus::Loading,
        "success" => QueryStatus::Success,
        "error" => QueryStatus::Error,
        other => panic!("Unknown status '{other}'"),
    };
    assert_eq!(world.controller().status(), expected);
}

#[then(expr = "the results should be {string}")]
async fn then_results_should_be(world: &mut LookupWorld, expected: String) {
    let names: Vec<String> = world
        .controller()
        .results()
        .iter()
        .map(|location| location.name.clone())
        .collect();
    let expected: Vec<String> = expected.split(',').map(|n| n.trim().to_string()).collect();
    assert_eq!(names, expected);
}

#[then("there should be no results")]
async fn then_no_results(world: &mut LookupWorld) {
    assert!(world.controller().results().is_empty());
}

#[then(expr = "the error message should be {string}")]
async fn then_error_message_should_be(world: &mut LookupWorld, expected: String) {
    assert_eq!(world.controller().error_message(), Some(expected.as_str()));
}

#[then("there should be no error message")]
async fn then_no_error_message(world: &mut LookupWorld) {
    assert_eq!(world.controller().error_message(), None);
}

#[then(expr = "the directory should have received {int} request(s)")]
async fn then_directory_requests(world: &mut LookupWorld, expected: usize) {
    let received = world
        .server()
        .received_requests()
        .await
        .unwrap_or_default();
    assert_eq!(received.len(), expected);
}
