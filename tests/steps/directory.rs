//! Step definitions that script the mock postal directory

use crate::common::world::LookupWorld;
use cucumber::given;
use serde_json::json;
use tracing::debug;

#[given("the postal directory is running")]
async fn given_directory_running(world: &mut LookupWorld) {
    world.start_directory().await;
    debug!("Mock directory at {}", world.server().uri());
}

#[given(expr = "the directory knows pincode {string} with offices {string}")]
async fn given_directory_knows(world: &mut LookupWorld, code: String, offices: String) {
    let names: Vec<&str> = offices.split(',').map(str::trim).collect();
    world
        .mount_reply(&code, 200, LookupWorld::success_body(&names))
        .await;
}

#[given(expr = "the directory rejects pincode {string} with message {string}")]
async fn given_directory_rejects(world: &mut LookupWorld, code: String, message: String) {
    world
        .mount_reply(
            &code,
            200,
            json!([{ "Message": message, "Status": "Error", "PostOffice": null }]),
        )
        .await;
}

#[given(expr = "the directory rejects pincode {string} without a message")]
async fn given_directory_rejects_silently(world: &mut LookupWorld, code: String) {
    world
        .mount_reply(&code, 200, json!([{ "Status": "Error", "PostOffice": null }]))
        .await;
}

#[given(expr = "the directory fails with HTTP {int} for pincode {string}")]
async fn given_directory_fails(world: &mut LookupWorld, status: u16, code: String) {
    world.mount_reply(&code, status, json!({})).await;
}

#[given(expr = "the directory answers pincode {string} with body {string}")]
async fn given_directory_answers_raw(world: &mut LookupWorld, code: String, body: String) {
    world.mount_raw_reply(&code, &body).await;
}
