//! Common test utilities for integration tests.
//!
//! Fixtures for portal payloads, an App wired to a `MockHttpClient`, and
//! helpers to collect and deliver fetch results by hand so tests control
//! the order in which responses arrive.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

use littleyears::api::PortalApi;
use littleyears::app::{App, AppMessage};
use littleyears::models::{KidId, Viewer};

pub const BASE_URL: &str = "http://portal.test";
pub const GRANDMA: &str = "grandma@family.demo";
pub const GRANDPA: &str = "grandpa@family.demo";

/// How long to wait for a spawned fetch before giving up.
const RECV_TIMEOUT: Duration = Duration::from_millis(500);

pub fn kid_json(id: u64, name: &str, allowed: &[&str]) -> Value {
    json!({ "id": id, "name": name, "allowed_grandparents": allowed })
}

pub fn moment_json(id: u64, visibility: &str) -> Value {
    json!({
        "id": id,
        "type": "photo",
        "title": format!("Moment {}", id),
        "media_url": format!("https://media.example/{}.jpg", id),
        "visibility": visibility
    })
}

pub fn timeline_json(kid_id: u64, includes_private: bool, moments: Vec<Value>) -> Value {
    json!({ "kid_id": kid_id, "includes_private": includes_private, "moments": moments })
}

/// An App talking to `mock`, with the message receiver handed to the test.
pub fn test_app(mock: &MockHttpClient, viewer: &str) -> (App, UnboundedReceiver<AppMessage>) {
    let api = PortalApi::new(BASE_URL, Arc::new(mock.clone()));
    let mut app = App::with_api(api, viewer);
    let rx = app.message_rx.take().expect("fresh app has a receiver");
    (app, rx)
}

pub fn kids_url(viewer: &str) -> String {
    let api = PortalApi::new(BASE_URL, Arc::new(MockHttpClient::new()));
    api.kids_url(&Viewer::new(viewer))
}

pub fn timeline_url(kid_id: u64, viewer: &str, include_private: bool) -> String {
    let api = PortalApi::new(BASE_URL, Arc::new(MockHttpClient::new()));
    api.timeline_url(&KidId::from(kid_id), &Viewer::new(viewer), include_private)
}

pub fn seed_url() -> String {
    format!("{}/api/seed", BASE_URL)
}

/// Wait for exactly `count` messages without delivering them.
pub async fn collect(rx: &mut UnboundedReceiver<AppMessage>, count: usize) -> Vec<AppMessage> {
    let mut messages = Vec::with_capacity(count);
    while messages.len() < count {
        match tokio::time::timeout(RECV_TIMEOUT, rx.recv()).await {
            Ok(Some(msg)) => messages.push(msg),
            _ => panic!("expected {} messages, got {}", count, messages.len()),
        }
    }
    messages
}

/// Deliver messages until no more arrive. Follow-up fetches triggered by
/// delivered messages are pumped too.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    while let Ok(Some(msg)) = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await {
        app.handle_message(msg);
    }
}

/// Render the app into a `TestBackend` and return the screen as text.
pub fn screen_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| littleyears::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
