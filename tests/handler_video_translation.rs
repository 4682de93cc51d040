mod common;

use common::{Reply, TestContext};
use serde_json::{Value, json};

fn webhook(record: Value) -> Value {
    json!({
        "type": "INSERT",
        "table": "video_articles",
        "schema": "public",
        "record": record,
        "old_record": null
    })
}

#[tokio::test]
async fn test_video_webhook_without_record() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/auto-translate-video")
        .json(&json!({ "type": "INSERT", "table": "video_articles" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "No record data received"
    );
    assert_eq!(ctx.translations.len(), 0);
}

#[tokio::test]
async fn test_video_webhook_without_id() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for record in [json!({ "title": "Launch" }), json!({ "id": " ", "title": "Launch" })] {
        let response = server
            .post("/auto-translate-video")
            .json(&webhook(record))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"]["message"],
            "Video ID is required"
        );
    }

    assert!(ctx.translator.calls().is_empty());
}

#[tokio::test]
async fn test_video_webhook_stores_one_row_per_language() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/auto-translate-video")
        .json(&webhook(json!({
            "id": "v1",
            "title": "Launch day",
            "source_name": "Daily News",
            "platform_name": "YouTube"
        })))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["video_id"], "v1");
    assert_eq!(json["translations_created"], 6);
    assert_eq!(json["total_languages"], 6);
    assert_eq!(json["verified_count"], 6);
    assert_eq!(json["results"].as_array().unwrap().len(), 6);
    assert_eq!(json["results"][0]["title_translated"], true);

    let row = ctx.translations.row("v1", "zh").unwrap();
    assert_eq!(row.translated_title.as_deref(), Some("Launch day [zh]"));
    assert_eq!(row.translated_source_name.as_deref(), Some("Daily News [zh]"));
    assert_eq!(row.translated_platform_name.as_deref(), Some("YouTube [zh]"));
}

#[tokio::test]
async fn test_video_webhook_is_idempotent() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let body = webhook(json!({ "id": "v1", "title": "Launch day" }));

    server.post("/auto-translate-video").json(&body).await.assert_status_ok();

    ctx.translator.reply("es", Reply::Fixed("Día de lanzamiento".to_string()));
    let response = server.post("/auto-translate-video").json(&body).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["verified_count"], 6);
    assert_eq!(ctx.translations.len(), 6);
    assert_eq!(
        ctx.translations.row("v1", "es").unwrap().translated_title.as_deref(),
        Some("Día de lanzamiento")
    );
}

#[tokio::test]
async fn test_video_webhook_numeric_id() {
    let ctx = TestContext::new().with_fanout("fr");
    let server = ctx.server();

    let response = server
        .post("/auto-translate-video")
        .json(&webhook(json!({ "id": 17, "title": "Launch" })))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["video_id"], 17);
    assert!(ctx.translations.row("17", "fr").is_some());
}

#[tokio::test]
async fn test_video_webhook_write_failure_stores_fallback() {
    let ctx = TestContext::new().with_fanout("es,fr");
    ctx.translations
        .fail_once
        .lock()
        .unwrap()
        .insert("fr".to_string());
    let server = ctx.server();

    let response = server
        .post("/auto-translate-video")
        .json(&webhook(json!({ "id": "v1", "title": "Launch", "source_name": "Daily" })))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["translations_created"], 1);
    assert_eq!(json["total_languages"], 2);
    assert_eq!(json["verified_count"], 2);
    assert_eq!(json["results"][1]["success"], false);
    assert_eq!(json["results"][1]["fallback_written"], true);

    let fallback = ctx.translations.row("v1", "fr").unwrap();
    assert_eq!(fallback.translated_title.as_deref(), Some("Launch"));
    assert_eq!(fallback.translated_source_name.as_deref(), Some("Daily"));
    assert_eq!(fallback.translated_platform_name, None);
}

#[tokio::test]
async fn test_video_webhook_failed_read_back_is_null() {
    let ctx = TestContext::new().with_fanout("es");
    *ctx.translations.fail_count.lock().unwrap() = true;
    let server = ctx.server();

    let response = server
        .post("/auto-translate-video")
        .json(&webhook(json!({ "id": "v1", "title": "Launch" })))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["translations_created"], 1);
    assert!(json["verified_count"].is_null());
}
