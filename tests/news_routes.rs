// tests/news_routes.rs
mod support;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::Value;
use support::{
    INVALID_TOKEN, TestApp, assert_error_response, assert_redirect, body_json, day, field_messages,
    fixed_now, seed_users, token_for,
};

const COMMENT_TEXT: &str = "Текст комментария";

/// ニュースと作者・読者の二人を用意する
async fn app_with_news() -> (TestApp, support::Users, i64) {
    let app = TestApp::new().await;
    let users = seed_users(&app).await;
    let news_id = app.seed_news("Заголовок", day(2024, 1, 1)).await;
    (app, users, news_id)
}

#[tokio::test]
async fn root_redirects_to_news_list() {
    let app = TestApp::new().await;
    let resp = app.get("/", None).await;
    assert_eq!(assert_redirect(&resp), "/news/");
}

#[tokio::test]
async fn home_page_is_capped_and_sorted_newest_first() {
    let app = TestApp::with_home_page_size(3).await;
    for (index, d) in [5, 1, 9, 3, 7].into_iter().enumerate() {
        app.seed_news(&format!("Новость {index}"), day(2024, 1, d)).await;
    }

    let resp = app.get("/news/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-01-09", "2024-01-07", "2024-01-05"]);
}

#[tokio::test]
async fn home_page_shows_everything_when_below_cap() {
    let app = TestApp::new().await;
    app.seed_news("Одна", day(2024, 2, 1)).await;
    app.seed_news("Другая", day(2024, 2, 2)).await;

    let json = body_json(app.get("/news/", None).await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn comments_are_listed_oldest_first() {
    let (app, users, news_id) = app_with_news().await;
    let now = fixed_now();
    // inserted out of chronological order on purpose
    let late = app.seed_comment(news_id, users.author, "поздний", now + Duration::days(2)).await;
    let early = app.seed_comment(news_id, users.reader, "ранний", now - Duration::days(3)).await;
    let middle = app.seed_comment(news_id, users.author, "средний", now).await;

    let resp = app.get(&format!("/news/{news_id}/"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let ids: Vec<i64> = json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [early, middle, late]);
    assert_eq!(json["news"]["id"], news_id);
}

#[tokio::test]
async fn comment_form_is_offered_only_to_authenticated_callers() {
    let (app, users, news_id) = app_with_news().await;
    let uri = format!("/news/{news_id}/");

    let anonymous = body_json(app.get(&uri, None).await).await;
    assert!(anonymous.get("form").is_none());

    let token = token_for(users.reader);
    let authed = body_json(app.get(&uri, Some(&token)).await).await;
    let fields = authed["form"]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["name"], "text");
}

#[tokio::test]
async fn unknown_news_is_not_found() {
    let app = TestApp::new().await;
    let resp = app.get("/news/999/", None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let (app, _, news_id) = app_with_news().await;
    let resp = app.get(&format!("/news/{news_id}/"), Some(INVALID_TOKEN)).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED).await;
}

#[tokio::test]
async fn anonymous_comment_redirects_to_login() {
    let (app, _, news_id) = app_with_news().await;
    let uri = format!("/news/{news_id}/");

    let resp = app.post_form(&uri, None, &[("text", COMMENT_TEXT)]).await;
    assert_eq!(assert_redirect(&resp), format!("/auth/login/?next={uri}"));
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn authenticated_user_can_comment() {
    let (app, users, news_id) = app_with_news().await;
    let token = token_for(users.reader);

    let resp = app
        .post_form(&format!("/news/{news_id}/"), Some(&token), &[("text", COMMENT_TEXT)])
        .await;
    assert_eq!(assert_redirect(&resp), format!("/news/{news_id}/#comments"));
    assert_eq!(app.count("comments").await, 1);

    let json = body_json(app.get(&format!("/news/{news_id}/"), None).await).await;
    let comment = &json["comments"][0];
    assert_eq!(comment["text"], COMMENT_TEXT);
    assert_eq!(comment["author_id"], users.reader);
    assert_eq!(comment["news_id"], news_id);
}

#[tokio::test]
async fn comment_with_bad_word_is_rejected() {
    let (app, users, news_id) = app_with_news().await;
    let token = token_for(users.reader);

    let resp = app
        .post_form(
            &format!("/news/{news_id}/"),
            Some(&token),
            &[("text", "Какой-то текст, редиска, еще текст")],
        )
        .await;
    let json = assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(field_messages(&json, "text"), ["Не ругайтесь!"]);
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let (app, users, news_id) = app_with_news().await;
    let token = token_for(users.reader);

    let resp = app
        .post_form(&format!("/news/{news_id}/"), Some(&token), &[("text", "")])
        .await;
    let json = assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert!(!field_messages(&json, "text").is_empty());
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn comment_on_unknown_news_is_not_found() {
    let app = TestApp::new().await;
    let users = seed_users(&app).await;
    let token = token_for(users.reader);

    let resp = app
        .post_form("/news/42/", Some(&token), &[("text", COMMENT_TEXT)])
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn author_can_edit_comment() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let token = token_for(users.author);

    let form = body_json(app.get(&format!("/news/{comment}/edit"), Some(&token)).await).await;
    assert_eq!(form["comment"]["text"], COMMENT_TEXT);
    assert_eq!(form["form"]["fields"][0]["value"], COMMENT_TEXT);

    let resp = app
        .post_form(&format!("/news/{comment}/edit"), Some(&token), &[("text", "Обновлённый")])
        .await;
    assert_eq!(assert_redirect(&resp), format!("/news/{news_id}/#comments"));
    assert_eq!(app.comment_text(comment).await.as_deref(), Some("Обновлённый"));
}

#[tokio::test]
async fn author_can_delete_comment() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let token = token_for(users.author);

    let resp = app.delete(&format!("/news/{comment}/delete"), Some(&token)).await;
    assert_eq!(assert_redirect(&resp), format!("/news/{news_id}/#comments"));
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn delete_also_accepts_post() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let token = token_for(users.author);

    let resp = app
        .post_form(&format!("/news/{comment}/delete"), Some(&token), &[])
        .await;
    assert_redirect(&resp);
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn other_users_comment_is_invisible_for_editing() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let token = token_for(users.reader);

    let resp = app.get(&format!("/news/{comment}/edit"), Some(&token)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;

    let resp = app
        .post_form(&format!("/news/{comment}/edit"), Some(&token), &[("text", "Чужой")])
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
    assert_eq!(app.comment_text(comment).await.as_deref(), Some(COMMENT_TEXT));
}

#[tokio::test]
async fn other_users_comment_cannot_be_deleted() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let token = token_for(users.reader);

    let resp = app.delete(&format!("/news/{comment}/delete"), Some(&token)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
    assert_eq!(app.count("comments").await, 1);
}

#[tokio::test]
async fn anonymous_edit_and_delete_redirect_to_login() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;

    let edit = format!("/news/{comment}/edit");
    let resp = app.get(&edit, None).await;
    assert_eq!(assert_redirect(&resp), format!("/auth/login/?next={edit}"));

    let delete = format!("/news/{comment}/delete");
    let resp = app.delete(&delete, None).await;
    assert_eq!(assert_redirect(&resp), format!("/auth/login/?next={delete}"));

    assert_eq!(app.count("comments").await, 1);
}

#[tokio::test]
async fn comment_dates_are_rfc3339() {
    let (app, users, news_id) = app_with_news().await;
    app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;

    let json = body_json(app.get(&format!("/news/{news_id}/"), None).await).await;
    let created = json["comments"][0]["created"].as_str().map(str::to_string);
    assert_eq!(created.as_deref(), Some("2024-01-01T12:00:00.000000Z"));
    assert!(matches!(json["news"]["date"], Value::String(_)));
}

#[tokio::test]
async fn anonymous_writes_redirect_before_body_is_read() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;

    for uri in [format!("/news/{news_id}/"), format!("/news/{comment}/edit")] {
        let resp = app.post_empty(&uri, None).await;
        assert_eq!(assert_redirect(&resp), format!("/auth/login/?next={uri}"));
    }
    assert_eq!(app.count("comments").await, 1);
    assert_eq!(app.comment_text(comment).await.as_deref(), Some(COMMENT_TEXT));
}

#[tokio::test]
async fn unreadable_edit_body_hides_foreign_comment() {
    let (app, users, news_id) = app_with_news().await;
    let comment = app.seed_comment(news_id, users.author, COMMENT_TEXT, fixed_now()).await;
    let uri = format!("/news/{comment}/edit");

    let resp = app.post_empty(&uri, Some(&token_for(users.reader))).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;

    let resp = app.post_empty(&uri, Some(&token_for(users.author))).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.comment_text(comment).await.as_deref(), Some(COMMENT_TEXT));
}

#[tokio::test]
async fn unreadable_comment_body_is_bad_request() {
    let (app, users, news_id) = app_with_news().await;

    let resp = app
        .post_empty(&format!("/news/{news_id}/"), Some(&token_for(users.reader)))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.count("comments").await, 0);
}

#[tokio::test]
async fn non_numeric_ids_are_not_found() {
    let (app, users, _) = app_with_news().await;
    let token = token_for(users.author);

    let resp = app.get("/news/abc/", None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;

    let resp = app.get("/news/99999999999999999999/edit", Some(&token)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;

    let resp = app.delete("/news/abc/delete", Some(&token)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
}
