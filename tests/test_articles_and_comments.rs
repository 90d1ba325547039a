//! Single-article reads, vote updates, posting/deleting, and the per-article comment listing.

mod common;

use common::count;
use reqwest::Method;
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn article_by_id_returns_the_stored_row() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server.get_json("/api/articles/1").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["article"],
        json!({
            "article_id": 1,
            "title": "Living in the shadow of a great man",
            "topic": "mitch",
            "author": "butter_bridge",
            "body": "I find this existence challenging",
            "created_at": "2020-07-09T19:11:00Z",
            "votes": 100,
            "article_img_url": "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700"
        })
    );

    let (status, body) = server.get_json("/api/articles/1000").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found");

    let (status, body) = server.get_json("/api/articles/robot").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "bad request");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn vote_increments_accumulate() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server
        .send_json(Method::PATCH, "/api/articles/1", json!({ "inc_votes": 5 }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["article"]["votes"], 105);

    let (status, body) = server
        .send_json(Method::PATCH, "/api/articles/1", json!({ "inc_votes": -10 }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["article"]["votes"], 95);

    let (status, body) = server
        .send_json(Method::PATCH, "/api/articles/1", json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["article"]["votes"], 95);

    let (status, _) = server
        .send_json(Method::PATCH, "/api/articles/1", json!({ "inc_votes": "cat" }))
        .await;
    assert_eq!(status, 400);

    let (status, body) = server
        .send_json(Method::PATCH, "/api/articles/1000", json!({ "inc_votes": 1 }))
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn article_comments_are_paginated_in_id_order() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server.get_json("/api/articles/1/comments").await;
    assert_eq!(status, 200);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 10);
    let ids: Vec<i64> = comments
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    for (i, comment) in comments.iter().enumerate() {
        assert_eq!(comment["article_id"], 1);
        assert_eq!(count(comment, "result"), i as i64 + 1);
        assert_eq!(count(comment, "total_results"), 11);
    }

    let (status, body) = server.get_json("/api/articles/1/comments?limit=10&p=2").await;
    assert_eq!(status, 200);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["result"], "11");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn comment_listing_distinguishes_empty_from_missing_article() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server.get_json("/api/articles/2/comments").await;
    assert_eq!(status, 200);
    assert!(body["comments"].as_array().unwrap().is_empty());

    let (status, body) = server.get_json("/api/articles/1000/comments").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found");

    let (status, body) = server.get_json("/api/articles/1/comments?limit=robot").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "invalid limit request");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn posting_comments() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles/2/comments",
            json!({ "username": "lurker", "body": "Finally, a laptop article." }),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(body["comment"]["article_id"], 2);
    assert_eq!(body["comment"]["author"], "lurker");
    assert_eq!(body["comment"]["votes"], 0);

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles/2/comments",
            json!({ "username": "nobody", "body": "hi" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "username not found");

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles/1000/comments",
            json!({ "username": "lurker", "body": "hi" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found");

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles/2/comments",
            json!({ "username": "lurker" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "bad request");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn comment_votes_and_deletion() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server
        .send_json(Method::PATCH, "/api/comments/12", json!({ "inc_votes": 4 }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["comment"]["votes"], 20);

    assert_eq!(server.delete("/api/comments/12").await, 204);
    assert_eq!(server.delete("/api/comments/12").await, 404);

    let (status, body) = server
        .send_json(Method::PATCH, "/api/comments/12", json!({ "inc_votes": 1 }))
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "comment not found");

    let (status, body) = server.get_json("/api/comments").await;
    assert_eq!(status, 200);
    assert_eq!(body["comments"].as_array().unwrap().len(), 17);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn deleting_an_article_cascades_to_its_comments() {
    let Some(server) = common::start().await else { return };

    assert_eq!(server.delete("/api/articles/1").await, 204);
    assert_eq!(server.delete("/api/articles/1").await, 404);

    let (status, body) = server.get_json("/api/articles/1/comments").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found");

    let (_, body) = server.get_json("/api/comments").await;
    assert_eq!(body["comments"].as_array().unwrap().len(), 7);

    let (_, body) = server.get_json("/api/articles").await;
    assert_eq!(body["articles"][0]["total_results"], "12");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn posting_articles() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles",
            json!({
                "author": "rogersop",
                "title": "On paper",
                "body": "It is what books are made of.",
                "topic": "paper"
            }),
        )
        .await;
    assert_eq!(status, 201);
    let article = &body["article"];
    assert_eq!(article["article_id"], 14);
    assert_eq!(article["votes"], 0);
    assert_eq!(article["comment_count"], 0);
    assert!(article["article_img_url"].as_str().unwrap().starts_with("https://"));

    let (status, body) = server.get_json("/api/articles?topic=paper").await;
    assert_eq!(status, 200);
    assert_eq!(body["articles"].as_array().unwrap().len(), 1);

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles",
            json!({ "author": "rogersop", "title": "t", "body": "b", "topic": "dogs" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "topic not found");

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles",
            json!({ "author": "nobody", "title": "t", "body": "b", "topic": "cats" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "username not found");

    let (status, body) = server
        .send_json(
            Method::POST,
            "/api/articles",
            json!({ "author": "rogersop", "body": "b", "topic": "cats" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "bad request");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn topics_and_users() {
    let Some(server) = common::start().await else { return };

    let (status, body) = server.get_json("/api/topics").await;
    assert_eq!(status, 200);
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0]["slug"], "mitch");
    assert_eq!(topics[0]["description"], "The man, the Mitch, the legend");

    let (status, body) = server.get_json("/api/users").await;
    assert_eq!(status, 200);
    assert_eq!(body["users"].as_array().unwrap().len(), 4);

    let (status, body) = server.get_json("/api/users/lurker").await;
    assert_eq!(status, 200);
    assert_eq!(body["user"]["name"], "do_nothing");

    let (status, body) = server.get_json("/api/users/nobody").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "user not found");
}
