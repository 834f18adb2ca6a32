// tests/search_service.rs
mod support;

use kawara_core::application::error::ApplicationError;
use kawara_core::application::queries::PostQueryService;
use std::sync::Arc;
use std::time::Duration;
use support::builders::{PostBuilder, fresh_post_store};
use support::mocks::stores::{CountingPostStore, DelayedPostStore, FailingPostStore};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn short_queries_never_touch_the_store() {
    let counting = Arc::new(CountingPostStore::new(fresh_post_store()));
    let service = PostQueryService::new(counting.clone(), TIMEOUT);

    assert!(service.search("", 10).await.unwrap().is_empty());
    assert!(service.search("a", 10).await.unwrap().is_empty());
    assert!(service.search("  R  ", 10).await.unwrap().is_empty());
    assert_eq!(counting.total(), 0);
}

#[tokio::test]
async fn title_prefix_and_exact_tag_merge_by_recency() {
    let store = fresh_post_store();
    // Older: matched through its title prefix.
    let guide = PostBuilder::new("React Hooks Guide").insert_into(&store).await;
    // Newer: unrelated title, matched through the exact tag.
    let tagged = PostBuilder::new("Unrelated")
        .tags(["React"])
        .insert_into(&store)
        .await;
    PostBuilder::new("Zebra Patterns").insert_into(&store).await;

    let service = PostQueryService::new(store, TIMEOUT);
    let results = service.search("React", 10).await.unwrap();

    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [tagged.id.as_str(), guide.id.as_str()],
        "both signals present, newest first"
    );
}

#[tokio::test]
async fn posts_matching_both_signals_appear_once() {
    let store = fresh_post_store();
    let both = PostBuilder::new("React Patterns")
        .tags(["React"])
        .insert_into(&store)
        .await;

    let service = PostQueryService::new(store, TIMEOUT);
    let results = service.search("React", 10).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, both.id.as_str());
}

#[tokio::test]
async fn tag_matching_is_exact_and_case_sensitive() {
    let store = fresh_post_store();
    PostBuilder::new("Unrelated One")
        .tags(["react"])
        .insert_into(&store)
        .await;
    PostBuilder::new("Unrelated Two")
        .tags(["React Native"])
        .insert_into(&store)
        .await;

    let service = PostQueryService::new(store, TIMEOUT);
    assert!(service.search("React", 10).await.unwrap().is_empty());
    assert_eq!(service.search("react", 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn title_match_is_a_prefix_not_a_substring() {
    let store = fresh_post_store();
    PostBuilder::new("Advanced React").insert_into(&store).await;
    let prefixed = PostBuilder::new("React in Depth").insert_into(&store).await;

    let service = PostQueryService::new(store, TIMEOUT);
    let results = service.search("React", 10).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, prefixed.id.as_str());
}

#[tokio::test]
async fn results_are_truncated_to_the_limit_after_the_merge() {
    let store = fresh_post_store();
    for index in 0..4 {
        PostBuilder::new(format!("Rust Diary {index}"))
            .insert_into(&store)
            .await;
    }
    for index in 0..4 {
        PostBuilder::new(format!("Unrelated {index}"))
            .tags(["Rust"])
            .insert_into(&store)
            .await;
    }

    let service = PostQueryService::new(store, TIMEOUT);
    let results = service.search("Rust", 5).await.unwrap();

    assert_eq!(results.len(), 5);
    let mut sorted = results.clone();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    assert_eq!(
        results.iter().map(|p| &p.id).collect::<Vec<_>>(),
        sorted.iter().map(|p| &p.id).collect::<Vec<_>>(),
        "merged list is recency-ordered"
    );
}

#[tokio::test]
async fn store_failure_is_an_error_not_an_empty_result() {
    let service = PostQueryService::new(Arc::new(FailingPostStore), TIMEOUT);
    let outcome = service.search("React", 10).await;
    assert!(outcome.is_err());
}

#[tokio::test(start_paused = true)]
async fn the_two_search_signals_are_fetched_concurrently() {
    // Each leg takes 700ms; run sequentially they would need 1.4s. The
    // 1s bound must cover the whole search, so only concurrent execution
    // can finish in time.
    let slow = DelayedPostStore::new(fresh_post_store(), Duration::from_millis(700));
    let service = PostQueryService::new(Arc::new(slow), Duration::from_secs(1));

    let started = tokio::time::Instant::now();
    service.search("React", 10).await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(700));
}

#[tokio::test(start_paused = true)]
async fn stalled_store_reads_time_out() {
    let slow = DelayedPostStore::new(fresh_post_store(), Duration::from_secs(60));
    let service = PostQueryService::new(Arc::new(slow), Duration::from_secs(1));

    let outcome = service.search("React", 10).await;
    assert!(matches!(outcome, Err(ApplicationError::Timeout(_))));
}

#[tokio::test]
async fn posts_by_tag_returns_all_matches_newest_first() {
    let store = fresh_post_store();
    let older = PostBuilder::new("Alpha").tags(["rust"]).insert_into(&store).await;
    let newer = PostBuilder::new("Beta").tags(["rust"]).insert_into(&store).await;
    PostBuilder::new("Gamma").tags(["go"]).insert_into(&store).await;

    let service = PostQueryService::new(store, TIMEOUT);
    let results = service.posts_by_tag("rust").await.unwrap();

    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, [newer.id.as_str(), older.id.as_str()]);
}

#[tokio::test]
async fn post_by_id_absence_is_ok_none() {
    let store = fresh_post_store();
    let post = PostBuilder::new("Lonely").insert_into(&store).await;
    let service = PostQueryService::new(store, TIMEOUT);

    assert!(
        service
            .post_by_id(&post.id)
            .await
            .unwrap()
            .is_some()
    );
    let missing = kawara_core::domain::post::PostId::new("missing").unwrap();
    assert!(service.post_by_id(&missing).await.unwrap().is_none());
}
