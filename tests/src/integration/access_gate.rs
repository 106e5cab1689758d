//! Gate state machine scenarios.

use super::common::{fields, gate, stores};
use pool_gateway::GateDecision;
use pool_store::{EntryStore, PoolStore};
use shared_types::AccessToken;

#[tokio::test]
async fn test_created_pool_has_distinct_nonempty_tokens() {
    let stores = stores();
    for n in 1..=5 {
        let pool = stores.create_pool(&format!("Pool {n}"), n).await.unwrap();
        assert_ne!(pool.public_token, pool.reveal_token);
        assert!(!pool.public_token.to_string().is_empty());
        assert!(!pool.reveal_token.to_string().is_empty());
    }
}

#[tokio::test]
async fn test_uncredentialed_viewer_gets_submit_form_even_past_threshold() {
    let stores = stores();
    let gate = gate(&stores);
    let pool = stores.create_pool("Eng", 1).await.unwrap();
    stores.insert_entry(pool.id, &fields("Engineer", 50)).await.unwrap();
    stores.insert_entry(pool.id, &fields("Engineer", 60)).await.unwrap();

    let decision = gate.decide(&pool.public_token.to_string(), None).await.unwrap();
    assert!(matches!(decision, GateDecision::SubmitRequired { .. }));
}

#[tokio::test]
async fn test_one_submission_against_three_minimum_stays_hidden() {
    let stores = stores();
    let gate = gate(&stores);
    let pool = stores.create_pool("Eng", 3).await.unwrap();
    stores.insert_entry(pool.id, &fields("Engineer", 50)).await.unwrap();

    let decision = gate
        .decide(
            &pool.public_token.to_string(),
            Some(&pool.reveal_token.to_string()),
        )
        .await
        .unwrap();
    assert!(matches!(decision, GateDecision::InsufficientData { .. }));
}

#[tokio::test]
async fn test_two_submissions_against_two_minimum_reveal_in_order() {
    let stores = stores();
    let gate = gate(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();
    stores.insert_entry(pool.id, &fields("Backend", 70)).await.unwrap();
    stores.insert_entry(pool.id, &fields("Analyst", 55)).await.unwrap();

    match gate
        .decide(
            &pool.public_token.to_string(),
            Some(&pool.reveal_token.to_string()),
        )
        .await
        .unwrap()
    {
        GateDecision::Reveal { entries, .. } => {
            assert_eq!(entries.len(), 2);
            // Title ascending
            assert_eq!(entries[0].fields.title, "Analyst");
            assert_eq!(entries[1].fields.title, "Backend");
        }
        other => panic!("expected reveal, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_public_token_is_not_found() {
    let stores = stores();
    let gate = gate(&stores);
    let unknown = AccessToken::generate().to_string();
    assert!(matches!(
        gate.decide(&unknown, None).await.unwrap(),
        GateDecision::NotFound
    ));
}

#[tokio::test]
async fn test_same_credential_same_state_yields_identical_views() {
    let stores = stores();
    let gate = gate(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();
    stores.insert_entry(pool.id, &fields("Engineer", 80)).await.unwrap();
    stores.insert_entry(pool.id, &fields("Engineer", 75)).await.unwrap();

    let public = pool.public_token.to_string();
    let reveal = pool.reveal_token.to_string();
    let first = match gate.decide(&public, Some(&reveal)).await.unwrap() {
        GateDecision::Reveal { entries, .. } => entries,
        other => panic!("expected reveal, got {other:?}"),
    };
    let second = match gate.decide(&public, Some(&reveal)).await.unwrap() {
        GateDecision::Reveal { entries, .. } => entries,
        other => panic!("expected reveal, got {other:?}"),
    };
    assert_eq!(first, second);
}
