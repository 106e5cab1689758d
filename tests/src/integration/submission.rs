//! Submission workflow scenarios.

use super::common::{stores, valid_form, workflow};
use pool_gateway::ApiError;
use pool_store::{EntryStore, PoolStore};

#[tokio::test]
async fn test_negative_values_store_nothing() {
    let stores = stores();
    let workflow = workflow(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();
    let id = pool.public_token.to_string();

    for (field, value) in [("amount", "-1"), ("hourswk", "-40"), ("yearsexperience", "-2")] {
        let mut form = valid_form(&id, "Engineer", "70000");
        match field {
            "amount" => form.amount = value.to_string(),
            "hourswk" => form.hourswk = value.to_string(),
            _ => form.yearsexperience = value.to_string(),
        }
        assert_eq!(
            workflow.submit(None, &form).await.unwrap_err(),
            ApiError::validation(),
            "{field} should be rejected"
        );
    }
    assert_eq!(stores.count_entries(pool.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_out_of_set_enums_store_nothing() {
    let stores = stores();
    let workflow = workflow(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();
    let id = pool.public_token.to_string();

    let mut form = valid_form(&id, "Engineer", "70000");
    form.remote = "fully".to_string();
    assert_eq!(
        workflow.submit(None, &form).await.unwrap_err(),
        ApiError::validation()
    );

    let mut form = valid_form(&id, "Engineer", "70000");
    form.travel = "weekly".to_string();
    assert_eq!(
        workflow.submit(None, &form).await.unwrap_err(),
        ApiError::validation()
    );

    assert_eq!(stores.count_entries(pool.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_credential_matches_pool_reveal_token() {
    let stores = stores();
    let workflow = workflow(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();

    let issued = workflow
        .submit(None, &valid_form(&pool.public_token.to_string(), "Engineer", "70000"))
        .await
        .unwrap();
    assert_eq!(issued.reveal_token, pool.reveal_token);
    assert_eq!(stores.count_entries(pool.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_cookie_clearing_allows_resubmission() {
    // The duplicate check is advisory: it sees only the client's own
    // cookie. A cleared cookie means a second entry goes through.
    let stores = stores();
    let workflow = workflow(&stores);
    let pool = stores.create_pool("Eng", 2).await.unwrap();
    let id = pool.public_token.to_string();

    workflow.submit(None, &valid_form(&id, "Engineer", "70000")).await.unwrap();
    assert_eq!(
        workflow
            .submit(
                Some(&pool.reveal_token.to_string()),
                &valid_form(&id, "Engineer", "71000"),
            )
            .await
            .unwrap_err(),
        ApiError::already_submitted()
    );

    workflow.submit(None, &valid_form(&id, "Engineer", "71000")).await.unwrap();
    assert_eq!(stores.count_entries(pool.id).await.unwrap(), 2);
}
