use std::sync::{Arc, Mutex};

use uuid::Uuid;

use capvote_admin::error::AdminServiceError;
use capvote_admin::usecase::flavor::{
    CreateFlavorUseCase, DeleteFlavorUseCase, ListFlavorsUseCase, UpdateFlavorUseCase,
};

use crate::helpers::{MockFlavorRepo, test_flavor, test_step};

// ── ListFlavorsUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_flavors_ordered_by_name() {
    let usecase = ListFlavorsUseCase {
        flavor_repo: MockFlavorRepo::new(vec![
            test_flavor("Wordplay"),
            test_flavor("Absurdist"),
            test_flavor("Puns"),
        ]),
    };

    let flavors = usecase.execute().await.unwrap();

    let names: Vec<_> = flavors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Absurdist", "Puns", "Wordplay"]);
}

// ── CreateFlavorUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_flavor_with_trimmed_name() {
    let mock_repo = MockFlavorRepo::empty();
    let flavors_handle = mock_repo.flavors_handle();

    let usecase = CreateFlavorUseCase {
        flavor_repo: mock_repo,
    };

    let flavor = usecase
        .execute("  Puns  ", " groan-inducing wordplay ")
        .await
        .unwrap();

    assert_eq!(flavor.name, "Puns");
    assert_eq!(flavor.description, "groan-inducing wordplay");

    let stored = flavors_handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, flavor.id);
    assert_eq!(stored[0].name, "Puns");
}

#[tokio::test]
async fn should_reject_flavor_with_blank_name() {
    let mock_repo = MockFlavorRepo::empty();
    let flavors_handle = mock_repo.flavors_handle();

    let usecase = CreateFlavorUseCase {
        flavor_repo: mock_repo,
    };

    let result = usecase.execute("   ", "description").await;

    assert!(
        matches!(result, Err(AdminServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
    assert!(flavors_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_flavor_name() {
    let usecase = CreateFlavorUseCase {
        flavor_repo: MockFlavorRepo::new(vec![test_flavor("Puns")]),
    };

    let result = usecase.execute("Puns", "another take").await;

    assert!(
        matches!(result, Err(AdminServiceError::FlavorNameTaken)),
        "expected FlavorNameTaken, got {result:?}"
    );
}

// ── UpdateFlavorUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_flavor_name_and_description() {
    let flavor = test_flavor("Puns");
    let flavor_id = flavor.id;

    let mock_repo = MockFlavorRepo::new(vec![flavor]);
    let flavors_handle = mock_repo.flavors_handle();

    let usecase = UpdateFlavorUseCase {
        flavor_repo: mock_repo,
    };

    usecase
        .execute(flavor_id, " Wordplay ", "puns and beyond")
        .await
        .unwrap();

    let stored = flavors_handle.lock().unwrap();
    assert_eq!(stored[0].name, "Wordplay");
    assert_eq!(stored[0].description, "puns and beyond");
}

#[tokio::test]
async fn should_allow_update_keeping_own_name() {
    let flavor = test_flavor("Puns");
    let flavor_id = flavor.id;

    let usecase = UpdateFlavorUseCase {
        flavor_repo: MockFlavorRepo::new(vec![flavor]),
    };

    // Same name, new description. The uniqueness check must skip the
    // flavor being updated.
    usecase
        .execute(flavor_id, "Puns", "refreshed description")
        .await
        .unwrap();
}

#[tokio::test]
async fn should_reject_update_to_taken_name() {
    let puns = test_flavor("Puns");
    let puns_id = puns.id;

    let usecase = UpdateFlavorUseCase {
        flavor_repo: MockFlavorRepo::new(vec![puns, test_flavor("Wordplay")]),
    };

    let result = usecase.execute(puns_id, "Wordplay", "collision").await;

    assert!(
        matches!(result, Err(AdminServiceError::FlavorNameTaken)),
        "expected FlavorNameTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_updating_missing_flavor() {
    let usecase = UpdateFlavorUseCase {
        flavor_repo: MockFlavorRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4(), "Puns", "").await;

    assert!(
        matches!(result, Err(AdminServiceError::FlavorNotFound)),
        "expected FlavorNotFound, got {result:?}"
    );
}

// ── DeleteFlavorUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_flavor_and_its_steps() {
    let doomed = test_flavor("Puns");
    let doomed_id = doomed.id;
    let survivor = test_flavor("Wordplay");
    let survivor_id = survivor.id;

    let steps = Arc::new(Mutex::new(vec![
        test_step(doomed_id, 1),
        test_step(doomed_id, 2),
        test_step(survivor_id, 1),
    ]));

    let mock_repo = MockFlavorRepo::with_steps(vec![doomed, survivor], Arc::clone(&steps));
    let flavors_handle = mock_repo.flavors_handle();

    let usecase = DeleteFlavorUseCase {
        flavor_repo: mock_repo,
    };

    usecase.execute(doomed_id).await.unwrap();

    let remaining_flavors = flavors_handle.lock().unwrap();
    assert_eq!(remaining_flavors.len(), 1);
    assert_eq!(remaining_flavors[0].id, survivor_id);

    let remaining_steps = steps.lock().unwrap();
    assert_eq!(remaining_steps.len(), 1);
    assert_eq!(remaining_steps[0].flavor_id, survivor_id);
}

#[tokio::test]
async fn should_return_not_found_deleting_missing_flavor() {
    let usecase = DeleteFlavorUseCase {
        flavor_repo: MockFlavorRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;

    assert!(
        matches!(result, Err(AdminServiceError::FlavorNotFound)),
        "expected FlavorNotFound, got {result:?}"
    );
}
