use std::sync::Arc;
use std::time::Duration;

use masters_core::models::{Bank, CreateBank};
use masters_core::ValidationError;

use crate::config::ClientConfig;
use crate::masters::{ConfirmKind, DialogState, MasterAction, MasterManager};
use crate::notifications::{NotificationCenter, Severity};
use crate::testing::{bank, bank_repository, MemoryRepository};

fn setup(items: Vec<Bank>) -> (Arc<MemoryRepository<Bank>>, MasterManager<Bank>) {
    let repo = Arc::new(bank_repository(items));
    let manager = MasterManager::new(repo.clone());
    (repo, manager)
}

async fn run(manager: &mut MasterManager<Bank>, action: MasterAction<CreateBank>) {
    manager.dispatch(action);
    manager.update().await;
}

#[tokio::test]
async fn test_load_sorts_by_serial_number() {
    let (_, mut manager) = setup(vec![
        bank("a", "A", None),
        bank("b", "B", Some("02")),
        bank("c", "C", Some("01")),
        bank("d", "D", Some("")),
    ]);

    run(&mut manager, MasterAction::Load).await;

    let ids: Vec<&str> = manager.state().items.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a", "d"]);
    assert!(!manager.state().is_loading);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_list() {
    let (repo, mut manager) = setup(vec![bank("a", "A", None)]);
    run(&mut manager, MasterAction::Load).await;

    *repo.fail_list.lock().unwrap() = true;
    run(&mut manager, MasterAction::Load).await;

    let state = manager.state();
    assert_eq!(state.items.len(), 1);
    let last = state.notifications.last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.detail, "Failed to load Banks");
}

#[tokio::test]
async fn test_invalid_form_makes_no_request() {
    let (repo, mut manager) = setup(vec![]);

    run(&mut manager, MasterAction::OpenNew).await;
    run(&mut manager, MasterAction::Save).await;

    let state = manager.state();
    assert_eq!(repo.count("create"), 0);
    assert!(matches!(state.dialog, DialogState::Creating { submitted: true, .. }));
    assert_eq!(
        state.validation_errors,
        vec![ValidationError::required("Description")]
    );
}

#[tokio::test]
async fn test_create_closes_dialog_and_reloads() {
    let (repo, mut manager) = setup(vec![bank("a", "Zeta", Some("09"))]);
    run(&mut manager, MasterAction::Load).await;

    manager.dispatch(MasterAction::OpenNew);
    manager.dispatch(MasterAction::UpdateForm(CreateBank {
        description: "BCA".to_string(),
        serial_number: Some("01".to_string()),
        ..Default::default()
    }));
    manager.dispatch(MasterAction::Save);
    manager.run_pending().await;

    let state = manager.state();
    assert_eq!(state.dialog, DialogState::Closed);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].description, "BCA");
    assert_eq!(state.notifications.last().unwrap().detail, "Bank Created");
    assert_eq!(repo.count("list"), 2);
}

#[tokio::test]
async fn test_failed_update_keeps_form() {
    let (repo, mut manager) = setup(vec![bank("a", "BCA", None)]);
    run(&mut manager, MasterAction::Load).await;
    *repo.fail_save.lock().unwrap() = Some(409);

    run(&mut manager, MasterAction::Edit { id: "a".to_string() }).await;
    let mut form = manager.state().dialog.form().cloned().unwrap();
    form.description = "BCA Syariah".to_string();
    run(&mut manager, MasterAction::UpdateForm(form)).await;
    run(&mut manager, MasterAction::Save).await;

    let state = manager.state();
    match &state.dialog {
        DialogState::Editing { id, form, .. } => {
            assert_eq!(id, "a");
            assert_eq!(form.description, "BCA Syariah");
        }
        other => panic!("unexpected dialog state {:?}", other),
    }
    assert_eq!(state.notifications.last().unwrap().detail, "rejected");
    assert_eq!(state.items[0].description, "BCA");
}

#[tokio::test]
async fn test_single_delete_requires_confirmation() {
    let (repo, mut manager) = setup(vec![bank("a", "BCA", None)]);
    run(&mut manager, MasterAction::Load).await;

    run(&mut manager, MasterAction::RequestDelete { id: "a".to_string() }).await;
    let confirmation = manager.state().confirmation.clone().unwrap();
    assert_eq!(confirmation.message, "Are you sure you want to delete BCA?");
    assert_eq!(repo.count("delete"), 0);

    run(&mut manager, MasterAction::CancelConfirm).await;
    assert!(manager.state().confirmation.is_none());
    assert_eq!(repo.count("delete"), 0);

    run(&mut manager, MasterAction::RequestDelete { id: "a".to_string() }).await;
    run(&mut manager, MasterAction::Confirm).await;
    assert_eq!(repo.count("delete a"), 1);
    assert!(manager.state().items.is_empty());
    assert_eq!(manager.state().notifications.last().unwrap().detail, "Bank Deleted");
}

#[tokio::test]
async fn test_batch_delete_reports_partial_failure_once() {
    let (repo, mut manager) = setup(vec![
        bank("a", "A", Some("1")),
        bank("b", "B", Some("2")),
        bank("c", "C", Some("3")),
    ]);
    repo.fail_delete.lock().unwrap().insert("b".to_string());
    run(&mut manager, MasterAction::Load).await;

    for id in ["a", "b", "c"] {
        run(&mut manager, MasterAction::ToggleSelection { id: id.to_string() }).await;
    }
    run(&mut manager, MasterAction::RequestDeleteSelected).await;
    let confirmation = manager.state().confirmation.clone().unwrap();
    assert_eq!(
        confirmation.message,
        "Are you sure you want to delete the selected banks?"
    );
    assert!(matches!(confirmation.kind, ConfirmKind::DeleteSelected { ref ids } if ids.len() == 3));

    let notifications_before = manager.state().notifications.len();
    run(&mut manager, MasterAction::Confirm).await;

    let state = manager.state();
    assert_eq!(repo.count("delete"), 3);
    assert_eq!(state.notifications.len(), notifications_before + 1);
    let warning = state.notifications.last().unwrap();
    assert_eq!(warning.severity, Severity::Warn);
    assert_eq!(warning.detail, "1 of 3 banks could not be deleted");

    let batch = state.last_batch.as_ref().unwrap();
    assert_eq!(batch.succeeded, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(batch.failed[0].id, "b");

    let remaining: Vec<&str> = state.items.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(remaining, vec!["b"]);
    assert!(!state.has_selection());
}

#[tokio::test]
async fn test_toggle_selection_twice_deselects() {
    let (_, mut manager) = setup(vec![bank("a", "A", None)]);
    run(&mut manager, MasterAction::ToggleSelection { id: "a".to_string() }).await;
    assert!(manager.state().is_selected("a"));
    run(&mut manager, MasterAction::ToggleSelection { id: "a".to_string() }).await;
    assert!(!manager.state().has_selection());

    run(&mut manager, MasterAction::RequestDeleteSelected).await;
    assert!(manager.state().confirmation.is_none());
}

#[tokio::test]
async fn test_edit_unknown_row_fetches_record() {
    let (repo, mut manager) = setup(vec![bank("x", "Remote", None)]);

    run(&mut manager, MasterAction::Edit { id: "x".to_string() }).await;
    assert_eq!(repo.count("get x"), 1);
    assert_eq!(manager.state().dialog.editing_id(), Some("x"));

    run(&mut manager, MasterAction::Edit { id: "missing".to_string() }).await;
    assert_eq!(manager.state().dialog.editing_id(), Some("x"));
    assert_eq!(
        manager.state().notifications.last().unwrap().detail,
        "Failed to load Bank"
    );
}

#[tokio::test]
async fn test_errors_use_configured_notification_life() {
    let config = ClientConfig {
        notification_life_ms: 1000,
        ..ClientConfig::default()
    };
    let repo = Arc::new(bank_repository(vec![]));
    *repo.fail_list.lock().unwrap() = true;
    let mut manager = MasterManager::new(repo)
        .with_notifications(NotificationCenter::new(config.notification_life()));

    run(&mut manager, MasterAction::Load).await;

    let error = manager.state().notifications.last().unwrap();
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(error.life, Duration::from_millis(1000));
    assert!(error.is_expired(error.created_at + Duration::from_millis(1500)));
}
