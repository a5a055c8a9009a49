use std::sync::Arc;

use masters_core::models::{OpeningBalanceDetail, OpeningBalanceLine};
use masters_core::ValidationError;

use crate::notifications::Severity;
use crate::opening_balance::{OpeningBalanceAction, OpeningBalanceManager, OpeningBalanceRepositories};
use crate::testing::{
    read_only, stock_detail, unit, warehouse, MemoryLookup, MemoryOpeningBalances,
};

struct Fixture {
    store: Arc<MemoryOpeningBalances>,
    manager: OpeningBalanceManager,
}

fn setup() -> Fixture {
    let store = Arc::new(MemoryOpeningBalances::default());
    let repositories = OpeningBalanceRepositories {
        opening_balances: store.clone(),
        stock_details: Arc::new(MemoryLookup(vec![
            stock_detail("d1", "BLT-01", "Hex Bolt", 1500.0),
            stock_detail("d2", "NUT-01", "Nut", 200.0),
        ])),
        warehouses: Arc::new(read_only(vec![warehouse("w1", "Main Warehouse")])),
        units: Arc::new(read_only(vec![unit("u1", "Pcs")])),
    };
    Fixture {
        store,
        manager: OpeningBalanceManager::new(repositories),
    }
}

async fn run_all(manager: &mut OpeningBalanceManager, actions: Vec<OpeningBalanceAction>) {
    for action in actions {
        manager.dispatch(action);
    }
    manager.run_pending().await;
}

fn header() -> Vec<OpeningBalanceAction> {
    vec![
        OpeningBalanceAction::SetRefNo("OB-001".to_string()),
        OpeningBalanceAction::SetDate("2024-01-31".to_string()),
        OpeningBalanceAction::SetWarehouse(Some("w1".to_string())),
    ]
}

#[tokio::test]
async fn test_load_fills_lookups() {
    let mut fx = setup();
    run_all(&mut fx.manager, vec![OpeningBalanceAction::Load]).await;

    let state = fx.manager.state();
    assert_eq!(state.stock_details.len(), 2);
    assert_eq!(state.warehouse_description(Some("w1")), "Main Warehouse");
    assert_eq!(state.warehouse_description(None), "");
    assert_eq!(state.unit_description(Some("u1")), "Pcs");
    assert_eq!(state.unit_description(Some("u9")), "u9");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_lookup_pick_adds_line_and_qty_updates_amount() {
    let mut fx = setup();
    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::Load,
            OpeningBalanceAction::OpenLookupToAdd,
            OpeningBalanceAction::SetLookupSearch("BOLT".to_string()),
        ],
    )
    .await;

    let filtered: Vec<&str> = fx
        .manager
        .state()
        .filtered_lookup()
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(filtered, vec!["d1"]);

    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::SelectFromLookup {
                detail_id: "d1".to_string(),
            },
            OpeningBalanceAction::SetQty { index: 0, qty: 3.0 },
        ],
    )
    .await;

    let state = fx.manager.state();
    assert!(!state.lookup.visible);
    assert_eq!(state.document.lines[0].amount, 4500.0);
    assert_eq!(state.total(), 4500.0);
}

#[tokio::test]
async fn test_lookup_for_row_replaces_reference() {
    let mut fx = setup();
    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::Load,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::OpenLookupForRow { index: 0 },
            OpeningBalanceAction::SelectFromLookup {
                detail_id: "d2".to_string(),
            },
        ],
    )
    .await;

    let line = &fx.manager.state().document.lines[0];
    assert_eq!(line.stock_detail_id, "d2");
    assert_eq!(line.qty, 1.0);
    assert_eq!(line.amount, 200.0);
    assert_eq!(fx.manager.state().document.lines.len(), 1);
}

#[tokio::test]
async fn test_save_without_lines_is_rejected_locally() {
    let mut fx = setup();
    let mut actions = header();
    actions.push(OpeningBalanceAction::AddEmptyRow);
    actions.push(OpeningBalanceAction::Save);
    run_all(&mut fx.manager, actions).await;

    let state = fx.manager.state();
    assert!(fx.store.created.lock().unwrap().is_empty());
    assert!(state.submitted);
    assert_eq!(state.validation_errors, vec![ValidationError::NoValidLines]);
    let last = state.notifications.last().unwrap();
    assert_eq!(last.summary, "Validation");
    assert_eq!(last.detail, "Add at least one stock line with quantity > 0");
}

#[tokio::test]
async fn test_successful_save_resets_form() {
    let mut fx = setup();
    let mut actions = vec![OpeningBalanceAction::Load];
    actions.extend(header());
    actions.extend([
        OpeningBalanceAction::OpenLookupToAdd,
        OpeningBalanceAction::SelectFromLookup {
            detail_id: "d1".to_string(),
        },
        OpeningBalanceAction::AddEmptyRow,
        OpeningBalanceAction::SetRemark("  ".to_string()),
        OpeningBalanceAction::Save,
    ]);
    run_all(&mut fx.manager, actions).await;

    let created = fx.store.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].lines.len(), 1);
    assert_eq!(created[0].remark, None);

    let state = fx.manager.state();
    let last = state.notifications.last().unwrap();
    assert_eq!(last.severity, Severity::Success);
    assert_eq!(last.detail, "Stock Opening Balance saved");
    assert!(state.document.lines.is_empty());
    assert!(state.document.ref_no.is_empty());
    assert!(!state.submitted);
}

#[tokio::test]
async fn test_failed_save_keeps_document() {
    let mut fx = setup();
    *fx.store.fail_save.lock().unwrap() = Some(500);
    let mut actions = vec![OpeningBalanceAction::Load];
    actions.extend(header());
    actions.extend([
        OpeningBalanceAction::OpenLookupToAdd,
        OpeningBalanceAction::SelectFromLookup {
            detail_id: "d2".to_string(),
        },
        OpeningBalanceAction::Save,
    ]);
    run_all(&mut fx.manager, actions).await;

    let state = fx.manager.state();
    assert_eq!(state.document.lines.len(), 1);
    assert_eq!(
        state.notifications.last().unwrap().detail,
        "Failed to save Stock Opening Balance"
    );
}

#[tokio::test]
async fn test_loaded_document_is_updated_in_place() {
    let mut fx = setup();
    fx.store.details.lock().unwrap().push(OpeningBalanceDetail {
        id: "ob7".to_string(),
        ref_no: "OB-007".to_string(),
        date: Some("2024-03-01".to_string()),
        warehouse_id: Some("w1".to_string()),
        remark: Some("carried over".to_string()),
        lines: vec![OpeningBalanceLine {
            stock_detail_id: "d2".to_string(),
            qty: 5.0,
            purchase_price: 200.0,
            amount: 1000.0,
            ..Default::default()
        }],
    });

    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::ListExisting,
            OpeningBalanceAction::LoadExisting {
                id: "ob7".to_string(),
            },
            OpeningBalanceAction::SetQty { index: 0, qty: 6.0 },
            OpeningBalanceAction::Save,
        ],
    )
    .await;

    assert_eq!(fx.manager.state().existing.len(), 1);
    assert!(fx.store.created.lock().unwrap().is_empty());
    let updated = fx.store.updated.lock().unwrap().clone();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "ob7");
    assert_eq!(updated[0].1.lines[0].amount, 1200.0);
    assert!(!fx.manager.state().document.is_editing_existing());
}

#[tokio::test]
async fn test_removing_earlier_line_keeps_lookup_on_its_row() {
    let mut fx = setup();
    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::Load,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::OpenLookupForRow { index: 2 },
            OpeningBalanceAction::RemoveLine { index: 0 },
            OpeningBalanceAction::SelectFromLookup {
                detail_id: "d1".to_string(),
            },
        ],
    )
    .await;

    let lines = &fx.manager.state().document.lines;
    assert_eq!(lines.len(), 2);
    assert!(lines[0].stock_detail_id.is_empty());
    assert_eq!(lines[1].stock_detail_id, "d1");
}

#[tokio::test]
async fn test_removing_target_line_closes_lookup() {
    let mut fx = setup();
    run_all(
        &mut fx.manager,
        vec![
            OpeningBalanceAction::Load,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::AddEmptyRow,
            OpeningBalanceAction::OpenLookupForRow { index: 1 },
            OpeningBalanceAction::RemoveLine { index: 1 },
        ],
    )
    .await;

    let state = fx.manager.state();
    assert!(!state.lookup.visible);
    assert_eq!(state.lookup.target_row, None);
    assert_eq!(state.document.lines.len(), 1);
}
