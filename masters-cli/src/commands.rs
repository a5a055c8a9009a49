use anyhow::{anyhow, bail, Context, Result};
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use masters_core::models::{
    CreateOpeningBalanceRequest, OpeningBalanceLine, PartyKind, Stock, StockGroup,
};
use masters_core::{to_date_only_string, Entity, LookupIndex, OpeningBalanceDocument};
use masters_ui::invoices::InvoiceRepository;
use masters_ui::masters::{Confirmation, MasterAction, MasterManager, MasterState};
use masters_ui::opening_balance_client::OpeningBalanceRepository;
use masters_ui::{ApiError, Clients, Severity};

#[derive(Subcommand, Debug)]
pub enum ResourceOp {
    List,
    Get {
        id: String,
    },
    /// Creates a record. Fields left out of the JSON keep their defaults.
    Create {
        json: String,
    },
    /// Patches a record. Fields left out of the JSON keep their current values.
    Update {
        id: String,
        json: String,
    },
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OpeningBalanceOp {
    List,
    Get { id: String },
    /// Validates and saves a document read from a JSON file.
    Create { file: PathBuf },
    Update { id: String, file: PathBuf },
}

fn api_error(error: ApiError) -> anyhow::Error {
    anyhow!(error.user_message())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_resource<E: Entity>(clients: &Clients, op: ResourceOp, json: bool) -> Result<()> {
    let mut manager = clients.master_manager::<E>();

    match op {
        ResourceOp::List => {
            manager.dispatch(MasterAction::Load);
            manager.run_pending().await;
            report(manager.state())?;
            print_items(&manager.state().items, json)
        }
        ResourceOp::Get { id } => {
            let record = clients.resource::<E>().get(&id).await.map_err(api_error)?;
            print_json(&record)
        }
        ResourceOp::Create { json: body } => {
            manager.dispatch(MasterAction::OpenNew);
            manager.run_pending().await;
            save_with(&mut manager, &body).await
        }
        ResourceOp::Update { id, json: body } => {
            manager.dispatch(MasterAction::Edit { id });
            manager.run_pending().await;
            report(manager.state())?;
            save_with(&mut manager, &body).await
        }
        ResourceOp::Delete { ids, yes } => delete(&mut manager, ids, yes).await,
    }
}

/// Overlays `body` on the open dialog's form and saves it.
async fn save_with<E: Entity>(manager: &mut MasterManager<E>, body: &str) -> Result<()> {
    let Some(current) = manager.state().dialog.form() else {
        bail!("No {} dialog is open", E::SINGULAR);
    };
    let form: E::Form = merge_json(current, body)?;

    manager.dispatch(MasterAction::UpdateForm(form));
    manager.dispatch(MasterAction::Save);
    manager.run_pending().await;

    let state = manager.state();
    for error in &state.validation_errors {
        eprintln!("  {}", error);
    }
    report(state)?;
    if state.dialog.is_open() {
        bail!("{} was not saved", E::SINGULAR);
    }
    Ok(())
}

fn merge_json<T: Serialize + DeserializeOwned>(base: &T, body: &str) -> Result<T> {
    let patch: serde_json::Value = serde_json::from_str(body).context("Invalid JSON body")?;
    let serde_json::Value::Object(patch) = patch else {
        bail!("JSON body must be an object");
    };
    let mut merged = serde_json::to_value(base)?;
    if let serde_json::Value::Object(fields) = &mut merged {
        fields.extend(patch);
    }
    serde_json::from_value(merged).context("JSON body does not match the form")
}

async fn delete<E: Entity>(manager: &mut MasterManager<E>, ids: Vec<String>, yes: bool) -> Result<()> {
    manager.dispatch(MasterAction::Load);
    manager.run_pending().await;
    report(manager.state())?;

    if let [id] = ids.as_slice() {
        manager.dispatch(MasterAction::RequestDelete { id: id.clone() });
    } else {
        for id in ids {
            manager.dispatch(MasterAction::ToggleSelection { id });
        }
        manager.dispatch(MasterAction::RequestDeleteSelected);
    }
    manager.run_pending().await;

    let Some(confirmation) = manager.state().confirmation.clone() else {
        bail!("Nothing to delete: no matching {}", E::PLURAL.to_lowercase());
    };
    if yes || prompt(&confirmation)? {
        manager.dispatch(MasterAction::Confirm);
    } else {
        manager.dispatch(MasterAction::CancelConfirm);
        println!("Cancelled");
    }
    manager.run_pending().await;

    if let Some(batch) = &manager.state().last_batch {
        for failure in &batch.failed {
            eprintln!("  {}", failure);
        }
    }
    report(manager.state())
}

fn prompt(confirmation: &Confirmation) -> Result<bool> {
    print!("{}: {} [y/N] ", confirmation.header, confirmation.message);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Prints the screen's notifications and fails if the last one was an
/// error or warning.
fn report<E: Entity>(state: &MasterState<E>) -> Result<()> {
    for notification in state.notifications.all() {
        eprintln!("{}: {}", notification.summary, notification.detail);
    }
    match state.notifications.last() {
        Some(last) if matches!(last.severity, Severity::Error | Severity::Warn) => {
            bail!("{}", last.detail)
        }
        _ => Ok(()),
    }
}

fn print_items<E: Entity>(items: &[E], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!(
            "{:<28} {:<10} {}",
            item.id(),
            item.serial_number().unwrap_or("-"),
            item.label()
        );
    }
    Ok(())
}

/// Stock table with the group id resolved to its description.
pub async fn list_stocks(clients: &Clients) -> Result<()> {
    let mut manager = clients.master_manager::<Stock>();
    manager.dispatch(MasterAction::Load);
    manager.run_pending().await;
    report(manager.state())?;

    let groups = match clients.resource::<StockGroup>().list().await {
        Ok(groups) => groups,
        Err(error) => {
            log::warn!("Stock groups unavailable: {}", error);
            Vec::new()
        }
    };
    let groups = LookupIndex::build(&groups);

    for stock in &manager.state().items {
        println!(
            "{:<28} {:<40} {:<20} {:?}",
            stock.id,
            stock.stock_name,
            groups.describe(stock.stock_group_id.as_deref()),
            stock.tax_option
        );
    }
    Ok(())
}

pub async fn list_stock_details(clients: &Clients, stock_id: &str, json: bool) -> Result<()> {
    let rows = clients
        .stock_details
        .list_for_stock(stock_id)
        .await
        .map_err(api_error)?;
    if json {
        return print_json(&rows);
    }
    for row in &rows {
        println!(
            "{:<8} x{:<6} purchase {:>12.2} wholesale {:>12.2} retail {:>12.2}{}",
            row.unit,
            row.factor,
            row.purchase,
            row.wholesale,
            row.retail,
            if row.is_key { "  (key)" } else { "" }
        );
    }
    Ok(())
}

pub async fn list_invoices(
    clients: &Clients,
    kind: PartyKind,
    party_id: &str,
    json: bool,
) -> Result<()> {
    let invoices = clients
        .invoices
        .list(kind, party_id)
        .await
        .map_err(api_error)?;
    if json {
        return print_json(&invoices);
    }
    for invoice in &invoices {
        println!(
            "{:<20} {:<10} {:>14.2} {:>14.2}",
            invoice.invoice,
            invoice
                .date
                .as_deref()
                .and_then(to_date_only_string)
                .unwrap_or_default(),
            invoice.amount.unwrap_or_default(),
            invoice.rem.unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn run_opening_balance(clients: &Clients, op: OpeningBalanceOp, json: bool) -> Result<()> {
    let repository = &clients.opening_balances;

    match op {
        OpeningBalanceOp::List => {
            let existing = repository.list().await.map_err(api_error)?;
            if json {
                return print_json(&existing);
            }
            for summary in &existing {
                println!(
                    "{:<28} {:<20} {:<10} {:>14.2}",
                    summary.id,
                    summary.invoice,
                    summary.date.as_deref().unwrap_or_default(),
                    summary.amount
                );
            }
            Ok(())
        }
        OpeningBalanceOp::Get { id } => {
            let detail = repository.get_detail(&id).await.map_err(api_error)?;
            print_json(&detail)
        }
        OpeningBalanceOp::Create { file } => {
            let request = read_document(&file)?;
            let summary = repository.create(&request).await.map_err(api_error)?;
            println!("Stock Opening Balance saved: {}", summary.id);
            Ok(())
        }
        OpeningBalanceOp::Update { id, file } => {
            let request = read_document(&file)?;
            let summary = repository.update(&id, &request).await.map_err(api_error)?;
            println!("Stock Opening Balance saved: {}", summary.id);
            Ok(())
        }
    }
}

/// Reads a request from disk and passes it through the document so the
/// usual validation and line filtering apply.
fn read_document(path: &Path) -> Result<CreateOpeningBalanceRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw: CreateOpeningBalanceRequest =
        serde_json::from_str(&text).context("Invalid opening balance document")?;

    let mut document = OpeningBalanceDocument::new();
    document.ref_no = raw.ref_no;
    document.date = raw.date;
    document.warehouse_id = Some(raw.warehouse_id).filter(|w| !w.trim().is_empty());
    document.remark = raw.remark.unwrap_or_default();
    document.lines = raw
        .lines
        .into_iter()
        .map(|payload| {
            let mut line = OpeningBalanceLine {
                stock_detail_id: payload.stock_detail_id,
                stock_code: payload.stock_code,
                stock_name: payload.stock_name,
                qty: payload.qty,
                unit: payload.unit,
                purchase_price: payload.purchase_price,
                ..Default::default()
            };
            line.recompute_amount();
            line
        })
        .collect();

    document.to_request().map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow!("Validation failed: {}", messages.join("; "))
    })
}

pub async fn upload(clients: &Clients, file: &Path, json: bool) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let response = clients
        .upload
        .upload_image(name, bytes)
        .await
        .map_err(api_error)?;
    if json {
        return print_json(&response);
    }
    println!("{}", response.path);
    println!("{}", clients.upload.image_url(Some(&response.path)));
    Ok(())
}
