use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use masters_core::models::{
    Bank, Brand, City, Currency, Customer, PartyKind, Salesman, Stock, StockGroup, Supplier, Unit,
    Warehouse,
};
use masters_ui::{ClientConfig, Clients};

mod commands;

use commands::{OpeningBalanceOp, ResourceOp};

#[derive(Parser, Debug)]
#[command(name = "masters-cli", about = "Inventory master-data client")]
struct Cli {
    /// Print raw JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// Settings file; defaults to `masters.toml` in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured API base URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Banks {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Brands {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Cities {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Units {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Warehouses {
        #[command(subcommand)]
        op: ResourceOp,
    },
    StockGroups {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Stocks {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Currencies {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Salesmen {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Suppliers {
        #[command(subcommand)]
        op: ResourceOp,
    },
    Customers {
        #[command(subcommand)]
        op: ResourceOp,
    },
    /// Lists the per-unit price rows of a stock item.
    StockDetails { stock_id: String },
    /// Lists the opening invoices of a customer or supplier.
    Invoices { kind: KindArg, party_id: String },
    OpeningBalance {
        #[command(subcommand)]
        op: OpeningBalanceOp,
    },
    /// Uploads an image and prints its stored path.
    Upload { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Customer,
    Supplier,
}

impl From<KindArg> for PartyKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Customer => PartyKind::Customer,
            KindArg::Supplier => PartyKind::Supplier,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    };
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    log::debug!("Using API at {}", config.api_url);

    let clients = Clients::new(&config);
    let json = cli.json;

    match cli.command {
        Commands::Banks { op } => commands::run_resource::<Bank>(&clients, op, json).await,
        Commands::Brands { op } => commands::run_resource::<Brand>(&clients, op, json).await,
        Commands::Cities { op } => commands::run_resource::<City>(&clients, op, json).await,
        Commands::Units { op } => commands::run_resource::<Unit>(&clients, op, json).await,
        Commands::Warehouses { op } => {
            commands::run_resource::<Warehouse>(&clients, op, json).await
        }
        Commands::StockGroups { op } => {
            commands::run_resource::<StockGroup>(&clients, op, json).await
        }
        Commands::Stocks { op: ResourceOp::List } if !json => commands::list_stocks(&clients).await,
        Commands::Stocks { op } => commands::run_resource::<Stock>(&clients, op, json).await,
        Commands::Currencies { op } => {
            commands::run_resource::<Currency>(&clients, op, json).await
        }
        Commands::Salesmen { op } => commands::run_resource::<Salesman>(&clients, op, json).await,
        Commands::Suppliers { op } => commands::run_resource::<Supplier>(&clients, op, json).await,
        Commands::Customers { op } => commands::run_resource::<Customer>(&clients, op, json).await,
        Commands::StockDetails { stock_id } => {
            commands::list_stock_details(&clients, &stock_id, json).await
        }
        Commands::Invoices { kind, party_id } => {
            commands::list_invoices(&clients, kind.into(), &party_id, json).await
        }
        Commands::OpeningBalance { op } => commands::run_opening_balance(&clients, op, json).await,
        Commands::Upload { file } => commands::upload(&clients, &file, json).await,
    }
}
