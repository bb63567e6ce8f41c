//! Acel Market CLI - demo flows and stored-document inspection.
//!
//! # Usage
//!
//! ```bash
//! # Reset the data directory to the guest baseline
//! acel seed
//!
//! # Run a scripted purchase end to end
//! acel demo
//!
//! # Inspect stored documents
//! acel show orders
//! acel show profile
//!
//! # Render an order's invoice to a text file
//! acel invoice 1755859200123 --out invoices
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the baseline shop documents
//! - `demo` - Run a scripted demo purchase
//! - `show` - Inspect stored shop documents
//! - `invoice` - Render an order's invoice to a text file
//!
//! The data directory comes from `ACEL_DATA_DIR` (default `data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use acel_core::OrderId;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "acel")]
#[command(author, version, about = "Acel Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the baseline shop documents
    Seed,
    /// Run a scripted demo purchase
    Demo,
    /// Inspect stored shop documents
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
    /// Render an order's invoice to a text file
    Invoice {
        /// Order ID, as listed by `show orders`
        order_id: i64,

        /// Directory to write into (default: the data directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Which documents exist and how large they are
    Documents,
    /// The shop-wide order list
    Orders,
    /// The account profile
    Profile,
    /// Return requests
    Returns,
    /// Product reviews
    Reviews,
    /// Support tickets
    Tickets,
    /// Wishlisted product IDs
    Wishlist,
    /// The active role and its capabilities
    Role,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Demo => commands::demo::run()?,
        Commands::Show { target } => match target {
            ShowTarget::Documents => commands::show::documents()?,
            ShowTarget::Orders => commands::show::orders()?,
            ShowTarget::Profile => commands::show::profile()?,
            ShowTarget::Returns => commands::show::returns()?,
            ShowTarget::Reviews => commands::show::reviews()?,
            ShowTarget::Tickets => commands::show::tickets()?,
            ShowTarget::Wishlist => commands::show::wishlist()?,
            ShowTarget::Role => commands::show::role()?,
        },
        Commands::Invoice { order_id, out } => {
            commands::invoice::write(OrderId::new(order_id), out.as_deref())?;
        }
    }
    Ok(())
}
