mod logger;

use anyhow::{Context, Result, bail};
use booth_quota::{BoothSize, DEFAULT_QUOTA, FIXTURES_PER_CUSTOM_UNIT, calculate_quota};
use clap::{ArgAction, Parser, Subcommand};
use contract_pdf::LayoutOptions;
use contract_runtime::{
    ContractCommand, ContractService, ContractUpdate, DirectorySink, SignatureImage,
    TemplateDraftGenerator, worker_task,
};
use contract_store::{JsonFileStore, VendorRecord};
use logger::CliLogger;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "vcontract",
    about = "Draft, sign and export trade-show vendor contracts",
    version
)]
struct Cli {
    /// Contract store file
    #[arg(long, global = true, default_value = "contracts.json")]
    store: PathBuf,

    /// Directory receiving signed contract PDFs
    #[arg(long, global = true, default_value = "signed")]
    archive: PathBuf,

    /// Organizer named in drafted agreements
    #[arg(long, global = true, default_value = "Event Organizer")]
    organizer: String,

    /// Layout options JSON used when rendering
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List booth packages and their fixture quotas
    Sizes,

    /// Compute the fixture quota for a booth size
    Quota {
        /// Booth size label, e.g. "2 Standard || 26' x 8' || (8 Fixtures)"
        #[arg(short, long)]
        size: String,

        /// Unit count for a custom booth
        #[arg(short = 'u', long)]
        custom_units: Option<String>,

        /// CSV of `type,quantity` rows to check against the quota
        #[arg(short, long)]
        fixtures: Option<PathBuf>,
    },

    /// Draft a contract from a vendor record
    Draft {
        /// Vendor record JSON (current or legacy schema)
        #[arg(long)]
        vendor: PathBuf,
    },

    /// Mark a draft as sent to the vendor
    Send {
        #[arg(long)]
        id: String,
    },

    /// Sign a contract and archive the signed PDF
    Sign {
        #[arg(long)]
        id: String,

        /// Signature image: PNG file, or a text file holding a data URL
        #[arg(long)]
        signature: PathBuf,
    },

    /// Render a contract to a PDF file
    Render {
        #[arg(long)]
        id: String,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// List stored contracts
    List,

    /// Write the default layout options as JSON
    LayoutTemplate {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = CliLogger::new(200, CliLogger::level_for(cli.verbose));
    logger.clone().init()?;

    let result = run(cli).await;
    if result.is_err() {
        for entry in logger.unechoed_entries() {
            eprintln!("{}", entry.line());
        }
    }
    result
}

async fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Commands::Sizes => {
            for size in BoothSize::ALL {
                if size.is_custom() {
                    println!("{}  ({} per unit)", size.label(), FIXTURES_PER_CUSTOM_UNIT);
                } else {
                    println!("{}  quota {}", size.label(), calculate_quota(size.label(), None));
                }
            }
            return Ok(());
        }

        Commands::Quota {
            size,
            custom_units,
            fixtures,
        } => {
            let quota = calculate_quota(&size, custom_units.as_deref());
            println!("Fixture quota: {}", quota);
            if BoothSize::from_label(&size).is_none() && quota == DEFAULT_QUOTA {
                log::warn!("Unrecognized booth size {size:?}, using default quota");
            }

            if let Some(path) = fixtures {
                let list = booth_quota::load_fixtures_csv(&path)
                    .await
                    .with_context(|| format!("reading fixtures from {}", path.display()))?;
                let usage = list.usage(quota);
                println!("{}", list.summary());
                println!("Allocated: {} of {}", usage.used, usage.quota);
                if usage.unused > 0 {
                    println!("Unused: {}", usage.unused);
                }
                if let Some(warning) = usage.warning() {
                    println!("{}", warning);
                }
            }
            return Ok(());
        }

        Commands::LayoutTemplate { output } => {
            LayoutOptions::default().save(&output).await?;
            println!("Layout options → {}", output.display());
            return Ok(());
        }

        Commands::Draft { vendor } => {
            let json = tokio::fs::read_to_string(&vendor)
                .await
                .with_context(|| format!("reading vendor record {}", vendor.display()))?;
            ContractCommand::Draft {
                vendor: VendorRecord::from_json(&json)?,
            }
        }
        Commands::Send { id } => ContractCommand::Send { id },
        Commands::Sign { id, signature } => ContractCommand::Sign {
            id,
            signature: read_signature(&signature).await?,
        },
        Commands::Render { id, output } => ContractCommand::Render {
            id,
            output_path: output,
        },
        Commands::List => ContractCommand::List,
    };

    let layout = match &cli.layout {
        Some(path) => LayoutOptions::load(path)
            .await
            .with_context(|| format!("loading layout options {}", path.display()))?,
        None => LayoutOptions::default(),
    };
    let generator = TemplateDraftGenerator {
        organizer: cli.organizer,
        ..Default::default()
    };
    let service = ContractService::new(
        JsonFileStore::new(&cli.store),
        generator,
        DirectorySink::new(&cli.archive),
    )
    .with_layout(layout);

    let update = dispatch(service, command).await?;
    report(update)
}

/// Run one command through the worker and wait for its update.
async fn dispatch(
    service: ContractService<JsonFileStore, TemplateDraftGenerator, DirectorySink>,
    command: ContractCommand,
) -> Result<ContractUpdate> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(service, command_rx, update_tx));

    command_tx
        .send(command)
        .map_err(|_| anyhow::anyhow!("contract worker stopped"))?;
    drop(command_tx);

    let update = update_rx.recv().await;
    worker.await?;
    update.context("contract worker returned no update")
}

fn report(update: ContractUpdate) -> Result<()> {
    match update {
        ContractUpdate::Drafted { id, vendor_name } => {
            println!("Drafted {} for {}", id, vendor_name);
        }
        ContractUpdate::Sent { id } => println!("Sent {}", id),
        ContractUpdate::Signed {
            id,
            page_count,
            delivered,
        } => {
            println!("Signed {} ({} page(s))", id, page_count);
            if !delivered {
                println!("  Signed PDF was not archived; render it again with `render`");
            }
        }
        ContractUpdate::Rendered {
            id,
            path,
            page_count,
        } => {
            println!("Rendered {} ({} page(s)) → {}", id, page_count, path.display());
        }
        ContractUpdate::Listed { contracts } => {
            if contracts.is_empty() {
                println!("No contracts");
            }
            for contract in contracts {
                println!(
                    "{}  {:<6}  {}  {} ({})",
                    contract.id,
                    contract.status.as_str(),
                    contract.created_at.format("%Y-%m-%d %H:%M"),
                    contract.vendor_name,
                    contract.company
                );
            }
        }
        ContractUpdate::Error { message } => bail!(message),
    }
    Ok(())
}

async fn read_signature(path: &Path) -> Result<SignatureImage> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading signature {}", path.display()))?;
    if bytes.starts_with(b"data:") {
        let url = String::from_utf8_lossy(&bytes);
        return Ok(SignatureImage::from_data_url(url.trim())?);
    }
    if bytes.is_empty() {
        bail!("signature file {} is empty", path.display());
    }
    Ok(SignatureImage::new(bytes))
}
