use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use infoblox_client::{
    models::{Ipv4AddrEntry, Record, RecordType},
    logging, Config, DnsApiClient, InfobloxClient,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "infoblox",
    version,
    about = "Manage Infoblox CNAME, TXT and Host records"
)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look records up by name (by canonical name for CNAME)
    Get {
        record_type: RecordType,
        name: String,
    },
    /// Create a record
    Create {
        record_type: RecordType,
        #[arg(long)]
        name: String,
        #[arg(long)]
        configure_for_dns: Option<bool>,
        #[command(flatten)]
        fields: RecordFields,
    },
    /// Update the record behind a reference
    Update {
        reference: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: RecordFields,
    },
    /// Delete the record behind a reference
    Delete { reference: String },
}

#[derive(Args, Debug)]
struct RecordFields {
    #[arg(long)]
    canonical: Option<String>,
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    comment: Option<String>,
    #[arg(long)]
    view: Option<String>,
    /// Host record address, repeatable
    #[arg(long = "ipv4addr")]
    ipv4addrs: Vec<String>,
}

impl RecordFields {
    fn into_record(self, name: Option<String>) -> Record {
        Record {
            name,
            canonical: self.canonical,
            text: self.text,
            comment: self.comment,
            view: self.view,
            ipv4addrs: self.ipv4addrs.into_iter().map(Ipv4AddrEntry::new).collect(),
            ..Default::default()
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    // Initialize logging
    logging::builder(config.debug).init();

    let client = InfobloxClient::new(&config).context("Failed to build Infoblox client")?;
    info!("Using Infoblox WAPI at {}", client.base_url());

    match cli.command {
        Command::Get { record_type, name } => {
            match client.get_record(record_type, &name).await? {
                Some(records) => print_json(&records)?,
                None => println!("No records found"),
            }
        }
        Command::Create {
            record_type,
            name,
            configure_for_dns,
            fields,
        } => {
            let record = Record {
                configure_for_dns,
                ..fields.into_record(Some(name))
            };
            let created = client.create_record(record_type, &record).await?;
            print_json(&created)?;
        }
        Command::Update {
            reference,
            name,
            fields,
        } => {
            match client.update_record(&reference, &fields.into_record(name)).await? {
                Some(updated) => print_json(&updated)?,
                None => println!("Record updated"),
            }
        }
        Command::Delete { reference } => {
            client.delete_record(&reference).await?;
            println!("Deleted {}", reference);
        }
    }

    Ok(())
}
