mod data;

use anyhow::anyhow;
use charamake::{
    names::clan_name, CatalogProvider, CatalogRegistry, Customize, CustomizeAccess, Equipment,
    FixUp, Gender, GearRestriction, SubRace, Unrestricted,
};
use clap::{Parser, Subcommand};
use data::{BatchRecord, BatchResult, RestrictedGearTable};
use fallible_iterator::{FallibleIterator, IteratorExt};
use std::{fs, io, path::Path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to customization catalog data (.json)
    #[arg(short, long, value_name = "CATALOG_FILE")]
    catalogs: Option<Box<Path>>,

    /// Path to restricted gear table (.json)
    #[arg(short, long, value_name = "GEAR_FILE")]
    gear: Option<Box<Path>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List things known about customizations
    #[command(subcommand)]
    List(ListCommands),

    /// Move a customization record to another clan or gender and repair it
    Fixup {
        /// Customization record as 52 hex digits
        customize: Box<str>,
        /// Equipment record as 80 hex digits
        #[arg(short, long)]
        equip: Option<Box<str>>,
        #[arg(long)]
        clan: Option<SubRace>,
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// Fix up every record of a .csv file (customize, equip, clan, gender)
    Batch {
        input: Box<Path>,
        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<Box<Path>>,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// List clan name keys of every clan and gender
    ClanNames,
    /// List available customizations of one catalog in menu order
    Order {
        #[arg(long)]
        clan: SubRace,
        #[arg(long)]
        gender: Gender,
    },
}

fn load_registry(path: Option<Box<Path>>) -> anyhow::Result<CatalogRegistry> {
    let path = path.ok_or(anyhow!("--catalogs is required for this command"))?;
    let file = io::BufReader::new(fs::File::open(&path)?);
    let registry = CatalogRegistry::from_json_reader(file)?;
    debug!(path = %path.display(), catalogs = registry.len(), "loaded customization catalogs");
    Ok(registry)
}

fn load_gear(path: Option<Box<Path>>) -> anyhow::Result<Box<dyn GearRestriction>> {
    Ok(match path {
        Some(path) => Box::new(RestrictedGearTable::load(&path)?),
        None => Box::new(Unrestricted),
    })
}

fn list_clan_names() -> anyhow::Result<()> {
    let mut w = csv::Writer::from_writer(io::stdout());
    w.write_record(["clan", "gender", "key"])?;
    for clan in SubRace::playable() {
        for gender in [Gender::Male, Gender::Female] {
            w.write_record([clan.name(), gender.name(), clan_name(clan, gender)?.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

fn list_order(registry: &CatalogRegistry, clan: SubRace, gender: Gender) -> anyhow::Result<()> {
    let catalog = registry.catalog(clan, gender)?;
    for (kind, ids) in catalog.order() {
        println!("{kind}");
        for id in ids.iter() {
            let count = catalog.count(*id).map_or_else(|_| "-".to_owned(), |c| c.to_string());
            println!("    {:<24}{count}", catalog.option_name(*id));
        }
    }
    Ok(())
}

fn fixup(
    registry: &CatalogRegistry,
    gear: &dyn GearRestriction,
    customize: &str,
    equip: Option<&str>,
    clan: Option<SubRace>,
    gender: Option<Gender>,
) -> anyhow::Result<(Customize, Option<Equipment>)> {
    let mut customize: Customize = customize.parse()?;
    let mut equip = equip.map(str::parse::<Equipment>).transpose()?;

    let clan = clan.unwrap_or_else(|| customize.clan());
    let gender = gender.unwrap_or_else(|| customize.gender());
    FixUp::new(registry, gear).apply(&mut customize, equip.as_mut(), clan, gender)?;
    Ok((customize, equip))
}

fn print_fixup(registry: &CatalogRegistry, customize: &Customize, equip: Option<&Equipment>) -> anyhow::Result<()> {
    let catalog = registry.catalog(customize.clan(), customize.gender())?;
    println!("{}", customize.to_hex());
    if let Some(equip) = equip {
        println!("{}", equip.to_hex()?);
    }
    println!("{}", clan_name(customize.clan(), customize.gender())?);
    println!("{}", catalog.to_human_readable(customize));
    Ok(())
}

fn write_batch<W: io::Write>(
    registry: &CatalogRegistry,
    gear: &dyn GearRestriction,
    records: Vec<BatchRecord>,
    out: W,
) -> anyhow::Result<usize> {
    let mut w = csv::Writer::from_writer(out);
    let mut count = 0;
    for record in records {
        let (customize, equip) = fixup(
            registry,
            gear,
            &record.customize,
            record.equip.as_deref(),
            Some(record.clan),
            Some(record.gender),
        )?;
        w.serialize(BatchResult {
            customize: customize.to_hex(),
            equip: equip.map(|e| e.to_hex()).transpose()?,
            clan_name: clan_name(customize.clan(), customize.gender())?.as_str(),
        })?;
        count += 1;
    }
    w.flush()?;
    Ok(count)
}

fn batch(
    registry: &CatalogRegistry,
    gear: &dyn GearRestriction,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let records: Vec<BatchRecord> = csv::Reader::from_path(input)?
        .deserialize::<BatchRecord>()
        .transpose_into_fallible()
        .map_err(anyhow::Error::from)
        .collect()?;
    debug!(input = %input.display(), records = records.len(), "read batch input");

    let out: Box<dyn io::Write> = match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let count = write_batch(registry, gear, records, out)?;
    info!(count, "fixed up batch records");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(sub) => match sub {
            ListCommands::ClanNames => list_clan_names(),
            ListCommands::Order { clan, gender } => {
                list_order(&load_registry(cli.catalogs)?, clan, gender)
            }
        },
        Commands::Fixup {
            customize,
            equip,
            clan,
            gender,
        } => {
            let registry = load_registry(cli.catalogs)?;
            let gear = load_gear(cli.gear)?;
            let (customize, equip) =
                fixup(&registry, gear.as_ref(), &customize, equip.as_deref(), clan, gender)?;
            print_fixup(&registry, &customize, equip.as_ref())
        }
        Commands::Batch { input, output } => {
            let registry = load_registry(cli.catalogs)?;
            let gear = load_gear(cli.gear)?;
            batch(&registry, gear.as_ref(), &input, output.as_deref())
        }
    }
}
