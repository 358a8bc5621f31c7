//! Roth Planner CLI
//!
//! Projects both spouses' pre-tax accounts, applies any ledger edits and
//! prints the household plan

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use roth_planner::household::DEFAULT_RETURN_RATE_PERCENT;
use roth_planner::money::format_cents;
use roth_planner::{AccountInputs, AccountProjection, HouseholdInputs, HouseholdPlan, HouseholdPlanner, LedgerField};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;

/// Ages and life expectancies above this are rejected before projecting
const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "roth_planner", version, about = "Household RMD and Roth conversion planner")]
struct Cli {
    /// JSON file with household inputs; flags below override its values
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Spouse 1 age in the first projection year
    #[arg(long)]
    age1: Option<u32>,

    /// Spouse 2 age in the first projection year
    #[arg(long)]
    age2: Option<u32>,

    /// Spouse 1 life expectancy (last projected age)
    #[arg(long)]
    le1: Option<u32>,

    /// Spouse 2 life expectancy (last projected age)
    #[arg(long)]
    le2: Option<u32>,

    /// Spouse 1 pre-tax IRA balance
    #[arg(long)]
    ira1: Option<Decimal>,

    /// Spouse 2 pre-tax IRA balance
    #[arg(long)]
    ira2: Option<Decimal>,

    /// Annual rate of return in percent
    #[arg(long)]
    roi: Option<Decimal>,

    /// First projection year (default: current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Ledger edit, e.g. 2027:rothConversionSpouse1=25000 (repeatable)
    #[arg(long = "set", value_name = "YEAR:FIELD=VALUE")]
    edits: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let inputs = load_inputs(&cli)?;
    info!(
        "Projecting spouse 1 {}..={} and spouse 2 {}..={} at {}%",
        inputs.spouse1.age,
        inputs.spouse1.life_expectancy,
        inputs.spouse2.age,
        inputs.spouse2.life_expectancy,
        inputs.annual_return_rate_percent
    );

    let mut plan = HouseholdPlanner::new(inputs).run();

    for edit in &cli.edits {
        let (year, field, raw) = parse_edit(edit)?;
        plan.ledger_mut()
            .set_field_text(year, field, raw)
            .with_context(|| format!("Applying ledger edit {edit:?}"))?;
    }

    match cli.format {
        OutputFormat::Table => print_tables(&plan),
        OutputFormat::Csv => write_csv(&plan)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), &plan).context("Writing JSON output")?;
            println!();
        }
    }

    Ok(())
}

fn load_inputs(cli: &Cli) -> Result<HouseholdInputs> {
    let mut inputs = match &cli.inputs {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Reading inputs from {}", path.display()))?;
            serde_json::from_str::<HouseholdInputs>(&text)
                .with_context(|| format!("Parsing inputs in {}", path.display()))?
        }
        None => HouseholdInputs::new(
            AccountInputs::new(required(cli.age1, "--age1")?, required(cli.le1, "--le1")?, Decimal::ZERO),
            AccountInputs::new(required(cli.age2, "--age2")?, required(cli.le2, "--le2")?, Decimal::ZERO),
            DEFAULT_RETURN_RATE_PERCENT,
        ),
    };

    if let Some(age) = cli.age1 {
        inputs.spouse1.age = age;
    }
    if let Some(age) = cli.age2 {
        inputs.spouse2.age = age;
    }
    if let Some(le) = cli.le1 {
        inputs.spouse1.life_expectancy = le;
    }
    if let Some(le) = cli.le2 {
        inputs.spouse2.life_expectancy = le;
    }
    if let Some(balance) = cli.ira1 {
        inputs.spouse1.balance = balance;
    }
    if let Some(balance) = cli.ira2 {
        inputs.spouse2.balance = balance;
    }
    if let Some(rate) = cli.roi {
        inputs.annual_return_rate_percent = rate;
    }
    if cli.start_year.is_some() {
        inputs.start_year = cli.start_year;
    }

    for (what, value) in [
        ("spouse 1 age", inputs.spouse1.age),
        ("spouse 2 age", inputs.spouse2.age),
        ("spouse 1 life expectancy", inputs.spouse1.life_expectancy),
        ("spouse 2 life expectancy", inputs.spouse2.life_expectancy),
    ] {
        if value > MAX_AGE {
            bail!("{what} {value} is above the supported maximum of {MAX_AGE}");
        }
    }

    Ok(inputs)
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!("{flag} is required when --inputs is not given"))
}

/// Split `YEAR:FIELD=VALUE`
fn parse_edit(edit: &str) -> Result<(i32, &str, &str)> {
    let Some((year, rest)) = edit.split_once(':') else {
        bail!("Ledger edit {edit:?} is not YEAR:FIELD=VALUE");
    };
    let Some((field, raw)) = rest.split_once('=') else {
        bail!("Ledger edit {edit:?} is not YEAR:FIELD=VALUE");
    };
    let year = year
        .trim()
        .parse::<i32>()
        .with_context(|| format!("Ledger edit {edit:?} has an invalid year"))?;
    Ok((year, field.trim(), raw))
}

fn print_tables(plan: &HouseholdPlan) {
    println!("Financial Plan Details ({} years from {})", plan.horizon.len(), plan.start_year);

    let mut header = format!("{:>6} {:>5} {:>5}", "Year", "Age1", "Age2");
    for field in LedgerField::ALL {
        header.push_str(&format!(" {:>20}", field.label()));
    }
    header.push_str(&format!(" {:>14} {:>14}", "RMD Spouse 1", "RMD Spouse 2"));
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for row in plan.rows() {
        let mut line = format!("{:>6} {:>5} {:>5}", row.year, row.age_spouse1, row.age_spouse2);
        for (_, amount) in row.ledger.amounts() {
            line.push_str(&format!(" {:>20}", format_cents(amount)));
        }
        line.push_str(&format!(" {:>14} {:>14}", row.rmd_spouse1, row.rmd_spouse2));
        println!("{line}");
    }

    println!();
    println!("{:<24} {:>16} {:>16} {:>16}", "", "Spouse 1", "Spouse 2", "Total");
    for (label, spouse1, spouse2, total) in plan.totals_display() {
        println!("{label:<24} {spouse1:>16} {spouse2:>16} {total:>16}");
    }

    print_account("Spouse 1 IRA Details", &plan.spouse1);
    print_account("Spouse 2 IRA Details", &plan.spouse2);
}

fn print_account(title: &str, projection: &AccountProjection) {
    println!("\n{title}");
    println!(
        "{:>6} {:>5} {:>16} {:>18} {:>14} {:>16}",
        "Year", "Age", "Starting Value", "Investment Return", "RMD", "Ending Value"
    );
    println!("{}", "-".repeat(80));

    for snapshot in projection {
        let row = snapshot.rounded();
        println!(
            "{:>6} {:>5} {:>16} {:>18} {:>14} {:>16}",
            row.year, row.age, row.starting_value, row.investment_return, row.rmd, row.ending_value
        );
    }
}

fn write_csv(plan: &HouseholdPlan) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(io::stdout().lock());

    let mut header = vec!["Year".to_string(), "AgeSpouse1".to_string(), "AgeSpouse2".to_string()];
    header.extend(LedgerField::ALL.iter().map(|f| f.as_str().to_string()));
    header.extend(["rmdSpouse1".to_string(), "rmdSpouse2".to_string()]);
    writer.write_record(&header)?;

    for row in plan.rows() {
        let mut record = vec![row.year.to_string(), row.age_spouse1.to_string(), row.age_spouse2.to_string()];
        record.extend(row.ledger.amounts().map(|(_, amount)| format_cents(amount)));
        record.push(row.rmd_spouse1);
        record.push(row.rmd_spouse2);
        writer.write_record(&record)?;
    }

    for (spouse, projection) in [("spouse1", &plan.spouse1), ("spouse2", &plan.spouse2)] {
        writer.write_record([""])?;
        writer.write_record(["Account", "Year", "Age", "StartingValue", "InvestmentReturn", "RMD", "EndingValue"])?;
        for snapshot in projection {
            let row = snapshot.rounded();
            writer.write_record([
                spouse.to_string(),
                row.year.to_string(),
                row.age.to_string(),
                row.starting_value,
                row.investment_return,
                row.rmd,
                row.ending_value,
            ])?;
        }
    }

    writer.flush().context("Writing CSV output")?;
    Ok(())
}
