//! mobigate: nomination fee quotes and privacy-setting votes.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::AppConfig;
use mobigate_governance::{
    MajorityKind, MajorityResult, PrivacyBallotBox, PrivacySettingStore, PrivacyVisibilityOption,
    VoteCounts, VoteOutcome, VoteReceipt,
};
use mobigate_nomination::{
    check_affordability, Affordability, NominationCostBreakdown, OfficeCategory,
};
use mobigate_types::{MemberId, MobiAmount, SettingId};
use mobigate_utils::{format_mobi, init_logging, LogFormat};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mobigate", about = "Community nomination fees and privacy votes")]
struct Cli {
    /// TOML file with settings and reference data. Built-in defaults are
    /// used for anything it leaves out.
    #[arg(long, env = "MOBIGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MOBIGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "MOBIGATE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Override the platform service charge (whole percent).
    #[arg(long, env = "MOBIGATE_SERVICE_CHARGE_PERCENT")]
    service_charge_percent: Option<u32>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List electable offices and their fees.
    Offices {
        /// Only offices in this category: executive, administrative, support.
        #[arg(long)]
        category: Option<OfficeCategory>,
    },
    /// Cost of declaring candidacy for an office.
    Quote {
        office: String,
        /// Wallet balance to check the debit against.
        #[arg(long)]
        balance: Option<u64>,
    },
    /// List privacy settings with their current winners.
    Settings,
    /// Majority/plurality winner of one privacy setting.
    Tally { setting: String },
    /// Cast or change a member's vote on a privacy setting.
    Vote {
        setting: String,
        /// nobody, only_admins, valid_members or all_members.
        option: PrivacyVisibilityOption,
        #[arg(long)]
        member: String,
        /// The member's earlier vote, already included in the counts.
        #[arg(long)]
        previous: Option<PrivacyVisibilityOption>,
    },
}

#[derive(Serialize)]
struct Quote<'a> {
    office_name: &'a str,
    breakdown: &'a NominationCostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    affordability: Option<Affordability>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(percent) = cli.service_charge_percent {
        config.service_charge_percent = percent;
    }

    init_logging(config.log_format, &config.log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Offices { category } => list_offices(&config, category, cli.json),
        Command::Quote { office, balance } => quote(&config, &office, balance, cli.json),
        Command::Settings => list_settings(&config, cli.json),
        Command::Tally { setting } => tally(&config, &setting, cli.json),
        Command::Vote {
            setting,
            option,
            member,
            previous,
        } => vote(&config, &setting, option, member, previous, cli.json),
    }
}

fn list_offices(
    config: &AppConfig,
    category: Option<OfficeCategory>,
    json: bool,
) -> anyhow::Result<()> {
    let schedule = config.fee_schedule()?;
    let offices: Vec<_> = schedule
        .list()
        .iter()
        .filter(|o| category.map_or(true, |c| o.category == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&offices)?);
        return Ok(());
    }
    for office in offices {
        println!(
            "{:<28} {:<15} {:>12} {}",
            office.office_id.as_str(),
            office.category.as_str(),
            format_mobi(office.total_fee),
            if office.requires_primary {
                "(primary)"
            } else {
                ""
            },
        );
    }
    Ok(())
}

fn quote(
    config: &AppConfig,
    office: &str,
    balance: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let schedule = config.fee_schedule()?;
    let breakdown = schedule.compute_cost_breakdown(office)?;
    let office_name = schedule
        .get_fee_structure(office)
        .map(|s| s.office_name.as_str())
        .unwrap_or(office);
    let affordability = balance.map(|b| check_affordability(MobiAmount::new(b), &breakdown));

    if json {
        let quote = Quote {
            office_name,
            breakdown: &breakdown,
            affordability,
        };
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("{office_name} ({office})");
    let service_label = format!("Service charge ({}%)", breakdown.service_charge_percent);
    let rows = [
        ("Nomination fee", breakdown.nomination_fee),
        ("Processing fee", breakdown.processing_fee),
        (service_label.as_str(), breakdown.service_charge),
        ("Total debited", breakdown.total_debited),
        ("Community receives", breakdown.community_receives),
        ("Mobigate receives", breakdown.mobigate_receives),
    ];
    for (label, amount) in rows {
        println!("  {label:<22} {:>12}", format_mobi(amount));
    }
    if let Some(a) = affordability {
        let status = if a.has_insufficient_balance {
            format!("insufficient, short by {}", format_mobi(a.shortfall))
        } else {
            "sufficient".to_string()
        };
        println!(
            "  {:<22} {:>12} ({status})",
            "Wallet balance",
            format_mobi(a.wallet_balance)
        );
    }
    Ok(())
}

fn list_settings(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let settings = config.privacy_store()?.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }
    for setting in settings {
        println!(
            "{:<28} {:<15} {:>6} votes",
            setting.setting_id.as_str(),
            setting.current_value.as_str(),
            setting.total_votes
        );
    }
    Ok(())
}

fn tally(config: &AppConfig, setting: &str, json: bool) -> anyhow::Result<()> {
    let ballot_box = PrivacyBallotBox::new(config.privacy_store()?);
    let result = ballot_box.tally(&SettingId::new(setting))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", describe(&result));
    }
    Ok(())
}

/// Import the member's earlier ballot, if given, then submit the new vote.
fn apply_vote(
    config: &AppConfig,
    setting: &str,
    option: PrivacyVisibilityOption,
    member: String,
    previous: Option<PrivacyVisibilityOption>,
) -> anyhow::Result<(VoteReceipt, MajorityResult)> {
    let store = config.privacy_store()?;
    let setting_id = SettingId::new(setting);
    let member = MemberId::new(member);
    if let Some(previous) = previous {
        store.record_ballot(&setting_id, member.clone(), previous)?;
    }

    let ballot_box = PrivacyBallotBox::new(store);
    let receipt = ballot_box.submit(&member, &setting_id, option)?;
    let result = ballot_box.tally(&setting_id)?;
    Ok((receipt, result))
}

fn vote(
    config: &AppConfig,
    setting: &str,
    option: PrivacyVisibilityOption,
    member: String,
    previous: Option<PrivacyVisibilityOption>,
    json: bool,
) -> anyhow::Result<()> {
    let (receipt, result) = apply_vote(config, setting, option, member, previous)?;

    if json {
        #[derive(Serialize)]
        struct VoteReport<'a> {
            outcome: &'a VoteOutcome,
            vote_counts: &'a VoteCounts,
            total_votes: u64,
            majority: &'a MajorityResult,
        }
        let report = VoteReport {
            outcome: &receipt.outcome,
            vote_counts: &receipt.setting.vote_counts,
            total_votes: receipt.setting.total_votes,
            majority: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", receipt.outcome.message);
    for (option, count) in receipt.setting.vote_counts.iter() {
        println!("  {:<15} {count:>6}", option.as_str());
    }
    println!("{}", describe(&result));
    Ok(())
}

fn describe(result: &MajorityResult) -> String {
    match (result.kind, result.winner) {
        (MajorityKind::NoVotes, _) | (_, None) => "No votes cast yet".to_string(),
        (MajorityKind::Majority, Some(winner)) => format!(
            "Majority: {winner} with {} votes ({:.1}%)",
            result.votes, result.percentage
        ),
        (MajorityKind::Plurality, Some(winner)) => format!(
            "Plurality: {winner} with {} votes ({:.1}%)",
            result.votes, result.percentage
        ),
    }
}
