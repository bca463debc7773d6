#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use escala::{
    display::{GridRenderer, ListRenderer, ScheduleRenderer},
    io,
    model::{PersonId, Role, Roster},
    policy::HeadcountPolicy,
    scheduler::{generate_schedule, AssignOptions},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de l'escala de l'équipe de son (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    Leader,
    Participant,
}

impl From<RoleArg> for Role {
    fn from(r: RoleArg) -> Self {
        match r {
            RoleArg::Leader => Role::Leader,
            RoleArg::Participant => Role::Participant,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre
    AddMember {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        role: RoleArg,
    },

    /// Retirer un membre
    RemoveMember {
        #[arg(long)]
        name: String,
    },

    /// Importer des membres depuis un CSV
    ImportMembers {
        #[arg(long)]
        csv: String,
    },

    /// Basculer une indisponibilité récurrente (0 = dimanche … 6 = samedi)
    ToggleDay {
        #[arg(long)]
        name: String,
        #[arg(long)]
        weekday: u8,
    },

    /// Ajouter une indisponibilité ponctuelle
    AddDate {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        reason: String,
    },

    /// Retirer une indisponibilité ponctuelle
    RemoveDate {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// Lister les membres
    Members,

    /// Remplacer l'équipe par la composition par défaut
    Reset,

    /// Générer l'escala d'un mois
    Generate {
        /// YYYY-MM
        #[arg(long)]
        month: String,
        /// Graine du mélange (reproductible)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 6)]
        min_leaders: usize,
        #[arg(long, default_value_t = 4)]
        min_participants: usize,
        /// Affichage en grille mensuelle
        #[arg(long)]
        grid: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let mut roster = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddMember { name, role } => {
            if roster.find_person_by_name(&name).is_some() {
                bail!("member already exists: {name}");
            }
            let id = roster.add_member(name, role.into());
            storage.save(&roster)?;
            println!("{}", id.as_str());
            0
        }
        Commands::RemoveMember { name } => {
            let id = member_id(&roster, &name)?;
            roster.remove_member(&id);
            storage.save(&roster)?;
            0
        }
        Commands::ImportMembers { csv } => {
            let people = io::import_people_csv(csv)?;
            let count = roster.import_members(people)?;
            storage.save(&roster)?;
            println!("{count} member(s) imported");
            0
        }
        Commands::ToggleDay { name, weekday } => {
            let id = member_id(&roster, &name)?;
            let now_busy = roster.toggle_unavailable_day(&id, weekday)?;
            storage.save(&roster)?;
            println!(
                "{name}: {} on weekday {weekday}",
                if now_busy { "unavailable" } else { "available" }
            );
            0
        }
        Commands::AddDate { name, date, reason } => {
            let id = member_id(&roster, &name)?;
            if !roster.add_unavailable_date(&id, date, reason)? {
                eprintln!("{name} is already unavailable on {date}");
            }
            storage.save(&roster)?;
            0
        }
        Commands::RemoveDate { name, date } => {
            let id = member_id(&roster, &name)?;
            if !roster.remove_unavailable_date(&id, date)? {
                eprintln!("{name} had no unavailability on {date}");
            }
            storage.save(&roster)?;
            0
        }
        Commands::Members => {
            for p in &roster.people {
                let days: Vec<String> = p
                    .unavailable_days
                    .iter()
                    .map(|d| format!("{}:{}", d.day_of_week, d.reason))
                    .collect();
                let dates: Vec<String> = p
                    .unavailable_dates
                    .iter()
                    .map(|d| format!("{}:{}", d.date, d.reason))
                    .collect();
                println!(
                    "{} | {} | {} | {}",
                    p.name,
                    p.role.label(),
                    days.join(";"),
                    dates.join(";")
                );
            }
            0
        }
        Commands::Reset => {
            roster.reset_to_default();
            storage.save(&roster)?;
            0
        }
        Commands::Generate {
            month,
            seed,
            min_leaders,
            min_participants,
            grid,
        } => {
            let (month, year) = parse_month(&month)?;
            let policy = HeadcountPolicy {
                min_leaders,
                min_participants,
            };
            policy.check(&roster)?;
            let opts = AssignOptions {
                seed,
                ..AssignOptions::default()
            };
            let schedule = generate_schedule(month, year, &roster.people, opts)?;
            let text = if grid {
                GridRenderer.render(&schedule, &roster)
            } else {
                ListRenderer.render(&schedule, &roster)
            };
            print!("{text}");
            let conflicts = schedule.conflict_count();
            if conflicts > 0 {
                eprintln!("Found {conflicts} day(s) with conflicts");
                // Code 2 = WARNING
                2
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}

fn member_id(roster: &Roster, name: &str) -> Result<PersonId> {
    roster
        .find_person_by_name(name)
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow::anyhow!("unknown member: {name}"))
}

/// `YYYY-MM` -> (mois 0..=11, année)
fn parse_month(raw: &str) -> Result<(u32, i32)> {
    let (year, month) = raw
        .split_once('-')
        .with_context(|| format!("expected YYYY-MM, got {raw}"))?;
    let year: i32 = year.parse().with_context(|| format!("invalid year: {year}"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month: {month}"))?;
    if !(1..=12).contains(&month) {
        bail!("month must be between 01 and 12, got {month}");
    }
    Ok((month - 1, year))
}
