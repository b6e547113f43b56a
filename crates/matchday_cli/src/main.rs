//! Matchday CLI
//!
//! Drives the core library through a scripted match: decorated players,
//! live commentary on stdout, statistics and media headlines at full time.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use matchday_core::api::match_report_json;
use matchday_core::{
    shared, Captain, Commentator, FootballMatch, Footballer, Injured, MatchConfig, MediaReporter,
    PlayerFactory, Recoverable, StatisticsTracker, TeamSide, YoungTalent,
};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Football match event and player decoration demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the scripted Spartak vs Zenit match with every observer attached
    Demo {
        /// Commentator name used as the line prefix
        #[arg(long, default_value = "Commentator")]
        commentator: String,
    },

    /// List a club roster, or the national squad
    Squad {
        /// Club name (e.g., "Spartak")
        team: Option<String>,

        /// Show the national squad instead of a club
        #[arg(long, default_value = "false")]
        national: bool,
    },

    /// Play the scripted match silently and print the JSON report
    Report,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = MatchConfig::from_env().context("loading match config")?;

    match cli.command {
        Commands::Demo { commentator } => run_demo(config, &commentator),
        Commands::Squad { team, national } => print_squad(team.as_deref(), national),
        Commands::Report => {
            let mut game = FootballMatch::with_config("Spartak", "Zenit", None, config);
            play_script(&mut game)?;
            println!("{}", match_report_json(&game)?);
            Ok(())
        }
    }
}

fn print_squad(team: Option<&str>, national: bool) -> Result<()> {
    let squad = match (team, national) {
        (_, true) => PlayerFactory::create_national_squad(),
        (Some(team), false) => PlayerFactory::create_team_squad(team),
        (None, false) => anyhow::bail!(
            "pass a team name or --national (known teams: {})",
            PlayerFactory::known_teams().join(", ")
        ),
    };

    if squad.is_empty() {
        println!("No roster for {}", team.unwrap_or_default());
    }
    for player in &squad {
        println!("{}", player.describe());
    }
    Ok(())
}

fn run_demo(config: MatchConfig, commentator: &str) -> Result<()> {
    println!("=== Players ===");
    let mut spartak = PlayerFactory::create_team_squad("Spartak").into_iter();
    let keeper = spartak.next().context("Spartak roster is empty")?;
    let defender = spartak.next().context("Spartak roster is too short")?;

    let captain = Captain::new(defender).with_captain_since("2019");
    let mut injured = Injured::new(keeper, "knee sprain", 3)?;
    let prospect = YoungTalent::new(
        Captain::new(PlayerFactory::create_player("midfielder", "Daniil Khlusevich", 77)?),
        0.85,
        19,
    )?;

    for player in [&captain as &dyn Footballer, &injured, &prospect] {
        println!("{}", player.describe());
        println!("  skills: {}", player.skills().join(", "));
        println!("  {}", player.train());
        println!("  {}", player.play());
    }
    if let Some(leader) = captain.as_motivatable() {
        println!("{}", leader.motivate_team());
    }
    if let Some(talent) = prospect.as_developable() {
        println!("{}", talent.develop());
    }
    while !injured.can_play() {
        let name = injured.name().to_string();
        println!("{} recovery: {:?}", name, injured.recover());
    }
    println!("{}", injured.play());

    println!();
    println!("=== Match ===");
    let mut game = FootballMatch::with_config("Spartak", "Zenit", Some("Otkritie Arena"), config);
    let stats = shared(StatisticsTracker::new());
    let media = shared(MediaReporter::new("Sport Express"));
    game.attach(shared(Commentator::with_writer(commentator, std::io::stdout())));
    game.attach(stats.clone());
    game.attach(media.clone());

    play_script(&mut game)?;

    let summary = stats.borrow().match_statistics();
    println!();
    println!("=== Statistics ===");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    println!();
    println!("=== Breaking news ===");
    for headline in media.borrow().breaking_news() {
        println!("{headline}");
    }

    info!(winner = %game.winner(), events = game.event_log().len(), "demo finished");
    Ok(())
}

fn play_script(game: &mut FootballMatch) -> Result<()> {
    let reports = [
        game.start_match()?,
        game.goal(TeamSide::Home, "Quincy Promes", 18, Some("Georgi Dzhikiya"))?,
        game.yellow_card("Yaroslav Rakitskiy", 34, None)?,
        game.substitution("Malcom", "Claudinho", 65)?,
        game.goal(TeamSide::Away, "Claudinho", 78, None)?,
        game.goal(TeamSide::Home, "Quincy Promes", 89, None)?,
        game.finish_match()?,
    ];

    let failures: usize = reports.iter().map(|report| report.failures.len()).sum();
    if failures > 0 {
        warn!(failures, "some observers failed during the match");
    }
    Ok(())
}
