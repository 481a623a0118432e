//! isekai - text shell for the adventure
//!
//! Reads choices from stdin and prints what the engine reports. Holds no
//! game rules of its own.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use isekai::actors::{CharacterClass, ItemUse};
use isekai::combat::{seeded, ActionSource, Command, TurnReport, TurnView};
use isekai::dungeon::{Difficulty, RunOutcome};
use isekai::persistence::SqliteSaveStore;
use isekai::town::random_event;
use isekai::{Config, Origin, Session};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Isekai Fantasy Adventure
#[derive(Parser, Debug)]
#[command(name = "isekai", version, about = "A turn-based fantasy adventure")]
struct Args {
    /// Character name (prompted for when omitted)
    name: Option<String>,

    /// Character class: warrior, mage or healer
    #[arg(short, long)]
    class: Option<String>,

    /// Resume the saved character with this name, if one exists
    #[arg(short, long)]
    load: bool,

    /// Config file (default: Isekai.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// SQLite save database
    #[arg(short, long)]
    database: Option<String>,

    /// Dungeon difficulty label: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,
}

/// Line-oriented stdin reader
struct Console {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    /// Print `prompt` and read one trimmed line; None on end of input
    fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        match self.lines.next() {
            Some(Ok(line)) => Some(line.trim().to_string()),
            _ => None,
        }
    }
}

impl ActionSource for Console {
    fn next_command(&mut self, view: &TurnView) -> Command {
        println!(
            "{} HP: {} MP: {} | {} HP: {}",
            view.player_name, view.player_hp, view.player_magic, view.enemy_name, view.enemy_hp
        );
        match self.ask("Do you want to (1) Attack, (2) Cast Spell, (3) Special Attack, (4) Defend? ") {
            Some(code) => match code.parse() {
                Ok(action) => Command::Act(action),
                Err(_) => Command::Unrecognized(code),
            },
            None => Command::Abandon,
        }
    }

    fn on_turn(&mut self, report: &TurnReport) {
        for message in &report.messages {
            println!("{}", message);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(database) = args.database {
        config.db_path = Some(database);
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty
            .parse::<Difficulty>()
            .map_err(|_| anyhow!("Unknown difficulty: {}", difficulty))?;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("RNG seed: {}", seed);
    let mut rng = seeded(seed);

    let mut console = Console::new();
    println!("Welcome to the Isekai Fantasy Adventure!");

    let name = match args.name {
        Some(name) => name,
        None => console.ask("Enter your character's name: ").unwrap_or_default(),
    };
    let class_choice = match args.class {
        Some(class) => class,
        None => console
            .ask("Choose your class (Warrior, Mage, Healer): ")
            .unwrap_or_default(),
    };
    let class = class_choice.parse().unwrap_or_else(|_| {
        println!("Invalid class choice, defaulting to Warrior.");
        CharacterClass::Warrior
    });

    let load = args.load
        || console
            .ask("Do you want to (1) Load a saved game or (2) Start a new game? ")
            .is_some_and(|choice| choice == "1");

    let store = SqliteSaveStore::open(config.db_path.as_deref()).await?;
    let (mut session, origin) = Session::start(store, &name, class, load).await?;
    if load && origin == Origin::Fresh {
        println!("No save found, starting fresh.");
    }

    while session.player().stats.is_alive() {
        println!("Current time: {}", random_event(&mut rng));
        let player = session.player();
        println!(
            "Your HP: {} | Level: {} | Experience: {} | Gold: {}",
            player.stats.hp, player.stats.level, player.stats.experience, player.gold
        );

        let Some(choice) = console.ask(
            "Do you want to (1) Explore, (2) Enter Town, (3) Explore Dungeon, (4) Use Item, (5) Exit Game? ",
        ) else {
            break;
        };

        match choice.as_str() {
            "1" => {
                println!("You venture forth into the unknown...");
                let summary = session.explore(&mut console, &mut rng);
                if summary.abandoned {
                    break;
                }
            }
            "2" => visit_town(&mut session, &mut console),
            "3" => {
                println!(
                    "{} enters a {}-level dungeon!",
                    session.player().name,
                    config.difficulty
                );
                let report = session.enter_dungeon(config.difficulty, &mut console, &mut rng);
                match report.outcome {
                    RunOutcome::Completed => println!(
                        "{} has conquered the dungeon! (+{} gold, +{} experience)",
                        session.player().name,
                        report.gold_reward,
                        report.experience_reward
                    ),
                    RunOutcome::Failed => {
                        println!("{} has fallen in battle!", session.player().name)
                    }
                    RunOutcome::Abandoned => break,
                }
            }
            "4" => use_item(&mut session, &mut console),
            "5" => {
                println!("Exiting the game... Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    if session.player().stats.is_alive() {
        if let Err(err) = session.save().await {
            println!("Could not save your game: {}", err);
        }
    } else {
        println!("{} has been defeated!", session.player().name);
    }

    Ok(())
}

fn visit_town(session: &mut Session<SqliteSaveStore>, console: &mut Console) {
    let town = session.town();
    println!("{} enters {}.", session.player().name, town.name);
    println!("You encounter some NPCs:");
    for npc in &town.npcs {
        println!(" - {}", npc);
    }

    match console
        .ask("Do you wish to (1) Shop, (2) Join Guild, (3) Leave town? ")
        .as_deref()
    {
        Some("1") => match session.visit_shop() {
            Ok(item) => println!("Item {} added to inventory.", item.name),
            Err(err) => println!("{}", err),
        },
        Some("2") => {
            if session.join_guild() {
                println!("{} joins the Adventurers Guild!", session.player().name);
                println!("You have unlocked Sword Mastery!");
            } else {
                println!("You are already a member of the guild.");
            }
        }
        _ => println!("You leave the town and venture into the wild!"),
    }
}

fn use_item(session: &mut Session<SqliteSaveStore>, console: &mut Console) {
    let inventory = &session.player().inventory;
    if inventory.is_empty() {
        println!("Your inventory is empty.");
        return;
    }
    for (index, item) in inventory.iter().enumerate() {
        println!(" {}) {} ({})", index + 1, item.name, item.kind);
    }

    let Some(index) = console
        .ask("Which item? ")
        .and_then(|choice| choice.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
    else {
        println!("Invalid choice.");
        return;
    };

    match session.use_item(index) {
        Ok(ItemUse::Consumed { item, .. }) => {
            println!("{} uses {}.", session.player().name, item.name)
        }
        Ok(ItemUse::Equipped { item, replaced }) => {
            println!("{} equips {}.", session.player().name, item);
            if let Some(replaced) = replaced {
                println!("{} goes back into the pack.", replaced);
            }
        }
        Err(err) => println!("{}", err),
    }
}
