mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, HabitAction, InsightsAction, LogAction};
use std::process;

use zenith::output;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(name, cli.human),
        Commands::Habit { action } => match action {
            HabitAction::Add {
                name,
                category,
                icon,
                goal,
                reminder,
            } => cmd::habit::run_add(&name, category, icon, goal, reminder, cli.date, cli.human),
            HabitAction::Edit {
                id,
                name,
                category,
                icon,
                goal,
                reminder,
            } => cmd::habit::run_edit(&id, name, category, icon, goal, reminder, cli.date, cli.human),
            HabitAction::Rm { id } => cmd::habit::run_rm(&id, cli.human),
            HabitAction::List => cmd::habit::run_list(cli.date, cli.human),
            HabitAction::Done { id } => cmd::habit::run_toggle(&id, true, cli.date, cli.human),
            HabitAction::Undo { id } => cmd::habit::run_toggle(&id, false, cli.date, cli.human),
            HabitAction::Progress { id, value } => {
                cmd::habit::run_progress(&id, value, cli.date, cli.human)
            }
        },
        Commands::Log { action } => match action {
            LogAction::Mood { mood } => {
                cmd::log::run_update(cmd::log::LogField::Mood(mood), cli.date, cli.human)
            }
            LogAction::Stress { level } => {
                cmd::log::run_update(cmd::log::LogField::Stress(level), cli.date, cli.human)
            }
            LogAction::Water { cups } => {
                cmd::log::run_update(cmd::log::LogField::Water(cups), cli.date, cli.human)
            }
            LogAction::Sleep { hours } => {
                cmd::log::run_update(cmd::log::LogField::Sleep(hours), cli.date, cli.human)
            }
            LogAction::Exercise { minutes } => {
                cmd::log::run_update(cmd::log::LogField::Exercise(minutes), cli.date, cli.human)
            }
            LogAction::Journal { text } => {
                cmd::log::run_update(cmd::log::LogField::Journal(text), cli.date, cli.human)
            }
            LogAction::Show => cmd::log::run_show(cli.date, cli.human),
        },
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Insights { action } => match action {
            InsightsAction::Balance => cmd::insights::run_balance(cli.date, cli.human),
            InsightsAction::Trend => cmd::insights::run_trend(cli.date, cli.human),
            InsightsAction::Averages => cmd::insights::run_averages(cli.human),
            InsightsAction::Achievements => cmd::insights::run_achievements(cli.human),
        },
        Commands::Export { output } => {
            cmd::export::run_export(output.as_deref(), cli.date, cli.human)
        }
        Commands::Import { file } => cmd::export::run_import(&file, cli.human),
        Commands::Reset { yes } => cmd::reset::run(yes, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value, cli.human),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        let err = output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
