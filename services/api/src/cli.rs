use crate::commands::{
    run_locales_check, run_profile, run_questions, run_saju, ProfileArgs, QuestionsArgs, SajuArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use profile_quiz::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Profile Quiz",
    about = "Score personality quizzes and compute saju charts from the command line",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Build a profile from a JSON file of answers
    Profile(ProfileArgs),
    /// Compute the four pillars for a birth date
    Saju(SajuArgs),
    /// Print the active quiz questions
    Questions(QuestionsArgs),
    /// Inspect the interpretation tables
    Locales {
        #[command(subcommand)]
        command: LocalesCommand,
    },
    /// Walk through a simulated quiz session and print the resulting profile
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LocalesCommand {
    /// List keys present in one locale table and missing in the other
    Check,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Profile(args) => run_profile(args).map(|()| ExitCode::SUCCESS),
        Command::Saju(args) => run_saju(args).map(|()| ExitCode::SUCCESS),
        Command::Questions(args) => run_questions(args).map(|()| ExitCode::SUCCESS),
        Command::Locales {
            command: LocalesCommand::Check,
        } => run_locales_check(),
        Command::Demo(args) => run_demo(args).map(|()| ExitCode::SUCCESS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_quiz::{Locale, QuizLength};

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["profile-quiz-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_profile_arguments() {
        let cli = Cli::try_parse_from([
            "profile-quiz-api",
            "profile",
            "--answers",
            "answers.json",
            "--birth-date",
            "1990-05-17",
            "--birth-time",
            "09:30",
            "--locale",
            "en",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Profile(args)) => {
                assert_eq!(args.locale, Some(Locale::En));
                assert!(args.birth_time.is_some());
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_dates_and_lengths() {
        assert!(Cli::try_parse_from(["profile-quiz-api", "saju", "--birth-date", "1990-02-30"])
            .is_err());
        assert!(
            Cli::try_parse_from(["profile-quiz-api", "questions", "--length", "40"]).is_err()
        );
    }

    #[test]
    fn parses_locales_check_and_demo() {
        let cli = Cli::try_parse_from(["profile-quiz-api", "locales", "check"]).expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Locales {
                command: LocalesCommand::Check
            })
        ));

        let cli = Cli::try_parse_from(["profile-quiz-api", "demo", "--length", "33"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.length, Some(QuizLength::Short)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
