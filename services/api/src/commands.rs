use crate::infra::{load_service, parse_date, parse_length, parse_locale, parse_time};
use crate::render::{print_lines, profile_lines, question_lines, saju_lines};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use profile_quiz::config::AppConfig;
use profile_quiz::error::AppError;
use profile_quiz::http::{ProfileRequest, SajuRequest};
use profile_quiz::locale::TranslationReport;
use profile_quiz::questions::AnswerSelection;
use profile_quiz::{Locale, LocaleCatalog, QuizLength};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// JSON file holding `[{"question_id": "...", "option_key": "..."}]`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: NaiveDate,
    /// Birth time (HH:MM); the hour pillar is omitted without it
    #[arg(long, value_parser = parse_time)]
    pub(crate) birth_time: Option<NaiveTime>,
    /// Output language, ko or en (defaults to APP_DEFAULT_LOCALE)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Name shown, masked, on the profile
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Quiz the answers belong to, 45 or 33 (defaults to APP_QUIZ_LENGTH)
    #[arg(long, value_parser = parse_length)]
    pub(crate) length: Option<QuizLength>,
    /// Print the profile and its stored shape as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SajuArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: NaiveDate,
    /// Birth time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub(crate) birth_time: Option<NaiveTime>,
    /// Heading language, ko or en (defaults to APP_DEFAULT_LOCALE)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Print the chart as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Question language, ko or en
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Quiz length, 45 or 33
    #[arg(long, value_parser = parse_length)]
    pub(crate) length: Option<QuizLength>,
    /// Print the questions as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: Vec<AnswerSelection> =
        serde_json::from_str(&raw).map_err(std::io::Error::from)?;

    let service = load_service()?;
    let request = ProfileRequest {
        answers,
        birth_date: args.birth_date.format("%Y-%m-%d").to_string(),
        birth_time: args
            .birth_time
            .map(|time| time.format("%H:%M").to_string()),
        locale: args.locale.map(|locale| locale.to_string()),
        name: args.name,
        length: args.length.map(|length| length.to_string()),
    };
    let response = service.profile(&request)?;

    if args.json {
        print_json(&response)?;
    } else {
        let table = service.catalog().table(response.report.locale);
        print_lines(&profile_lines(&response.report, table));
    }
    Ok(())
}

pub(crate) fn run_saju(args: SajuArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let saju = service.saju(&SajuRequest {
        birth_date: args.birth_date.format("%Y-%m-%d").to_string(),
        birth_time: args
            .birth_time
            .map(|time| time.format("%H:%M").to_string()),
    })?;

    if args.json {
        print_json(&saju)?;
    } else {
        let locale = args.locale.unwrap_or(service.default_locale());
        print_lines(&saju_lines(&saju, service.catalog().table(locale)));
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let set = service.questions(args.locale, args.length)?;
    if args.json {
        print_json(&set)?;
    } else {
        print_lines(&question_lines(&set, service.catalog().table(set.locale)));
    }
    Ok(())
}

/// Exit status 1 when either table lacks keys the other has.
pub(crate) fn run_locales_check() -> Result<ExitCode, AppError> {
    let config = AppConfig::load()?;
    let report = check_catalog(config.quiz.locale_dir.as_deref())?;

    for key in &report.missing_in_en {
        println!("missing in en: {key}");
    }
    for key in &report.missing_in_ko {
        println!("missing in ko: {key}");
    }

    if report.is_valid() {
        println!("locale tables are complete");
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} key(s) missing in en, {} in ko",
            report.missing_in_en.len(),
            report.missing_in_ko.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

/// Unlike `serve`, an unreadable override directory fails the check instead of
/// falling back to the built-in tables.
fn check_catalog(dir: Option<&Path>) -> Result<TranslationReport, AppError> {
    let catalog = LocaleCatalog::load(dir)?;
    Ok(catalog.check())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
