use crate::infra::{load_service, parse_date, parse_length, parse_locale, parse_time};
use crate::render::{print_lines, profile_lines};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use profile_quiz::error::AppError;
use profile_quiz::questions::ActiveQuiz;
use profile_quiz::report::{ProfileReport, StoredResult};
use profile_quiz::session::{reduce, QuizAction, QuizState, UserInfo};
use profile_quiz::{Locale, QuizLength};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output language, ko or en
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Birth date for the simulated participant
    #[arg(long, value_parser = parse_date, default_value = "1995-07-15")]
    pub(crate) birth_date: NaiveDate,
    /// Birth time for the simulated participant
    #[arg(long, value_parser = parse_time)]
    pub(crate) birth_time: Option<NaiveTime>,
    /// Quiz length, 45 or 33
    #[arg(long, value_parser = parse_length)]
    pub(crate) length: Option<QuizLength>,
    /// Display name for the participant
    #[arg(long, default_value = "홍길동")]
    pub(crate) name: String,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let locale = args.locale.unwrap_or(service.default_locale());
    let quiz = service.quiz(args.length)?;

    println!("Profile quiz demo ({} questions, {locale})", quiz.len());
    let state = simulate_session(
        &quiz,
        UserInfo {
            name: args.name,
            birth_date: args.birth_date,
            birth_time: args.birth_time,
        },
    )?;
    println!(
        "- session complete: {} answers, index {}/{}",
        state.answers.len(),
        state.current_index,
        state.total
    );

    let Some(info) = state.user_info.as_ref() else {
        return Ok(());
    };
    let report = ProfileReport::build(
        service.catalog(),
        locale,
        &state.answers,
        info.birth_date,
        info.birth_time,
        &info.name,
    );
    print_lines(&profile_lines(&report, service.catalog().table(locale)));

    let stored = StoredResult::from_report(&report);
    let restored = stored.restore(service.catalog(), locale)?;
    println!(
        "\nStored result restores to {} with the same TCI levels: {}",
        restored.mbti.type_code,
        restored.tci == report.tci
    );
    Ok(())
}

/// Option picked for the question at `index`: a fixed rotation so reruns print the same profile.
fn scripted_option(index: usize, option_count: usize) -> usize {
    if option_count == 0 {
        return 0;
    }
    (index * 7 + index / 3) % option_count
}

/// Drive the reducer through the quiz, changing one early answer along the way.
fn simulate_session(quiz: &ActiveQuiz, user: UserInfo) -> Result<QuizState, AppError> {
    let mut state = QuizState::for_quiz(quiz);
    state = reduce(&state, QuizAction::SetUserInfo(user));
    state = reduce(&state, QuizAction::SetSessionId("demo-session".to_string()));

    for index in 0..quiz.len() {
        let Some(question) = quiz.question_at(index) else {
            break;
        };
        let Some(option) = question
            .options
            .get(scripted_option(index, question.options.len()))
        else {
            continue;
        };
        let answer = quiz.answer(question.id.as_str(), &option.key)?;
        state = reduce(&state, QuizAction::AnswerSelected(answer));

        if index == 1 {
            if let Some(first) = quiz.question_at(0) {
                if let Some(last_option) = first.options.last() {
                    let changed = quiz.answer(first.id.as_str(), &last_option.key)?;
                    println!("- changed answer for {} to {}", first.id, last_option.key);
                    state = reduce(&state, QuizAction::AnswerSelected(changed));
                }
            }
        }
        state = reduce(&state, QuizAction::Advanced);
    }
    Ok(state)
}
