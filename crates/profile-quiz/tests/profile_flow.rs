use chrono::{NaiveDate, NaiveTime};
use profile_quiz::questions::AnswerSelection;
use profile_quiz::scoring::{
    resolve_tci, resolve_values, AxisDominant, MbtiAxis, MbtiLetter, TciDimension, TciLevel,
    ValueDimension, ValuePole,
};
use profile_quiz::session::{reduce, QuizAction, QuizState, UserInfo};
use profile_quiz::{
    accumulate, resolve_mbti, ActiveQuiz, Answer, Locale, LocaleCatalog, ProfileReport,
    QuizLength, StoredResult,
};

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid birth date")
}

/// Walk the reducer through every question, picking `choose(question_id)` each time.
fn complete_quiz(quiz: &ActiveQuiz, choose: impl Fn(&str) -> &'static str) -> QuizState {
    let mut state = QuizState::for_quiz(quiz);
    state = reduce(
        &state,
        QuizAction::SetUserInfo(UserInfo {
            name: "홍길동".into(),
            birth_date: birth_date(),
            birth_time: NaiveTime::from_hms_opt(9, 30, 0),
        }),
    );

    for index in 0..quiz.len() {
        let question = quiz.question_at(index).expect("question in range");
        let answer = quiz
            .answer(question.id.as_str(), choose(question.id.as_str()))
            .expect("option offered");
        state = reduce(&state, QuizAction::AnswerSelected(answer));
        state = reduce(&state, QuizAction::Advanced);
    }
    state
}

fn report_for(state: &QuizState, locale: Locale) -> ProfileReport {
    let info = state.user_info.as_ref().expect("user info set");
    ProfileReport::build(
        LocaleCatalog::builtin(),
        locale,
        &state.answers,
        info.birth_date,
        info.birth_time,
        &info.name,
    )
}

#[test]
fn first_option_everywhere_yields_a_commander_profile() {
    let quiz = ActiveQuiz::builtin(QuizLength::Full).expect("full quiz");
    let state = complete_quiz(&quiz, |_| "a");

    assert!(state.is_completed);
    assert_eq!(state.answers.len(), 45);

    let report = report_for(&state, Locale::En);
    assert_eq!(report.mbti.type_code, "ENTJ");
    assert!(report.mbti.axes.values().all(|axis| axis.percentage == 100));
    assert_eq!(report.mbti_reading.label, "The Commander");

    for dimension in TciDimension::ALL {
        let entry = report.tci.get(dimension).expect("every dimension resolved");
        assert_eq!(entry.raw_score, 6, "{dimension:?}");
        assert_eq!(entry.level, TciLevel::High);
        assert!(!entry.label.is_empty());
    }
    assert_eq!(report.high_tci_dimensions().len(), 7);

    let expected = [
        (ValueDimension::StabilityChange, ValuePole::Stability),
        (ValueDimension::RelationshipIndividual, ValuePole::Relationship),
        (ValueDimension::AchievementBalance, ValuePole::Achievement),
        (ValueDimension::RealityMeaning, ValuePole::Reality),
    ];
    for (dimension, pole) in expected {
        let entry = report.values.get(dimension).expect("every pair resolved");
        assert_eq!(entry.dominant_pole, pole);
        assert_eq!(entry.left_percent, 100);
    }

    assert_eq!(report.display_name, "홍*동");
    assert!(report.saju.hour.is_some());
}

#[test]
fn short_quiz_with_last_options_stays_low_and_introverted() {
    let quiz = ActiveQuiz::builtin(QuizLength::Short).expect("short quiz");
    let state = complete_quiz(&quiz, |id| if id.starts_with("tci-") { "c" } else { "b" });

    assert_eq!(state.answers.len(), 33);
    let report = report_for(&state, Locale::Ko);

    assert_eq!(report.mbti.type_code, "ISFP");
    assert_eq!(
        report.mbti.axes[&MbtiAxis::IE].dominant,
        AxisDominant::Letter(MbtiLetter::I)
    );
    assert!(report
        .tci
        .iter()
        .all(|(_, entry)| entry.raw_score == -3 && entry.level == TciLevel::Low));
    assert_eq!(
        report
            .values
            .get(ValueDimension::RealityMeaning)
            .map(|entry| entry.dominant_pole),
        Some(ValuePole::Meaning)
    );
}

#[test]
fn answer_order_does_not_change_scores() {
    let quiz = ActiveQuiz::builtin(QuizLength::Full).expect("full quiz");
    let selections: Vec<AnswerSelection> = (0..quiz.len())
        .map(|index| {
            let question = quiz.question_at(index).expect("question in range");
            AnswerSelection {
                question_id: question.id.to_string(),
                option_key: if index % 2 == 0 { "a" } else { "b" }.into(),
            }
        })
        .collect();

    let forward = quiz.answer_all(&selections).expect("answers resolve");
    let mut backward: Vec<Answer> = forward.clone();
    backward.reverse();

    assert_eq!(accumulate(&forward), accumulate(&backward));
}

#[test]
fn stored_profile_restores_the_same_levels() {
    let quiz = ActiveQuiz::builtin(QuizLength::Full).expect("full quiz");
    let state = complete_quiz(&quiz, |id| if id.ends_with("-2") { "b" } else { "a" });
    let report = report_for(&state, Locale::Ko);

    let stored = StoredResult::from_report(&report);
    let json = serde_json::to_string(&stored).expect("stored result serializes");
    let reloaded: StoredResult = serde_json::from_str(&json).expect("stored result parses");
    let restored = reloaded
        .restore(LocaleCatalog::builtin(), Locale::Ko)
        .expect("restorable");

    assert_eq!(restored.mbti.type_code, report.mbti.type_code);
    assert_eq!(restored.tci, report.tci);
    assert_eq!(restored.values, report.values);
    assert_eq!(restored.saju, report.saju);
}

#[test]
fn reset_clears_a_completed_session() {
    let quiz = ActiveQuiz::builtin(QuizLength::Short).expect("short quiz");
    let state = complete_quiz(&quiz, |_| "a");
    let reset = reduce(&state, QuizAction::Reset);

    assert_eq!(reset, QuizState::for_quiz(&quiz));
    assert!(reset.user_info.is_none());
}

/// Full quiz answered with a mix of options; `val-reality-3` is left out so the
/// last value pair ends up even.
const MIXED_ANSWERS: &[(&str, &str)] = &[
    ("mbti-ie-1", "b"), ("mbti-ie-2", "b"), ("mbti-ie-3", "a"),
    ("mbti-ns-1", "a"), ("mbti-ns-2", "a"), ("mbti-ns-3", "b"),
    ("mbti-tf-1", "b"), ("mbti-tf-2", "b"), ("mbti-tf-3", "a"),
    ("mbti-jp-1", "a"), ("mbti-jp-2", "b"), ("mbti-jp-3", "a"),
    ("tci-ns-1", "a"), ("tci-ns-2", "a"), ("tci-ns-3", "a"),
    ("tci-ha-1", "c"), ("tci-ha-2", "c"), ("tci-ha-3", "c"),
    ("tci-rd-1", "b"), ("tci-rd-2", "b"), ("tci-rd-3", "b"),
    ("tci-ps-1", "b"), ("tci-ps-2", "b"), ("tci-ps-3", "b"),
    ("tci-sd-1", "a"), ("tci-sd-2", "b"), ("tci-sd-3", "c"),
    ("tci-co-1", "a"), ("tci-co-2", "c"), ("tci-co-3", "c"),
    ("tci-st-1", "b"), ("tci-st-2", "b"), ("tci-st-3", "b"),
    ("val-stability-1", "a"), ("val-stability-2", "a"), ("val-stability-3", "b"),
    ("val-relationship-1", "b"), ("val-relationship-2", "b"), ("val-relationship-3", "a"),
    ("val-achievement-1", "a"), ("val-achievement-2", "b"), ("val-achievement-3", "b"),
    ("val-reality-1", "a"), ("val-reality-2", "b"),
];

fn mixed_answers() -> Vec<Answer> {
    let quiz = ActiveQuiz::builtin(QuizLength::Full).expect("full quiz");
    let selections: Vec<AnswerSelection> = MIXED_ANSWERS
        .iter()
        .map(|(id, key)| AnswerSelection {
            question_id: (*id).into(),
            option_key: (*key).into(),
        })
        .collect();
    quiz.answer_all(&selections).expect("answers resolve")
}

#[test]
fn mixed_answers_resolve_each_dimension_independently() {
    let answers = mixed_answers();
    assert_eq!(answers.len(), 44);
    let raw = accumulate(&answers);

    let mbti = resolve_mbti(&raw);
    assert_eq!(mbti.type_code, "INFJ");
    assert!(mbti.axes.values().all(|axis| axis.percentage == 67));

    let tci = resolve_tci(&raw, Locale::En);
    let level = |dimension| tci.get(dimension).map(|entry| (entry.raw_score, entry.level));
    assert_eq!(level(TciDimension::NS), Some((6, TciLevel::High)));
    assert_eq!(level(TciDimension::HA), Some((-3, TciLevel::Low)));
    assert_eq!(level(TciDimension::RD), Some((0, TciLevel::Medium)));
    assert_eq!(level(TciDimension::PS), Some((0, TciLevel::Low)));
    assert_eq!(level(TciDimension::SD), Some((1, TciLevel::Medium)));
    assert_eq!(level(TciDimension::CO), Some((0, TciLevel::Low)));
    assert_eq!(level(TciDimension::ST), Some((0, TciLevel::Medium)));

    let values = resolve_values(&raw, Locale::En);
    let pole = |dimension| values.get(dimension).map(|entry| entry.dominant_pole);
    assert_eq!(pole(ValueDimension::StabilityChange), Some(ValuePole::Stability));
    assert_eq!(pole(ValueDimension::RelationshipIndividual), Some(ValuePole::Individual));
    assert_eq!(pole(ValueDimension::AchievementBalance), Some(ValuePole::Balance));
    assert_eq!(pole(ValueDimension::RealityMeaning), Some(ValuePole::Balanced));

    let reality = values
        .get(ValueDimension::RealityMeaning)
        .expect("pair resolved");
    assert_eq!(reality.left_percent, 50);
    assert!(!reality.label.is_empty());
}

#[test]
fn resolving_the_same_answers_twice_gives_the_same_profile() {
    let answers = mixed_answers();

    assert_eq!(resolve_mbti(&accumulate(&answers)), resolve_mbti(&accumulate(&answers)));

    let build = || {
        ProfileReport::build(
            LocaleCatalog::builtin(),
            Locale::Ko,
            &answers,
            birth_date(),
            NaiveTime::from_hms_opt(23, 45, 0),
            "김민수",
        )
    };
    assert_eq!(build(), build());
}
