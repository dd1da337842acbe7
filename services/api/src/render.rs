use profile_quiz::http::QuestionSet;
use profile_quiz::report::ProfileReport;
use profile_quiz::saju::{SajuPillar, SajuResult};
use profile_quiz::LocaleTable;

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Heading text from the `report` section, or the key itself when the table lacks it.
fn heading<'a>(table: &'a LocaleTable, key: &'a str) -> &'a str {
    table.text(&["report", key]).unwrap_or(key)
}

pub(crate) fn profile_lines(report: &ProfileReport, table: &LocaleTable) -> Vec<String> {
    let mut lines = Vec::new();
    let name = if report.display_name.is_empty() {
        heading(table, "anonymous")
    } else {
        report.display_name.as_str()
    };
    lines.push(format!(
        "{}: {name} ({})",
        heading(table, "profile"),
        report.locale
    ));

    let reading = &report.mbti_reading;
    lines.push(format!(
        "\n{} {} | {} {}",
        heading(table, "mbti"),
        report.mbti.type_code,
        reading.standard_type,
        reading.label
    ));
    if !reading.description.is_empty() {
        lines.push(format!("  {}", reading.description));
    }
    for axis in &reading.axes {
        lines.push(format!(
            "- {}: {} ({}%)",
            axis.name, axis.dominant_label, axis.percentage
        ));
    }

    lines.push(format!("\n{}", heading(table, "tci")));
    let score = heading(table, "score");
    for (dimension, entry) in report.tci.iter() {
        let name = report
            .tci_names
            .get(&dimension)
            .map(String::as_str)
            .unwrap_or(dimension.as_str());
        lines.push(format!(
            "- {name}: {} ({score} {}) {}",
            entry.level_label, entry.raw_score, entry.label
        ));
    }

    lines.push(format!("\n{}", heading(table, "values")));
    for (dimension, entry) in report.values.iter() {
        let name = report
            .value_names
            .get(&dimension)
            .map(String::as_str)
            .unwrap_or(dimension.as_str());
        lines.push(format!(
            "- {name}: {} ({}% / {}%)",
            entry.label,
            entry.left_percent,
            entry.raw_scores.right_percent()
        ));
    }

    lines.extend(saju_lines(&report.saju, table));
    let saju = &report.saju_reading;
    if !saju.day_stem.label.is_empty() {
        lines.push(format!(
            "- {}: {}",
            heading(table, "day_master"),
            saju.day_stem.label
        ));
    }
    if !saju.zodiac_color.description.is_empty() {
        lines.push(format!("- {}", saju.zodiac_color.description));
    }
    lines
}

pub(crate) fn saju_lines(saju: &SajuResult, table: &LocaleTable) -> Vec<String> {
    let mut lines = vec![format!("\n{} {}", heading(table, "saju"), saju.summary)];
    let pillars: [(&str, Option<&SajuPillar>); 4] = [
        ("year", Some(&saju.year)),
        ("month", Some(&saju.month)),
        ("day", Some(&saju.day)),
        ("hour", saju.hour.as_ref()),
    ];
    for (key, pillar) in pillars {
        let label = heading(table, key);
        match pillar {
            Some(pillar) => lines.push(format!(
                "- {label}: {} {}{} ({}-{}) {}",
                pillar.name(),
                pillar.stem_hanja,
                pillar.branch_hanja,
                pillar.stem_latin,
                pillar.branch_latin,
                pillar.element
            )),
            None => lines.push(format!("- {label}: {}", heading(table, "unknown"))),
        }
    }
    let zodiac = &saju.colored_zodiac;
    lines.push(format!(
        "- {}: {} {} ({})",
        heading(table, "zodiac"),
        zodiac.emoji,
        zodiac.full_name,
        zodiac.zodiac_year
    ));
    lines.push(format!(
        "- {}: {} {}",
        heading(table, "sign"),
        saju.western_sign.emoji,
        saju.western_sign.name
    ));
    lines
}

pub(crate) fn question_lines(set: &QuestionSet, table: &LocaleTable) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} ({})",
        set.length,
        heading(table, "questions"),
        set.locale
    )];
    for (index, question) in set.questions.iter().enumerate() {
        lines.push(format!(
            "\n{:>2}. [{}] {}",
            index + 1,
            question.dimension,
            question.prompt
        ));
        for option in &question.options {
            lines.push(format!("    {}) {}", option.key, option.text));
        }
    }
    lines
}
