//! Terminal rendering of page payloads.

use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, Row, Table};
use scores_core::page::view::{
    DISCIPLINE_FORM_TEMPLATE, GET_INFO_TEMPLATE, STUDENT_FORM_TEMPLATE,
};
use scores_core::{DebtRecord, Page};
use serde_json::{json, Value};
use std::fmt::Write;

const SCORE_HEADER: &str = "Балл";

/// Renders one page as text, or as JSON when `as_json` is set.
pub fn render_page(page: &Page, as_json: bool) -> String {
    match page {
        Page::Rendered { template, context } if as_json => json!({
            "template": template,
            "context": context,
        })
        .to_string(),
        Page::Rendered { template, context } => render_template(template, context),
        Page::ErrorFragment { message, link } if as_json => json!({
            "error": message,
            "link": link,
            "html": page.error_html(),
        })
        .to_string(),
        Page::ErrorFragment { message, link } => format!("{message}\nВернуться назад: {link}"),
    }
}

pub fn render_debt_records(debts: &[DebtRecord], as_json: bool) -> String {
    if as_json {
        return json!({ "debts": debts }).to_string();
    }
    let rows: Vec<Vec<String>> = debts
        .iter()
        .map(|debt| {
            vec![
                debt.name.clone(),
                debt.discipline.clone(),
                debt.score.to_string(),
            ]
        })
        .collect();
    render_table(&["Студент", "Дисциплина", SCORE_HEADER], &rows)
}

fn render_template(template: &str, context: &Value) -> String {
    match template {
        GET_INFO_TEMPLATE => {
            "Поиск: `student <ФИО>` или `discipline <название>`".to_string()
        }
        STUDENT_FORM_TEMPLATE => render_lookup(
            format!("Студент: {}", text(&context["student_name"])),
            &context["student_info"],
            &context["stud_stats"],
            ("Дисциплина", "discipline"),
        ),
        DISCIPLINE_FORM_TEMPLATE => render_lookup(
            format!("Дисциплина: {}", text(&context["discipline_name"])),
            &context["discipline_info"],
            &context["disc_stats"],
            ("Студент", "name"),
        ),
        _ => render_table(
            &["Студент", "Дисциплина", SCORE_HEADER],
            &rows_of(&context["students"], &["name", "discipline", "score"]),
        ),
    }
}

fn render_lookup(
    title: String,
    records: &Value,
    stats: &Value,
    (column_title, column_key): (&str, &str),
) -> String {
    let mut out = title;
    out.push('\n');
    out.push_str(&render_table(
        &[column_title, SCORE_HEADER],
        &rows_of(records, &[column_key, "score"]),
    ));
    for (label, key) in [
        ("Количество", "count"),
        ("Максимум", "max"),
        ("Минимум", "min"),
        ("Среднее", "mean"),
        ("Стандартное отклонение", "stddev"),
        ("Дисперсия", "variance"),
    ] {
        let _ = write!(out, "\n{label}: {}", number(&stats[key]));
    }
    out
}

fn rows_of(records: &Value, keys: &[&str]) -> Vec<Vec<String>> {
    records
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| keys.iter().map(|key| text(&row[*key])).collect())
                .collect()
        })
        .unwrap_or_default()
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(headers.to_vec());

    for cells in rows {
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(cells) {
            let alignment = if *header == SCORE_HEADER {
                CellAlignment::Right
            } else {
                CellAlignment::Left
            };
            row.add_cell(Cell::new(cell).set_alignment(alignment));
        }
        table.add_row(row);
    }

    table.to_string()
}

fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number(value: &Value) -> String {
    match value.as_f64() {
        Some(number) if value.is_f64() => format!("{number:.4}"),
        _ => text(value),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_debt_records, render_page};
    use scores_core::{DebtRecord, Page};
    use serde_json::json;

    #[test]
    fn error_fragment_text_mentions_back_link() {
        let page = Page::ErrorFragment {
            message: "X - такого студента нет!".to_string(),
            link: "/get_info/",
        };
        assert_eq!(
            render_page(&page, false),
            "X - такого студента нет!\nВернуться назад: /get_info/"
        );
    }

    #[test]
    fn lookup_page_prints_rows_and_stats() {
        let page = Page::Rendered {
            template: "students_scores/student_form.html",
            context: json!({
                "student_name": "Петров Иван",
                "student_info": [
                    {"id": 1, "name": "Петров Иван", "discipline": "Физика", "score": 50},
                    {"id": 2, "name": "Петров Иван", "discipline": "Химия", "score": 70},
                ],
                "stud_stats": {
                    "count": 2, "max": 70, "min": 50,
                    "mean": 60.0, "stddev": 10.0, "variance": 100.0
                },
            }),
        };

        let text = render_page(&page, false);
        assert!(text.starts_with("Студент: Петров Иван\n"));
        let physics = text
            .lines()
            .find(|line| line.contains("Физика"))
            .expect("physics row");
        assert!(physics.starts_with('|'));
        assert!(physics.contains("50"));
        assert!(text.contains("Дисциплина"));
        assert!(text.contains("Количество: 2"));
        assert!(text.contains("Дисперсия: 100.0000"));
    }

    #[test]
    fn debt_records_render_one_table_row_each() {
        let debts = vec![
            DebtRecord {
                id: 1,
                name: "Сидоров".to_string(),
                discipline: "Физика".to_string(),
                score: 40,
            },
            DebtRecord {
                id: 2,
                name: "Козлов".to_string(),
                discipline: "Химия".to_string(),
                score: 58,
            },
        ];

        let text = render_debt_records(&debts, false);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines
            .iter()
            .any(|line| line.contains("Студент") && line.contains("Балл")));
        assert!(lines
            .iter()
            .any(|line| line.contains("Сидоров") && line.contains("40")));
        assert!(lines
            .iter()
            .any(|line| line.contains("Козлов") && line.contains("58")));
    }

    #[test]
    fn json_mode_wraps_template_and_context() {
        let page = Page::Rendered {
            template: "students_scores/get_info.html",
            context: json!({}),
        };
        let value: serde_json::Value = serde_json::from_str(&render_page(&page, true)).unwrap();
        assert_eq!(value["template"], "students_scores/get_info.html");
        assert_eq!(value["context"], json!({}));
    }
}
