use rusqlite::Connection;
use scores_core::db::open_db_in_memory;
use scores_core::page::view::render_error_fragment;
use scores_core::{
    DebtRepository, NewScore, Page, Pages, Request, Route, ScoreRepository,
    SqliteDebtRepository, SqliteScoreRepository,
};
use serde_json::json;

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScoreRepository::try_new(&conn).unwrap();
    for (name, discipline, score) in [
        ("Сусарев Евгений", "Тестирование и оценка кач-ва ПО", 85),
        ("Федотова Елена", "Теория вероятности", 58),
        ("Королёв Егор", "Методы оптимизации", 72),
        ("Кузьминов Михаил", "Параллельные и распределенные вычисления", 55),
    ] {
        repo.create_score(&NewScore::new(name, discipline, score))
            .unwrap();
    }
    conn
}

fn names_in(page: &Page) -> Vec<String> {
    page.context().unwrap()["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn index_lists_every_score_row() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(Route::Index, &Request::get())
        .unwrap();

    assert_eq!(page.template(), Some("students_scores/index.html"));
    assert_eq!(
        names_in(&page),
        vec![
            "Сусарев Евгений",
            "Федотова Елена",
            "Королёв Егор",
            "Кузьминов Михаил"
        ]
    );
}

#[test]
fn get_info_renders_static_form() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(Route::GetInfo, &Request::get())
        .unwrap();

    assert_eq!(page.template(), Some("students_scores/get_info.html"));
    assert_eq!(page.context(), Some(&json!({})));
}

#[test]
fn student_info_renders_records_and_stats() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(
            Route::StudentInfo,
            &Request::post([("student", "Федотова Елена")]),
        )
        .unwrap();

    assert_eq!(page.template(), Some("students_scores/student_form.html"));
    let context = page.context().unwrap();
    assert_eq!(context["student_name"], "Федотова Елена");
    assert_eq!(context["student_info"][0]["discipline"], "Теория вероятности");
    assert_eq!(context["stud_stats"]["count"], 1);
    assert_eq!(context["stud_stats"]["max"], 58);
    assert_eq!(context["stud_stats"]["variance"], 0.0);
}

#[test]
fn discipline_info_renders_records_and_stats() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(
            Route::DisciplineInfo,
            &Request::post([("discipline", "Методы оптимизации")]),
        )
        .unwrap();

    assert_eq!(page.template(), Some("students_scores/discipline_form.html"));
    let context = page.context().unwrap();
    assert_eq!(context["discipline_name"], "Методы оптимизации");
    assert_eq!(context["discipline_info"][0]["name"], "Королёв Егор");
    assert_eq!(context["disc_stats"]["mean"], 72.0);
}

#[test]
fn unknown_student_renders_error_fragment_with_back_link() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(
            Route::StudentInfo,
            &Request::post([("student", "Не существующий")]),
        )
        .unwrap();

    assert!(page.is_error());
    assert_eq!(
        page.error_html().unwrap(),
        render_error_fragment("Не существующий - такого студента нет!", "/get_info/")
    );
}

#[test]
fn non_post_lookup_uses_sentinel_key() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(Route::DisciplineInfo, &Request::get())
        .unwrap();

    assert_eq!(
        page,
        Page::ErrorFragment {
            message: "not a POST request - такой дисциплины нет!".to_string(),
            link: "/get_info/",
        }
    );
}

#[test]
fn post_without_field_renders_none_key() {
    let conn = seeded_connection();
    let page = Pages::new(&conn)
        .handle(
            Route::StudentInfo,
            &Request::post([("discipline", "Методы оптимизации")]),
        )
        .unwrap();

    assert!(matches!(
        page,
        Page::ErrorFragment { ref message, .. } if message == "None - такого студента нет!"
    ));
}

#[test]
fn debts_listing_syncs_and_lists_failing_students() {
    let conn = seeded_connection();
    let pages = Pages::new(&conn);

    let page = pages
        .handle(Route::StudentsWithDebts, &Request::get())
        .unwrap();
    assert_eq!(
        page.template(),
        Some("students_scores/students_with_debts.html")
    );
    assert_eq!(names_in(&page), vec!["Федотова Елена", "Кузьминов Михаил"]);

    pages
        .handle(Route::StudentsWithDebts, &Request::get())
        .unwrap();
    let debts = SqliteDebtRepository::try_new(&conn)
        .unwrap()
        .list_debt_records()
        .unwrap();
    let debt_names: Vec<&str> = debts.iter().map(|debt| debt.name.as_str()).collect();
    assert_eq!(debt_names, vec!["Федотова Елена", "Кузьминов Михаил"]);
}

#[test]
fn debts_page_renders_when_a_stored_row_exceeds_field_limits() {
    let conn = seeded_connection();
    let long_name = "Я".repeat(201);
    conn.execute(
        "INSERT INTO student (name, discipline, score) VALUES (?1, 'Физика', 12);",
        [long_name.as_str()],
    )
    .unwrap();
    let pages = Pages::new(&conn);

    let page = pages
        .handle(Route::StudentsWithDebts, &Request::get())
        .unwrap();
    assert_eq!(names_in(&page).len(), 3);

    let debts = SqliteDebtRepository::try_new(&conn)
        .unwrap()
        .list_debt_records()
        .unwrap();
    assert_eq!(debts.len(), 3);
    assert!(debts.iter().any(|debt| debt.name == long_name));
}
