use rusqlite::Connection;
use scores_core::db::open_db_in_memory;
use scores_core::{
    LookupError, LookupKind, LookupOutcome, LookupService, NewScore, RecordId, RepoError,
    RepoResult, ScoreRecord, ScoreRepository, SqliteScoreRepository, UnknownHandlerTypeError,
};

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScoreRepository::try_new(&conn).unwrap();
    for (name, discipline, score) in [
        ("Бочкин Иван", "Высшая математика", 85),
        ("Бочкин Иван", "Информатика", 90),
        ("Бочкин Иван", "Физика", 78),
        ("Сидоров Сергей", "Высшая математика", 90),
        ("Петров Иван", "Высшая математика", 78),
    ] {
        repo.create_score(&NewScore::new(name, discipline, score))
            .unwrap();
    }
    conn
}

#[test]
fn student_lookup_summarizes_matching_scores() {
    let conn = seeded_connection();
    let service = LookupService::new(SqliteScoreRepository::try_new(&conn).unwrap());

    let LookupOutcome::Found(report) = service
        .lookup(LookupKind::Student, "Бочкин Иван")
        .unwrap()
    else {
        panic!("student should be found");
    };

    assert_eq!(report.kind, LookupKind::Student);
    assert_eq!(report.key, "Бочкин Иван");
    let scores: Vec<u32> = report.records.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![85, 90, 78]);
    assert_eq!(report.stats.count, 3);
    assert_eq!((report.stats.max, report.stats.min), (90, 78));
    assert!((report.stats.mean - 84.333_333_333_333_33).abs() < 1e-9);
    assert!((report.stats.variance - 26.666_666_666_666_668).abs() < 1e-9);
}

#[test]
fn discipline_lookup_summarizes_matching_scores() {
    let conn = seeded_connection();
    let service = LookupService::new(SqliteScoreRepository::try_new(&conn).unwrap());

    let LookupOutcome::Found(report) = service
        .lookup(LookupKind::Discipline, "Высшая математика")
        .unwrap()
    else {
        panic!("discipline should be found");
    };

    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Бочкин Иван", "Сидоров Сергей", "Петров Иван"]);
    assert_eq!(report.stats.count, 3);
    assert!((report.stats.stddev - 5.163_977_794_943_222).abs() < 1e-9);
}

#[test]
fn unknown_student_yields_not_found_message() {
    let conn = seeded_connection();
    let service = LookupService::new(SqliteScoreRepository::try_new(&conn).unwrap());

    let outcome = service.lookup(LookupKind::Student, "NoSuchName").unwrap();
    assert_eq!(
        outcome,
        LookupOutcome::NotFound {
            key: "NoSuchName".to_string(),
            message: "NoSuchName - такого студента нет!".to_string(),
        }
    );
}

#[test]
fn unknown_discipline_and_empty_key_yield_not_found() {
    let conn = seeded_connection();
    let service = LookupService::new(SqliteScoreRepository::try_new(&conn).unwrap());

    let outcome = service
        .lookup(LookupKind::Discipline, "Не существующая")
        .unwrap();
    assert!(matches!(
        outcome,
        LookupOutcome::NotFound { ref message, .. }
            if message == "Не существующая - такой дисциплины нет!"
    ));

    let outcome = service.lookup(LookupKind::Student, "").unwrap();
    assert!(matches!(outcome, LookupOutcome::NotFound { .. }));
}

#[test]
fn factory_rejects_unknown_discriminator() {
    assert_eq!(
        LookupKind::from_discriminator("bogus"),
        Err(UnknownHandlerTypeError("bogus".to_string()))
    );
    assert_eq!(
        LookupKind::from_discriminator("bogus")
            .unwrap_err()
            .to_string(),
        "unknown request type `bogus`; expected student|discipline"
    );
}

struct FailingScoreRepository;

impl ScoreRepository for FailingScoreRepository {
    fn create_score(&self, _score: &NewScore) -> RepoResult<RecordId> {
        Err(RepoError::InvalidData("read-only".to_string()))
    }

    fn list_scores(&self) -> RepoResult<Vec<ScoreRecord>> {
        Err(RepoError::InvalidData("unreadable".to_string()))
    }

    fn find_by_name(&self, _name: &str) -> RepoResult<Vec<ScoreRecord>> {
        Err(RepoError::InvalidData("unreadable".to_string()))
    }

    fn find_by_discipline(&self, _discipline: &str) -> RepoResult<Vec<ScoreRecord>> {
        Err(RepoError::InvalidData("unreadable".to_string()))
    }

    fn find_below(&self, _threshold: u32) -> RepoResult<Vec<ScoreRecord>> {
        Err(RepoError::InvalidData("unreadable".to_string()))
    }
}

#[test]
fn storage_failures_propagate_as_lookup_errors() {
    let service = LookupService::new(FailingScoreRepository);
    let err = service
        .lookup(LookupKind::Student, "Бочкин Иван")
        .unwrap_err();
    assert!(matches!(err, LookupError::Repo(RepoError::InvalidData(_))));
}
