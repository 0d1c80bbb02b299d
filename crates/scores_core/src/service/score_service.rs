//! Score Store listing and data loading.

use crate::model::score::{NewScore, ScoreRecord};
use crate::repo::score_repo::ScoreRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service for plain Score Store access.
pub struct ScoreService<R: ScoreRepository> {
    repo: R,
}

impl<R: ScoreRepository> ScoreService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all score rows in storage order.
    pub fn list_scores(&self) -> RepoResult<Vec<ScoreRecord>> {
        self.repo.list_scores()
    }

    /// Validates and stores one score row, returning it with its id.
    pub fn add_score(&self, score: NewScore) -> RepoResult<ScoreRecord> {
        let id = self.repo.create_score(&score)?;
        info!("event=score_add module=service status=ok id={id}");
        Ok(ScoreRecord {
            id,
            name: score.name,
            discipline: score.discipline,
            score: score.score,
        })
    }
}
