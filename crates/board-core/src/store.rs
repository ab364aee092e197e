//! Board State Store
//!
//! Owns the task collection and the active project / search filters. The
//! collection is private; every mutation goes through a `Board` method.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::config::BoardConfig;
use crate::domain::{find_by_id, Column, Project, ProjectId, Status, Task, TaskDraft, TaskId, User, COLUMNS};
use crate::error::{BoardError, BoardResult};
use crate::filter;
use crate::ids::{Clock, IdGenerator, SystemClock, TimestampIds};
use crate::seed::Seed;

pub struct Board {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    active_project: ProjectId,
    search_query: String,
    acting_user: User,
    default_tags: Vec<String>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("tasks", &self.tasks.len())
            .field("active_project", &self.active_project)
            .field("search_query", &self.search_query)
            .finish_non_exhaustive()
    }
}

impl Board {
    /// Board with timestamp ids and the UTC date
    pub fn new(seed: Seed, config: BoardConfig) -> BoardResult<Self> {
        Self::with_sources(seed, config, Box::new(TimestampIds::default()), Box::new(SystemClock))
    }

    /// Board with caller-supplied id and date sources
    pub fn with_sources(
        seed: Seed,
        config: BoardConfig,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> BoardResult<Self> {
        let Seed { users, projects, tasks } = seed;

        let first_project = projects
            .first()
            .map(|p| p.id.clone())
            .ok_or_else(|| BoardError::UnknownProject(ProjectId::from("")))?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.clone()) {
                return Err(BoardError::DuplicateTaskId(task.id.clone()));
            }
            if find_by_id(&projects, &task.project_id).is_none() {
                return Err(BoardError::UnknownProject(task.project_id.clone()));
            }
        }

        let acting_user = find_by_id(&users, &config.acting_user)
            .cloned()
            .ok_or_else(|| BoardError::UnknownUser(config.acting_user.clone()))?;

        let active_project = match config.initial_project {
            Some(id) if find_by_id(&projects, &id).is_some() => id,
            Some(id) => {
                warn!(project = %id, "configured initial project not found, using first project");
                first_project
            }
            None => first_project,
        };

        info!(tasks = tasks.len(), projects = projects.len(), active = %active_project, "board initialized");

        Ok(Self {
            users,
            projects,
            tasks,
            active_project,
            search_query: String::new(),
            acting_user,
            default_tags: config.default_tags,
            ids,
            clock,
        })
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        find_by_id(&self.tasks, id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    /// The configured acting user (assignee for tasks created from the UI)
    pub fn acting_user(&self) -> &User {
        &self.acting_user
    }

    pub fn active_project_id(&self) -> &ProjectId {
        &self.active_project
    }

    /// The active project, if its id names a seeded project
    pub fn active_project(&self) -> Option<&Project> {
        find_by_id(&self.projects, &self.active_project)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Tasks shown in `status`'s column under the current filters
    pub fn visible_tasks(&self, status: Status) -> Vec<&Task> {
        filter::visible_tasks(&self.tasks, &self.active_project, &self.search_query, status)
    }

    pub fn column_count(&self, status: Status) -> usize {
        self.visible_tasks(status).len()
    }

    // ========================
    // Mutations
    // ========================

    /// Create a task in the active project under `target`.
    ///
    /// A blank title is rejected with [`BoardError::EmptyTitle`], and an
    /// active project id naming no project with [`BoardError::UnknownProject`].
    /// Either way the collection is left untouched.
    pub fn add_task(&mut self, actor: &User, target: Status, draft: TaskDraft) -> BoardResult<Task> {
        if !draft.has_title() {
            warn!(%target, "rejected task with empty title");
            return Err(BoardError::EmptyTitle);
        }
        if self.active_project().is_none() {
            warn!(project = %self.active_project, "rejected task for unknown project");
            return Err(BoardError::UnknownProject(self.active_project.clone()));
        }

        let id = self.fresh_id();
        let description = Some(draft.description).filter(|d| !d.trim().is_empty());
        let task = Task {
            id,
            project_id: self.active_project.clone(),
            title: draft.title,
            description,
            status: target,
            priority: draft.priority,
            assignees: vec![actor.clone()],
            due_date: Some(self.clock.today()),
            tags: self.default_tags.clone(),
        };

        info!(id = %task.id, project = %task.project_id, status = %target, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Remove a task. Absent ids are a no-op returning `None`.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        let removed = self.tasks.remove(index);
        info!(id = %id, "task deleted");
        Some(removed)
    }

    /// Set a task's status, returning the previous one.
    /// Absent ids are a no-op returning `None`; same-status moves are allowed.
    pub fn move_task(&mut self, id: &TaskId, status: Status) -> Option<Status> {
        let task = self.tasks.iter_mut().find(|t| &t.id == id)?;
        let previous = std::mem::replace(&mut task.status, status);
        info!(id = %id, from = %previous, to = %status, "task moved");
        Some(previous)
    }

    pub fn set_active_project(&mut self, id: ProjectId) {
        self.active_project = id;
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Draw ids until one is not already on the board
    fn fresh_id(&mut self) -> TaskId {
        loop {
            let id = self.ids.next_id();
            if self.task(&id).is_none() {
                return id;
            }
            warn!(id = %id, "generated id already in use, drawing another");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::ids::{FixedClock, SequentialIds};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn demo_board() -> Board {
        Board::with_sources(
            Seed::demo(),
            BoardConfig::default(),
            Box::new(SequentialIds::default()),
            Box::new(FixedClock(today())),
        )
        .expect("demo seed is valid")
    }

    #[test]
    fn test_add_task_defaults() {
        let mut board = demo_board();
        let actor = board.acting_user().clone();
        let task = board
            .add_task(&actor, Status::Review, TaskDraft::new("Ship it", "", Priority::High))
            .unwrap();

        assert_eq!(task.id.as_str(), "task-1");
        assert_eq!(task.project_id, ProjectId::from("p1"));
        assert_eq!(task.status, Status::Review);
        assert_eq!(task.assignees, vec![actor]);
        assert_eq!(task.tags, vec!["New".to_string()]);
        assert_eq!(task.due_date, Some(today()));
        assert!(task.description.is_none());
        assert_eq!(board.tasks().last(), Some(&task));
    }

    #[test]
    fn test_add_task_uses_active_project() {
        let mut board = demo_board();
        board.set_active_project(ProjectId::from("p3"));
        let actor = board.users()[1].clone();
        let task = board
            .add_task(&actor, Status::Todo, TaskDraft::new("Tokens", "colors", Priority::Low))
            .unwrap();
        assert_eq!(task.project_id, ProjectId::from("p3"));
        assert_eq!(task.assignees[0].name, "Sarah");
        assert_eq!(task.description.as_deref(), Some("colors"));
    }

    #[test]
    fn test_add_task_rejects_unknown_active_project() {
        let mut board = demo_board();
        board.set_active_project(ProjectId::from("p404"));
        let before = board.tasks().to_vec();
        let actor = board.acting_user().clone();

        let err = board.add_task(&actor, Status::Todo, TaskDraft::new("orphan", "", Priority::Medium));
        assert!(matches!(err, Err(BoardError::UnknownProject(id)) if id.as_str() == "p404"));
        assert_eq!(board.tasks(), before.as_slice());

        // No id was consumed by the rejected call
        board.set_active_project(ProjectId::from("p1"));
        let task = board
            .add_task(&actor, Status::Todo, TaskDraft::new("kept", "", Priority::Medium))
            .unwrap();
        assert_eq!(task.id.as_str(), "task-1");
        assert!(board.projects().iter().any(|p| p.id == task.project_id));
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut board = demo_board();
        let before = board.tasks().to_vec();
        let actor = board.acting_user().clone();
        for title in ["", "   ", "\n\t"] {
            let err = board.add_task(&actor, Status::Todo, TaskDraft::new(title, "d", Priority::Low));
            assert!(matches!(err, Err(BoardError::EmptyTitle)));
        }
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_add_task_skips_colliding_ids() {
        let mut board = Board::with_sources(
            Seed::demo(),
            BoardConfig::default(),
            Box::new(SequentialIds::new("t")),
            Box::new(FixedClock(today())),
        )
        .unwrap();
        let actor = board.acting_user().clone();
        let task = board
            .add_task(&actor, Status::Todo, TaskDraft::new("Fresh", "", Priority::Medium))
            .unwrap();
        assert_eq!(task.id.as_str(), "t7");
    }

    #[test]
    fn test_move_task_is_idempotent() {
        let mut board = demo_board();
        let id = TaskId::from("t2");
        assert_eq!(board.move_task(&id, Status::Done), Some(Status::Todo));
        let after_once = board.tasks().to_vec();
        assert_eq!(board.move_task(&id, Status::Done), Some(Status::Done));
        assert_eq!(board.tasks(), after_once.as_slice());
        assert_eq!(board.task(&id).map(|t| t.status), Some(Status::Done));
    }

    #[test]
    fn test_move_missing_task_is_noop() {
        let mut board = demo_board();
        let before = board.tasks().to_vec();
        assert_eq!(board.move_task(&TaskId::from("nope"), Status::Done), None);
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_task_removes_exactly_one() {
        let mut board = demo_board();
        let before = board.tasks().to_vec();
        let removed = board.delete_task(&TaskId::from("t3")).unwrap();
        assert_eq!(removed.id.as_str(), "t3");

        let expected: Vec<Task> = before.into_iter().filter(|t| t.id.as_str() != "t3").collect();
        assert_eq!(board.tasks(), expected.as_slice());

        assert!(board.delete_task(&TaskId::from("t3")).is_none());
        assert_eq!(board.tasks(), expected.as_slice());
    }

    #[test]
    fn test_initial_project_from_config() {
        let config = BoardConfig {
            initial_project: Some(ProjectId::from("p2")),
            ..BoardConfig::default()
        };
        let board = Board::new(Seed::demo(), config).unwrap();
        assert_eq!(board.active_project().map(|p| p.name.as_str()), Some("Q4 Marketing"));
    }

    #[test]
    fn test_unknown_initial_project_falls_back_to_first() {
        let config = BoardConfig {
            initial_project: Some(ProjectId::from("p404")),
            ..BoardConfig::default()
        };
        let board = Board::new(Seed::demo(), config).unwrap();
        assert_eq!(board.active_project_id(), &ProjectId::from("p1"));
    }

    #[test]
    fn test_unknown_acting_user_is_rejected() {
        let config = BoardConfig {
            acting_user: "ghost".into(),
            ..BoardConfig::default()
        };
        let err = Board::new(Seed::demo(), config).unwrap_err();
        assert!(matches!(err, BoardError::UnknownUser(id) if id.as_str() == "ghost"));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let mut seed = Seed::demo();
        seed.tasks.push(seed.tasks[0].clone());
        assert!(matches!(
            Board::new(seed, BoardConfig::default()),
            Err(BoardError::DuplicateTaskId(_))
        ));

        let mut seed = Seed::demo();
        seed.tasks[0].project_id = ProjectId::from("p9");
        assert!(matches!(
            Board::new(seed, BoardConfig::default()),
            Err(BoardError::UnknownProject(_))
        ));
    }

    #[test]
    fn test_column_count_tracks_filters() {
        let mut board = demo_board();
        assert_eq!(board.column_count(Status::InProgress), 1);
        board.set_search_query("nothing matches");
        assert_eq!(board.column_count(Status::InProgress), 0);
        board.set_search_query("");
        board.set_active_project(ProjectId::from("p3"));
        assert!(Status::ALL.iter().all(|s| board.column_count(*s) == 0));
    }
}
