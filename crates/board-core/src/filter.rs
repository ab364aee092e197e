//! Visible-task derivation
//!
//! Recomputed from the full collection on every call; nothing is cached.

use tracing::debug;

use crate::domain::{ProjectId, Status, Task};

/// Tasks of `project_id` in column `status` whose title matches `query`.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// every title. Output keeps the order of `all`.
pub fn visible_tasks<'a>(
    all: &'a [Task],
    project_id: &ProjectId,
    query: &str,
    status: Status,
) -> Vec<&'a Task> {
    let visible: Vec<&Task> = all
        .iter()
        .filter(|task| &task.project_id == project_id && task.status == status)
        .filter(|task| task.title_matches(query))
        .collect();
    debug!(project = %project_id, %status, query, count = visible.len(), "derived visible tasks");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn make_task(id: &str, project: &str, title: &str, status: Status) -> Task {
        Task::new(id, project, title, status, Priority::Medium)
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_filters_by_project_and_status() {
        let all = vec![
            make_task("a", "p1", "One", Status::Todo),
            make_task("b", "p2", "Two", Status::Todo),
            make_task("c", "p1", "Three", Status::Done),
            make_task("d", "p1", "Four", Status::Todo),
        ];
        let got = visible_tasks(&all, &ProjectId::from("p1"), "", Status::Todo);
        assert_eq!(ids(&got), ["a", "d"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = vec![make_task("x", "p1", "Deploy V2", Status::Review)];
        let project = ProjectId::from("p1");
        for query in ["deploy", "V2", "DEPLOY V2"] {
            assert_eq!(visible_tasks(&all, &project, query, Status::Review).len(), 1, "query {query:?}");
        }
        assert!(visible_tasks(&all, &project, "xyz", Status::Review).is_empty());
    }

    #[test]
    fn test_never_leaks_other_projects_or_columns() {
        let mut all = Vec::new();
        for (i, project) in ["p1", "p2", "p3"].iter().enumerate() {
            for status in Status::ALL {
                all.push(make_task(&format!("{project}-{i}-{status}"), project, "same title", status));
            }
        }
        for project in ["p1", "p2", "p3", "missing"] {
            let project = ProjectId::from(project);
            for status in Status::ALL {
                for task in visible_tasks(&all, &project, "TITLE", status) {
                    assert_eq!(task.project_id, project);
                    assert_eq!(task.status, status);
                }
            }
        }
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let all = vec![
            make_task("a", "p1", "NoSpaces", Status::Todo),
            make_task("b", "p1", "has space", Status::Todo),
        ];
        let got = visible_tasks(&all, &ProjectId::from("p1"), " ", Status::Todo);
        assert_eq!(ids(&got), ["b"]);
    }
}
