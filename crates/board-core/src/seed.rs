//! Demo Seed Data
//!
//! Static users, projects and starting tasks the board opens with.

use chrono::NaiveDate;

use crate::domain::{Priority, Project, Status, Task, User};

/// Reference data plus the initial task collection
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl Seed {
    /// The demo board: three users, three projects, tasks `t1`..`t6`
    pub fn demo() -> Self {
        let users = users();
        let tasks = initial_tasks(&users);
        Self {
            users,
            projects: projects(),
            tasks,
        }
    }
}

pub fn users() -> Vec<User> {
    vec![
        User::new("u1", "Alex", "https://picsum.photos/100/100?random=1"),
        User::new("u2", "Sarah", "https://picsum.photos/100/100?random=2"),
        User::new("u3", "Mike", "https://picsum.photos/100/100?random=3"),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project::new("p1", "SaaS Platform V2", "核心产品重构与AI功能集成", "🚀"),
        Project::new("p2", "Q4 Marketing", "年底市场营销活动与物料准备", "📈"),
        Project::new("p3", "Design System", "统一公司UI组件库", "🎨"),
    ]
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn initial_tasks(users: &[User]) -> Vec<Task> {
    let pick = |indices: &[usize]| -> Vec<User> {
        indices.iter().filter_map(|&i| users.get(i).cloned()).collect()
    };

    let mut t1 = Task::new("t1", "p1", "集成 Gemini API", Status::InProgress, Priority::High)
        .with_description("使用 Google GenAI SDK 实现智能文本摘要功能。")
        .with_assignees(pick(&[0]))
        .with_tags(["AI", "Backend"]);
    t1.due_date = date(2023, 11, 20);

    let mut t2 = Task::new("t2", "p1", "设计新版登录页", Status::Todo, Priority::Medium)
        .with_description("根据新的品牌指南更新登录和注册流程UI。")
        .with_assignees(pick(&[1]))
        .with_tags(["UI/UX", "Frontend"]);
    t2.due_date = date(2023, 11, 25);

    vec![
        t1,
        t2,
        Task::new("t3", "p1", "修复 WebSocket 连接断开问题", Status::Review, Priority::High)
            .with_assignees(pick(&[0, 2]))
            .with_tags(["Bug", "Network"]),
        Task::new("t4", "p1", "部署 V2 到预发布环境", Status::Done, Priority::Low)
            .with_assignees(pick(&[2]))
            .with_tags(["DevOps"]),
        Task::new("t5", "p2", "撰写双十一活动文案", Status::InProgress, Priority::High)
            .with_assignees(pick(&[1]))
            .with_tags(["Copywriting"]),
        Task::new("t6", "p2", "制作社交媒体海报", Status::Todo, Priority::Medium)
            .with_assignees(pick(&[1]))
            .with_tags(["Design"]),
    ]
}
