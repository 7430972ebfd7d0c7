use tracing::info;

use crate::common::error::WkmError;
use crate::common::result::WkmResult;
use crate::domain::entities::{project::Project, workspace::Workspace};

/// 一覧表示用のプロジェクト概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// プロジェクト名
    pub name: String,

    /// アクティブなプロジェクトかどうか
    pub is_active: bool,
}

/// プロジェクト作成の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateProjectOutcome {
    /// 新規作成し、アクティブに設定した
    Created,
    /// 同名のプロジェクトが既に存在するため何もしなかった
    AlreadyExists,
}

/// `workspace.projects` に対する操作
pub struct ProjectRegistry<'a> {
    workspace: &'a mut Workspace,
}

impl<'a> ProjectRegistry<'a> {
    /// ワークスペースを借用してレジストリを作成
    pub fn new(workspace: &'a mut Workspace) -> Self {
        Self { workspace }
    }

    /// 全プロジェクトを挿入順に列挙する
    ///
    /// `is_active` は `config.project` と一致する最初のエントリのみtrueになる
    pub fn list(&self) -> Vec<ProjectSummary> {
        let active = self.workspace.active_project_name();
        let mut active_seen = false;

        self.workspace
            .projects
            .iter()
            .map(|project| {
                let is_active = !active_seen && Some(project.name.as_str()) == active;
                active_seen |= is_active;
                ProjectSummary {
                    name: project.name.clone(),
                    is_active,
                }
            })
            .collect()
    }

    /// 名前が完全一致する最初のプロジェクトを取得
    pub fn find_by_name(&self, name: &str) -> Option<&Project> {
        self.workspace.find_project(name)
    }

    /// プロジェクトを作成し、アクティブに設定する
    ///
    /// 同名のプロジェクトが存在する場合はワークスペースを変更しない
    pub fn create(&mut self, name: &str) -> CreateProjectOutcome {
        if self.workspace.contains_project(name) {
            info!(project = name, "Project already exists");
            return CreateProjectOutcome::AlreadyExists;
        }

        self.workspace.projects.push(Project::new(name));
        self.workspace.set_active_project(name);
        info!(project = name, "Created project and set it active");
        CreateProjectOutcome::Created
    }

    /// 既存のプロジェクトをアクティブに設定する
    pub fn select_active(&mut self, name: &str) -> WkmResult<()> {
        if !self.workspace.contains_project(name) {
            return Err(WkmError::project_not_found(name));
        }

        self.workspace.set_active_project(name);
        info!(project = name, "Selected active project");
        Ok(())
    }
}
