use std::env;
use tracing::{info, warn};

use crate::common::error::WkmError;
use crate::common::result::{OptionExt, ResultExt, WkmResult};
use crate::domain::entities::{project::Project, repository::Repository, workspace::Workspace};

/// アクティブなプロジェクトを取得する
///
/// `config.project` が未設定、または存在しないプロジェクトを指す場合はNone
pub fn get_active_project(workspace: &Workspace) -> Option<&Project> {
    workspace.active_project()
}

/// アクティブなプロジェクトの `repos` に対する操作
pub struct RepositoryRegistry<'a> {
    project: &'a mut Project,
}

impl<'a> RepositoryRegistry<'a> {
    /// プロジェクトを借用してレジストリを作成
    pub fn new(project: &'a mut Project) -> Self {
        Self { project }
    }

    /// アクティブなプロジェクトのレジストリを作成する
    ///
    /// アクティブなプロジェクトがなければ `NoActiveProject` を返す
    pub fn for_active_project(workspace: &'a mut Workspace) -> WkmResult<Self> {
        if let Some(name) = workspace.active_project_name() {
            if !workspace.contains_project(name) {
                warn!(project = name, "Active project does not exist in workspace");
            }
        }

        workspace
            .active_project_mut()
            .map(Self::new)
            .ok_or_wkm(WkmError::NoActiveProject)
    }

    /// 対象プロジェクト名
    pub fn project_name(&self) -> &str {
        &self.project.name
    }

    /// リポジトリを挿入順に列挙する
    pub fn list(&self) -> &[Repository] {
        &self.project.repos
    }

    /// リポジトリを追加する
    ///
    /// パス未指定時はカレントディレクトリを使う。同名チェックは行わない
    pub fn create(&mut self, name: &str, path: Option<String>) -> WkmResult<&Repository> {
        let path = match path {
            Some(path) => path,
            None => env::current_dir()
                .with_filesystem_error("Could not determine current directory", None)?
                .to_string_lossy()
                .into_owned(),
        };

        info!(project = %self.project.name, repository = name, path = %path, "Adding repository");
        Ok(self.project.add_repository(Repository::new(name, path)))
    }

    /// 名前が完全一致する最初のリポジトリを取得
    pub fn find_by_name(&self, name: &str) -> Option<&Repository> {
        self.project.find_repository(name)
    }

    /// リポジトリのパスを解決する
    ///
    /// リポジトリが1つもなければ `EmptyProject`、見つからなければ `RepositoryNotFound`
    pub fn resolve_path(&self, name: &str) -> WkmResult<&str> {
        if self.project.is_empty() {
            return Err(WkmError::empty_project(&self.project.name));
        }

        self.find_by_name(name)
            .map(|repo| repo.path.as_str())
            .ok_or_repository_not_found(name, &self.project.name)
    }
}
