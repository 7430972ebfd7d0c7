use super::project::Project;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// アクティブなプロジェクト名を保持する設定キー
pub const ACTIVE_PROJECT_KEY: &str = "project";

/// リポジトリを開くエディタコマンドを保持する設定キー
pub const EDITOR_KEY: &str = "editor";

/// ワークスペースのエンティティ
///
/// ストアファイルに永続化されるルートドキュメント。
/// `config.project` が存在しないプロジェクトを指すことは許容され、
/// その場合はアクティブなプロジェクトなしとして扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// プロジェクトのリスト（挿入順）
    pub projects: Vec<Project>,

    /// 自由形式の設定（キーと値はともに文字列）
    pub config: BTreeMap<String, String>,
}

impl Workspace {
    /// 空のWorkspaceインスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// プロジェクトリストを設定
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// 設定値を追加
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// 名前が完全一致する最初のプロジェクトを取得
    pub fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// 名前が完全一致する最初のプロジェクトを可変参照で取得
    pub fn find_project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.name == name)
    }

    /// 指定名のプロジェクトが存在するか
    pub fn contains_project(&self, name: &str) -> bool {
        self.find_project(name).is_some()
    }

    /// アクティブなプロジェクト名（未設定ならNone）
    pub fn active_project_name(&self) -> Option<&str> {
        self.config_value(ACTIVE_PROJECT_KEY)
    }

    /// アクティブなプロジェクト名を設定
    pub fn set_active_project(&mut self, name: impl Into<String>) {
        self.config.insert(ACTIVE_PROJECT_KEY.to_string(), name.into());
    }

    /// アクティブなプロジェクトを取得
    pub fn active_project(&self) -> Option<&Project> {
        self.active_project_name()
            .and_then(|name| self.find_project(name))
    }

    /// アクティブなプロジェクトを可変参照で取得
    pub fn active_project_mut(&mut self) -> Option<&mut Project> {
        let name = self.active_project_name()?.to_string();
        self.find_project_mut(&name)
    }

    /// 設定されたエディタコマンド
    pub fn editor(&self) -> Option<&str> {
        self.config_value(EDITOR_KEY).filter(|e| !e.trim().is_empty())
    }

    /// 設定値を取得
    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    /// 設定値を更新
    pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.insert(key.into(), value.into());
    }

    /// 設定値を削除し、削除前の値を返す
    pub fn unset_config(&mut self, key: &str) -> Option<String> {
        self.config.remove(key)
    }
}
