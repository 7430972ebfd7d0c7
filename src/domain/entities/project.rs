use super::repository::Repository;
use serde::{Deserialize, Serialize};

/// プロジェクトエンティティ
///
/// リポジトリをまとめる名前付きのグループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// プロジェクト名
    pub name: String,

    /// プロジェクトが所有するリポジトリのリスト（挿入順）
    pub repos: Vec<Repository>,
}

impl Project {
    /// 空のProjectインスタンスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repos: Vec::new(),
        }
    }

    /// リポジトリリストを設定
    pub fn with_repos(mut self, repos: Vec<Repository>) -> Self {
        self.repos = repos;
        self
    }

    /// 名前が完全一致する最初のリポジトリを取得
    pub fn find_repository(&self, name: &str) -> Option<&Repository> {
        self.repos.iter().find(|r| r.name == name)
    }

    /// リポジトリを末尾に追加し、追加したリポジトリを返す
    pub fn add_repository(&mut self, repo: Repository) -> &Repository {
        self.repos.push(repo);
        &self.repos[self.repos.len() - 1]
    }

    /// リポジトリが1つもないか
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}
