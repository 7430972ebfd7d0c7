use serde::{Deserialize, Serialize};

/// リポジトリエンティティ
///
/// プロジェクト内で名前付けされたファイルシステム上の場所
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// プロジェクト内でのリポジトリ名
    pub name: String,

    /// リポジトリのパス（絶対パスまたは相対パス）
    pub path: String,
}

impl Repository {
    /// 新しいRepositoryインスタンスを作成
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
