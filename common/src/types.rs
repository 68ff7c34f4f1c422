//! ポートフォリオのコンテンツ型定義
//!
//! 全て静的なシードデータで、実行時には読み取り専用。
//! Web(WASM)とCLIの双方で共有する。

use serde::{Deserialize, Serialize};

/// プロジェクトの外部リンク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectLinks {
    pub demo: String,
    pub source: String,
}

/// プロジェクト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    /// 使用技術（表示順を保持）
    pub technologies: Vec<String>,
    pub category: String,
    pub links: ProjectLinks,
}

/// 研究論文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchPaper {
    pub id: u32,
    pub title: String,
    pub journal: String,
    pub date: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// 職歴
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub period: String,
    /// 勤務地など
    pub location: String,
    pub achievements: Vec<String>,
}

/// スキルカテゴリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
}

/// 資格
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: String,
}

/// 実績の数値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// 外部プロフィールへのリンク（新しいタブで開く）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// 連絡先
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactChannel {
    pub title: String,
    pub value: String,
    pub link: String,
}

/// 本人のプロフィール
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// ヒーローで順に表示する肩書き
    pub roles: Vec<String>,
    pub summary: String,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub resume_url: String,
    pub links: Vec<ExternalLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_serializes_abstract_key() {
        let paper = ResearchPaper {
            id: 1,
            title: "Paper".to_string(),
            summary: "About things".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&paper).expect("シリアライズ失敗");
        assert!(json.contains("\"abstract\":\"About things\""));
    }

    #[test]
    fn test_certification_deserialize_missing_optionals() {
        let json = r#"{"id": 2, "title": "Creating a Business Plan", "issuer": "LinkedIn", "issueDate": "Apr 2022"}"#;
        let cert: Certification = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(cert.issue_date, "Apr 2022");
        assert!(cert.expiry_date.is_none());
        assert!(cert.credential_id.is_none());
    }

    #[test]
    fn test_project_deserialize_minimal() {
        let json = r#"{"id": 9, "title": "CLI", "category": "Tools"}"#;
        let project: Project = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(project.category, "Tools");
        assert!(project.technologies.is_empty());
        assert_eq!(project.links, ProjectLinks::default());
    }
}
