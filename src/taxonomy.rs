//! Skill taxonomy: the catalog of canonical skill names matched in resumes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Groups of the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    CloudDevops,
    Mobile,
    DataScience,
    Other,
}

impl SkillCategory {
    /// Every category, in catalog order.
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Programming,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::CloudDevops,
        SkillCategory::Mobile,
        SkillCategory::DataScience,
        SkillCategory::Other,
    ];

    /// Built-in skills of this category.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Programming => &[
                "python", "javascript", "java", "c++", "c#", "typescript", "go", "rust",
                "php", "ruby", "swift", "kotlin", "scala", "r", "matlab", "perl", "dart", "c",
                "objective-c", "groovy", "lua", "shell", "bash",
            ],
            SkillCategory::Frontend => &[
                "react", "vue", "angular", "html", "css", "tailwind", "bootstrap", "next.js",
                "nuxt", "redux", "webpack", "sass", "less", "svelte", "jquery", "backbone.js",
                "ember.js", "material-ui", "chakra ui",
            ],
            SkillCategory::Backend => &[
                "node.js", "express", "django", "flask", "fastapi", "spring boot", "asp.net",
                "laravel", "rails", "nest.js", "koa", "hapi", "gin", "echo", "actix", "axum",
            ],
            SkillCategory::Database => &[
                "mongodb", "mysql", "postgresql", "redis", "sqlite", "oracle", "cassandra",
                "dynamodb", "elasticsearch", "neo4j", "couchdb", "mariadb", "mssql", "firebase",
                "supabase",
            ],
            SkillCategory::CloudDevops => &[
                "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github",
                "gitlab", "ci/cd", "terraform", "ansible", "circleci", "travis ci", "bitbucket",
                "heroku", "vercel", "netlify", "cloudflare", "nginx", "apache",
            ],
            SkillCategory::Mobile => &[
                "android", "ios", "react native", "flutter", "xamarin", "ionic", "cordova",
                "swift", "kotlin",
            ],
            SkillCategory::DataScience => &[
                "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
                "pandas", "numpy", "jupyter", "keras", "opencv", "nltk", "spacy",
                "transformers", "langchain", "data analysis", "data visualization", "tableau",
                "power bi",
            ],
            SkillCategory::Other => &[
                "api", "rest", "graphql", "microservices", "agile", "scrum", "linux", "windows",
                "macos", "websocket", "grpc", "rabbitmq", "kafka", "celery", "pytest", "jest",
                "mocha", "selenium", "cypress", "postman", "swagger", "oauth", "jwt",
                "blockchain", "web3", "solidity", "ethereum",
            ],
        }
    }
}

/// A sorted, deduplicated catalog of skill names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillTaxonomy {
    skills: Vec<String>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from arbitrary entries. Blank entries are dropped.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut skills: Vec<String> = skills
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        skills.sort();
        skills.dedup();
        Self { skills }
    }

    /// The built-in catalog: all categories combined.
    pub fn builtin() -> Self {
        Self::new(
            SkillCategory::ALL
                .iter()
                .flat_map(|category| category.skills().iter().copied()),
        )
    }

    /// The built-in skills of one category.
    pub fn category(category: SkillCategory) -> Self {
        Self::new(category.skills().iter().copied())
    }

    /// Parse a newline-delimited list. `#` starts a comment line.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a newline-delimited list from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let list = fs::read_to_string(path)
            .map_err(|e| Error::Taxonomy(format!("{}: {}", path.display(), e)))?;
        let taxonomy = Self::parse(&list);
        if taxonomy.is_empty() {
            return Err(Error::Taxonomy(format!(
                "{}: no skills listed",
                path.display()
            )));
        }
        Ok(taxonomy)
    }

    /// Skills in sorted order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the taxonomy has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Exact membership test.
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.binary_search_by(|s| s.as_str().cmp(skill)).is_ok()
    }
}
