use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

const DEFAULT_AGENTS: &[(&str, &[&str])] = &[
    (
        "Conversation",
        &[
            "Dialogue Manager",
            "Intent Classifier",
            "Entity Extractor",
            "Context Tracker",
            "Response Generator",
            "Persona Agent",
        ],
    ),
    (
        "Knowledge",
        &[
            "Retrieval Agent",
            "Document Indexer",
            "Fact Checker",
            "Summarizer",
            "Citation Agent",
            "Knowledge Graph Builder",
        ],
    ),
    (
        "Planning",
        &[
            "Task Planner",
            "Goal Decomposer",
            "Scheduler",
            "Workflow Orchestrator",
            "Priority Ranker",
            "Progress Monitor",
        ],
    ),
    (
        "Coding",
        &[
            "Code Generator",
            "Code Reviewer",
            "Test Writer",
            "Bug Triager",
            "Refactoring Agent",
            "Documentation Writer",
        ],
    ),
    (
        "Data",
        &[
            "Data Cleaner",
            "SQL Agent",
            "Chart Builder",
            "Statistics Analyst",
            "Anomaly Detector",
            "Report Compiler",
        ],
    ),
    (
        "Creative",
        &[
            "Story Writer",
            "Copywriter",
            "Poet",
            "Brainstormer",
            "Image Prompt Designer",
            "Translator",
        ],
    ),
    (
        "Operations",
        &[
            "Deployment Agent",
            "Log Analyzer",
            "Incident Responder",
            "Cost Optimizer",
            "Backup Manager",
            "Health Checker",
        ],
    ),
    (
        "Security",
        &[
            "Threat Detector",
            "Access Auditor",
            "Secret Scanner",
            "Compliance Checker",
            "Vulnerability Scanner",
            "Privacy Guard",
        ],
    ),
    (
        "Support",
        &[
            "Ticket Router",
            "FAQ Agent",
            "Escalation Agent",
            "Feedback Collector",
            "Onboarding Guide",
            "Sentiment Analyzer",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    pub fn default_agents() -> Self {
        let categories = DEFAULT_AGENTS
            .iter()
            .map(|(category, names)| {
                (
                    (*category).to_string(),
                    names.iter().map(|name| (*name).to_string()).collect(),
                )
            })
            .collect();
        Self::new(categories)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("failed to read taxonomy: {}", path.display()))?;
        let taxonomy: Taxonomy = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse taxonomy: {}", path.display()))?;

        if taxonomy.expected_set().is_empty() {
            bail!("taxonomy defines no agent names: {}", path.display());
        }

        Ok(taxonomy)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default_agents()),
        }
    }

    pub fn expected_set(&self) -> BTreeSet<String> {
        self.categories
            .values()
            .flatten()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn name_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
