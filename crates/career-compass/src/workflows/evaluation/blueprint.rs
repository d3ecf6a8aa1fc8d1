use serde::{Deserialize, Serialize};

use super::domain::TechFocus;
use super::engine::SeniorityTier;

/// Seniority rung a job template is written for. `Lead` and `Architect`
/// exist only under the architecture focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Architect,
}

impl TemplateLevel {
    pub const fn label(&self) -> &'static str {
        match self {
            TemplateLevel::Junior => "Junior",
            TemplateLevel::Mid => "Mid-level",
            TemplateLevel::Senior => "Senior",
            TemplateLevel::Lead => "Tech Lead",
            TemplateLevel::Architect => "Architect",
        }
    }

    /// Tier tag carried on postings built from this template.
    pub const fn tier(&self) -> SeniorityTier {
        match self {
            TemplateLevel::Junior => SeniorityTier::Entry,
            TemplateLevel::Mid => SeniorityTier::Mid,
            TemplateLevel::Senior | TemplateLevel::Lead => SeniorityTier::Senior,
            TemplateLevel::Architect => SeniorityTier::Staff,
        }
    }
}

#[derive(Debug)]
pub struct JobTemplate {
    pub focus: TechFocus,
    pub level: TemplateLevel,
    pub requirements: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct ToolEntry {
    pub name: &'static str,
    pub justification: &'static str,
}

/// Curated tool catalog for one focus: a base list plus entries that only
/// make sense past the junior years.
#[derive(Debug)]
pub struct ToolShelf {
    pub focus: TechFocus,
    pub entries: Vec<ToolEntry>,
    pub advanced: Vec<ToolEntry>,
}

/// Platforms too generic to ever recommend. Curation keeps these out of the
/// shelves and the recommender re-checks emitted names against this list.
pub const TOOL_DENYLIST: &[&str] = &[
    "LeetCode",
    "HackerRank",
    "CodeChef",
    "GitHub",
    "GitLab",
    "Bitbucket",
    "VS Code",
    "IntelliJ IDEA",
    "Coursera",
    "Udemy",
    "GeeksforGeeks",
];

/// Static, ordered recommendation content: job templates keyed by
/// (focus, level) and tool shelves keyed by focus. Lookup walks the vectors
/// in declaration order so selection stays deterministic.
#[derive(Debug)]
pub struct RecommendationBlueprint {
    jobs: Vec<JobTemplate>,
    shelves: Vec<ToolShelf>,
    design_tools: Vec<ToolEntry>,
    general_tools: Vec<ToolEntry>,
}

impl RecommendationBlueprint {
    pub fn standard() -> Self {
        Self {
            jobs: standard_job_templates(),
            shelves: standard_tool_shelves(),
            design_tools: vec![
                ToolEntry {
                    name: "Excalidraw or Draw.io",
                    justification: "system architecture diagrams",
                },
                ToolEntry {
                    name: "Miro",
                    justification: "collaborative design whiteboarding",
                },
            ],
            general_tools: vec![
                ToolEntry {
                    name: "Postman",
                    justification: "API development and testing",
                },
                ToolEntry {
                    name: "Docker",
                    justification: "containerization basics",
                },
                ToolEntry {
                    name: "Sentry",
                    justification: "error tracking and monitoring",
                },
            ],
        }
    }

    pub fn job_template(&self, focus: TechFocus, level: TemplateLevel) -> Option<&JobTemplate> {
        self.jobs
            .iter()
            .find(|template| template.focus == focus && template.level == level)
    }

    pub fn tool_shelf(&self, focus: TechFocus) -> Option<&ToolShelf> {
        self.shelves.iter().find(|shelf| shelf.focus == focus)
    }

    pub fn design_tools(&self) -> &[ToolEntry] {
        &self.design_tools
    }

    pub fn general_tools(&self) -> &[ToolEntry] {
        &self.general_tools
    }

    pub fn job_templates(&self) -> &[JobTemplate] {
        &self.jobs
    }
}

fn standard_job_templates() -> Vec<JobTemplate> {
    vec![
        JobTemplate {
            focus: TechFocus::Backend,
            level: TemplateLevel::Junior,
            requirements: vec![
                "Java/Python, REST APIs, SQL, strong DSA fundamentals",
                "Go/Python, microservices basics, distributed systems interest",
                "Node.js or Java, API design, testing, debugging skills",
                "Python/Java, relational schemas, caching basics, clean code habits",
                "REST services, Git workflow, unit testing, SQL joins",
                "Java or Go, HTTP fundamentals, queue basics, code reviews",
            ],
        },
        JobTemplate {
            focus: TechFocus::Backend,
            level: TemplateLevel::Mid,
            requirements: vec![
                "Microservices, Kafka, Redis, 3+ years production experience",
                "System design knowledge, database optimization, API scaling",
                "Distributed systems, event-driven architecture, mentoring juniors",
                "Service decomposition, observability, schema migrations at scale",
                "gRPC or REST at scale, caching strategy, incident handling",
                "Kafka pipelines, Postgres tuning, API versioning discipline",
            ],
        },
        JobTemplate {
            focus: TechFocus::Backend,
            level: TemplateLevel::Senior,
            requirements: vec![
                "Microservices at scale, trade-off analysis, architecture decisions",
                "High-throughput systems, cross-team collaboration, technical leadership",
                "System architecture, 10M+ scale, strategic technical direction",
                "Platform ownership, capacity planning, architecture reviews",
                "Latency budgets, multi-region design, mentoring senior engineers",
                "Event-driven architecture, reliability targets, org-wide standards",
            ],
        },
        JobTemplate {
            focus: TechFocus::Fullstack,
            level: TemplateLevel::Junior,
            requirements: vec![
                "React + Node.js, REST APIs, SQL, strong fundamentals",
                "JavaScript/TypeScript, frontend + backend, testing, cloud basics",
                "MERN or Django + React, API design, deployment",
                "TypeScript, component basics, REST integration, Git discipline",
                "React, Express, Postgres, end-to-end feature delivery",
                "HTML/CSS/JS, API consumption, automated tests, deployment basics",
            ],
        },
        JobTemplate {
            focus: TechFocus::Fullstack,
            level: TemplateLevel::Mid,
            requirements: vec![
                "React + Node.js, system design, 3+ years production",
                "End-to-end ownership, microservices, database optimization",
                "Architecture decisions, scalability, mentor juniors, cloud platforms",
                "Feature leadership, GraphQL or REST, performance budgets",
                "TypeScript across the stack, CI/CD, observability basics",
                "Service boundaries, React performance, data modeling",
            ],
        },
        JobTemplate {
            focus: TechFocus::Fullstack,
            level: TemplateLevel::Senior,
            requirements: vec![
                "Technical leadership, architecture, cross-team projects, 5+ years",
                "Frontend + backend at scale, strategic decisions, org impact",
                "Full-stack architecture, mentoring, performance optimization expertise",
                "Platform direction, design systems, API governance",
                "Cross-team delivery, hiring input, production ownership",
                "End-to-end architecture, capacity planning, staff mentoring",
            ],
        },
        JobTemplate {
            focus: TechFocus::Frontend,
            level: TemplateLevel::Junior,
            requirements: vec![
                "React, JavaScript, CSS, API integration, testing",
                "React/Vue, responsive design, REST APIs, version control",
                "HTML/CSS/JavaScript, React basics, mobile-first design",
                "Component patterns, accessibility basics, Git workflow",
                "TypeScript basics, styling systems, API consumption",
            ],
        },
        JobTemplate {
            focus: TechFocus::Frontend,
            level: TemplateLevel::Mid,
            requirements: vec![
                "React + TypeScript, state management, performance optimization",
                "Component architecture, testing, accessibility, 3+ years",
                "React, Next.js, GraphQL, cross-browser compatibility",
                "Design-system contributions, bundle budgets, code reviews",
                "State machines, server-side rendering, web vitals ownership",
            ],
        },
        JobTemplate {
            focus: TechFocus::Frontend,
            level: TemplateLevel::Senior,
            requirements: vec![
                "Frontend architecture, design systems, technical leadership",
                "React ecosystem, performance, mentor engineers, strategic decisions",
                "UI architecture, scalability, cross-team impact, 5+ years",
                "Platform tooling, accessibility standards, org-wide guidelines",
                "Rendering strategy, performance culture, hiring input",
            ],
        },
        JobTemplate {
            focus: TechFocus::Data,
            level: TemplateLevel::Junior,
            requirements: vec![
                "Python, SQL, Airflow, data pipelines, ETL basics",
                "Python, Pandas, scikit-learn, model deployment basics",
                "SQL, Python, data visualization, business insights",
                "ETL jobs, warehouse schemas, notebook hygiene",
                "Batch pipelines, data validation, dashboard basics",
            ],
        },
        JobTemplate {
            focus: TechFocus::Data,
            level: TemplateLevel::Mid,
            requirements: vec![
                "Spark, Airflow, data lakes, 3+ years experience",
                "PyTorch/TensorFlow, MLOps, model deployment, scaling",
                "Python, ML models, A/B testing, production deployments",
                "Streaming pipelines, feature stores, data contracts",
                "Warehouse modeling, orchestration, cost-aware queries",
            ],
        },
        JobTemplate {
            focus: TechFocus::Data,
            level: TemplateLevel::Senior,
            requirements: vec![
                "Data architecture, large-scale pipelines, technical leadership",
                "ML systems, model optimization, cross-functional leadership",
                "Data strategy, ML infrastructure, org-wide impact",
                "Platform design, governance, mentoring data engineers",
                "Lakehouse architecture, SLA ownership, strategic roadmaps",
            ],
        },
        JobTemplate {
            focus: TechFocus::DevOps,
            level: TemplateLevel::Junior,
            requirements: vec![
                "AWS/GCP, Docker, CI/CD, Linux, scripting",
                "Kubernetes, monitoring, incident response, automation",
                "AWS services, infrastructure as code, basic networking",
                "Pipeline maintenance, container builds, shell fluency",
                "Cloud fundamentals, alert triage, deployment automation",
            ],
        },
        JobTemplate {
            focus: TechFocus::DevOps,
            level: TemplateLevel::Mid,
            requirements: vec![
                "Kubernetes, Terraform, monitoring, 3+ years production",
                "Site reliability, incident management, automation, on-call",
                "AWS/GCP/Azure, infrastructure design, cost optimization",
                "GitOps delivery, observability stacks, capacity planning",
                "Cluster operations, IaC modules, runbook ownership",
            ],
        },
        JobTemplate {
            focus: TechFocus::DevOps,
            level: TemplateLevel::Senior,
            requirements: vec![
                "Platform engineering, reliability, technical leadership, 5+ years",
                "Cloud infrastructure, team mentoring, strategic planning",
                "Infrastructure architecture, cross-team impact, org strategy",
                "SLO programs, multi-region design, incident leadership",
                "Platform roadmaps, reliability culture, budget ownership",
            ],
        },
        JobTemplate {
            focus: TechFocus::Architecture,
            level: TemplateLevel::Lead,
            requirements: vec![
                "Technical direction, architecture, team mentoring, delivery",
                "Team leadership, project planning, technical decisions, hiring",
                "Technical strategy, cross-team collaboration, architecture",
                "Roadmap ownership, design reviews, stakeholder alignment",
                "Delivery leadership, system design, engineering standards",
            ],
        },
        JobTemplate {
            focus: TechFocus::Architecture,
            level: TemplateLevel::Architect,
            requirements: vec![
                "System design, scalability, cloud architecture, technical consulting",
                "Enterprise architecture, strategic planning, org-wide impact",
                "Distributed systems, technical roadmaps, architecture reviews",
                "Platform strategy, reference architectures, governance",
                "Cross-org design authority, migration strategy, standards",
            ],
        },
    ]
}

fn standard_tool_shelves() -> Vec<ToolShelf> {
    vec![
        ToolShelf {
            focus: TechFocus::Backend,
            entries: vec![
                ToolEntry {
                    name: "Postman or Insomnia",
                    justification: "API development and testing",
                },
                ToolEntry {
                    name: "DataGrip or DBeaver",
                    justification: "advanced database management",
                },
                ToolEntry {
                    name: "Docker",
                    justification: "containerization for local development",
                },
                ToolEntry {
                    name: "k6 or Locust",
                    justification: "load testing and performance",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Terraform",
                    justification: "infrastructure as code",
                },
                ToolEntry {
                    name: "Prometheus + Grafana",
                    justification: "monitoring and metrics",
                },
            ],
        },
        ToolShelf {
            focus: TechFocus::Frontend,
            entries: vec![
                ToolEntry {
                    name: "React DevTools",
                    justification: "browser debugging extension",
                },
                ToolEntry {
                    name: "Lighthouse",
                    justification: "performance and accessibility audits",
                },
                ToolEntry {
                    name: "Storybook",
                    justification: "component documentation and testing",
                },
                ToolEntry {
                    name: "Webpack Bundle Analyzer",
                    justification: "bundle size optimization",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Chromatic",
                    justification: "visual regression testing",
                },
                ToolEntry {
                    name: "Sentry",
                    justification: "error tracking and monitoring",
                },
            ],
        },
        ToolShelf {
            focus: TechFocus::Fullstack,
            entries: vec![
                ToolEntry {
                    name: "Postman",
                    justification: "API development and testing",
                },
                ToolEntry {
                    name: "Docker",
                    justification: "full-stack containerization",
                },
                ToolEntry {
                    name: "React DevTools",
                    justification: "frontend debugging",
                },
                ToolEntry {
                    name: "CircleCI or Jenkins",
                    justification: "CI/CD pipeline automation",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Datadog or New Relic",
                    justification: "application monitoring",
                },
                ToolEntry {
                    name: "Sentry",
                    justification: "error tracking across the stack",
                },
            ],
        },
        ToolShelf {
            focus: TechFocus::Data,
            entries: vec![
                ToolEntry {
                    name: "MLflow",
                    justification: "ML experiment tracking",
                },
                ToolEntry {
                    name: "Weights & Biases",
                    justification: "model training visualization",
                },
                ToolEntry {
                    name: "Airflow or Prefect",
                    justification: "data pipeline orchestration",
                },
                ToolEntry {
                    name: "Great Expectations",
                    justification: "data quality testing",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Databricks",
                    justification: "big data and ML platform",
                },
                ToolEntry {
                    name: "Kubeflow",
                    justification: "ML operations on Kubernetes",
                },
            ],
        },
        ToolShelf {
            focus: TechFocus::DevOps,
            entries: vec![
                ToolEntry {
                    name: "Terraform or Pulumi",
                    justification: "infrastructure as code",
                },
                ToolEntry {
                    name: "Kubernetes Dashboard",
                    justification: "cluster management",
                },
                ToolEntry {
                    name: "Prometheus + Grafana",
                    justification: "metrics and alerting",
                },
                ToolEntry {
                    name: "ArgoCD",
                    justification: "GitOps continuous delivery",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Datadog",
                    justification: "cloud infrastructure monitoring",
                },
                ToolEntry {
                    name: "Vault",
                    justification: "secrets management",
                },
            ],
        },
        ToolShelf {
            focus: TechFocus::Architecture,
            entries: vec![
                ToolEntry {
                    name: "Excalidraw",
                    justification: "system architecture diagrams",
                },
                ToolEntry {
                    name: "Miro",
                    justification: "team collaboration and whiteboarding",
                },
                ToolEntry {
                    name: "Terraform",
                    justification: "infrastructure design and management",
                },
                ToolEntry {
                    name: "Datadog or New Relic",
                    justification: "production system monitoring",
                },
            ],
            advanced: vec![
                ToolEntry {
                    name: "Sentry or Rollbar",
                    justification: "error tracking and alerting",
                },
                ToolEntry {
                    name: "PagerDuty",
                    justification: "incident management",
                },
            ],
        },
    ]
}
