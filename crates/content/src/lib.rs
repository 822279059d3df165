//! Static portfolio content — the data tables behind the hero, experience,
//! skills, and featured-projects sections, served as JSON and reused by the
//! SEO surface.

use serde::Serialize;
use utoipa::ToSchema;

/// Hero/profile section data.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub summary: &'static [&'static str],
    pub location: &'static str,
    pub social: &'static [SocialLink],
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One professional experience entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
}

/// A named group of related skills.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    pub featured: bool,
}

pub fn profile() -> Profile {
    Profile {
        name: "Ismat Samadov",
        headline: "Machine Learning Engineer & AI Systems Developer",
        tagline: "Production ML Systems | Computer Vision | NLP | MLOps",
        summary: &[
            "Building scalable AI systems and production-ready ML pipelines with \
             expertise in computer vision, natural language processing, and \
             end-to-end model deployment across banking and healthcare sectors.",
            "Currently developing enterprise ML solutions at Kapital Bank while \
             creating open-source AI frameworks and contributing to low-resource \
             language processing for Azerbaijani NLP.",
        ],
        location: "Baku, Azerbaijan",
        social: &[
            SocialLink {
                label: "GitHub",
                url: "https://github.com/Ismat-Samadov",
            },
            SocialLink {
                label: "LinkedIn",
                url: "https://www.linkedin.com/in/ismat-samadov/",
            },
            SocialLink {
                label: "Hugging Face",
                url: "https://huggingface.co/IsmatS",
            },
            SocialLink {
                label: "Kaggle",
                url: "https://www.kaggle.com/ismetsemedov",
            },
        ],
    }
}

pub fn experience() -> &'static [ExperienceEntry] {
    &[
        ExperienceEntry {
            title: "Backend Developer",
            company: "Codeavors",
            period: "Oct 2025 - Present",
            location: "London, England (Remote)",
            highlights: &[
                "Developing backend data services in Python for a tech-driven travel platform",
                "Building and maintaining a cloud backend stack with FastAPI, MongoDB, and Redis",
                "Implementing data fetching, scraping, and analysis for multi-destination bookings",
                "Writing comprehensive tests with pytest behind GitLab CI/CD pipelines",
            ],
        },
        ExperienceEntry {
            title: "SQL Developer",
            company: "Kapital Bank",
            period: "Feb 2023 - Sep 2025",
            location: "Baku, Azerbaijan",
            highlights: &[
                "Writing complex SQL queries for improving fraud detection systems",
                "Optimizing existing scripts and database performance",
                "Developing stored procedures and database optimization solutions",
                "Implementing data extraction and transformation for financial analytics",
            ],
        },
        ExperienceEntry {
            title: "Business Analyst",
            company: "Unibank",
            period: "Dec 2021 - Feb 2023",
            location: "Baku, Azerbaijan",
            highlights: &[
                "Extracted and analyzed data with SQL to derive business insights",
                "Processed data with Python for comprehensive analysis and reporting",
                "Analyzed consumer loan performance and cashback program effectiveness",
                "Built reports and dashboards tracking key business metrics",
            ],
        },
        ExperienceEntry {
            title: "Verificator",
            company: "Unibank",
            period: "Sep 2019 - Dec 2021",
            location: "Baku, Azerbaijan",
            highlights: &[
                "Reviewed consumer loan applications and made approval decisions",
                "Evaluated applicant creditworthiness and risk profiles",
                "Collaborated with fraud prevention teams on pattern recognition",
            ],
        },
    ]
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &[
        SkillGroup {
            category: "Machine Learning",
            skills: &[
                "TensorFlow",
                "PyTorch",
                "scikit-learn",
                "Deep Learning",
                "Model Deployment",
                "Feature Engineering",
            ],
        },
        SkillGroup {
            category: "AI Applications",
            skills: &[
                "NLP",
                "Computer Vision",
                "LLM Integration",
                "RAG Systems",
                "Anomaly Detection",
                "Recommendation Systems",
            ],
        },
        SkillGroup {
            category: "Full Stack Development",
            skills: &["Python", "FastAPI", "Next.js", "React", "REST APIs", "TypeScript"],
        },
        SkillGroup {
            category: "Databases & SQL",
            skills: &[
                "PostgreSQL",
                "SQL Optimization",
                "Database Design",
                "Redis",
                "Data Modeling",
                "ETL Pipelines",
            ],
        },
        SkillGroup {
            category: "MLOps & Tools",
            skills: &["Docker", "Git", "CI/CD", "MLflow", "Jupyter", "Linux"],
        },
        SkillGroup {
            category: "Domain Expertise",
            skills: &[
                "Fraud Detection",
                "Risk Modeling",
                "Financial Systems",
                "Scoring Models",
                "Banking",
            ],
        },
    ]
}

pub fn projects() -> &'static [Project] {
    &[
        Project {
            name: "iHealth",
            description: "Healthcare analytics platform with ML-powered patient outcome prediction",
            tech: &["Python", "FastAPI", "PostgreSQL", "scikit-learn"],
            repo_url: "https://github.com/Ismat-Samadov/ihealth",
            featured: true,
        },
        Project {
            name: "Trackio",
            description: "AI project management with automated task prioritization algorithms",
            tech: &["Next.js", "TypeScript", "PostgreSQL"],
            repo_url: "https://github.com/Ismat-Samadov/trackio",
            featured: true,
        },
        Project {
            name: "Jobry",
            description: "ML-powered job recommendation engine using NLP for skill matching",
            tech: &["Python", "NLP", "FastAPI"],
            repo_url: "https://github.com/Ismat-Samadov/jobry",
            featured: true,
        },
        Project {
            name: "MyFrog",
            description: "AI financial forecasting system for cash flow and revenue prediction",
            tech: &["Python", "Time Series", "PostgreSQL"],
            repo_url: "https://github.com/Ismat-Samadov/myfrog",
            featured: true,
        },
        Project {
            name: "Azerbaijani NLP Toolkit",
            description: "Open-source language processing resources for low-resource Azerbaijani",
            tech: &["Python", "PyTorch", "Transformers"],
            repo_url: "https://github.com/Ismat-Samadov/az-nlp",
            featured: false,
        },
    ]
}

/// Flattened skill list, used for SEO keywords and structured data.
pub fn all_skills() -> Vec<String> {
    skill_groups()
        .iter()
        .flat_map(|group| group.skills.iter().map(|s| s.to_string()))
        .collect()
}

/// Social profile URLs for the person schema.
pub fn profile_urls() -> Vec<String> {
    profile()
        .social
        .iter()
        .map(|link| link.url.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert!(!experience().is_empty());
        assert!(!skill_groups().is_empty());
        assert!(!projects().is_empty());
        assert!(!profile().summary.is_empty());
    }

    #[test]
    fn test_featured_projects_are_a_subset() {
        let featured = projects().iter().filter(|p| p.featured).count();
        assert!(featured >= 1);
        assert!(featured < projects().len());
    }

    #[test]
    fn test_all_skills_flattens_groups() {
        let skills = all_skills();
        assert!(skills.contains(&"PyTorch".to_string()));
        assert!(skills.contains(&"Fraud Detection".to_string()));
        let total: usize = skill_groups().iter().map(|g| g.skills.len()).sum();
        assert_eq!(skills.len(), total);
    }
}
