//! 組み込みコンテンツ
//!
//! ページに表示する全データ。差し替えたい場合は同じ形のJSONを `from_json` で読む。

use crate::error::Result;
use crate::types::{
    Certification, ContactChannel, Experience, ExternalLink, Profile, Project, ProjectLinks,
    ResearchPaper, SkillCategory, Stat,
};
use serde::{Deserialize, Serialize};

const RESUME_URL: &str =
    "https://drive.google.com/file/d/1uVXO2gIB4C2Wz1MvpuQ5MGlX9Hy70UpH/view?usp=sharing";

/// ページ全体のコンテンツ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub papers: Vec<ResearchPaper>,
    pub certifications: Vec<Certification>,
    pub contact_channels: Vec<ContactChannel>,
}

impl Portfolio {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let portfolio: Self = serde_json::from_str(json)?;
        Ok(portfolio)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 組み込みデータ
    pub fn builtin() -> Self {
        Self {
            profile: profile(),
            experiences: experiences(),
            skills: skills(),
            projects: projects(),
            papers: papers(),
            certifications: certifications(),
            contact_channels: contact_channels(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile() -> Profile {
    Profile {
        name: "Tanish".into(),
        headline: "Software Engineer & Researcher".into(),
        roles: strings(&[
            "Data Enthusiast",
            "Data Analyst",
            "Automation Specialist",
            "AI/ML Researcher",
        ]),
        summary: "I'm a passionate software engineer and researcher with expertise in artificial \
                  intelligence, machine learning, and web development. I create elegant solutions \
                  to complex problems."
            .into(),
        about: strings(&[
            "Discover my journey, passion, and the drive that fuels my work in technology and research.",
            "I work across data engineering, analytics and applied machine learning, turning raw data \
             into pipelines, dashboards and models that support real decisions.",
        ]),
        stats: vec![
            Stat { value: "2+".into(), label: "Years Experience".into() },
            Stat { value: "8+".into(), label: "Projects Completed".into() },
            Stat { value: "2".into(), label: "Research Papers".into() },
        ],
        resume_url: RESUME_URL.into(),
        links: vec![
            ExternalLink { label: "GitHub".into(), url: "https://github.com".into() },
            ExternalLink {
                label: "LinkedIn".into(),
                url: "https://www.linkedin.com/in/tanish-b0363621b/".into(),
            },
            ExternalLink { label: "Google Scholar".into(), url: "https://scholar.google.com".into() },
        ],
    }
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: 102,
            role: "Data Analyst".into(),
            company: "WNS Analytics".into(),
            period: "June 2024 - Present".into(),
            location: "Gurgaon, India".into(),
            achievements: strings(&[
                "Working on advanced analytics projects, leveraging data-driven insights to support business decisions.",
                "Collaborating with cross-functional teams to deliver actionable solutions using modern analytics tools.",
            ]),
        },
        Experience {
            id: 100,
            role: "Prism Intern".into(),
            company: "Samsung research and development".into(),
            period: "June 2023 - June 2024".into(),
            location: "Remote".into(),
            achievements: strings(&[
                "Developed a sophisticated device leveraging cutting-edge technologies such as Memgraph, KnowledgeGraph, and Graph Machine Learning to accurately predict human activity.",
                "Implemented robust algorithms and data models within the device, enabling real-time analysis and interpretation of complex activity patterns.",
            ]),
        },
        Experience {
            id: 101,
            role: "Frontend Intern".into(),
            company: "Oasis Infobyte".into(),
            period: "July 2023 - Aug. 2023".into(),
            location: "Delhi, India".into(),
            achievements: strings(&[
                "Developed a responsive website using HTML, CSS, JavaScript, Spring Boot and MySQL integrating user authentication, and checkout functionality.",
            ]),
        },
    ]
}

fn category(title: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        title: title.into(),
        items: strings(items),
    }
}

fn skills() -> Vec<SkillCategory> {
    vec![
        category("Core Programming", &[
            "Python – Data engineering, automation & ML",
            "SQL – Complex queries & data modeling",
            "Bash/Shell – System automation & scripting",
            "Git – Version control & collaboration",
        ]),
        category("Data Engineering", &[
            "Apache Airflow – Workflow orchestration",
            "Apache Spark – Big data processing",
            "dbt – Data transformation & modeling",
            "Apache Kafka – Stream processing",
            "ETL/ELT Pipeline Design",
            "Data Lake & Warehouse Architecture",
        ]),
        category("Generative AI & ML", &[
            "OpenAI GPT/Claude APIs – LLM integration",
            "LangChain – AI application framework",
            "Hugging Face – Transformers & models",
            "scikit-learn – Machine learning",
            "TensorFlow/PyTorch – Deep learning",
            "Vector Databases – Pinecone, Chroma",
        ]),
        category("Cloud & Databases", &[
            "AWS (S3, Lambda, Glue, Redshift)",
            "Google Cloud (BigQuery, Vertex AI)",
            "PostgreSQL, MySQL – Relational DBs",
            "MongoDB – NoSQL databases",
            "Snowflake – Cloud data warehouse",
        ]),
        category("Python Libraries", &[
            "pandas, numpy – Data manipulation",
            "requests, httpx – API integration",
            "FastAPI, Flask – Web frameworks",
            "pydantic – Data validation",
            "celery – Task queues",
            "prefect – Workflow management",
        ]),
        category("Automation & DevOps", &[
            "Docker – Containerization",
            "Kubernetes – Orchestration",
            "CI/CD Pipelines – GitHub Actions",
            "Terraform – Infrastructure as Code",
            "Monitoring – Prometheus, Grafana",
            "Web Scraping – Selenium, BeautifulSoup",
        ]),
        category("Analytics & Visualization", &[
            "Tableau, Power BI – Business intelligence",
            "matplotlib, seaborn – Data visualization",
            "plotly, streamlit – Interactive dashboards",
            "Jupyter Notebooks – Data exploration",
            "Apache Superset – Open-source BI",
        ]),
        category("Tools & Frameworks", &[
            "Apache Airflow – Workflow scheduling",
            "Apache NiFi – Data flow management",
            "Great Expectations – Data validation",
            "Apache Beam – Stream/batch processing",
            "MLflow – ML lifecycle management",
            "Dagster – Data orchestration",
        ]),
    ]
}

fn projects() -> Vec<Project> {
    let placeholder = || ProjectLinks { demo: "#".into(), source: "#".into() };

    vec![
        Project {
            id: 1,
            title: "AI-Powered Health Assistant".into(),
            description: "A machine learning-based health assistant that provides personalized health \
                          recommendations based on user data and medical history."
                .into(),
            image: "https://img.heroui.chat/image/ai?w=800&h=600&u=123".into(),
            technologies: strings(&["Python", "TensorFlow", "React", "Node.js"]),
            category: "AI".into(),
            links: placeholder(),
        },
        Project {
            id: 2,
            title: "Smart Home Dashboard".into(),
            description: "A comprehensive dashboard for monitoring and controlling smart home devices \
                          with real-time analytics and automation capabilities."
                .into(),
            image: "https://img.heroui.chat/image/dashboard?w=800&h=600&u=456".into(),
            technologies: strings(&["React", "TypeScript", "MQTT", "Chart.js"]),
            category: "Web".into(),
            links: placeholder(),
        },
        Project {
            id: 3,
            title: "Financial Portfolio Analyzer".into(),
            description: "An application that analyzes investment portfolios, provides risk \
                          assessments, and recommends optimization strategies."
                .into(),
            image: "https://img.heroui.chat/image/finance?w=800&h=600&u=789".into(),
            technologies: strings(&["Python", "Pandas", "React", "D3.js"]),
            category: "Data".into(),
            links: placeholder(),
        },
    ]
}

fn papers() -> Vec<ResearchPaper> {
    vec![
        ResearchPaper {
            id: 1,
            title: "Human Activity Detection Using Deep Learning".into(),
            journal: "International Journal of Advances in Electrical Engineering".into(),
            date: "2023".into(),
            summary: "Led the development of advanced algorithms and technologies for human activity \
                      detection using deep learning techniques, resulting in a publication in the \
                      International Journal of Advances in Electrical Engineering, and designed a \
                      user-friendly frontend interface with intuitive navigation and detailed \
                      activity descriptions."
                .into(),
            tags: strings(&["Deep Learning", "Activity Recognition", "Frontend"]),
            link: "#".into(),
        },
        ResearchPaper {
            id: 2,
            title: "Illegal Forum Detection".into(),
            journal: "Chandigarh University, Punjab, India".into(),
            date: "2023".into(),
            summary: "Led the Illegal Forum Detection project at Chandigarh University, Punjab, India, \
                      developing advanced algorithms using Natural Language Processing and Machine \
                      Learning to identify illicit online platforms. Designed and implemented a \
                      user-friendly frontend interface with HTML, CSS, JavaScript, and ReactJS."
                .into(),
            tags: strings(&["NLP", "Machine Learning", "Web Development"]),
            link: "#".into(),
        },
    ]
}

fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: 1,
            title: "Microsoft Certified: Azure Data Engineer Associate".into(),
            issuer: "Microsoft".into(),
            issue_date: "Jul 2024".into(),
            expiry_date: Some("Jul 2025".into()),
            credential_id: Some("1E5DCA5295126108".into()),
            credential_url: "https://learn.microsoft.com/api/credentials/share/en-us/Tanish-5116/1E5DCA5295126108?sharingId".into(),
        },
        Certification {
            id: 2,
            title: "Creating a Business Plan".into(),
            issuer: "LinkedIn".into(),
            issue_date: "Apr 2022".into(),
            expiry_date: None,
            credential_id: None,
            credential_url: "https://www.linkedin.com/learning/creating-a-business-plan-2".into(),
        },
    ]
}

fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            title: "Email".into(),
            value: "tanishkaur03@gmail.com".into(),
            link: "mailto:tanishkaur03@gmail.com".into(),
        },
        ContactChannel {
            title: "Phone".into(),
            value: "+917494896065".into(),
            link: "tel:+917494896065".into(),
        },
    ]
}
