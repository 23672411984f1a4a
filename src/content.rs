//! Static portfolio content rendered by the page sections.

pub const NAME: &str = "Eswar Sai Korrapati";
pub const HEADLINE: &str = "AI/ML Software Engineer";
pub const INTRO: &str =
    "I'm Eswar, a Software Engineer passionate about building efficient and scalable solutions";
pub const SUMMARY: &str = "With 3+ years of experience in AI/ML, I specialize in developing production-grade systems using modern technologies and best practices.";
pub const CONTACT_EMAIL: &str = "eksai0726@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home", icon: "🏠" },
    NavItem { id: "about", label: "About", icon: "👨‍💻" },
    NavItem { id: "skills", label: "Skills", icon: "⚡" },
    NavItem { id: "experience", label: "Experience", icon: "💼" },
    NavItem { id: "projects", label: "Projects", icon: "📊" },
    NavItem { id: "contact", label: "Contact", icon: "📧" },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub focus: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "M.S. in Computer Science",
    school: "Montclair State University",
    focus: "Specialized in Machine Learning, Deep Learning, and AI Systems Architecture",
};

pub struct Skill {
    pub name: &'static str,
    /// devicon class, or an emoji when devicon has no glyph
    pub icon: &'static str,
}

impl Skill {
    pub fn is_devicon(&self) -> bool {
        self.icon.starts_with("devicon-")
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", icon: "devicon-python-plain" },
    Skill { name: "TensorFlow", icon: "devicon-tensorflow-original" },
    Skill { name: "PyTorch", icon: "devicon-pytorch-original" },
    Skill { name: "HuggingFace", icon: "🤗" },
    Skill { name: "LangChain", icon: "🦜" },
    Skill { name: "LangGraph", icon: "🕸️" },
    Skill { name: "AWS", icon: "devicon-amazonwebservices-plain-wordmark" },
    Skill { name: "Docker", icon: "devicon-docker-plain" },
    Skill { name: "MLOps", icon: "⚙️" },
];

pub struct Experience {
    pub company: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Comcast",
        title: "Software Engineer – AI/ML",
        duration: "Aug 2024 – September 2025",
        logo: "/comcast.svg",
        description: "Developed and deployed production-grade ML models using TensorFlow and PyTorch, improving accuracy by 20%. Built ML workflows with Airflow, MLflow, and DVC, and deployed models on AWS SageMaker and Lambda, reducing costs and deployment time. Implemented SHAP/LIME dashboards for explainability and integrated LLM-powered chat capabilities using the OpenAI API.",
        highlights: &[
            "🎯 20% accuracy improvement",
            "⚡ Reduced deployment time",
            "📊 SHAP/LIME dashboards",
            "🤖 LLM integration",
        ],
    },
    Experience {
        company: "Dentsu",
        title: "Software Engineer",
        duration: "May 2020 – Jul 2022",
        logo: "/dentsu.jpeg",
        description: "Engineered RESTful APIs with Django/Flask, developed automated ML workflows using Airflow, and deployed services via Docker and AWS EC2. Created a centralized Feature Store and leveraged AutoML for ad campaign forecasting, improving efficiency and accuracy in production pipelines.",
        highlights: &[
            "🔗 RESTful APIs",
            "🔄 Automated workflows",
            "📦 Docker deployment",
            "📈 AutoML forecasting",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Code,
    Demo,
}

pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
    pub kind: LinkKind,
}

pub struct Project {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

const fn github(url: &'static str) -> ProjectLink {
    ProjectLink { label: "GitHub", url, kind: LinkKind::Code }
}

const fn demo(url: &'static str) -> ProjectLink {
    ProjectLink { label: "Live Demo", url, kind: LinkKind::Demo }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Job Automation System",
        icon: "🎯",
        description: "Built an AI-powered automated job application system that scrapes LinkedIn jobs, uses OpenAI for intelligent matching, discovers recruiter emails via Hunter.io, and generates personalized applications. Features PostgreSQL tracking, Telegram notifications, and smart filtering for quality opportunities.",
        tags: &["OpenAI", "PostgreSQL", "Docker", "N8N", "Telegram Bot", "Web Scraping"],
        links: &[github("https://github.com/ek-sai/Job_Automation")],
    },
    Project {
        title: "RAG-based PDF Summarizer",
        icon: "📄",
        description: "Built a PDF summarization tool using LangChain, OpenAI API, and FAISS for retrieval-augmented generation. Deployed using Streamlit with semantic search, chunking, and real-time user interaction capabilities.",
        tags: &["LangChain", "OpenAI", "FAISS", "Streamlit"],
        links: &[
            demo("https://ragpdfsummarizer-ffas6wmxaty3zgblr39map.streamlit.app/"),
            github("https://github.com/ek-sai/RAG_PDF_Summarizer"),
        ],
    },
    Project {
        title: "Next Word Prediction with BERT",
        icon: "⌨️",
        description: "Fine-tuned a BERT transformer model using PyTorch, achieving 92% top-5 prediction accuracy. Implemented advanced NLP techniques for context-aware word prediction and language modeling.",
        tags: &["BERT", "PyTorch", "NLP", "Transformers"],
        links: &[github("https://github.com/ek-sai/BERT")],
    },
    Project {
        title: "Machine Transliteration System",
        icon: "🌐",
        description: "Designed and implemented a custom encoder-decoder model using PyTorch for sequence-to-sequence tasks, supporting variable-length inputs and outputs for cross-language text conversion.",
        tags: &["PyTorch", "Seq2Seq", "NLP", "Encoder-Decoder"],
        links: &[github("https://github.com/ek-sai/Machine_Transliteration")],
    },
    Project {
        title: "Meeting Agent",
        icon: "🤝",
        description: "Developed a multi-agent AI meeting preparation assistant using Streamlit, Anthropic's Claude, and the Tavily API. Generates context analysis, industry insights, meeting strategies, and executive briefings.",
        tags: &["Claude", "Streamlit", "Multi-Agent", "Tavily API"],
        links: &[
            demo("https://meeting-agents-yapuvkj9basug2qlos2iqg.streamlit.app/"),
            github("https://github.com/ek-sai/Meeting_Agent"),
        ],
    },
];

pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CHANNELS: &[Channel] = &[
    Channel {
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:eksai0726@gmail.com",
        icon: "extra-email",
    },
    Channel {
        label: "GitHub",
        value: "ek-sai",
        href: "https://github.com/ek-sai",
        icon: "devicon-github-plain",
    },
    Channel {
        label: "LinkedIn",
        value: "Connect with me",
        href: "https://www.linkedin.com/in/eswarsaikorrapati/",
        icon: "devicon-linkedin-plain",
    },
];
