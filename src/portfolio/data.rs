use super::{Certification, Education, Experience, Profile, ProfileLinks, Project, SkillCategory};

use super::CertificationCategory::{Certification as Cert, Event, Internship};

pub static PROFILE: Profile = Profile {
    name: "Youssef CHEBL",
    title: "Computer Engineering Student",
    email: "youssef.chebl@enicar.ucar.tn",
    phone: "+216 27 363 604",
    location: "Nabeul, Tunisia",
    links: ProfileLinks {
        linkedin: "https://www.linkedin.com/in/youssef-chebl-in/",
        github: "https://github.com/CHYou25ef",
        portfolio: "https://linktr.ee/CHEBL_Youssef",
    },
    summary: "Aspiring Computer Engineer with dual expertise in software development (Web/Mobile) and intelligent systems (AI, IoT, Embedded). Seeking a 4-to-6-month Final Year Project (capstone internship) to design and develop a complete solution, integrating artificial intelligence components into web/mobile applications or embedded systems. Autonomous, proactive, and ready to fully commit to ambitious projects.",
};

pub static EDUCATION: &[Education] = &[
    Education {
        id: "e1",
        degree: "Engineering Diploma in Computer Science",
        institution: "National School of Engineers of Carthage (ENICarthage)",
        period: "Sept 2023 – Present",
        location: "Tunis, Tunisia",
        details: None,
    },
    Education {
        id: "e2",
        degree: "Bachelor’s Degree in Information Technology",
        institution: "Higher Institute of Technological Studies of Nabeul (ISET Nabeul)",
        period: "Sept 2021 – July 2023",
        location: "Nabeul, Tunisia",
        details: Some("Specialization: Embedded and Mobile Systems"),
    },
    Education {
        id: "e3",
        degree: "Technical Baccalaureate (High School Diploma)",
        institution: "Mahmoud Messadi High School",
        period: "Sept 2018 – July 2020",
        location: "Nabeul, Tunisia",
        details: None,
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        id: "ex1",
        role: "AI & Computer Vision Intern",
        company: "KWM Manufacturing",
        period: "July 2025 – Sept 2025",
        location: "Dar Chaabene El Fehri, Tunisia",
        description: &[
            "Designed an intelligent quality control system for automatic textile defect detection.",
            "Automated a data pipeline (Server → Google Drive → Colab) for ingesting and processing industrial images to Roboflow.",
            "Managed the complete dataset lifecycle: supervised annotation (>30,000 defects), data augmentation, and versioning.",
            "Trained and benchmarked Deep Learning architectures (YOLOv8, YOLO-NAS, ResNet18), achieving 90% mAP on critical defects.",
            "Optimized models for embedded deployment (Raspberry Pi 5): analyzed constraints, profiled inference, and converted formats.",
        ],
    },
    Experience {
        id: "ex2",
        role: "Web Developer Intern (MERN Stack)",
        company: "SOFIRUX",
        period: "Aug 2024",
        location: "Nabeul, Tunisia",
        description: &[
            "Developed dynamic and responsive user interfaces with React and Bootstrap.",
            "Implemented backend logic (Node.js, Express) and managed the database (MongoDB) in a MERN Stack environment.",
        ],
    },
    Experience {
        id: "ex3",
        role: "Developer Intern (Flutter / PyRevit)",
        company: "DigiArt LivingLab",
        period: "Feb 2023 – June 2023",
        location: "Tunis, Tunisia",
        description: &[
            "Developed a beta plugin for Revit (using PyRevit) to automate thermal balance calculations and A/C unit selection.",
            "Created a Flutter mobile application for downloading and rating developed plugins.",
        ],
    },
    Experience {
        id: "ex4",
        role: "Java Developer Intern",
        company: "LAB619",
        period: "Jan 2022 – Feb 2022",
        location: "Tunis, Tunisia",
        description: &[
            "Developed a JAVAFX application (Eclipse) for updating the software of a cash register program.",
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "p1",
        title: "Train Ticket Reservation Interface",
        description: "JavaFX desktop application connected to a database.",
        technologies: &["JavaFX", "Eclipse", "PhpMyAdmin"],
        kind: "Desktop",
        github_url: Some("https://github.com/CHYou25ef/train-ticket-reservation"),
        demo_url: None,
    },
    Project {
        id: "p2",
        title: "IT shop Mobile App",
        description: "Native Android application with cloud authentication and database.",
        technologies: &["Android Studio", "Java", "Firebase"],
        kind: "Mobile",
        github_url: Some("https://github.com/CHYou25ef/it-shop-mobile"),
        demo_url: None,
    },
    Project {
        id: "p3",
        title: "IoT Temperature Monitoring System",
        description: "Real-time system with a cloud dashboard.",
        technologies: &["DHT22", "ESP8266", "Things Speak", "Arduino IDE"],
        kind: "IoT",
        github_url: Some("https://github.com/CHYou25ef/iot-temperature-monitor"),
        demo_url: None,
    },
    Project {
        id: "p4",
        title: "E-commerce Application (C)",
        description: "Academic project for e-commerce management in C.",
        technologies: &["Code::Blocks", "C Language"],
        kind: "Academic",
        github_url: Some("https://github.com/CHYou25ef/ecommerce-c-app"),
        demo_url: None,
    },
    Project {
        id: "p5",
        title: "Web Quiz Game",
        description: "Interactive quiz interface.",
        technologies: &["HTML", "CSS", "JavaScript", "Bootstrap"],
        kind: "Web",
        github_url: Some("https://github.com/CHYou25ef/web-quiz-game"),
        demo_url: Some(""),
    },
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["C/C++", "Java", "JavaScript", "TypeScript", "Python", "PHP"],
    },
    SkillCategory {
        name: "Web",
        skills: &["React.js", "Angular", "Node.js", "Express.js", "HTML5", "CSS3", "Bootstrap"],
    },
    SkillCategory {
        name: "Mobile",
        skills: &["Android (Java)", "Flutter"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["MySQL", "MongoDB", "PostgreSQL", "Firebase", "Oracle 10g"],
    },
    SkillCategory {
        name: "Hardware & IoT",
        skills: &["Arduino UNO", "Raspberry PI 5", "ESP32", "ESP8266"],
    },
    SkillCategory {
        name: "Tools & OS",
        skills: &["Git", "GitHub", "GitLab", "Docker", "Linux (Ubuntu, Kali, RedHat)"],
    },
];

const AWS_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg";
const DATACAMP_LOGO: &str = "https://cdn.worldvectorlogo.com/logos/datacamp-1.svg";
const CISCO_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/0/08/Cisco_logo_blue_2016.svg";
const ORANGE_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/c/c8/Orange_logo.svg";
const NVIDIA_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/2/21/Nvidia_logo.svg";

pub static CERTIFICATIONS: &[Certification] = &[
    // Internships
    Certification {
        id: "i1",
        title: "Summer Internship - Technology Service",
        issuer: "KW-Manufacturing",
        date: "July 08, 2025 - Sept 08, 2025",
        credential_id: None,
        url: None,
        category: Internship,
        image: Some("/certs/Attestation_de_stage_2eme_KWM_2025.pdf"),
        logo: Some("https://ui-avatars.com/api/?name=KW&background=random"),
    },
    Certification {
        id: "i2",
        title: "Web Developer Internship (MERN)",
        issuer: "SOFIRUX",
        date: "Aug 01, 2024 - Aug 31, 2024",
        credential_id: Some("1585991/F/A/M/000"),
        url: None,
        category: Internship,
        image: Some("/certs/Att-Sofirux-2024.pdf"),
        logo: Some("https://ui-avatars.com/api/?name=SF&background=random"),
    },
    Certification {
        id: "i3",
        title: "End of Studies Internship (PFE)",
        issuer: "DigiArt Living Lab (CREATEC)",
        date: "Feb 12, 2023 - June 12, 2023",
        credential_id: None,
        url: None,
        category: Internship,
        image: Some("/certs/Attestation-de-stage_PFE-2023.pdf"),
        logo: Some("https://ui-avatars.com/api/?name=DA&background=random"),
    },
    Certification {
        id: "i4",
        title: "Cloud Engineer Internship",
        issuer: "LAB619 Engineering & Consulting",
        date: "Jan 17, 2022 - Feb 12, 2022",
        credential_id: Some("MF: 1730984/W/A/M/000"),
        url: None,
        category: Internship,
        image: Some("/certs/AttLAB619-SEM2-2022.pdf"),
        logo: Some("https://ui-avatars.com/api/?name=L6&background=random"),
    },
    Certification {
        id: "i5",
        title: "Introductory Internship",
        issuer: "Tunisie Telecom",
        date: "Aug 02, 2021 - Aug 31, 2021",
        credential_id: Some("N°163/SRH/2021"),
        url: None,
        category: Internship,
        image: Some("/certs/TunisieTelecom Att.pdf"),
        logo: Some("https://upload.wikimedia.org/wikipedia/fr/5/51/Tunisie_Telecom_Logo.svg"),
    },
    Certification {
        id: "i6",
        title: "Technician Internship",
        issuer: "ISET Nabeul",
        date: "2023",
        credential_id: None,
        url: None,
        category: Internship,
        image: Some("/certs/attestation de stage Iset nabeul.pdf"),
        logo: Some("https://ui-avatars.com/api/?name=IS&background=random"),
    },
    // Events and clubs
    Certification {
        id: "ev1",
        title: "Inter ODC Clubs Industrie 4.0 Makeathon",
        issuer: "Orange Digital Center",
        date: "Dec 02, 2022 - Dec 04, 2022",
        credential_id: None,
        url: None,
        category: Event,
        image: Some("/certs/orange Certif.pdf"),
        logo: Some(ORANGE_LOGO),
    },
    Certification {
        id: "ev2",
        title: "Orange/TT Joint Certification",
        issuer: "Orange Digital Center & TT",
        date: "2022",
        credential_id: None,
        url: None,
        category: Event,
        image: Some("/certs/orangeCertif+TTatt.pdf"),
        logo: Some(ORANGE_LOGO),
    },
    // AWS
    Certification {
        id: "c1",
        title: "Introduction to Machine Learning: Art of the Possible",
        issuer: "AWS Training & Certification",
        date: "November 15, 2025",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/Introduction to Machine Learning Art of the Possible.pdf"),
        logo: Some(AWS_LOGO),
    },
    Certification {
        id: "c2",
        title: "Fundamentals of Machine Learning and Artificial Intelligence",
        issuer: "AWS Training & Certification",
        date: "November 14, 2025",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/Fundamentals of Machine Learning and Artificial Intelligence.pdf"),
        logo: Some(AWS_LOGO),
    },
    Certification {
        id: "c3",
        title: "AWS Academy Graduate - Cloud Foundations",
        issuer: "AWS Academy",
        date: "October 25, 2025",
        credential_id: None,
        url: Some("https://www.credly.com/go/7xbfcrEV"),
        category: Cert,
        image: Some("/certs/AWS_Academy_Graduate___Cloud_Foundations___Training_Badge_Badge20251025-32-qble3l.pdf"),
        logo: Some(AWS_LOGO),
    },
    Certification {
        id: "c4",
        title: "Introduction to Generative AI - Art of the Possible",
        issuer: "AWS Training & Certification",
        date: "August 05, 2025",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/YoussefChebl_AWS_GenIA.pdf"),
        logo: Some(AWS_LOGO),
    },
    // DataCamp
    Certification {
        id: "c5",
        title: "Understanding ChatGPT",
        issuer: "DataCamp",
        date: "August 30, 2025",
        credential_id: Some("#41,000,640"),
        url: None,
        category: Cert,
        image: Some("/certs/UnderstandChatGPT.pdf"),
        logo: Some(DATACAMP_LOGO),
    },
    Certification {
        id: "c6",
        title: "Intermediate Python",
        issuer: "DataCamp",
        date: "January 17, 2025",
        credential_id: Some("#38,304,998"),
        url: None,
        category: Cert,
        image: Some("/certs/Python II certificate.pdf"),
        logo: Some(DATACAMP_LOGO),
    },
    Certification {
        id: "c7",
        title: "Introduction to Python",
        issuer: "DataCamp",
        date: "January 15, 2025",
        credential_id: Some("#37,980,714"),
        url: None,
        category: Cert,
        image: Some("/certs/Python I certificate.pdf"),
        logo: Some(DATACAMP_LOGO),
    },
    // Cisco / Python Institute
    Certification {
        id: "c8",
        title: "PCAP: Programming Essentials in Python",
        issuer: "Cisco Networking Academy & OpenEDG",
        date: "January 24, 2023",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/youssefchebl-PCAP - Programmi-certificate.pdf"),
        logo: Some(CISCO_LOGO),
    },
    Certification {
        id: "c9",
        title: "Python Essentials 1",
        issuer: "Cisco Networking Academy",
        date: "July 13, 2022",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/PythonEssentials1Update20251025-32-hpjbd3.pdf"),
        logo: Some(CISCO_LOGO),
    },
    Certification {
        id: "c10",
        title: "NDG Linux Unhatched",
        issuer: "Cisco Networking Academy",
        date: "July 11, 2022",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/NDG_Linux_Unhatched_765e9b20-3ba7-4f80-bf8a-03567648bc0d.pdf"),
        logo: Some(CISCO_LOGO),
    },
    // Others
    Certification {
        id: "c11",
        title: "HiveMQ Certified MQTT Associate",
        issuer: "HiveMQ University",
        date: "October 21, 2025",
        credential_id: Some("a7ztt5t2eh75"),
        url: Some("https://verify.skilljar.com/c/a7ztt5t2eh75"),
        category: Cert,
        image: Some("/certs/HiveMQ_MQTT_certificate-a7ztt5t2eh75-1761030627.pdf"),
        logo: Some("https://assets.website-files.com/5e66605609a338a9db6e3729/5e6682161e2d3332914123d2_hivemq-logo.svg"),
    },
    Certification {
        id: "c12",
        title: "Technical Support Fundamentals",
        issuer: "Google (Coursera)",
        date: "November 23, 2022",
        credential_id: None,
        url: Some("https://coursera.org/verify/VGTZN76DGZ3V"),
        category: Cert,
        image: Some("/certs/Coursera Technical Support Fundamentals.pdf"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg"),
    },
    Certification {
        id: "c13",
        title: "HTML & CSS - Certification Course",
        issuer: "YouAccel",
        date: "September 30, 2022",
        credential_id: Some("64700369"),
        url: None,
        category: Cert,
        image: Some("/certs/HTML CSS certificate.pdf"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/6/61/HTML5_logo_and_wordmark.svg"),
    },
    Certification {
        id: "c14",
        title: "Artificial Intelligence Fundamentals",
        issuer: "Huawei",
        date: "2024",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/Huawei_Basic_AI_certif.png"),
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/f/fa/Huawei_logo.svg"),
    },
    Certification {
        id: "c15",
        title: "Accelerated Data Science",
        issuer: "NVIDIA",
        date: "2024",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/NVIDIA-Accelerated-DataScience.pdf"),
        logo: Some(NVIDIA_LOGO),
    },
    Certification {
        id: "c16",
        title: "Generative AI Explained",
        issuer: "NVIDIA",
        date: "2024",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/NVIDIA-GenAI.pdf"),
        logo: Some(NVIDIA_LOGO),
    },
    Certification {
        id: "c17",
        title: "Enhancing Data Science Outcomes",
        issuer: "NVIDIA",
        date: "2024",
        credential_id: None,
        url: None,
        category: Cert,
        image: Some("/certs/NVIDIA-Enhancing Data Science Outcomes With Efficient Workflow.pdf"),
        logo: Some(NVIDIA_LOGO),
    },
];
