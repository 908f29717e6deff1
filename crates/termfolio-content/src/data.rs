use termfolio_core::AboutInfo;
use termfolio_core::ContactInfo;
use termfolio_core::Experience;
use termfolio_core::Project;
use termfolio_core::Skill;
use termfolio_core::SkillCategory;

use crate::provider::Portfolio;

const COMPANY: &str = "SERGET Mobilidade Viária";
const PHOTO: &str = "/assets/images/profile.jfif";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn project(id: &str, title: &str, description: &str, technologies: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        image_url: None,
        demo_url: None,
        code_url: None,
    }
}

fn projects(descriptions: [&str; 3], titles: [&str; 3]) -> Vec<Project> {
    let [automata, automation, terminal] = descriptions;
    let [automata_title, automation_title, terminal_title] = titles;
    vec![
        Project {
            image_url: Some("/assets/images/projectAutomataSandbox.jpg".to_string()),
            demo_url: Some("https://igorsolerc.github.io/automata-sandbox/".to_string()),
            code_url: Some("https://github.com/IgorSolerC/automata-sandbox".to_string()),
            ..project("automata", automata_title, automata, &["React", "TypeScript", "P5.js"])
        },
        project(
            "ai-automation",
            automation_title,
            automation,
            &["C#", "SQL Server", "AI APIs"],
        ),
        Project {
            image_url: Some("/assets/images/projectTerminal.jpg".to_string()),
            code_url: Some("https://github.com/RafaelMFerreira/terminal-portfolio".to_string()),
            ..project("portfolio", terminal_title, terminal, &["Angular", "TypeScript", "CSS Animations"])
        },
    ]
}

fn skills(names: [&str; 4]) -> Vec<SkillCategory> {
    let levels: [&[(&str, u8)]; 4] = [
        &[
            ("C# (.NET)", 90),
            ("ASP.NET Core", 85),
            ("Entity Framework", 80),
            ("Python", 70),
        ],
        &[
            ("HTML/CSS", 85),
            ("JavaScript", 80),
            ("TypeScript", 75),
            ("Angular", 80),
            ("React", 70),
        ],
        &[
            ("SQL Server", 85),
            ("MongoDB", 70),
            ("ClickHouse", 65),
            ("Redis", 60),
        ],
        &[("Git", 80), ("Docker", 75), ("IIS/Nginx", 70), ("WSL", 65)],
    ];
    names
        .into_iter()
        .zip(levels)
        .map(|(name, skills)| SkillCategory {
            name: name.to_string(),
            skills: skills
                .iter()
                .map(|(name, level)| Skill {
                    name: name.to_string(),
                    level: *level,
                })
                .collect(),
        })
        .collect()
}

fn role(title: &str, period: &str, responsibilities: &[&str]) -> Experience {
    Experience {
        title: title.to_string(),
        company: COMPANY.to_string(),
        period: period.to_string(),
        responsibilities: strings(responsibilities),
    }
}

fn contact(message: &str) -> ContactInfo {
    ContactInfo {
        email: "rafaelmirandaferreira@outlook.com".to_string(),
        linkedin: "linkedin.com/in/rafael-miranda-ferreira/".to_string(),
        github: "github.com/RafaelMFerreira/".to_string(),
        website: "www.rafaelmirandaferreira.com".to_string(),
        message: message.to_string(),
    }
}

pub(crate) fn english() -> Portfolio {
    Portfolio {
        projects: projects(
            [
                "An interactive tool for exploring finite state machines and automata theory. Created as a graduation project to help students learn automata theory concepts.",
                "Developed an AI-based solution that reduced operational costs by 40% and increased productivity with less than 5% error rate.",
                "This interactive terminal-style portfolio website showcasing my projects and skills.",
            ],
            ["Automata Sandbox", "AI Process Automation", "Terminal Portfolio"],
        ),
        skills: skills(["Backend", "Frontend", "Databases", "DevOps"]),
        about: AboutInfo {
            name: "Rafael Miranda Ferreira".to_string(),
            title: "Full-Stack Developer".to_string(),
            bio: "I am a developer passionate about technology and problem solving. I hold a degree in Computer Science from Universidade Presbiteriana Mackenzie (2020-2024) and currently work as a Mid-level Developer at SERGET Mobilidade Viária. Always looking for innovation, I am passionate about artificial intelligence and process optimization.".to_string(),
            photo: PHOTO.to_string(),
        },
        experience: vec![
            role(
                "Mid-level Developer",
                "May 2024 - Present",
                &[
                    "Manage new projects, planning and requirements gathering",
                    "Coordinate and support the team in building effective solutions",
                    "Join client meetings to understand their needs",
                    "Modeled databases and implemented optimizations in critical systems",
                ],
            ),
            role(
                "Junior Developer",
                "June 2023 - May 2024",
                &[
                    "Helped deploy our system at a major client",
                    "Collaborated on adapting agile methodologies to the team's needs",
                    "Migrated the production (Linux) infrastructure to another server",
                ],
            ),
            role(
                "Trainee Developer",
                "February 2022 - June 2023",
                &[
                    "Developed and maintained scalable web applications",
                    "Implemented AI-driven improvements that reduced costs",
                    "Took part in building new features across several systems",
                ],
            ),
            role(
                "Intern",
                "July 2021 - February 2022",
                &[
                    "First professional experience in the field",
                    "Worked on maintenance and development of small features",
                    "Worked with agile methodologies (Scrum/Kanban)",
                ],
            ),
        ],
        contact: contact(
            "Feel free to reach out for collaborations, opportunities or just to chat!",
        ),
    }
}

pub(crate) fn portuguese() -> Portfolio {
    Portfolio {
        projects: projects(
            [
                "Uma ferramenta interativa para explorar máquinas de estados finitos e teoria dos autômatos. Criada como trabalho de conclusão de curso para ajudar estudantes a aprender os conceitos da teoria dos autômatos.",
                "Desenvolvi uma solução baseada em IA que reduziu os custos operacionais em 40% e aumentou a produtividade com taxa de erro inferior a 5%.",
                "Este portfólio interativo em estilo terminal, que apresenta meus projetos e habilidades.",
            ],
            ["Automata Sandbox", "Automação de Processos com IA", "Portfólio Terminal"],
        ),
        skills: skills(["Backend", "Frontend", "Bancos de Dados", "DevOps"]),
        about: AboutInfo {
            name: "Rafael Miranda Ferreira".to_string(),
            title: "Desenvolvedor Full-Stack".to_string(),
            bio: "Sou um desenvolvedor apaixonado por tecnologia e resolução de problemas. Formado em Ciência da Computação pela Universidade Presbiteriana Mackenzie (2020-2024), atualmente trabalho como Desenvolvedor Pleno na SERGET Mobilidade Viária. Sempre buscando inovação, sou apaixonado por inteligência artificial e otimização de processos.".to_string(),
            photo: PHOTO.to_string(),
        },
        experience: vec![
            role(
                "Desenvolvedor Pleno",
                "Maio 2024 - Presente",
                &[
                    "Gerencio novos projetos, planejamento e levantamento de requisitos",
                    "Coordeno e auxilio a equipe no desenvolvimento de soluções eficazes",
                    "Participo de reuniões com clientes para entender necessidades",
                    "Modelei bancos de dados e implementei otimizações em sistemas críticos",
                ],
            ),
            role(
                "Desenvolvedor Júnior",
                "Junho 2023 - Maio 2024",
                &[
                    "Auxiliei na implantação de nosso sistema em um grande cliente",
                    "Colaborei na adaptação das metodologias ágeis às necessidades da equipe",
                    "Realizei a migração da infraestrutura (Linux) de produção para outro servidor",
                ],
            ),
            role(
                "Desenvolvedor Trainee",
                "Fevereiro 2022 - Junho 2023",
                &[
                    "Desenvolvi e mantive aplicações web escaláveis",
                    "Implementei melhorias que reduziram custos utilizando IA",
                    "Participei do desenvolvimento de novas funcionalidades em diversos sistemas",
                ],
            ),
            role(
                "Estagiário",
                "Julho 2021 - Fevereiro 2022",
                &[
                    "Primeira experiência profissional na área",
                    "Trabalhei na manutenção e desenvolvimento de pequenas funcionalidades",
                    "Atuei com metodologias ágeis (Scrum/Kanban)",
                ],
            ),
        ],
        contact: contact(
            "Sinta-se à vontade para entrar em contato para colaborações, oportunidades ou simplesmente para bater um papo!",
        ),
    }
}
