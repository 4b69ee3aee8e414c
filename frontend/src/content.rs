//! Static copy for the site. Everything here is read-only and is turned into
//! widget state (carousel, card stack, accordion) by the sections.

use crate::state::Card;

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Solutions", anchor: "solutions" },
    NavLink { label: "Approach", anchor: "approach" },
    NavLink { label: "Case Studies", anchor: "case-studies" },
    NavLink { label: "Insights", anchor: "insights" },
];

pub const CONTACT_ANCHOR: &str = "contact";

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a typical implementation take?",
        answer: "For a full ecosystem transformation, our average timeline is 90 days. This includes discovery, system mapping, integration development, and deployment. Smaller specific modules can be live in as little as 3 weeks.",
    },
    FaqEntry {
        question: "Do you integrate with legacy on-premise systems?",
        answer: "Yes. We specialize in hybrid architectures. We connect modern cloud tools with legacy mainframes (SAP, Oracle, custom SQL) using secure API gateways, ensuring you don't need to rip-and-replace your core infrastructure.",
    },
    FaqEntry {
        question: "What is the typical investment required?",
        answer: "Our enterprise engagements typically start at $25k for strategic mapping and initial integration modules. However, pricing is customized based on the complexity of your ecosystem. Book a strategy session for a tailored quote.",
    },
    FaqEntry {
        question: "How do you handle data security?",
        answer: "We are ISO 27001 certified and GDPR compliant. All data is encrypted in transit (TLS 1.3) and at rest (AES-256). We implement Role-Based Access Control (RBAC) across all developed solutions.",
    },
    FaqEntry {
        question: "Do you offer post-launch support?",
        answer: "Absolutely. We provide comprehensive SLAs with 24/7 monitoring, regular security patching, and iterative feature enhancements. We become your long-term technology partner, not just a one-time vendor.",
    },
];

#[derive(PartialEq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub client: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub stats: [(&'static str, &'static str); 2],
    pub image: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "adani",
        client: "Adani Airports",
        title: "Adani Airport Information Kiosk",
        desc: "Designed and developed to provide real-time flight information, gate assignments, boarding times, and details about restaurants, shops, and services. Powered by AI and data analytics, it adapts to customer behaviour, offers personalised recommendations, and supports natural language queries.",
        stats: [("Technology", "AI & Data"), ("Feature", "NLP Queries")],
        image: "https://images.unsplash.com/photo-1570710891163-6d3b5c47248b?auto=format&fit=crop&q=80&w=2000",
    },
    CaseStudy {
        id: "toondemy",
        client: "Creative Galileo",
        title: "Toondemy: Kids Learning App",
        desc: "Designed & developed by award-winning curriculum experts for kids aged 3 to 10. Toondemy offers a fun-filled, engaging journey that builds key learning objectives.",
        stats: [("Downloads", "7 Million+"), ("Recognition", "Top 100 Startup")],
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&q=80&w=2000",
    },
    CaseStudy {
        id: "ben-bella",
        client: "Ben & Bella",
        title: "Treasure Box AR Experience",
        desc: "An immersive Augmented Reality application for English language learning. Physical flashcards meet digital interactivity and characters come to life in 3D, lifting engagement and retention over traditional methods.",
        stats: [("Tech Stack", "Unity AR"), ("Engagement", "+200%")],
        image: "https://images.unsplash.com/photo-1516627145497-ae6968895b74?q=80&w=2000&auto=format&fit=crop",
    },
    CaseStudy {
        id: "sonic-check",
        client: "amp",
        title: "Sonic Check®",
        desc: "Part of the Sonic Hub tool ecosystem, Sonic Check uses Machine Listening and Learning (MLAL) algorithms to compare sound assets and predict how they will perform with audiences before market research.",
        stats: [("Algorithm", "MLAL"), ("Outcome", "Data-Driven")],
        image: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?auto=format&fit=crop&q=80&w=2000",
    },
    CaseStudy {
        id: "icici",
        client: "ICICI Lombard",
        title: "Digital Claims Ecosystem",
        desc: "We re-engineered the insurance claims journey for one of India's leading insurers. OCR and automated workflows in a unified mobile ecosystem cut claim processing times and raised customer satisfaction.",
        stats: [("Efficiency", "60% Faster"), ("UX Score", "4.8/5")],
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2000&auto=format&fit=crop",
    },
    CaseStudy {
        id: "pidilite",
        client: "Pidilite",
        title: "Enterprise Dealer Loyalty Platform",
        desc: "A B2B engagement solution connecting thousands of dealers and distributors, with real-time inventory tracking, incentive management and predictive analytics across the network.",
        stats: [("Users", "50k+ Dealers"), ("Adoption", "90%")],
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2000&auto=format&fit=crop",
    },
    CaseStudy {
        id: "zzzquil",
        client: "P&G",
        title: "ZzzQuil Sleep Quiz",
        desc: "An interactive \"What kind of sleeper are you?\" experience that analyzes lifestyle habits and recommends sleep aids, served to a 650 million consumer market through a 3D-illustrated interface.",
        stats: [("Platform", "Gamified Web"), ("Reach", "650M+ Market")],
        image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?q=80&w=2000&auto=format&fit=crop",
    },
];

// (id, title, description, color, tag, author)
const INSIGHTS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("1", "AI Digital Twins Explained", "As businesses become increasingly data-driven, the ability to simulate, predict, and optimize real-world systems has become a competitive necessity. This is where AI digital twins are transforming how organizations design and operate.", "#00E5FF", "New", "Tech Team"),
    ("2", "The Power of Sonic Branding", "Leveraging tools like Sonic Check® to create holistic sonic identities. How machine listening algorithms can predict how your brand assets will perform and drive emotional connections.", "#D946EF", "Strategy", "Design Lead"),
    ("3", "Transforming Education", "How Creative Galileo achieved 7 million downloads by combining award-winning curriculum experts with cutting-edge mobile app development for early childhood learning.", "#F59E0B", "Case Study", "Creative Galileo"),
    ("4", "The Future of AR in Retail", "Augmented Reality is no longer just a gimmick. It is driving conversion rates up by 40% in e-commerce applications by allowing customers to visualize products in their own space.", "#10B981", "Trend", "Innovation"),
    ("5", "Phygital Ecosystems", "Bridging the physical and digital worlds requires a robust backend architecture. We explore the microservices patterns that enable seamless phygital experiences.", "#6366f1", "Tech", "Engineering"),
    ("6", "Enterprise UX Design Principles", "Why B2B applications need consumer-grade UX. Reducing cognitive load for employees leads to higher productivity and reduced training costs.", "#F43F5E", "Design", "UX Team"),
];

pub fn insight_cards() -> Vec<Card> {
    INSIGHTS
        .iter()
        .map(|&(id, title, description, color, date, author)| Card {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            date: Some(date.to_string()),
            author: Some(author.to_string()),
        })
        .collect()
}

pub struct Service {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Artificial Intelligence",
        subtitle: "Next-Gen Intelligence",
        desc: "We leverage AI to enhance user experiences and drive engagement through AI-powered solutions. Predictive modeling, NLP, and computer vision integration.",
        color: "#00E5FF",
    },
    Service {
        title: "Global IT Solutions",
        subtitle: "Enterprise Architecture",
        desc: "Empower your business with cutting-edge IT solutions. We specialize in crafting custom-made global business IT solutions that help your brand reach new heights.",
        color: "#D946EF",
    },
    Service {
        title: "Mobile & Web",
        subtitle: "Cross-Platform Excellence",
        desc: "Reinvented for you with creativity and innovation. Custom-made IT solutions ranging from software development to mobile app creation.",
        color: "#F59E0B",
    },
    Service {
        title: "Metaverse & AR/VR",
        subtitle: "Immersive Realities",
        desc: "Immersive technology solutions including Augmented Reality (AR), Virtual Reality (VR), and Mixed Reality (XR) to create engaging brand experiences.",
        color: "#10B981",
    },
    Service {
        title: "UI / UX Design",
        subtitle: "Human-Centric Design",
        desc: "Design-led solutions focusing on user interface and user experience for digital products and corporate branding. We design for emotion and function.",
        color: "#6366f1",
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { number: "01", title: "Discovery & Strategy", desc: "We dive deep into your business ecosystem to identify bottlenecks and define clear digital KPIs." },
    ProcessStep { number: "02", title: "Design & Prototype", desc: "We craft intuitive, human-centric interfaces. Our design phase focuses on solving user problems." },
    ProcessStep { number: "03", title: "Agile Development", desc: "Our engineering teams build with scalability in mind using modern stacks and microservices." },
    ProcessStep { number: "04", title: "Quality Assurance", desc: "Rigorous testing across devices, security audits, and performance optimization." },
    ProcessStep { number: "05", title: "Launch & Evolution", desc: "We ensure a seamless go-live experience and provide continuous monitoring and improvements." },
];

#[derive(PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client { name: "Adani Airports", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/c/cc/Adani_Group_logo.png/800px-Adani_Group_logo.png" },
    Client { name: "P&G", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/85/Procter_%26_Gamble_logo.svg/2560px-Procter_%26_Gamble_logo.svg.png" },
    Client { name: "ICICI Lombard", logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1c/ICICI_Bank_Logo.svg/2560px-ICICI_Bank_Logo.svg.png" },
    Client { name: "Pidilite", logo: "https://upload.wikimedia.org/wikipedia/en/thumb/e/e4/Pidilite_logo.svg/1200px-Pidilite_logo.svg.png" },
    Client { name: "Creative Galileo", logo: "https://logo.clearbit.com/creativegalileo.com" },
    Client { name: "Toondemy", logo: "https://logo.clearbit.com/toondemy.com" },
    Client { name: "Ben & Bella", logo: "https://logo.clearbit.com/benandbella.com" },
    Client { name: "amp", logo: "https://logo.clearbit.com/ampsoundbranding.com" },
];

// Detail pages.

pub struct Solution {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub capabilities: [&'static str; 5],
    pub color: &'static str,
}

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        id: "immersive",
        title: "Immersive Technologies (AR/VR/MR)",
        description: "We bridge the physical and digital worlds to create memorable brand experiences. From marketing activations to enterprise training simulations.",
        capabilities: ["Augmented Reality (AR) Manuals & Maintenance", "Virtual Reality (VR) Safety Training", "Mixed Reality (MR) Product Visualization", "WebAR Marketing Campaigns", "Metaverse Space Design"],
        color: "#10B981",
    },
    Solution {
        id: "gamification",
        title: "Gamification & Game Design",
        description: "We apply game mechanics to non-game contexts to drive engagement, loyalty, and learning outcomes for employees and customers.",
        capabilities: ["Corporate Training Games (Serious Games)", "Customer Loyalty Programs", "Sales Motivation Leaderboards", "Educational App Development", "Unity & Unreal Engine Development"],
        color: "#F59E0B",
    },
    Solution {
        id: "ai",
        title: "Artificial Intelligence & ML",
        description: "Transform raw data into actionable intelligence. We build predictive models and intelligent agents that automate complex workflows.",
        capabilities: ["Natural Language Processing (NLP) Chatbots", "Computer Vision for Retail & Security", "Predictive Analytics Engines", "Recommendation Systems", "Generative AI Integration"],
        color: "#00E5FF",
    },
    Solution {
        id: "product",
        title: "Product Engineering (Web & Mobile)",
        description: "End-to-end software development services. We build robust, scalable applications that serve as the backbone of your digital ecosystem.",
        capabilities: ["Enterprise Mobility Solutions", "Progressive Web Apps (PWA)", "Cross-Platform Development (Flutter/React Native)", "Cloud-Native Architecture", "Microservices & API Development"],
        color: "#D946EF",
    },
    Solution {
        id: "iot",
        title: "Internet of Things (IoT)",
        description: "Connect your physical assets to the digital cloud. We enable smart operations through sensor data and real-time monitoring.",
        capabilities: ["Smart Office & Building Solutions", "Industrial IoT (IIoT) Dashboards", "Beacon & Sensor Integration", "Wearable App Development", "Edge Computing Solutions"],
        color: "#6366f1",
    },
    Solution {
        id: "ux",
        title: "Experience Design (UI/UX)",
        description: "Human-centric design that removes friction. We ensure your complex enterprise tools are as intuitive as consumer apps.",
        capabilities: ["User Research & Persona Mapping", "Information Architecture", "Wireframing & Prototyping", "Design Systems", "Usability Testing"],
        color: "#F43F5E",
    },
];

pub struct Phase {
    pub title: &'static str,
    pub desc: &'static str,
    pub deliverables: [&'static str; 5],
}

pub const PHASES: &[Phase] = &[
    Phase {
        title: "Discovery & Strategy",
        desc: "We begin by understanding your business goals, user needs, and technical constraints. This phase eliminates assumptions.",
        deliverables: ["Stakeholder Interviews", "Competitor Analysis", "Technical Feasibility Audit", "Product Roadmap Definition", "KPI Setup"],
    },
    Phase {
        title: "Experience Design",
        desc: "We translate requirements into intuitive interfaces. Our design philosophy prioritizes usability and emotional connection.",
        deliverables: ["User Persona Mapping", "Information Architecture", "Low/High Fidelity Wireframes", "Interactive Prototypes", "Design System Creation"],
    },
    Phase {
        title: "Agile Development",
        desc: "Our engineering team builds robust, scalable solutions using modern tech stacks and microservices architecture.",
        deliverables: ["Sprint Planning", "Frontend & Backend Development", "API Integration", "Database Architecture", "Weekly Code Reviews"],
    },
    Phase {
        title: "Quality Assurance",
        desc: "We rigorously test every feature to ensure stability, security, and performance across all devices.",
        deliverables: ["Functional Testing", "UI/UX Testing", "Security Audits (VAPT)", "Performance Load Testing", "Cross-Device Compatibility"],
    },
    Phase {
        title: "Deployment & Launch",
        desc: "We ensure a smooth transition to production with zero downtime strategies and comprehensive documentation.",
        deliverables: ["Cloud Environment Setup", "CI/CD Pipeline Configuration", "App Store Submission", "User Training Manuals", "Go-Live Support"],
    },
    Phase {
        title: "Evolution & Support",
        desc: "Digital products are living ecosystems. We provide ongoing maintenance and iterative improvements based on data.",
        deliverables: ["24/7 Uptime Monitoring", "Bug Fixes & Patches", "Feature Enhancements", "Analytics Reporting", "OS Update Compatibility"],
    },
];

pub struct CaseDetail {
    pub client: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub tags: [&'static str; 3],
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: [&'static str; 3],
}

pub const CASE_DETAILS: &[CaseDetail] = &[
    CaseDetail {
        client: "Adani Airports",
        title: "AI-Powered Passenger Information Kiosks",
        image: "https://images.unsplash.com/photo-1570710891163-6d3b5c47248b?auto=format&fit=crop&q=80&w=2000",
        tags: ["AI", "Kiosk", "Travel Tech"],
        challenge: "Adani Airports managed millions of passengers who faced long wait times at information desks. They needed a contactless, automated solution to handle common queries about flights, gates, and amenities.",
        solution: "We engineered a network of smart kiosks powered by a custom NLP engine. The system understands natural language queries in multiple languages, provides real-time 3D wayfinding to gates, and integrates with the airport's live flight database.",
        results: ["30% reduction in help-desk queues", "45 second average query resolution time", "95% passenger satisfaction rate"],
    },
    CaseDetail {
        client: "Creative Galileo",
        title: "Toondemy: India's #1 Early Learning App",
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&q=80&w=2000",
        tags: ["EdTech", "Mobile App", "Gamification"],
        challenge: "The client wanted to create an educational platform featuring licensed characters like Little Singham. The challenge was to balance entertainment with rigorous curriculum standards for kids aged 3-10.",
        solution: "We built a robust mobile ecosystem that adapts learning paths based on child performance. The app features gamified lessons, parental dashboards for tracking progress, and a secure, COPPA-compliant backend.",
        results: ["7 Million+ Downloads globally", "Listed in HolonIQ's Top 100 Startups", "4.6/5 Average App Store Rating"],
    },
    CaseDetail {
        client: "ICICI Lombard",
        title: "Unified Digital Claims Ecosystem",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2000&auto=format&fit=crop",
        tags: ["FinTech", "Mobile", "Automation"],
        challenge: "Insurance claim processing was manual, paper-heavy, and slow, leading to customer dissatisfaction.",
        solution: "We developed a mobile-first claims solution with OCR for document scanning and automated workflow triggers. The system allows surveyors to upload evidence in real-time and automates approval routing.",
        results: ["60% Faster Claim Processing", "Reduced operational costs by 40%", "Real-time status tracking for customers"],
    },
    CaseDetail {
        client: "Ben & Bella",
        title: "Phygital AR Learning Experience",
        image: "https://images.unsplash.com/photo-1516627145497-ae6968895b74?q=80&w=2000&auto=format&fit=crop",
        tags: ["AR", "EdTech", "Unity"],
        challenge: "Traditional flashcards were failing to engage digital-native children in language learning.",
        solution: "We created the 'Treasure Box' AR app. When children point their device at physical cards, 3D animated characters spring to life, pronouncing words and performing actions, creating a bridge between physical play and digital learning.",
        results: ["200% increase in session duration", "Award-winning immersive design", "Global adoption in 15+ countries"],
    },
    CaseDetail {
        client: "Pidilite",
        title: "Dealer Loyalty & Management Platform",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2000&auto=format&fit=crop",
        tags: ["B2B", "Web Portal", "Data"],
        challenge: "Managing a massive network of unorganized dealers and distributors with fragmented data.",
        solution: "We built a centralized B2B portal that gamifies dealer targets. It tracks inventory, manages scheme payouts, and provides predictive analytics on sales trends.",
        results: ["50,000+ Dealers Onboarded", "90% Digital Adoption Rate", "Real-time inventory visibility"],
    },
    CaseDetail {
        client: "P&G",
        title: "ZzzQuil Sleep Profiler",
        image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?q=80&w=2000&auto=format&fit=crop",
        tags: ["Consumer Web", "3D", "Health"],
        challenge: "Engaging consumers in a boring category (sleep aids) to collect zero-party data.",
        solution: "An immersive, 3D web experience where users take a 'Sleep Profile' quiz. The interactive visuals and personalized results page made data collection fun and shareable.",
        results: ["650 Million+ Brand Reach", "High conversion to purchase", "Valuable consumer lifestyle data collected"],
    },
];

pub struct Article {
    pub category: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
}

pub const ARTICLES: &[Article] = &[
    Article {
        category: "Technology",
        title: "AI Digital Twins: The Future of Enterprise Simulation",
        excerpt: "Digital twins are moving beyond manufacturing. Learn how service-based enterprises are using AI clones to predict market shifts and optimize workforce allocation.",
        author: "CTO Office",
        date: "Oct 12, 2023",
        read_time: "5 min read",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        category: "Branding",
        title: "Sonic Branding in the Age of Voice UI",
        excerpt: "With the rise of Alexa and Siri, your brand needs a sound. We explore how machine listening algorithms help brands find their unique sonic identity.",
        author: "Design Team",
        date: "Sep 28, 2023",
        read_time: "4 min read",
        image: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        category: "Retail",
        title: "Phygital Retail: Merging Brick-and-Mortar with E-commerce",
        excerpt: "The store of the future is not just a place to buy, but a place to experience. How AR mirrors and endless-aisle kiosks are saving physical retail.",
        author: "Strategy Lead",
        date: "Sep 15, 2023",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        category: "Healthcare",
        title: "Gamification in Patient Recovery",
        excerpt: "How turning physical therapy into a video game increases patient adherence by 40%. Case studies from leading hospitals.",
        author: "Product Team",
        date: "Aug 30, 2023",
        read_time: "7 min read",
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        category: "Metaverse",
        title: "Is the Enterprise Metaverse Dead?",
        excerpt: "Hype vs. Reality. While the consumer metaverse struggles, industrial metaverse applications for training and collaboration are booming.",
        author: "Innovation Lab",
        date: "Aug 10, 2023",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1617802690992-15d93263d3a9?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        category: "UX Design",
        title: "Reducing Cognitive Load in B2B Dashboards",
        excerpt: "Enterprise software doesn't have to be ugly. Principles for designing complex data visualizations that executives can actually understand.",
        author: "UX Lead",
        date: "Jul 22, 2023",
        read_time: "5 min read",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800",
    },
];


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn widget_collections_are_not_empty() {
        assert!(!FAQS.is_empty());
        assert_eq!(CASE_STUDIES.len(), 7);
        assert!(!insight_cards().is_empty());
        assert!(!CLIENTS.is_empty());
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, ["solutions", "approach", "case-studies", "insights"]);
    }

    #[test]
    fn detail_pages_have_content() {
        assert_eq!(SOLUTIONS.len(), 6);
        assert_eq!(PHASES.len(), 6);
        assert_eq!(CASE_DETAILS.len(), 6);
        assert_eq!(ARTICLES.len(), 6);
    }

    #[test]
    fn insight_card_ids_are_unique() {
        let ids: HashSet<_> = insight_cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), INSIGHTS.len());
    }
}
