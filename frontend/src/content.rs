use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientSegment {
    pub title: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreachCost {
    pub region: &'static str,
    pub amount: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceCard {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub sector: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opening {
    pub role: &'static str,
    pub kind: &'static str,
}

/// Menu order is the declaration order.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { href: "#home", label: "Home" },
    NavItem { href: "#consulting", label: "Consulting" },
    NavItem { href: "#hacker-network", label: "Hacker Network" },
    NavItem { href: "#case-studies", label: "Case Studies" },
    NavItem { href: "#resources", label: "Resources" },
    NavItem { href: "#careers", label: "Careers" },
    NavItem { href: "#contact", label: "Contact" },
];

/// Ids of the elements the page renders as anchor targets.
pub mod section {
    pub const HOME: &str = "home";
    pub const CONSULTING: &str = "consulting";
    pub const HACKER_NETWORK: &str = "hacker-network";
    pub const CASE_STUDIES: &str = "case-studies";
    pub const RESOURCES: &str = "resources";
    pub const CAREERS: &str = "careers";
    pub const CONTACT: &str = "contact";
}

pub const HERO_HEADLINES: [&str; 3] = [
    "Closing Security Loopholes.",
    "Saving Millions.",
    "Empowering Africa.",
];

pub const HERO_FEATURES: [&str; 4] = [
    "Certified ethical hackers",
    "AI-assisted threat detection",
    "24/7 incident response",
    "Cross-industry expertise",
];

pub const BREACH_COSTS: [BreachCost; 3] = [
    BreachCost {
        region: "Global average cost of a data breach",
        amount: "US$4.44 million",
    },
    BreachCost {
        region: "South Africa average",
        amount: "R44.1 million (~US$2.45 million)",
    },
    BreachCost {
        region: "Nigeria average",
        amount: "NGN375 billion (~£190 million)",
    },
];

pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        title: "Security Consulting & Architecture",
        description: "Audit your systems, design secure architectures, set up secure development practices, risk assessments.",
        icon: Icon::Shield,
    },
    ServiceEntry {
        title: "Penetration Testing & Red Teaming",
        description: "Proactive attacks to find weaknesses before hackers exploit them.",
        icon: Icon::Target,
    },
    ServiceEntry {
        title: "Incident Response & Remediation",
        description: "When breach/attack happens — rapid diagnosis, containment, recovery.",
        icon: Icon::AlertTriangle,
    },
    ServiceEntry {
        title: "Vulnerability Assessments & Loophole Fixing",
        description: "Identify bugs, misconfigurations, supply-chain risks, and more.",
        icon: Icon::Search,
    },
    ServiceEntry {
        title: "Ethical Hacker Network",
        description: "Vetted professionals who help us rapidly respond, test, and consult.",
        icon: Icon::Users,
    },
    ServiceEntry {
        title: "Compliance & Regulatory Advisory",
        description: "ISO, GDPR, regional privacy laws, cyber policies & standards.",
        icon: Icon::Award,
    },
];

pub const CLIENT_SEGMENTS: [ClientSegment; 4] = [
    ClientSegment {
        title: "Governments & Public Sector",
        image_url: "https://cdn.pixabay.com/photo/2017/07/02/00/43/bundestag-2463236_1280.jpg",
    },
    ClientSegment {
        title: "Medium & Large Corporations",
        image_url: "https://cdn.pixabay.com/photo/2018/03/10/12/00/teamwork-3213924_1280.jpg",
    },
    ClientSegment {
        title: "Startups & SMEs",
        image_url: "https://cdn.pixabay.com/photo/2015/07/17/22/42/startup-849804_1280.jpg",
    },
    ClientSegment {
        title: "Financial, Healthcare, Tech",
        image_url: "https://cdn.pixabay.com/photo/2020/03/05/16/58/hospital-4904920_1280.jpg",
    },
];

pub const HACKER_NETWORK_PERKS: [&str; 4] = [
    "Paid engagements with vetted clients",
    "Responsible disclosure under clear rules of engagement",
    "Mentorship from senior red teamers",
    "Access to training labs and certification support",
];

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        sector: "Public Sector",
        headline: "Hardening a citizen services portal",
        summary: "External and internal testing ahead of a national rollout, with every critical finding remediated before launch.",
    },
    CaseStudy {
        sector: "Financial Services",
        headline: "Containing a payment-fraud intrusion",
        summary: "Incident response from first alert to full recovery, followed by a red-team retest of the patched environment.",
    },
    CaseStudy {
        sector: "Healthcare",
        headline: "Compliance roadmap for patient data",
        summary: "Gap analysis against GDPR and regional privacy laws, turned into a prioritised remediation plan.",
    },
];

pub const RESOURCE_CARDS: [ResourceCard; 2] = [
    ResourceCard {
        title: "Latest Blog Posts",
        body: "Stay updated with the latest security insights, breach analysis, and best practices for African markets.",
        action: "Read More",
    },
    ResourceCard {
        title: "Whitepaper",
        body: "\"Average Hidden Costs of Data Breaches in Africa\" - Download our comprehensive analysis.",
        action: "Download Now",
    },
];

pub const OPENINGS: [Opening; 3] = [
    Opening { role: "Penetration Tester", kind: "Full-time" },
    Opening { role: "Incident Response Analyst", kind: "Full-time" },
    Opening { role: "Security Research Intern", kind: "Internship" },
];

pub const FOOTER_QUICK_LINKS: [NavItem; 4] = [
    NavItem { href: "#home", label: "Home" },
    NavItem { href: "#consulting", label: "Services" },
    NavItem { href: "#hacker-network", label: "Hacker Network" },
    NavItem { href: "#case-studies", label: "Case Studies" },
];

pub const FOOTER_RESOURCE_LINKS: [NavItem; 3] = [
    NavItem { href: "#resources", label: "Resources" },
    NavItem { href: "#careers", label: "Careers" },
    NavItem { href: "#contact", label: "Contact" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_items_keep_menu_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            ["Home", "Consulting", "Hacker Network", "Case Studies", "Resources", "Careers", "Contact"]
        );
    }

    #[test]
    fn services_are_distinct_and_ordered() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(SERVICES[0].title, "Security Consulting & Architecture");
        assert_eq!(SERVICES[0].icon, Icon::Shield);
        assert_eq!(SERVICES[5].title, "Compliance & Regulatory Advisory");
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn client_segments_are_distinct_and_ordered() {
        let titles: Vec<_> = CLIENT_SEGMENTS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Governments & Public Sector",
                "Medium & Large Corporations",
                "Startups & SMEs",
                "Financial, Healthcare, Tech",
            ]
        );
        assert!(CLIENT_SEGMENTS.iter().all(|s| s.image_url.starts_with("https://")));
    }
}
