//! Static marketing copy for every section of the page.
//!
//! Everything here is `'static` and typed so each section receives exactly the
//! data it renders. The fallback testimonials double as the bundled list shown
//! when the API cannot be reached.

use crate::models::Testimonial;

#[derive(Debug, PartialEq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monogram: &'static str,
    pub coverage: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct HeroContent {
    pub kicker: &'static str,
    pub title_lead: &'static str,
    pub title_highlight: &'static str,
    pub title_tail: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub trust_points: &'static [&'static str],
    pub card_title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Database,
    BarChart,
    Users,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Database => "🗄️",
            ServiceIcon::BarChart => "📊",
            ServiceIcon::Users => "👥",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct PriceTier {
    pub label: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
    pub features: &'static [&'static str],
    pub pricing: &'static [PriceTier],
}

#[derive(Debug, PartialEq)]
pub struct ServicesContent {
    pub badge: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub offerings: &'static [ServiceOffering],
}

#[derive(Debug, PartialEq)]
pub struct ProblemContent {
    pub badge: &'static str,
    pub heading_lead: &'static str,
    pub heading_highlight: &'static str,
    pub intro: &'static str,
    pub pain_points: &'static [&'static str],
    pub solution_title: &'static str,
    pub solution_text: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ValueCard {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct AboutContent {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub expertise: &'static [&'static str],
    pub stats: &'static [Stat],
    pub values: &'static [ValueCard],
    pub portrait: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultationKind {
    FreeQuote,
    Strategy,
    ComprehensiveReview,
}

impl ConsultationKind {
    pub const ALL: [ConsultationKind; 3] = [
        ConsultationKind::FreeQuote,
        ConsultationKind::Strategy,
        ConsultationKind::ComprehensiveReview,
    ];

    /// Value submitted as `consultationType`.
    pub fn slug(self) -> &'static str {
        match self {
            ConsultationKind::FreeQuote => "free-quote",
            ConsultationKind::Strategy => "strategy",
            ConsultationKind::ComprehensiveReview => "comprehensive-review",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    Free,
    Amount(&'static str),
}

impl Price {
    pub fn label(self) -> &'static str {
        match self {
            Price::Free => "FREE",
            Price::Amount(amount) => amount,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ConsultationOffering {
    pub id: ConsultationKind,
    pub name: &'static str,
    pub duration: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct StaticTestimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl From<&StaticTestimonial> for Testimonial {
    fn from(t: &StaticTestimonial) -> Self {
        Testimonial {
            id: t.id.to_string(),
            name: t.name.to_string(),
            company: t.company.to_string(),
            location: t.location.to_string(),
            text: t.text.to_string(),
            rating: t.rating,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, PartialEq)]
pub struct FooterContent {
    pub blurb: &'static str,
    pub groups: &'static [FooterGroup],
    pub socials: &'static [NavLink],
}

pub struct SiteContent {
    pub brand: Brand,
    pub contact: ContactDetails,
    pub nav: &'static [NavLink],
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub problems: ProblemContent,
    pub about: AboutContent,
    pub consultations: &'static [ConsultationOffering],
    pub fallback_testimonials: &'static [StaticTestimonial],
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn consultation(&self, kind: ConsultationKind) -> Option<&'static ConsultationOffering> {
        self.consultations.iter().find(|c| c.id == kind)
    }

    /// Offering behind a consultation select value, if any.
    pub fn consultation_for_slug(&self, slug: &str) -> Option<&'static ConsultationOffering> {
        ConsultationKind::from_slug(slug).and_then(|kind| self.consultation(kind))
    }
}

pub fn fallback_testimonials() -> Vec<Testimonial> {
    SITE.fallback_testimonials.iter().map(Testimonial::from).collect()
}

pub static SITE: SiteContent = SiteContent {
    brand: Brand {
        name: "Christopher Merrick",
        tagline: "Database Consulting",
        monogram: "CM",
        coverage: "Sheffield • Serving UK Nationwide",
    },
    contact: ContactDetails {
        phone: "+44 114 123 4567",
        email: "hello@christophermerrick.co.uk",
        address: "Sheffield, South Yorkshire, UK",
        hours: "Monday - Friday: 9:00 AM - 6:00 PM",
    },
    nav: &[
        NavLink { label: "Home", href: "#home" },
        NavLink { label: "Services", href: "#services" },
        NavLink { label: "About", href: "#about" },
        NavLink { label: "Testimonials", href: "#testimonials" },
        NavLink { label: "Contact", href: "#contact" },
    ],
    hero: HeroContent {
        kicker: "Sheffield, UK • Serving Nationwide",
        title_lead: "Expert ",
        title_highlight: "Database Solutions",
        title_tail: " for UK Businesses",
        subtitle: "Transform your business operations with bespoke Microsoft Access databases. Professional data consulting services that turn complexity into competitive advantage.",
        cta: "Get Free Consultation",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop&crop=entropy",
        image_alt: "Database consulting services",
        trust_points: &["Available Nationwide", "GDPR Compliant", "Free Consultation"],
        card_title: "Data Engineer",
    },
    services: ServicesContent {
        badge: "Our Services",
        heading: "Comprehensive Database Solutions",
        intro: "From simple database creation to complex data analysis, we provide tailored solutions that transform how your business manages and leverages data.",
        offerings: &[
            ServiceOffering {
                title: "Custom Access Databases",
                description: "Bespoke Microsoft Access databases designed to streamline your operations and unlock your organisation's potential.",
                icon: ServiceIcon::Database,
                features: &["Custom forms and reports", "Data relationships", "User-friendly interfaces", "Scalable solutions"],
                pricing: &[
                    PriceTier { label: "Basic", amount: "£750 - £2,000" },
                    PriceTier { label: "Intermediate", amount: "£2,000 - £7,500" },
                    PriceTier { label: "Advanced", amount: "£7,500+" },
                ],
            },
            ServiceOffering {
                title: "Data Analysis & Insights",
                description: "Transform raw data into actionable insights that drive informed business decisions and competitive advantage.",
                icon: ServiceIcon::BarChart,
                features: &["Data visualization", "Performance metrics", "Trend analysis", "Custom reporting"],
                pricing: &[],
            },
            ServiceOffering {
                title: "Database Consulting",
                description: "Expert guidance on data strategy, optimization, and system integration. Available from 1-hour sessions to full-day reviews.",
                icon: ServiceIcon::Users,
                features: &["System optimization", "Data strategy", "Process improvement", "Staff training"],
                pricing: &[
                    PriceTier { label: "Hourly", amount: "£80/hour" },
                    PriceTier { label: "Half day", amount: "£300" },
                    PriceTier { label: "Full day", amount: "£550" },
                ],
            },
        ],
    },
    problems: ProblemContent {
        badge: "Do You Need Help?",
        heading_lead: "Are These Problems ",
        heading_highlight: "Holding Your Business Back?",
        intro: "If you're experiencing any of these common business challenges, you're not alone. Many UK businesses struggle with inefficient data management.",
        pain_points: &[
            "Multiple spreadsheets that don't talk to each other",
            "Software becoming too expensive or inflexible",
            "Old databases that no longer work properly",
            "Too much time spent on manual admin tasks",
            "Lack of visibility into staff activities",
            "Feeling overwhelmed by data management",
            "Competitors seem to operate more efficiently",
        ],
        solution_title: "The Good News: These Problems Are Solvable",
        solution_text: "With the right database solution, you can eliminate these pain points and transform your business operations for improved efficiency and growth.",
        image: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&h=500&fit=crop&crop=entropy",
        image_alt: "Business person overwhelmed with spreadsheets",
    },
    about: AboutContent {
        name: "Christopher Merrick",
        title: "Data Engineer & Access Database Specialist",
        location: "Sheffield, UK",
        description: "With years of experience creating bespoke Access databases and providing data analysis, I help UK businesses turn data into strategic advantage. Based in Sheffield but serving clients nationwide.",
        expertise: &[
            "Microsoft Access Development",
            "Database Design & Optimization",
            "Data Analysis & Reporting",
            "System Integration",
            "Process Automation",
        ],
        stats: &[
            Stat { value: "50+", label: "Happy Clients" },
            Stat { value: "10+", label: "Years Experience" },
            Stat { value: "100+", label: "Projects Completed" },
        ],
        values: &[
            ValueCard {
                title: "Expert Knowledge",
                text: "Years of experience with Microsoft Access and database optimization for UK businesses.",
            },
            ValueCard {
                title: "Client-Focused",
                text: "Tailored solutions that fit your specific business needs and growth objectives.",
            },
            ValueCard {
                title: "Reliable Service",
                text: "Prompt communication, on-time delivery, and ongoing support for peace of mind.",
            },
        ],
        portrait: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=500&fit=crop&crop=face",
    },
    consultations: &[
        ConsultationOffering {
            id: ConsultationKind::FreeQuote,
            name: "Free Quote Consultation",
            duration: "30 minutes",
            price: Price::Free,
            description: "Get a no-obligation quote for your database project",
            features: &["Project scope discussion", "Initial requirements review", "Cost estimation"],
        },
        ConsultationOffering {
            id: ConsultationKind::Strategy,
            name: "Strategy Consultation",
            duration: "1 hour",
            price: Price::Amount("£80"),
            description: "In-depth consultation on your data strategy and needs",
            features: &["Current system review", "Improvement recommendations", "Next steps planning"],
        },
        ConsultationOffering {
            id: ConsultationKind::ComprehensiveReview,
            name: "Comprehensive Review",
            duration: "Half day",
            price: Price::Amount("£300"),
            description: "Detailed on-site or remote review of your data systems",
            features: &["Full system audit", "Detailed report", "Implementation roadmap"],
        },
    ],
    fallback_testimonials: &[
        StaticTestimonial {
            id: "1",
            name: "Sarah Johnson",
            company: "Johnson Manufacturing Ltd",
            location: "Manchester",
            text: "Christopher created an amazing system to track all our inventory and orders. It's saved us countless hours and improved our accuracy dramatically.",
            rating: 5,
        },
        StaticTestimonial {
            id: "2",
            name: "David Wright",
            company: "Wright Consulting",
            location: "Birmingham",
            text: "The database solution Christopher built has transformed how we manage client data. Professional service and excellent results.",
            rating: 5,
        },
        StaticTestimonial {
            id: "3",
            name: "Emma Thompson",
            company: "Thompson Logistics",
            location: "Leeds",
            text: "Highly recommend Christopher's services. He understood our complex requirements and delivered exactly what we needed.",
            rating: 5,
        },
    ],
    footer: FooterContent {
        blurb: "Expert Access database solutions for UK businesses. Transform your data management and unlock your business potential with professional consulting services.",
        groups: &[
            FooterGroup {
                title: "Services",
                links: &[
                    NavLink { label: "Access Databases", href: "#services" },
                    NavLink { label: "Data Analysis", href: "#services" },
                    NavLink { label: "Database Consulting", href: "#services" },
                    NavLink { label: "System Integration", href: "#services" },
                ],
            },
            FooterGroup {
                title: "Company",
                links: &[
                    NavLink { label: "About", href: "#about" },
                    NavLink { label: "Case Studies", href: "#testimonials" },
                    NavLink { label: "Contact", href: "#contact" },
                ],
            },
            FooterGroup {
                title: "Legal",
                links: &[
                    NavLink { label: "Privacy Policy", href: "/privacy" },
                    NavLink { label: "Terms of Service", href: "/terms" },
                    NavLink { label: "GDPR Compliance", href: "/gdpr" },
                    NavLink { label: "Cookie Policy", href: "/cookies" },
                ],
            },
        ],
        socials: &[
            NavLink { label: "Facebook", href: "#" },
            NavLink { label: "Twitter", href: "#" },
            NavLink { label: "LinkedIn", href: "#" },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_consultation_kind_has_an_offering() {
        for kind in ConsultationKind::ALL {
            assert!(SITE.consultation(kind).is_some(), "{:?} has no offering", kind);
            assert_eq!(ConsultationKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ConsultationKind::from_slug("free quote consultation"), None);
    }

    #[test]
    fn fallback_list_has_at_least_three_valid_entries() {
        let list = fallback_testimonials();
        assert!(list.len() >= 3);
        assert!(list.iter().all(|t| (1..=5).contains(&t.rating) && !t.text.is_empty()));
    }

    #[test]
    fn select_value_resolves_to_offering() {
        let strategy = SITE.consultation_for_slug("strategy").expect("strategy offering");
        assert_eq!(strategy.name, "Strategy Consultation");
        assert_eq!(strategy.price.label(), "£80");
        assert!(SITE.consultation_for_slug("").is_none());
        assert!(SITE.consultation_for_slug("weekend-retreat").is_none());
    }

    #[test]
    fn free_price_label() {
        assert_eq!(Price::Free.label(), "FREE");
        assert_eq!(Price::Amount("£80").label(), "£80");
    }
}
