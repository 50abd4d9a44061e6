//! Site copy. Everything here is static display text.

pub const BRAND_NAME: &str = "L A\u{a0}\u{a0}L O G E";
pub const BRAND_TAGLINE: &str = "CONCIERGERIE BEAUTÉ";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Méthode", href: "/#methode" },
    NavLink { label: "Offre", href: "/#offre" },
    NavLink { label: "Résultats", href: "/#resultats" },
    NavLink { label: "FAQ", href: "/#faq" },
];

pub const NAV_CTA: NavLink = NavLink { label: "PRENDRE RDV", href: "/#contact" };

pub struct HeroStat {
    pub num: &'static str,
    pub label: &'static str,
}

pub struct HeroPanel {
    pub label: &'static str,
    /// Title lines; the last one is emphasised.
    pub title: &'static [&'static str],
    pub desc: &'static str,
    pub cta: NavLink,
    pub stats: [HeroStat; 2],
}

pub static HERO_BRANDS: HeroPanel = HeroPanel {
    label: "POUR LES MARQUES",
    title: &["Accédez aux", "meilleurs salons", "d'Europe."],
    desc: "Des leads qualifiés, intentionnistes, scorés par IA. Zéro coût fixe. Vous ne payez qu'au résultat.",
    cta: NavLink { label: "DÉCOUVRIR L'OFFRE", href: "#offre" },
    stats: [
        HeroStat { num: "78 Md€", label: "Marché européen" },
        HeroStat { num: "400K+", label: "Salons en Europe" },
    ],
};

pub static HERO_SALONS: HeroPanel = HeroPanel {
    label: "POUR LES SALONS",
    title: &["Choisissez les", "marques qui vous", "correspondent."],
    desc: "Recevez des propositions de marques premium sélectionnées pour vous. Gratuit. Sans engagement. Vous décidez.",
    cta: NavLink { label: "REJOINDRE LE RÉSEAU", href: "#contact" },
    stats: [
        HeroStat { num: "12", label: "Critères de qualification" },
        HeroStat { num: "100%", label: "Gratuit pour les salons" },
    ],
};

pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        num: "01",
        title: "Recruter",
        desc: "Nous qualifions les salons selon 12 critères : CA, spécialités, positionnement, marques actuelles.",
    },
    Step {
        num: "02",
        title: "Scorer",
        desc: "Notre IA calcule un score d'affinité (0-100) entre chaque salon et votre marque.",
    },
    Step {
        num: "03",
        title: "Connecter",
        desc: "Nous présentons votre marque aux salons les plus compatibles, en tiers de confiance.",
    },
    Step {
        num: "04",
        title: "Convertir",
        desc: "Vous recevez des leads chauds. Dashboard temps réel. ROI mesurable.",
    },
];

pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub unit: &'static str,
    pub featured: bool,
    pub features: &'static [&'static str],
    pub ideal: &'static str,
}

pub const TIERS: &[Tier] = &[
    Tier {
        name: "INTELLIGENCE",
        price: "€49",
        unit: "par profil salon",
        featured: false,
        features: &[
            "Profils enrichis (CA, spécialités, marques)",
            "Score d'affinité IA avec votre marque",
            "Export CSV pour intégration CRM",
        ],
        ideal: "Alimenter votre force de vente en data actionnable",
    },
    Tier {
        name: "CONCIERGE",
        price: "€249",
        unit: "par lead qualifié",
        featured: true,
        features: &[
            "Tout Intelligence inclus",
            "Mise en relation personnalisée",
            "Salons avec intérêt actif confirmé",
            "RDV qualifié livré",
        ],
        ideal: "Lancer une gamme, pénétrer un territoire",
    },
    Tier {
        name: "PARTNERSHIP",
        price: "15%",
        unit: "de commission",
        featured: false,
        features: &[
            "Tout Concierge inclus",
            "Accompagnement jusqu'à la signature",
            "Account manager dédié",
            "Suivi post-signature 6 mois",
        ],
        ideal: "Déploiement national, partenariat structurant",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "En 3 semaines, La Loge nous a livré 50 leads qualifiés avec un score moyen de 82. Notre taux de conversion a doublé par rapport au terrain.",
        author: "Directrice commerciale",
        role: "Groupe beauté professionnelle — France",
    },
    Testimonial {
        quote: "On a enfin accès à des marques qui correspondent à notre positionnement. Pas du démarchage, une vraie sélection personnalisée.",
        author: "Gérante de salon",
        role: "12 fauteuils — Lyon",
    },
];

pub struct ProofStat {
    pub num: &'static str,
    /// Rendered with `white-space: pre-line`.
    pub label: &'static str,
}

pub const PROOF_STATS: &[ProofStat] = &[
    ProofStat { num: "5,1×", label: "ROI moyen constaté\nsur l'offre Concierge" },
    ProofStat { num: "42%", label: "Taux de conversion\ndes leads qualifiés" },
    ProofStat { num: "€249", label: "Coût par lead\nvs €8 400 terrain" },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Qui paie le service ?",
        answer: "Les marques. L'inscription et les mises en relation sont 100% gratuites pour les salons.",
    },
    FaqEntry {
        question: "Comment les salons sont-ils qualifiés ?",
        answer: "Chaque salon est évalué selon 12 critères : chiffre d'affaires, spécialités, positionnement, marques déjà distribuées, nombre de fauteuils, zone géographique.",
    },
    FaqEntry {
        question: "Que mesure le score d'affinité ?",
        answer: "Un score de 0 à 100 qui estime la compatibilité entre un salon et votre marque. Seuls les salons les plus compatibles vous sont présentés.",
    },
    FaqEntry {
        question: "Y a-t-il un engagement ?",
        answer: "Non. Le pilote dure 30 jours, sans engagement. Le déploiement ne se fait que si le pilote performe.",
    },
    FaqEntry {
        question: "Un salon peut-il refuser une marque ?",
        answer: "Toujours. Nous représentons le salon : il choisit les marques qu'il souhaite rencontrer.",
    },
];

pub struct CtaStep {
    pub num: &'static str,
    pub text: &'static str,
}

pub const CTA_STEPS: &[CtaStep] = &[
    CtaStep { num: "01", text: "Appel de découverte — 30 min" },
    CtaStep { num: "02", text: "Calibrage de l'offre sur mesure" },
    CtaStep { num: "03", text: "Pilote 30 jours — zéro engagement" },
    CtaStep { num: "04", text: "Déploiement si le pilote performe" },
];

/// Field copy for one side of the contact form.
pub struct AudienceForm {
    pub tab_label: &'static str,
    pub organisation_label: &'static str,
    pub organisation_placeholder: &'static str,
    pub detail_label: &'static str,
    pub detail_options: &'static [&'static str],
    pub submit_label: &'static str,
}

pub static BRAND_FORM: AudienceForm = AudienceForm {
    tab_label: "JE SUIS UNE MARQUE",
    organisation_label: "NOM DE LA MARQUE",
    organisation_placeholder: "Ex: Wella Professionals",
    detail_label: "OBJECTIF PRINCIPAL",
    detail_options: &[
        "Lancement de gamme",
        "Pénétration territoriale",
        "Déploiement national",
        "Data & intelligence salon",
    ],
    submit_label: "RÉSERVER MON APPEL DÉCOUVERTE",
};

pub static SALON_FORM: AudienceForm = AudienceForm {
    tab_label: "JE SUIS UN SALON",
    organisation_label: "NOM DU SALON",
    organisation_placeholder: "Ex: Salon Élégance",
    detail_label: "NOMBRE DE FAUTEUILS",
    detail_options: &["1-3 fauteuils", "4-8 fauteuils", "9+ fauteuils"],
    submit_label: "REJOINDRE LE RÉSEAU LA LOGE",
};

pub const SELECT_PLACEHOLDER: &str = "Sélectionnez...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_featured_tier() {
        assert_eq!(TIERS.iter().filter(|t| t.featured).count(), 1);
        assert_eq!(TIERS.iter().find(|t| t.featured).map(|t| t.name), Some("CONCIERGE"));
    }

    #[test]
    fn sections_have_copy() {
        assert_eq!(STEPS.len(), 4);
        assert_eq!(CTA_STEPS.len(), 4);
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ.is_empty());
        assert!(PROOF_STATS.iter().all(|s| s.label.contains('\n')));
    }

    #[test]
    fn audience_forms_differ() {
        assert_ne!(BRAND_FORM.organisation_label, SALON_FORM.organisation_label);
        assert_ne!(BRAND_FORM.detail_options, SALON_FORM.detail_options);
    }
}
