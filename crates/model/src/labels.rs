// Label/locale store.
//
// Static trilingual UI strings, carried over verbatim from the original
// PVH property portal dictionary. No logic beyond lookup.

use crate::Language;

/// UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub hero_title: &'static str,
    pub hero_sub: &'static str,
    pub search_placeholder: &'static str,
    pub search_btn: &'static str,
    pub loading: &'static str,
    pub favorites: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub auction: &'static str,
    pub deadline: &'static str,
    pub deposit: &'static str,
    pub no_results_title: &'static str,
    pub no_results_sub: &'static str,
    pub notify_me: &'static str,
    pub expert_tip: &'static str,
    pub auction_help_title: &'static str,
    pub auction_help_step1: &'static str,
    pub auction_help_step2: &'static str,
    pub auction_help_step3: &'static str,
    pub view_details: &'static str,
}

static HU: Labels = Labels {
    hero_title: "Pécs belvárosában indítaná üzletét?",
    hero_sub: "A Pécsi Vagyonkezelő bérleti kínálata mostantól mesterséges intelligenciával is böngészhető.",
    search_placeholder: "Írja le igényeit...",
    search_btn: "Ajánlatok kérése",
    loading: "Elemzés...",
    favorites: "Mentett",
    pros: "Előnyök",
    cons: "Mérlegelendő",
    auction: "Licit/Pályázat",
    deadline: "Határidő",
    deposit: "Biztosíték",
    no_results_title: "Nem találtunk pontos egyezést.",
    no_results_sub: "Ne maradjon le! Szólunk, ha megjelenik az igényeinek megfelelő ingatlan.",
    notify_me: "Értesítőt kérek",
    expert_tip: "Szakértőnk szerint",
    auction_help_title: "Hogyan működik a licit?",
    auction_help_step1: "1. Regisztráció és biztosíték befizetése.",
    auction_help_step2: "2. Pályázat benyújtása zárt borítékban.",
    auction_help_step3: "3. Nyilvános licit az irodánkban.",
    view_details: "Megnézem",
};

static EN: Labels = Labels {
    hero_title: "Starting a business in Pécs?",
    hero_sub: "The property portfolio of Pécs Asset Management is now browsable with AI assistance.",
    search_placeholder: "Describe your needs...",
    search_btn: "Get Offers",
    loading: "Analyzing...",
    favorites: "Saved",
    pros: "Pros",
    cons: "Cons",
    auction: "Auction/Tender",
    deadline: "Deadline",
    deposit: "Deposit",
    no_results_title: "No exact matches found.",
    no_results_sub: "Don't miss out! We'll notify you when a matching property becomes available.",
    notify_me: "Notify Me",
    expert_tip: "Expert Opinion",
    auction_help_title: "How does the auction work?",
    auction_help_step1: "1. Registration and deposit payment.",
    auction_help_step2: "2. Submit bid in a sealed envelope.",
    auction_help_step3: "3. Public auction at our office.",
    view_details: "View Details",
};

static DE: Labels = Labels {
    hero_title: "Geschäftseröffnung in Pécs?",
    hero_sub: "Das Immobilienportfolio der PVH ist jetzt mit KI-Unterstützung durchsuchbar.",
    search_placeholder: "Beschreiben Sie Ihre Wünsche...",
    search_btn: "Angebote erhalten",
    loading: "Analyse...",
    favorites: "Gespeichert",
    pros: "Vorteile",
    cons: "Zu beachten",
    auction: "Auktion/Ausschreibung",
    deadline: "Frist",
    deposit: "Kaution",
    no_results_title: "Keine genauen Treffer gefunden.",
    no_results_sub: "Verpassen Sie nichts! Wir benachrichtigen Sie, wenn ein passendes Objekt verfügbar wird.",
    notify_me: "Benachrichtigen",
    expert_tip: "Expertenmeinung",
    auction_help_title: "Wie funktioniert die Auktion?",
    auction_help_step1: "1. Registrierung und Kautionszahlung.",
    auction_help_step2: "2. Gebot in verschlossenem Umschlag einreichen.",
    auction_help_step3: "3. Öffentliche Auktion in unserem Büro.",
    view_details: "Details ansehen",
};

impl Labels {
    pub fn for_lang(lang: Language) -> &'static Labels {
        match lang {
            Language::Hu => &HU,
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

/// Canned category chip: a one-tap query per property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub query: &'static str,
}

static CATEGORIES_HU: [Category; 2] = [
    Category { id: "iroda", label: "Irodák", query: "Keresd meg a legjobb irodákat." },
    Category { id: "uzlet", label: "Üzletek", query: "Utcafronti üzleteket keresek." },
];

static CATEGORIES_EN: [Category; 2] = [
    Category { id: "iroda", label: "Offices", query: "Find the best offices in Pécs." },
    Category { id: "uzlet", label: "Shops", query: "Looking for street-front shops." },
];

static CATEGORIES_DE: [Category; 2] = [
    Category { id: "iroda", label: "Büros", query: "Finden Sie die besten Büros." },
    Category { id: "uzlet", label: "Läden", query: "Ich suche Ladenlokale." },
];

pub fn categories(lang: Language) -> &'static [Category] {
    match lang {
        Language::Hu => &CATEGORIES_HU,
        Language::En => &CATEGORIES_EN,
        Language::De => &CATEGORIES_DE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_labels() {
        for lang in Language::ALL {
            let t = Labels::for_lang(lang);
            assert!(!t.hero_title.is_empty());
            assert!(!t.no_results_title.is_empty());
        }
    }

    #[test]
    fn label_sets_are_distinct() {
        assert_ne!(Labels::for_lang(Language::Hu), Labels::for_lang(Language::En));
        assert_ne!(Labels::for_lang(Language::En), Labels::for_lang(Language::De));
    }

    #[test]
    fn categories_share_ids_across_languages() {
        for lang in Language::ALL {
            let cats = categories(lang);
            assert_eq!(cats.len(), 2);
            assert_eq!(cats[0].id, "iroda");
            assert_eq!(cats[1].id, "uzlet");
        }
    }
}
