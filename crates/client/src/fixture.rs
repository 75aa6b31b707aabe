// Canned fixture responses.
//
// One fully-populated response per language, used for the sentinel
// query and as offline/demo fallback content. The German fixture has an
// empty suggestion list on purpose: it exercises the lead-capture path.

use propseek_model::{
    AuctionInfo, Language, PropertySuggestion, RecommendationResponse, SaleMode,
};

pub const OFFICE_PHOTO: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=600&q=80";
const MODERN_OFFICE_PHOTO: &str =
    "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&w=600&q=80";

/// Fixture for the given language.
pub fn for_lang(lang: Language) -> RecommendationResponse {
    match lang {
        Language::Hu => hungarian(),
        Language::En => english(),
        Language::De => german(),
    }
}

fn hungarian() -> RecommendationResponse {
    RecommendationResponse {
        summary: "Pécs szívében, a Király utca környékén találtam 3 olyan üzlethelyiséget, \
                  amely tökéletes lenne egy kézműves kávézó számára. Mindhárom ingatlan nagy \
                  üvegfelülettel és jelentős gyalogos forgalommal rendelkezik."
            .to_string(),
        suggestions: vec![
            PropertySuggestion {
                id: "1".to_string(),
                title: "Király utcai 'Art Deco' Üzlet".to_string(),
                price: "240.000 Ft/hó".to_string(),
                location: "Pécs, Király u. 12.".to_string(),
                description: "65 m2-es, polgári stílusú üzlethelyiség, hatalmas boltíves ablakokkal."
                    .to_string(),
                link: "https://ingatlanok.pvh.hu/pvh123".to_string(),
                image_url: Some(OFFICE_PHOTO.to_string()),
                reason: "A Király utca legforgalmasabb részén van, a kávézó terasza is megoldható."
                    .to_string(),
                tags: Some(vec!["BELVÁROS".to_string(), "TERASZ LEHETŐSÉG".to_string()]),
                pros: vec![
                    "Kiemelt lokáció".to_string(),
                    "Nagy belmagasság".to_string(),
                    "Frissen festett".to_string(),
                ],
                cons: vec!["Kevés raktárhelyiség".to_string(), "Zajos környezet".to_string()],
                auction_info: Some(AuctionInfo {
                    deadline: "2025.04.15".to_string(),
                    mode: SaleMode::Licit,
                    deposit: "500.000 Ft".to_string(),
                }),
            },
            PropertySuggestion {
                id: "2".to_string(),
                title: "Modern Irodaház - Zsolnay Negyed".to_string(),
                price: "180.000 Ft/hó".to_string(),
                location: "Pécs, Zsolnay út 4.".to_string(),
                description: "45 m2-es, légkondicionált iroda, közös teakonyhával.".to_string(),
                link: "https://ingatlanok.pvh.hu/pvh456".to_string(),
                image_url: Some(MODERN_OFFICE_PHOTO.to_string()),
                reason: "Csendes, modern környezet, ideális kreatív munkához.".to_string(),
                tags: Some(vec!["KLÍMA".to_string(), "PARKOLÓ".to_string()]),
                pros: vec![
                    "Alacsony rezsi".to_string(),
                    "Portaszolgálat".to_string(),
                    "Ingyen parkolás".to_string(),
                ],
                cons: vec!["Távolabb a központtól".to_string()],
                auction_info: Some(AuctionInfo {
                    deadline: "2025.05.01".to_string(),
                    mode: SaleMode::Fix,
                    deposit: "0 Ft".to_string(),
                }),
            },
        ],
        sources: vec![],
    }
}

fn english() -> RecommendationResponse {
    RecommendationResponse {
        summary: "I found 2 premium properties in Pécs that match your requirements for a \
                  modern office space with good accessibility."
            .to_string(),
        suggestions: vec![PropertySuggestion {
            id: "1".to_string(),
            title: "Király Street Art Office".to_string(),
            price: "€650/month".to_string(),
            location: "Pécs, Király str. 12.".to_string(),
            description: "65 sqm classic office space with large arched windows.".to_string(),
            link: "https://ingatlanok.pvh.hu/pvh123".to_string(),
            image_url: Some(OFFICE_PHOTO.to_string()),
            reason: "Located in the heart of the pedestrian zone, perfect for representative offices."
                .to_string(),
            tags: Some(vec!["DOWNTOWN".to_string(), "HISTORIC".to_string()]),
            pros: vec![
                "Prime location".to_string(),
                "High ceiling".to_string(),
                "Recently renovated".to_string(),
            ],
            cons: vec!["Limited storage".to_string(), "Busy area".to_string()],
            auction_info: Some(AuctionInfo {
                deadline: "2025.04.15".to_string(),
                mode: SaleMode::Licit,
                deposit: "€1500".to_string(),
            }),
        }],
        sources: vec![],
    }
}

fn german() -> RecommendationResponse {
    RecommendationResponse {
        summary: "Ich habe 2 erstklassige Immobilien in Pécs gefunden, die Ihren Anforderungen \
                  an moderne Büroflächen mit guter Erreichbarkeit entsprechen."
            .to_string(),
        suggestions: vec![],
        sources: vec![],
    }
}
