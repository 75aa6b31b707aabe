// Property card presenter.
//
// Pure functions from (suggestion, favorite flag, language) to rendered
// text: a plain block for one-shot CLI output and styled lines for the
// TUI detail pane. The favorite toggle event itself is wired in the TUI
// and carries the suggestion's link.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use propseek_model::labels::Labels;
use propseek_model::{Language, PropertySuggestion};

// Stock photos used when a listing has no usable image.
pub const OFFICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=600&q=80";
pub const SHOP_IMAGE: &str =
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&w=600&q=80";
pub const GENERIC_IMAGE: &str =
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=600&q=80";

/// Stock image picked by a case-insensitive keyword probe of the title.
/// A heuristic, not a guarantee.
pub fn fallback_image_url(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("iroda") || title.contains("office") || title.contains("büro") {
        OFFICE_IMAGE
    } else if title.contains("üzlet")
        || title.contains("bolt")
        || title.contains("shop")
        || title.contains("laden")
    {
        SHOP_IMAGE
    } else {
        GENERIC_IMAGE
    }
}

/// The image to show: the listing's own URL unless it is absent or its
/// load already failed, else the stock fallback.
pub fn effective_image_url(property: &PropertySuggestion, image_failed: bool) -> &str {
    match &property.image_url {
        Some(url) if !image_failed => url,
        _ => fallback_image_url(&property.title),
    }
}

/// Plain-text card for one-shot CLI output.
pub fn plain(property: &PropertySuggestion, is_favorite: bool, lang: Language) -> String {
    let t = Labels::for_lang(lang);
    let marker = if is_favorite { "★" } else { "·" };

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", marker, property.title));
    match (property.price.is_empty(), property.location.is_empty()) {
        (false, false) => out.push_str(&format!("  {} | {}\n", property.price, property.location)),
        (false, true) => out.push_str(&format!("  {}\n", property.price)),
        (true, false) => out.push_str(&format!("  {}\n", property.location)),
        (true, true) => {}
    }
    if !property.description.is_empty() {
        out.push_str(&format!("  {}\n", property.description));
    }
    if let Some(auction) = &property.auction_info {
        out.push_str(&format!(
            "  {}: {} | {}: {} | {}: {}\n",
            t.auction,
            auction.mode.as_str().to_uppercase(),
            t.deadline,
            auction.deadline,
            t.deposit,
            auction.deposit,
        ));
    }
    if !property.pros.is_empty() {
        out.push_str(&format!("  {}: {}\n", t.pros, property.pros.join(", ")));
    }
    if !property.cons.is_empty() {
        out.push_str(&format!("  {}: {}\n", t.cons, property.cons.join(", ")));
    }
    out.push_str(&format!("  {}: \"{}\"\n", t.expert_tip, property.reason));
    if let Some(tags) = &property.tags {
        if !tags.is_empty() {
            out.push_str(&format!("  [{}]\n", tags.join("] [")));
        }
    }
    out.push_str(&format!("  {}: {}\n", t.view_details, property.link));
    out
}

/// Styled card lines for the TUI detail pane.
pub fn lines(
    property: &PropertySuggestion,
    is_favorite: bool,
    lang: Language,
    image_failed: bool,
) -> Vec<Line<'static>> {
    let t = Labels::for_lang(lang);
    let mut lines: Vec<Line> = Vec::new();

    let marker = if is_favorite { "★ " } else { "" };
    lines.push(Line::from(Span::styled(
        format!("{}{}", marker, property.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    let mut meta = Vec::new();
    if !property.price.is_empty() {
        meta.push(Span::styled(
            property.price.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if !property.location.is_empty() {
        if !meta.is_empty() {
            meta.push(Span::raw("  "));
        }
        meta.push(Span::styled(
            property.location.clone(),
            Style::default().fg(Color::Gray),
        ));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }
    lines.push(Line::default());

    if let Some(auction) = &property.auction_info {
        if auction.mode.is_bidding() {
            lines.push(Line::from(Span::styled(
                format!("{}: {}", t.auction, auction.mode.as_str().to_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "{}: {}   {}: {}",
                t.deadline, auction.deadline, t.deposit, auction.deposit
            ),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }

    if !property.description.is_empty() {
        lines.push(Line::from(property.description.clone()));
        lines.push(Line::default());
    }

    if !property.pros.is_empty() {
        lines.push(Line::from(Span::styled(
            t.pros.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        for pro in &property.pros {
            lines.push(Line::from(Span::styled(
                format!("  ✓ {}", pro),
                Style::default().fg(Color::Green),
            )));
        }
    }
    if !property.cons.is_empty() {
        lines.push(Line::from(Span::styled(
            t.cons.to_string(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )));
        for con in &property.cons {
            lines.push(Line::from(Span::styled(
                format!("  - {}", con),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        format!("{}:", t.expert_tip),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("\"{}\"", property.reason),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());

    if let Some(tags) = &property.tags {
        if !tags.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("[{}]", tags.join("] [")),
                Style::default().fg(Color::Magenta),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("🖼 {}", effective_image_url(property, image_failed)),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!("{}: {}", t.view_details, property.link),
        Style::default().fg(Color::Cyan),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use propseek_model::{AuctionInfo, SaleMode};

    fn listing(title: &str, image_url: Option<&str>) -> PropertySuggestion {
        PropertySuggestion {
            id: "1".to_string(),
            title: title.to_string(),
            price: "€650/month".to_string(),
            location: "Pécs".to_string(),
            description: "65 sqm.".to_string(),
            link: "https://ingatlanok.pvh.hu/pvh123".to_string(),
            image_url: image_url.map(String::from),
            reason: "Great spot.".to_string(),
            tags: Some(vec!["DOWNTOWN".to_string()]),
            pros: vec!["Prime location".to_string()],
            cons: vec!["Busy area".to_string()],
            auction_info: Some(AuctionInfo {
                deadline: "2025.04.15".to_string(),
                mode: SaleMode::Licit,
                deposit: "€1500".to_string(),
            }),
        }
    }

    #[test]
    fn fallback_keyed_by_title_keywords() {
        assert_eq!(fallback_image_url("Modern Irodaház"), OFFICE_IMAGE);
        assert_eq!(fallback_image_url("Király Street OFFICE"), OFFICE_IMAGE);
        assert_eq!(fallback_image_url("Büro am Markt"), OFFICE_IMAGE);
        assert_eq!(fallback_image_url("Király utcai Üzlet"), SHOP_IMAGE);
        assert_eq!(fallback_image_url("Sarki bolt"), SHOP_IMAGE);
        assert_eq!(fallback_image_url("Corner Shop"), SHOP_IMAGE);
        assert_eq!(fallback_image_url("Raktár a Zsolnay negyedben"), GENERIC_IMAGE);
    }

    #[test]
    fn effective_image_prefers_the_listing_url() {
        let p = listing("Valami iroda", Some("https://example.com/own.jpg"));
        assert_eq!(effective_image_url(&p, false), "https://example.com/own.jpg");
        // A signaled load failure falls back deterministically
        assert_eq!(effective_image_url(&p, true), OFFICE_IMAGE);
    }

    #[test]
    fn missing_image_uses_the_fallback() {
        let p = listing("Corner Shop", None);
        assert_eq!(effective_image_url(&p, false), SHOP_IMAGE);
    }

    #[test]
    fn plain_card_carries_labels_and_favorite_marker() {
        let p = listing("Király Street Art Office", None);
        let en = plain(&p, true, Language::En);
        assert!(en.starts_with("★ Király Street Art Office"));
        assert!(en.contains("Auction/Tender: LICIT"));
        assert!(en.contains("Pros: Prime location"));
        assert!(en.contains("https://ingatlanok.pvh.hu/pvh123"));

        let hu = plain(&p, false, Language::Hu);
        assert!(hu.starts_with("· "));
        assert!(hu.contains("Előnyök: Prime location"));
    }

    #[test]
    fn tui_card_renders_without_panicking() {
        let p = listing("Király utcai Üzlet", Some("https://example.com/a.jpg"));
        for lang in Language::ALL {
            let lines = lines(&p, true, lang, false);
            assert!(lines.len() > 5);
        }
    }
}
