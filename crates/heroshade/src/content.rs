//! Plain-text dump of the page content model.
//!
//! `heroshade content` exists so copy changes in `page.toml` can be checked
//! without opening the window; the layout mirrors the page's section order.

use pageconfig::PageConfig;

pub fn print_content(config: &PageConfig) {
    println!("{}", config.page.title);
    println!("{}", config.page.description);
    println!();

    println!("nav: {} | {}", config.nav.links.join(" | "), config.nav.cta);
    println!();

    println!("# {}", config.hero.headline);
    println!("{}", config.hero.tagline);
    for cta in &config.hero.ctas {
        println!("  [{cta}]");
    }
    println!();

    println!("media: {}", config.media.source);
    if let Some(title) = &config.media.title {
        println!("  {title}");
    }
    if let Some(description) = &config.media.description {
        println!("  {description}");
    }
    println!();

    println!("## {}: {}", config.features.kicker, config.features.heading);
    println!("{}", config.features.intro);
    for card in &config.features.cards {
        println!("  * {}: {}", card.title, card.description);
    }
    println!();

    println!("{}", config.footer.tagline);
    for column in &config.footer.columns {
        println!("  {}: {}", column.title, column.links.join(", "));
    }
    println!("{}", config.footer.notice);
}

pub fn print_variants() {
    for variant in presets::ShaderVariant::all() {
        println!("{:<12} {}", variant.name(), variant.summary());
    }
}
