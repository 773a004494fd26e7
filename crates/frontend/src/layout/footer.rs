use contracts::shared::global_config::FooterConfig;

use crate::app::App;
use crate::shared::dom;
use crate::shared::svg_cache::{resolve_icons, IconTable};

pub fn render_footer(footer: &FooterConfig, icons: &IconTable) -> String {
    let mut html = String::new();

    if let Some(copyright) = &footer.copyright {
        html.push_str(&format!("<p>{}</p>", copyright));
    }

    if !footer.links.is_empty() {
        html.push_str(r#"<div class="social-links">"#);
        for link in &footer.links {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{}" class="svg-icon">{}</a>"#,
                link.url,
                link.name,
                link.icon.as_deref().map(|p| icons.icon(p)).unwrap_or_default()
            ));
        }
        html.push_str("</div>");
    }

    if let Some(note) = &footer.footer_note {
        html.push_str(note);
    }

    html
}

/// Render the configured footer into `#footer`. Leaves the host markup alone
/// when the configuration has no footer section.
pub async fn mount_footer(app: &App) {
    let config = app.config();
    let Some(footer) = &config.footer else {
        return;
    };

    let icons = resolve_icons(&app.svg_cache, app.fetcher.as_ref(), config.footer_icons()).await;
    dom::set_content("footer", &render_footer(footer, &icons));
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::global_config::SocialLink;

    #[test]
    fn test_footer_sections_in_order() {
        let footer = FooterConfig {
            copyright: Some("© 2025 Jane".into()),
            links: vec![SocialLink {
                name: "Mail".into(),
                url: "mailto:jane@example.com".into(),
                icon: Some("✉️".into()),
            }],
            footer_note: Some("<small>Built with Rust</small>".into()),
        };
        let html = render_footer(&footer, &IconTable::default());
        assert_eq!(
            html,
            concat!(
                "<p>© 2025 Jane</p>",
                r#"<div class="social-links"><a href="mailto:jane@example.com" target="_blank" rel="noopener noreferrer" title="Mail" class="svg-icon">✉️</a></div>"#,
                "<small>Built with Rust</small>"
            )
        );
    }

    #[test]
    fn test_empty_footer() {
        assert_eq!(render_footer(&FooterConfig::default(), &IconTable::default()), "");
    }
}
