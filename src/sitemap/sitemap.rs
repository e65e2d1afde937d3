use eyre::{ensure, Result};
use url::Url;

use crate::Catalog;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How often a page is expected to change.
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// A single `<url>` entry of the sitemap.
pub struct SitemapEntry {
    /// Absolute URL of the page.
    pub loc: Url,
    pub change_frequency: ChangeFrequency,
    /// Relative priority between 0.0 and 1.0.
    pub priority: f32,
}

/// Pages that exist regardless of what the catalog holds.
const STATIC_PAGES: [(&str, ChangeFrequency, f32); 4] = [
    ("/", ChangeFrequency::Weekly, 1.0),
    ("/products", ChangeFrequency::Weekly, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.5),
    ("/contact", ChangeFrequency::Monthly, 0.5),
];

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// Every routable page of the storefront.
///
/// Use `Sitemap::build` to enumerate the pages for a catalog.
pub struct Sitemap {
    /// Origin all entries are relative to.
    pub base_url: Url,
    /// Static pages, then one entry per category, then one per product.
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Lists the pages of the storefront served from `base_url`.
    ///
    /// `base_url` must be a bare origin such as `https://www.crunchwise.in`;
    /// a storefront mounted under a path prefix is rejected.
    ///
    /// ```rust
    /// use snack_catalog::{Catalog, Sitemap};
    ///
    /// # fn main() -> eyre::Result<()> {
    /// let catalog = Catalog::snacks()?;
    /// let sitemap = Sitemap::build(&catalog, "https://www.crunchwise.in")?;
    /// assert!(sitemap
    ///     .entries
    ///     .iter()
    ///     .any(|entry| entry.loc.as_str() == "https://www.crunchwise.in/products/makhana01"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(catalog: &Catalog, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        ensure!(
            !base_url.cannot_be_a_base() && base_url.has_host(),
            "Base URL `{}` has no host",
            base_url
        );
        ensure!(
            base_url.path() == "/" && base_url.query().is_none(),
            "Base URL `{}` must be an origin without path or query",
            base_url
        );

        let mut entries = Vec::new();
        for (path, change_frequency, priority) in STATIC_PAGES {
            entries.push(SitemapEntry {
                loc: base_url.join(path)?,
                change_frequency,
                priority,
            });
        }

        for category in catalog.categories() {
            let mut loc = base_url.join("/products")?;
            loc.query_pairs_mut().append_pair("category", &category.id);
            entries.push(SitemapEntry {
                loc,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.8,
            });
        }

        for product in catalog.products() {
            let mut loc = base_url.join("/products")?;
            // push_segment escapes ids that are not URL safe
            if let Ok(mut segments) = loc.path_segments_mut() {
                segments.push(&product.id);
            }
            entries.push(SitemapEntry {
                loc,
                change_frequency: ChangeFrequency::Monthly,
                priority: 0.7,
            });
        }

        Ok(Sitemap { base_url, entries })
    }

    /// Renders the `urlset` XML document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    \
                 <priority>{:.1}</priority>\n  </url>\n",
                escape_xml(entry.loc.as_str()),
                entry.change_frequency.as_str(),
                entry.priority
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Product, ProductSize};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Product {
                id: "chips02".into(),
                category: "Chips".into(),
                sizes: vec![ProductSize {
                    size: "55g".into(),
                    price: 70.0,
                }],
                ..Default::default()
            }],
            vec![Category {
                id: "chips & dips".into(),
                name: "Chips".into(),
                ..Default::default()
            }],
        )
        .unwrap()
    }

    #[test]
    fn entries_in_order() {
        let sitemap = Sitemap::build(&catalog(), "https://example.com/").unwrap();
        let locs: Vec<_> = sitemap.entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://example.com/",
                "https://example.com/products",
                "https://example.com/about",
                "https://example.com/contact",
                "https://example.com/products?category=chips+%26+dips",
                "https://example.com/products/chips02",
            ]
        );
    }

    #[test]
    fn product_ids_are_escaped() {
        let mut catalog = catalog().products().to_vec();
        catalog[0].id = "a/b c".into();
        let catalog = Catalog::new(
            catalog,
            vec![Category {
                id: "chips".into(),
                name: "Chips".into(),
                ..Default::default()
            }],
        )
        .unwrap();
        let sitemap = Sitemap::build(&catalog, "https://example.com").unwrap();
        assert_eq!(
            sitemap.entries.last().unwrap().loc.as_str(),
            "https://example.com/products/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(Sitemap::build(&catalog(), "not a url").is_err());
        assert!(Sitemap::build(&catalog(), "mailto:shop@example.com").is_err());
    }

    #[test]
    fn rejects_base_url_with_path_prefix() {
        let err = Sitemap::build(&catalog(), "https://example.com/shop/").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Base URL `https://example.com/shop/` must be an origin without path or query"
        );
        assert!(Sitemap::build(&catalog(), "https://example.com/?ref=ads").is_err());
    }

    #[test]
    fn xml_escapes_locations() {
        let xml = Sitemap::build(&catalog(), "https://example.com")
            .unwrap()
            .to_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("<loc>https://example.com/products?category=chips+%26+dips</loc>"));
        assert!(xml.contains(
            "<changefreq>monthly</changefreq>\n    <priority>0.7</priority>"
        ));
        assert!(xml.ends_with("</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), 6);
    }

    #[test]
    fn escape_xml_special_characters() {
        assert_eq!(escape_xml("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&apos;");
    }
}
