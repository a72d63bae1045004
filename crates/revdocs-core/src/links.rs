//! Static `EXTERNAL_LINKS.md` writer.

use std::path::{Path, PathBuf};

use crate::catalog::{ExternalLink, EXTERNAL_LINKS, EXTERNAL_LINKS_FILE};
use crate::error::FetchError;
use crate::storage;

/// Renders one markdown bullet: bold label, hard line break, indented URL.
fn render_entry(link: &ExternalLink) -> String {
    format!("- **{}**  \n  {}", link.label, link.url)
}

/// Renders the links file body. Entries are separated by a single newline;
/// there is no trailing newline.
pub fn render_external_links(links: &[ExternalLink]) -> String {
    links
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `EXTERNAL_LINKS.md` under `base_dir`, creating the directory if
/// needed and replacing any previous file. Returns the written path.
pub fn write_external_links(base_dir: &Path) -> Result<PathBuf, FetchError> {
    storage::ensure_dir(base_dir)?;
    let path = base_dir.join(EXTERNAL_LINKS_FILE);
    let body = render_external_links(EXTERNAL_LINKS);
    storage::write_replace(&path, body.as_bytes())?;
    tracing::info!("wrote {} ({} links)", path.display(), EXTERNAL_LINKS.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_two_entries() {
        let links = [
            ExternalLink {
                label: "A",
                url: "https://a.example/",
            },
            ExternalLink {
                label: "B",
                url: "https://b.example/",
            },
        ];
        assert_eq!(
            render_external_links(&links),
            "- **A**  \n  https://a.example/\n- **B**  \n  https://b.example/"
        );
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_external_links(&[]), "");
    }

    #[test]
    fn builtin_rendering_starts_and_ends_as_expected() {
        let text = render_external_links(EXTERNAL_LINKS);
        assert!(text.starts_with(
            "- **Salesforce Developer Documentation**  \n  https://help.salesforce.com/s/products/platform?language=en_US\n"
        ));
        assert!(text.ends_with("https://www.sefl.com/seflWebsite/technology/webConnect.jsp"));
        assert_eq!(text.lines().count(), EXTERNAL_LINKS.len() * 2);
    }

    #[test]
    fn write_is_deterministic_and_creates_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("docs").join("Revenova Docs");
        let path = write_external_links(&base).unwrap();
        assert_eq!(path, base.join("EXTERNAL_LINKS.md"));
        let first = std::fs::read(&path).unwrap();
        write_external_links(&base).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, render_external_links(EXTERNAL_LINKS).into_bytes());
    }

    #[test]
    fn write_overwrites_stale_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXTERNAL_LINKS_FILE);
        std::fs::write(&path, "stale content that is longer than nothing at all ".repeat(100)).unwrap();
        write_external_links(dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render_external_links(EXTERNAL_LINKS)
        );
    }
}
