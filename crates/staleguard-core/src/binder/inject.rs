//! Markup injection: inserts the watcher script tag before `</body>`.
//!
//! Same placement rule as a live-reload injector, minus the fallbacks:
//! a page without a closing body tag is left alone.

const BODY_CLOSE: &str = "</body>";

/// Outcome of trying to add the watcher tag to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
    /// The tag was inserted; carries the new markup.
    Inserted(String),
    /// The exact tag is already in the page (re-run on the same output).
    AlreadyPresent,
    /// No `</body>` to anchor on.
    MissingBody,
}

/// `<script async src="..."></script>`
pub fn script_tag(src: &str) -> String {
    format!(r#"<script async src="{}"></script>"#, src)
}

/// Insert the watcher tag immediately before the last `</body>`.
pub fn inject_script(html: &str, src: &str) -> Injection {
    let tag = script_tag(src);
    if html.contains(&tag) {
        return Injection::AlreadyPresent;
    }

    match html.rfind(BODY_CLOSE) {
        Some(pos) => Injection::Inserted(format!(
            "{}  {}\n  {}",
            &html[..pos],
            tag,
            &html[pos..]
        )),
        None => Injection::MissingBody,
    }
}
